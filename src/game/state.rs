//! Game state types.

use alloc::vec::Vec;
use core::time::Duration;

use crate::card::Card;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round has been dealt yet.
    #[default]
    NotStarted,
    /// Waiting for the player to play or draw.
    PlayerTurn,
    /// Waiting for the computer to move.
    ComputerTurn,
    /// The player emptied their hand.
    PlayerWon,
    /// The computer emptied its hand.
    ComputerWon,
}

impl GameState {
    /// Returns who is to move, or `None` outside a running round.
    #[must_use]
    pub const fn turn(self) -> Option<Participant> {
        match self {
            Self::PlayerTurn => Some(Participant::Player),
            Self::ComputerTurn => Some(Participant::Computer),
            _ => None,
        }
    }

    /// Returns the winner once the round has ended.
    #[must_use]
    pub const fn winner(self) -> Option<Participant> {
        match self {
            Self::PlayerWon => Some(Participant::Player),
            Self::ComputerWon => Some(Participant::Computer),
            _ => None,
        }
    }

    /// Returns whether the round has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.winner().is_some()
    }
}

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

/// What the computer did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComputerMove {
    /// Card drawn because nothing in hand matched.
    pub drawn: Option<Card>,
    /// Card placed on the discard pile.
    pub played: Option<Card>,
}

impl ComputerMove {
    /// Returns whether the computer ended its turn without playing.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.played.is_none()
    }
}

/// Read-only view of a round for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current state.
    pub state: GameState,
    /// The player's cards, in display order.
    pub player_hand: Vec<Card>,
    /// Number of cards the computer holds.
    pub computer_cards: usize,
    /// Top of the discard pile, if a round has been dealt.
    pub top: Option<Card>,
    /// Cards left in the deck.
    pub deck_remaining: usize,
    /// Time since the round started, frozen once it ends.
    pub elapsed: Duration,
}

impl Snapshot {
    /// Returns who is to move.
    #[must_use]
    pub const fn turn(&self) -> Option<Participant> {
        self.state.turn()
    }

    /// Returns the winner once the round has ended.
    #[must_use]
    pub const fn winner(&self) -> Option<Participant> {
        self.state.winner()
    }
}
