//! Game engine and state management.

use core::time::Duration;

use alloc::vec::Vec;
use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{self, Card, DECK_SIZE};
use crate::clock::Clock;
#[cfg(feature = "std")]
use crate::clock::SystemClock;
use crate::error::{OptionsError, ReshuffleError};
use crate::options::GameOptions;

mod command;
mod computer;
mod player;
pub mod state;

pub use command::Command;
pub use state::{ComputerMove, GameState, Participant, Snapshot};

/// A matching game between the player and a computer opponent.
///
/// The game owns the deck, both hands, the discard pile, and the round
/// timer. The piles are public so hosts and tests can inspect them; every
/// operation keeps the total number of cards at [`DECK_SIZE`].
pub struct Game<C> {
    /// Cards left to draw. The last element is the top of the deck.
    pub deck: Vec<Card>,
    /// The player's hand.
    pub player_hand: Vec<Card>,
    /// The computer's hand.
    pub computer_hand: Vec<Card>,
    /// Played cards. The last element is the card to match.
    pub discard: Vec<Card>,
    options: GameOptions,
    state: GameState,
    rng: ChaCha8Rng,
    clock: C,
    started_at: Option<Duration>,
    finished_at: Option<Duration>,
}

#[cfg(feature = "std")]
impl Game<SystemClock> {
    /// Creates a new game timed by the system clock.
    ///
    /// No cards are dealt until [`Game::start_round`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use colormatch::{Game, GameOptions, GameState};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42).unwrap();
    /// game.start_round();
    /// assert_eq!(game.state(), GameState::PlayerTurn);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::with_clock(options, seed, SystemClock::new())
    }
}

impl<C: Clock> Game<C> {
    /// Creates a new game timed by `clock`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation.
    pub fn with_clock(options: GameOptions, seed: u64, clock: C) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(Self {
            deck: Vec::new(),
            player_hand: Vec::new(),
            computer_hand: Vec::new(),
            discard: Vec::new(),
            options,
            state: GameState::NotStarted,
            rng: ChaCha8Rng::seed_from_u64(seed),
            clock,
            started_at: None,
            finished_at: None,
        })
    }

    /// Deals a fresh round.
    ///
    /// Builds and shuffles a full deck, deals the hands one card at a time
    /// (player first), turns one card onto the discard pile, and gives the
    /// first turn to the player. Any round in progress is thrown away.
    pub fn start_round(&mut self) -> Snapshot {
        let mut deck = card::full_deck();
        card::shuffle(&mut deck, &mut self.rng);

        let hand_size = self.options.hand_size;
        let mut player_hand = Vec::with_capacity(hand_size);
        let mut computer_hand = Vec::with_capacity(hand_size);
        for _ in 0..hand_size {
            player_hand.extend(deck.pop());
            computer_hand.extend(deck.pop());
        }
        let discard: Vec<Card> = deck.pop().into_iter().collect();

        self.deck = deck;
        self.player_hand = player_hand;
        self.computer_hand = computer_hand;
        self.discard = discard;
        self.state = GameState::PlayerTurn;
        self.started_at = Some(self.clock.now());
        self.finished_at = None;

        debug!(
            "round started: {} cards each, top {:?}",
            hand_size,
            self.top()
        );

        self.snapshot()
    }

    /// Moves the discard pile, except its top card, back into the deck.
    ///
    /// The recycled cards are shuffled and placed beneath anything still in
    /// the deck. Returns how many cards were recycled.
    ///
    /// # Errors
    ///
    /// Returns an error if the discard pile holds only its top card (or
    /// nothing). The game is left unchanged.
    pub fn reshuffle(&mut self) -> Result<usize, ReshuffleError> {
        if self.discard.len() <= 1 {
            return Err(ReshuffleError::NothingToRecycle);
        }

        let top_index = self.discard.len() - 1;
        let mut recycled: Vec<Card> = self.discard.drain(..top_index).collect();
        card::shuffle(&mut recycled, &mut self.rng);

        let count = recycled.len();
        recycled.append(&mut self.deck);
        self.deck = recycled;

        debug!("reshuffled {count} cards into the deck");
        Ok(count)
    }

    /// Pops the top of the deck, reshuffling the discard pile first if the
    /// deck is empty.
    fn take_from_deck(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            if let Err(err) = self.reshuffle() {
                debug!("nothing to draw: {err}");
                return None;
            }
        }
        self.deck.pop()
    }

    /// Hands the turn over.
    fn end_turn(&mut self, next: GameState) {
        trace!("turn passes: {next:?}");
        self.state = next;
    }

    /// Enters a terminal state and freezes the timer.
    fn finish(&mut self, state: GameState) {
        self.state = state;
        self.finished_at = Some(self.clock.now());
        debug!("round over: {:?} after {:?}", state, self.elapsed());
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the clock timing this game.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns who is to move, or `None` outside a running round.
    pub const fn turn(&self) -> Option<Participant> {
        self.state.turn()
    }

    /// Returns the winner once the round has ended.
    pub const fn winner(&self) -> Option<Participant> {
        self.state.winner()
    }

    /// Returns the card to match.
    ///
    /// Returns `None` only before the first round is dealt.
    pub fn top(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards across every pile and hand.
    ///
    /// Always [`DECK_SIZE`] once a round has been dealt.
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.player_hand.len() + self.computer_hand.len() + self.discard.len()
    }

    /// Returns whether the card count matches a full deck.
    pub fn is_conserved(&self) -> bool {
        self.card_count() == DECK_SIZE
    }

    /// Returns the time since the round started.
    ///
    /// The value stops advancing once the round ends, and is zero before
    /// the first deal.
    pub fn elapsed(&self) -> Duration {
        let Some(started) = self.started_at else {
            return Duration::ZERO;
        };
        let now = self.finished_at.unwrap_or_else(|| self.clock.now());
        now.saturating_sub(started)
    }

    /// Returns [`Game::elapsed`] in fractional seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Returns the winning time if the player won the round.
    pub fn completion_time(&self) -> Option<Duration> {
        (self.state == GameState::PlayerWon).then(|| self.elapsed())
    }

    /// Returns a read-only view of the round.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            player_hand: self.player_hand.clone(),
            computer_cards: self.computer_hand.len(),
            top: self.top(),
            deck_remaining: self.deck.len(),
            elapsed: self.elapsed(),
        }
    }
}
