use log::trace;

use crate::card::Card;
use crate::clock::Clock;
use crate::error::{DrawError, PlayError};

use super::{Game, GameState};

impl<C: Clock> Game<C> {
    /// Player action: play the card at `index` onto the discard pile.
    ///
    /// The card must share a color or value with the top card. Emptying the
    /// hand wins the round; otherwise the computer moves next.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running, it is the computer's turn,
    /// `index` is out of range, or the card does not match. A rejected play
    /// leaves the game untouched.
    pub fn play(&mut self, index: usize) -> Result<Card, PlayError> {
        match self.state {
            GameState::PlayerTurn => {}
            GameState::ComputerTurn => return Err(PlayError::NotYourTurn),
            _ => return Err(PlayError::InvalidState),
        }

        let card = *self
            .player_hand
            .get(index)
            .ok_or(PlayError::IndexOutOfRange(index))?;
        let top = self.top().ok_or(PlayError::InvalidState)?;
        if !card.matches(&top) {
            return Err(PlayError::Unplayable);
        }

        self.player_hand.remove(index);
        self.discard.push(card);
        trace!("player plays {card} on {top}");

        if self.player_hand.is_empty() {
            self.finish(GameState::PlayerWon);
        } else {
            self.end_turn(GameState::ComputerTurn);
        }

        Ok(card)
    }

    /// Player action: draw a card and pass the turn.
    ///
    /// An empty deck is refilled from the discard pile first. The drawn card
    /// is kept even if it could be played; playing it takes another turn.
    /// Returns `None` when there was nothing left to draw, in which case the
    /// turn still passes.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running or it is the computer's turn.
    pub fn draw(&mut self) -> Result<Option<Card>, DrawError> {
        match self.state {
            GameState::PlayerTurn => {}
            GameState::ComputerTurn => return Err(DrawError::NotYourTurn),
            _ => return Err(DrawError::InvalidState),
        }

        let card = self.take_from_deck();
        if let Some(card) = card {
            trace!("player draws {card}");
            self.player_hand.push(card);
        }

        self.end_turn(GameState::ComputerTurn);
        Ok(card)
    }

    /// Returns the indices of player cards that match the top card.
    pub fn playable_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let top = self.top();
        self.player_hand
            .iter()
            .enumerate()
            .filter(move |(_, card)| top.is_some_and(|top| card.matches(&top)))
            .map(|(index, _)| index)
    }
}
