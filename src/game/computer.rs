use log::trace;

use crate::clock::Clock;
use crate::error::ComputerError;

use super::{ComputerMove, Game, GameState};

impl<C: Clock> Game<C> {
    /// Runs the computer's turn.
    ///
    /// The computer plays the first matching card in its hand, scanning left
    /// to right. With no match it draws one card (reshuffling if the deck is
    /// empty) and scans once more. At most one card is played; if nothing
    /// matches after the draw the computer keeps the card and passes.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting on the computer.
    pub fn computer_turn(&mut self) -> Result<ComputerMove, ComputerError> {
        if self.state != GameState::ComputerTurn {
            return Err(ComputerError::NotComputerTurn);
        }
        let top = self.top().ok_or(ComputerError::NotComputerTurn)?;

        let mut turn = ComputerMove::default();
        let mut index = self.computer_hand.iter().position(|card| card.matches(&top));

        if index.is_none() {
            if let Some(card) = self.take_from_deck() {
                trace!("computer draws {card}");
                self.computer_hand.push(card);
                turn.drawn = Some(card);
            }
            index = self.computer_hand.iter().position(|card| card.matches(&top));
        }

        if let Some(index) = index {
            let card = self.computer_hand.remove(index);
            self.discard.push(card);
            trace!("computer plays {card} on {top}");
            turn.played = Some(card);
        } else {
            trace!("computer passes");
        }

        if self.computer_hand.is_empty() {
            self.finish(GameState::ComputerWon);
        } else {
            self.end_turn(GameState::PlayerTurn);
        }

        Ok(turn)
    }
}
