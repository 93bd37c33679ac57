use log::trace;

use crate::clock::Clock;
use crate::error::CommandError;

use super::{Game, Snapshot};

/// A request from the input side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Play the card at this hand index.
    PlayCard(usize),
    /// Draw a card and pass.
    Draw,
    /// Throw the current round away and deal a new one.
    Restart,
}

impl<C: Clock> Game<C> {
    /// Applies a player command and returns the resulting view.
    ///
    /// The computer's reply is not run here; schedule it with a
    /// [`ComputerScheduler`](crate::ComputerScheduler) or call
    /// [`Game::computer_turn`] directly.
    ///
    /// # Errors
    ///
    /// Returns the play or draw error when the command is rejected. The game
    /// is unchanged in that case.
    pub fn dispatch(&mut self, command: Command) -> Result<Snapshot, CommandError> {
        trace!("dispatch {command:?}");
        match command {
            Command::PlayCard(index) => {
                self.play(index)?;
            }
            Command::Draw => {
                self.draw()?;
            }
            Command::Restart => return Ok(self.start_round()),
        }
        Ok(self.snapshot())
    }
}
