//! Pacing for the computer's reply.
//!
//! The engine computes the computer's move instantly. Hosts that want a
//! visible pause between the player's move and the reply keep a
//! [`ComputerScheduler`] next to the game and poll it from their event loop
//! or timer. The delay never changes what the computer does.

use core::time::Duration;

use log::debug;

use crate::clock::Clock;
use crate::game::{ComputerMove, Game, GameState};
use crate::options::GameOptions;

/// Fires the computer's turn once a fixed delay has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerScheduler {
    delay: Duration,
    due: Option<Duration>,
}

impl ComputerScheduler {
    /// Creates a scheduler with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, due: None }
    }

    /// Creates a scheduler using the delay from `options`.
    #[must_use]
    pub const fn from_options(options: &GameOptions) -> Self {
        Self::new(options.computer_delay)
    }

    /// Returns the configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns when the computer is due to move, if armed.
    #[must_use]
    pub const fn due(&self) -> Option<Duration> {
        self.due
    }

    /// Arms the scheduler so the computer moves `delay` after `now`.
    pub const fn arm(&mut self, now: Duration) {
        self.due = Some(now.saturating_add(self.delay));
    }

    /// Disarms the scheduler.
    pub const fn cancel(&mut self) {
        self.due = None;
    }

    /// Returns whether the armed deadline has been reached.
    #[must_use]
    pub fn is_due(&self, now: Duration) -> bool {
        self.due.is_some_and(|due| now >= due)
    }

    /// Runs the computer's turn if it is due.
    ///
    /// When the game is waiting on the computer and the scheduler is not
    /// armed yet, it is armed from the game's clock and nothing happens
    /// until a later poll. When the game is not waiting on the computer the
    /// scheduler is disarmed.
    pub fn poll<C: Clock>(&mut self, game: &mut Game<C>) -> Option<ComputerMove> {
        if game.state() != GameState::ComputerTurn {
            self.cancel();
            return None;
        }

        let now = game.clock().now();
        if self.due.is_none() {
            self.arm(now);
        }
        if !self.is_due(now) {
            return None;
        }

        self.cancel();
        match game.computer_turn() {
            Ok(turn) => Some(turn),
            Err(err) => {
                debug!("scheduled computer turn skipped: {err}");
                None
            }
        }
    }
}

impl Default for ComputerScheduler {
    fn default() -> Self {
        Self::from_options(&GameOptions::default())
    }
}
