//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when the player plays a card.
///
/// A rejected play never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No round is in progress.
    #[error("no round is in progress")]
    InvalidState,
    /// It is the computer's turn.
    #[error("not the player's turn")]
    NotYourTurn,
    /// The hand index is out of range.
    #[error("no card at hand index {0}")]
    IndexOutOfRange(usize),
    /// The card matches neither the color nor the value of the top card.
    #[error("card does not match the top of the discard pile")]
    Unplayable,
}

/// Errors that can occur when the player draws a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No round is in progress.
    #[error("no round is in progress")]
    InvalidState,
    /// It is the computer's turn.
    #[error("not the player's turn")]
    NotYourTurn,
}

/// Errors that can occur when running the computer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComputerError {
    /// The game is not waiting on the computer.
    #[error("not the computer's turn")]
    NotComputerTurn,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// The discard pile holds nothing beneath its top card.
    #[error("discard pile has nothing to recycle")]
    NothingToRecycle,
}

/// Errors returned when validating [`GameOptions`](crate::GameOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Hands must start with at least one card.
    #[error("hand size must be at least 1")]
    ZeroHandSize,
    /// Two hands plus the seed card do not fit in the deck.
    #[error("hand size {0} leaves no card to seed the discard pile")]
    HandSizeTooLarge(usize),
}

/// Errors that can occur when dispatching a [`Command`](crate::Command).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The play was rejected.
    #[error(transparent)]
    Play(#[from] PlayError),
    /// The draw was rejected.
    #[error(transparent)]
    Draw(#[from] DrawError),
}
