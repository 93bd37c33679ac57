//! A color/value matching card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a round between the player
//! and a computer opponent: dealing, legal-move checks, drawing with
//! discard-pile recycling, the computer's reply, win detection, and round
//! timing. Rendering and input live outside the engine; they read
//! [`Snapshot`]s and send [`Command`]s.
//!
//! # Example
//!
//! ```
//! use colormatch::{Command, Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! let view = game.start_round();
//! assert_eq!(view.player_hand.len(), 7);
//!
//! let view = game.dispatch(Command::Draw).unwrap();
//! assert_eq!(view.state, GameState::ComputerTurn);
//! game.computer_turn().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod clock;
pub mod error;
pub mod game;
pub mod options;
pub mod schedule;
pub mod score;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, can_play, shuffle};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use error::{
    CommandError, ComputerError, DrawError, OptionsError, PlayError, ReshuffleError,
};
pub use game::{Command, ComputerMove, Game, GameState, Participant, Snapshot};
pub use options::GameOptions;
pub use schedule::ComputerScheduler;
pub use score::{BEST_TIME_KEY, BestTime, MemoryStore, ScoreStore, record_completion};
