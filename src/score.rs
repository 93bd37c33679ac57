//! Best completion time tracking.
//!
//! The engine only reports how long a won round took
//! ([`Game::completion_time`]). Keeping the personal best is up to a
//! [`ScoreStore`], which hosts back with whatever persistence they have.

use alloc::string::{String, ToString};
use core::time::Duration;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use log::debug;

use crate::clock::Clock;
use crate::game::Game;

/// Key under which the best completion time is stored.
pub const BEST_TIME_KEY: &str = "best completion time";

/// A key-value store for recorded times.
pub trait ScoreStore {
    /// Returns the time stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Duration>;

    /// Stores `time` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, time: Duration);
}

/// An in-memory [`ScoreStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    times: HashMap<String, Duration>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Duration> {
        self.times.get(key).copied()
    }

    fn set(&mut self, key: &str, time: Duration) {
        self.times.insert(key.to_string(), time);
    }
}

/// Result of checking a finished round against the stored best.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestTime {
    /// The time just achieved.
    pub current: Duration,
    /// The best time before this round, if one was recorded.
    pub previous: Option<Duration>,
}

impl BestTime {
    /// Returns whether the current time beat the previous record.
    ///
    /// The first recorded time always counts as an improvement.
    #[must_use]
    pub fn improved(&self) -> bool {
        self.previous.is_none_or(|previous| self.current < previous)
    }

    /// Returns the best time after this round.
    #[must_use]
    pub fn best(&self) -> Duration {
        self.previous
            .map_or(self.current, |previous| previous.min(self.current))
    }
}

/// Compares `time` with the stored best and saves it if it is faster.
///
/// A stored best of zero is a real record, not a missing one.
pub fn record_completion<S: ScoreStore + ?Sized>(store: &mut S, time: Duration) -> BestTime {
    let result = BestTime {
        current: time,
        previous: store.get(BEST_TIME_KEY),
    };
    if result.improved() {
        debug!("new best time: {time:?}");
        store.set(BEST_TIME_KEY, time);
    }
    result
}

impl<C: Clock> Game<C> {
    /// Records the winning time in `store` if the player won the round.
    ///
    /// Returns `None` when the round is still running or was not won by the
    /// player.
    pub fn record_best<S: ScoreStore + ?Sized>(&self, store: &mut S) -> Option<BestTime> {
        self.completion_time()
            .map(|time| record_completion(store, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_time_is_a_record() {
        let mut store = MemoryStore::new();
        let result = record_completion(&mut store, Duration::from_secs(30));
        assert_eq!(result.previous, None);
        assert!(result.improved());
        assert_eq!(store.get(BEST_TIME_KEY), Some(Duration::from_secs(30)));
    }

    #[test]
    fn only_faster_times_replace_the_record() {
        let mut store = MemoryStore::new();
        record_completion(&mut store, Duration::from_secs(30));

        let slower = record_completion(&mut store, Duration::from_secs(45));
        assert!(!slower.improved());
        assert_eq!(slower.best(), Duration::from_secs(30));
        assert_eq!(store.get(BEST_TIME_KEY), Some(Duration::from_secs(30)));

        let tie = record_completion(&mut store, Duration::from_secs(30));
        assert!(!tie.improved());

        let faster = record_completion(&mut store, Duration::from_secs(12));
        assert!(faster.improved());
        assert_eq!(faster.previous, Some(Duration::from_secs(30)));
        assert_eq!(store.get(BEST_TIME_KEY), Some(Duration::from_secs(12)));
    }

    #[test]
    fn zero_is_a_stored_record() {
        let mut store = MemoryStore::new();
        store.set(BEST_TIME_KEY, Duration::ZERO);

        let result = record_completion(&mut store, Duration::from_millis(1));
        assert_eq!(result.previous, Some(Duration::ZERO));
        assert!(!result.improved());
        assert_eq!(store.get(BEST_TIME_KEY), Some(Duration::ZERO));
    }
}
