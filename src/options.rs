//! Game configuration options.

use core::time::Duration;

use crate::card::DECK_SIZE;
use crate::error::OptionsError;

/// Configuration options for a matching game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use colormatch::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(5)
///     .with_computer_delay(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards dealt to each hand.
    pub hand_size: usize,
    /// Pause before the computer moves. Only used for pacing.
    pub computer_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 7,
            computer_delay: Duration::from_millis(500),
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each hand.
    ///
    /// # Example
    ///
    /// ```
    /// use colormatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(3);
    /// assert_eq!(options.hand_size, 3);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the pause before the computer moves.
    #[must_use]
    pub const fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay = delay;
        self
    }

    /// Largest hand size that still leaves a card for the discard pile.
    #[must_use]
    pub const fn max_hand_size() -> usize {
        (DECK_SIZE - 1) / 2
    }

    /// Checks that the options describe a dealable round.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand size is zero or too large for both hands
    /// and the seed card to come out of one deck.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.hand_size == 0 {
            return Err(OptionsError::ZeroHandSize);
        }
        if self.hand_size > Self::max_hand_size() {
            return Err(OptionsError::HandSizeTooLarge(self.hand_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_deal() {
        let options = GameOptions::default();
        assert_eq!(options.hand_size, 7);
        assert_eq!(options.computer_delay, Duration::from_millis(500));
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn builder_sets_fields() {
        let options = GameOptions::default()
            .with_hand_size(19)
            .with_computer_delay(Duration::ZERO);
        assert_eq!(options.hand_size, 19);
        assert_eq!(options.computer_delay, Duration::ZERO);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_undealable_sizes() {
        assert_eq!(
            GameOptions::default().with_hand_size(0).validate(),
            Err(OptionsError::ZeroHandSize)
        );
        assert_eq!(
            GameOptions::default().with_hand_size(20).validate(),
            Err(OptionsError::HandSizeTooLarge(20))
        );
    }
}
