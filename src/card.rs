//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl Color {
    /// All colors, in deck construction order.
    pub const ALL: [Self; 4] = [Self::Red, Self::Yellow, Self::Green, Self::Blue];

    /// Returns the lowercase name of the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The color of the card.
    pub color: Color,
    /// The face value of the card (0 through 9).
    pub value: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the value. Values outside
    /// `0..=9` are accepted but never appear in a dealt deck.
    #[must_use]
    pub const fn new(color: Color, value: u8) -> Self {
        Self { color, value }
    }

    /// Returns whether this card may be placed on `top`.
    #[must_use]
    pub fn matches(&self, top: &Self) -> bool {
        can_play(*self, *top)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}

/// Highest card value.
pub const MAX_VALUE: u8 = 9;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = Color::ALL.len() * (MAX_VALUE as usize + 1);

/// Returns whether `card` may be placed on `top`.
///
/// A card matches when it shares the color or the value of the top card.
/// Either one is enough.
#[must_use]
pub fn can_play(card: Card, top: Card) -> bool {
    card.color == top.color || card.value == top.value
}

/// Builds an unshuffled deck holding every color/value combination once.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        for value in 0..=MAX_VALUE {
            cards.push(Card::new(color, value));
        }
    }
    cards
}

/// Shuffles `items` in place with a Fisher-Yates pass.
///
/// Walks from the last index down to 1 and swaps each element with a
/// uniformly chosen element at or below it, so every permutation is equally
/// likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn full_deck_has_every_pair_once() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        for color in Color::ALL {
            for value in 0..=MAX_VALUE {
                let count = deck
                    .iter()
                    .filter(|card| **card == Card::new(color, value))
                    .count();
                assert_eq!(count, 1);
            }
        }
    }

    #[test]
    fn matching_needs_color_or_value() {
        let top = Card::new(Color::Red, 5);
        assert!(can_play(Card::new(Color::Red, 1), top));
        assert!(can_play(Card::new(Color::Blue, 5), top));
        assert!(can_play(Card::new(Color::Red, 5), top));
        assert!(!can_play(Card::new(Color::Green, 3), top));
        assert!(Card::new(Color::Blue, 5).matches(&top));
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut deck = full_deck();
        shuffle(&mut deck, &mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        assert_ne!(deck, full_deck());

        let mut sorted = deck.clone();
        sorted.sort_by_key(|card| (card.color, card.value));
        assert_eq!(sorted, full_deck());
    }

    #[test]
    fn shuffle_handles_short_slices() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut single = [7_u8];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, [7]);
    }

    #[test]
    fn display_names_color_and_value() {
        assert_eq!(Card::new(Color::Yellow, 7).to_string(), "yellow 7");
    }
}
