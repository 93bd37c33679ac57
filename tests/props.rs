//! Property tests for round flow.
//!
//! Random command sequences are fed to a seeded game and the card
//! invariants are checked after every step.

use colormatch::{Card, DECK_SIZE, Game, GameOptions, GameState, ManualClock};
use proptest::prelude::*;

fn piles(game: &Game<ManualClock>) -> (Vec<Card>, Vec<Card>, Vec<Card>, Vec<Card>) {
    (
        game.deck.clone(),
        game.player_hand.clone(),
        game.computer_hand.clone(),
        game.discard.clone(),
    )
}

/// Checks that whatever landed on the discard pile matched the card below.
fn assert_legal_discard(before: &[Card], after: &[Card]) -> Result<(), TestCaseError> {
    prop_assert!(!after.is_empty(), "discard pile emptied");
    if after.len() > before.len() {
        prop_assert_eq!(after.len(), before.len() + 1, "more than one card played");
        let (top, below) = (after[after.len() - 1], after[after.len() - 2]);
        prop_assert!(top.matches(&below), "{} played on {}", top, below);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: no card is ever created or lost, and every play is legal.
    #[test]
    fn prop_cards_are_conserved(
        seed in any::<u64>(),
        moves in prop::collection::vec(0usize..12, 1..300),
    ) {
        let mut game = Game::with_clock(GameOptions::default(), seed, ManualClock::new()).unwrap();
        game.start_round();

        for choice in moves {
            if game.state().is_terminal() {
                game.start_round();
                prop_assert_eq!(game.discard.len(), 1);
            }

            let before = piles(&game);
            let state = game.state();

            // 0 draws; anything else tries a hand index, often an illegal one.
            if choice == 0 {
                prop_assert!(game.draw().is_ok());
            } else if game.play(choice - 1).is_err() {
                prop_assert_eq!(piles(&game), before.clone());
                prop_assert_eq!(game.state(), state);
                continue;
            }
            prop_assert_eq!(game.card_count(), DECK_SIZE);
            assert_legal_discard(&before.3, &game.discard)?;

            if game.state() == GameState::ComputerTurn {
                let before = piles(&game);
                let turn = game.computer_turn().unwrap();
                prop_assert_eq!(game.card_count(), DECK_SIZE);
                assert_legal_discard(&before.3, &game.discard)?;

                let hand_before = before.2.len() as isize;
                let hand_after = game.computer_hand.len() as isize;
                let expected = isize::from(turn.drawn.is_some()) - isize::from(turn.played.is_some());
                prop_assert_eq!(hand_after - hand_before, expected);
            }
        }
    }

    /// Property: a computer with no match draws exactly one card, then
    /// either plays one card or passes.
    #[test]
    fn prop_computer_draw_plays_at_most_once(seed in any::<u64>(), draws in 0usize..20) {
        let mut game = Game::with_clock(GameOptions::default(), seed, ManualClock::new()).unwrap();
        game.start_round();

        for _ in 0..draws {
            if game.state() != GameState::PlayerTurn {
                break;
            }
            game.draw().unwrap();
            if game.state() == GameState::ComputerTurn {
                let top = game.top().unwrap();
                let stuck = !game.computer_hand.iter().any(|card| card.matches(&top));
                let deck_before = game.deck.len();
                let hand_before = game.computer_hand.len();
                let discard_before = game.discard.len();

                let turn = game.computer_turn().unwrap();

                // An empty deck is refilled from everything under the top card.
                let reshuffles = deck_before == 0 && discard_before > 1;
                let can_draw = deck_before > 0 || reshuffles;
                let (deck_pool, discard_base) = if reshuffles {
                    (discard_before - 1, 1)
                } else {
                    (deck_before, discard_before)
                };

                if stuck && can_draw {
                    prop_assert!(turn.drawn.is_some());
                    prop_assert_eq!(game.deck.len(), deck_pool - 1);
                    match turn.played {
                        Some(played) => {
                            prop_assert_eq!(Some(played), turn.drawn);
                            prop_assert_eq!(game.computer_hand.len(), hand_before);
                            prop_assert_eq!(game.discard.len(), discard_base + 1);
                        }
                        None => {
                            prop_assert_eq!(game.computer_hand.len(), hand_before + 1);
                            prop_assert_eq!(game.discard.len(), discard_base);
                        }
                    }
                } else if stuck {
                    prop_assert!(turn.drawn.is_none());
                    prop_assert!(turn.passed());
                    prop_assert_eq!(game.computer_hand.len(), hand_before);
                } else {
                    prop_assert!(turn.drawn.is_none());
                    prop_assert!(turn.played.is_some());
                }
            }
        }
    }
}
