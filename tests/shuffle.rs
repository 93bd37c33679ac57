//! Statistical checks for the deck shuffle.

use std::collections::HashMap;

use colormatch::shuffle;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Chi-square critical value for 5 degrees of freedom at p = 0.001.
const CHI_SQUARE_5_DF: f64 = 20.515;

#[test]
fn shuffle_orderings_are_uniform() {
    const TRIALS: usize = 60_000;

    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();

    for _ in 0..TRIALS {
        let mut items = [0_u8, 1, 2];
        shuffle(&mut items, &mut rng);
        *counts.entry(items).or_default() += 1;
    }

    assert_eq!(counts.len(), 6, "some ordering never appeared");

    #[expect(clippy::cast_precision_loss, reason = "trial counts fit in f64")]
    let expected = TRIALS as f64 / 6.0;
    let chi_square: f64 = counts
        .values()
        .map(|&observed| {
            #[expect(clippy::cast_precision_loss, reason = "trial counts fit in f64")]
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    assert!(
        chi_square < CHI_SQUARE_5_DF,
        "chi-square {chi_square:.2} exceeds {CHI_SQUARE_5_DF}"
    );
}

#[test]
fn every_position_receives_every_card() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut seen = [[false; 4]; 4];

    for _ in 0..1_000 {
        let mut items = [0_usize, 1, 2, 3];
        shuffle(&mut items, &mut rng);
        for (position, &item) in items.iter().enumerate() {
            seen[position][item] = true;
        }
    }

    assert!(seen.iter().flatten().all(|&hit| hit));
}
