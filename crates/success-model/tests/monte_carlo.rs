// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Cross-check the closed-form model against simulated RLNC decoding.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rlnc_galois::{rank, GaloisField};
use rlnc_success_model::{rank_success_probability, success_rate};

fn random_rows(rng: &mut ChaCha8Rng, field: &GaloisField, rows: u32, cols: u32) -> Vec<Vec<u8>> {
    let order = field.order() as u16;
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(0..order) as u8).collect())
        .collect()
}

#[test]
fn rank_probability_matches_simulation_over_gf4() {
    let field = GaloisField::new(2, 0b111, 2).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    let trials = 20_000;

    for (m, n) in [(4u32, 4u32), (5, 4), (6, 4)] {
        let full_rank = (0..trials)
            .filter(|_| rank(&field, &random_rows(&mut rng, &field, m, n)).unwrap() == n as usize)
            .count();
        let observed = full_rank as f64 / trials as f64;
        let predicted = rank_success_probability(m, n, 0, 4).unwrap();
        assert!(
            (observed - predicted).abs() < 0.015,
            "m={m} n={n} observed={observed} predicted={predicted}"
        );
    }
}

#[test]
fn success_rate_matches_lossy_channel_simulation() {
    let field = GaloisField::new(2, 0b111, 2).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let (n, total, eps) = (4u32, 7u32, 0.25);
    let trials = 20_000;

    let decoded = (0..trials)
        .filter(|_| {
            let received = (0..total).filter(|_| rng.gen::<f64>() >= eps).count() as u32;
            received >= n
                && rank(&field, &random_rows(&mut rng, &field, received, n)).unwrap()
                    == n as usize
        })
        .count();
    let observed = decoded as f64 / trials as f64;
    let predicted = success_rate(n, total, eps, 0, 4).unwrap();

    assert!(
        (observed - predicted.p_success).abs() < 0.015,
        "observed={observed} predicted={}",
        predicted.p_success
    );
    assert!(predicted.p_success < predicted.p_success_perfect);
}
