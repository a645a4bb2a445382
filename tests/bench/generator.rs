// Integration tests for bench::generator: seeded synthetic sequences.
//
// Covers the length, delta-bound and determinism invariants across both
// widths and the full built-in bound set.

use deltabench::bench::{generate, DeltaPattern};
use deltabench::config::{DELTA_BOUNDS, SEED_DEFAULT};

fn max_step<V: Copy + Into<i128>>(values: &[V]) -> i128 {
    values
        .windows(2)
        .map(|w| (w[1].into() - w[0].into()).abs())
        .max()
        .unwrap_or(0)
}

#[test]
fn length_matches_request_for_every_bound() {
    for &bound in &DELTA_BOUNDS {
        for n in [0usize, 1, 2, 129, 1_000] {
            let seq: Vec<i64> = generate(DeltaPattern::BoundedRandom, n, bound, SEED_DEFAULT);
            assert_eq!(seq.len(), n, "bound {bound}, n {n}");
        }
    }
}

#[test]
fn random_deltas_stay_within_bound_i64() {
    for &bound in &DELTA_BOUNDS {
        let seq: Vec<i64> = generate(DeltaPattern::BoundedRandom, 5_000, bound, 7);
        assert!(max_step(&seq) <= i128::from(bound), "bound {bound}");
    }
}

#[test]
fn random_deltas_stay_within_clamped_bound_i32() {
    for &bound in &DELTA_BOUNDS {
        let seq: Vec<i32> = generate(DeltaPattern::BoundedRandom, 5_000, bound, 7);
        let effective = i128::from(bound).min(i128::from(i32::MAX));
        assert!(max_step(&seq) <= effective, "bound {bound}");
    }
}

#[test]
fn constant_deltas_are_exact_until_reflection() {
    let seq: Vec<i64> = generate(DeltaPattern::Constant, 100, 1_000, SEED_DEFAULT);
    assert!(seq.windows(2).all(|w| (w[1] - w[0]).abs() == 1_000));
    assert_eq!(seq[99], 99_000);
}

#[test]
fn same_seed_same_sequence_different_seed_differs() {
    let a: Vec<i32> = generate(DeltaPattern::BoundedRandom, 2_000, 10_000, 42);
    let b: Vec<i32> = generate(DeltaPattern::BoundedRandom, 2_000, 10_000, 42);
    let c: Vec<i32> = generate(DeltaPattern::BoundedRandom, 2_000, 10_000, 43);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn zero_bound_is_flat() {
    let seq: Vec<i64> = generate(DeltaPattern::BoundedRandom, 64, 0, SEED_DEFAULT);
    assert!(seq.iter().all(|&v| v == 0));
}
