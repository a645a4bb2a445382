//! Synthetic sequence generation with bounded consecutive deltas.
//!
//! Both patterns walk from 0 and reflect off the ends of the value range
//! instead of overflowing:
//!
//! - [`DeltaPattern::BoundedRandom`] steps by a magnitude drawn uniformly from
//!   `[0, bound]`, exercising the variable-width paths of the encoder.
//! - [`DeltaPattern::Constant`] always steps by exactly `bound`, the most
//!   compressible input the encoding can see.
//!
//! A bound larger than the width's `MAX` is clamped to `MAX`; a step of that
//! size away from the nearer extreme always stays in range.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::codec::DeltaValue;

/// Shape of the deltas between consecutive generated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaPattern {
    BoundedRandom,
    Constant,
}

impl fmt::Display for DeltaPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaPattern::BoundedRandom => f.write_str("pseudorandom delta"),
            DeltaPattern::Constant => f.write_str("constant delta"),
        }
    }
}

/// Generates `value_count` values whose consecutive differences never exceed
/// `delta_bound` in magnitude.
///
/// The result depends only on the arguments: `seed` drives the pseudorandom
/// pattern and is ignored by the constant one.
pub fn generate<V: DeltaValue>(
    pattern: DeltaPattern,
    value_count: usize,
    delta_bound: u64,
    seed: u64,
) -> Vec<V> {
    let bound = i128::from(delta_bound).min(V::MAX);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut out = Vec::with_capacity(value_count);
    let mut value: i128 = 0;
    let mut direction: i128 = 1;

    for i in 0..value_count {
        out.push(V::from_i128(value));
        if i + 1 == value_count {
            break;
        }

        // Turn around when a full step toward the nearer extreme could overflow.
        if direction > 0 && value > V::MAX - bound {
            direction = -1;
        } else if direction < 0 && value < V::MIN + bound {
            direction = 1;
        }

        let magnitude = match pattern {
            DeltaPattern::Constant => bound,
            DeltaPattern::BoundedRandom => i128::from(rng.random_range(0..=bound as u64)),
        };
        value += direction * magnitude;
    }

    out
}
