//! One timed encode + decode cycle with validation.
//!
//! The clock is read three times: before encode, at the moment the encoded
//! buffer is complete and handed to decode, and after decode. Validation runs
//! outside the timed region.
//!
//! A trial is valid only when the decoded sequence has exactly the input
//! length and every element is equal. Mismatches are logged (capped at
//! `report_limit` examples) and returned to the caller; retrying is the
//! sampler's job, not the driver's.

use std::fmt;

use log::{debug, warn};

use crate::codec::{Codec, DeltaValue};
use crate::timefn::{span_us, Clock, DurationUs, MonotonicClock};

// ── Outcome types ─────────────────────────────────────────────────────────────

/// Timings of one roundtrip that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    pub encode_us: DurationUs,
    pub decode_us: DurationUs,
    /// Size of the encoded buffer.
    pub encoded_bytes: usize,
}

/// One decoded value that differs from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch<V> {
    pub index: usize,
    pub expected: V,
    pub actual: V,
}

/// Why a trial was discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure<V> {
    /// The codec returned a different number of values than requested.
    LengthMismatch { expected: usize, actual: usize },
    /// `count` values differ; `examples` holds the first of them.
    ValueMismatch {
        count: usize,
        examples: Vec<Mismatch<V>>,
    },
    /// The codec reported an error during encode or decode.
    Codec(String),
}

impl<V: fmt::Display> fmt::Display for ValidationFailure<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::LengthMismatch { expected, actual } => {
                write!(f, "decoded {actual} values but expected {expected}")
            }
            ValidationFailure::ValueMismatch { count, .. } => {
                write!(f, "{count} mismatched values")
            }
            ValidationFailure::Codec(msg) => write!(f, "codec error: {msg}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialOutcome<V> {
    Valid(TrialResult),
    Invalid(ValidationFailure<V>),
}

impl<V> TrialOutcome<V> {
    pub fn is_valid(&self) -> bool {
        matches!(self, TrialOutcome::Valid(_))
    }

    pub fn valid(self) -> Option<TrialResult> {
        match self {
            TrialOutcome::Valid(r) => Some(r),
            TrialOutcome::Invalid(_) => None,
        }
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// Runs one roundtrip against the monotonic clock.
pub fn run_once<V, C>(values: &[V], codec: &mut C, report_limit: usize) -> TrialOutcome<V>
where
    V: DeltaValue,
    C: Codec<V> + ?Sized,
{
    run_once_with_clock(values, codec, &MonotonicClock::new(), report_limit)
}

/// Runs one roundtrip, reading timestamps from `clock`.
pub fn run_once_with_clock<V, C, K>(
    values: &[V],
    codec: &mut C,
    clock: &K,
    report_limit: usize,
) -> TrialOutcome<V>
where
    V: DeltaValue,
    C: Codec<V> + ?Sized,
    K: Clock + ?Sized,
{
    let start = clock.now();
    let encoded = match codec.encode(values) {
        Ok(buf) => buf,
        Err(e) => return reject(ValidationFailure::Codec(e.to_string())),
    };
    let encoded_bytes = encoded.len();
    let mid = clock.now();
    let decoded = match codec.decode(encoded, values.len()) {
        Ok(out) => out,
        Err(e) => return reject(ValidationFailure::Codec(e.to_string())),
    };
    let end = clock.now();

    if let Err(failure) = validate(values, &decoded, report_limit) {
        return reject(failure);
    }

    let result = TrialResult {
        encode_us: span_us(start, mid),
        decode_us: span_us(mid, end),
        encoded_bytes,
    };
    debug!(
        "trial ok: encode {}µs, decode {}µs, {} bytes",
        result.encode_us, result.decode_us, result.encoded_bytes
    );
    TrialOutcome::Valid(result)
}

fn reject<V: fmt::Display>(failure: ValidationFailure<V>) -> TrialOutcome<V> {
    warn!("Validation complete. Unsuccessful: {failure}");
    TrialOutcome::Invalid(failure)
}

/// Compares `decoded` against `expected` element by element.
///
/// Logs each of the first `report_limit` mismatches as it is found.
pub fn validate<V: DeltaValue>(
    expected: &[V],
    decoded: &[V],
    report_limit: usize,
) -> Result<(), ValidationFailure<V>> {
    if decoded.len() != expected.len() {
        return Err(ValidationFailure::LengthMismatch {
            expected: expected.len(),
            actual: decoded.len(),
        });
    }

    let mut count = 0usize;
    let mut examples = Vec::new();
    for (index, (&want, &got)) in expected.iter().zip(decoded).enumerate() {
        if want == got {
            continue;
        }
        count += 1;
        if count <= report_limit {
            warn!("Mismatching value #{index} was expected to be {want} but was {got}");
            examples.push(Mismatch {
                index,
                expected: want,
                actual: got,
            });
            if count == report_limit {
                warn!("Too many mismatched values! Omitting output...");
            }
        }
    }

    if count == 0 {
        Ok(())
    } else {
        Err(ValidationFailure::ValueMismatch { count, examples })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
