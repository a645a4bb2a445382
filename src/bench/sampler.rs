//! Best-of-N selection over repeated roundtrips.
//!
//! Every trial sees the same borrowed input slice. Invalid trials are dropped
//! without being replaced, so the minimum may be taken over fewer than N
//! results. The reported decode time is the one measured alongside the
//! fastest encode, not an independent minimum.

use log::{debug, info};

use super::config::BenchConfig;
use super::roundtrip::{run_once_with_clock, TrialResult};
use crate::codec::{Codec, DeltaValue};
use crate::error::{BenchError, Result};
use crate::timefn::{Clock, MonotonicClock};

/// Runs `config.sample_repeat` roundtrips and returns the valid trial with the
/// smallest encode time.
///
/// # Errors
/// [`BenchError::AllTrialsInvalid`] when no trial passed validation, which
/// includes `sample_repeat == 0`.
pub fn sample<V, C>(values: &[V], codec: &mut C, config: &BenchConfig) -> Result<TrialResult>
where
    V: DeltaValue,
    C: Codec<V> + ?Sized,
{
    sample_with_clock(values, codec, &MonotonicClock::new(), config)
}

/// [`sample`] with an explicit time source.
pub fn sample_with_clock<V, C, K>(
    values: &[V],
    codec: &mut C,
    clock: &K,
    config: &BenchConfig,
) -> Result<TrialResult>
where
    V: DeltaValue,
    C: Codec<V> + ?Sized,
    K: Clock + ?Sized,
{
    let trials = config.sample_repeat;
    let mut valid: Vec<TrialResult> = Vec::with_capacity(trials);
    for _ in 0..trials {
        if let Some(result) =
            run_once_with_clock(values, &mut *codec, clock, config.report_limit).valid()
        {
            valid.push(result);
        }
    }

    if valid.len() < trials {
        info!("{} of {} trials failed validation", trials - valid.len(), trials);
    }

    let best = valid
        .into_iter()
        .min_by_key(|r| r.encode_us)
        .ok_or(BenchError::AllTrialsInvalid { trials })?;
    debug!(
        "best of {}: encode {}µs, decode {}µs",
        trials, best.encode_us, best.decode_us
    );
    Ok(best)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
