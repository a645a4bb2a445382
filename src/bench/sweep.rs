//! Sweep orchestration: one sampler run per delta bound (or one over a
//! provided dataset), collected into encode and decode [`SweepRecord`]s.
//!
//! A step whose trials all fail validation aborts the whole sweep: the error
//! propagates and nothing is persisted for the run.

use std::fmt;
use std::path::{Path, PathBuf};

use log::info;

use super::config::BenchConfig;
use super::generator::{generate, DeltaPattern};
use super::report::{payload_bytes, StepReport, SweepRecord};
use super::sampler::sample;
use crate::codec::{Codec, DeltaValue};
use crate::error::Result;

// ── Scenarios ─────────────────────────────────────────────────────────────────

/// A benchmark scenario and the CSV sinks its records are appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Pseudorandom deltas, 32-bit values.
    RandDelta,
    /// Constant deltas, 64-bit values.
    ConstDelta,
    /// First column of a Parquet file, 64-bit values.
    File,
    /// Constant deltas through a plain byte copy.
    Memcpy,
}

impl Scenario {
    /// File name of the encode-side sink.
    pub fn encode_sink(self) -> &'static str {
        match self {
            Scenario::RandDelta => "RandDelta_Encode_TestData.csv",
            Scenario::ConstDelta => "ConstDelta_Encode_TestData.csv",
            Scenario::File => "File_Encode_TestData.csv",
            Scenario::Memcpy => "Memcopy_TestData.csv",
        }
    }

    /// File name of the decode-side sink; the memcpy baseline only records
    /// the copy.
    pub fn decode_sink(self) -> Option<&'static str> {
        match self {
            Scenario::RandDelta => Some("RandDelta_Decode_TestData.csv"),
            Scenario::ConstDelta => Some("ConstDelta_Decode_TestData.csv"),
            Scenario::File => Some("File_Decode_TestData.csv"),
            Scenario::Memcpy => None,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scenario::RandDelta => "rand-delta",
            Scenario::ConstDelta => "const-delta",
            Scenario::File => "file",
            Scenario::Memcpy => "memcpy",
        };
        f.write_str(name)
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Encode and decode records of one sweep, plus the per-step reports.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub encode: SweepRecord,
    pub decode: SweepRecord,
    pub steps: Vec<StepReport>,
}

impl SweepOutcome {
    fn new(value_count: usize) -> Self {
        SweepOutcome {
            encode: SweepRecord::new(value_count),
            decode: SweepRecord::new(value_count),
            steps: Vec::new(),
        }
    }

    fn record(&mut self, step: StepReport) {
        self.encode.push(step.encode_mb_s);
        self.decode.push(step.decode_mb_s);
        self.steps.push(step);
    }
}

// ── Drivers ───────────────────────────────────────────────────────────────────

/// Generates one sequence per entry of `bounds`, samples its roundtrip and
/// records the throughput figures in bound order.
pub fn run_delta_sweep<V, C>(
    pattern: DeltaPattern,
    value_count: usize,
    bounds: &[u64],
    codec: &mut C,
    config: &BenchConfig,
) -> Result<SweepOutcome>
where
    V: DeltaValue,
    C: Codec<V> + ?Sized,
{
    let mut outcome = SweepOutcome::new(value_count);
    for &bound in bounds {
        info!(
            "{}: {} i{} values with {} bound {}",
            codec.name(),
            value_count,
            V::BITS,
            pattern,
            bound
        );
        let values: Vec<V> = generate(pattern, value_count, bound, config.seed);
        let trial = sample(&values, &mut *codec, config)?;
        let label = match pattern {
            DeltaPattern::BoundedRandom => format!("with a pseudorandom delta in [0;{bound}]"),
            DeltaPattern::Constant => format!("with a constant delta of {bound}"),
        };
        let step = StepReport::new(value_count, payload_bytes::<V>(value_count), label, trial);
        emit(&step, config);
        outcome.record(step);
    }
    Ok(outcome)
}

/// Samples the roundtrip of an already-loaded sequence once; the records
/// carry a single figure each.
pub fn run_sequence_sample<V, C>(
    values: &[V],
    label: &str,
    codec: &mut C,
    config: &BenchConfig,
) -> Result<SweepOutcome>
where
    V: DeltaValue,
    C: Codec<V> + ?Sized,
{
    info!("{}: {} i{} values {}", codec.name(), values.len(), V::BITS, label);
    let trial = sample(values, codec, config)?;
    let step = StepReport::new(
        values.len(),
        payload_bytes::<V>(values.len()),
        label.to_owned(),
        trial,
    );
    emit(&step, config);

    let mut outcome = SweepOutcome::new(values.len());
    outcome.record(step);
    Ok(outcome)
}

fn emit(step: &StepReport, config: &BenchConfig) {
    if config.display_level >= 1 {
        println!("{}", step.render());
    }
}

/// Appends the outcome's records to the scenario's sinks under `dir`.
///
/// Returns the paths written, encode sink first.
pub fn persist(outcome: &SweepOutcome, scenario: Scenario, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(2);

    let encode_path = dir.join(scenario.encode_sink());
    outcome.encode.append_to(&encode_path)?;
    written.push(encode_path);

    if let Some(name) = scenario.decode_sink() {
        let decode_path = dir.join(name);
        outcome.decode.append_to(&decode_path)?;
        written.push(decode_path);
    }

    info!("{scenario}: appended results to {}", dir.display());
    Ok(written)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
