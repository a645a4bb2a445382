//! Benchmark configuration: runtime parameters for the `bench` subsystem.
//!
//! [`BenchConfig`] holds every tuneable setting of a run: trial count, seed,
//! verbosity, mismatch reporting cap, output directory, and the delta bounds
//! swept by the synthetic scenarios. Its builder-style setters allow callers
//! to construct a configuration incrementally before handing it to
//! [`super::sweep`].

use std::path::PathBuf;

use log::LevelFilter;

use crate::config::{
    DELTA_BOUNDS, DISPLAY_LEVEL_DEFAULT, REPORT_LIMIT_DEFAULT, SAMPLE_REPEAT_DEFAULT,
    SEED_DEFAULT,
};

// ── BenchConfig struct ────────────────────────────────────────────────────────

/// Runtime parameters controlling a single benchmark session.
///
/// Construct via [`Default`] and then adjust with the builder-style setters,
/// or set fields directly. All fields are `pub` for convenient inspection.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Verbosity level: 0 = silent, 1 = errors, 2 = results+warnings (default),
    /// 3 = progress, 4 = per-trial detail.
    pub display_level: u32,

    /// Roundtrip trials per sweep step (default: 100).
    pub sample_repeat: usize,

    /// Seed for the pseudorandom generator (default: 12141802).
    pub seed: u64,

    /// Maximum number of mismatching values logged per failed trial.
    pub report_limit: usize,

    /// Directory the CSV sinks are appended to (default: current directory).
    pub output_dir: PathBuf,

    /// Delta bounds swept by the synthetic scenarios, in sweep order.
    pub delta_bounds: Vec<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            display_level: DISPLAY_LEVEL_DEFAULT,
            sample_repeat: SAMPLE_REPEAT_DEFAULT,
            seed: SEED_DEFAULT,
            report_limit: REPORT_LIMIT_DEFAULT,
            output_dir: PathBuf::from("."),
            delta_bounds: DELTA_BOUNDS.to_vec(),
        }
    }
}

impl BenchConfig {
    // ── Setters ───────────────────────────────────────────────────────────────

    /// Set the verbosity level for benchmark output.
    pub fn set_notification_level(&mut self, level: u32) -> &mut Self {
        self.display_level = level;
        self
    }

    /// Set the number of roundtrip trials per sweep step.
    pub fn set_sample_repeat(&mut self, sample_repeat: usize) -> &mut Self {
        self.sample_repeat = sample_repeat;
        self
    }

    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    pub fn set_report_limit(&mut self, report_limit: usize) -> &mut Self {
        self.report_limit = report_limit;
        self
    }

    pub fn set_output_dir(&mut self, output_dir: impl Into<PathBuf>) -> &mut Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Replace the swept delta bounds. Order is preserved in the CSV record.
    pub fn set_delta_bounds(&mut self, delta_bounds: &[u64]) -> &mut Self {
        self.delta_bounds = delta_bounds.to_vec();
        self
    }

    /// Maps the display level onto a `log` filter.
    ///
    /// Results are printed directly; `log` carries the diagnostics, so level 2
    /// (the default) shows warnings such as validation mismatches.
    pub fn log_level(&self) -> LevelFilter {
        match self.display_level {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
