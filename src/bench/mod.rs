//! Roundtrip measurement and validation engine.
//!
//! Data flows leaf-first through the submodules:
//!
//! - [`generator`] — seeded synthetic sequences with bounded deltas.
//! - [`roundtrip`] — one timed encode + decode, validated element by element.
//! - [`sampler`] — best-of-N over repeated roundtrips (minimum encode time).
//! - [`report`] — MB/s derivation, console lines, CSV [`SweepRecord`]s.
//! - [`sweep`] — per-scenario orchestration and persistence.
//!
//! [`config::BenchConfig`] carries trial count, seed, verbosity and output
//! location for all of them.

pub mod config;
pub mod generator;
pub mod roundtrip;
pub mod sampler;
pub mod report;
pub mod sweep;

// Re-export public types so callers can use `bench::BenchConfig` directly.
pub use config::BenchConfig;
pub use generator::{generate, DeltaPattern};
pub use report::{throughput_mb_per_s, StepReport, SweepRecord};
pub use roundtrip::{run_once, TrialOutcome, TrialResult, ValidationFailure};
pub use sampler::sample;
pub use sweep::{persist, run_delta_sweep, run_sequence_sample, Scenario, SweepOutcome};
