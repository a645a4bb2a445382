//! Scenario dispatch.
//!
//! Each benchmark command builds its codec, runs the sweep and appends the
//! resulting records. Any error aborts before anything is written, so a
//! failed run never leaves a partial line in the sinks.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use log::info;

use super::args::{Cli, Command};
use crate::bench::{
    generate, persist, run_delta_sweep, run_sequence_sample, BenchConfig, DeltaPattern, Scenario,
    SweepOutcome,
};
use crate::codec::{DeltaBinaryPacked, RawCopy};
use crate::file::{load_sequence, write_sequence};

/// Executes the parsed command and returns the files it wrote.
pub fn run(cli: &Cli) -> anyhow::Result<Vec<PathBuf>> {
    let config = cli.bench_config();

    match &cli.command {
        &Command::RandDelta { value_count } => {
            let mut codec = DeltaBinaryPacked::<i32>::new();
            let outcome = run_delta_sweep(
                DeltaPattern::BoundedRandom,
                value_count,
                &config.delta_bounds,
                &mut codec,
                &config,
            )
            .with_context(|| format!("pseudorandom delta sweep over {value_count} values"))?;
            store(&outcome, Scenario::RandDelta, &config)
        }
        &Command::ConstDelta { value_count } => {
            let mut codec = DeltaBinaryPacked::<i64>::new();
            let outcome = run_delta_sweep(
                DeltaPattern::Constant,
                value_count,
                &config.delta_bounds,
                &mut codec,
                &config,
            )
            .with_context(|| format!("constant delta sweep over {value_count} values"))?;
            store(&outcome, Scenario::ConstDelta, &config)
        }
        &Command::Memcpy { value_count } => {
            let mut codec = RawCopy::<i64>::new();
            let outcome = run_delta_sweep(
                DeltaPattern::Constant,
                value_count,
                &config.delta_bounds,
                &mut codec,
                &config,
            )
            .with_context(|| format!("copy baseline over {value_count} values"))?;
            store(&outcome, Scenario::Memcpy, &config)
        }
        Command::File { path } => {
            let values = load_sequence(path)
                .with_context(|| format!("cannot load values from {}", path.display()))?;
            let label = format!("from file {}", path.display());
            let mut codec = DeltaBinaryPacked::<i64>::new();
            let outcome = run_sequence_sample(&values, &label, &mut codec, &config)
                .with_context(|| format!("benchmark of {}", path.display()))?;
            store(&outcome, Scenario::File, &config)
        }
        Command::Export {
            path,
            value_count,
            pattern,
            bound,
        } => {
            let values: Vec<i64> = generate((*pattern).into(), *value_count, *bound, config.seed);
            write_sequence(path, &values)
                .with_context(|| format!("cannot write {}", path.display()))?;
            info!("wrote {} values to {}", values.len(), path.display());
            Ok(vec![path.clone()])
        }
    }
}

fn store(
    outcome: &SweepOutcome,
    scenario: Scenario,
    config: &BenchConfig,
) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("cannot create output directory {}", config.output_dir.display())
    })?;
    let written = persist(outcome, scenario, &config.output_dir)
        .with_context(|| format!("cannot append {scenario} results"))?;
    Ok(written)
}
