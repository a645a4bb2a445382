//! Argument definitions.
//!
//! Verbosity follows the usual counting convention: the level starts at
//! [`DISPLAY_LEVEL_DEFAULT`], each `-v` raises it and each `-q` lowers it,
//! saturating at 0.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use crate::bench::{BenchConfig, DeltaPattern};
use crate::config::{DISPLAY_LEVEL_DEFAULT, SAMPLE_REPEAT_DEFAULT, SEED_DEFAULT};

/// Roundtrip throughput harness for DELTA_BINARY_PACKED integer encoding.
#[derive(Debug, Parser)]
#[command(name = "deltabench", version, about)]
pub struct Cli {
    /// Increase verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Roundtrip trials per sweep step; the fastest valid encode wins
    #[arg(long, default_value_t = SAMPLE_REPEAT_DEFAULT, global = true)]
    pub samples: usize,

    /// Seed for the pseudorandom delta generator
    #[arg(long, default_value_t = SEED_DEFAULT, global = true)]
    pub seed: u64,

    /// Directory the CSV result files are appended to
    #[arg(long, default_value = ".", global = true)]
    pub output_dir: PathBuf,

    /// Comma-separated delta bounds to sweep instead of the built-in set
    #[arg(long, value_delimiter = ',', global = true)]
    pub bounds: Vec<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sweep pseudorandom deltas over 32-bit values
    RandDelta {
        /// Number of values per generated sequence
        value_count: usize,
    },
    /// Sweep constant deltas over 64-bit values
    ConstDelta {
        /// Number of values per generated sequence
        value_count: usize,
    },
    /// Plain copy baseline over constant-delta 64-bit values
    Memcpy {
        /// Number of values per generated sequence
        value_count: usize,
    },
    /// Benchmark the first INT64 column of a Parquet file
    File {
        /// Parquet file to read
        path: PathBuf,
    },
    /// Write a generated sequence to a Parquet file for later `file` runs
    Export {
        /// Destination Parquet file (overwritten)
        path: PathBuf,
        /// Number of values to generate
        value_count: usize,
        /// Delta pattern of the generated sequence
        #[arg(long, value_enum, default_value_t = PatternArg::Random)]
        pattern: PatternArg,
        /// Delta bound of the generated sequence
        #[arg(long, default_value_t = 100)]
        bound: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PatternArg {
    Random,
    Constant,
}

impl From<PatternArg> for DeltaPattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Random => DeltaPattern::BoundedRandom,
            PatternArg::Constant => DeltaPattern::Constant,
        }
    }
}

impl Cli {
    pub fn display_level(&self) -> u32 {
        (DISPLAY_LEVEL_DEFAULT + u32::from(self.verbose)).saturating_sub(u32::from(self.quiet))
    }

    pub fn log_level(&self) -> LevelFilter {
        self.bench_config().log_level()
    }

    /// Benchmark settings selected on the command line.
    pub fn bench_config(&self) -> BenchConfig {
        let mut config = BenchConfig::default();
        config
            .set_notification_level(self.display_level())
            .set_sample_repeat(self.samples)
            .set_seed(self.seed)
            .set_output_dir(self.output_dir.clone());
        if !self.bounds.is_empty() {
            config.set_delta_bounds(&self.bounds);
        }
        config
    }
}
