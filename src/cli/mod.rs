//! Command-line interface for the `deltabench` binary.
//!
//! | Submodule    | Responsibility |
//! |--------------|---------------|
//! | [`args`]     | clap-derived [`Cli`] / [`Command`], verbosity arithmetic, conversion into a [`crate::bench::BenchConfig`]. |
//! | [`dispatch`] | Runs the selected scenario and appends its records to the CSV sinks. |
//!
//! Typical call sequence: `Cli::parse` → logger setup from `Cli::log_level` →
//! [`dispatch::run`].

pub mod args;
pub mod dispatch;

pub use args::{Cli, Command, PatternArg};
pub use dispatch::run;
