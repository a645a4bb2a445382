//! Binary entry point for the `deltabench` command-line tool.
//!
//! 1. clap parses the arguments; malformed input exits before any measurement.
//! 2. The logger is initialised from the verbosity flags (`RUST_LOG` may
//!    refine it further).
//! 3. [`deltabench::cli::run`] executes the selected scenario.
//!
//! Errors are printed as `deltabench: <error chain>` and the process exits
//! with status 1.

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use deltabench::cli::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    debug!(
        "*** deltabench v{} {}-bit ***",
        deltabench::DELTABENCH_VERSION_STRING,
        std::mem::size_of::<*const ()>() * 8
    );

    match run(&cli) {
        Ok(written) => {
            for path in written {
                debug!("wrote {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("deltabench: {e:#}");
            ExitCode::FAILURE
        }
    }
}
