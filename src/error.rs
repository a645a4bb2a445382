//! Error type shared by the library modules.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Every trial of one sweep step failed validation.
    #[error("all {trials} roundtrip trials failed validation")]
    AllTrialsInvalid { trials: usize },

    #[error("{}: column `{column}` is {found}, expected INT64", path.display())]
    UnsupportedColumn {
        path: PathBuf,
        column: String,
        found: String,
    },

    #[error("{}: no values to bench", path.display())]
    EmptyInput { path: PathBuf },
}

pub type Result<T, E = BenchError> = std::result::Result<T, E>;
