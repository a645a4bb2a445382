// deltabench — roundtrip throughput harness for DELTA_BINARY_PACKED encoding

pub mod timefn;
pub mod config;
pub mod error;
pub mod codec;
pub mod bench;
pub mod file;
pub mod cli;

pub use error::{BenchError, Result};

pub const DELTABENCH_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
