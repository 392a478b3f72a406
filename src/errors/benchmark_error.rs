//! Error variants for benchmark configuration and execution.

use thiserror::Error;

/// Errors that can occur while configuring or running a benchmark.
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Unknown benchmark: '{name}'. Supported: addmul, checksum")]
    UnknownBenchmark { name: String },

    #[error("Failed to parse configuration file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration validation error for field '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error(
        "Checksum mismatch for '{variant}' at block size {block_size}: block-wise digest diverged from the whole-buffer digest"
    )]
    ChecksumMismatch { variant: String, block_size: usize },

    #[error("Benchmark '{benchmark_name}' execution error: {message}")]
    Execution {
        benchmark_name: String,
        message: String,
    },
}
