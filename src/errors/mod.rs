//! Error types for the benchmark crate.
//!
//! This module contains the specific error type used throughout the
//! library, avoiding generic error wrappers like `anyhow` or
//! `Box<dyn Error>` for better error handling and debugging.

mod benchmark_error;

pub use benchmark_error::BenchmarkError;

/// Result type alias for benchmark operations.
pub type BenchmarkResult<T> = std::result::Result<T, BenchmarkError>;
