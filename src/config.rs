//! Benchmark configuration types.

use crate::checksum::ChecksumVariant;
use crate::errors::{BenchmarkError, BenchmarkResult};
use serde::{Deserialize, Serialize};

/// Default per-iteration additive increment: 3 + 2^-19.
///
/// Chosen together with [`DEFAULT_MUL`] so that both the iterated loop and
/// the closed-form expectation stay exact in IEEE 754 double precision; the
/// residual self-check relies on this. Replacements must also be
/// exactly-representable small binary fractions.
pub const DEFAULT_ADD: f64 = 3.0000019073486328125;

/// Default per-iteration multiplicative factor: 2^-20.
pub const DEFAULT_MUL: f64 = 9.5367431640625e-7;

/// Fallback operation count when the caller asks for a non-positive
/// workload.
pub const DEFAULT_OPS: u64 = 1000;

/// Configuration for the floating-point throughput benchmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddmulConfig {
    /// Per-iteration additive increment.
    pub add: f64,
    /// Per-iteration multiplicative factor.
    pub mul: f64,
    /// Total elementary floating-point operation count.
    pub ops: u64,
}

impl Default for AddmulConfig {
    fn default() -> Self {
        Self {
            add: DEFAULT_ADD,
            mul: DEFAULT_MUL,
            ops: DEFAULT_OPS,
        }
    }
}

impl AddmulConfig {
    /// Validates the configuration.
    ///
    /// The kernel itself accepts any constants and lets overflow surface in
    /// the residual, but non-finite constants would poison the self-check
    /// from the start, so they are rejected here.
    pub fn validate(&self) -> BenchmarkResult<()> {
        if !self.add.is_finite() {
            return Err(BenchmarkError::ConfigValidation {
                field: "add".to_string(),
                message: format!("additive increment must be finite, got {}", self.add),
            });
        }

        if !self.mul.is_finite() {
            return Err(BenchmarkError::ConfigValidation {
                field: "mul".to_string(),
                message: format!("multiplicative factor must be finite, got {}", self.mul),
            });
        }

        Ok(())
    }
}

/// Configuration for the checksum throughput benchmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecksumConfig {
    /// Size of the synthetic input buffer in MiB (ignored when the driver
    /// supplies file contents instead).
    pub megabytes: usize,
    /// Block sizes to sweep; 0 digests the whole buffer in one update.
    pub block_sizes: Vec<usize>,
    /// Digest variants to run.
    pub variants: Vec<ChecksumVariant>,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            megabytes: 128,
            block_sizes: (9..=20).map(|shift| 1usize << shift).chain([0]).collect(),
            variants: vec![ChecksumVariant::Sha256, ChecksumVariant::SipHash],
        }
    }
}

impl ChecksumConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> BenchmarkResult<()> {
        if self.megabytes == 0 {
            return Err(BenchmarkError::ConfigValidation {
                field: "megabytes".to_string(),
                message: "buffer size must be greater than 0".to_string(),
            });
        }

        if self.block_sizes.is_empty() {
            return Err(BenchmarkError::ConfigValidation {
                field: "block_sizes".to_string(),
                message: "at least one block size is required".to_string(),
            });
        }

        if self.variants.is_empty() {
            return Err(BenchmarkError::ConfigValidation {
                field: "variants".to_string(),
                message: "at least one digest variant is required".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addmul_defaults_are_exact_binary_fractions() {
        assert_eq!(DEFAULT_ADD, 3.0 + f64::powi(2.0, -19));
        assert_eq!(DEFAULT_MUL, f64::powi(2.0, -20));
        assert_eq!(AddmulConfig::default().ops, DEFAULT_OPS);
    }

    #[test]
    fn test_addmul_validate_rejects_non_finite() {
        let config = AddmulConfig {
            add: f64::NAN,
            ..AddmulConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BenchmarkError::ConfigValidation { .. })
        ));

        let config = AddmulConfig {
            mul: f64::INFINITY,
            ..AddmulConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_checksum_default_sweep() {
        let config = ChecksumConfig::default();
        assert_eq!(config.block_sizes.first(), Some(&512));
        assert_eq!(config.block_sizes.last(), Some(&0));
        assert!(config.block_sizes.contains(&(1 << 20)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_checksum_validate_rejects_empty_sweep() {
        let config = ChecksumConfig {
            block_sizes: Vec::new(),
            ..ChecksumConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ChecksumConfig {
            megabytes: 0,
            ..ChecksumConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_checksum_config_round_trips_through_json() {
        let config = ChecksumConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ChecksumConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.megabytes, config.megabytes);
        assert_eq!(back.block_sizes, config.block_sizes);
        assert_eq!(back.variants, config.variants);
    }
}
