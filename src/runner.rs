//! Core benchmark execution logic.

use crate::checksum;
use crate::config::{AddmulConfig, ChecksumConfig};
use crate::errors::{BenchmarkError, BenchmarkResult};
use crate::flops::{self, OPS_PER_ITERATION, RESIDUAL_TOLERANCE};
use crate::report::{AddmulReport, ChecksumReport};
use crate::timer;
use log::{error, info, warn};
use std::fs;

/// Configuration loader that handles JSON files with fallbacks.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a configuration file with fallback to defaults.
    pub fn load_config<T: serde::de::DeserializeOwned + Default>(
        path: &str,
        config_name: &str,
    ) -> BenchmarkResult<T> {
        match fs::read_to_string(path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| BenchmarkError::ConfigParse {
                    path: path.to_string(),
                    source: e,
                })
            }
            Err(_) => {
                warn!(
                    "Config file '{}' not found, using default configuration for {}",
                    path, config_name
                );
                Ok(T::default())
            }
        }
    }

    /// Load the checksum benchmark configuration.
    ///
    /// There is no addmul counterpart: that driver's whole interface is one
    /// command-line argument and it reads no files.
    pub fn load_checksum_config() -> BenchmarkResult<ChecksumConfig> {
        Self::load_config("configs/checksum.json", "checksum")
    }
}

/// Main benchmark runner.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run all available benchmarks with their default workloads.
    pub fn run_all_benchmarks() -> BenchmarkResult<()> {
        info!("Starting benchmark suite");

        let mut errors = Vec::new();

        if let Err(e) = Self::run_benchmark("addmul") {
            error!("addmul benchmark failed: {}", e);
            errors.push(e);
        }

        if let Err(e) = Self::run_benchmark("checksum") {
            error!("checksum benchmark failed: {}", e);
            errors.push(e);
        }

        if errors.is_empty() {
            info!("All benchmarks completed successfully");
            Ok(())
        } else {
            Err(BenchmarkError::Execution {
                benchmark_name: "all".to_string(),
                message: format!("Some benchmarks failed: {} errors", errors.len()),
            })
        }
    }

    /// Run a specific benchmark by name.
    pub fn run_benchmark(benchmark_name: &str) -> BenchmarkResult<()> {
        match benchmark_name {
            "addmul" => {
                let report = Self::run_addmul(&AddmulConfig::default())?;
                println!("{report}");
                Ok(())
            }
            "checksum" => {
                let config = ConfigLoader::load_checksum_config()?;
                config.validate()?;
                let data = vec![b' '; config.megabytes * 1024 * 1024];
                let reports = Self::run_checksum(&config, &data)?;
                println!("{}", ChecksumReport::table_header());
                for report in &reports {
                    println!("{report}");
                }
                Ok(())
            }
            _ => Err(BenchmarkError::UnknownBenchmark {
                name: benchmark_name.to_string(),
            }),
        }
    }

    /// List available benchmarks.
    pub fn list_benchmarks() {
        println!("Available benchmarks:");
        println!("  addmul   - Floating-point add/multiply throughput with analytic self-check");
        println!("  checksum - Digest throughput across block sizes");
    }

    /// Time one kernel invocation and build its report.
    ///
    /// The timer brackets nothing but the kernel call; validation, report
    /// construction, and logging all happen outside the timed region.
    pub fn run_addmul(config: &AddmulConfig) -> BenchmarkResult<AddmulReport> {
        config.validate()?;

        info!(
            "addmul: {} operations requested ({} loop iterations)",
            config.ops,
            config.ops / OPS_PER_ITERATION
        );

        let start = timer::now_seconds();
        let residual = flops::addmul(config.add, config.mul, config.ops);
        let elapsed = timer::now_seconds() - start;

        let report = AddmulReport {
            elapsed_seconds: elapsed,
            ops: config.ops,
            residual,
        };

        if report.residual.abs() > RESIDUAL_TOLERANCE {
            // Reported, never fatal: drift and overflow are results here.
            warn!(
                "addmul: residual {} exceeds rounding tolerance {}",
                report.residual, RESIDUAL_TOLERANCE
            );
        }

        Ok(report)
    }

    /// Run the block-size sweep for every configured digest variant.
    ///
    /// Each timed run is checked against an untimed whole-buffer reference
    /// digest; a divergence aborts the sweep with an error.
    pub fn run_checksum(
        config: &ChecksumConfig,
        data: &[u8],
    ) -> BenchmarkResult<Vec<ChecksumReport>> {
        config.validate()?;

        info!(
            "checksum: digesting {:.2} MiB with {} variant(s) across {} block size(s)",
            data.len() as f64 / 1024.0 / 1024.0,
            config.variants.len(),
            config.block_sizes.len()
        );

        let mut reports = Vec::with_capacity(config.variants.len() * config.block_sizes.len());

        for &variant in &config.variants {
            let reference = checksum::digest_whole(variant, data);

            for &block_size in &config.block_sizes {
                let start = timer::now_seconds();
                let digest = checksum::digest_blocks(variant, data, block_size);
                let elapsed = timer::now_seconds() - start;

                if digest != reference {
                    return Err(BenchmarkError::ChecksumMismatch {
                        variant: variant.name().to_string(),
                        block_size,
                    });
                }

                reports.push(ChecksumReport {
                    variant,
                    block_size,
                    digest,
                    bytes: data.len(),
                    elapsed_seconds: elapsed,
                });
            }
        }

        Ok(reports)
    }
}
