//! Integration tests for the floating-point throughput benchmark.

use cpubench::config::{DEFAULT_ADD, DEFAULT_MUL};
use cpubench::flops::RESIDUAL_TOLERANCE;
use cpubench::{AddmulConfig, BenchmarkError, BenchmarkRunner};

#[test]
fn test_run_addmul_default_config() {
    let report = BenchmarkRunner::run_addmul(&AddmulConfig::default()).unwrap();

    assert_eq!(report.ops, 1000);
    assert!(report.elapsed_seconds >= 0.0);
    assert!(
        report.residual.abs() < RESIDUAL_TOLERANCE,
        "residual = {}",
        report.residual
    );
}

#[test]
fn test_run_addmul_million_ops() {
    let config = AddmulConfig {
        ops: 1_000_000,
        ..AddmulConfig::default()
    };
    let report = BenchmarkRunner::run_addmul(&config).unwrap();

    assert!(
        report.residual.abs() < RESIDUAL_TOLERANCE,
        "residual = {}",
        report.residual
    );
    // A hundred thousand iterations cannot complete between two adjacent
    // clock reads, so the derived throughput is meaningful here.
    assert!(report.elapsed_seconds > 0.0);
    assert!(report.gflops() > 0.0);
    assert!(report.gflops().is_finite());
}

#[test]
fn test_run_addmul_report_line() {
    let config = AddmulConfig {
        ops: 1_000_000,
        ..AddmulConfig::default()
    };
    let report = BenchmarkRunner::run_addmul(&config).unwrap();
    let line = report.to_string();

    assert!(line.starts_with("addmul:\t "), "line = {line:?}");
    assert!(line.contains(" s, "), "line = {line:?}");
    assert!(line.contains(" Gflops, "), "line = {line:?}");
    assert!(line.contains("N=1000000"), "line = {line:?}");
    assert!(line.contains("res="), "line = {line:?}");
}

#[test]
fn test_run_addmul_rejects_non_finite_constants() {
    let config = AddmulConfig {
        add: f64::NAN,
        ..AddmulConfig::default()
    };
    let result = BenchmarkRunner::run_addmul(&config);

    assert!(matches!(
        result,
        Err(BenchmarkError::ConfigValidation { .. })
    ));
}

#[test]
fn test_kernel_accepts_reference_constants_directly() {
    // The reference constants are exact binary fractions; running the
    // kernel outside the runner must give the same near-zero residual.
    let residual = cpubench::flops::addmul(DEFAULT_ADD, DEFAULT_MUL, 2_000_000);
    assert!(residual.abs() < RESIDUAL_TOLERANCE, "residual = {residual}");
}

#[test]
fn test_unknown_benchmark_name_is_rejected() {
    let result = BenchmarkRunner::run_benchmark("gemm");
    assert!(matches!(
        result,
        Err(BenchmarkError::UnknownBenchmark { .. })
    ));
}
