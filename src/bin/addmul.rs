//! Floating-point throughput driver.
//!
//! Takes one argument, the workload size in millions of elementary
//! floating-point operations, times a single kernel invocation, and prints
//! one report line with elapsed seconds, Gflops, the operation count, and
//! the self-check residual.

use cpubench::runner::BenchmarkRunner;
use cpubench::AddmulConfig;
use log::error;
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("usage: {} <num>", args[0]);
        println!("number of operations: <num> millions");
        process::exit(1);
    }

    // Unparseable input reads as zero and falls through to the default
    // workload, like any other non-positive request.
    let millions: f64 = args[1].parse().unwrap_or(0.0);
    let requested = (millions * 1_000_000.0) as i64;

    let mut config = AddmulConfig::default();
    if requested > 0 {
        config.ops = requested as u64;
    }

    match BenchmarkRunner::run_addmul(&config) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            error!("addmul benchmark failed: {}", e);
            process::exit(1);
        }
    }
}
