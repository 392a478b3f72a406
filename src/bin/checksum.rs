//! Checksum throughput driver.
//!
//! Digests a synthetic buffer (or a file's contents) through every
//! configured digest variant at a sweep of block sizes and prints one table
//! row per run.

use cpubench::errors::{BenchmarkError, BenchmarkResult};
use cpubench::report::ChecksumReport;
use cpubench::runner::{BenchmarkRunner, ConfigLoader};
use log::error;
use std::env;
use std::fs;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("checksum benchmark failed: {}", e);
        process::exit(1);
    }
}

fn run() -> BenchmarkResult<()> {
    let args: Vec<String> = env::args().collect();
    let mut config = ConfigLoader::load_checksum_config()?;

    let data: Vec<u8> = match args.len() {
        1 => vec![b' '; config.megabytes * 1024 * 1024],
        3 if args[1] == "-m" => {
            let megabytes: usize =
                args[2]
                    .parse()
                    .map_err(|_| BenchmarkError::ConfigValidation {
                        field: "megabytes".to_string(),
                        message: format!("'{}' is not a valid buffer size", args[2]),
                    })?;
            config.megabytes = megabytes;
            config.validate()?;
            vec![b' '; megabytes * 1024 * 1024]
        }
        3 if args[1] == "-f" => {
            let data = fs::read(&args[2])?;
            println!("Checking file {} ({} bytes)", args[2], data.len());
            data
        }
        _ => {
            print_usage(&args[0]);
            return Ok(());
        }
    };

    let reports = BenchmarkRunner::run_checksum(&config, &data)?;

    println!("{}", ChecksumReport::table_header());
    for report in &reports {
        println!("{report}");
    }

    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}                # digest the configured synthetic buffer");
    println!("  {program} -m <megabytes> # digest a synthetic buffer of the given size");
    println!("  {program} -f <file>      # digest a file's contents");
}
