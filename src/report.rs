//! Benchmark result types and their report formatting.

use crate::checksum::ChecksumVariant;
use std::fmt;

/// Result of one floating-point throughput run.
#[derive(Debug, Clone)]
pub struct AddmulReport {
    /// Wall time spent inside the kernel call, in seconds.
    pub elapsed_seconds: f64,
    /// Elementary floating-point operations requested.
    pub ops: u64,
    /// Divergence of the iterated accumulators from the closed-form
    /// expectation; near zero unless something miscomputed or overflowed.
    pub residual: f64,
}

impl AddmulReport {
    /// Achieved throughput in billions of operations per second.
    pub fn gflops(&self) -> f64 {
        self.ops as f64 / self.elapsed_seconds / 1e9
    }
}

impl fmt::Display for AddmulReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "addmul:\t {:.3} s, {:.3} Gflops, N={}, res={:.6}",
            self.elapsed_seconds,
            self.gflops(),
            self.ops,
            self.residual
        )
    }
}

/// Result of one (variant, block size) checksum run.
#[derive(Debug, Clone)]
pub struct ChecksumReport {
    /// Digest variant that ran.
    pub variant: ChecksumVariant,
    /// Block size used to feed the digest; 0 means one whole-buffer update.
    pub block_size: usize,
    /// Digest bytes produced by the run.
    pub digest: Vec<u8>,
    /// Input size in bytes.
    pub bytes: usize,
    /// Wall time spent digesting, in seconds.
    pub elapsed_seconds: f64,
}

impl ChecksumReport {
    /// Input size in MiB.
    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / 1024.0 / 1024.0
    }

    /// Achieved digest speed in MB/s.
    pub fn speed_mb_per_sec(&self) -> f64 {
        self.megabytes() / self.elapsed_seconds
    }

    /// Digest rendered as lowercase hex.
    pub fn digest_hex(&self) -> String {
        self.digest.iter().map(|byte| format!("{byte:02x}")).collect()
    }

    /// Column header matching [`ChecksumReport`]'s `Display` row.
    pub fn table_header() -> &'static str {
        "Algo     Chksum           BufSize  Speed [MB/s]   Time [s]\n\
         ======== ================ ======= ============= =========="
    }
}

impl fmt::Display for ChecksumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Digests wider than 64 bits are truncated to keep rows aligned;
        // the full value is available via digest_hex().
        let mut digest = self.digest_hex();
        digest.truncate(16);
        write!(
            f,
            "{:<8} {:<16} {:>7} {:>13.3} {:>10.3}",
            self.variant.name(),
            digest,
            self.block_size,
            self.speed_mb_per_sec(),
            self.elapsed_seconds
        )
    }
}
