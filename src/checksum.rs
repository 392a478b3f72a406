//! Block-wise digest kernels for the checksum throughput benchmark.
//!
//! Every variant is a streaming digest, so feeding the input in blocks of
//! any size must produce the same value as digesting the whole buffer in
//! one update. The runner uses that as the correctness check for each
//! timed run.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

/// Digest implementations available to the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumVariant {
    /// SHA-256 from the sha2 crate, 32-byte digest.
    Sha256,
    /// The standard library's SipHash-1-3 hasher, 8-byte digest.
    SipHash,
}

impl ChecksumVariant {
    /// Short name used in reports and config files.
    pub fn name(self) -> &'static str {
        match self {
            ChecksumVariant::Sha256 => "sha256",
            ChecksumVariant::SipHash => "siphash",
        }
    }

    /// Get a variant by its short name.
    pub fn get_by_name(name: &str) -> Option<Self> {
        match name {
            "sha256" => Some(ChecksumVariant::Sha256),
            "siphash" => Some(ChecksumVariant::SipHash),
            _ => None,
        }
    }
}

/// Digests `data` in `block_size`-byte blocks and returns the digest bytes.
///
/// A `block_size` of 0 feeds the whole buffer to the digest in a single
/// update. This is the timed work of the checksum benchmark; the block loop
/// is where buffer-size effects show up in the measured speed.
pub fn digest_blocks(variant: ChecksumVariant, data: &[u8], block_size: usize) -> Vec<u8> {
    match variant {
        ChecksumVariant::Sha256 => {
            let mut hasher = Sha256::new();
            if block_size == 0 {
                hasher.update(data);
            } else {
                for block in data.chunks(block_size) {
                    hasher.update(block);
                }
            }
            hasher.finalize().to_vec()
        }
        ChecksumVariant::SipHash => {
            // Hasher::write streams raw bytes, so block boundaries do not
            // influence the final value.
            let mut hasher = DefaultHasher::new();
            if block_size == 0 {
                hasher.write(data);
            } else {
                for block in data.chunks(block_size) {
                    hasher.write(block);
                }
            }
            hasher.finish().to_be_bytes().to_vec()
        }
    }
}

/// Whole-buffer digest, used as the reference value for the block sweep.
pub fn digest_whole(variant: ChecksumVariant, data: &[u8]) -> Vec<u8> {
    digest_blocks(variant, data, 0)
}
