//! Wall-clock reads for bracketing benchmark runs.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as fractional seconds since the Unix epoch.
///
/// The benchmarks measure wall time, so this reads the system clock rather
/// than a monotonic one; a suspended process or a clock adjustment mid-run
/// skews the result and is accepted. Sub-microsecond resolution on the
/// platforms we care about. A clock set before the epoch yields negative
/// seconds.
pub fn now_seconds() -> f64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}
