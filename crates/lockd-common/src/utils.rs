//! Utility functions for lockd
//!
//! Common helper functions used across the codebase.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in nanoseconds since the Unix epoch
///
/// Lock deadlines and modification times are stored in this unit.
/// Returns 0 if the system clock reports a time before the epoch.
pub fn now_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or(0)
}
