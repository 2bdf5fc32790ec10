//! Lock data model

use serde::{Deserialize, Serialize};

/// Stored state of a single named lock
///
/// A row with `lock_until == 0` is unheld. Keys that were never
/// written behave exactly like the default record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockRecord {
    /// Identifier of the most recent grantee
    pub owner: String,
    /// Deadline in nanoseconds since the Unix epoch, 0 when unheld
    ///
    /// The value doubles as the capability token that authorizes
    /// releasing or renewing the lock before the deadline.
    pub lock_until: i64,
    /// Time of the last write, nanoseconds since the Unix epoch
    pub modified_time: i64,
}

/// A single lock request as seen by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct LockRequest {
    /// Name of the lock
    pub key: String,
    /// Requesting owner
    pub owner: String,
    /// Requested hold duration in milliseconds, <= 0 releases
    pub duration_millis: i64,
    /// Token from a previous grant
    pub unlock_token: Option<i64>,
}

/// Result of a lock request
#[derive(Debug, Clone, PartialEq)]
pub struct LockOutcome {
    /// Whether the request was granted
    pub acquired: bool,
    /// The row after the decision; on a denial, the snapshot that
    /// justified the refusal
    pub record: LockRecord,
}
