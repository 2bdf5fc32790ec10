//! Wire models for the lock endpoint
//!
//! These structs define the JSON bodies returned by `/v1/lock`. Field
//! names are part of the wire contract and must not change.

use serde::{Deserialize, Serialize};

/// Snapshot of a lock row as reported to clients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lock {
    /// Identifier of the most recent grantee
    pub owner: String,
    /// Deadline in nanoseconds since the Unix epoch, 0 when unheld
    pub lock_time: i64,
    /// Time of the last write, nanoseconds since the Unix epoch
    pub modified_time: i64,
}

/// Response body for `/v1/lock`
///
/// Returned for grants and denials alike. On a grant `lock` reflects
/// the row as written; on a denial it is the snapshot that justified
/// the refusal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockResult {
    /// Whether the request was granted
    pub acquired: bool,
    /// Lock row after the decision
    pub lock: Lock,
}
