//! Lock decision engine
//!
//! `decide` is a pure function from the current row, the request and a
//! timestamp to a verdict. It never reads the clock or the store
//! itself, so callers can evaluate it inside a storage transaction and
//! tests can pin `now` to any value.

use super::model::{LockRecord, LockRequest};

const NANOS_PER_MILLI: i64 = 1_000_000;

/// Verdict for a lock request
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Write this record and report success
    Granted(LockRecord),
    /// Leave the row untouched and report the current record
    Denied,
}

/// Evaluate a lock request against the current row at time `now`
///
/// A request without a token is a plain acquire attempt: it is denied
/// while the row's deadline lies in the future and granted otherwise,
/// expired deadlines included. A request carrying a token must match
/// the row's `lock_until` exactly; a matching token always grants, so
/// a holder can release or renew before the deadline, while a stale
/// token is always denied.
///
/// On a grant the new deadline is `now` plus the requested duration; a
/// duration of zero or less writes an unheld row. The owner and
/// `modified_time` are rewritten on every grant.
pub fn decide(current: &LockRecord, request: &LockRequest, now: i64) -> Decision {
    if let Some(token) = request.unlock_token {
        if token != current.lock_until {
            return Decision::Denied;
        }
    } else if now < current.lock_until {
        return Decision::Denied;
    }

    let lock_until = if request.duration_millis <= 0 {
        0
    } else {
        now.saturating_add(request.duration_millis.saturating_mul(NANOS_PER_MILLI))
    };

    Decision::Granted(LockRecord {
        owner: request.owner.clone(),
        lock_until,
        modified_time: now,
    })
}
