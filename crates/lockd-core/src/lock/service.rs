//! Lock service
//!
//! `LockService` validates requests and runs the decision engine
//! against the store. Every write to a lock row flows through here.

use std::sync::Arc;

use tracing::debug;

use lockd_common::{LockdError, now_nanos};

use super::engine::decide;
use super::model::{LockOutcome, LockRecord, LockRequest};
use crate::store::LockStore;

/// Coordinates lock decisions against a backing store
pub struct LockService {
    store: Arc<dyn LockStore>,
}

impl LockService {
    pub fn new(store: Arc<dyn LockStore>) -> Self {
        Self { store }
    }

    /// Evaluate a lock request
    ///
    /// Acquires, releases and renewals all go through here; the
    /// request shape selects the operation. The clock is read inside
    /// the store transaction, so the decision and the row it writes
    /// see the same `now`.
    pub async fn try_lock(&self, request: LockRequest) -> anyhow::Result<LockOutcome> {
        if request.key.is_empty() {
            return Err(LockdError::IllegalArgument("key is empty".to_string()).into());
        }
        if request.owner.is_empty() {
            return Err(LockdError::IllegalArgument("owner is empty".to_string()).into());
        }

        let key = request.key.clone();
        let outcome = self
            .store
            .transact(
                &key,
                Box::new(move |current| decide(current, &request, now_nanos())),
            )
            .await?;

        if outcome.acquired {
            debug!("Lock granted: {}", key);
        } else {
            debug!("Lock denied: {}", key);
        }

        Ok(outcome)
    }

    /// Read the current row for a key without changing it
    pub async fn lookup(&self, key: &str) -> anyhow::Result<LockRecord> {
        self.store.read(key).await
    }
}
