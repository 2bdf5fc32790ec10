//! Storage adapters for lock rows
//!
//! `LockStore` hides the backing key-value store behind a small trait.
//! Reads never take row locks. Writes only happen through `transact`,
//! which runs a decision against the current row while holding that
//! row exclusively, so concurrent requests for one key serialize.

use async_trait::async_trait;

use crate::lock::{Decision, LockOutcome, LockRecord};

mod memory;
mod rocks;

pub use memory::MemoryLockStore;
pub use rocks::RocksLockStore;

/// Decision callback evaluated against the current row
pub type DecisionFn = Box<dyn FnOnce(&LockRecord) -> Decision + Send>;

/// Transactional store for lock rows
#[async_trait]
pub trait LockStore: Send + Sync {
    /// Read the current row
    ///
    /// Absent keys read as the default record.
    async fn read(&self, key: &str) -> anyhow::Result<LockRecord>;

    /// Evaluate `decide` against the current row and, on a grant,
    /// write the resulting record atomically
    async fn transact(&self, key: &str, decide: DecisionFn) -> anyhow::Result<LockOutcome>;
}
