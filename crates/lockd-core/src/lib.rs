//! Lockd Core - lock engine and storage adapters
//!
//! This crate provides:
//! - The lock data model and decision engine
//! - The lock service coordinating decisions against a store
//! - Storage adapters (RocksDB and in-memory)

pub mod lock;
pub mod store;

// Re-export lock types
pub use lock::{Decision, LockOutcome, LockRecord, LockRequest, LockService, decide};

// Re-export store types
pub use store::{DecisionFn, LockStore, MemoryLockStore, RocksLockStore};
