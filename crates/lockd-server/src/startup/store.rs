//! Lock store construction
//!
//! Resolves the configured backend name and opens the store it names.
//! Unknown names fail startup instead of falling back to a default.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use lockd_core::{LockStore, MemoryLockStore, RocksLockStore};

/// Supported lock store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Embedded RocksDB transaction store
    Rocksdb,
    /// In-process map, volatile
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rocksdb" => Ok(Self::Rocksdb),
            "memory" => Ok(Self::Memory),
            _ => Err(format!("Unknown store backend: {}", s)),
        }
    }
}

/// Open the lock store named by the configuration
///
/// The memory backend ignores `data_dir`.
pub fn build_store(backend: &str, data_dir: &str) -> anyhow::Result<Arc<dyn LockStore>> {
    match backend.parse::<StoreBackend>().map_err(anyhow::Error::msg)? {
        StoreBackend::Memory => {
            info!("Using in-memory lock store");
            Ok(Arc::new(MemoryLockStore::new()))
        }
        StoreBackend::Rocksdb => {
            info!("Opening RocksDB lock store at: {}", data_dir);
            let store = RocksLockStore::open(data_dir)
                .with_context(|| format!("Failed to open lock store at {}", data_dir))?;
            Ok(Arc::new(store))
        }
    }
}
