//! RocksDB-backed lock store
//!
//! Rows live in a dedicated column family of a `TransactionDB`. Each
//! decision runs under a pessimistic transaction that takes the row
//! lock exclusively, so concurrent requests for one key serialize
//! while different keys proceed in parallel.

use std::path::Path;

use async_trait::async_trait;
use rocksdb::{
    BlockBasedOptions, ColumnFamily, ColumnFamilyDescriptor, Options, TransactionDB,
    TransactionDBOptions,
};

use lockd_common::LockdError;

use super::{DecisionFn, LockStore};
use crate::lock::{Decision, LockOutcome, LockRecord};

/// Column family holding one serialized `LockRecord` per lock name
pub const CF_LOCKS: &str = "locks";

/// Lock store backed by a RocksDB transaction database
pub struct RocksLockStore {
    db: TransactionDB,
}

impl RocksLockStore {
    /// Open or create the store at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let mut db_opts = Options::default();
        db_opts.create_if_missing(true);
        db_opts.create_missing_column_families(true);

        // Lock rows are tiny, so the buffers stay small
        db_opts.set_write_buffer_size(16 * 1024 * 1024);
        db_opts.set_max_write_buffer_number(3);
        db_opts.set_compression_type(rocksdb::DBCompressionType::Lz4);

        let mut block_opts = BlockBasedOptions::default();
        let cache = rocksdb::Cache::new_lru_cache(32 * 1024 * 1024);
        block_opts.set_block_cache(&cache);
        block_opts.set_bloom_filter(10.0, false);

        let mut cf_opts = Options::default();
        cf_opts.set_write_buffer_size(16 * 1024 * 1024);
        cf_opts.set_compression_type(rocksdb::DBCompressionType::Lz4);
        cf_opts.set_block_based_table_factory(&block_opts);

        let cfs = vec![ColumnFamilyDescriptor::new(CF_LOCKS, cf_opts)];

        let db = TransactionDB::open_cf_descriptors(
            &db_opts,
            &TransactionDBOptions::default(),
            path,
            cfs,
        )
        .map_err(|e| LockdError::Storage(e.to_string()))?;

        Ok(Self { db })
    }

    // The column family is created at open time; a missing handle
    // means the database is corrupted.
    fn cf_locks(&self) -> &ColumnFamily {
        self.db
            .cf_handle(CF_LOCKS)
            .expect("CF_LOCKS must exist - database may be corrupted")
    }
}

#[async_trait]
impl LockStore for RocksLockStore {
    async fn read(&self, key: &str) -> anyhow::Result<LockRecord> {
        match self
            .db
            .get_cf(self.cf_locks(), key.as_bytes())
            .map_err(|e| LockdError::Storage(e.to_string()))?
        {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)
                .map_err(|e| LockdError::Serialization(e.to_string()))?),
            None => Ok(LockRecord::default()),
        }
    }

    async fn transact(&self, key: &str, decide: DecisionFn) -> anyhow::Result<LockOutcome> {
        let txn = self.db.transaction();

        let current = match txn
            .get_for_update_cf(self.cf_locks(), key.as_bytes(), true)
            .map_err(|e| LockdError::Storage(e.to_string()))?
        {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| LockdError::Serialization(e.to_string()))?,
            None => LockRecord::default(),
        };

        match decide(&current) {
            Decision::Granted(record) => {
                let bytes = serde_json::to_vec(&record)
                    .map_err(|e| LockdError::Serialization(e.to_string()))?;
                txn.put_cf(self.cf_locks(), key.as_bytes(), bytes)
                    .map_err(|e| LockdError::Storage(e.to_string()))?;
                txn.commit().map_err(|e| LockdError::Storage(e.to_string()))?;
                Ok(LockOutcome {
                    acquired: true,
                    record,
                })
            }
            // Dropping the transaction releases the row lock without
            // writing
            Decision::Denied => Ok(LockOutcome {
                acquired: false,
                record: current,
            }),
        }
    }
}
