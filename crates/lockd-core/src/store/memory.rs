//! In-memory lock store
//!
//! Backs tests and volatile single-node deployments. The map's shard
//! lock is held while a decision runs, which serializes all requests
//! for a given key.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::{DecisionFn, LockStore};
use crate::lock::{Decision, LockOutcome, LockRecord};

/// Lock store backed by a concurrent map
#[derive(Debug, Default)]
pub struct MemoryLockStore {
    records: DashMap<String, LockRecord>,
}

impl MemoryLockStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }
}

#[async_trait]
impl LockStore for MemoryLockStore {
    async fn read(&self, key: &str) -> anyhow::Result<LockRecord> {
        Ok(self.records.get(key).map(|r| r.clone()).unwrap_or_default())
    }

    async fn transact(&self, key: &str, decide: DecisionFn) -> anyhow::Result<LockOutcome> {
        match self.records.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => match decide(occupied.get()) {
                Decision::Granted(record) => {
                    occupied.insert(record.clone());
                    Ok(LockOutcome {
                        acquired: true,
                        record,
                    })
                }
                Decision::Denied => Ok(LockOutcome {
                    acquired: false,
                    record: occupied.get().clone(),
                }),
            },
            // Denials on absent keys leave the map untouched
            Entry::Vacant(vacant) => {
                let current = LockRecord::default();
                match decide(&current) {
                    Decision::Granted(record) => {
                        vacant.insert(record.clone());
                        Ok(LockOutcome {
                            acquired: true,
                            record,
                        })
                    }
                    Decision::Denied => Ok(LockOutcome {
                        acquired: false,
                        record: current,
                    }),
                }
            }
        }
    }
}
