use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use tokio::runtime::Runtime;

use lockd_core::{LockRecord, LockRequest, LockStore, MemoryLockStore, decide};

const NOW: i64 = 1_700_000_000_000_000_000;

fn bench_decide_grant(c: &mut Criterion) {
    let current = LockRecord::default();
    let request = LockRequest {
        key: "bench".to_string(),
        owner: "worker".to_string(),
        duration_millis: 5000,
        unlock_token: None,
    };

    c.bench_function("decide_grant", |b| {
        b.iter(|| black_box(decide(black_box(&current), black_box(&request), NOW)))
    });
}

fn bench_decide_deny(c: &mut Criterion) {
    let current = LockRecord {
        owner: "holder".to_string(),
        lock_until: NOW + 5_000_000_000,
        modified_time: NOW,
    };
    let request = LockRequest {
        key: "bench".to_string(),
        owner: "worker".to_string(),
        duration_millis: 5000,
        unlock_token: None,
    };

    c.bench_function("decide_deny", |b| {
        b.iter(|| black_box(decide(black_box(&current), black_box(&request), NOW)))
    });
}

fn bench_memory_transact(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let store = Arc::new(MemoryLockStore::new());

    // Zero-duration requests leave the row unheld, so every iteration
    // takes the grant path
    c.bench_function("memory_transact_grant", |b| {
        b.to_async(&rt).iter(|| {
            let store = store.clone();
            async move {
                let request = LockRequest {
                    key: "bench".to_string(),
                    owner: "worker".to_string(),
                    duration_millis: 0,
                    unlock_token: None,
                };
                black_box(
                    store
                        .transact("bench", Box::new(move |current| decide(current, &request, NOW)))
                        .await
                        .unwrap(),
                )
            }
        })
    });
}

criterion_group!(
    benches,
    bench_decide_grant,
    bench_decide_deny,
    bench_memory_transact
);
criterion_main!(benches);
