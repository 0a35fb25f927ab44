use criterion::{Criterion, criterion_group, criterion_main};
use inventory::{InMemorySeatLedger, SeatLedger, SeatLedgerExt, Version};

fn bench_reserve_single(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("ledger/reserve_single", |b| {
        b.iter(|| {
            rt.block_on(async {
                let ledger = InMemorySeatLedger::new(500);
                ledger.reserve(5, Version::initial()).await.unwrap();
            });
        });
    });
}

fn bench_reserve_release_cycle(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let ledger = InMemorySeatLedger::new(500);

    c.bench_function("ledger/reserve_release_cycle", |b| {
        b.iter(|| {
            rt.block_on(async {
                ledger.reserve_at_current(5).await.unwrap();
                ledger.release(5).await;
            });
        });
    });
}

fn bench_drain_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("ledger/drain_100_reservations", |b| {
        b.iter(|| {
            rt.block_on(async {
                let ledger = InMemorySeatLedger::new(500);
                for _ in 0..100 {
                    ledger.reserve_at_current(5).await.unwrap();
                }
            });
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let ledger = InMemorySeatLedger::new(500);

    c.bench_function("ledger/snapshot", |b| {
        b.iter(|| {
            rt.block_on(async {
                ledger.snapshot().await;
            });
        });
    });
}

criterion_group!(
    benches,
    bench_reserve_single,
    bench_reserve_release_cycle,
    bench_drain_100,
    bench_snapshot
);
criterion_main!(benches);
