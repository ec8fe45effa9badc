// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_toast::toast::{ManualClock, Store, ToastSpec};
use std::hint::black_box;

fn store_churn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_churn");

    group.bench_function("add_remove_100", |b| {
        b.iter_batched(
            || Store::<()>::with_clock(ManualClock::new()),
            |mut store| {
                let ids: Vec<_> = (0..100)
                    .map(|i| store.add(ToastSpec::new().title(format!("toast {i}"))))
                    .collect();
                for id in ids {
                    black_box(store.remove(id));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("expire_100", |b| {
        b.iter_batched(
            || {
                let clock = ManualClock::new();
                let mut store = Store::<()>::with_clock(clock.clone());
                for i in 0..100 {
                    store.add(ToastSpec::new().title(format!("toast {i}")).duration_ms(i + 1));
                }
                clock.advance_ms(100);
                store
            },
            |mut store| black_box(store.expire_due()),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("snapshot_while_adding", |b| {
        b.iter_batched(
            || Store::<()>::with_clock(ManualClock::new()),
            |mut store| {
                for i in 0..100 {
                    store.add(ToastSpec::new().title(format!("toast {i}")));
                    black_box(store.toasts());
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, store_churn_benchmark);
criterion_main!(benches);
