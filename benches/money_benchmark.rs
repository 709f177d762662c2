// ============================================================================
// Money Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Sum - carry, borrow and plain additions
// 2. Multiplication - repeated addition vs exact i128 multiplication
// 3. Service - observer overhead around the core operations
// ============================================================================

use boutique_money::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Sum Benchmarks
// ============================================================================

fn benchmark_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    let cases = [
        ("plain", MoneyValue::new("USD", 1, 100), MoneyValue::new("USD", 2, 200)),
        (
            "carry",
            MoneyValue::new("USD", 0, 900_000_000),
            MoneyValue::new("USD", 0, 200_000_000),
        ),
        (
            "borrow",
            MoneyValue::new("USD", 1, 0),
            MoneyValue::new("USD", 0, -300_000_000),
        ),
    ];

    for (name, l, r) in cases.iter() {
        group.bench_with_input(BenchmarkId::new("sum", name), &(l, r), |b, (l, r)| {
            b.iter(|| black_box(l.sum(r)))
        });
    }

    group.finish();
}

// ============================================================================
// Multiplication Benchmarks
// Repeated addition grows linearly with the factor; checked_mul does not
// ============================================================================

fn benchmark_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let price = MoneyValue::new("USD", 19, 990_000_000);

    for factor in [1u32, 10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("multiply_slow", factor),
            factor,
            |b, &factor| b.iter(|| black_box(price.multiply_slow(factor))),
        );

        group.bench_with_input(
            BenchmarkId::new("checked_mul", factor),
            factor,
            |b, &factor| b.iter(|| black_box(price.checked_mul(i64::from(factor)))),
        );
    }

    group.finish();
}

// ============================================================================
// Service Benchmarks
// ============================================================================

fn benchmark_service_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("service_sum");
    let l = MoneyValue::new("USD", 5, 500_000_000);
    let r = MoneyValue::new("USD", 2, 600_000_000);

    let untraced = MoneyServiceBuilder::new("bench")
        .instrumentation(false)
        .build_untraced()
        .unwrap();
    group.bench_function("instrumentation_off", |b| {
        b.iter(|| black_box(untraced.sum(&l, &r)))
    });

    let noop = MoneyServiceBuilder::new("bench")
        .build(Arc::new(NoOpObserver))
        .unwrap();
    group.bench_function("noop_observer", |b| b.iter(|| black_box(noop.sum(&l, &r))));

    let traced = MoneyServiceBuilder::new("bench")
        .build(Arc::new(TracingObserver))
        .unwrap();
    group.bench_function("tracing_observer", |b| {
        b.iter(|| black_box(traced.sum(&l, &r)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sum,
    benchmark_multiply,
    benchmark_service_overhead
);
criterion_main!(benches);
