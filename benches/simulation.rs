//! Benchmarks for the SKU coverage simulator.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark group
//! cargo bench -- generate
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use sku_coverage::combinatorics::{binomial, generate};
use sku_coverage::engine::FulfillmentEvaluator;
use sku_coverage::{ExecutionMode, Order, Simulator, SimulatorConfig, SkuCatalog};

// ============================================================================
// HELPER FUNCTIONS - Deterministic workload generation
// ============================================================================

fn make_catalog(size: usize) -> SkuCatalog {
    SkuCatalog::from_listing((0..size).map(|i| (i as u64 + 1, format!("sku-{i}"))).collect())
        .expect("catalog")
}

/// Generate orders of 1-3 SKUs with a seeded RNG.
fn make_orders(catalog_size: usize, count: usize, seed: u64) -> Vec<Order> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let size = rng.gen_range(1..=3);
            let indices: Vec<usize> = (0..size).map(|_| rng.gen_range(0..catalog_size)).collect();
            Order::new(format!("order-{i}"), catalog_size, &indices).expect("order")
        })
        .collect()
}

// ============================================================================
// BENCHMARK: Subset Generation
// ============================================================================

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.measurement_time(Duration::from_secs(5));

    for m in [12usize, 16, 20] {
        let k = m / 2;
        let size = binomial(m, k).expect("fits") as u64;
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("half", m), &m, |b, &m| {
            b.iter(|| black_box(generate(k, m).expect("family")))
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Evaluation
// ============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    group.measurement_time(Duration::from_secs(5));

    let m = 16;
    let family = generate(8, m).expect("family");
    for order_count in [100usize, 1_000, 10_000] {
        let orders = make_orders(m, order_count, 42);
        group.throughput(Throughput::Elements(family.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("orders", order_count),
            &orders,
            |b, orders| {
                let evaluator = FulfillmentEvaluator::for_cardinality(orders, 8);
                b.iter(|| {
                    let total: usize = family.iter().map(|s| evaluator.score(s)).sum();
                    black_box(total)
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Full Run
// ============================================================================

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    let m = 16;
    let catalog = make_catalog(m);
    let orders = make_orders(m, 1_000, 7);

    let modes = [
        ("sequential", ExecutionMode::Sequential),
        ("parallel", ExecutionMode::Parallel { workers: None }),
    ];
    for (name, execution) in modes {
        let simulator = Simulator::new(SimulatorConfig::default().with_execution(execution))
            .expect("simulator");
        group.throughput(Throughput::Elements(1 << m));
        group.bench_function(name, |b| {
            b.iter(|| black_box(simulator.run(&catalog, &orders).expect("run")))
        });
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_generate, bench_evaluate, bench_full_run);

criterion_main!(benches);
