//! Criterion benchmarks for the greedy planner.
//!
//! Measures planning time across recipient counts (100, 500, 1000). The
//! nearest-neighbour scan is quadratic in the recipient count, so these
//! sizes make regressions in the inner loop visible.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package sleigh-planner
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geo::Coord;
use sleigh_core::test_support::{PlanarDistance, capacity, catalog_of};
use sleigh_core::{PlanRequest, Planner};
use sleigh_planner::GreedyPlanner;

mod bench_support;

use bench_support::{BENCHMARK_SEED, ITEMS, generate_clustered_recipients};

/// Recipient counts to benchmark.
const PROBLEM_SIZES: &[u64] = &[100, 500, 1000];

fn build_request(count: u64) -> PlanRequest {
    PlanRequest {
        depot: Coord { x: 0.0, y: 0.0 },
        recipients: generate_clustered_recipients(count, BENCHMARK_SEED),
        catalog: catalog_of(ITEMS),
        capacity: capacity(40.0, 30.0),
    }
}

fn bench_plan_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_time");
    let planner = GreedyPlanner::new(PlanarDistance);

    for &size in PROBLEM_SIZES {
        let request = build_request(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &request, |b, req| {
            b.iter(|| {
                let response = planner.plan(black_box(req));
                black_box(response)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plan_times);
criterion_main!(benches);
