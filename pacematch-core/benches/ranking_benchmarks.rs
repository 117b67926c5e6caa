//! Criterion benchmarks for the run ranking engine.
//!
//! Measures ranking time across dataset sizes (100, 1,000, 10,000 runs) to
//! track performance and detect regressions. Results include statistical
//! analysis with percentile distributions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package pacematch-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pacematch_core::{PaceRange, SeekerQuery, rank};

mod bench_support;

use bench_support::{BENCHMARK_SEED, generate_clustered_runs};

/// Dataset sizes to benchmark: 100, 1,000, 10,000 candidate runs.
const PROBLEM_SIZES: &[usize] = &[100, 1_000, 10_000];

/// Build a standard benchmark query.
///
/// Places the seeker at the centre of the run area with a mid-table pace
/// bucket so every availability level appears in the results.
fn build_benchmark_query() -> SeekerQuery {
    SeekerQuery {
        latitude: 39.25,
        longitude: -77.25,
        pace_range: PaceRange::NineToTen,
    }
}

/// Benchmark ranking times for various dataset sizes.
///
/// For each dataset size (100, 1,000, 10,000 runs), this benchmark:
/// 1. Generates a deterministic set of clustered runs
/// 2. Measures the time to rank the full dataset for one seeker
///
/// The benchmark uses 100 samples and 10-second measurement windows for
/// reliable P95/P99 estimation.
fn bench_ranking_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking_time");

    // Configure for reliable percentile estimation.
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(10));

    for &size in PROBLEM_SIZES {
        // Pre-generate inputs outside the benchmark loop.
        let runs = generate_clustered_runs(size, BENCHMARK_SEED);
        let query = build_benchmark_query();

        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small problem sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("runs", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking ranking performance, result is intentionally discarded"
                )]
                let _ = rank(&runs, &query);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ranking_times);
criterion_main!(benches);
