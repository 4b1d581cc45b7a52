//! Criterion benchmarks for the pi estimator.
//!
//! Benchmarks cover:
//! - Uniform generation for both generators
//! - Sequential counting at 10K, 100K and 1M trials
//! - Parallel counting at 1M and 10M trials

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pi_estimator::mc::{count_inside, Estimator, EstimatorConfig, ExecutionMode};
use pi_estimator::rng::{StdUniformRng, UniformSource, Xorshift64};

/// Benchmark raw uniform generation.
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("xorshift64", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = Xorshift64::from_seed(42);
                b.iter(|| {
                    let mut sum = 0.0;
                    for _ in 0..n {
                        sum += rng.next_uniform();
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("std", n_samples), &n_samples, |b, &n| {
            let mut rng = StdUniformRng::from_seed(42);
            b.iter(|| {
                let mut sum = 0.0;
                for _ in 0..n {
                    sum += rng.next_uniform();
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

/// Benchmark the sequential reference loop.
fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");

    for n_trials in [10_000u64, 100_000, 1_000_000] {
        group.bench_with_input(
            BenchmarkId::new("count_inside", n_trials),
            &n_trials,
            |b, &n| {
                b.iter(|| {
                    let mut rng = Xorshift64::from_seed(42);
                    black_box(count_inside(&mut rng, n))
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the chunked parallel driver.
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    group.sample_size(20);

    for n_trials in [1_000_000u64, 10_000_000] {
        let config = EstimatorConfig::builder()
            .n_trials(n_trials)
            .mode(ExecutionMode::parallel())
            .build()
            .unwrap();
        let estimator = Estimator::new(config).unwrap();

        group.bench_with_input(BenchmarkId::new("run", n_trials), &estimator, |b, est| {
            b.iter(|| black_box(est.run()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rng_generation, bench_sequential, bench_parallel);
criterion_main!(benches);
