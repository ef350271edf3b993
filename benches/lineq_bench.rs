//! Criterion benchmarks for the linear-equation GA.
//!
//! Uses an unreachable target so every run goes to the generation limit and
//! measures pure loop overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lineq_ga::equation::{Coefficients, LinearEquation};
use lineq_ga::ga::{GaConfig, GaRunner, GeneBounds};

fn bench_ga_exhausted(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_exhausted");
    group.sample_size(10);

    let bounds = GeneBounds::new(-100, 100).expect("valid bounds");
    let problem = LinearEquation::new(Coefficients::new(1, 1, 1, 1_000_000), bounds);

    for (pop, gen) in [(50usize, 100usize), (150, 100), (500, 50)] {
        let config = GaConfig {
            population_size: pop,
            max_generations: gen,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(&problem), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_ga_parallel_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_parallel_eval");
    group.sample_size(10);

    let bounds = GeneBounds::new(-1000, 1000).expect("valid bounds");
    let problem = LinearEquation::new(Coefficients::new(7, -3, 11, 9_999_999), bounds);

    for parallel in [false, true] {
        let config = GaConfig::default()
            .with_population_size(2000)
            .with_max_generations(20)
            .with_parallel(parallel)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(parallel), &config, |b, c| {
            b.iter(|| {
                let result = GaRunner::run(black_box(&problem), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga_exhausted, bench_ga_parallel_eval);
criterion_main!(benches);
