//! Sliding-window fit throughput
//!
//! Compares the direct and incremental power-sum strategies, and the
//! sequential and rayon engines when built with `--features parallel`.
//! Benchmark IDs read `strategy/engine/n<size>/h<half_width>`.
//!
//!   cargo bench --bench local_fit_bench --features parallel

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
#[cfg(feature = "parallel")]
use robust_detrend::robust_core::ParallelEngine;
use robust_detrend::prelude::*;
use std::time::Duration;

fn noisy_drift(n: usize) -> Signal<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let noise = Normal::new(0.0, 0.05).unwrap();
    let times: Vec<f64> = (0..n).map(|i| i as f64 / 500.0).collect();
    let amplitudes = times
        .iter()
        .map(|&t| (40.0 * t).sin() + 0.7 * (0.3 * t).cos() + noise.sample(&mut rng))
        .collect();
    Signal::new(times, amplitudes).unwrap()
}

fn bench_engine<E: ExecutionEngine>(
    c: &mut Criterion,
    engine_name: &str,
    engine: E,
    signal: &Signal<f64>,
    half_width: usize,
) {
    let mut group = c.benchmark_group("local_fit");
    group.throughput(Throughput::Elements(signal.len() as u64));
    group.measurement_time(Duration::from_secs(5));

    for strategy in [WindowStrategy::Direct, WindowStrategy::Incremental] {
        let params = LocalFitParameters {
            half_width,
            degree: Degree::new(2),
            strategy,
        };
        let id = BenchmarkId::new(
            format!("{strategy:?}/{engine_name}"),
            format!("n{}/h{half_width}", signal.len()),
        );
        group.bench_with_input(id, signal, |b, signal| {
            b.iter(|| fit_local_with_engine(black_box(signal), &params, engine.clone()))
        });
    }
    group.finish();
}

fn local_fit_benchmarks(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    for (n, half_width) in [(5_000, 50), (20_000, 250)] {
        let signal = noisy_drift(n);
        bench_engine(c, "seq", SequentialEngine, &signal, half_width);
        #[cfg(feature = "parallel")]
        bench_engine(c, "rayon", ParallelEngine::new(), &signal, half_width);
    }
}

fn global_fit_benchmarks(c: &mut Criterion) {
    let signal = noisy_drift(20_000);
    let mut group = c.benchmark_group("global_fit");
    group.throughput(Throughput::Elements(signal.len() as u64));

    for degree in [2usize, 5, 15] {
        let fitter = GlobalBaselineFitter::new(degree);
        group.bench_with_input(BenchmarkId::from_parameter(degree), &signal, |b, signal| {
            b.iter(|| fitter.fit(black_box(signal)))
        });
    }
    group.finish();
}

criterion_group!(benches, local_fit_benchmarks, global_fit_benchmarks);
criterion_main!(benches);
