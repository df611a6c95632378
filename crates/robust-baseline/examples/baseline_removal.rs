//! Baseline wander removal on a recorded or synthetic ECG trace
//!
//! Usage: `cargo run --example baseline_removal -- [FILE] [START] [END]`
//!
//! FILE holds `time amplitude` or bare `amplitude` rows. Without a file a
//! synthetic trace with slow drift is generated. Set `RUST_LOG=debug` to see
//! per-fit events from the library.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use robust_baseline::{
    GlobalBaselineFitter, LocalBaselineFitter, LocalFitParameters, WindowStrategy,
};
use robust_core::Signal;
use robust_polyfit::Degree;
use robust_signal_io::{load_signal, LoadOptions};
use std::f64::consts::PI;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn synthetic_ecg(n: usize, fs: f64) -> Result<Signal<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let noise = Normal::new(0.0, 0.02)?;

    let times: Vec<f64> = (0..n).map(|i| i as f64 / fs).collect();
    let amplitudes = times
        .iter()
        .map(|&t| {
            // Narrow Gaussian "R peaks" at 1.2 Hz
            let phase = (t * 1.2).fract() - 0.5;
            let beat = (-phase * phase / 0.0008).exp();
            let drift = 0.6 * (2.0 * PI * 0.15 * t).sin() + 0.05 * t;
            beat + drift + noise.sample(&mut rng)
        })
        .collect();
    Ok(Signal::new(times, amplitudes)?)
}

fn parse_index(arg: Option<String>, default: usize) -> Result<usize> {
    match arg {
        Some(s) => s.parse().with_context(|| format!("invalid sample index {s:?}")),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let signal = match args.next() {
        Some(path) => load_signal(&path, &LoadOptions::default())
            .with_context(|| format!("failed to load {path}"))?,
        None => {
            info!("no input file given, generating a synthetic trace");
            synthetic_ecg(10_000, 500.0)?
        }
    };
    let start = parse_index(args.next(), 0)?;
    let end = parse_index(args.next(), 10_000)?;
    let segment = signal.segment(start..end);
    info!(samples = segment.len(), start, end, "analysing segment");

    for degree in [5, 15] {
        let fitter = GlobalBaselineFitter::new(degree);
        fitter.parameters().validate()?;
        match fitter.fit(&segment) {
            Ok(fit) => {
                info!(degree, r_squared = fit.r_squared(), "global polynomial fit");
                println!("Global order {degree} coefficients:\n{}", fit.polynomial());
            }
            Err(e) => warn!(degree, error = %e, "global fit failed"),
        }
    }

    let params = LocalFitParameters {
        half_width: 250,
        degree: Degree::new(2),
        strategy: WindowStrategy::Incremental,
    };
    params.validate()?;
    let local = LocalBaselineFitter::with_params(params).fit(&segment);
    let (_, corrected) = local.interior();
    let spread = corrected
        .iter()
        .fold(f64::NEG_INFINITY, |m, &c| m.max(c.abs()));
    info!(
        fallbacks = local.fallback_count(),
        interior = corrected.len(),
        max_abs_corrected = spread,
        "local polynomial fit"
    );

    Ok(())
}
