//! Sliding-window polynomial baseline
//!
//! Each sample gets its own least-squares polynomial, fitted over the window
//! `[max(0, i - h), min(n, i + h))` and evaluated only at `t_i`. Near the
//! ends the window shrinks rather than reflecting or padding.
//!
//! A window holding fewer than `degree + 1` samples, or one whose normal
//! equations are singular, takes the fallback: baseline `0`, corrected
//! sample equal to the original. The scan therefore always completes.
//!
//! Per-sample fits only read the shared signal, so the scan is fanned out
//! through an [`ExecutionEngine`]; each index writes its own output slot.
//!
//! Every window is solved in powers of `t - c` for a `c` near the window,
//! which gives the same fitted value as powers of `t` but keeps the normal
//! equations scaled to the window width instead of the absolute time axis.

use crate::detrend::subtract;
use crate::params::{LocalFitParameters, WindowStrategy};
use crate::traits::{BaselineEstimator, BaselineEstimatorProperties};
use num_traits::Float;
use robust_core::{ExecutionEngine, Result, SequentialEngine, Signal};
use robust_polyfit::{Degree, Polynomial, PolynomialKernel, PowerSums};
use serde::Serialize;
use std::ops::Range;
use tracing::{debug, instrument, trace, warn};

/// Sample range used for the fit at `index`
///
/// `[index - half_width, index + half_width)` clipped to `0..len`.
#[inline]
pub fn window_bounds(index: usize, len: usize, half_width: usize) -> Range<usize> {
    let start = index.saturating_sub(half_width);
    let end = index.saturating_add(half_width).min(len);
    start..end.max(start)
}

/// Result of a sliding-window fit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalBaselineFit<F = f64> {
    baseline: Vec<F>,
    corrected: Vec<F>,
    fallback: Vec<bool>,
    half_width: usize,
}

impl<F: Float> LocalBaselineFit<F> {
    pub fn baseline(&self) -> &[F] {
        &self.baseline
    }

    pub fn corrected(&self) -> &[F] {
        &self.corrected
    }

    pub fn len(&self) -> usize {
        self.baseline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baseline.is_empty()
    }

    /// Samples at each end supported by data on one side only (`h`)
    pub fn edge_samples(&self) -> usize {
        self.half_width
    }

    /// Whether sample `index` took the fallback (baseline 0)
    pub fn is_fallback(&self, index: usize) -> bool {
        self.fallback.get(index).copied().unwrap_or(false)
    }

    /// Number of samples that took the fallback
    pub fn fallback_count(&self) -> usize {
        self.fallback.iter().filter(|&&f| f).count()
    }

    /// Baseline and corrected values with `h` samples dropped at each end
    pub fn interior(&self) -> (&[F], &[F]) {
        let range = self.interior_range();
        (&self.baseline[range.clone()], &self.corrected[range])
    }

    /// Index range kept by [`interior`](Self::interior)
    pub fn interior_range(&self) -> Range<usize> {
        let n = self.len();
        let start = self.half_width.min(n);
        let end = n.saturating_sub(self.half_width).max(start);
        start..end
    }

    pub fn into_parts(self) -> (Vec<F>, Vec<F>) {
        (self.baseline, self.corrected)
    }
}

/// Fits an independent polynomial around every sample
#[derive(Debug, Clone)]
pub struct LocalBaselineFitter<E = SequentialEngine> {
    kernel: PolynomialKernel,
    params: LocalFitParameters,
    engine: E,
}

impl LocalBaselineFitter<SequentialEngine> {
    pub fn new(half_width: usize, degree: usize) -> Self {
        Self::with_params(LocalFitParameters {
            half_width,
            degree: Degree::new(degree),
            ..Default::default()
        })
    }

    pub fn with_params(params: LocalFitParameters) -> Self {
        Self {
            kernel: PolynomialKernel::for_degree(params.degree),
            params,
            engine: SequentialEngine,
        }
    }
}

impl<E: ExecutionEngine> LocalBaselineFitter<E> {
    /// Swap the execution engine used for the per-sample scan
    pub fn with_engine<E2: ExecutionEngine>(self, engine: E2) -> LocalBaselineFitter<E2> {
        LocalBaselineFitter {
            kernel: self.kernel,
            params: self.params,
            engine,
        }
    }

    pub fn with_strategy(mut self, strategy: WindowStrategy) -> Self {
        self.params.strategy = strategy;
        self
    }

    pub fn parameters(&self) -> &LocalFitParameters {
        &self.params
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Baseline value at `index`, or `None` when the window falls back
    ///
    /// Pure in `index`: reads only the shared columns. The window is solved
    /// about `times[index]`, so the baseline is the constant coefficient.
    pub fn fit_at<F: Float>(&self, times: &[F], amplitudes: &[F], index: usize) -> Option<F> {
        let window = window_bounds(index, times.len(), self.params.half_width);
        if window.len() < self.kernel.minimum_samples() {
            return None;
        }

        let fit = self
            .kernel
            .fit_about(&times[window.clone()], &amplitudes[window], times[index]);
        absorb(index, fit).map(|poly| poly.evaluate(F::zero()))
    }

    /// Fit every sample of `signal`
    #[instrument(skip_all, fields(
        n = signal.len(),
        half_width = self.params.half_width,
        degree = self.params.degree.get(),
        strategy = ?self.params.strategy
    ))]
    pub fn fit<F: Float + Send + Sync>(&self, signal: &Signal<F>) -> LocalBaselineFit<F> {
        if let Err(e) = self.params.validate() {
            warn!(error = %e, "every window will take the fallback");
        }

        let times = signal.times();
        let amplitudes = signal.amplitudes();

        let estimates = match self.params.strategy {
            WindowStrategy::Direct => self.scan_direct(times, amplitudes),
            WindowStrategy::Incremental => self.scan_incremental(times, amplitudes),
        };

        let fallback: Vec<bool> = estimates.iter().map(Option::is_none).collect();
        let baseline: Vec<F> = estimates.into_iter().map(|b| b.unwrap_or_else(F::zero)).collect();
        let corrected = subtract(amplitudes, &baseline);

        let fit = LocalBaselineFit {
            baseline,
            corrected,
            fallback,
            half_width: self.params.half_width,
        };
        debug!(fallbacks = fit.fallback_count(), "local baseline fit complete");
        fit
    }

    fn scan_direct<F: Float + Send + Sync>(&self, times: &[F], amplitudes: &[F]) -> Vec<Option<F>> {
        self.engine
            .execute_batch(times.len(), |i| self.fit_at(times, amplitudes, i))
    }

    /// Running sums per contiguous chunk of indices, so chunks run
    /// independently on the engine.
    fn scan_incremental<F: Float + Send + Sync>(&self, times: &[F], amplitudes: &[F]) -> Vec<Option<F>> {
        let n = times.len();
        if n == 0 {
            return Vec::new();
        }
        let n_chunks = self.engine.num_threads().max(1).min(n);
        let chunk_len = n.div_ceil(n_chunks);

        self.engine
            .execute_batch(n_chunks, |c| {
                let start = c * chunk_len;
                let end = (start + chunk_len).min(n);
                self.sweep(times, amplitudes, start..end)
            })
            .into_iter()
            .flatten()
            .collect()
    }

    /// Slide running sums over `indices`
    ///
    /// Every `reseed_interval()` indices the sums are rebuilt from the
    /// current window about the time at the middle of the next run, so
    /// rounding from removals never outlives one run and the abscissas in
    /// the sums stay within about `1.25 h` samples of the origin.
    fn sweep<F: Float>(&self, times: &[F], amplitudes: &[F], indices: Range<usize>) -> Vec<Option<F>> {
        let n = times.len();
        let h = self.params.half_width;
        let interval = self.reseed_interval();
        let first = indices.start;
        let mut out = Vec::with_capacity(indices.len());

        let mut sums = PowerSums::new(self.params.degree);
        // Samples currently in `sums` are exactly lo..hi
        let (mut lo, mut hi) = (0, 0);

        for i in indices {
            let window = window_bounds(i, n, h);
            if (i - first) % interval == 0 {
                let origin = times[(i + interval / 2).min(n - 1)];
                sums = PowerSums::from_samples_about(
                    &times[window.clone()],
                    &amplitudes[window.clone()],
                    self.params.degree,
                    origin,
                );
                lo = window.start;
                hi = window.end;
            } else {
                while hi < window.end {
                    sums.add(times[hi], amplitudes[hi]);
                    hi += 1;
                }
                while lo < window.start {
                    sums.remove(times[lo], amplitudes[lo]);
                    lo += 1;
                }
            }

            if window.len() < self.kernel.minimum_samples() {
                out.push(None);
                continue;
            }
            let origin = sums.origin();
            out.push(absorb(i, self.kernel.fit_sums(&sums)).map(|poly| poly.evaluate(times[i] - origin)));
        }
        out
    }

    /// Indices between rebuilds of the running sums
    fn reseed_interval(&self) -> usize {
        (self.params.half_width / 2).max(1)
    }
}

/// Map a window fit to the fallback policy
///
/// Degenerate windows (too few samples, singular system) are expected near
/// the edges and on repeated time stamps; anything else is unexpected but
/// still absorbed so the scan completes.
fn absorb<F>(index: usize, fit: Result<Polynomial<F>>) -> Option<Polynomial<F>> {
    match fit {
        Ok(poly) => Some(poly),
        Err(e) if e.is_degenerate_fit() => {
            trace!(index, error = %e, "window fit fell back");
            None
        }
        Err(e) => {
            warn!(index, error = %e, "unexpected window fit failure, falling back");
            None
        }
    }
}

impl<E: ExecutionEngine> BaselineEstimatorProperties for LocalBaselineFitter<E> {
    fn algorithm_name(&self) -> &'static str {
        "LocalPolynomial"
    }

    fn minimum_sample_size(&self) -> usize {
        self.kernel.minimum_samples()
    }
}

impl<F: Float + Send + Sync, E: ExecutionEngine> BaselineEstimator<F> for LocalBaselineFitter<E> {
    fn estimate_baseline(&self, signal: &Signal<F>) -> Result<Vec<F>> {
        Ok(self.fit(signal).baseline)
    }
}

/// Sliding-window fit with half-width `half_width` and `degree`
///
/// Never fails; windows that cannot be solved fall back per sample.
pub fn fit_local<F: Float + Send + Sync>(
    signal: &Signal<F>,
    half_width: usize,
    degree: usize,
) -> LocalBaselineFit<F> {
    LocalBaselineFitter::new(half_width, degree).fit(signal)
}

/// Sliding-window fit running the per-sample scan on `engine`
pub fn fit_local_with_engine<F, E>(
    signal: &Signal<F>,
    params: &LocalFitParameters,
    engine: E,
) -> LocalBaselineFit<F>
where
    F: Float + Send + Sync,
    E: ExecutionEngine,
{
    LocalBaselineFitter::with_params(params.clone())
        .with_engine(engine)
        .fit(signal)
}
