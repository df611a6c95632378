//! Core traits for baseline estimation
//!
//! Global and local fitters share one interface so callers can swap the
//! drift model without touching the detrending code around it.

use crate::detrend::subtract;
use num_traits::Float;
use robust_core::{Result, Signal};

/// Properties of a baseline estimator that don't depend on the data
pub trait BaselineEstimatorProperties {
    /// Get the name of the estimation algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Minimum number of samples a fit needs to determine its coefficients
    fn minimum_sample_size(&self) -> usize;
}

/// Estimates a per-sample baseline for a signal
pub trait BaselineEstimator<F: Float>: BaselineEstimatorProperties {
    /// One baseline value per sample, same indexing as the signal
    fn estimate_baseline(&self, signal: &Signal<F>) -> Result<Vec<F>>;

    /// Signal with the estimated baseline subtracted
    fn detrend(&self, signal: &Signal<F>) -> Result<Vec<F>> {
        let baseline = self.estimate_baseline(signal)?;
        Ok(subtract(signal.amplitudes(), &baseline))
    }
}
