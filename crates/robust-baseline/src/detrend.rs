//! Baseline subtraction and goodness of fit
//!
//! `corrected[i] = x[i] - baseline[i]`, plus the residual and total sums of
//! squares behind R²:
//!
//! - `Sr = Σ (x_i - baseline_i)²`
//! - `St = Σ (x_i - mean(x))²`
//! - `R² = 1 - Sr / St`
//!
//! For a constant signal (`St = 0`) R² is 1 when the baseline is exact and
//! negative infinity otherwise, so the result is never NaN.

use num_traits::Float;
use robust_core::{Error, Result};
use serde::Serialize;

/// Subtract `baseline` from `amplitudes` elementwise
pub fn detrend<F: Float>(amplitudes: &[F], baseline: &[F]) -> Result<Vec<F>> {
    if amplitudes.len() != baseline.len() {
        return Err(Error::size_mismatch(amplitudes.len(), baseline.len(), "baseline"));
    }
    Ok(subtract(amplitudes, baseline))
}

#[inline]
pub(crate) fn subtract<F: Float>(amplitudes: &[F], baseline: &[F]) -> Vec<F> {
    amplitudes
        .iter()
        .zip(baseline)
        .map(|(&x, &b)| x - b)
        .collect()
}

/// Sums of squares and R² of a baseline against its signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoodnessOfFit<F = f64> {
    /// Residual sum of squares
    pub sr: F,
    /// Total sum of squares about the mean
    pub st: F,
    /// Coefficient of determination
    pub r_squared: F,
}

impl<F: Float> GoodnessOfFit<F> {
    pub fn compute(amplitudes: &[F], baseline: &[F]) -> Result<Self> {
        if amplitudes.len() != baseline.len() {
            return Err(Error::size_mismatch(amplitudes.len(), baseline.len(), "baseline"));
        }
        if amplitudes.is_empty() {
            return Err(Error::InsufficientSamples {
                required: 1,
                actual: 0,
            });
        }

        let n = F::from(amplitudes.len())
            .ok_or_else(|| Error::InvalidInput("sample count not representable".to_string()))?;
        let mean = amplitudes.iter().fold(F::zero(), |acc, &x| acc + x) / n;

        let sr = amplitudes
            .iter()
            .zip(baseline)
            .fold(F::zero(), |acc, (&x, &b)| acc + (x - b) * (x - b));
        let st = amplitudes
            .iter()
            .fold(F::zero(), |acc, &x| acc + (x - mean) * (x - mean));

        let r_squared = if st == F::zero() {
            if sr == F::zero() {
                F::one()
            } else {
                F::neg_infinity()
            }
        } else {
            F::one() - sr / st
        };

        Ok(Self { sr, st, r_squared })
    }
}

/// R² of `baseline` as a model of `amplitudes`
pub fn r_squared<F: Float>(amplitudes: &[F], baseline: &[F]) -> Result<F> {
    GoodnessOfFit::compute(amplitudes, baseline).map(|g| g.r_squared)
}
