//! Polynomial fitting kernel
//!
//! Ties the power-sum builder, the normal-equations solver and the evaluator
//! together for one fit over one sample subset. Fitters hold a kernel and
//! call it once (global mode) or once per window (local mode).

use crate::{Degree, NormalEquations, Polynomial, PowerSums};
use num_traits::Float;
use robust_core::{Error, Result};

/// Kernel for least-squares polynomial fitting of a fixed degree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolynomialKernel {
    degree: Degree,
}

impl PolynomialKernel {
    pub fn new(degree: usize) -> Self {
        Self::for_degree(Degree::new(degree))
    }

    pub fn for_degree(degree: Degree) -> Self {
        Self { degree }
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    /// Minimum number of samples that determines every coefficient
    pub fn minimum_samples(&self) -> usize {
        self.degree.system_size()
    }

    /// Fit `values ≈ p(times)` by least squares
    pub fn fit<F: Float>(&self, times: &[F], values: &[F]) -> Result<Polynomial<F>> {
        self.fit_about(times, values, F::zero())
    }

    /// Fit `values ≈ q(times - center)` by least squares
    ///
    /// Same fitted values as [`fit`](Self::fit), but the returned
    /// coefficients are in powers of `t - center`, so `q(0)` is the fit at
    /// `center`. A center inside the subset keeps the normal equations
    /// scaled to the subset width.
    pub fn fit_about<F: Float>(&self, times: &[F], values: &[F], center: F) -> Result<Polynomial<F>> {
        if times.len() != values.len() {
            return Err(Error::size_mismatch(times.len(), values.len(), "values"));
        }
        if times.len() < self.minimum_samples() {
            return Err(Error::InsufficientSamples {
                required: self.minimum_samples(),
                actual: times.len(),
            });
        }

        let sums = PowerSums::from_samples_about(times, values, self.degree, center);
        NormalEquations::from_power_sums(&sums).solve()
    }

    /// Fit from sums accumulated elsewhere (e.g. a sliding window)
    ///
    /// The polynomial is in powers of `t - sums.origin()`.
    pub fn fit_sums<F: Float>(&self, sums: &PowerSums<F>) -> Result<Polynomial<F>> {
        if sums.degree() != self.degree {
            return Err(Error::InvalidParameter(format!(
                "power sums built for degree {}, kernel has degree {}",
                sums.degree(),
                self.degree
            )));
        }
        if !sums.is_determined() {
            return Err(Error::InsufficientSamples {
                required: self.minimum_samples(),
                actual: sums.count(),
            });
        }
        NormalEquations::from_power_sums(sums).solve()
    }

    /// Residuals `values - p(times)`
    pub fn residuals<F: Float>(&self, times: &[F], values: &[F], poly: &Polynomial<F>) -> Vec<F> {
        times
            .iter()
            .zip(values)
            .map(|(&t, &x)| x - poly.evaluate(t))
            .collect()
    }
}
