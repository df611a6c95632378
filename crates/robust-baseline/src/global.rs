//! Global polynomial baseline
//!
//! One least-squares polynomial over the whole segment. Suited to drift that
//! is smooth over the segment; for nonstationary drift see
//! [`crate::local`].

use crate::detrend::{subtract, GoodnessOfFit};
use crate::params::GlobalFitParameters;
use crate::traits::{BaselineEstimator, BaselineEstimatorProperties};
use num_traits::Float;
use robust_core::{validate_columns, Result, Signal};
use robust_polyfit::{Degree, Polynomial, PolynomialKernel};
use serde::Serialize;
use tracing::{debug, instrument};

/// Result of a global fit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalBaselineFit<F = f64> {
    polynomial: Polynomial<F>,
    baseline: Vec<F>,
    corrected: Vec<F>,
    goodness: GoodnessOfFit<F>,
}

impl<F: Float> GlobalBaselineFit<F> {
    pub fn polynomial(&self) -> &Polynomial<F> {
        &self.polynomial
    }

    /// `coefficients()[i]` multiplies `t^i`
    pub fn coefficients(&self) -> &[F] {
        self.polynomial.coefficients()
    }

    pub fn baseline(&self) -> &[F] {
        &self.baseline
    }

    pub fn corrected(&self) -> &[F] {
        &self.corrected
    }

    pub fn goodness(&self) -> &GoodnessOfFit<F> {
        &self.goodness
    }

    pub fn r_squared(&self) -> F {
        self.goodness.r_squared
    }
}

/// Fits one polynomial to an entire segment
#[derive(Debug, Clone)]
pub struct GlobalBaselineFitter {
    kernel: PolynomialKernel,
    params: GlobalFitParameters,
}

impl GlobalBaselineFitter {
    pub fn new(degree: usize) -> Self {
        Self::with_params(GlobalFitParameters {
            degree: Degree::new(degree),
        })
    }

    pub fn with_params(params: GlobalFitParameters) -> Self {
        Self {
            kernel: PolynomialKernel::for_degree(params.degree),
            params,
        }
    }

    pub fn parameters(&self) -> &GlobalFitParameters {
        &self.params
    }

    /// Fit a signal
    pub fn fit<F: Float>(&self, signal: &Signal<F>) -> Result<GlobalBaselineFit<F>> {
        self.fit_columns(signal.times(), signal.amplitudes())
    }

    /// Fit raw time and amplitude columns
    ///
    /// Fails with `InsufficientSamples` when there are fewer than
    /// `degree + 1` samples.
    #[instrument(skip_all, fields(n = times.len(), degree = self.params.degree.get()))]
    pub fn fit_columns<F: Float>(&self, times: &[F], amplitudes: &[F]) -> Result<GlobalBaselineFit<F>> {
        self.params.validate()?;
        validate_columns(times, amplitudes)?;

        let polynomial = self.kernel.fit(times, amplitudes)?;
        let baseline = polynomial.evaluate_many(times);
        let corrected = subtract(amplitudes, &baseline);
        let goodness = GoodnessOfFit::compute(amplitudes, &baseline)?;

        debug!(
            r_squared = goodness.r_squared.to_f64(),
            "global baseline fit complete"
        );

        Ok(GlobalBaselineFit {
            polynomial,
            baseline,
            corrected,
            goodness,
        })
    }
}

impl BaselineEstimatorProperties for GlobalBaselineFitter {
    fn algorithm_name(&self) -> &'static str {
        "GlobalPolynomial"
    }

    fn minimum_sample_size(&self) -> usize {
        self.kernel.minimum_samples()
    }
}

impl<F: Float> BaselineEstimator<F> for GlobalBaselineFitter {
    fn estimate_baseline(&self, signal: &Signal<F>) -> Result<Vec<F>> {
        self.fit(signal).map(|fit| fit.baseline)
    }
}

/// Fit one polynomial of `degree` over the whole signal
pub fn fit_global<F: Float>(times: &[F], amplitudes: &[F], degree: usize) -> Result<GlobalBaselineFit<F>> {
    GlobalBaselineFitter::new(degree).fit_columns(times, amplitudes)
}
