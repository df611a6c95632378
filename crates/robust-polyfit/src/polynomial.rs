//! Polynomial in the monomial basis

use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coefficient vector where `coefficients[i]` multiplies `t^i`
///
/// Coefficients are only meaningful for the abscissa scale they were fitted
/// on; there is no rescaling of `t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial<F = f64> {
    coefficients: Vec<F>,
}

impl<F: Float> Polynomial<F> {
    pub fn new(coefficients: Vec<F>) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<F> {
        self.coefficients
    }

    /// Degree implied by the coefficient count; an empty polynomial reports 0
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluate at `t` using Horner's rule
    #[inline]
    pub fn evaluate(&self, t: F) -> F {
        evaluate(&self.coefficients, t)
    }

    /// Evaluate at every abscissa in `times`
    pub fn evaluate_many(&self, times: &[F]) -> Vec<F> {
        times.iter().map(|&t| self.evaluate(t)).collect()
    }
}

/// Evaluate a raw coefficient slice at `t`
pub fn evaluate<F: Float>(coefficients: &[F], t: F) -> F {
    coefficients
        .iter()
        .rev()
        .fold(F::zero(), |acc, &c| acc * t + c)
}

impl<F: Float + fmt::Display> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coefficients.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "a{i} = {c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        // 1 + 2t + 3t²
        let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(p.evaluate(0.0), 1.0);
        assert_eq!(p.evaluate(1.0), 6.0);
        assert_eq!(p.evaluate(2.0), 17.0);
        assert_eq!(p.evaluate(-1.0), 2.0);
        assert_eq!(p.degree(), 2);
    }

    #[test]
    fn test_evaluate_many_matches_single() {
        let p = Polynomial::new(vec![0.5, -1.0, 0.25, 0.125]);
        let ts = [-2.0, -0.5, 0.0, 0.3, 4.0];
        let many = p.evaluate_many(&ts);
        for (&t, &y) in ts.iter().zip(&many) {
            assert_eq!(p.evaluate(t), y);
            assert_eq!(evaluate(p.coefficients(), t), y);
        }
    }

    #[test]
    fn test_empty_polynomial_is_zero() {
        let p: Polynomial<f64> = Polynomial::new(vec![]);
        assert_eq!(p.evaluate(3.0), 0.0);
        assert_eq!(p.degree(), 0);
    }

    #[test]
    fn test_display_lists_coefficients() {
        let p = Polynomial::new(vec![0.0, 1.5, -2.0]);
        assert_eq!(p.to_string(), "a0 = 0\na1 = 1.5\na2 = -2");
    }
}
