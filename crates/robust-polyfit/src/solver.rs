//! Normal-equations assembly and Gaussian elimination
//!
//! The system `A·c = b` has `A[i][j] = Σ t^(i+j)` (a Hankel matrix built from
//! raw power sums) and `b[i] = Σ t^i · x`. It is solved by forward
//! elimination without row exchanges, normalising each pivot row to a unit
//! diagonal, followed by back-substitution.
//!
//! A zero (or non-finite) pivot is reported as [`Error::SingularSystem`]
//! rather than skipped. Callers choose a fallback.
//!
//! # Conditioning
//!
//! The monomial Gram matrix becomes ill-conditioned quickly as the degree or
//! the abscissa range grows. Degrees up to ~15 over modest windows behave;
//! beyond that the coefficients are dominated by rounding error.

use crate::{Degree, Polynomial, PowerSums};
use num_traits::Float;
use robust_core::{Error, Result};

/// Square normal-equations system in row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct NormalEquations<F> {
    size: usize,
    matrix: Vec<F>,
    rhs: Vec<F>,
}

impl<F: Float> NormalEquations<F> {
    /// Assemble `A[i][j] = P[i+j]` and `b = moments` from accumulated sums
    pub fn from_power_sums(sums: &PowerSums<F>) -> Self {
        Self::assemble(sums.powers(), sums.moments(), sums.degree())
    }

    /// Assemble from a power-sum slice of length `2d+1` and a right-hand side
    /// of length `d+1`
    pub fn from_parts(powers: &[F], rhs: &[F], degree: Degree) -> Result<Self> {
        if powers.len() != degree.power_sum_len() {
            return Err(Error::size_mismatch(
                degree.power_sum_len(),
                powers.len(),
                "power sums",
            ));
        }
        if rhs.len() != degree.system_size() {
            return Err(Error::size_mismatch(
                degree.system_size(),
                rhs.len(),
                "right-hand side",
            ));
        }
        Ok(Self::assemble(powers, rhs, degree))
    }

    fn assemble(powers: &[F], rhs: &[F], degree: Degree) -> Self {
        let n = degree.system_size();
        let mut matrix = Vec::with_capacity(n * n);
        for i in 0..n {
            matrix.extend_from_slice(&powers[i..i + n]);
        }
        Self {
            size: n,
            matrix,
            rhs: rhs.to_vec(),
        }
    }

    /// Number of unknowns, `d + 1`
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> F {
        self.matrix[row * self.size + col]
    }

    pub fn rhs(&self) -> &[F] {
        &self.rhs
    }

    /// Solve by Gaussian elimination and back-substitution
    ///
    /// Consumes the system; the working buffers do not outlive the call.
    pub fn solve(mut self) -> Result<Polynomial<F>> {
        let n = self.size;
        let a = &mut self.matrix;
        let b = &mut self.rhs;

        for i in 0..n {
            let pivot = a[i * n + i];
            if pivot == F::zero() || !pivot.is_finite() {
                return Err(Error::SingularSystem { row: i });
            }

            for j in i..n {
                a[i * n + j] = a[i * n + j] / pivot;
            }
            b[i] = b[i] / pivot;

            for k in (i + 1)..n {
                let factor = a[k * n + i];
                if factor == F::zero() {
                    continue;
                }
                for j in i..n {
                    a[k * n + j] = a[k * n + j] - factor * a[i * n + j];
                }
                b[k] = b[k] - factor * b[i];
            }
        }

        // Rows now carry a unit diagonal
        let mut coefficients = vec![F::zero(); n];
        for i in (0..n).rev() {
            let tail = ((i + 1)..n).fold(F::zero(), |acc, j| acc + a[i * n + j] * coefficients[j]);
            coefficients[i] = b[i] - tail;
        }

        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::SingularSystem { row: n - 1 });
        }

        Ok(Polynomial::new(coefficients))
    }
}

/// Solve the normal equations given raw power sums and right-hand side
pub fn solve_normal_equations<F: Float>(
    powers: &[F],
    rhs: &[F],
    degree: Degree,
) -> Result<Polynomial<F>> {
    NormalEquations::from_parts(powers, rhs, degree)?.solve()
}
