//! Polynomial least-squares fitting via the normal equations
//!
//! This crate fits `x ≈ c0 + c1·t + … + cd·t^d` without delegating to a
//! matrix library:
//!
//! 1. [`PowerSums`] accumulates `Σ t^k` (k ≤ 2d) and `Σ t^i · x` (i ≤ d)
//! 2. [`NormalEquations`] assembles the `(d+1)×(d+1)` Hankel system and
//!    solves it by Gaussian elimination with back-substitution
//! 3. [`Polynomial`] evaluates the coefficient vector
//!
//! [`PolynomialKernel`] wraps the three steps for a fixed [`Degree`].
//!
//! # Example
//!
//! ```rust
//! use robust_polyfit::PolynomialKernel;
//!
//! let t: [f64; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let x = [0.0, 1.0, 4.0, 9.0, 16.0, 25.0];
//!
//! let poly = PolynomialKernel::new(2).fit(&t, &x).unwrap();
//! assert!((poly.coefficients()[2] - 1.0).abs() < 1e-9);
//! assert!((poly.evaluate(6.0) - 36.0).abs() < 1e-8);
//! ```
//!
//! # Numerical limits
//!
//! Raw power sums make the system badly conditioned as the degree or the
//! abscissa range grows. Moderate degrees (≤ 15) over modest windows are
//! the supported operating range.

pub mod degree;
pub mod kernel;
pub mod polynomial;
pub mod power_sums;
pub mod solver;

pub use degree::Degree;
pub use kernel::PolynomialKernel;
pub use polynomial::{evaluate, Polynomial};
pub use power_sums::PowerSums;
pub use solver::{solve_normal_equations, NormalEquations};
