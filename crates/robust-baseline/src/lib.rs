//! Polynomial baseline estimation and removal
//!
//! Biomedical waveforms such as ECG ride on a slow drift ("baseline
//! wander"). This crate estimates that drift with least-squares polynomials
//! and subtracts it.
//!
//! # Estimators
//!
//! - [`GlobalBaselineFitter`]: one polynomial over the entire segment, with
//!   R² as a goodness-of-fit score
//! - [`LocalBaselineFitter`]: an independent polynomial per sample over a
//!   sliding window, for drift too nonstationary for one global curve
//!
//! Both sit on [`robust_polyfit`], which builds and solves the normal
//! equations directly rather than calling a matrix library.
//!
//! # Example
//!
//! ```rust
//! use robust_baseline::{fit_global, fit_local};
//! use robust_core::Signal;
//!
//! let t: [f64; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let x = [0.0, 1.0, 4.0, 9.0, 16.0, 25.0];
//!
//! let global = fit_global(&t, &x, 2).unwrap();
//! assert!((global.r_squared() - 1.0).abs() < 1e-9);
//!
//! let signal = Signal::new(t.to_vec(), x.to_vec()).unwrap();
//! let local = fit_local(&signal, 2, 1);
//! assert_eq!(local.len(), signal.len());
//! ```

pub mod detrend;
pub mod global;
pub mod local;
pub mod params;
pub mod traits;

pub use detrend::{detrend, r_squared, GoodnessOfFit};
pub use global::{fit_global, GlobalBaselineFit, GlobalBaselineFitter};
pub use local::{
    fit_local, fit_local_with_engine, window_bounds, LocalBaselineFit, LocalBaselineFitter,
};
pub use params::{
    GlobalFitParameters, LocalFitParameters, WindowStrategy, RECOMMENDED_MAX_DEGREE,
};
pub use traits::{BaselineEstimator, BaselineEstimatorProperties};
