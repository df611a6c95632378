//! # robust-detrend
//!
//! Least-squares polynomial baseline estimation and removal for sampled
//! waveforms such as ECG recordings.
//!
//! This crate re-exports the workspace members:
//!
//! - [`robust_core`]: error type, [`Signal`], execution engines
//! - [`robust_polyfit`]: power sums, normal-equation solver, polynomial
//!   evaluation
//! - [`robust_baseline`]: global and sliding-window baseline fitters,
//!   detrending, R²
//! - [`robust_signal_io`]: text and CSV signal loaders
//!
//! ```rust
//! use robust_detrend::prelude::*;
//!
//! let t: Vec<f64> = (0..200).map(|i| i as f64 * 0.01).collect();
//! let x: Vec<f64> = t.iter().map(|&t| (20.0 * t).sin() + 0.5 * t * t).collect();
//! let signal = Signal::new(t, x).unwrap();
//!
//! let global = GlobalBaselineFitter::new(2).fit(&signal).unwrap();
//! assert!(global.r_squared() < 1.0);
//!
//! let local = LocalBaselineFitter::new(30, 2).fit(&signal);
//! assert_eq!(local.corrected().len(), signal.len());
//! ```

pub use robust_baseline;
pub use robust_core;
pub use robust_polyfit;
pub use robust_signal_io;

pub use robust_baseline::{detrend, fit_global, fit_local, fit_local_with_engine, r_squared};
pub use robust_core::{Error, Result, Signal};
pub use robust_polyfit::evaluate;

/// Commonly used types and functions
pub mod prelude {
    pub use robust_baseline::{
        detrend, fit_global, fit_local, fit_local_with_engine, r_squared, BaselineEstimator,
        BaselineEstimatorProperties, GlobalBaselineFit, GlobalBaselineFitter, GlobalFitParameters,
        GoodnessOfFit, LocalBaselineFit, LocalBaselineFitter, LocalFitParameters, WindowStrategy,
    };
    #[cfg(feature = "parallel")]
    pub use robust_core::ParallelEngine;
    pub use robust_core::{Error, ExecutionEngine, Result, SequentialEngine, Signal};
    pub use robust_polyfit::{evaluate, Degree, Polynomial, PolynomialKernel};
    pub use robust_signal_io::{load_signal, read_signal, Delimiter, LoadOptions};
}
