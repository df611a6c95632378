//! Core types for polynomial baseline estimation
//!
//! This crate holds the pieces every other crate in the workspace shares:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`Signal`]: an immutable sequence of `(time, amplitude)` samples
//! - [`ExecutionEngine`]: sequential or Rayon-backed fan-out of
//!   independent per-index work
//!
//! # Example
//!
//! ```rust
//! use robust_core::{execution::sequential, ExecutionEngine, Signal};
//!
//! let signal = Signal::new(vec![0.0, 1.0, 2.0], vec![2.0, 4.0, 6.0]).unwrap();
//! assert_eq!(signal.mean_amplitude(), Some(4.0));
//!
//! let engine = sequential();
//! let doubled = engine.execute_batch(signal.len(), |i| 2.0 * signal.amplitudes()[i]);
//! assert_eq!(doubled, vec![4.0, 8.0, 12.0]);
//! ```

pub mod error;
pub mod execution;
pub mod signal;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use signal::{validate_columns, Signal};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
