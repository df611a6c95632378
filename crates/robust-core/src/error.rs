//! Error types for baseline estimation
//!
//! Provides a unified error type for all robust-detrend crates.

use thiserror::Error;

/// Core error type for fitting and detrending operations
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer samples than coefficients in a global fit
    #[error("Insufficient samples: expected at least {required} samples, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },

    /// Zero or non-finite pivot met during Gaussian elimination
    #[error("Singular system: zero pivot at row {row}")]
    SingularSystem { row: usize },

    /// Negative polynomial degree
    #[error("Invalid degree: {0} (degree must be non-negative)")]
    InvalidDegree(i64),

    /// Configuration value out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed sample data (length mismatch, NaN/Inf)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A line of a signal file could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Thread pool could not be built
    #[error("Execution error: {0}")]
    Execution(String),

    /// Reading a signal file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from a caller-supplied context
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Columns or buffers that should pair up differ in length
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// `context` holds NaN or infinite values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Whether a per-window fallback may absorb this error
    pub fn is_degenerate_fit(&self) -> bool {
        matches!(
            self,
            Self::SingularSystem { .. } | Self::InsufficientSamples { .. }
        )
    }
}
