//! Fit parameters
//!
//! Plain parameter structs with defaults. They deserialize from any serde
//! format so a caller's config file can carry them directly; missing fields
//! take the defaults.

use robust_core::{Error, Result};
use robust_polyfit::Degree;
use serde::{Deserialize, Serialize};

/// Above this degree the monomial normal equations are usually too
/// ill-conditioned to trust
pub const RECOMMENDED_MAX_DEGREE: usize = 15;

/// Parameters for a single polynomial over the whole segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalFitParameters {
    /// Polynomial order
    pub degree: Degree,
}

impl Default for GlobalFitParameters {
    fn default() -> Self {
        Self {
            degree: Degree::new(5),
        }
    }
}

impl GlobalFitParameters {
    pub fn validate(&self) -> Result<()> {
        if self.degree.get() > RECOMMENDED_MAX_DEGREE {
            tracing::warn!(
                degree = self.degree.get(),
                "degree exceeds {RECOMMENDED_MAX_DEGREE}; normal equations are likely ill-conditioned"
            );
        }
        Ok(())
    }
}

/// How window power sums are obtained in local mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowStrategy {
    /// Rebuild the sums from scratch at every sample position
    #[default]
    Direct,
    /// Keep running sums, adding the entering sample and removing the
    /// leaving one as the window slides
    Incremental,
}

/// Parameters for the sliding-window fit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalFitParameters {
    /// Samples on each side of the centre; the window for sample `i` is
    /// `[i - h, i + h)` clipped to the signal
    pub half_width: usize,
    /// Polynomial order fitted inside each window
    pub degree: Degree,
    /// Power-sum maintenance strategy
    pub strategy: WindowStrategy,
}

impl Default for LocalFitParameters {
    fn default() -> Self {
        Self {
            half_width: 250,
            degree: Degree::new(2),
            strategy: WindowStrategy::Direct,
        }
    }
}

impl LocalFitParameters {
    /// Reject configurations where no window could ever be solved
    pub fn validate(&self) -> Result<()> {
        if self.degree.get() > RECOMMENDED_MAX_DEGREE {
            tracing::warn!(
                degree = self.degree.get(),
                "degree exceeds {RECOMMENDED_MAX_DEGREE}; normal equations are likely ill-conditioned"
            );
        }
        if self.half_width == 0 {
            return Err(Error::InvalidParameter(
                "half_width must be at least 1".to_string(),
            ));
        }
        // Widest possible window is 2h samples
        if 2 * self.half_width < self.degree.system_size() {
            return Err(Error::InvalidParameter(format!(
                "window of {} samples cannot determine {} coefficients",
                2 * self.half_width,
                self.degree.system_size()
            )));
        }
        Ok(())
    }
}
