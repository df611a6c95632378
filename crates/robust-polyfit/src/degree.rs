//! Polynomial degree

use robust_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-negative polynomial order
///
/// A fit of degree `d` solves for `d + 1` coefficients and needs power sums
/// up to `t^(2d)`. Signed inputs go through `TryFrom<i64>`, which is where a
/// negative degree is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Degree(usize);

impl Degree {
    pub const fn new(degree: usize) -> Self {
        Self(degree)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of coefficients, `d + 1`
    pub const fn system_size(self) -> usize {
        self.0 + 1
    }

    /// Number of power sums, `2d + 1`
    pub const fn power_sum_len(self) -> usize {
        2 * self.0 + 1
    }
}

impl From<usize> for Degree {
    fn from(degree: usize) -> Self {
        Self(degree)
    }
}

impl TryFrom<i64> for Degree {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| Error::InvalidDegree(value))
    }
}

impl From<Degree> for i64 {
    fn from(degree: Degree) -> Self {
        degree.0 as i64
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        let d = Degree::new(3);
        assert_eq!(d.system_size(), 4);
        assert_eq!(d.power_sum_len(), 7);
        assert_eq!(Degree::new(0).power_sum_len(), 1);
    }

    #[test]
    fn test_negative_degree_rejected() {
        let err = Degree::try_from(-1i64).unwrap_err();
        assert!(matches!(err, Error::InvalidDegree(-1)));
        assert_eq!(Degree::try_from(15i64).unwrap(), Degree::new(15));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let d: Degree = serde_json::from_str("5").unwrap();
        assert_eq!(d.get(), 5);
        assert!(serde_json::from_str::<Degree>("-3").is_err());
        assert_eq!(serde_json::to_string(&Degree::new(2)).unwrap(), "2");
    }
}
