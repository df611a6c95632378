//! Sampled waveform representation
//!
//! A [`Signal`] is an ordered sequence of `(time, amplitude)` samples. Times
//! are expected to be non-decreasing but need not be evenly spaced. Once
//! constructed a signal is never mutated; fitters only borrow it.

use crate::{Error, Result};
use num_traits::Float;
use serde::Serialize;
use std::ops::Range;

/// Check that time and amplitude columns pair up and are finite
pub fn validate_columns<F: Float>(times: &[F], amplitudes: &[F]) -> Result<()> {
    if times.len() != amplitudes.len() {
        return Err(Error::size_mismatch(times.len(), amplitudes.len(), "amplitudes"));
    }
    if times.iter().any(|t| !t.is_finite()) {
        return Err(Error::non_finite("times"));
    }
    if amplitudes.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("amplitudes"));
    }
    Ok(())
}

/// Ordered `(time, amplitude)` samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal<F = f64> {
    times: Vec<F>,
    amplitudes: Vec<F>,
}

impl<F: Float> Signal<F> {
    /// Build a signal from parallel time and amplitude columns
    ///
    /// Fails if the columns differ in length or contain NaN/Inf.
    pub fn new(times: Vec<F>, amplitudes: Vec<F>) -> Result<Self> {
        validate_columns(&times, &amplitudes)?;
        Ok(Self { times, amplitudes })
    }

    /// Build a signal whose time axis is the sample index
    pub fn from_amplitudes(amplitudes: Vec<F>) -> Result<Self> {
        let times = (0..amplitudes.len())
            .map(|i| F::from(i).ok_or_else(|| Error::InvalidInput(format!("index {i} not representable"))))
            .collect::<Result<Vec<F>>>()?;
        Self::new(times, amplitudes)
    }

    pub fn times(&self) -> &[F] {
        &self.times
    }

    pub fn amplitudes(&self) -> &[F] {
        &self.amplitudes
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterate over `(time, amplitude)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (F, F)> + '_ {
        self.times.iter().copied().zip(self.amplitudes.iter().copied())
    }

    /// Copy out the samples in `range`, clamped to the signal bounds
    pub fn segment(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        Self {
            times: self.times[start..end].to_vec(),
            amplitudes: self.amplitudes[start..end].to_vec(),
        }
    }

    /// Arithmetic mean of the amplitudes, `None` for an empty signal
    pub fn mean_amplitude(&self) -> Option<F> {
        if self.is_empty() {
            return None;
        }
        let sum = self.amplitudes.iter().fold(F::zero(), |acc, &x| acc + x);
        F::from(self.len()).map(|n| sum / n)
    }

    /// Whether the time axis never decreases
    pub fn is_time_ordered(&self) -> bool {
        self.times.windows(2).all(|w| w[0] <= w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_mismatched_columns() {
        let err = Signal::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(Signal::new(vec![0.0, f64::NAN], vec![1.0, 2.0]).is_err());
        assert!(Signal::new(vec![0.0, 1.0], vec![1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_from_amplitudes_uses_index_as_time() {
        let signal = Signal::from_amplitudes(vec![3.0, 1.0, 4.0]).unwrap();
        assert_eq!(signal.times(), &[0.0, 1.0, 2.0]);
        assert_eq!(signal.amplitudes(), &[3.0, 1.0, 4.0]);
        assert!(signal.is_time_ordered());
    }

    #[test]
    fn test_segment_clamps() {
        let signal = Signal::from_amplitudes(vec![0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();

        let seg = signal.segment(1..3);
        assert_eq!(seg.times(), &[1.0, 2.0]);
        assert_eq!(seg.amplitudes(), &[1.0, 2.0]);

        let seg = signal.segment(3..10_000);
        assert_eq!(seg.len(), 2);

        let seg = signal.segment(9..12);
        assert!(seg.is_empty());
    }

    #[test]
    fn test_mean_amplitude() {
        let signal = Signal::from_amplitudes(vec![2.0, 4.0, 6.0]).unwrap();
        assert_relative_eq!(signal.mean_amplitude().unwrap(), 4.0);

        let empty: Signal<f64> = Signal::from_amplitudes(vec![]).unwrap();
        assert!(empty.mean_amplitude().is_none());
    }

    #[test]
    fn test_time_ordering() {
        let signal = Signal::new(vec![0.0, 0.0, 1.5, 1.0], vec![0.0; 4]).unwrap();
        assert!(!signal.is_time_ordered());
    }

    proptest::proptest! {
        #[test]
        fn prop_segment_stays_in_bounds(
            amplitudes in proptest::collection::vec(-1e3f64..1e3, 0..50),
            start in 0usize..60,
            len in 0usize..60,
        ) {
            let signal = Signal::from_amplitudes(amplitudes).unwrap();
            let seg = signal.segment(start..start + len);

            let expected = (start + len).min(signal.len()).saturating_sub(start);
            proptest::prop_assert_eq!(seg.len(), expected);
            if !seg.is_empty() {
                proptest::prop_assert_eq!(seg.times()[0], start as f64);
                proptest::prop_assert_eq!(seg.amplitudes()[0], signal.amplitudes()[start]);
            }
        }
    }
}
