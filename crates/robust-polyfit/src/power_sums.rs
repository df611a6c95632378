//! Power sums for the normal equations
//!
//! For a sample subset `(t_k, x_k)` and degree `d` this accumulates
//!
//! - `powers[k]  = Σ t^k`     for `k` in `0..=2d`
//! - `moments[i] = Σ t^i · x` for `i` in `0..=d`
//!
//! `powers[0]` is the subset size. Powers are built by repeated
//! multiplication starting from one, so `t = 0` contributes only to
//! `powers[0]` and `moments[0]`.
//!
//! Abscissas may be taken about an origin ([`PowerSums::about`]): every
//! `t` is replaced by `t - origin` before it is raised to a power, and the
//! polynomial solved from the sums is then in powers of `t - origin`.
//! Placing the origin inside the subset keeps `t^(2d)` terms at the scale of
//! the subset width rather than of the absolute time axis.
//!
//! Sums can also be maintained incrementally with [`PowerSums::add`] and
//! [`PowerSums::remove`] as a window slides. Removal subtracts, so every
//! slide leaves a rounding residue; sliding callers rebuild periodically.

use crate::Degree;
use num_traits::Float;

/// Raw power sums and right-hand-side sums over one sample subset
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSums<F> {
    degree: Degree,
    origin: F,
    powers: Vec<F>,
    moments: Vec<F>,
    count: usize,
}

impl<F: Float> PowerSums<F> {
    /// Empty sums for `degree`, abscissas taken as-is
    pub fn new(degree: Degree) -> Self {
        Self::about(degree, F::zero())
    }

    /// Empty sums for `degree`, abscissas taken relative to `origin`
    pub fn about(degree: Degree, origin: F) -> Self {
        Self {
            degree,
            origin,
            powers: vec![F::zero(); degree.power_sum_len()],
            moments: vec![F::zero(); degree.system_size()],
            count: 0,
        }
    }

    /// Build sums over paired abscissas and ordinates
    ///
    /// Pairs beyond the shorter of the two slices are ignored; callers check
    /// lengths before this point.
    pub fn from_samples(times: &[F], values: &[F], degree: Degree) -> Self {
        let mut sums = Self::new(degree);
        for (&t, &x) in times.iter().zip(values) {
            sums.add(t, x);
        }
        sums
    }

    /// Build sums over a subset with abscissas relative to `origin`
    pub fn from_samples_about(times: &[F], values: &[F], degree: Degree, origin: F) -> Self {
        let mut sums = Self::about(degree, origin);
        for (&t, &x) in times.iter().zip(values) {
            sums.add(t, x);
        }
        sums
    }

    /// Build the abscissa power sums only; moments stay zero
    pub fn from_abscissas(times: &[F], degree: Degree) -> Self {
        let mut sums = Self::new(degree);
        for &t in times {
            sums.add(t, F::zero());
        }
        sums
    }

    /// Include one sample
    #[inline]
    pub fn add(&mut self, t: F, x: F) {
        self.apply(t, x, false);
        self.count += 1;
    }

    /// Exclude a sample previously included with [`add`](Self::add)
    #[inline]
    pub fn remove(&mut self, t: F, x: F) {
        self.apply(t, x, true);
        self.count = self.count.saturating_sub(1);
    }

    fn apply(&mut self, t: F, x: F, subtract: bool) {
        let d = self.degree.get();
        let t = t - self.origin;
        let mut power = F::one();
        for k in 0..self.powers.len() {
            if subtract {
                self.powers[k] = self.powers[k] - power;
                if k <= d {
                    self.moments[k] = self.moments[k] - power * x;
                }
            } else {
                self.powers[k] = self.powers[k] + power;
                if k <= d {
                    self.moments[k] = self.moments[k] + power * x;
                }
            }
            power = power * t;
        }
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    /// Abscissa subtracted from every sample time
    pub fn origin(&self) -> F {
        self.origin
    }

    /// `Σ t^k` for `k` in `0..=2d`
    pub fn powers(&self) -> &[F] {
        &self.powers
    }

    /// `Σ t^i · x` for `i` in `0..=d`
    pub fn moments(&self) -> &[F] {
        &self.moments
    }

    /// Number of samples currently included
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether enough samples are included to determine every coefficient
    pub fn is_determined(&self) -> bool {
        self.count >= self.degree.system_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_power_sums_small() {
        let sums = PowerSums::from_abscissas(&[1.0, 2.0, 3.0], Degree::new(1));
        assert_eq!(sums.powers(), &[3.0, 6.0, 14.0]);
        assert_eq!(sums.moments(), &[0.0, 0.0]);
        assert_eq!(sums.count(), 3);
    }

    #[test]
    fn test_zero_abscissa_only_counts() {
        let sums = PowerSums::from_abscissas(&[0.0], Degree::new(2));
        assert_eq!(sums.powers(), &[1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_moments() {
        let t = [0.0, 1.0, 2.0];
        let x = [2.0, 4.0, 6.0];
        let sums = PowerSums::from_samples(&t, &x, Degree::new(1));
        // Σx = 12, Σt·x = 0 + 4 + 12
        assert_eq!(sums.moments(), &[12.0, 16.0]);
        assert_eq!(sums.powers(), &[3.0, 3.0, 5.0]);
    }

    #[test]
    fn test_degree_zero() {
        let sums = PowerSums::from_samples(&[5.0, 7.0], &[1.0, 3.0], Degree::new(0));
        assert_eq!(sums.powers(), &[2.0]);
        assert_eq!(sums.moments(), &[4.0]);
        assert!(sums.is_determined());
    }

    #[test]
    fn test_add_remove_matches_fresh_build() {
        let t = [0.5, 1.0, 1.5, 2.0, 2.5];
        let x = [1.0, -1.0, 2.0, 0.5, 3.0];
        let d = Degree::new(2);

        let mut sliding = PowerSums::from_samples(&t[..4], &x[..4], d);
        sliding.remove(t[0], x[0]);
        sliding.add(t[4], x[4]);

        let fresh = PowerSums::from_samples(&t[1..], &x[1..], d);
        assert_eq!(sliding.count(), fresh.count());
        for (a, b) in sliding.powers().iter().zip(fresh.powers()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
        for (a, b) in sliding.moments().iter().zip(fresh.moments()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sums_about_origin() {
        let sums = PowerSums::from_samples_about(&[9.0, 10.0, 11.0], &[1.0, 2.0, 3.0], Degree::new(1), 10.0);
        assert_eq!(sums.origin(), 10.0);
        assert_eq!(sums.powers(), &[3.0, 0.0, 2.0]);
        // Σx = 6, Σ(t - 10)·x = -1 + 0 + 3
        assert_eq!(sums.moments(), &[6.0, 2.0]);

        let mut sliding = sums.clone();
        sliding.remove(9.0, 1.0);
        sliding.add(12.0, 4.0);
        let fresh = PowerSums::from_samples_about(&[10.0, 11.0, 12.0], &[2.0, 3.0, 4.0], Degree::new(1), 10.0);
        assert_eq!(sliding, fresh);
    }

    #[test]
    fn test_is_determined() {
        let d = Degree::new(2);
        let mut sums = PowerSums::new(d);
        sums.add(0.0, 1.0);
        sums.add(1.0, 1.0);
        assert!(!sums.is_determined());
        sums.add(2.0, 1.0);
        assert!(sums.is_determined());
    }
}
