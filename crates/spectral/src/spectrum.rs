//! One-sided wave power spectrum and its frequency-domain operations.

use crate::config::TailShape;

const GRAVITY: f64 = 9.81;

/// A one-sided power spectral density on a uniform frequency grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    f: Vec<f64>,
    syy: Vec<f64>,
}

impl Spectrum {
    /// Wraps a frequency grid and matching density values.
    ///
    /// # Panics
    ///
    /// Panics if the two vectors differ in length.
    pub fn new(f: Vec<f64>, syy: Vec<f64>) -> Self {
        assert_eq!(f.len(), syy.len(), "frequency/density length mismatch");
        Self { f, syy }
    }

    /// Returns the frequency grid in Hz.
    pub fn frequencies(&self) -> &[f64] {
        &self.f
    }

    /// Returns the spectral densities in m^2/Hz.
    pub fn densities(&self) -> &[f64] {
        &self.syy
    }

    /// Number of frequency bins.
    pub fn len(&self) -> usize {
        self.f.len()
    }

    /// Whether the spectrum has no bins.
    pub fn is_empty(&self) -> bool {
        self.f.is_empty()
    }

    /// Frequency grid spacing in Hz.
    pub fn delta_f(&self) -> f64 {
        if self.f.len() < 2 {
            0.0
        } else {
            self.f[1] - self.f[0]
        }
    }

    /// n-th spectral moment `sum(Syy * f^n * delta_f)`.
    pub fn moment(&self, n: i32) -> f64 {
        let df = self.delta_f();
        self.f
            .iter()
            .zip(&self.syy)
            .map(|(&f, &s)| s * f.powi(n) * df)
            .sum()
    }

    /// Replaces densities above `ftail` with a diagnostic power-law tail.
    ///
    /// The tail is anchored at the first bin with `f >= ftail` and decays as
    /// `(f / ftail)^power`. The TMA shape additionally scales by the
    /// Kitaigorodskii depth function evaluated at `depth`. Replaced values are
    /// clamped at zero. A no-op when the shape is [`TailShape::Off`] or no bin
    /// reaches `ftail`.
    pub fn apply_tail(&mut self, shape: TailShape, ftail: f64, power: f64, depth: f64) {
        if shape == TailShape::Off {
            return;
        }
        let anchor = match self.f.iter().position(|&f| f >= ftail) {
            Some(i) => i,
            None => return,
        };
        let base = self.syy[anchor];
        let phi_anchor = match shape {
            TailShape::Tma => depth_transform(self.f[anchor], depth),
            _ => 1.0,
        };
        for i in 0..self.f.len() {
            if self.f[i] <= ftail {
                continue;
            }
            let mut value = base * (self.f[i] / ftail).powf(power);
            if shape == TailShape::Tma {
                value *= depth_transform(self.f[i], depth) / phi_anchor;
            }
            self.syy[i] = value.max(0.0);
        }
    }

    /// Zeroes densities outside `[fmin, fmax]` according to the two switches.
    pub fn apply_cutoff(&mut self, fmin: f64, fmax: f64, min_on: bool, max_on: bool) {
        for (i, &f) in self.f.iter().enumerate() {
            if (min_on && f < fmin) || (max_on && f > fmax) {
                self.syy[i] = 0.0;
            }
        }
    }

    /// Index of the most energetic bin, ignoring non-finite densities.
    pub fn peak_index(&self) -> Option<usize> {
        triton_stats::argmax(&self.syy)
    }

    /// Peak frequency from the fifth-power weighted integral (Young, 1995).
    pub fn weighted_peak_frequency(&self) -> f64 {
        let mut num = 0.0;
        let mut den = 0.0;
        for (&f, &s) in self.f.iter().zip(&self.syy) {
            let w = s.powi(5);
            num += w * f;
            den += w;
        }
        num / den
    }
}

/// Kitaigorodskii depth transformation, approximated form.
fn depth_transform(f: f64, depth: f64) -> f64 {
    let omega = 2.0 * std::f64::consts::PI * f * (depth / GRAVITY).sqrt();
    if omega <= 1.0 {
        omega * omega / 2.0
    } else if omega < 2.0 {
        1.0 - 0.5 * (2.0 - omega) * (2.0 - omega)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_spectrum(n: usize, df: f64, value: f64) -> Spectrum {
        let f: Vec<f64> = (0..n).map(|i| i as f64 * df).collect();
        Spectrum::new(f, vec![value; n])
    }

    #[test]
    fn zeroth_moment_of_flat_spectrum() {
        let s = flat_spectrum(11, 0.1, 2.0);
        assert_relative_eq!(s.moment(0), 2.0 * 0.1 * 11.0);
    }

    #[test]
    fn first_moment_weights_by_frequency() {
        let s = flat_spectrum(5, 0.5, 1.0);
        // f = 0, 0.5, 1.0, 1.5, 2.0; sum f = 5.0
        assert_relative_eq!(s.moment(1), 5.0 * 0.5);
    }

    #[test]
    fn cutoff_zeroes_outside_band() {
        let mut s = flat_spectrum(11, 0.1, 1.0);
        s.apply_cutoff(0.25, 0.75, true, true);
        assert_eq!(s.densities()[0], 0.0);
        assert_eq!(s.densities()[2], 0.0);
        assert_eq!(s.densities()[3], 1.0);
        assert_eq!(s.densities()[7], 1.0);
        assert_eq!(s.densities()[8], 0.0);
    }

    #[test]
    fn cutoff_switches_disable_each_side() {
        let mut s = flat_spectrum(11, 0.1, 1.0);
        s.apply_cutoff(0.25, 0.75, false, true);
        assert_eq!(s.densities()[0], 1.0);
        assert_eq!(s.densities()[10], 0.0);
    }

    #[test]
    fn jonswap_tail_decays_as_power_law() {
        let mut s = flat_spectrum(21, 0.1, 3.0);
        s.apply_tail(TailShape::Jonswap, 1.0, -5.0, 1.0);
        // Anchor bin (f = 1.0) is untouched; bins above follow the power law.
        assert_relative_eq!(s.densities()[10], 3.0);
        assert_relative_eq!(s.densities()[20], 3.0 * 2f64.powf(-5.0));
        assert_relative_eq!(s.densities()[15], 3.0 * 1.5f64.powf(-5.0));
    }

    #[test]
    fn off_tail_is_identity() {
        let mut s = flat_spectrum(21, 0.1, 3.0);
        let before = s.clone();
        s.apply_tail(TailShape::Off, 1.0, -5.0, 1.0);
        assert_eq!(s, before);
    }

    #[test]
    fn tma_tail_matches_jonswap_in_deep_water() {
        // In deep water the depth transform saturates at 1 and the TMA tail
        // degenerates to the JONSWAP tail.
        let mut jonswap = flat_spectrum(41, 0.05, 2.0);
        let mut tma = jonswap.clone();
        jonswap.apply_tail(TailShape::Jonswap, 0.9, -5.0, 50.0);
        tma.apply_tail(TailShape::Tma, 0.9, -5.0, 50.0);
        for (j, t) in jonswap.densities().iter().zip(tma.densities()) {
            assert_relative_eq!(*t, *j);
        }
    }

    #[test]
    fn tma_tail_boosts_shallow_water_high_frequencies() {
        // The depth transform grows with frequency, so the shallow-water TMA
        // tail sits above the plain power law past the anchor.
        let mut jonswap = flat_spectrum(41, 0.05, 2.0);
        let mut tma = jonswap.clone();
        jonswap.apply_tail(TailShape::Jonswap, 0.9, -5.0, 0.3);
        tma.apply_tail(TailShape::Tma, 0.9, -5.0, 0.3);
        assert!(tma.densities()[40] > jonswap.densities()[40]);
    }

    #[test]
    fn depth_transform_branches() {
        // omega = 1 exactly at f = sqrt(g/h) / (2 pi).
        let h = 9.81;
        let f1 = 1.0 / (2.0 * std::f64::consts::PI);
        assert_relative_eq!(depth_transform(f1, h), 0.5);
        assert_relative_eq!(depth_transform(2.0 * f1, h), 1.0);
        assert_relative_eq!(depth_transform(1.5 * f1, h), 1.0 - 0.5 * 0.25);
        assert!(depth_transform(10.0 * f1, h) == 1.0);
    }

    #[test]
    fn weighted_peak_frequency_of_narrow_spectrum() {
        let f: Vec<f64> = (0..101).map(|i| i as f64 * 0.01).collect();
        let mut syy = vec![0.0; 101];
        syy[50] = 4.0;
        let s = Spectrum::new(f, syy);
        assert_relative_eq!(s.weighted_peak_frequency(), 0.5);
        assert_eq!(s.peak_index(), Some(50));
    }
}
