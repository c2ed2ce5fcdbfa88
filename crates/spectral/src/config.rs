//! Configuration for spectral wave analysis.

use crate::error::SpectralError;

/// High-frequency diagnostic tail shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TailShape {
    /// Leave the measured tail untouched.
    #[default]
    Off,
    /// Replace the tail with a JONSWAP power-law tail.
    Jonswap,
    /// Replace the tail with a TMA (depth-corrected JONSWAP) tail.
    Tma,
}

/// Configuration for the spectral wave analyzer.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use triton_spectral::SpectralConfig;
///
/// let config = SpectralConfig::new(2.0)
///     .with_nfft(512)
///     .with_fmin(0.05)
///     .with_fmax(1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SpectralConfig {
    fs: f64,
    nfft: usize,
    fmin: f64,
    fmax: f64,
    min_cutoff: bool,
    max_cutoff: bool,
    tail: TailShape,
    ftail: f64,
    tail_power: f64,
    depth: f64,
}

impl SpectralConfig {
    /// Creates a configuration for the given sampling frequency.
    ///
    /// Defaults: `nfft = 512`, `fmin = 0.05`, `fmax = 1e6` (clamped to the
    /// Nyquist frequency at analysis time), both cutoffs enabled,
    /// `tail = Off`, `ftail = 0.9`, `tail_power = -5.0`, `depth = 1.0`.
    pub fn new(fs: f64) -> Self {
        Self {
            fs,
            nfft: 512,
            fmin: 0.05,
            fmax: 1e6,
            min_cutoff: true,
            max_cutoff: true,
            tail: TailShape::Off,
            ftail: 0.9,
            tail_power: -5.0,
            depth: 1.0,
        }
    }

    /// Sets the FFT length (number of frequency-domain samples).
    pub fn with_nfft(mut self, nfft: usize) -> Self {
        self.nfft = nfft;
        self
    }

    /// Sets the low-frequency cutoff.
    pub fn with_fmin(mut self, fmin: f64) -> Self {
        self.fmin = fmin;
        self
    }

    /// Sets the high-frequency cutoff.
    pub fn with_fmax(mut self, fmax: f64) -> Self {
        self.fmax = fmax;
        self
    }

    /// Enables or disables zeroing below `fmin`.
    pub fn with_min_cutoff(mut self, on: bool) -> Self {
        self.min_cutoff = on;
        self
    }

    /// Enables or disables zeroing above `fmax`.
    pub fn with_max_cutoff(mut self, on: bool) -> Self {
        self.max_cutoff = on;
        self
    }

    /// Sets the diagnostic tail shape.
    pub fn with_tail(mut self, tail: TailShape) -> Self {
        self.tail = tail;
        self
    }

    /// Sets the frequency beyond which the tail is replaced.
    pub fn with_ftail(mut self, ftail: f64) -> Self {
        self.ftail = ftail;
        self
    }

    /// Sets the tail power-law exponent (typically -3 shallow to -5 deep).
    pub fn with_tail_power(mut self, power: f64) -> Self {
        self.tail_power = power;
        self
    }

    /// Sets the mean water depth (used by the TMA tail shape).
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    // --- Accessors ---

    /// Returns the sampling frequency in Hz.
    pub fn fs(&self) -> f64 {
        self.fs
    }

    /// Returns the FFT length.
    pub fn nfft(&self) -> usize {
        self.nfft
    }

    /// Returns the low-frequency cutoff in Hz.
    pub fn fmin(&self) -> f64 {
        self.fmin
    }

    /// Returns the high-frequency cutoff in Hz, clamped to Nyquist.
    pub fn fmax(&self) -> f64 {
        self.fmax.min(self.fs / 2.0)
    }

    /// Returns whether the low cutoff is enabled.
    pub fn min_cutoff(&self) -> bool {
        self.min_cutoff
    }

    /// Returns whether the high cutoff is enabled.
    pub fn max_cutoff(&self) -> bool {
        self.max_cutoff
    }

    /// Returns the tail shape.
    pub fn tail(&self) -> TailShape {
        self.tail
    }

    /// Returns the tail replacement frequency in Hz.
    pub fn ftail(&self) -> f64 {
        self.ftail
    }

    /// Returns the tail power-law exponent.
    pub fn tail_power(&self) -> f64 {
        self.tail_power
    }

    /// Returns the mean water depth in m.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), SpectralError> {
        if !self.fs.is_finite() || self.fs <= 0.0 {
            return Err(SpectralError::InvalidConfig {
                reason: format!("fs must be finite and positive, got {}", self.fs),
            });
        }
        if self.nfft < 4 {
            return Err(SpectralError::InvalidConfig {
                reason: format!("nfft must be >= 4, got {}", self.nfft),
            });
        }
        if !self.fmin.is_finite() || self.fmin < 0.0 {
            return Err(SpectralError::InvalidConfig {
                reason: format!("fmin must be finite and non-negative, got {}", self.fmin),
            });
        }
        if self.fmax.is_nan() || self.fmax <= 0.0 {
            return Err(SpectralError::InvalidConfig {
                reason: format!("fmax must be positive, got {}", self.fmax),
            });
        }
        if !self.ftail.is_finite() || self.ftail <= 0.0 {
            return Err(SpectralError::InvalidConfig {
                reason: format!("ftail must be finite and positive, got {}", self.ftail),
            });
        }
        if self.tail == TailShape::Tma && (!self.depth.is_finite() || self.depth <= 0.0) {
            return Err(SpectralError::InvalidConfig {
                reason: format!("TMA tail requires a positive depth, got {}", self.depth),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SpectralConfig::new(2.0);
        assert_eq!(cfg.nfft(), 512);
        assert!((cfg.fmin() - 0.05).abs() < f64::EPSILON);
        // fmax defaults high and clamps to Nyquist.
        assert!((cfg.fmax() - 1.0).abs() < f64::EPSILON);
        assert!(cfg.min_cutoff());
        assert!(cfg.max_cutoff());
        assert_eq!(cfg.tail(), TailShape::Off);
    }

    #[test]
    fn builder_chaining() {
        let cfg = SpectralConfig::new(10.0)
            .with_nfft(1024)
            .with_fmin(0.04)
            .with_fmax(1.5)
            .with_min_cutoff(false)
            .with_max_cutoff(false)
            .with_tail(TailShape::Tma)
            .with_ftail(0.8)
            .with_tail_power(-3.0)
            .with_depth(2.5);
        assert_eq!(cfg.nfft(), 1024);
        assert!((cfg.fmax() - 1.5).abs() < f64::EPSILON);
        assert!(!cfg.min_cutoff());
        assert_eq!(cfg.tail(), TailShape::Tma);
        assert!((cfg.depth() - 2.5).abs() < f64::EPSILON);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_bad_fs() {
        assert!(SpectralConfig::new(0.0).validate().is_err());
        assert!(SpectralConfig::new(f64::NAN).validate().is_err());
    }

    #[test]
    fn validate_bad_nfft() {
        assert!(SpectralConfig::new(2.0).with_nfft(2).validate().is_err());
    }

    #[test]
    fn validate_tma_needs_depth() {
        assert!(SpectralConfig::new(2.0)
            .with_tail(TailShape::Tma)
            .with_depth(0.0)
            .validate()
            .is_err());
        assert!(SpectralConfig::new(2.0)
            .with_tail(TailShape::Tma)
            .with_depth(3.0)
            .validate()
            .is_ok());
    }
}
