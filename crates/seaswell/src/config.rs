//! Configuration for sea/swell separation.

use triton_spectral::SpectralConfig;

use crate::error::SeaSwellError;

/// Configuration for sea/swell partitioning of a wave spectrum.
///
/// Wraps a [`SpectralConfig`] for the underlying PSD estimate and adds the
/// swell band bounds.
#[derive(Debug, Clone)]
pub struct SeaSwellConfig {
    spectral: SpectralConfig,
    fmax_swell: f64,
    fmin_swell: f64,
}

impl SeaSwellConfig {
    /// Creates a configuration around an existing spectral setup.
    ///
    /// Defaults: `fmax_swell = 0.25` Hz (upper bound on the separation
    /// frequency), `fmin_swell = 0.1` Hz (lower bound on the swell peak).
    pub fn new(spectral: SpectralConfig) -> Self {
        Self {
            spectral,
            fmax_swell: 0.25,
            fmin_swell: 0.1,
        }
    }

    /// Sets the maximum frequency the separation point may take.
    pub fn with_fmax_swell(mut self, fmax_swell: f64) -> Self {
        self.fmax_swell = fmax_swell;
        self
    }

    /// Sets the minimum frequency considered for the swell peak.
    pub fn with_fmin_swell(mut self, fmin_swell: f64) -> Self {
        self.fmin_swell = fmin_swell;
        self
    }

    /// Returns the underlying spectral configuration.
    pub fn spectral(&self) -> &SpectralConfig {
        &self.spectral
    }

    /// Returns the separation frequency upper bound in Hz.
    pub fn fmax_swell(&self) -> f64 {
        self.fmax_swell
    }

    /// Returns the swell peak lower bound in Hz.
    pub fn fmin_swell(&self) -> f64 {
        self.fmin_swell
    }

    /// Validates this configuration, including the wrapped spectral part.
    pub fn validate(&self) -> Result<(), SeaSwellError> {
        self.spectral.validate()?;
        if !self.fmax_swell.is_finite() || self.fmax_swell <= 0.0 {
            return Err(SeaSwellError::InvalidConfig {
                reason: format!(
                    "fmax_swell must be finite and positive, got {}",
                    self.fmax_swell
                ),
            });
        }
        if !self.fmin_swell.is_finite() || self.fmin_swell <= 0.0 {
            return Err(SeaSwellError::InvalidConfig {
                reason: format!(
                    "fmin_swell must be finite and positive, got {}",
                    self.fmin_swell
                ),
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
        let cfg = SeaSwellConfig::new(SpectralConfig::new(2.0));
        assert!((cfg.fmax_swell() - 0.25).abs() < f64::EPSILON);
        assert!((cfg.fmin_swell() - 0.1).abs() < f64::EPSILON);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_bounds() {
        let cfg = SeaSwellConfig::new(SpectralConfig::new(2.0)).with_fmax_swell(0.0);
        assert!(cfg.validate().is_err());
        let cfg = SeaSwellConfig::new(SpectralConfig::new(2.0)).with_fmin_swell(f64::NAN);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_propagates_spectral_errors() {
        let cfg = SeaSwellConfig::new(SpectralConfig::new(-2.0));
        assert!(matches!(
            cfg.validate(),
            Err(SeaSwellError::Spectral(_))
        ));
    }
}
