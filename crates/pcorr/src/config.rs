//! Configuration for pressure attenuation correction.

use crate::error::PcorrError;

/// How the pressure response factor behaves above the correction band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AttenuationPolicy {
    /// No correction at all; the response factor is one everywhere.
    Off,
    /// Correct up to `fmaxpcorr`, then blend the factor linearly back to one
    /// over a 0.1 Hz band centred on the cutoff.
    #[default]
    BlendToUnity,
    /// Correct up to `fmaxpcorr`, then hold the factor at its cutoff value.
    HoldConstant,
}

/// Configuration for the frequency- and wave-domain pressure corrections.
#[derive(Debug, Clone)]
pub struct PcorrConfig {
    fs: f64,
    heightfrombed: f64,
    fminpcorr: f64,
    fmaxpcorr: f64,
    ftail: f64,
    policy: AttenuationPolicy,
    auto_fmax: bool,
}

impl PcorrConfig {
    /// Creates a configuration for the given sampling frequency.
    ///
    /// Defaults: sensor on the bed, correction band 0.15 to 0.55 Hz with
    /// automatic upper-bound refinement, tail anchor 0.9 Hz, and the
    /// blend-to-unity policy.
    pub fn new(fs: f64) -> Self {
        Self {
            fs,
            heightfrombed: 0.0,
            fminpcorr: 0.15,
            fmaxpcorr: 0.55,
            ftail: 0.9,
            policy: AttenuationPolicy::BlendToUnity,
            auto_fmax: true,
        }
    }

    /// Sets the sensor elevation above the bed in m.
    pub fn with_heightfrombed(mut self, heightfrombed: f64) -> Self {
        self.heightfrombed = heightfrombed;
        self
    }

    /// Sets the lower bound of the correction band in Hz.
    pub fn with_fminpcorr(mut self, fminpcorr: f64) -> Self {
        self.fminpcorr = fminpcorr;
        self
    }

    /// Sets the upper bound of the correction band in Hz.
    pub fn with_fmaxpcorr(mut self, fmaxpcorr: f64) -> Self {
        self.fmaxpcorr = fmaxpcorr;
        self
    }

    /// Sets the diagnostic tail anchor frequency in Hz.
    pub fn with_ftail(mut self, ftail: f64) -> Self {
        self.ftail = ftail;
        self
    }

    /// Sets the above-band behaviour of the response factor.
    pub fn with_policy(mut self, policy: AttenuationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enables or disables automatic refinement of `fmaxpcorr`.
    pub fn with_auto_fmax(mut self, auto_fmax: bool) -> Self {
        self.auto_fmax = auto_fmax;
        self
    }

    /// Returns the sampling frequency in Hz.
    pub fn fs(&self) -> f64 {
        self.fs
    }

    /// Returns the sensor elevation above the bed in m.
    pub fn heightfrombed(&self) -> f64 {
        self.heightfrombed
    }

    /// Returns the lower bound of the correction band in Hz.
    pub fn fminpcorr(&self) -> f64 {
        self.fminpcorr
    }

    /// Returns the upper bound of the correction band in Hz, clamped to
    /// Nyquist.
    pub fn fmaxpcorr(&self) -> f64 {
        self.fmaxpcorr.min(self.fs / 2.0)
    }

    /// Returns the diagnostic tail anchor frequency in Hz.
    pub fn ftail(&self) -> f64 {
        self.ftail
    }

    /// Returns the above-band policy.
    pub fn policy(&self) -> AttenuationPolicy {
        self.policy
    }

    /// Returns whether `fmaxpcorr` is refined automatically.
    pub fn auto_fmax(&self) -> bool {
        self.auto_fmax
    }

    /// Validates this configuration against the burst's mean water depth.
    pub fn validate(&self, depth: f64) -> Result<(), PcorrError> {
        if !self.fs.is_finite() || self.fs <= 0.0 {
            return Err(PcorrError::InvalidConfig {
                reason: format!("fs must be finite and positive, got {}", self.fs),
            });
        }
        if !self.heightfrombed.is_finite() || self.heightfrombed < 0.0 {
            return Err(PcorrError::InvalidConfig {
                reason: format!(
                    "heightfrombed must be finite and non-negative, got {}",
                    self.heightfrombed
                ),
            });
        }
        if !self.fminpcorr.is_finite() || self.fminpcorr < 0.0 {
            return Err(PcorrError::InvalidConfig {
                reason: format!(
                    "fminpcorr must be finite and non-negative, got {}",
                    self.fminpcorr
                ),
            });
        }
        if self.fmaxpcorr.is_nan() || self.fmaxpcorr <= 0.0 {
            return Err(PcorrError::InvalidConfig {
                reason: format!("fmaxpcorr must be positive, got {}", self.fmaxpcorr),
            });
        }
        if depth <= self.heightfrombed {
            return Err(PcorrError::SensorAboveSurface {
                depth,
                heightfrombed: self.heightfrombed,
            });
        }
        Ok(())
    }
}
