//! Engine configuration.

use triton_spectral::TailShape;

use crate::error::EngineError;

/// What kind of measurement the input series holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputType {
    /// Water level or water depth in m.
    #[default]
    WaterLevel,
    /// Water pressure at the sensor in N/m^2.
    Pressure,
}

/// What the run should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputType {
    /// Wave parameters.
    #[default]
    Wave,
    /// Corrected water level series.
    WaterLevel,
    /// Both wave parameters and corrected water levels.
    WaveAndWaterLevel,
}

/// Which analysis family computes the wave parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnalysisMethod {
    /// Frequency-domain (Welch spectrum) analysis.
    #[default]
    Spectral,
    /// Time-domain (up-going zero-crossing) analysis.
    Zerocross,
}

/// How the upper bound of the pressure correction band is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FmaxpcorrMethod {
    /// Use the configured `fmaxpcorr` as given.
    User,
    /// Refine the configured bound from the measured spectrum.
    #[default]
    Auto,
}

/// Behaviour of the pressure response factor above the correction band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KpPolicy {
    /// Blend the factor back to one above the band.
    One,
    /// Hold the factor at its cutoff value above the band.
    #[default]
    Constant,
}

/// Full configuration for a burst-wise analysis run.
///
/// # Example
///
/// ```
/// use triton_engine::{AnalysisMethod, Config, InputType, OutputType};
///
/// let config = Config::new(2.0, 4, 1024)
///     .with_input_type(InputType::Pressure)
///     .with_output_type(OutputType::WaveAndWaterLevel)
///     .with_method(AnalysisMethod::Spectral)
///     .with_heightfrombed(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    input_type: InputType,
    output_type: OutputType,
    method: AnalysisMethod,
    separate_sea_swell: bool,
    fs: f64,
    n_burst: usize,
    burst_duration: usize,
    nfft: usize,
    fmin: f64,
    fmax: f64,
    min_cutoff: bool,
    max_cutoff: bool,
    tail: TailShape,
    ftail: f64,
    tail_power: f64,
    fminpcorr: f64,
    fmaxpcorr: f64,
    fmaxpcorr_method: FmaxpcorrMethod,
    kp_policy: KpPolicy,
    heightfrombed: f64,
    rho: f64,
    fmin_swell: f64,
    fmax_swell: f64,
}

impl Config {
    /// Creates a configuration for `n_burst` bursts of `burst_duration`
    /// seconds sampled at `fs` Hz.
    pub fn new(fs: f64, n_burst: usize, burst_duration: usize) -> Self {
        Self {
            input_type: InputType::WaterLevel,
            output_type: OutputType::Wave,
            method: AnalysisMethod::Spectral,
            separate_sea_swell: false,
            fs,
            n_burst,
            burst_duration,
            nfft: 512,
            fmin: 0.05,
            fmax: 1e6,
            min_cutoff: true,
            max_cutoff: true,
            tail: TailShape::Off,
            ftail: 0.9,
            tail_power: -5.0,
            fminpcorr: 0.15,
            fmaxpcorr: 0.55,
            fmaxpcorr_method: FmaxpcorrMethod::Auto,
            kp_policy: KpPolicy::Constant,
            heightfrombed: 0.0,
            rho: 1000.0,
            fmin_swell: 0.1,
            fmax_swell: 0.25,
        }
    }

    /// Sets the input measurement kind.
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Sets the requested outputs.
    pub fn with_output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = output_type;
        self
    }

    /// Sets the analysis method.
    pub fn with_method(mut self, method: AnalysisMethod) -> Self {
        self.method = method;
        self
    }

    /// Enables or disables sea/swell separation.
    pub fn with_separate_sea_swell(mut self, on: bool) -> Self {
        self.separate_sea_swell = on;
        self
    }

    /// Sets the FFT length for spectral analysis.
    pub fn with_nfft(mut self, nfft: usize) -> Self {
        self.nfft = nfft;
        self
    }

    /// Sets the low-frequency cutoff in Hz.
    pub fn with_fmin(mut self, fmin: f64) -> Self {
        self.fmin = fmin;
        self
    }

    /// Sets the high-frequency cutoff in Hz.
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

    /// Sets the tail anchor frequency in Hz.
    pub fn with_ftail(mut self, ftail: f64) -> Self {
        self.ftail = ftail;
        self
    }

    /// Sets the tail power-law exponent.
    pub fn with_tail_power(mut self, power: f64) -> Self {
        self.tail_power = power;
        self
    }

    /// Sets the lower bound of the pressure correction band in Hz.
    pub fn with_fminpcorr(mut self, fminpcorr: f64) -> Self {
        self.fminpcorr = fminpcorr;
        self
    }

    /// Sets the upper bound of the pressure correction band in Hz.
    pub fn with_fmaxpcorr(mut self, fmaxpcorr: f64) -> Self {
        self.fmaxpcorr = fmaxpcorr;
        self
    }

    /// Sets how the correction band upper bound is chosen.
    pub fn with_fmaxpcorr_method(mut self, method: FmaxpcorrMethod) -> Self {
        self.fmaxpcorr_method = method;
        self
    }

    /// Sets the above-band behaviour of the response factor.
    pub fn with_kp_policy(mut self, policy: KpPolicy) -> Self {
        self.kp_policy = policy;
        self
    }

    /// Sets the sensor elevation above the bed in m.
    pub fn with_heightfrombed(mut self, heightfrombed: f64) -> Self {
        self.heightfrombed = heightfrombed;
        self
    }

    /// Sets the water density in kg/m^3.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the minimum frequency considered for the swell peak in Hz.
    pub fn with_fmin_swell(mut self, fmin_swell: f64) -> Self {
        self.fmin_swell = fmin_swell;
        self
    }

    /// Sets the maximum separation frequency in Hz.
    pub fn with_fmax_swell(mut self, fmax_swell: f64) -> Self {
        self.fmax_swell = fmax_swell;
        self
    }

    // --- Accessors ---

    /// Returns the input measurement kind.
    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    /// Returns the requested outputs.
    pub fn output_type(&self) -> OutputType {
        self.output_type
    }

    /// Returns the analysis method.
    pub fn method(&self) -> AnalysisMethod {
        self.method
    }

    /// Returns whether sea/swell separation is requested.
    pub fn separate_sea_swell(&self) -> bool {
        self.separate_sea_swell
    }

    /// Returns the sampling frequency in Hz.
    pub fn fs(&self) -> f64 {
        self.fs
    }

    /// Returns the number of bursts in the input.
    pub fn n_burst(&self) -> usize {
        self.n_burst
    }

    /// Returns the burst duration in seconds.
    pub fn burst_duration(&self) -> usize {
        self.burst_duration
    }

    /// Returns the number of samples in one burst.
    pub fn samples_per_burst(&self) -> usize {
        (self.fs * self.burst_duration as f64).round() as usize
    }

    /// Returns the FFT length.
    pub fn nfft(&self) -> usize {
        self.nfft
    }

    /// Returns the low-frequency cutoff in Hz.
    pub fn fmin(&self) -> f64 {
        self.fmin
    }

    /// Returns the high-frequency cutoff in Hz.
    pub fn fmax(&self) -> f64 {
        self.fmax
    }

    /// Returns whether the low cutoff is enabled.
    pub fn min_cutoff(&self) -> bool {
        self.min_cutoff
    }

    /// Returns whether the high cutoff is enabled.
    pub fn max_cutoff(&self) -> bool {
        self.max_cutoff
    }

    /// Returns the diagnostic tail shape.
    pub fn tail(&self) -> TailShape {
        self.tail
    }

    /// Returns the tail anchor frequency in Hz.
    pub fn ftail(&self) -> f64 {
        self.ftail
    }

    /// Returns the tail power-law exponent.
    pub fn tail_power(&self) -> f64 {
        self.tail_power
    }

    /// Returns the lower bound of the correction band in Hz.
    pub fn fminpcorr(&self) -> f64 {
        self.fminpcorr
    }

    /// Returns the upper bound of the correction band in Hz.
    pub fn fmaxpcorr(&self) -> f64 {
        self.fmaxpcorr
    }

    /// Returns how the correction band upper bound is chosen.
    pub fn fmaxpcorr_method(&self) -> FmaxpcorrMethod {
        self.fmaxpcorr_method
    }

    /// Returns the above-band response factor policy.
    pub fn kp_policy(&self) -> KpPolicy {
        self.kp_policy
    }

    /// Returns the sensor elevation above the bed in m.
    pub fn heightfrombed(&self) -> f64 {
        self.heightfrombed
    }

    /// Returns the water density in kg/m^3.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the swell peak lower bound in Hz.
    pub fn fmin_swell(&self) -> f64 {
        self.fmin_swell
    }

    /// Returns the separation frequency upper bound in Hz.
    pub fn fmax_swell(&self) -> f64 {
        self.fmax_swell
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.fs.is_finite() || self.fs <= 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!("fs must be finite and positive, got {}", self.fs),
            });
        }
        if self.n_burst == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "n_burst must be at least 1".to_string(),
            });
        }
        if self.burst_duration == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "burst_duration must be at least 1 second".to_string(),
            });
        }
        if self.samples_per_burst() == 0 {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "fs {} and burst_duration {} give an empty burst",
                    self.fs, self.burst_duration
                ),
            });
        }
        if self.nfft < 4 {
            return Err(EngineError::InvalidConfig {
                reason: format!("nfft must be >= 4, got {}", self.nfft),
            });
        }
        if !self.rho.is_finite() || self.rho <= 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!("rho must be finite and positive, got {}", self.rho),
            });
        }
        if !self.heightfrombed.is_finite() || self.heightfrombed < 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "heightfrombed must be finite and non-negative, got {}",
                    self.heightfrombed
                ),
            });
        }
        if !self.fmin.is_finite() || self.fmin < 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!("fmin must be finite and non-negative, got {}", self.fmin),
            });
        }
        if self.fmax.is_nan() || self.fmax <= 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!("fmax must be positive, got {}", self.fmax),
            });
        }
        if !self.ftail.is_finite() || self.ftail <= 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!("ftail must be finite and positive, got {}", self.ftail),
            });
        }
        if !self.fmin_swell.is_finite() || self.fmin_swell <= 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "fmin_swell must be finite and positive, got {}",
                    self.fmin_swell
                ),
            });
        }
        if !self.fmax_swell.is_finite() || self.fmax_swell <= 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "fmax_swell must be finite and positive, got {}",
                    self.fmax_swell
                ),
            });
        }
        if !self.fminpcorr.is_finite() || self.fminpcorr < 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "fminpcorr must be finite and non-negative, got {}",
                    self.fminpcorr
                ),
            });
        }
        if self.fmaxpcorr.is_nan() || self.fmaxpcorr <= 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!("fmaxpcorr must be positive, got {}", self.fmaxpcorr),
            });
        }
        Ok(())
    }

    pub(crate) fn set_output_type(&mut self, output_type: OutputType) {
        self.output_type = output_type;
    }

    pub(crate) fn set_method(&mut self, method: AnalysisMethod) {
        self.method = method;
    }

    pub(crate) fn set_separate_sea_swell(&mut self, on: bool) {
        self.separate_sea_swell = on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::new(2.0, 1, 1024);
        assert_eq!(cfg.input_type(), InputType::WaterLevel);
        assert_eq!(cfg.output_type(), OutputType::Wave);
        assert_eq!(cfg.method(), AnalysisMethod::Spectral);
        assert!(!cfg.separate_sea_swell());
        assert_eq!(cfg.nfft(), 512);
        assert_eq!(cfg.samples_per_burst(), 2048);
        assert_eq!(cfg.kp_policy(), KpPolicy::Constant);
        assert_eq!(cfg.fmaxpcorr_method(), FmaxpcorrMethod::Auto);
        assert!((cfg.rho() - 1000.0).abs() < f64::EPSILON);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn fractional_sampling_rate_rounds_sample_count() {
        let cfg = Config::new(2.5, 1, 10);
        assert_eq!(cfg.samples_per_burst(), 25);
    }

    #[test]
    fn validate_rejects_zero_bursts() {
        assert!(Config::new(2.0, 0, 1024).validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_fs() {
        assert!(Config::new(0.0, 1, 1024).validate().is_err());
        assert!(Config::new(f64::INFINITY, 1, 1024).validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_rho() {
        assert!(Config::new(2.0, 1, 1024).with_rho(0.0).validate().is_err());
    }
}
