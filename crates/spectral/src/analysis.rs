//! Frequency-domain wave statistics from a burst of surface elevations.

use tracing::debug;

use crate::config::SpectralConfig;
use crate::error::SpectralError;
use crate::spectrum::Spectrum;
use crate::welch::welch_psd;

/// Wave parameters derived from the power spectrum of one burst.
#[derive(Debug, Clone)]
pub struct SpectralWaveStats {
    hm0: f64,
    tm01: f64,
    tm02: f64,
    tp: f64,
    fp: f64,
    spectrum: Spectrum,
}

impl SpectralWaveStats {
    /// Zero-moment wave height `4 * sqrt(m0)` in m.
    pub fn hm0(&self) -> f64 {
        self.hm0
    }

    /// Mean period `m0 / m1` in s.
    pub fn tm01(&self) -> f64 {
        self.tm01
    }

    /// Zero-crossing period `sqrt(m0 / m2)` in s.
    pub fn tm02(&self) -> f64 {
        self.tm02
    }

    /// Peak period `1 / f_peak` in s.
    pub fn tp(&self) -> f64 {
        self.tp
    }

    /// Peak frequency from the fifth-power weighted integral, in Hz.
    pub fn fp(&self) -> f64 {
        self.fp
    }

    /// The processed spectrum the statistics were computed from.
    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    /// Consumes the statistics, returning the processed spectrum.
    pub fn into_spectrum(self) -> Spectrum {
        self.spectrum
    }
}

/// Computes spectral wave statistics for one burst of surface elevations.
///
/// The burst is linearly detrended, its PSD estimated with [`welch_psd`],
/// the diagnostic tail applied, then the configured cutoffs, and finally the
/// moments and peak parameters are taken from the processed spectrum.
pub fn wave_spectrum(
    x: &[f64],
    config: &SpectralConfig,
) -> Result<SpectralWaveStats, SpectralError> {
    config.validate()?;
    if x.len() < 2 {
        return Err(SpectralError::SeriesTooShort {
            len: x.len(),
            min: 2,
        });
    }

    let detrended = triton_stats::detrend_linear(x);
    let mut spectrum = welch_psd(&detrended, config.fs(), config.nfft());

    spectrum.apply_tail(
        config.tail(),
        config.ftail(),
        config.tail_power(),
        config.depth(),
    );
    spectrum.apply_cutoff(
        config.fmin(),
        config.fmax(),
        config.min_cutoff(),
        config.max_cutoff(),
    );

    let m0 = spectrum.moment(0);
    let m1 = spectrum.moment(1);
    let m2 = spectrum.moment(2);
    debug!(m0, m1, m2, "spectral moments");

    let hm0 = 4.0 * m0.sqrt();
    let tm01 = m0 / m1;
    let tm02 = (m0 / m2).sqrt();

    let tp = match spectrum.peak_index() {
        Some(i) if spectrum.frequencies()[i] > 0.0 => 1.0 / spectrum.frequencies()[i],
        _ => f64::NAN,
    };
    let fp = spectrum.weighted_peak_frequency();

    Ok(SpectralWaveStats {
        hm0,
        tm01,
        tm02,
        tp,
        fp,
        spectrum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn sinusoid(amplitude: f64, freq: f64, fs: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| amplitude * (2.0 * PI * freq * (i as f64 + 1.0) / fs).sin())
            .collect()
    }

    #[test]
    fn sinusoid_recovers_hm0_and_tp() {
        // Amplitude 1 sinusoid: m0 = 1/2, so Hm0 = 4 / sqrt(2) ~ 2.83.
        // 0.125 Hz falls exactly on bin 32 at fs = 2, nfft = 512.
        let fs = 2.0;
        let x = sinusoid(1.0, 0.125, fs, 2048);
        let config = SpectralConfig::new(fs).with_nfft(512);
        let stats = wave_spectrum(&x, &config).unwrap();
        assert_relative_eq!(stats.hm0(), 4.0 / 2f64.sqrt(), epsilon = 0.05);
        assert_relative_eq!(stats.tp(), 8.0, epsilon = 1e-9);
        assert_relative_eq!(stats.fp(), 0.125, epsilon = 0.01);
        assert_relative_eq!(stats.tm02(), 8.0, epsilon = 0.5);
    }

    #[test]
    fn cutoff_removes_out_of_band_energy() {
        let fs = 2.0;
        let x = sinusoid(1.0, 0.125, fs, 2048);
        // Band excludes the sinusoid entirely.
        let config = SpectralConfig::new(fs).with_nfft(512).with_fmin(0.3);
        let stats = wave_spectrum(&x, &config).unwrap();
        assert!(stats.hm0() < 0.05);
    }

    #[test]
    fn trend_does_not_leak_into_moments() {
        let fs = 2.0;
        let mut x = sinusoid(1.0, 0.125, fs, 2048);
        for (i, v) in x.iter_mut().enumerate() {
            *v += 5.0 + 0.01 * i as f64;
        }
        let config = SpectralConfig::new(fs).with_nfft(512);
        let stats = wave_spectrum(&x, &config).unwrap();
        assert_relative_eq!(stats.hm0(), 4.0 / 2f64.sqrt(), epsilon = 0.08);
    }

    #[test]
    fn too_short_series_is_rejected() {
        let config = SpectralConfig::new(2.0);
        assert!(matches!(
            wave_spectrum(&[1.0], &config),
            Err(SpectralError::SeriesTooShort { len: 1, min: 2 })
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SpectralConfig::new(-1.0);
        assert!(matches!(
            wave_spectrum(&[0.0; 64], &config),
            Err(SpectralError::InvalidConfig { .. })
        ));
    }
}
