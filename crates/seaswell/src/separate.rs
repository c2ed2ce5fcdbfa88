//! Sea/swell partitioning by the spectrum integration method (Hwang, 2012).

use tracing::debug;
use triton_spectral::{wave_spectrum, Spectrum};

use crate::config::SeaSwellConfig;
use crate::error::SeaSwellError;

/// Upper frequency bound of the steepness search band, in Hz.
const STEEPNESS_BAND: f64 = 0.5;

/// Sea/swell wave statistics for one burst.
#[derive(Debug, Clone)]
pub struct SeaSwellStats {
    hm0: f64,
    hm0_sea: f64,
    hm0_swell: f64,
    tp: f64,
    tp_sea: f64,
    tp_swell: f64,
    fp: f64,
    fseparation: f64,
    spectrum: Spectrum,
}

impl SeaSwellStats {
    /// Total zero-moment wave height in m.
    pub fn hm0(&self) -> f64 {
        self.hm0
    }

    /// Zero-moment wave height of the sea partition in m.
    pub fn hm0_sea(&self) -> f64 {
        self.hm0_sea
    }

    /// Zero-moment wave height of the swell partition in m.
    pub fn hm0_swell(&self) -> f64 {
        self.hm0_swell
    }

    /// Total peak period in s.
    pub fn tp(&self) -> f64 {
        self.tp
    }

    /// Peak period of the sea partition in s.
    pub fn tp_sea(&self) -> f64 {
        self.tp_sea
    }

    /// Peak period of the swell partition in s.
    pub fn tp_swell(&self) -> f64 {
        self.tp_swell
    }

    /// Peak frequency from the fifth-power weighted integral, in Hz.
    pub fn fp(&self) -> f64 {
        self.fp
    }

    /// Separation frequency between swell and sea, in Hz.
    pub fn fseparation(&self) -> f64 {
        self.fseparation
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

/// Computes sea/swell-partitioned wave statistics for one burst.
///
/// The burst goes through the full spectral pipeline first (PSD, diagnostic
/// tail, cutoffs), then the separation frequency is estimated from the
/// spectrum and the zero moment is split at that frequency.
pub fn sea_swell_analysis(
    x: &[f64],
    config: &SeaSwellConfig,
) -> Result<SeaSwellStats, SeaSwellError> {
    config.validate()?;
    let stats = wave_spectrum(x, config.spectral())?;
    let spectrum = stats.into_spectrum();

    let fseparation = separation_frequency(&spectrum, config.fmax_swell());
    debug!(fseparation, "sea/swell separation");

    let f = spectrum.frequencies();
    let syy = spectrum.densities();
    let df = spectrum.delta_f();

    // Swell occupies bins up to and including the separation bin.
    let loc2 = f.iter().filter(|&&v| v <= fseparation).count().max(1) - 1;
    let m0_swell: f64 = syy[..=loc2].iter().sum::<f64>() * df;
    let m0_sea: f64 = syy[loc2 + 1..].iter().sum::<f64>() * df;
    let m0 = spectrum.moment(0);

    let hm0 = 4.0 * m0.sqrt();
    let hm0_sea = 4.0 * m0_sea.sqrt();
    let hm0_swell = 4.0 * m0_swell.sqrt();

    let tp = period_of_peak(f, syy, 0, f.len() - 1);
    let tp_sea = period_of_peak(f, syy, loc2, f.len() - 1);
    let mut loc4 = f.iter().filter(|&&v| v <= config.fmin_swell()).count().max(1) - 1;
    if loc4 >= loc2 {
        loc4 = 1;
    }
    let tp_swell = period_of_peak(f, syy, loc4, loc2);

    let fp = spectrum.weighted_peak_frequency();

    Ok(SeaSwellStats {
        hm0,
        hm0_sea,
        hm0_swell,
        tp,
        tp_sea,
        tp_swell,
        fp,
        fseparation,
        spectrum,
    })
}

/// Estimates the sea/swell separation frequency of a processed spectrum.
///
/// First pass: the integration steepness score `m1*(f) / sqrt(m-1*(f))` over
/// the band below 0.5 Hz peaks near the wind-sea peak; a cubic fit maps that
/// frequency to a separation estimate. Second pass: the estimate is refined
/// to the spectral minimum between the rough swell and sea peaks. Both
/// passes clamp to `fmax_swell` when the estimate is unusable.
pub fn separation_frequency(spectrum: &Spectrum, fmax_swell: f64) -> f64 {
    let f = spectrum.frequencies();
    let syy = spectrum.densities();
    let df = spectrum.delta_f();
    let n_band = f.iter().filter(|&&v| v <= STEEPNESS_BAND).count();

    let mut best: Option<(usize, f64)> = None;
    for i in 0..n_band {
        let m1: f64 = (i..n_band).map(|j| syy[j] * f[j] * df).sum();
        let mm1: f64 = (i..n_band).map(|j| syy[j] / f[j] * df).sum();
        let score = m1 / mm1.sqrt();
        if score.is_finite() && best.map_or(true, |(_, b)| score > b) {
            best = Some((i, score));
        }
    }
    let mut fsep = match best {
        Some((i, _)) => {
            let fm = f[i];
            24.2084 * fm.powi(3) - 9.2021 * fm.powi(2) + 1.8906 * fm - 0.04286
        }
        None => fmax_swell,
    };
    fsep = clamp_separation(fsep, fmax_swell);

    // Refine to the spectral valley between the rough swell and sea peaks.
    let loc2 = f.iter().filter(|&&v| v <= fsep).count().max(1) - 1;
    let fp_sea = weighted_peak(f, syy, loc2, f.len() - 1);
    let fp_swell = weighted_peak(f, syy, 0, loc2);

    let valley: Vec<usize> = (0..f.len())
        .filter(|&i| f[i] > fp_swell && f[i] < fp_sea)
        .collect();
    if let (Some(&first), Some(min_off)) = (
        valley.first(),
        triton_stats::argmin(
            &valley.iter().map(|&i| syy[i]).collect::<Vec<f64>>(),
        ),
    ) {
        if first + min_off < f.len() {
            fsep = clamp_separation(f[first + min_off], fmax_swell);
        }
    }
    fsep
}

fn clamp_separation(fsep: f64, fmax_swell: f64) -> f64 {
    if !fsep.is_finite() || fsep == 0.0 || fsep > fmax_swell {
        fmax_swell
    } else {
        fsep
    }
}

/// Peak period over the inclusive bin range `[lo, hi]`.
fn period_of_peak(f: &[f64], syy: &[f64], lo: usize, hi: usize) -> f64 {
    match triton_stats::argmax(&syy[lo..=hi]) {
        Some(off) if f[lo + off] > 0.0 => 1.0 / f[lo + off],
        _ => f64::NAN,
    }
}

/// Fifth-power weighted peak frequency over the inclusive bin range `[lo, hi]`.
fn weighted_peak(f: &[f64], syy: &[f64], lo: usize, hi: usize) -> f64 {
    let mut num = 0.0;
    let mut den = 0.0;
    for i in lo..=hi {
        let w = syy[i].powi(5);
        num += w * f[i];
        den += w;
    }
    num / den
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;
    use triton_spectral::SpectralConfig;

    /// Swell tone at bin 20 (0.078125 Hz) plus sea tone at bin 90
    /// (0.3515625 Hz) for fs = 2, nfft = 512.
    fn bimodal(fs: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let t = (i as f64 + 1.0) / fs;
                (2.0 * PI * 0.078125 * t).sin() + 0.7 * (2.0 * PI * 0.3515625 * t).sin()
            })
            .collect()
    }

    fn default_config() -> SeaSwellConfig {
        // fmin_swell below the 0.078 Hz swell tone so the swell peak search
        // covers it.
        SeaSwellConfig::new(SpectralConfig::new(2.0).with_nfft(512)).with_fmin_swell(0.05)
    }

    #[test]
    fn energy_partition_is_exact() {
        let stats = sea_swell_analysis(&bimodal(2.0, 4096), &default_config()).unwrap();
        let total = stats.hm0() * stats.hm0();
        let parts = stats.hm0_sea() * stats.hm0_sea() + stats.hm0_swell() * stats.hm0_swell();
        assert_relative_eq!(total, parts, epsilon = 1e-9);
    }

    #[test]
    fn bimodal_peaks_are_recovered() {
        let stats = sea_swell_analysis(&bimodal(2.0, 4096), &default_config()).unwrap();
        assert_relative_eq!(stats.tp_swell(), 1.0 / 0.078125, epsilon = 1e-9);
        assert_relative_eq!(stats.tp_sea(), 1.0 / 0.3515625, epsilon = 1e-9);
        // Swell tone (amplitude 1.0) dominates the sea tone (0.7).
        assert_relative_eq!(stats.tp(), 1.0 / 0.078125, epsilon = 1e-9);
        assert_relative_eq!(stats.hm0_swell(), 4.0 * 0.5f64.sqrt(), epsilon = 0.1);
        assert_relative_eq!(stats.hm0_sea(), 4.0 * 0.245f64.sqrt(), epsilon = 0.1);
    }

    #[test]
    fn separation_sits_between_the_peaks() {
        let stats = sea_swell_analysis(&bimodal(2.0, 4096), &default_config()).unwrap();
        assert!(stats.fseparation() > 0.078125);
        assert!(stats.fseparation() <= 0.25);
    }

    #[test]
    fn separation_respects_custom_bound() {
        let config = default_config().with_fmax_swell(0.12);
        let stats = sea_swell_analysis(&bimodal(2.0, 4096), &config).unwrap();
        assert!(stats.fseparation() <= 0.12);
    }

    #[test]
    fn pure_sea_leaves_no_swell_energy() {
        let fs = 2.0;
        let x: Vec<f64> = (0..4096)
            .map(|i| 0.7 * (2.0 * PI * 0.3515625 * (i as f64 + 1.0) / fs).sin())
            .collect();
        let stats = sea_swell_analysis(&x, &default_config()).unwrap();
        assert!(stats.hm0_swell() < 0.1 * stats.hm0_sea());
        assert_relative_eq!(stats.hm0_sea(), stats.hm0(), epsilon = 0.01);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = default_config().with_fmax_swell(-1.0);
        assert!(sea_swell_analysis(&bimodal(2.0, 4096), &config).is_err());
    }
}
