//! Frequency-domain pressure attenuation correction.
//!
//! Divides the spectrum of the measured pressure head by the linear-theory
//! pressure response factor `Kp = cosh(k z) / cosh(k h)` and transforms back,
//! recovering the surface elevation the sensor saw attenuated.

use std::f64::consts::PI;

use num_complex::Complex;
use rustfft::FftPlanner;
use tracing::debug;
use triton_dispersion::{wavenumber, GRAVITY};
use triton_spectral::welch_psd;

use crate::config::{AttenuationPolicy, PcorrConfig};
use crate::error::PcorrError;

/// Half-width of the blend band around the correction cutoff, in Hz.
const BLEND_HALF_WIDTH: f64 = 0.05;

/// Result of the frequency-domain correction.
#[derive(Debug, Clone)]
pub struct FftCorrection {
    eta: Vec<f64>,
    ftail: f64,
    fmaxpcorr: f64,
}

impl FftCorrection {
    /// Corrected surface elevations, detrended, in m.
    pub fn eta(&self) -> &[f64] {
        &self.eta
    }

    /// Consumes the correction, returning the elevation series.
    pub fn into_eta(self) -> Vec<f64> {
        self.eta
    }

    /// Tail anchor frequency after automatic refinement, in Hz.
    pub fn ftail(&self) -> f64 {
        self.ftail
    }

    /// Correction cutoff after automatic refinement, in Hz.
    pub fn fmaxpcorr(&self) -> f64 {
        self.fmaxpcorr
    }
}

/// Corrects a burst of pressure head for depth attenuation in the frequency
/// domain.
///
/// `series` is the pressure head in m of water column, `depth` the burst mean
/// water depth. The series is detrended first; the returned elevations are
/// therefore relative to the mean surface.
pub fn fft_correction(
    series: &[f64],
    depth: f64,
    config: &PcorrConfig,
) -> Result<FftCorrection, PcorrError> {
    config.validate(depth)?;
    let n = series.len();
    if n < 8 {
        return Err(PcorrError::SeriesTooShort { len: n, min: 8 });
    }

    let fs = config.fs();
    let hb = config.heightfrombed();
    let x = triton_stats::detrend_linear(series);

    // Response factor on the one-sided grid; the negative-frequency half is
    // mirrored from it so the corrected series stays real.
    let half = n / 2 + 1;
    let f: Vec<f64> = (0..half).map(|i| i as f64 * fs / n as f64).collect();
    let omega: Vec<f64> = f.iter().map(|&v| 2.0 * PI * v).collect();
    let k = wavenumber(&omega, depth)?;

    let kmax_l = PI / (depth - hb);
    let kp_min = (kmax_l * hb).cosh() / (kmax_l * depth).cosh();
    let mut kp: Vec<f64> = k
        .iter()
        .map(|&k| ((k * hb).cosh() / (k * depth).cosh()).max(kp_min))
        .collect();

    let mut fmaxpcorr = config.fmaxpcorr();
    let mut ftail = config.ftail();
    if config.auto_fmax() {
        if let Some((refined_fmax, refined_ftail)) =
            refine_cutoff(&x, &f, &kp, depth, kmax_l, config)
        {
            fmaxpcorr = fmaxpcorr.min(refined_fmax);
            ftail = ftail.min(refined_ftail);
            debug!(fmaxpcorr, ftail, "refined correction band");
        }
    }

    match config.policy() {
        AttenuationPolicy::Off => {
            for v in kp.iter_mut() {
                *v = 1.0;
            }
        }
        AttenuationPolicy::BlendToUnity => {
            for i in 0..half {
                if f[i] > fmaxpcorr {
                    kp[i] = 1.0;
                }
            }
            let loc1 = bin_at_or_below(&f, fmaxpcorr - BLEND_HALF_WIDTH);
            let loc2 = bin_at_or_below(&f, fmaxpcorr + BLEND_HALF_WIDTH);
            if loc2 > loc1 {
                let (a, b) = (kp[loc1], kp[loc2]);
                let slope = (b - a) / (loc2 - loc1) as f64;
                for (off, v) in kp[loc1..=loc2].iter_mut().enumerate() {
                    *v = a + slope * off as f64;
                }
            }
        }
        AttenuationPolicy::HoldConstant => {
            let hold = kp[bin_at_or_below(&f, fmaxpcorr)];
            for i in 0..half {
                if f[i] > fmaxpcorr {
                    kp[i] = hold;
                }
            }
        }
    }

    let mut kp_full = vec![1.0; n];
    kp_full[..half].copy_from_slice(&kp);
    mirror_kp(&mut kp_full);

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    let ifft = planner.plan_fft_inverse(n);

    let mut buf: Vec<Complex<f64>> = x.iter().map(|&v| Complex::new(v, 0.0)).collect();
    fft.process(&mut buf);
    for (c, &g) in buf.iter_mut().zip(&kp_full) {
        *c /= g;
    }
    ifft.process(&mut buf);
    let scale = 1.0 / n as f64;
    let eta: Vec<f64> = buf.iter().map(|c| c.re * scale).collect();

    Ok(FftCorrection {
        eta,
        ftail,
        fmaxpcorr,
    })
}

/// Pulls the correction cutoff down to the spectral minimum between the peak
/// and the linear-theory limit, where amplified noise starts to dominate.
fn refine_cutoff(
    x: &[f64],
    f: &[f64],
    kp: &[f64],
    depth: f64,
    kmax_l: f64,
    config: &PcorrConfig,
) -> Option<(f64, f64)> {
    let spectrum = welch_psd(x, config.fs(), x.len());
    let syy = spectrum.densities();

    let loc_fmin = bin_at_or_below(f, config.fminpcorr());
    let peak = loc_fmin + triton_stats::argmax(&syy[loc_fmin..])?;

    let fmax_l = (GRAVITY * kmax_l * (kmax_l * depth).tanh()).sqrt() / (2.0 * PI);
    let loc_fmax_l = bin_at_or_below(f, fmax_l).max(peak);

    // Minimum of the corrected spectrum between the peak and the limit.
    let amplified: Vec<f64> = (peak..=loc_fmax_l)
        .map(|i| syy[i] / (kp[i] * kp[i]))
        .collect();
    let valley = peak + triton_stats::argmin(&amplified)?;

    let mut refined = f[valley].min(fmax_l);
    if refined == f[peak] && fmax_l > f[peak] {
        refined = fmax_l;
    }
    let refined_ftail = f[valley].min(fmax_l);
    Some((refined, refined_ftail))
}

/// Fills the negative-frequency half of the response factor from the positive
/// half so that `kp[n - i] == kp[i]`, keeping the corrected series real.
pub(crate) fn mirror_kp(kp_full: &mut [f64]) {
    let n = kp_full.len();
    for i in 1..(n + 1) / 2 {
        kp_full[n - i] = kp_full[i];
    }
}

/// Index of the highest bin with `f <= limit`, saturating at the first bin.
fn bin_at_or_below(f: &[f64], limit: f64) -> usize {
    f.iter().filter(|&&v| v <= limit).count().max(1) - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use triton_dispersion::wavenumber_scalar;

    const FS: f64 = 2.0;
    const N: usize = 4000;
    const DEPTH: f64 = 5.0;
    const HEIGHTFROMBED: f64 = 0.5;

    /// 0.125 Hz falls exactly on bin 250 of a 4000-point transform at 2 Hz.
    fn surface_and_pressure() -> (Vec<f64>, Vec<f64>) {
        let k = wavenumber_scalar(2.0 * PI * 0.125, DEPTH).unwrap();
        let kp = (k * HEIGHTFROMBED).cosh() / (k * DEPTH).cosh();
        let eta: Vec<f64> = (0..N)
            .map(|i| (2.0 * PI * 0.125 * (i as f64 + 1.0) / FS).sin())
            .collect();
        let head = eta.iter().map(|&v| v * kp).collect();
        (eta, head)
    }

    fn config() -> PcorrConfig {
        PcorrConfig::new(FS)
            .with_heightfrombed(HEIGHTFROMBED)
            .with_auto_fmax(false)
    }

    #[test]
    fn recovers_attenuated_sinusoid() {
        let (eta, head) = surface_and_pressure();
        let corrected = fft_correction(&head, DEPTH, &config()).unwrap();
        for (a, b) in corrected.eta().iter().zip(&eta) {
            assert_relative_eq!(*a, *b, epsilon = 1e-6);
        }
    }

    #[test]
    fn off_policy_is_identity_on_detrended_series() {
        let (_, head) = surface_and_pressure();
        let cfg = config().with_policy(AttenuationPolicy::Off);
        let corrected = fft_correction(&head, DEPTH, &cfg).unwrap();
        let detrended = triton_stats::detrend_linear(&head);
        for (a, b) in corrected.eta().iter().zip(&detrended) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn hold_constant_policy_still_recovers_in_band_tone() {
        let (eta, head) = surface_and_pressure();
        let cfg = config().with_policy(AttenuationPolicy::HoldConstant);
        let corrected = fft_correction(&head, DEPTH, &cfg).unwrap();
        let err: f64 = corrected
            .eta()
            .iter()
            .zip(&eta)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        assert!(err < 1e-3, "max error {err}");
    }

    #[test]
    fn refinement_never_raises_the_cutoff() {
        let (_, head) = surface_and_pressure();
        let cfg = PcorrConfig::new(FS).with_heightfrombed(HEIGHTFROMBED);
        let corrected = fft_correction(&head, DEPTH, &cfg).unwrap();
        assert!(corrected.fmaxpcorr() <= cfg.fmaxpcorr());
        assert!(corrected.ftail() <= cfg.ftail());
    }

    #[test]
    fn mirrored_response_factor_is_symmetric() {
        // Even and odd lengths hit the Nyquist bin differently.
        for n in [8usize, 9] {
            let half = n / 2 + 1;
            let mut kp_full = vec![1.0; n];
            for (i, v) in kp_full[..half].iter_mut().enumerate() {
                *v = 0.2 + 0.1 * i as f64;
            }
            mirror_kp(&mut kp_full);
            for i in 1..n {
                assert_relative_eq!(kp_full[i], kp_full[n - i]);
            }
        }
    }

    #[test]
    fn sensor_above_surface_is_rejected() {
        let (_, head) = surface_and_pressure();
        let cfg = PcorrConfig::new(FS).with_heightfrombed(6.0);
        assert!(matches!(
            fft_correction(&head, DEPTH, &cfg),
            Err(PcorrError::SensorAboveSurface { .. })
        ));
    }

    #[test]
    fn short_series_is_rejected() {
        assert!(matches!(
            fft_correction(&[0.0; 4], DEPTH, &config()),
            Err(PcorrError::SeriesTooShort { .. })
        ));
    }
}
