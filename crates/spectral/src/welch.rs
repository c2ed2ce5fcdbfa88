//! Averaged-periodogram (Welch) power spectral density estimation.
//!
//! Matches the reference PSD settings: Hann-windowed segments of up to 256
//! samples, 50% overlap, per-segment mean removal, zero-padding to `nfft`,
//! one-sided density scaling.

use num_complex::Complex;
use rustfft::FftPlanner;
use std::f64::consts::PI;

use crate::spectrum::Spectrum;

/// Maximum segment length for the averaged periodogram.
const MAX_SEGMENT: usize = 256;

/// Estimates a one-sided PSD of `x` at resolution `nfft`.
///
/// Output frequencies are `f[i] = i * fs / nfft` over `nfft/2 + 1` bins,
/// covering `[0, fs/2]`. The caller guarantees `fs > 0` and `nfft >= 4`.
pub fn welch_psd(x: &[f64], fs: f64, nfft: usize) -> Spectrum {
    let n_freq = nfft / 2 + 1;
    let f: Vec<f64> = (0..n_freq).map(|i| i as f64 * fs / nfft as f64).collect();

    if x.is_empty() {
        return Spectrum::new(f, vec![0.0; n_freq]);
    }

    let nperseg = MAX_SEGMENT.min(x.len()).min(nfft);
    let noverlap = nperseg / 2;
    let hop = nperseg - noverlap;

    let window = hann_window(nperseg);
    let win_norm: f64 = window.iter().map(|w| w * w).sum();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(nfft);

    let mut accum = vec![0.0; n_freq];
    let mut n_segments = 0usize;
    let mut buf = vec![Complex::new(0.0, 0.0); nfft];

    let mut start = 0usize;
    while start + nperseg <= x.len() {
        let segment = &x[start..start + nperseg];
        let seg_mean: f64 = segment.iter().sum::<f64>() / nperseg as f64;

        for slot in buf.iter_mut() {
            *slot = Complex::new(0.0, 0.0);
        }
        for (i, (&v, &w)) in segment.iter().zip(&window).enumerate() {
            buf[i] = Complex::new((v - seg_mean) * w, 0.0);
        }

        fft.process(&mut buf);

        for (k, acc) in accum.iter_mut().enumerate() {
            let mut p = buf[k].norm_sqr() / (fs * win_norm);
            // One-sided density: double everything except DC and Nyquist.
            if k != 0 && !(nfft % 2 == 0 && k == nfft / 2) {
                p *= 2.0;
            }
            *acc += p;
        }

        n_segments += 1;
        start += hop;
    }

    if n_segments > 1 {
        for acc in accum.iter_mut() {
            *acc /= n_segments as f64;
        }
    }

    Spectrum::new(f, accum)
}

/// Symmetric Hann window of length `n`.
fn hann_window(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    let nm1 = (n - 1) as f64;
    (0..n)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / nm1).cos())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn output_length_is_half_nfft_plus_one() {
        let x = vec![0.0; 1024];
        let spectrum = welch_psd(&x, 2.0, 512);
        assert_eq!(spectrum.len(), 257);
        assert_relative_eq!(spectrum.frequencies()[256], 1.0);
    }

    #[test]
    fn frequency_grid_spacing() {
        let x = vec![0.0; 512];
        let spectrum = welch_psd(&x, 4.0, 256);
        assert_relative_eq!(spectrum.delta_f(), 4.0 / 256.0);
    }

    #[test]
    fn sinusoid_power_is_conserved() {
        // Unit sinusoid has variance 1/2; integral of the PSD recovers it.
        let fs = 2.0;
        let n = 2048;
        let x: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 0.1 * (i as f64 + 1.0) / fs).sin())
            .collect();
        let spectrum = welch_psd(&x, fs, 512);
        let m0: f64 = spectrum.densities().iter().sum::<f64>() * spectrum.delta_f();
        assert_relative_eq!(m0, 0.5, epsilon = 0.02);
    }

    #[test]
    fn peak_lands_on_sinusoid_bin() {
        // 0.125 Hz is bin 32 when fs = 2 and nfft = 512.
        let fs = 2.0;
        let x: Vec<f64> = (0..2048)
            .map(|i| (2.0 * PI * 0.125 * (i as f64 + 1.0) / fs).sin())
            .collect();
        let spectrum = welch_psd(&x, fs, 512);
        let peak = triton_stats::argmax(spectrum.densities()).unwrap();
        assert_eq!(peak, 32);
    }

    #[test]
    fn psd_is_non_negative() {
        let x: Vec<f64> = (0..600).map(|i| ((i * 7 % 13) as f64) - 6.0).collect();
        let spectrum = welch_psd(&x, 10.0, 256);
        assert!(spectrum.densities().iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn hann_endpoints_are_zero() {
        let w = hann_window(8);
        assert_relative_eq!(w[0], 0.0);
        assert_relative_eq!(w[7], 0.0);
        assert_relative_eq!(w[4], hann_window(8)[4]);
    }
}
