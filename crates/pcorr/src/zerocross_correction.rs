//! Wave-by-wave pressure attenuation correction.
//!
//! Each detected wave gets a single response factor from its own period, and
//! every sample between its bracketing up-crossings is divided by it. Samples
//! before the first and after the last up-crossing carry no period
//! information and stay unchanged.

use std::f64::consts::PI;

use tracing::debug;
use triton_dispersion::wavenumber_scalar;
use triton_zerocross::detect_waves;

use crate::config::PcorrConfig;
use crate::error::PcorrError;

/// Hard floor on the response factor, limiting amplification to about six.
const KP_FLOOR: f64 = 0.15;

/// Corrects a burst of pressure head for depth attenuation wave by wave.
///
/// `series` is the pressure head in m of water column, `depth` the burst mean
/// water depth. Returns the corrected, detrended surface elevations. Waves
/// whose period could not be determined are left uncorrected.
pub fn zerocross_correction(
    series: &[f64],
    depth: f64,
    config: &PcorrConfig,
) -> Result<Vec<f64>, PcorrError> {
    config.validate(depth)?;

    let hb = config.heightfrombed();
    let x = triton_stats::detrend_linear(series);
    let train = detect_waves(&x, config.fs())?;

    let kmax_l = PI / (depth - hb);
    let kp_min = (kmax_l * hb).cosh() / (kmax_l * depth).cosh();

    let positions = train.upcross_positions();
    let mut eta = x.clone();
    let mut skipped = 0usize;
    for (i, event) in train.events().iter().enumerate() {
        if i + 1 >= positions.len() {
            break;
        }
        if event.period <= 0.0 {
            skipped += 1;
            continue;
        }
        let omega = 2.0 * PI / event.period;
        let k = wavenumber_scalar(omega, depth)?;
        let kp = ((k * hb).cosh() / (k * depth).cosh())
            .max(KP_FLOOR)
            .max(kp_min);
        for j in positions[i]..=positions[i + 1] {
            eta[j] = x[j] / kp;
        }
    }
    if skipped > 0 {
        debug!(skipped, "waves without a period left uncorrected");
    }

    Ok(eta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use triton_zerocross::wave_statistics;

    const FS: f64 = 2.0;
    const DEPTH: f64 = 5.0;
    const HEIGHTFROMBED: f64 = 0.5;

    fn config() -> PcorrConfig {
        PcorrConfig::new(FS).with_heightfrombed(HEIGHTFROMBED)
    }

    /// 0.1 Hz surface waves and the attenuated head a bed sensor would see.
    fn surface_and_pressure(n: usize) -> (Vec<f64>, Vec<f64>) {
        let k = wavenumber_scalar(2.0 * PI * 0.1, DEPTH).unwrap();
        let kp = (k * HEIGHTFROMBED).cosh() / (k * DEPTH).cosh();
        let eta: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 0.1 * (i as f64 + 1.0) / FS + 0.3).sin())
            .collect();
        let head = eta.iter().map(|&v| v * kp).collect();
        (eta, head)
    }

    #[test]
    fn corrected_heights_match_surface_heights() {
        let (_, head) = surface_and_pressure(800);
        let eta = zerocross_correction(&head, DEPTH, &config()).unwrap();
        let stats = wave_statistics(&detect_waves(&eta, FS).unwrap());
        assert_relative_eq!(stats.hz(), 2.0, epsilon = 0.05);
        assert_relative_eq!(stats.tz(), 10.0, epsilon = 0.1);
    }

    #[test]
    fn samples_outside_first_and_last_crossing_are_unchanged() {
        let (_, head) = surface_and_pressure(800);
        let eta = zerocross_correction(&head, DEPTH, &config()).unwrap();
        let x = triton_stats::detrend_linear(&head);
        let train = detect_waves(&x, FS).unwrap();
        let first = train.upcross_positions()[0];
        let last = *train.upcross_positions().last().unwrap();
        for j in 0..first {
            assert_relative_eq!(eta[j], x[j]);
        }
        for j in last + 1..x.len() {
            assert_relative_eq!(eta[j], x[j]);
        }
    }

    #[test]
    fn correction_amplifies_in_band_samples() {
        let (_, head) = surface_and_pressure(800);
        let eta = zerocross_correction(&head, DEPTH, &config()).unwrap();
        let x = triton_stats::detrend_linear(&head);
        let train = detect_waves(&x, FS).unwrap();
        let mid = train.upcross_positions()[1] + 5;
        assert!(eta[mid].abs() > x[mid].abs());
    }

    #[test]
    fn flat_series_reports_no_waves() {
        let head = vec![0.0; 128];
        assert!(matches!(
            zerocross_correction(&head, DEPTH, &config()),
            Err(PcorrError::Detection(_))
        ));
    }
}
