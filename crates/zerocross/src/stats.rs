//! Bulk wave statistics from a detected wave train.

use crate::detect::WaveTrain;

/// Time-domain wave statistics for one burst.
#[derive(Debug, Clone, Copy)]
pub struct ZerocrossStats {
    hs: f64,
    hz: f64,
    tz: f64,
    ts: f64,
}

impl ZerocrossStats {
    /// Significant wave height, mean of the highest third, in m.
    pub fn hs(&self) -> f64 {
        self.hs
    }

    /// Mean wave height, in m.
    pub fn hz(&self) -> f64 {
        self.hz
    }

    /// Mean wave period, in s.
    pub fn tz(&self) -> f64 {
        self.tz
    }

    /// Significant wave period, in s.
    ///
    /// Mean of the periods of the highest-third waves, so a short but steep
    /// wave contributes its own period here rather than a long one.
    pub fn ts(&self) -> f64 {
        self.ts
    }
}

/// Computes bulk statistics from a wave train.
///
/// The highest third is the first `n / 3 + 1` waves after sorting heights in
/// descending order.
pub fn wave_statistics(train: &WaveTrain) -> ZerocrossStats {
    let heights = train.heights();
    let periods = train.periods();
    let n = heights.len();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| heights[b].total_cmp(&heights[a]));

    let top = n / 3 + 1;
    let hs = order[..top].iter().map(|&i| heights[i]).sum::<f64>() / top as f64;
    let ts = order[..top].iter().map(|&i| periods[i]).sum::<f64>() / top as f64;
    let hz = triton_stats::mean(&heights);
    let tz = triton_stats::mean(&periods);

    ZerocrossStats { hs, hz, tz, ts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::detect_waves;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn stats_of(x: &[f64], fs: f64) -> ZerocrossStats {
        wave_statistics(&detect_waves(x, fs).unwrap())
    }

    #[test]
    fn monochromatic_waves_have_equal_means() {
        let fs = 2.0;
        let x: Vec<f64> = (0..400)
            .map(|i| (2.0 * PI * 0.1 * (i as f64 + 1.0) / fs + 0.3).sin())
            .collect();
        let stats = stats_of(&x, fs);
        assert_relative_eq!(stats.hz(), 2.0, epsilon = 0.05);
        assert_relative_eq!(stats.hs(), 2.0, epsilon = 0.05);
        assert_relative_eq!(stats.tz(), 10.0, epsilon = 0.1);
        assert_relative_eq!(stats.ts(), 10.0, epsilon = 0.1);
    }

    #[test]
    fn significant_height_exceeds_mean_for_mixed_seas() {
        // Amplitude-modulated sinusoid gives a spread of wave heights.
        let fs = 2.0;
        let x: Vec<f64> = (0..2000)
            .map(|i| {
                let t = (i as f64 + 1.0) / fs;
                (1.0 + 0.6 * (2.0 * PI * t / 250.0).sin()) * (2.0 * PI * 0.1 * t + 0.3).sin()
            })
            .collect();
        let stats = stats_of(&x, fs);
        assert!(stats.hs() > stats.hz());
    }

    #[test]
    fn significant_period_follows_highest_waves() {
        // Tall slow waves riding over small fast ones: the highest third is
        // all slow waves, so Ts exceeds Tz.
        let fs = 4.0;
        let x: Vec<f64> = (0..4000)
            .map(|i| {
                let t = (i as f64 + 1.0) / fs;
                2.0 * (2.0 * PI * 0.05 * t + 0.3).sin() + 0.3 * (2.0 * PI * 0.45 * t).sin()
            })
            .collect();
        let stats = stats_of(&x, fs);
        assert!(stats.ts() > stats.tz());
    }
}
