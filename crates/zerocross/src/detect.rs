//! Up-going zero-crossing wave detection.
//!
//! The series is linearly detrended, trimmed to the span between its first
//! and last up-crossing, and scanned with a crest/trough state machine that
//! keeps the highest crest and lowest trough between consecutive crossings.

use tracing::debug;

use crate::error::ZerocrossError;

/// One detected wave, crest-to-trough.
#[derive(Debug, Clone, Copy)]
pub struct WaveEvent {
    /// Crest elevation above the detrended mean, in m.
    pub crest: f64,
    /// Trough elevation below the detrended mean, in m (negative).
    pub trough: f64,
    /// Time of the crest sample, in s.
    pub crest_time: f64,
    /// Time of the trough sample, in s.
    pub trough_time: f64,
    /// Wave height `crest - trough`, in m.
    pub height: f64,
    /// Wave period from the bracketing up-crossings, in s. Zero when the
    /// midpoint of the wave falls outside every crossing interval.
    pub period: f64,
}

/// All waves detected in one burst, with the up-crossings that frame them.
#[derive(Debug, Clone)]
pub struct WaveTrain {
    events: Vec<WaveEvent>,
    upcross_times: Vec<f64>,
    upcross_positions: Vec<usize>,
}

impl WaveTrain {
    /// Detected waves in time order.
    pub fn events(&self) -> &[WaveEvent] {
        &self.events
    }

    /// Sub-sample interpolated up-crossing times, in s.
    pub fn upcross_times(&self) -> &[f64] {
        &self.upcross_times
    }

    /// Sample indices of the detected up-crossings.
    pub fn upcross_positions(&self) -> &[usize] {
        &self.upcross_positions
    }

    /// Number of detected waves.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no waves were detected.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Wave heights in time order.
    pub fn heights(&self) -> Vec<f64> {
        self.events.iter().map(|e| e.height).collect()
    }

    /// Wave periods in time order.
    pub fn periods(&self) -> Vec<f64> {
        self.events.iter().map(|e| e.period).collect()
    }
}

/// Detects waves in a burst of water levels sampled at `fs` Hz.
///
/// Sample `i` is assigned the time `(i + 1) / fs`. The series is detrended
/// before detection, so a mean offset or a linear drift does not bias the
/// crossing locations.
pub fn detect_waves(series: &[f64], fs: f64) -> Result<WaveTrain, ZerocrossError> {
    if !fs.is_finite() || fs <= 0.0 {
        return Err(ZerocrossError::InvalidSamplingRate { fs });
    }
    if series.len() < 4 {
        return Err(ZerocrossError::SeriesTooShort {
            len: series.len(),
            min: 4,
        });
    }

    let x = triton_stats::detrend_linear(series);
    let len = x.len();
    let dt = 1.0 / fs;
    let time = |i: usize| (i as f64 + 1.0) * dt;

    let start = first_wave_start(&x).ok_or(ZerocrossError::NoCompleteWaves)?;
    let end = last_wave_end(&x).ok_or(ZerocrossError::NoCompleteWaves)?;

    // Up-crossings between the trimmed boundaries, interpolated to
    // sub-sample precision.
    let mut upcross_times = Vec::new();
    let mut upcross_positions = Vec::new();
    for i in start..end {
        if i == 1 {
            // Series begins exactly on an up-crossing.
            upcross_times.push(dt);
            upcross_positions.push(i);
        }
        if i > 1 && i + 1 < len && x[i] < 0.0 && x[i + 1] > 0.0 {
            let crossing = time(i) - dt * x[i] / (x[i + 1] - x[i]);
            upcross_times.push(crossing);
            upcross_positions.push(i);
        }
    }

    let (&first_pos, &last_pos) = match (upcross_positions.first(), upcross_positions.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ZerocrossError::NoCompleteWaves),
    };

    // Crest/trough state machine: a crest opens a wave, its trough closes it.
    // A larger crest (or deeper trough) before the next crossing replaces the
    // one already held.
    let mut crests: Vec<(usize, f64)> = Vec::new();
    let mut troughs: Vec<(usize, f64)> = Vec::new();
    for i in first_pos..=last_pos {
        if i <= 1 || i + 1 >= len {
            continue;
        }
        if x[i] > x[i - 1] && x[i] > x[i + 1] && x[i] > 0.0 {
            if crests.len() == troughs.len() {
                crests.push((i, x[i]));
            } else if let Some(last) = crests.last_mut() {
                if x[i] > last.1 {
                    *last = (i, x[i]);
                }
            }
        }
        if x[i] < x[i - 1] && x[i] < x[i + 1] && x[i] < 0.0 {
            if troughs.len() + 1 == crests.len() {
                troughs.push((i, x[i]));
            } else if let Some(last) = troughs.last_mut() {
                if x[i] < last.1 {
                    *last = (i, x[i]);
                }
            }
        }
    }

    let n_waves = crests.len().min(troughs.len());
    if n_waves == 0 {
        return Err(ZerocrossError::NoCompleteWaves);
    }
    debug!(
        n_waves,
        n_upcross = upcross_times.len(),
        "zero-crossing detection"
    );

    let mut events = Vec::with_capacity(n_waves);
    for ((ci, crest), (ti, trough)) in crests.into_iter().zip(troughs).take(n_waves) {
        let crest_time = time(ci);
        let trough_time = time(ti);
        let mid = (crest_time + trough_time) / 2.0;
        let mut period = 0.0;
        for pair in upcross_times.windows(2) {
            if pair[0] < mid && pair[1] > mid {
                period = pair[1] - pair[0];
            }
        }
        events.push(WaveEvent {
            crest,
            trough,
            crest_time,
            trough_time,
            height: crest - trough,
            period,
        });
    }

    Ok(WaveTrain {
        events,
        upcross_times,
        upcross_positions,
    })
}

/// Index of the up-crossing that starts the first complete wave.
fn first_wave_start(x: &[f64]) -> Option<usize> {
    if x[0] == 0.0 && x[1] > 0.0 {
        return Some(1);
    }
    if (x[0] == 0.0 && x[1] < 0.0) || x[0] != 0.0 {
        for i in 0..x.len() - 1 {
            if x[i] < 0.0 && x[i + 1] > 0.0 {
                return Some(i);
            }
        }
    }
    None
}

/// Index just past the up-crossing that ends the last complete wave.
fn last_wave_end(x: &[f64]) -> Option<usize> {
    let len = x.len();
    if x[len - 1] == 0.0 && x[len - 2] < 0.0 {
        return Some(len);
    }
    if (x[len - 1] == 0.0 && x[len - 2] > 0.0) || x[len - 1] != 0.0 {
        for i in (1..=len - 2).rev() {
            if x[i] < 0.0 && x[i + 1] > 0.0 {
                return Some(i);
            }
        }
    }
    None
}
