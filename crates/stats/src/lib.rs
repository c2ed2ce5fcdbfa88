//! Statistical helper functions for the Triton wave analysis toolkit.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Removes the least-squares straight line from a series.
///
/// Fits `a + b*i` over sample indices and subtracts it, leaving a zero-mean,
/// trend-free series. Series shorter than 2 samples only get mean removal.
pub fn detrend_linear(data: &[f64]) -> Vec<f64> {
    let n = data.len();
    if n < 2 {
        let m = mean(data);
        return data.iter().map(|&x| x - m).collect();
    }

    let nf = n as f64;
    let x_mean = (nf - 1.0) / 2.0;
    let y_mean = data.iter().sum::<f64>() / nf;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, &y) in data.iter().enumerate() {
        let dx = i as f64 - x_mean;
        sxy += dx * (y - y_mean);
        sxx += dx * dx;
    }

    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    let intercept = y_mean - slope * x_mean;

    data.iter()
        .enumerate()
        .map(|(i, &y)| y - (intercept + slope * i as f64))
        .collect()
}

/// Replaces NaN/infinite samples by linear interpolation over the surrounding
/// finite samples.
///
/// Leading/trailing non-finite runs are clamped to the nearest finite value.
/// Returns the number of samples replaced, or `None` if the series contains
/// no finite sample at all (nothing to interpolate from).
pub fn fill_nonfinite(data: &mut [f64]) -> Option<usize> {
    let n = data.len();
    let mut replaced = 0usize;

    let first_finite = data.iter().position(|v| v.is_finite())?;
    let last_finite = data.iter().rposition(|v| v.is_finite())?;

    // Clamp the edges to the nearest finite value.
    for i in 0..first_finite {
        data[i] = data[first_finite];
        replaced += 1;
    }
    for i in last_finite + 1..n {
        data[i] = data[last_finite];
        replaced += 1;
    }

    // Interpolate interior gaps between finite anchors.
    let mut i = first_finite;
    while i < last_finite {
        if data[i + 1].is_finite() {
            i += 1;
            continue;
        }
        // data[i] is finite; find the next finite anchor.
        let mut j = i + 1;
        while !data[j].is_finite() {
            j += 1;
        }
        let span = (j - i) as f64;
        let (lo, hi) = (data[i], data[j]);
        for (step, slot) in (i + 1..j).enumerate() {
            data[slot] = lo + (hi - lo) * (step + 1) as f64 / span;
            replaced += 1;
        }
        i = j;
    }

    Some(replaced)
}

/// Index of the maximum value, ignoring non-finite entries.
///
/// Returns `None` for an empty slice or one with no finite values.
pub fn argmax(data: &[f64]) -> Option<usize> {
    data.iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}

/// Index of the minimum value, ignoring non-finite entries.
pub fn argmin(data: &[f64]) -> Option<usize> {
    data.iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}
