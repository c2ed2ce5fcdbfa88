//! Iterative wavenumber estimation from the linear dispersion relation.
//!
//! Solves `w^2 = g*k*tanh(k*h)` for the wavenumber `k` with the fixed-point
//! scheme of Goda (2010): a deep-water seed followed by exactly three
//! Newton-style updates in the non-dimensional variable `kh`. Three
//! iterations bring the residual to near machine precision across
//! `k0h` from 1e-3 to 100, so no per-frequency root finding is needed.

use crate::error::DispersionError;

/// Gravitational acceleration in m/s^2.
pub const GRAVITY: f64 = 9.81;

/// Number of fixed-point updates. An engineering constant, not tunable.
const N_ITER: usize = 3;

/// Solves for the wavenumber `k` at each angular frequency.
///
/// Frequencies equal to zero map to `k = 0`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DispersionError::NonPositiveDepth`] | `depth <= 0` or non-finite |
/// | [`DispersionError::InvalidFrequency`] | any `omega` negative or NaN |
pub fn wavenumber(omega: &[f64], depth: f64) -> Result<Vec<f64>, DispersionError> {
    if !depth.is_finite() || depth <= 0.0 {
        return Err(DispersionError::NonPositiveDepth { depth });
    }
    for (index, &value) in omega.iter().enumerate() {
        if value.is_nan() || value < 0.0 {
            return Err(DispersionError::InvalidFrequency { index, value });
        }
    }

    Ok(omega.iter().map(|&w| solve_kh(w, depth) / depth).collect())
}

/// Scalar convenience wrapper around [`wavenumber`].
pub fn wavenumber_scalar(omega: f64, depth: f64) -> Result<f64, DispersionError> {
    if !depth.is_finite() || depth <= 0.0 {
        return Err(DispersionError::NonPositiveDepth { depth });
    }
    if omega.is_nan() || omega < 0.0 {
        return Err(DispersionError::InvalidFrequency {
            index: 0,
            value: omega,
        });
    }
    Ok(solve_kh(omega, depth) / depth)
}

/// Residual of the dispersion relation for a candidate wavenumber.
///
/// Zero when `(omega, k)` satisfy `w^2 = g*k*tanh(k*h)` exactly.
pub fn residual(omega: f64, k: f64, depth: f64) -> f64 {
    omega * omega - GRAVITY * k * (k * depth).tanh()
}

fn solve_kh(omega: f64, depth: f64) -> f64 {
    if omega == 0.0 {
        return 0.0;
    }

    let k0 = omega * omega / GRAVITY;
    let k0h = k0 * depth;

    // Deep-water seed above k0h = 1, shallow-water seed below.
    let mut kh = if k0h >= 1.0 { k0h } else { k0h.sqrt() };

    for _ in 0..N_ITER {
        let coth = 1.0 / kh.tanh();
        kh -= (kh - k0h * coth) / (1.0 + k0h * (coth * coth - 1.0));
    }

    kh
}
