//! # triton-dispersion
//!
//! Wavenumber estimation from the linear wave dispersion relation,
//! shared by the spectral analyzer and both pressure correctors.
//!
//! ## Quick Start
//!
//! ```
//! use triton_dispersion::{wavenumber_scalar, GRAVITY};
//!
//! let omega = 2.0 * std::f64::consts::PI / 8.0; // 8 s wave
//! let k = wavenumber_scalar(omega, 12.0).unwrap();
//! let residual = omega * omega - GRAVITY * k * (k * 12.0).tanh();
//! assert!(residual.abs() < 1e-9);
//! ```

mod error;
mod solver;

pub use error::DispersionError;
pub use solver::{residual, wavenumber, wavenumber_scalar, GRAVITY};
