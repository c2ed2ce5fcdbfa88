//! Pressure attenuation correction for subsurface wave measurements.
//!
//! A pressure sensor below the surface sees waves attenuated by the factor
//! `Kp = cosh(k z) / cosh(k h)` from linear wave theory. This crate undoes
//! that attenuation two ways: in the frequency domain over the whole burst
//! ([`fft_correction`]), or wave by wave with one factor per detected wave
//! ([`zerocross_correction`]). Both clamp the factor to avoid amplifying
//! high-frequency noise.

mod config;
mod error;
mod fft_correction;
mod zerocross_correction;

pub use config::{AttenuationPolicy, PcorrConfig};
pub use error::PcorrError;
pub use fft_correction::{fft_correction, FftCorrection};
pub use zerocross_correction::zerocross_correction;
