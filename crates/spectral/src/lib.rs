//! Spectral wave analysis for burst water-level records.
//!
//! Estimates a one-sided power spectral density with the averaged-periodogram
//! method, optionally replaces the high-frequency tail with a JONSWAP or TMA
//! diagnostic tail, applies band cutoffs, and derives the standard moment and
//! peak parameters (Hm0, Tm01, Tm02, Tp, fp).
//!
//! # Example
//!
//! ```
//! use triton_spectral::{wave_spectrum, SpectralConfig};
//!
//! let fs = 2.0;
//! let eta: Vec<f64> = (0..2048)
//!     .map(|i| (2.0 * std::f64::consts::PI * 0.125 * (i as f64 + 1.0) / fs).sin())
//!     .collect();
//! let stats = wave_spectrum(&eta, &SpectralConfig::new(fs)).unwrap();
//! assert!((stats.tp() - 8.0).abs() < 1e-9);
//! ```

mod analysis;
mod config;
mod error;
mod spectrum;
mod welch;

pub use analysis::{wave_spectrum, SpectralWaveStats};
pub use config::{SpectralConfig, TailShape};
pub use error::SpectralError;
pub use spectrum::Spectrum;
pub use welch::welch_psd;
