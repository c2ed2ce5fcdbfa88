//! Time-domain wave analysis by the up-going zero-crossing method.
//!
//! A burst of water levels is detrended, scanned for up-crossings, and split
//! into crest-to-trough waves. Bulk statistics (Hs, Hz, Tz, Ts) follow from
//! the detected wave train.
//!
//! # Example
//!
//! ```
//! use triton_zerocross::{detect_waves, wave_statistics};
//!
//! let fs = 2.0;
//! let eta: Vec<f64> = (0..400)
//!     .map(|i| (2.0 * std::f64::consts::PI * 0.1 * (i as f64 + 1.0) / fs + 0.3).sin())
//!     .collect();
//! let train = detect_waves(&eta, fs).unwrap();
//! let stats = wave_statistics(&train);
//! assert!((stats.hz() - 2.0).abs() < 0.1);
//! ```

mod detect;
mod error;
mod stats;

pub use detect::{detect_waves, WaveEvent, WaveTrain};
pub use error::ZerocrossError;
pub use stats::{wave_statistics, ZerocrossStats};
