//! Burst-wise ocean wave analysis engine.
//!
//! Takes a water level or pressure time series recorded in bursts, picks one
//! of eight analysis pipelines from the configuration, and produces wave
//! parameters, spectra, and corrected water levels per burst.
//!
//! # Example
//!
//! ```
//! use triton_engine::{analyze, Config};
//!
//! let fs = 2.0;
//! let eta: Vec<f64> = (0..2048)
//!     .map(|i| (2.0 * std::f64::consts::PI * 0.1 * (i as f64 + 1.0) / fs).sin())
//!     .collect();
//! let output = analyze(&eta, &Config::new(fs, 1, 1024)).unwrap();
//! let hm0 = output.record.hm0.unwrap()[0];
//! assert!((hm0 - 2.83).abs() < 0.1);
//! ```

mod config;
mod diagnostics;
mod error;
mod module;
mod record;
mod run;

pub use config::{
    AnalysisMethod, Config, FmaxpcorrMethod, InputType, KpPolicy, OutputType,
};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::EngineError;
pub use module::{select_module, AnalysisModule};
pub use record::WaveRecord;
pub use run::{analyze, RunOutput};

pub use triton_spectral::TailShape;
