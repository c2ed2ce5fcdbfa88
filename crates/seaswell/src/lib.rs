//! Sea and swell partitioning of wave spectra.
//!
//! Runs the spectral pipeline on a burst, estimates the separation frequency
//! between locally generated wind sea and remotely generated swell with the
//! spectrum integration method of Hwang (2012), and splits the zero moment
//! and peak statistics at that frequency.

mod config;
mod error;
mod separate;

pub use config::SeaSwellConfig;
pub use error::SeaSwellError;
pub use separate::{sea_swell_analysis, separation_frequency, SeaSwellStats};
