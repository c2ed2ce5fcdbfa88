//! Pressure correction error types.

use triton_dispersion::DispersionError;
use triton_zerocross::ZerocrossError;

/// Errors that can occur during pressure attenuation correction.
#[derive(Debug, thiserror::Error)]
pub enum PcorrError {
    /// Configuration failed validation.
    #[error("invalid pressure correction configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The sensor elevation is at or above the mean water surface.
    #[error("sensor at {heightfrombed} m above bed is not below the {depth} m water surface")]
    SensorAboveSurface { depth: f64, heightfrombed: f64 },

    /// Series is too short to correct.
    #[error("series of {len} samples is too short (minimum {min})")]
    SeriesTooShort { len: usize, min: usize },

    /// Wavenumber solution failed.
    #[error(transparent)]
    Dispersion(#[from] DispersionError),

    /// Wave-by-wave correction found no waves to work with.
    #[error(transparent)]
    Detection(#[from] ZerocrossError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_above_surface_display() {
        let err = PcorrError::SensorAboveSurface {
            depth: 1.0,
            heightfrombed: 1.5,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("1.5 m"));
        assert!(msg.contains("1 m"));
    }

    #[test]
    fn detection_error_passes_through() {
        let err = PcorrError::from(ZerocrossError::NoCompleteWaves);
        assert!(format!("{}", err).contains("no complete wave"));
    }
}
