//! Sea/swell separation error types.

use triton_spectral::SpectralError;

/// Errors that can occur during sea/swell separation.
#[derive(Debug, thiserror::Error)]
pub enum SeaSwellError {
    /// Configuration failed validation.
    #[error("invalid sea/swell configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The underlying spectral analysis failed.
    #[error(transparent)]
    Spectral(#[from] SpectralError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_display() {
        let err = SeaSwellError::InvalidConfig {
            reason: "fmax_swell must be positive".to_string(),
        };
        assert!(format!("{}", err).contains("fmax_swell"));
    }

    #[test]
    fn spectral_error_passes_through() {
        let err = SeaSwellError::from(SpectralError::SeriesTooShort { len: 1, min: 2 });
        assert!(format!("{}", err).contains("too short"));
    }
}
