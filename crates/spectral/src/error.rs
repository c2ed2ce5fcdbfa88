//! Spectral analysis error types.

/// Errors that can occur during spectral wave analysis.
#[derive(Debug, thiserror::Error)]
pub enum SpectralError {
    /// Configuration failed validation.
    #[error("invalid spectral configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Series is too short to analyze.
    #[error("series of {len} samples is too short (minimum {min})")]
    SeriesTooShort { len: usize, min: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_display() {
        let err = SpectralError::InvalidConfig {
            reason: "fs must be positive".to_string(),
        };
        assert!(format!("{}", err).contains("fs must be positive"));
    }

    #[test]
    fn too_short_display() {
        let err = SpectralError::SeriesTooShort { len: 1, min: 2 };
        let msg = format!("{}", err);
        assert!(msg.contains("1 samples"));
        assert!(msg.contains("minimum 2"));
    }
}
