//! Dispersion solver error types.

/// Errors that can occur while solving the dispersion relation.
#[derive(Debug, thiserror::Error)]
pub enum DispersionError {
    /// Water depth must be finite and strictly positive.
    #[error("water depth must be finite and positive, got {depth}")]
    NonPositiveDepth { depth: f64 },

    /// Angular frequencies must be finite and non-negative.
    #[error("angular frequency at index {index} is invalid: {value}")]
    InvalidFrequency { index: usize, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_depth_display() {
        let err = DispersionError::NonPositiveDepth { depth: -0.5 };
        let msg = format!("{}", err);
        assert!(msg.contains("finite and positive"));
        assert!(msg.contains("-0.5"));
    }

    #[test]
    fn invalid_frequency_display() {
        let err = DispersionError::InvalidFrequency {
            index: 3,
            value: f64::NAN,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("index 3"));
    }
}
