//! Zero-crossing analysis error types.

/// Errors that can occur during zero-crossing wave analysis.
#[derive(Debug, thiserror::Error)]
pub enum ZerocrossError {
    /// Sampling frequency is not usable.
    #[error("sampling frequency must be finite and positive, got {fs}")]
    InvalidSamplingRate { fs: f64 },

    /// Series is too short to hold even one wave.
    #[error("series of {len} samples is too short (minimum {min})")]
    SeriesTooShort { len: usize, min: usize },

    /// No complete crest-to-trough wave was found in the series.
    #[error("no complete wave found in series")]
    NoCompleteWaves,
}
