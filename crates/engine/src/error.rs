//! Engine error types.

/// Errors that abort an analysis run.
///
/// Failures confined to a single burst do not abort the run; they are
/// reported as diagnostics and the burst's outputs are set to NaN.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration failed validation.
    #[error("invalid engine configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Input length does not match `n_burst * burst_duration * fs`.
    #[error("expected {expected} samples ({n_burst} bursts of {per_burst}), got {actual}")]
    SampleCountMismatch {
        expected: usize,
        actual: usize,
        n_burst: usize,
        per_burst: usize,
    },

    /// The input contains no finite samples to interpolate from.
    #[error("input contains no finite samples")]
    NoFiniteSamples,
}
