//! Non-fatal findings reported alongside the analysis results.

use std::fmt;

use serde::Serialize;

/// A non-fatal finding about the input data or configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Zero-based burst index, or `None` for run-wide findings.
    pub burst: Option<usize>,
    /// What was found.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub(crate) fn run(kind: DiagnosticKind) -> Self {
        Self { burst: None, kind }
    }

    pub(crate) fn burst(burst: usize, kind: DiagnosticKind) -> Self {
        Self {
            burst: Some(burst),
            kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.burst {
            Some(i) => write!(f, "burst {}: {}", i, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// The kinds of findings the engine reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// NaN or infinite samples were replaced by linear interpolation.
    NonFiniteRepaired { count: usize },
    /// The input contains exact zeros, which may be gaps.
    ZeroValuesPresent { count: usize },
    /// The output type was incompatible with the input type and was changed.
    OutputTypeAdjusted { to: String },
    /// The analysis method was incompatible and was changed.
    MethodAdjusted { to: String },
    /// Sea/swell separation was requested but is unavailable and was
    /// disabled.
    SeparationDisabled,
    /// The burst mean depth was zero or negative and was clamped.
    DepthClamped { depth: f64 },
    /// The burst could not be analyzed; its outputs are NaN.
    BurstFailed { message: String },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteRepaired { count } => {
                write!(f, "{count} non-finite sample(s) replaced by interpolation")
            }
            Self::ZeroValuesPresent { count } => {
                write!(f, "input contains {count} zero value(s)")
            }
            Self::OutputTypeAdjusted { to } => write!(f, "output type set to {to}"),
            Self::MethodAdjusted { to } => write!(f, "analysis method set to {to}"),
            Self::SeparationDisabled => {
                write!(f, "sea/swell separation disabled for this output type")
            }
            Self::DepthClamped { depth } => {
                write!(f, "mean depth {depth} clamped to 0.001 m")
            }
            Self::BurstFailed { message } => write!(f, "analysis failed: {message}"),
        }
    }
}
