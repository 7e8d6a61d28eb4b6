//! Errors and recoverable diagnostics.
//!
//! Only path construction fails hard (`PathError`). Everything that can go
//! wrong while placing components is recorded as a `Diagnostic` and the
//! computation continues with the next segment or with a default value.

use std::fmt;

/// Construction-time failure of a `Path`.
#[derive(Clone, Debug, PartialEq)]
pub enum PathError {
    /// No vertices at all.
    Empty,
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "path has no vertices"),
            PathError::NonFinite { index } => {
                write!(f, "vertex {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Failure to read a component size string such as `"2x2"` or `"0.75 round"`.
#[derive(Clone, Debug, PartialEq)]
pub enum DimensionError {
    Empty,
    Malformed { input: String },
    NonPositive { input: String },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "dimension string is empty"),
            Self::Malformed { input } => write!(f, "cannot read dimension from {input:?}"),
            Self::NonPositive { input } => {
                write!(f, "dimension {input:?} has a non-positive size")
            }
        }
    }
}

impl std::error::Error for DimensionError {}

/// Recoverable condition reported next to placement results.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// The path is a single point (one vertex, or every segment below eps).
    DegeneratePath { vertices: usize },
    /// A numeric parameter was non-positive or non-finite and was replaced.
    InvalidParameter {
        name: &'static str,
        value: f64,
        fallback: f64,
    },
    /// A size string could not be parsed; `fallback` is the width used instead.
    MalformedDimension {
        name: &'static str,
        input: String,
        fallback: f64,
    },
    /// No picket count keeps the clear spacing under the limit in this bay;
    /// the bay was left empty.
    UnsolvableBay { index: usize, inside_distance: f64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegeneratePath { vertices } => {
                write!(f, "path with {vertices} vertices has zero length")
            }
            Self::InvalidParameter {
                name,
                value,
                fallback,
            } => write!(f, "{name} = {value} is invalid; using {fallback}"),
            Self::MalformedDimension {
                name,
                input,
                fallback,
            } => write!(f, "{name} {input:?} is malformed; using width {fallback}"),
            Self::UnsolvableBay {
                index,
                inside_distance,
            } => write!(
                f,
                "bay {index} (inside distance {inside_distance:.4}) cannot satisfy the clear spacing limit; skipped"
            ),
        }
    }
}

/// Record a diagnostic. Only traced at debug level here; reporting it is the
/// caller's job.
pub(crate) fn push(diags: &mut Vec<Diagnostic>, d: Diagnostic) {
    tracing::debug!(diagnostic = %d, "placement diagnostic");
    diags.push(d);
}

/// Replace a non-positive or non-finite parameter with `fallback`.
pub(crate) fn positive_or(
    name: &'static str,
    value: f64,
    fallback: f64,
    diags: &mut Vec<Diagnostic>,
) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        push(
            diags,
            Diagnostic::InvalidParameter {
                name,
                value,
                fallback,
            },
        );
        fallback
    }
}
