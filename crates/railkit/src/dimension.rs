//! Component size strings → typed dimensions.
//!
//! Accepted forms (case-insensitive, surrounding spaces and `"` ignored):
//! - `"2x2"`, `"1.5x48"`, `"2x1 Rect"`, `"4x4x0.25"` → rectangular, width
//!   first; fields past the second are ignored.
//! - `"1 sq"` → square (`depth = width`).
//! - `"0.75 round"` → round, diameter as the in-plane width.
//!
//! Only the first field ever enters spacing math.

use serde::{Deserialize, Serialize};

use crate::diag::{self, Diagnostic, DimensionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    Rect,
    Round,
}

/// Parsed component cross-section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub kind: ProfileKind,
    /// In-plane width (diameter for round profiles).
    pub width: f64,
    /// Orthogonal dimension, if given. Not used for spacing.
    pub depth: Option<f64>,
}

impl Dimension {
    #[inline]
    pub fn square(width: f64) -> Self {
        Self {
            kind: ProfileKind::Rect,
            width,
            depth: Some(width),
        }
    }

    #[inline]
    pub fn round(diameter: f64) -> Self {
        Self {
            kind: ProfileKind::Round,
            width: diameter,
            depth: None,
        }
    }

    /// Width that consumes linear space along the path.
    #[inline]
    pub fn in_plane_width(&self) -> f64 {
        self.width
    }

    pub fn parse(input: &str) -> Result<Self, DimensionError> {
        let lower = input.trim().to_ascii_lowercase();
        if lower.is_empty() {
            return Err(DimensionError::Empty);
        }
        let malformed = || DimensionError::Malformed {
            input: input.to_string(),
        };

        let dim = if lower.contains("round") {
            let rest = lower.replace("round", "");
            let diameter = leading_number(&rest).ok_or_else(malformed)?;
            Self::round(diameter)
        } else {
            let mut fields = lower.split('x');
            let width = fields
                .next()
                .and_then(leading_number)
                .ok_or_else(malformed)?;
            let depth = match fields.next() {
                Some(f) => Some(leading_number(f).ok_or_else(malformed)?),
                None if lower.contains("sq") => Some(width),
                None => None,
            };
            Self {
                kind: ProfileKind::Rect,
                width,
                depth,
            }
        };

        let sizes_ok = dim.width.is_finite()
            && dim.width > 0.0
            && dim.depth.map_or(true, |d| d.is_finite() && d > 0.0);
        if !sizes_ok {
            return Err(DimensionError::NonPositive {
                input: input.to_string(),
            });
        }
        Ok(dim)
    }

    /// Parse `input`, or fall back to a square of `default_width` and record
    /// a `MalformedDimension` diagnostic.
    pub fn parse_or_default(
        name: &'static str,
        input: &str,
        default_width: f64,
        diags: &mut Vec<Diagnostic>,
    ) -> Self {
        match Self::parse(input) {
            Ok(d) => d,
            Err(err) => {
                tracing::debug!(name, input, %err, "dimension parse failed");
                diag::push(
                    diags,
                    Diagnostic::MalformedDimension {
                        name,
                        input: input.to_string(),
                        fallback: default_width,
                    },
                );
                Self::square(default_width)
            }
        }
    }
}

/// First whitespace-separated token of `field`, with inch marks stripped.
fn leading_number(field: &str) -> Option<f64> {
    let tok = field.split_whitespace().next()?;
    tok.trim_matches('"').parse::<f64>().ok()
}
