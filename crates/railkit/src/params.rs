//! Numeric placement parameters, one struct per component class.
//!
//! Every struct has a `validated` step that replaces non-positive or
//! non-finite values with the documented defaults and records an
//! `InvalidParameter` diagnostic. Algorithms call it on entry, so callers
//! may pass raw values.

use crate::cfg::{
    DEFAULT_MAX_CLEAR_SPACING, DEFAULT_MOUNT_SPACING, DEFAULT_PICKET_PITCH, DEFAULT_PICKET_WIDTH,
    DEFAULT_POST_SPACING, DEFAULT_POST_WIDTH,
};
use crate::diag::{positive_or, Diagnostic};

/// Post spacing: posts land on every vertex and at most `target_spacing`
/// apart within a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PostParams {
    pub target_spacing: f64,
}

impl Default for PostParams {
    fn default() -> Self {
        Self {
            target_spacing: DEFAULT_POST_SPACING,
        }
    }
}

impl PostParams {
    pub fn validated(self, diags: &mut Vec<Diagnostic>) -> Self {
        Self {
            target_spacing: positive_or(
                "post spacing",
                self.target_spacing,
                DEFAULT_POST_SPACING,
                diags,
            ),
        }
    }
}

/// Pickets between two posts, maximizing clear spacing under a limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClearSpacingParams {
    /// Post footprint along the path. Zero or negative means no footprint:
    /// the bay is the full post-to-post distance.
    pub post_width: f64,
    pub picket_width: f64,
    /// Exclusive upper bound on the gap between adjacent picket faces.
    pub max_clear_spacing: f64,
}

impl Default for ClearSpacingParams {
    fn default() -> Self {
        Self {
            post_width: DEFAULT_POST_WIDTH,
            picket_width: DEFAULT_PICKET_WIDTH,
            max_clear_spacing: DEFAULT_MAX_CLEAR_SPACING,
        }
    }
}

impl ClearSpacingParams {
    pub fn validated(self, diags: &mut Vec<Diagnostic>) -> Self {
        let post_width = if self.post_width.is_nan() || self.post_width == f64::INFINITY {
            positive_or("post width", self.post_width, DEFAULT_POST_WIDTH, diags)
        } else {
            self.post_width.max(0.0)
        };
        Self {
            post_width,
            picket_width: positive_or(
                "picket width",
                self.picket_width,
                DEFAULT_PICKET_WIDTH,
                diags,
            ),
            max_clear_spacing: positive_or(
                "max clear spacing",
                self.max_clear_spacing,
                DEFAULT_MAX_CLEAR_SPACING,
                diags,
            ),
        }
    }
}

/// Pickets marched at a fixed pitch along each path segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitchParams {
    pub pitch: f64,
}

impl Default for PitchParams {
    fn default() -> Self {
        Self {
            pitch: DEFAULT_PICKET_PITCH,
        }
    }
}

impl PitchParams {
    pub fn validated(self, diags: &mut Vec<Diagnostic>) -> Self {
        Self {
            pitch: positive_or("picket pitch", self.pitch, DEFAULT_PICKET_PITCH, diags),
        }
    }
}

/// Mounts marched at a fixed spacing along the whole path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MountParams {
    pub spacing: f64,
}

impl Default for MountParams {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_MOUNT_SPACING,
        }
    }
}

/// All per-class parameters for one railing, as resolved from a design.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlacementParameters {
    pub posts: PostParams,
    pub pickets: ClearSpacingParams,
    pub pitch: PitchParams,
    pub mounts: MountParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_values_fall_back_with_diagnostics() {
        let mut diags = Vec::new();
        let p = PostParams {
            target_spacing: -3.0,
        }
        .validated(&mut diags);
        assert_eq!(p.target_spacing, DEFAULT_POST_SPACING);

        let c = ClearSpacingParams {
            post_width: 2.0,
            picket_width: 0.0,
            max_clear_spacing: f64::NAN,
        }
        .validated(&mut diags);
        assert_eq!(c.picket_width, DEFAULT_PICKET_WIDTH);
        assert_eq!(c.max_clear_spacing, DEFAULT_MAX_CLEAR_SPACING);
        assert_eq!(diags.len(), 3);
    }

    #[test]
    fn negative_post_width_degrades_to_zero_silently() {
        let mut diags = Vec::new();
        let c = ClearSpacingParams {
            post_width: -1.0,
            ..Default::default()
        }
        .validated(&mut diags);
        assert_eq!(c.post_width, 0.0);
        assert!(diags.is_empty());
    }
}
