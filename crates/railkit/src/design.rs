//! Railing design: the user-facing description of one railing run.
//!
//! Purpose
//! - Carry sizes as the strings users type (`"2x2"`, `"0.75 round"`) and
//!   numeric settings, deserializable from JSON with every field optional.
//! - Resolve into the typed parameters the placement algorithms take.
//!
//! Policy
//! - Resolution never fails. Unreadable sizes and invalid numbers fall back
//!   to defaults and leave a `Diagnostic` behind.

use serde::{Deserialize, Serialize};

use crate::cfg::{
    DEFAULT_DECORATIVE_WIDTH, DEFAULT_MAX_CLEAR_SPACING, DEFAULT_MOUNT_SPACING,
    DEFAULT_PICKET_PITCH, DEFAULT_PICKET_WIDTH, DEFAULT_POST_SPACING, DEFAULT_POST_WIDTH,
};
use crate::diag::{self, positive_or, Diagnostic};
use crate::dimension::Dimension;
use crate::params::{ClearSpacingParams, MountParams, PitchParams, PlacementParameters, PostParams};
use crate::pickets::PicketStrategy;

pub const DEFAULT_RAIL_HEIGHT: f64 = 36.0;
pub const DEFAULT_TOP_CAP_HEIGHT: f64 = 1.5;
pub const DEFAULT_HORIZONTAL_COUNT: usize = 5;

/// How posts attach to the structure below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountType {
    #[default]
    Surface,
    Fascia,
    #[serde(alias = "Core-Drilled", alias = "core-drilled")]
    CoreDrilled,
    Plate,
    #[serde(alias = "Side-Mounted", alias = "side-mounted")]
    SideMounted,
}

impl MountType {
    /// Post length for a rail of `rail_height` under a cap of `top_cap_height`.
    pub fn post_length(self, rail_height: f64, top_cap_height: f64) -> f64 {
        match self {
            Self::CoreDrilled => rail_height - top_cap_height + 3.5,
            Self::Plate => rail_height - top_cap_height - 0.375,
            Self::SideMounted => rail_height + 2.0,
            Self::Surface | Self::Fascia => rail_height,
        }
    }
}

/// What fills the bays between posts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfillKind {
    #[default]
    Vertical,
    Horizontal,
    Decorative,
    /// Glass, mesh or perforated sheet.
    Panel,
}

/// Vertical picket strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    ClearSpacing,
    FixedPitch,
}

/// Resolved infill with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Infill {
    Vertical(PicketStrategy),
    Horizontal { count: usize },
    Decorative { width: f64 },
    Panel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RailingDesign {
    pub rail_height: f64,
    pub top_cap_height: f64,
    pub post_size: String,
    pub post_spacing: f64,
    pub picket_size: String,
    pub infill: InfillKind,
    pub picket_strategy: StrategyKind,
    pub picket_pitch: f64,
    pub max_clear_spacing: f64,
    pub mount_type: MountType,
    pub mount_spacing: f64,
    /// Centre element width for decorative infill.
    pub decorative_width: Option<f64>,
    /// Bars per bay for horizontal infill.
    pub horizontal_count: usize,
}

impl Default for RailingDesign {
    fn default() -> Self {
        Self {
            rail_height: DEFAULT_RAIL_HEIGHT,
            top_cap_height: DEFAULT_TOP_CAP_HEIGHT,
            post_size: "2x2".to_string(),
            post_spacing: DEFAULT_POST_SPACING,
            picket_size: "0.75x0.75".to_string(),
            infill: InfillKind::default(),
            picket_strategy: StrategyKind::default(),
            picket_pitch: DEFAULT_PICKET_PITCH,
            max_clear_spacing: DEFAULT_MAX_CLEAR_SPACING,
            mount_type: MountType::default(),
            mount_spacing: DEFAULT_MOUNT_SPACING,
            decorative_width: None,
            horizontal_count: DEFAULT_HORIZONTAL_COUNT,
        }
    }
}

/// A design after size parsing and parameter validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedDesign {
    pub params: PlacementParameters,
    pub infill: Infill,
    pub post: Dimension,
    pub picket: Dimension,
    pub rail_height: f64,
    pub top_cap_height: f64,
    pub post_length: f64,
}

impl ResolvedDesign {
    /// Vertical room between the mount surface and the underside of the cap.
    #[inline]
    pub fn infill_height(&self) -> f64 {
        (self.rail_height - self.top_cap_height).max(0.0)
    }
}

impl RailingDesign {
    pub fn resolve(&self, diags: &mut Vec<Diagnostic>) -> ResolvedDesign {
        let post = Dimension::parse_or_default("post size", &self.post_size, DEFAULT_POST_WIDTH, diags);
        let picket = Dimension::parse_or_default(
            "picket size",
            &self.picket_size,
            DEFAULT_PICKET_WIDTH,
            diags,
        );
        let rail_height = positive_or("rail height", self.rail_height, DEFAULT_RAIL_HEIGHT, diags);
        let top_cap_height = if self.top_cap_height.is_finite() && self.top_cap_height >= 0.0 {
            self.top_cap_height
        } else {
            diag::push(
                diags,
                Diagnostic::InvalidParameter {
                    name: "top cap height",
                    value: self.top_cap_height,
                    fallback: DEFAULT_TOP_CAP_HEIGHT,
                },
            );
            DEFAULT_TOP_CAP_HEIGHT
        };

        let params = PlacementParameters {
            posts: PostParams {
                target_spacing: self.post_spacing,
            }
            .validated(diags),
            pickets: ClearSpacingParams {
                post_width: post.in_plane_width(),
                picket_width: picket.in_plane_width(),
                max_clear_spacing: self.max_clear_spacing,
            }
            .validated(diags),
            pitch: PitchParams {
                pitch: self.picket_pitch,
            }
            .validated(diags),
            mounts: MountParams {
                spacing: self.mount_spacing,
            },
        };

        let infill = match self.infill {
            InfillKind::Vertical => Infill::Vertical(match self.picket_strategy {
                StrategyKind::ClearSpacing => PicketStrategy::ClearSpacing(params.pickets),
                StrategyKind::FixedPitch => PicketStrategy::FixedPitch(params.pitch),
            }),
            InfillKind::Horizontal => Infill::Horizontal {
                count: self.horizontal_count,
            },
            InfillKind::Decorative => Infill::Decorative {
                width: positive_or(
                    "decorative width",
                    self.decorative_width.unwrap_or(DEFAULT_DECORATIVE_WIDTH),
                    DEFAULT_DECORATIVE_WIDTH,
                    diags,
                ),
            },
            InfillKind::Panel => Infill::Panel,
        };

        ResolvedDesign {
            params,
            infill,
            post,
            picket,
            rail_height,
            top_cap_height,
            post_length: self.mount_type.post_length(rail_height, top_cap_height),
        }
    }
}
