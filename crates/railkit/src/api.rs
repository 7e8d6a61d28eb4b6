//! Curated API for callers.
//!
//! Prefer these re-exports over deep module paths; the module layout behind
//! them may change.

// Path and its errors
pub use crate::diag::{Diagnostic, DimensionError, PathError};
pub use crate::path::rand::{draw_path, draw_path_seeded, RandomPathCfg};
pub use crate::path::Path;
// Per-class placement
pub use crate::mounts::place_mounts;
pub use crate::pickets::{
    bays, place_decorative, place_horizontal, place_panels, place_pickets, solve_count, Bay,
    BayCount, BaySolution, DecorativeLayout, PicketLayout, PicketStrategy,
};
pub use crate::posts::{interval_count, place_posts};
// Post-processing
pub use crate::dedup::{dedup_and_order, dedup_located, Located};
pub use crate::orient::{default_direction, orient_all, orientation_at_distance, orientation_at_point};
// Parameters, design, pipeline
pub use crate::cfg::Tolerances;
pub use crate::design::{
    Infill, InfillKind, MountType, RailingDesign, ResolvedDesign, StrategyKind,
};
pub use crate::dimension::{Dimension, ProfileKind};
pub use crate::params::{
    ClearSpacingParams, MountParams, PitchParams, PlacementParameters, PostParams,
};
pub use crate::placement::{Placement, PlacementPoint};
pub use crate::railing::{layout_railing, RailingLayout};
