//! Railing placement kernel.
//!
//! Given a railing path (an open polyline) and component parameters, compute
//! where posts, pickets, infill members and mounts go and which way each one
//! faces. Pure computation: no I/O, no global state, identical inputs give
//! identical outputs.
//!
//! Layout
//! - `path`: polyline with arc-length queries; seeded random paths.
//! - `posts`, `pickets`, `mounts`: one placement algorithm per component class.
//! - `orient`, `dedup`: shared post-processing (tangents, ordering).
//! - `design`, `railing`: user-facing design and the one-call pipeline.
//! - `diag`: hard errors and recoverable diagnostics.
//!
//! API Policy
//! - `api` is the curated surface for callers (the CLI uses it). Module paths
//!   may move between versions.

pub mod api;
pub mod cfg;
pub mod dedup;
pub mod design;
pub mod diag;
pub mod dimension;
pub mod mounts;
pub mod orient;
pub mod params;
pub mod path;
pub mod pickets;
pub mod placement;
pub mod posts;
pub mod railing;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::Tolerances;
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::Tolerances;
    pub use crate::design::{InfillKind, MountType, RailingDesign, StrategyKind};
    pub use crate::diag::Diagnostic;
    pub use crate::path::Path;
    pub use crate::placement::{Placement, PlacementPoint};
    pub use crate::railing::{layout_railing, RailingLayout};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}

#[cfg(test)]
mod tests_props;
