//! One call from a path and a design to every component placement.
//!
//! Steps: resolve the design, place posts, fill the bays per the infill kind,
//! march mounts. Diagnostics from every step are concatenated in that order.

use crate::cfg::Tolerances;
use crate::design::{Infill, RailingDesign, ResolvedDesign};
use crate::diag::Diagnostic;
use crate::mounts::place_mounts;
use crate::path::Path;
use crate::pickets::{
    place_decorative, place_horizontal, place_panels, place_pickets, BaySolution,
};
use crate::placement::{Placement, PlacementPoint};
use crate::posts::place_posts;

/// Placements for a complete railing run.
#[derive(Clone, Debug, PartialEq)]
pub struct RailingLayout {
    pub design: ResolvedDesign,
    pub posts: Vec<PlacementPoint>,
    /// Pickets, bars, panels or decorative side pickets, by infill kind.
    pub infill: Vec<PlacementPoint>,
    /// Centre elements of decorative bays; empty otherwise.
    pub elements: Vec<PlacementPoint>,
    pub mounts: Vec<PlacementPoint>,
    /// Per-bay solutions of the clear-spacing strategy.
    pub bays: Vec<BaySolution>,
    pub post_length: f64,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn layout_railing(path: &Path, design: &RailingDesign, tol: Tolerances) -> RailingLayout {
    let mut diagnostics = Vec::new();
    let resolved = design.resolve(&mut diagnostics);
    let params = resolved.params;

    let Placement {
        points: posts,
        diagnostics: post_diags,
    } = place_posts(path, params.posts, tol);
    diagnostics.extend(post_diags);

    let mut elements = Vec::new();
    let mut bays = Vec::new();
    let infill = match resolved.infill {
        Infill::Vertical(strategy) => {
            let layout = place_pickets(path, &posts, strategy, tol);
            diagnostics.extend(layout.placement.diagnostics);
            bays = layout.bays;
            layout.placement.points
        }
        Infill::Horizontal { count } => {
            place_horizontal(path, &posts, count, resolved.infill_height(), tol)
        }
        Infill::Decorative { width } => {
            let layout =
                place_decorative(path, &posts, width, params.pickets.max_clear_spacing, tol);
            diagnostics.extend(layout.pickets.diagnostics);
            elements = layout.elements;
            layout.pickets.points
        }
        Infill::Panel => place_panels(path, &posts, tol),
    };

    let mounts = place_mounts(path, params.mounts, tol);
    diagnostics.extend(mounts.diagnostics);

    tracing::debug!(
        posts = posts.len(),
        infill = infill.len(),
        mounts = mounts.points.len(),
        diagnostics = diagnostics.len(),
        "railing laid out"
    );
    RailingLayout {
        design: resolved,
        posts,
        infill,
        elements,
        mounts: mounts.points,
        bays,
        post_length: resolved.post_length,
        diagnostics,
    }
}
