//! Picket placement and the other infill between posts.
//!
//! Two picket strategies, selected by `PicketStrategy`:
//! - `ClearSpacing`: per bay between consecutive posts, the fewest pickets
//!   that keep the gap between picket faces under a limit (`clear`).
//! - `FixedPitch`: march the path at a constant pitch, independent of posts
//!   (`pitch`).
//!
//! Non-picket infill (decorative centres, horizontal bars, panels) also
//! works bay by bay and lives here so bays are built in one place.

mod clear;
mod decorative;
mod members;
mod pitch;

pub use clear::{solve_count, BayCount, BaySolution};

use nalgebra::Vector2;

use crate::cfg::{Tolerances, DEFAULT_DECORATIVE_WIDTH, DEFAULT_MAX_CLEAR_SPACING};
use crate::diag::{positive_or, Diagnostic};
use crate::orient::orient_all;
use crate::params::{ClearSpacingParams, PitchParams};
use crate::path::Path;
use crate::placement::{Placement, PlacementPoint};

/// Opening between two consecutive posts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bay {
    pub index: usize,
    pub start: PlacementPoint,
    pub end: PlacementPoint,
}

impl Bay {
    /// Arc length between the two post centers.
    #[inline]
    pub fn length(&self) -> f64 {
        self.end.distance - self.start.distance
    }

    #[inline]
    pub fn start_distance(&self) -> f64 {
        self.start.distance
    }

    #[inline]
    pub fn midpoint_distance(&self) -> f64 {
        0.5 * (self.start.distance + self.end.distance)
    }

    /// Planar post-to-post vector, `None` if the posts coincide.
    pub fn chord(&self) -> Option<Vector2<f64>> {
        let c = self.end.position.xy() - self.start.position.xy();
        (c.norm_squared() > 0.0).then_some(c)
    }
}

/// Bays between consecutive posts (ordered by arc length).
pub fn bays(posts: &[PlacementPoint]) -> Vec<Bay> {
    posts
        .windows(2)
        .enumerate()
        .map(|(index, w)| Bay {
            index,
            start: w[0],
            end: w[1],
        })
        .collect()
}

/// Picket strategy and its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PicketStrategy {
    ClearSpacing(ClearSpacingParams),
    FixedPitch(PitchParams),
}

/// Pickets plus, for the clear-spacing strategy, one solution per filled bay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PicketLayout {
    pub placement: Placement,
    pub bays: Vec<BaySolution>,
}

impl PicketLayout {
    /// Indices of bays left empty because no picket count worked.
    pub fn skipped_bays(&self) -> Vec<usize> {
        self.placement
            .diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::UnsolvableBay { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }
}

/// Place pickets along `path`. `posts` bound the bays for the clear-spacing
/// strategy and are ignored by the fixed-pitch strategy.
pub fn place_pickets(
    path: &Path,
    posts: &[PlacementPoint],
    strategy: PicketStrategy,
    tol: Tolerances,
) -> PicketLayout {
    let mut diagnostics = Vec::new();
    let (located, solutions) = match strategy {
        PicketStrategy::ClearSpacing(params) => {
            let params = params.validated(&mut diagnostics);
            clear::clear_spacing_positions(path, &bays(posts), params, tol, &mut diagnostics)
        }
        PicketStrategy::FixedPitch(params) => {
            let params = params.validated(&mut diagnostics);
            let pts = pitch::pitch_positions(path, params.pitch, tol, &mut diagnostics);
            (pts, Vec::new())
        }
    };
    PicketLayout {
        placement: Placement {
            points: orient_all(path, &located, tol),
            diagnostics,
        },
        bays: solutions,
    }
}

/// Decorative infill: flanking pickets and one centre element per bay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecorativeLayout {
    pub pickets: Placement,
    pub elements: Vec<PlacementPoint>,
}

pub fn place_decorative(
    path: &Path,
    posts: &[PlacementPoint],
    element_width: f64,
    max_clear: f64,
    tol: Tolerances,
) -> DecorativeLayout {
    let mut diagnostics = Vec::new();
    let element_width = positive_or(
        "decorative width",
        element_width,
        DEFAULT_DECORATIVE_WIDTH,
        &mut diagnostics,
    );
    let max_clear = positive_or(
        "max clear spacing",
        max_clear,
        DEFAULT_MAX_CLEAR_SPACING,
        &mut diagnostics,
    );
    let (pickets, elements) =
        decorative::decorative_positions(path, &bays(posts), element_width, max_clear, tol);
    DecorativeLayout {
        pickets: Placement {
            points: orient_all(path, &pickets, tol),
            diagnostics,
        },
        elements: orient_all(path, &elements, tol),
    }
}

/// Horizontal bars, `count` per bay, spread over `infill_height`.
pub fn place_horizontal(
    path: &Path,
    posts: &[PlacementPoint],
    count: usize,
    infill_height: f64,
    tol: Tolerances,
) -> Vec<PlacementPoint> {
    members::horizontal_members(path, &bays(posts), count, infill_height, tol)
}

/// One panel (glass, mesh, perforated sheet) per bay.
pub fn place_panels(path: &Path, posts: &[PlacementPoint], tol: Tolerances) -> Vec<PlacementPoint> {
    members::panels(path, &bays(posts), tol)
}
