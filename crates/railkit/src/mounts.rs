//! Mount placement: fixed spacing marched along the whole path.
//!
//! Unlike posts, mounts ignore vertices. They start at the path start,
//! follow at `k·spacing` of total arc length while short of the end by more
//! than `geometry_eps`, and close with the end vertex unless the last mount
//! already sits within `MOUNT_END_GAP` of it.
//!
//! An invalid spacing yields the start mount alone. The recorded fallback is
//! `+inf`, i.e. no marching at all.

use crate::cfg::{Tolerances, MOUNT_END_GAP};
use crate::dedup::{dedup_located, Located};
use crate::diag::{self, Diagnostic};
use crate::orient::orient_all;
use crate::params::MountParams;
use crate::path::Path;
use crate::placement::Placement;

pub fn place_mounts(path: &Path, params: MountParams, tol: Tolerances) -> Placement {
    let mut diagnostics = Vec::new();
    let located = mount_positions(path, params.spacing, tol, &mut diagnostics);
    Placement {
        points: orient_all(path, &located, tol),
        diagnostics,
    }
}

fn mount_positions(
    path: &Path,
    spacing: f64,
    tol: Tolerances,
    diags: &mut Vec<Diagnostic>,
) -> Vec<Located> {
    let start = Located::new(path.start(), 0.0);
    if !(spacing.is_finite() && spacing > 0.0) {
        diag::push(
            diags,
            Diagnostic::InvalidParameter {
                name: "mount spacing",
                value: spacing,
                fallback: f64::INFINITY,
            },
        );
        return vec![start];
    }

    let len = path.length();
    let mut pts = vec![start];
    let mut k = 1usize;
    loop {
        let d = k as f64 * spacing;
        if d >= len - tol.geometry_eps {
            break;
        }
        pts.push(Located::new(path.point_at_distance(d), d));
        k += 1;
    }
    let last = pts[pts.len() - 1].distance;
    if len - last > MOUNT_END_GAP {
        pts.push(Located::new(path.end(), len));
    }
    tracing::debug!(len, spacing, mounts = pts.len(), "mounts");
    dedup_located(pts, tol)
}
