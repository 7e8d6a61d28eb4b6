//! Per-bay infill members that are not pickets: horizontal bars and panels.
//! Both sit at the bay midpoint and face along the post-to-post chord.

use crate::cfg::Tolerances;
use crate::orient::orientation_at_distance;
use crate::path::Path;
use crate::placement::PlacementPoint;

use super::Bay;

fn at_midpoint(path: &Path, bay: &Bay, lift: f64, tol: Tolerances) -> PlacementPoint {
    let d = bay.midpoint_distance();
    let mut position = path.point_at_distance(d);
    position.z += lift;
    let orientation = bay
        .chord()
        .and_then(|c| c.try_normalize(tol.geometry_eps))
        .unwrap_or_else(|| orientation_at_distance(path, d, tol));
    PlacementPoint {
        position,
        orientation,
        distance: d,
    }
}

/// `count` horizontal bars per bay at heights `h·j / (count + 1)`,
/// `j = 1..=count`, where `h` is the infill height.
pub(crate) fn horizontal_members(
    path: &Path,
    bays: &[Bay],
    count: usize,
    infill_height: f64,
    tol: Tolerances,
) -> Vec<PlacementPoint> {
    let step = infill_height / (count as f64 + 1.0);
    bays.iter()
        .filter(|b| b.length() >= tol.geometry_eps)
        .flat_map(|bay| (1..=count).map(move |j| at_midpoint(path, bay, step * j as f64, tol)))
        .collect()
}

/// One panel per bay.
pub(crate) fn panels(path: &Path, bays: &[Bay], tol: Tolerances) -> Vec<PlacementPoint> {
    bays.iter()
        .filter(|b| b.length() >= tol.geometry_eps)
        .map(|bay| at_midpoint(path, bay, 0.0, tol))
        .collect()
}
