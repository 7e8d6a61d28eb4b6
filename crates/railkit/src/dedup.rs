//! Duplicate suppression and ordering by arc length.
//!
//! Points are sorted by their distance along the path (stable, so equal
//! distances keep input order) and then grouped by coordinates rounded to
//! `Tolerances::dedup_decimals`; the first point of each group survives.
//! Pure and deterministic; running it on its own output is a no-op.

use std::collections::HashSet;

use nalgebra::Vector3;

use crate::cfg::Tolerances;
use crate::path::Path;

/// A candidate position together with its arc length along the path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Located {
    pub position: Vector3<f64>,
    pub distance: f64,
}

impl Located {
    #[inline]
    pub fn new(position: Vector3<f64>, distance: f64) -> Self {
        Self { position, distance }
    }
}

type Key = (i64, i64, i64);

#[inline]
fn key(p: &Vector3<f64>, scale: f64) -> Key {
    // `as` saturates and maps -0.0 and 0.0 to the same key.
    (
        (p.x * scale).round() as i64,
        (p.y * scale).round() as i64,
        (p.z * scale).round() as i64,
    )
}

/// Sort `pts` by distance and drop later points whose rounded coordinates
/// were already seen.
pub fn dedup_located(mut pts: Vec<Located>, tol: Tolerances) -> Vec<Located> {
    pts.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    let scale = tol.dedup_scale();
    let mut seen: HashSet<Key> = HashSet::with_capacity(pts.len());
    pts.retain(|p| seen.insert(key(&p.position, scale)));
    pts
}

/// Attach each point's closest-point arc length on `path`, then dedup and
/// order as in [`dedup_located`].
pub fn dedup_and_order(path: &Path, pts: &[Vector3<f64>], tol: Tolerances) -> Vec<Located> {
    let located = pts
        .iter()
        .map(|p| Located::new(*p, path.distance_at_closest_point(p.xy())))
        .collect();
    dedup_located(located, tol)
}
