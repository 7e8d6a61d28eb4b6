//! Orientation of placed components: unit path tangents with fallbacks.
//!
//! Fallback order when the tangent at a distance is degenerate
//! (`|t|² < eps²`):
//! 1. the first non-degenerate segment whose distance range (widened by eps)
//!    contains the point;
//! 2. the direction between the nearest distinct vertices around the owning
//!    segment, widening forward first, then backward;
//! 3. `+X`.
//!
//! The result is always a unit vector.

use nalgebra::{Vector2, Vector3};

use crate::cfg::Tolerances;
use crate::dedup::Located;
use crate::path::Path;
use crate::placement::PlacementPoint;

/// Orientation used when the path carries no direction at all.
#[inline]
pub fn default_direction() -> Vector2<f64> {
    Vector2::x()
}

/// Orientation at an arbitrary point: project onto the path first.
pub fn orientation_at_point(path: &Path, p: Vector3<f64>, tol: Tolerances) -> Vector2<f64> {
    orientation_at_distance(path, path.distance_at_closest_point(p.xy()), tol)
}

/// Orientation at arc length `d`.
pub fn orientation_at_distance(path: &Path, d: f64, tol: Tolerances) -> Vector2<f64> {
    let eps = tol.geometry_eps;
    let t = path.tangent_at_distance(d);
    if t.norm_squared() >= eps * eps {
        return t;
    }
    bounding_segment_direction(path, d, eps)
        .or_else(|| distinct_vertex_direction(path, d, eps))
        .unwrap_or_else(default_direction)
}

fn bounding_segment_direction(path: &Path, d: f64, eps: f64) -> Option<Vector2<f64>> {
    path.segments()
        .filter(|s| s.spans(d, eps) && !s.is_degenerate(eps))
        .find_map(|s| s.direction().try_normalize(eps))
}

fn distinct_vertex_direction(path: &Path, d: f64, eps: f64) -> Option<Vector2<f64>> {
    let verts = path.vertices();
    let seg = path.segment_index_at(d)?;
    let (mut lo, mut hi) = (seg, seg + 1);
    loop {
        let dir = verts[hi].xy() - verts[lo].xy();
        if dir.norm_squared() >= eps * eps {
            return dir.try_normalize(0.0);
        }
        if hi + 1 < verts.len() {
            hi += 1;
        } else if lo > 0 {
            lo -= 1;
        } else {
            return None;
        }
    }
}

/// Attach orientations to already ordered, located positions.
pub fn orient_all(path: &Path, pts: &[Located], tol: Tolerances) -> Vec<PlacementPoint> {
    pts.iter()
        .map(|p| PlacementPoint {
            position: p.position,
            orientation: orientation_at_distance(path, p.distance, tol),
            distance: p.distance,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn path(pts: &[[f64; 2]]) -> Path {
        let v: Vec<_> = pts.iter().map(|p| Vector2::new(p[0], p[1])).collect();
        Path::new(&v).unwrap()
    }

    fn close(a: Vector2<f64>, b: Vector2<f64>) -> bool {
        (a - b).norm() < 1e-12
    }

    #[test]
    fn straight_tangent_and_outgoing_at_corner() {
        let p = path(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]]);
        let tol = Tolerances::default();
        assert!(close(orientation_at_distance(&p, 5.0, tol), vector![1.0, 0.0]));
        assert!(close(orientation_at_distance(&p, 10.0, tol), vector![0.0, 1.0]));
        assert!(close(orientation_at_distance(&p, 20.0, tol), vector![0.0, 1.0]));
        assert!(close(orientation_at_distance(&p, 0.0, tol), vector![1.0, 0.0]));
    }

    #[test]
    fn single_vertex_defaults_to_x() {
        let p = path(&[[3.0, 4.0]]);
        let o = orientation_at_point(&p, vector![3.0, 4.0, 0.0], Tolerances::default());
        assert_eq!(o, Vector2::x());
    }

    #[test]
    fn all_vertices_coincide_defaults_to_x() {
        let p = path(&[[1.0, 1.0], [1.0, 1.0], [1.0, 1.0]]);
        let o = orientation_at_distance(&p, 0.0, Tolerances::default());
        assert_eq!(o, Vector2::x());
    }

    #[test]
    fn trailing_duplicate_vertex_uses_previous_segment() {
        // Last segment is zero length; the end point owns it.
        let p = path(&[[0.0, 0.0], [0.0, 5.0], [0.0, 5.0]]);
        let o = orientation_at_distance(&p, 5.0, Tolerances::default());
        assert!(close(o, vector![0.0, 1.0]));
    }

    #[test]
    fn leading_duplicate_vertex_uses_next_segment() {
        let p = path(&[[0.0, 0.0], [0.0, 0.0], [-4.0, 0.0]]);
        let o = orientation_at_point(&p, vector![0.0, 0.0, 0.0], Tolerances::default());
        assert!(close(o, vector![-1.0, 0.0]));
    }

    #[test]
    fn off_path_point_projects_first() {
        let p = path(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]]);
        let o = orientation_at_point(&p, vector![12.0, 6.0, 0.0], Tolerances::default());
        assert!(close(o, vector![0.0, 1.0]));
    }
}
