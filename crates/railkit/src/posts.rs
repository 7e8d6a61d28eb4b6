//! Post spacing: per-segment even subdivision under a target spacing.
//!
//! Every path vertex gets a post. Each segment of length `L` is split into
//! `n = max(1, ceil(L / S - ceiling_eps))` equal intervals, so spacing is
//! uniform within a segment and may differ between segments. Segments
//! shorter than `geometry_eps` are skipped. Results are deduplicated and
//! ordered by arc length.

use crate::cfg::Tolerances;
use crate::dedup::{dedup_located, Located};
use crate::diag::{self, Diagnostic};
use crate::orient::orient_all;
use crate::params::PostParams;
use crate::path::Path;
use crate::placement::Placement;

/// Number of equal intervals for a segment of length `len` under `spacing`.
///
/// `ceiling_eps` keeps exact multiples (100 / 50) at 2 rather than 3 when
/// the ratio comes out a hair above the integer.
pub fn interval_count(len: f64, spacing: f64, ceiling_eps: f64) -> usize {
    let n = (len / spacing - ceiling_eps).ceil();
    if n.is_finite() && n >= 1.0 {
        n as usize
    } else {
        1
    }
}

/// Post positions with orientations.
pub fn place_posts(path: &Path, params: PostParams, tol: Tolerances) -> Placement {
    let mut diagnostics = Vec::new();
    let params = params.validated(&mut diagnostics);
    let located = post_positions(path, params.target_spacing, tol, &mut diagnostics);
    Placement {
        points: orient_all(path, &located, tol),
        diagnostics,
    }
}

/// Ordered, deduplicated post positions; `spacing` must already be valid.
pub(crate) fn post_positions(
    path: &Path,
    spacing: f64,
    tol: Tolerances,
    diags: &mut Vec<Diagnostic>,
) -> Vec<Located> {
    let eps = tol.geometry_eps;
    let start = Located::new(path.start(), 0.0);
    if path.is_degenerate(eps) {
        diag::push(
            diags,
            Diagnostic::DegeneratePath {
                vertices: path.vertices().len(),
            },
        );
        return vec![start];
    }

    let mut pts = vec![start];
    for seg in path.segments() {
        let len = seg.length();
        if seg.is_degenerate(eps) {
            tracing::debug!(segment = seg.index, len, "skipping zero-length segment");
            continue;
        }
        let n = interval_count(len, spacing, tol.ceiling_eps);
        let actual = len / n as f64;
        tracing::debug!(
            segment = seg.index,
            len,
            intervals = n,
            spacing = actual,
            "post segment"
        );
        for k in 1..n {
            let offset = k as f64 * actual;
            pts.push(Located::new(
                seg.point_at_offset(offset),
                seg.start_distance + offset,
            ));
        }
        pts.push(Located::new(seg.end, seg.end_distance));
    }
    dedup_located(pts, tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{vector, Vector2};

    fn path(pts: &[[f64; 2]]) -> Path {
        let v: Vec<_> = pts.iter().map(|p| Vector2::new(p[0], p[1])).collect();
        Path::new(&v).unwrap()
    }

    #[test]
    fn straight_hundred_at_fifty() {
        let p = path(&[[0.0, 0.0], [100.0, 0.0]]);
        let out = place_posts(&p, PostParams { target_spacing: 50.0 }, Tolerances::default());
        assert_eq!(
            out.positions(),
            vec![
                vector![0.0, 0.0, 0.0],
                vector![50.0, 0.0, 0.0],
                vector![100.0, 0.0, 0.0]
            ]
        );
        assert!(out.diagnostics.is_empty());
        assert!(out.points.iter().all(|p| p.orientation == vector![1.0, 0.0]));
    }

    #[test]
    fn exact_multiple_does_not_add_interval() {
        assert_eq!(interval_count(100.0, 50.0, 1e-9), 2);
        assert_eq!(interval_count(100.000_000_000_01, 50.0, 1e-9), 2);
        assert_eq!(interval_count(100.1, 50.0, 1e-9), 3);
        assert_eq!(interval_count(10.0, 50.0, 1e-9), 1);
    }

    #[test]
    fn spacing_is_per_segment() {
        // 60 → 2 × 30, 40 → 1 × 40
        let p = path(&[[0.0, 0.0], [60.0, 0.0], [60.0, 40.0]]);
        let out = place_posts(&p, PostParams { target_spacing: 50.0 }, Tolerances::default());
        let d: Vec<f64> = out.points.iter().map(|p| p.distance).collect();
        assert_eq!(d, vec![0.0, 30.0, 60.0, 100.0]);
        assert_eq!(out.points[2].orientation, vector![0.0, 1.0]);
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let p = path(&[[0.0, 0.0], [0.0, 0.0], [30.0, 0.0], [30.0, 0.0]]);
        let out = place_posts(&p, PostParams { target_spacing: 20.0 }, Tolerances::default());
        let xs: Vec<f64> = out.points.iter().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![0.0, 15.0, 30.0]);
    }

    #[test]
    fn single_vertex_is_flagged_and_kept() {
        let p = path(&[[2.0, 3.0]]);
        let out = place_posts(&p, PostParams::default(), Tolerances::default());
        assert_eq!(out.positions(), vec![vector![2.0, 3.0, 0.0]]);
        assert_eq!(out.points[0].orientation, Vector2::x());
        assert_eq!(
            out.diagnostics,
            vec![Diagnostic::DegeneratePath { vertices: 1 }]
        );
    }

    #[test]
    fn sub_eps_segments_make_a_degenerate_path() {
        // each segment is below eps, the sum is not
        let p = path(&[[0.0, 0.0], [6e-7, 0.0], [1.2e-6, 0.0]]);
        let out = place_posts(&p, PostParams::default(), Tolerances::default());
        assert_eq!(out.positions(), vec![vector![0.0, 0.0, 0.0]]);
        assert_eq!(
            out.diagnostics,
            vec![Diagnostic::DegeneratePath { vertices: 3 }]
        );
    }

    #[test]
    fn invalid_spacing_uses_default() {
        let p = path(&[[0.0, 0.0], [100.0, 0.0]]);
        let out = place_posts(&p, PostParams { target_spacing: 0.0 }, Tolerances::default());
        assert_eq!(out.len(), 3);
        assert!(matches!(
            out.diagnostics[0],
            Diagnostic::InvalidParameter { name: "post spacing", .. }
        ));
    }
}
