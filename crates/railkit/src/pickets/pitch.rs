//! Fixed-pitch strategy: march each path segment at a constant pitch.
//!
//! Every vertex gets a picket; inside a segment pickets follow at
//! `pitch, 2·pitch, …` while short of the segment end by more than
//! `geometry_eps`. The last gap of a segment may be shorter than the pitch.
//! No post positions are involved.

use crate::cfg::Tolerances;
use crate::dedup::{dedup_located, Located};
use crate::diag::{self, Diagnostic};
use crate::path::Path;

pub(crate) fn pitch_positions(
    path: &Path,
    pitch: f64,
    tol: Tolerances,
    diags: &mut Vec<Diagnostic>,
) -> Vec<Located> {
    let eps = tol.geometry_eps;
    if path.is_degenerate(eps) {
        diag::push(
            diags,
            Diagnostic::DegeneratePath {
                vertices: path.vertices().len(),
            },
        );
        return vec![Located::new(path.start(), 0.0)];
    }

    let mut pts = Vec::new();
    for seg in path.segments() {
        pts.push(Located::new(seg.start, seg.start_distance));
        let len = seg.length();
        if seg.is_degenerate(eps) {
            continue;
        }
        let mut k = 1usize;
        loop {
            let offset = k as f64 * pitch;
            if offset >= len - eps {
                break;
            }
            pts.push(Located::new(
                seg.point_at_offset(offset),
                seg.start_distance + offset,
            ));
            k += 1;
        }
        tracing::debug!(segment = seg.index, len, pickets = k, "pitch segment");
    }
    pts.push(Located::new(path.end(), path.length()));
    dedup_located(pts, tol)
}
