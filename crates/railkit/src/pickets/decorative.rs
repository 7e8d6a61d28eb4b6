//! Decorative bays: a centred element flanked by evenly spaced pickets.
//!
//! For a bay of length `L` and element width `W`, each side gets
//! `n = ceil((L - W) / (2·max_clear))` pickets at spacing
//! `s = (L - W) / (2·(n + 1))`, measured inward from each post center.

use crate::cfg::Tolerances;
use crate::dedup::{dedup_located, Located};
use crate::path::Path;

use super::Bay;

/// Side pickets and centre elements, both ordered by arc length.
pub(crate) fn decorative_positions(
    path: &Path,
    bays: &[Bay],
    element_width: f64,
    max_clear: f64,
    tol: Tolerances,
) -> (Vec<Located>, Vec<Located>) {
    let mut pickets = Vec::new();
    let mut elements = Vec::new();
    for bay in bays {
        let len = bay.length();
        if len < tol.geometry_eps {
            continue;
        }
        let mid = bay.midpoint_distance();
        elements.push(Located::new(path.point_at_distance(mid), mid));

        let free = len - element_width;
        if free < tol.geometry_eps {
            tracing::debug!(bay = bay.index, len, element_width, "element fills the bay");
            continue;
        }
        let per_side = (free / (2.0 * max_clear)).ceil() as usize;
        let spacing = free / (2.0 * (per_side as f64 + 1.0));
        tracing::debug!(bay = bay.index, len, per_side, spacing, "decorative bay");
        let start = bay.start_distance();
        for j in 1..=per_side {
            let before = start + spacing * j as f64;
            let after = start + len - spacing * j as f64;
            pickets.push(Located::new(path.point_at_distance(before), before));
            pickets.push(Located::new(path.point_at_distance(after), after));
        }
    }
    (dedup_located(pickets, tol), elements)
}
