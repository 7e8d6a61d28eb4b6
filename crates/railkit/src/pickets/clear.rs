//! Clear-spacing strategy: fewest pickets per bay that keep every gap
//! between picket faces strictly under the limit.
//!
//! For a bay with inside distance `D` (post-to-post minus one post width)
//! and picket width `w`, the gap with `n` pickets is
//! `c(n) = (D - n·w) / (n + 1)`. We take the smallest `n >= 1` with
//! `c(n) < max_clear` among the counts that physically fit
//! (`n <= floor(D / w)`), so `c(n) >= 0` always holds. Centers sit at
//! `c + j·(c + w) + w/2` from the first post's edge.

use crate::cfg::Tolerances;
use crate::dedup::Located;
use crate::diag::{self, Diagnostic};
use crate::params::ClearSpacingParams;
use crate::path::Path;

use super::Bay;

/// Picket count for one bay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BayCount {
    /// `count` pickets with `clear_spacing` between faces.
    Solved { count: usize, clear_spacing: f64 },
    /// No picket fits, but the bare opening is already under the limit.
    Open,
    /// No picket count satisfies the limit.
    Unsolvable,
}

#[inline]
fn clear_for(inside: f64, width: f64, n: usize) -> f64 {
    ((inside - n as f64 * width) / (n as f64 + 1.0)).max(0.0)
}

/// Minimal picket count for an opening of `inside` units.
pub fn solve_count(inside: f64, picket_width: f64, max_clear: f64) -> BayCount {
    if !(inside > 0.0) {
        return BayCount::Open;
    }
    let fit = (inside / picket_width).floor();
    if !(fit >= 1.0) {
        return if inside < max_clear {
            BayCount::Open
        } else {
            BayCount::Unsolvable
        };
    }
    let n_max = fit as usize;
    // c(n) < max  <=>  n > (D - max) / (max + w); start there and correct
    // for rounding in both directions.
    let guess = ((inside - max_clear) / (max_clear + picket_width)).floor() + 1.0;
    let mut n = if guess.is_finite() && guess >= 1.0 {
        (guess as usize).min(n_max)
    } else {
        1
    };
    while n > 1 && clear_for(inside, picket_width, n - 1) < max_clear {
        n -= 1;
    }
    while n <= n_max && clear_for(inside, picket_width, n) >= max_clear {
        n += 1;
    }
    if n > n_max {
        return BayCount::Unsolvable;
    }
    BayCount::Solved {
        count: n,
        clear_spacing: clear_for(inside, picket_width, n),
    }
}

/// Solved picket layout for one bay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaySolution {
    /// Index of the bay (posts `index` and `index + 1`).
    pub index: usize,
    /// Arc length of the first post's center.
    pub start_distance: f64,
    /// Post-center to post-center arc length.
    pub length: f64,
    /// `length - post_width`.
    pub inside_distance: f64,
    pub picket_width: f64,
    pub count: usize,
    pub clear_spacing: f64,
}

impl BaySolution {
    #[inline]
    pub fn on_center_spacing(&self) -> f64 {
        self.clear_spacing + self.picket_width
    }

    /// Picket center offsets measured from the first post's edge.
    pub fn center_offsets(&self) -> impl Iterator<Item = f64> + '_ {
        let oc = self.on_center_spacing();
        (0..self.count).map(move |j| self.clear_spacing + j as f64 * oc + self.picket_width / 2.0)
    }
}

/// Pickets for every bay plus the per-bay solutions.
pub(crate) fn clear_spacing_positions(
    path: &Path,
    bays: &[Bay],
    params: ClearSpacingParams,
    tol: Tolerances,
    diags: &mut Vec<Diagnostic>,
) -> (Vec<Located>, Vec<BaySolution>) {
    let mut pts = Vec::new();
    let mut solutions = Vec::with_capacity(bays.len());
    for bay in bays {
        let length = bay.length();
        let inside = length - params.post_width;
        if inside < tol.geometry_eps {
            tracing::debug!(bay = bay.index, length, "posts overlap, bay has no opening");
            continue;
        }
        match solve_count(inside, params.picket_width, params.max_clear_spacing) {
            BayCount::Solved {
                count,
                clear_spacing,
            } => {
                let sol = BaySolution {
                    index: bay.index,
                    start_distance: bay.start_distance(),
                    length,
                    inside_distance: inside,
                    picket_width: params.picket_width,
                    count,
                    clear_spacing,
                };
                tracing::debug!(
                    bay = bay.index,
                    length,
                    inside,
                    count,
                    clear_spacing,
                    on_center = sol.on_center_spacing(),
                    "picket bay"
                );
                let edge = sol.start_distance + params.post_width / 2.0;
                pts.extend(sol.center_offsets().map(|off| {
                    let d = edge + off;
                    Located::new(path.point_at_distance(d), d)
                }));
                solutions.push(sol);
            }
            BayCount::Open => {
                tracing::debug!(bay = bay.index, inside, "opening already under the limit");
            }
            BayCount::Unsolvable => diag::push(
                diags,
                Diagnostic::UnsolvableBay {
                    index: bay.index,
                    inside_distance: inside,
                },
            ),
        }
    }
    (pts, solutions)
}
