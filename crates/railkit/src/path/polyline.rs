use nalgebra::{Vector2, Vector3};

use super::segment::Segment;
use crate::diag::PathError;

/// Open polyline with cached cumulative planar distances.
///
/// Invariants:
/// - At least one vertex, all coordinates finite.
/// - `cum[0] == 0`, `cum` non-decreasing, `cum.last() == length()`.
#[derive(Clone, Debug)]
pub struct Path {
    verts: Vec<Vector3<f64>>,
    cum: Vec<f64>,
}

impl Path {
    /// Build a planar path (elevation 0).
    pub fn new(xy: &[Vector2<f64>]) -> Result<Self, PathError> {
        Self::from_vertices(xy.iter().map(|p| Vector3::new(p.x, p.y, 0.0)).collect())
    }

    /// Build a path from vertices carrying elevation in `z`.
    pub fn from_vertices(verts: Vec<Vector3<f64>>) -> Result<Self, PathError> {
        if verts.is_empty() {
            return Err(PathError::Empty);
        }
        if let Some(index) = verts.iter().position(|v| !v.iter().all(|c| c.is_finite())) {
            return Err(PathError::NonFinite { index });
        }
        let mut cum = Vec::with_capacity(verts.len());
        let mut acc = 0.0;
        cum.push(acc);
        for w in verts.windows(2) {
            acc += (w[1].xy() - w[0].xy()).norm();
            cum.push(acc);
        }
        Ok(Self { verts, cum })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector3<f64>] {
        &self.verts
    }

    /// Cumulative distance at each vertex.
    #[inline]
    pub fn cumulative(&self) -> &[f64] {
        &self.cum
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.cum[self.cum.len() - 1]
    }

    #[inline]
    pub fn start(&self) -> Vector3<f64> {
        self.verts[0]
    }

    #[inline]
    pub fn end(&self) -> Vector3<f64> {
        self.verts[self.verts.len() - 1]
    }

    /// True when every segment is shorter than `eps` (or there are none),
    /// so no segment can carry a placement.
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.segments().all(|s| s.is_degenerate(eps))
    }

    #[inline]
    pub(crate) fn segment_count(&self) -> usize {
        self.verts.len() - 1
    }

    pub(crate) fn segment(&self, index: usize) -> Segment {
        Segment {
            index,
            start: self.verts[index],
            end: self.verts[index + 1],
            start_distance: self.cum[index],
            end_distance: self.cum[index + 1],
        }
    }

    pub(crate) fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.segment_count()).map(move |i| self.segment(i))
    }

    #[inline]
    fn clamp_distance(&self, d: f64) -> f64 {
        if d.is_nan() {
            0.0
        } else {
            d.clamp(0.0, self.length())
        }
    }

    /// Index of the segment that owns distance `d`: the one starting at the
    /// last vertex with `cum <= d`, capped at the final segment.
    pub(crate) fn segment_index_at(&self, d: f64) -> Option<usize> {
        if self.verts.len() < 2 {
            return None;
        }
        let d = self.clamp_distance(d);
        let i = self.cum.partition_point(|&c| c <= d).saturating_sub(1);
        Some(i.min(self.segment_count() - 1))
    }

    /// Point at arc length `d` (clamped into `[0, length]`).
    pub fn point_at_distance(&self, d: f64) -> Vector3<f64> {
        let d = self.clamp_distance(d);
        match self.segment_index_at(d) {
            Some(i) => {
                let seg = self.segment(i);
                seg.point_at_offset(d - seg.start_distance)
            }
            None => self.verts[0],
        }
    }

    /// Closest point on the path to `p` (planar) and its arc length.
    ///
    /// Ties keep the earliest segment, so the returned distance is the
    /// smallest among equally close candidates.
    pub fn closest_point(&self, p: Vector2<f64>) -> (Vector3<f64>, f64) {
        let mut best_d2 = f64::INFINITY;
        let mut best = (self.verts[0], 0.0);
        for seg in self.segments() {
            let a = seg.start.xy();
            let dir = seg.direction();
            let len2 = dir.norm_squared();
            let t = if len2 > 0.0 {
                ((p - a).dot(&dir) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let q = a + dir * t;
            let d2 = (p - q).norm_squared();
            if d2 < best_d2 {
                best_d2 = d2;
                best = (
                    seg.start.lerp(&seg.end, t),
                    seg.start_distance + t * seg.length(),
                );
            }
        }
        best
    }

    /// Arc length of the closest point on the path to `p`.
    #[inline]
    pub fn distance_at_closest_point(&self, p: Vector2<f64>) -> f64 {
        self.closest_point(p).1
    }

    /// Unit direction of the segment owning `d`; zero if that segment is
    /// degenerate or the path has a single vertex.
    pub fn tangent_at_distance(&self, d: f64) -> Vector2<f64> {
        self.segment_index_at(d)
            .and_then(|i| self.segment(i).direction().try_normalize(0.0))
            .unwrap_or_else(Vector2::zeros)
    }
}
