use nalgebra::{Vector2, Vector3};

/// Straight run between two consecutive path vertices.
///
/// Invariant: `end_distance - start_distance == length() >= 0`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Segment {
    pub index: usize,
    pub start: Vector3<f64>,
    pub end: Vector3<f64>,
    pub start_distance: f64,
    pub end_distance: f64,
}

impl Segment {
    #[inline]
    pub fn length(&self) -> f64 {
        self.end_distance - self.start_distance
    }

    #[inline]
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.length() < eps
    }

    /// Planar direction `end - start` (not normalized).
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.end.xy() - self.start.xy()
    }

    /// Point `offset` units past `start`, clamped to the segment.
    pub fn point_at_offset(&self, offset: f64) -> Vector3<f64> {
        let len = self.length();
        if len <= 0.0 {
            return self.start;
        }
        let t = (offset / len).clamp(0.0, 1.0);
        self.start.lerp(&self.end, t)
    }

    /// Does `d` fall within this segment's distance range, widened by `eps`?
    #[inline]
    pub fn spans(&self, d: f64, eps: f64) -> bool {
        d >= self.start_distance - eps && d <= self.end_distance + eps
    }
}
