//! Result types handed to whatever instantiates components.

use nalgebra::{Vector2, Vector3};

use crate::diag::Diagnostic;

/// A placed component: where it goes and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementPoint {
    pub position: Vector3<f64>,
    /// Unit tangent of the path at `position`.
    pub orientation: Vector2<f64>,
    /// Arc length along the path; also the ordering key.
    pub distance: f64,
}

impl PlacementPoint {
    /// Heading angle of `orientation` in radians, `atan2(y, x)`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.orientation.y.atan2(self.orientation.x)
    }
}

/// Ordered placements for one component class plus everything that was
/// recovered from along the way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placement {
    pub points: Vec<PlacementPoint>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Placement {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Positions only, in order.
    pub fn positions(&self) -> Vec<Vector3<f64>> {
        self.points.iter().map(|p| p.position).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn angle_matches_orientation() {
        let pp = PlacementPoint {
            position: Vector3::zeros(),
            orientation: vector![0.0, 1.0],
            distance: 0.0,
        };
        assert!((pp.angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
