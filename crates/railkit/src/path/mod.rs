//! Railing paths: open polylines with arc-length queries.
//!
//! Purpose
//! - Hold the ordered vertex list a railing follows, with cached cumulative
//!   planar distances, and answer the three queries every placement
//!   algorithm needs: point at distance, distance at closest point, tangent
//!   at distance.
//!
//! Conventions
//! - Vertices are `Vector3<f64>`; `z` is elevation. It is interpolated along
//!   with `x, y` but never enters distance or tangent math.
//! - Distances are clamped into `[0, length]`; queries never fail.
//! - At an interior vertex the tangent is that of the outgoing segment; at
//!   the end vertex it is that of the last segment.

mod polyline;
pub mod rand;
mod segment;

pub use polyline::Path;

#[cfg(test)]
mod tests;
