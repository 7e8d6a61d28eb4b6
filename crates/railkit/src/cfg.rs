//! Tolerances and default component parameters.
//!
//! Policy
//! - Tolerances live in one `Copy` struct so every algorithm sees the same
//!   epsilons; call sites pass `Tolerances::default()` unless a test needs
//!   something tighter.
//! - Defaults are fixed constants. They are what the kernel substitutes when a
//!   caller hands in a non-positive or non-finite value (see `params`).

/// Target on-center post spacing when none (or an invalid one) is supplied.
pub const DEFAULT_POST_SPACING: f64 = 50.0;
/// Fixed picket pitch for the marching strategy.
pub const DEFAULT_PICKET_PITCH: f64 = 6.0;
/// In-plane picket width used when the picket size cannot be read.
pub const DEFAULT_PICKET_WIDTH: f64 = 1.5;
/// In-plane post width used when the post size cannot be read.
pub const DEFAULT_POST_WIDTH: f64 = 2.0;
/// Largest permitted gap between adjacent picket faces (exclusive).
pub const DEFAULT_MAX_CLEAR_SPACING: f64 = 4.0;
/// Width of the centre element in decorative bays.
pub const DEFAULT_DECORATIVE_WIDTH: f64 = 2.0;
/// Mount spacing along the whole path.
pub const DEFAULT_MOUNT_SPACING: f64 = 50.0;
/// Minimum gap between the last marched mount and the path end before the
/// end vertex gets its own mount.
pub(crate) const MOUNT_END_GAP: f64 = 1e-4;

/// Numeric tolerances shared by all placement algorithms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// Segments shorter than this are degenerate and produce no placements.
    /// Also the squared-magnitude floor (as `eps²`) for tangent vectors.
    pub geometry_eps: f64,
    /// Subtracted before `ceil` when counting intervals, so exact multiples
    /// of the target spacing do not gain a spurious extra interval.
    pub ceiling_eps: f64,
    /// Decimal places used to build deduplication keys.
    pub dedup_decimals: u32,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            geometry_eps: 1e-6,
            ceiling_eps: 1e-9,
            dedup_decimals: 6,
        }
    }
}

impl Tolerances {
    /// Scale factor applied to coordinates before rounding to a dedup key.
    #[inline]
    pub(crate) fn dedup_scale(&self) -> f64 {
        10f64.powi(self.dedup_decimals as i32)
    }
}
