//! Seeded random railing paths (random walks with bounded turns).
//!
//! Used by the benches, the property tests, and `railkit demo`. A draw is
//! fully determined by `(cfg, seed)`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Path;
use crate::diag::PathError;

/// Random-walk configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomPathCfg {
    /// Vertex count (at least 1).
    pub vertices: usize,
    /// Segment length range `[min_len, max_len]`.
    pub min_len: f64,
    pub max_len: f64,
    /// Maximum heading change per vertex, radians. Clamped to `[0, π]`.
    pub max_turn: f64,
    /// Probability that a vertex repeats the previous one (zero-length segment).
    pub duplicate_prob: f64,
}

impl Default for RandomPathCfg {
    fn default() -> Self {
        Self {
            vertices: 6,
            min_len: 10.0,
            max_len: 150.0,
            max_turn: std::f64::consts::FRAC_PI_2,
            duplicate_prob: 0.0,
        }
    }
}

/// Draw a path from `cfg` using a fresh RNG seeded with `seed`.
pub fn draw_path_seeded(cfg: RandomPathCfg, seed: u64) -> Result<Path, PathError> {
    let mut rng = StdRng::seed_from_u64(seed);
    draw_path(&mut rng, cfg)
}

/// Draw a random-walk path starting at the origin with a random initial
/// heading. Fails only if the walk overflows to non-finite coordinates.
pub fn draw_path<R: Rng>(rng: &mut R, cfg: RandomPathCfg) -> Result<Path, PathError> {
    let n = cfg.vertices.max(1);
    let lo = cfg.min_len.max(0.0);
    let hi = cfg.max_len.max(lo);
    let turn = cfg.max_turn.clamp(0.0, std::f64::consts::PI);
    let dup = cfg.duplicate_prob.clamp(0.0, 1.0);

    let mut heading = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut cur = Vector2::zeros();
    let mut pts = Vec::with_capacity(n);
    pts.push(cur);
    for _ in 1..n {
        if rng.gen::<f64>() < dup {
            pts.push(cur);
            continue;
        }
        let len = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
        if turn > 0.0 {
            heading += rng.gen_range(-turn..=turn);
        }
        cur += Vector2::new(heading.cos(), heading.sin()) * len;
        pts.push(cur);
    }
    Path::new(&pts)
}
