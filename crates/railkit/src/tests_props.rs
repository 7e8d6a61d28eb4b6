//! Property tests over seeded random paths.

use nalgebra::{Vector2, Vector3};
use proptest::prelude::*;

use crate::cfg::Tolerances;
use crate::dedup::{dedup_and_order, dedup_located};
use crate::design::{InfillKind, RailingDesign};
use crate::orient::orientation_at_distance;
use crate::params::PostParams;
use crate::path::rand::{draw_path_seeded, RandomPathCfg};
use crate::path::Path;
use crate::pickets::{solve_count, BayCount};
use crate::posts::place_posts;
use crate::railing::layout_railing;

fn random_path(seed: u64, vertices: usize, duplicate_prob: f64) -> Path {
    let cfg = RandomPathCfg {
        vertices,
        duplicate_prob,
        ..Default::default()
    };
    draw_path_seeded(cfg, seed).unwrap()
}

fn close(a: Vector3<f64>, b: Vector3<f64>) -> bool {
    (a - b).norm() < 1e-6
}

fn clear(inside: f64, w: f64, n: usize) -> f64 {
    (inside - n as f64 * w) / (n as f64 + 1.0)
}

proptest! {
    #[test]
    fn post_gaps_stay_under_target(
        seed in any::<u64>(),
        vertices in 2usize..8,
        dup in 0.0f64..0.4,
        spacing in 1.0f64..80.0,
    ) {
        let p = random_path(seed, vertices, dup);
        prop_assume!(p.length() > 1e-3);
        let out = place_posts(&p, PostParams { target_spacing: spacing }, Tolerances::default());
        prop_assert!(out.diagnostics.is_empty());
        let pts = &out.points;
        prop_assert!(close(pts[0].position, p.start()));
        prop_assert!(close(pts[pts.len() - 1].position, p.end()));
        for w in pts.windows(2) {
            let gap = w[1].distance - w[0].distance;
            prop_assert!(gap >= 0.0);
            prop_assert!(gap <= spacing + 1e-5, "gap {} > {}", gap, spacing);
        }
    }

    #[test]
    fn picket_count_is_minimal_under_the_limit(
        inside in 0.1f64..200.0,
        width in 0.1f64..3.0,
        max_clear in 0.5f64..8.0,
    ) {
        let fit = (inside / width).floor() as usize;
        match solve_count(inside, width, max_clear) {
            BayCount::Solved { count, clear_spacing } => {
                prop_assert!(count >= 1 && count <= fit);
                prop_assert!(clear_spacing < max_clear);
                prop_assert!(clear_spacing >= 0.0);
                if count > 1 {
                    prop_assert!(clear(inside, width, count - 1) >= max_clear);
                }
            }
            BayCount::Unsolvable => {
                for n in 1..=fit {
                    prop_assert!(clear(inside, width, n) >= max_clear);
                }
                prop_assert!(fit > 0 || inside >= max_clear);
            }
            BayCount::Open => {
                prop_assert_eq!(fit, 0);
                prop_assert!(inside < max_clear);
            }
        }
    }

    #[test]
    fn layout_is_deterministic(
        seed in any::<u64>(),
        vertices in 1usize..7,
        dup in 0.0f64..0.3,
        kind in 0usize..4,
    ) {
        let p = random_path(seed, vertices, dup);
        let design = RailingDesign {
            infill: [
                InfillKind::Vertical,
                InfillKind::Horizontal,
                InfillKind::Decorative,
                InfillKind::Panel,
            ][kind],
            ..Default::default()
        };
        let a = layout_railing(&p, &design, Tolerances::default());
        let b = layout_railing(&p, &design, Tolerances::default());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn dedup_is_idempotent(
        seed in any::<u64>(),
        ds in prop::collection::vec(-5.0f64..400.0, 0..40),
        repeat in 0usize..5,
    ) {
        let p = random_path(seed, 5, 0.2);
        let mut raw: Vec<Vector3<f64>> = ds.iter().map(|&d| p.point_at_distance(d)).collect();
        let copies: Vec<_> = raw.iter().take(repeat).copied().collect();
        raw.extend(copies);
        let tol = Tolerances::default();
        let once = dedup_and_order(&p, &raw, tol);
        let twice = dedup_located(once.clone(), tol);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn orientation_is_never_zero(
        seed in any::<u64>(),
        vertices in 1usize..8,
        dup in 0.0f64..0.8,
        t in -0.1f64..1.1,
    ) {
        let p = random_path(seed, vertices, dup);
        let d = t * p.length();
        let o = orientation_at_distance(&p, d, Tolerances::default());
        prop_assert!((o.norm() - 1.0).abs() < 1e-9, "{:?}", o);
    }

    #[test]
    fn single_vertex_gives_one_post(
        x in -1e3f64..1e3,
        y in -1e3f64..1e3,
        spacing in -100.0f64..100.0,
    ) {
        let p = Path::new(&[Vector2::new(x, y)]).unwrap();
        let out = place_posts(&p, PostParams { target_spacing: spacing }, Tolerances::default());
        prop_assert_eq!(out.points.len(), 1);
        prop_assert_eq!(out.points[0].position, Vector3::new(x, y, 0.0));
        prop_assert_eq!(out.points[0].orientation, Vector2::x());
    }
}
