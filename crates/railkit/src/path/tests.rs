use super::rand::{draw_path_seeded, RandomPathCfg};
use super::*;
use crate::diag::PathError;
use nalgebra::{vector, Vector2, Vector3};

fn l_path() -> Path {
    Path::new(&[vector![0.0, 0.0], vector![10.0, 0.0], vector![10.0, 5.0]]).unwrap()
}

#[test]
fn lengths_and_cumulative() {
    let p = l_path();
    assert_eq!(p.cumulative(), &[0.0, 10.0, 15.0]);
    assert_eq!(p.length(), 15.0);
    assert_eq!(p.start(), vector![0.0, 0.0, 0.0]);
    assert_eq!(p.end(), vector![10.0, 5.0, 0.0]);
    assert!(!p.is_degenerate(1e-6));
}

#[test]
fn rejects_empty_and_non_finite() {
    assert_eq!(Path::new(&[]).unwrap_err(), PathError::Empty);
    let err = Path::new(&[vector![0.0, 0.0], vector![f64::NAN, 1.0]]).unwrap_err();
    assert_eq!(err, PathError::NonFinite { index: 1 });
    let err = Path::from_vertices(vec![Vector3::new(0.0, 0.0, f64::INFINITY)]).unwrap_err();
    assert_eq!(err, PathError::NonFinite { index: 0 });
}

#[test]
fn point_at_distance_clamps() {
    let p = l_path();
    assert_eq!(p.point_at_distance(-5.0), vector![0.0, 0.0, 0.0]);
    assert_eq!(p.point_at_distance(4.0), vector![4.0, 0.0, 0.0]);
    assert_eq!(p.point_at_distance(10.0), vector![10.0, 0.0, 0.0]);
    assert_eq!(p.point_at_distance(12.0), vector![10.0, 2.0, 0.0]);
    assert_eq!(p.point_at_distance(99.0), vector![10.0, 5.0, 0.0]);
    assert_eq!(p.point_at_distance(f64::NAN), vector![0.0, 0.0, 0.0]);
}

#[test]
fn elevation_is_interpolated_but_not_measured() {
    let p = Path::from_vertices(vec![
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(8.0, 0.0, 4.0),
    ])
    .unwrap();
    assert_eq!(p.length(), 8.0);
    assert_eq!(p.point_at_distance(2.0), vector![2.0, 0.0, 1.0]);
    assert_eq!(p.tangent_at_distance(2.0), vector![1.0, 0.0]);
}

#[test]
fn closest_point_projects_and_clamps() {
    let p = l_path();
    let (q, d) = p.closest_point(vector![3.0, -2.0]);
    assert_eq!(q, vector![3.0, 0.0, 0.0]);
    assert_eq!(d, 3.0);
    assert_eq!(p.distance_at_closest_point(vector![12.0, 3.0]), 13.0);
    assert_eq!(p.distance_at_closest_point(vector![-4.0, -4.0]), 0.0);
    assert_eq!(p.distance_at_closest_point(vector![20.0, 20.0]), 15.0);
}

#[test]
fn closest_point_tie_keeps_earliest() {
    // the corner vertex is equidistant from both segments
    let p = l_path();
    let (_, d) = p.closest_point(vector![11.0, -1.0]);
    assert_eq!(d, 10.0);
}

#[test]
fn tangent_follows_outgoing_segment() {
    let p = l_path();
    assert_eq!(p.tangent_at_distance(0.0), vector![1.0, 0.0]);
    assert_eq!(p.tangent_at_distance(10.0), vector![0.0, 1.0]);
    assert_eq!(p.tangent_at_distance(15.0), vector![0.0, 1.0]);
}

#[test]
fn tangent_is_zero_on_degenerate_geometry() {
    let single = Path::new(&[vector![1.0, 1.0]]).unwrap();
    assert_eq!(single.tangent_at_distance(0.0), Vector2::zeros());
    assert!(single.is_degenerate(1e-6));
    assert_eq!(single.point_at_distance(3.0), vector![1.0, 1.0, 0.0]);

    // trailing duplicate: the end belongs to the zero-length last segment
    let dup = Path::new(&[vector![0.0, 0.0], vector![4.0, 0.0], vector![4.0, 0.0]]).unwrap();
    assert_eq!(dup.tangent_at_distance(4.0), Vector2::zeros());
    assert_eq!(dup.tangent_at_distance(2.0), vector![1.0, 0.0]);
}

#[test]
fn degenerate_means_every_segment_below_eps() {
    let tiny = Path::new(&[vector![0.0, 0.0], vector![6e-7, 0.0], vector![1.2e-6, 0.0]]).unwrap();
    assert!(tiny.length() > 1e-6);
    assert!(tiny.is_degenerate(1e-6));
    // one real segment is enough
    let mixed = Path::new(&[vector![0.0, 0.0], vector![6e-7, 0.0], vector![1.0, 0.0]]).unwrap();
    assert!(!mixed.is_degenerate(1e-6));
}

#[test]
fn random_paths_are_reproducible() {
    let cfg = RandomPathCfg::default();
    let a = draw_path_seeded(cfg, 7).unwrap();
    let b = draw_path_seeded(cfg, 7).unwrap();
    assert_eq!(a.vertices(), b.vertices());
    assert_eq!(a.vertices().len(), cfg.vertices);
    let seglens: Vec<f64> = a
        .cumulative()
        .windows(2)
        .map(|w| w[1] - w[0])
        .collect();
    assert!(seglens
        .iter()
        .all(|&l| l >= cfg.min_len - 1e-9 && l <= cfg.max_len + 1e-9));
}
