//! Geometry properties: rotation, perspective division, grid mapping.

use tui_wireframe::core::math::{distance, rotate};
use tui_wireframe::core::projection::{fix_aspect_ratio, map_to_grid, project_perspective};
use tui_wireframe::types::{GridCoord, GridSegment, Point2, Point3};

const EPS: f64 = 1e-9;

/// Deterministic sample points in `[-range, range)^3`.
fn samples(seed: u32, count: usize, range: f64) -> Vec<Point3> {
    let mut state = seed.max(1);
    let mut next = || {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        (f64::from(state) / f64::from(u32::MAX) * 2.0 - 1.0) * range
    };
    (0..count)
        .map(|_| Point3::new(next(), next(), next()))
        .collect()
}

fn axes() -> Vec<Point3> {
    let mut axes = vec![
        Point3::new(0.0, 0.4, 1.0),
        Point3::new(0.0, 1.0, 1.0),
        Point3::new(0.0, 1.0, 3.0),
        Point3::new(1.0, 0.0, 0.0),
    ];
    axes.extend(samples(7, 8, 2.0).into_iter().filter(|a| distance(*a, Point3::ZERO) > 0.1));
    axes
}

const ANGLES: [f64; 7] = [-270.0, -45.0, 1.0, 6.0, 90.0, 179.0, 1234.5];

// ============== Rotation ==============

#[test]
fn rotation_preserves_distance_to_pivot() {
    let pivot = Point3::new(0.5, 0.5, 3.0);
    for p in samples(1, 32, 10.0) {
        for axis in axes() {
            for angle in ANGLES {
                let r = rotate(p, angle, axis, pivot);
                let before = distance(p, pivot);
                let after = distance(r, pivot);
                assert!((before - after).abs() < EPS * before.max(1.0));
            }
        }
    }
}

#[test]
fn rotation_by_zero_is_identity() {
    let pivot = Point3::new(0.0, 0.0, 4.0);
    for p in samples(2, 32, 10.0) {
        for axis in axes() {
            assert!(distance(rotate(p, 0.0, axis, pivot), p) < EPS);
        }
    }
}

#[test]
fn rotations_about_same_axis_compose() {
    let pivot = Point3::new(0.0, 0.0, 4.0);
    for p in samples(3, 16, 5.0) {
        for axis in axes() {
            for (a, b) in [(30.0, 60.0), (6.0, 354.0), (-120.0, 45.5)] {
                let stepwise = rotate(rotate(p, a, axis, pivot), b, axis, pivot);
                let direct = rotate(p, a + b, axis, pivot);
                assert!(distance(stepwise, direct) < 1e-8);
            }
        }
    }
}

#[test]
fn full_turn_returns_to_start() {
    let pivot = Point3::new(0.0, 0.0, 4.0);
    let p = Point3::new(1.0, -1.0, 3.0);
    let r = rotate(p, 360.0, Point3::new(0.0, 0.4, 1.0), pivot);
    assert!(distance(r, p) < EPS);
}

// ============== Projection ==============

#[test]
fn zero_depth_always_projects_to_origin() {
    for p in samples(4, 16, 100.0) {
        let flat = Point3::new(p.x, p.y, 0.0);
        assert_eq!(project_perspective(flat), Point2::ORIGIN);
    }
}

#[test]
fn grid_mapping_corners() {
    for (w, h) in [(80, 24), (79, 24), (120, 40), (10, 10)] {
        assert_eq!(map_to_grid(Point2::new(-1.0, -1.0), w, h), GridCoord::new(0, 0));
        let far = map_to_grid(Point2::new(1.0, 1.0), w, h);
        assert_eq!(far, GridCoord::new(i32::from(w) / 2, i32::from(h)));
    }
}

#[test]
fn aspect_fix_noop_on_square_grids() {
    let seg = GridSegment::new(GridCoord::new(-4, 9), GridCoord::new(17, 3));
    for side in [1, 2, 24, 80, 500] {
        assert_eq!(fix_aspect_ratio(seg, side, side), seg);
    }
}
