#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_rests_pointer_and_brush_together() {
    let lazy = LazyBrush::new(60.0, true, pt(100.0, 50.0));
    assert_eq!(lazy.pointer(), pt(100.0, 50.0));
    assert_eq!(lazy.brush(), pt(100.0, 50.0));
    assert_eq!(lazy.radius(), 60.0);
    assert!(lazy.is_enabled());
}

#[test]
fn new_clamps_negative_radius() {
    let lazy = LazyBrush::new(-5.0, true, pt(0.0, 0.0));
    assert_eq!(lazy.radius(), 0.0);
}

// =============================================================
// Trailing
// =============================================================

#[test]
fn pointer_beyond_radius_drags_brush_to_exact_radius() {
    let mut lazy = LazyBrush::new(60.0, true, pt(0.0, 0.0));
    assert!(lazy.update(pt(100.0, 0.0), false));
    assert_eq!(lazy.brush(), pt(40.0, 0.0));
    assert!(approx_eq(lazy.brush().distance_to(lazy.pointer()), 60.0));
}

#[test]
fn pointer_inside_radius_leaves_brush_still() {
    let mut lazy = LazyBrush::new(60.0, true, pt(0.0, 0.0));
    assert!(lazy.update(pt(30.0, 20.0), false));
    assert_eq!(lazy.brush(), pt(0.0, 0.0));
    assert_eq!(lazy.pointer(), pt(30.0, 20.0));
    assert!(!lazy.has_brush_moved_since_last_query());
}

#[test]
fn diagonal_pull_trails_along_line_of_travel() {
    let mut lazy = LazyBrush::new(10.0, true, pt(0.0, 0.0));
    lazy.update(pt(30.0, 40.0), false);
    let brush = lazy.brush();
    assert!(approx_eq(brush.x, 24.0));
    assert!(approx_eq(brush.y, 32.0));
}

#[test]
fn distance_never_exceeds_radius_over_a_path() {
    let mut lazy = LazyBrush::new(25.0, true, pt(0.0, 0.0));
    let path = [
        pt(10.0, 5.0),
        pt(80.0, 12.0),
        pt(-40.0, 90.0),
        pt(-41.0, 91.0),
        pt(300.0, -200.0),
        pt(299.0, -180.0),
    ];
    for p in path {
        lazy.update(p, false);
        let d = lazy.brush().distance_to(lazy.pointer());
        assert!(d <= 25.0 + EPSILON, "distance {d} exceeded radius");
    }
}

#[test]
fn identical_pointer_reports_no_change() {
    let mut lazy = LazyBrush::new(60.0, true, pt(0.0, 0.0));
    lazy.update(pt(100.0, 0.0), false);
    lazy.has_brush_moved_since_last_query();
    assert!(!lazy.update(pt(100.0, 0.0), false));
    assert!(!lazy.has_brush_moved_since_last_query());
}

// =============================================================
// Snap (both)
// =============================================================

#[test]
fn both_snaps_pointer_and_brush() {
    let mut lazy = LazyBrush::new(60.0, true, pt(500.0, 500.0));
    assert!(lazy.update(pt(50.0, 50.0), true));
    assert_eq!(lazy.pointer(), pt(50.0, 50.0));
    assert_eq!(lazy.brush(), pt(50.0, 50.0));
}

#[test]
fn both_reports_change_even_when_identical() {
    let mut lazy = LazyBrush::new(60.0, true, pt(5.0, 5.0));
    assert!(lazy.update(pt(5.0, 5.0), true));
    assert!(lazy.has_brush_moved_since_last_query());
}

// =============================================================
// Enable / disable
// =============================================================

#[test]
fn disabled_brush_follows_pointer_exactly() {
    let mut lazy = LazyBrush::new(60.0, true, pt(0.0, 0.0));
    lazy.set_enabled(false);
    lazy.update(pt(12.0, 7.0), false);
    assert_eq!(lazy.brush(), lazy.pointer());
    lazy.update(pt(13.5, -2.0), false);
    assert_eq!(lazy.brush(), pt(13.5, -2.0));
}

#[test]
fn reenabling_resumes_from_current_brush_without_jump() {
    let mut lazy = LazyBrush::new(60.0, true, pt(0.0, 0.0));
    lazy.set_enabled(false);
    lazy.update(pt(200.0, 0.0), false);
    lazy.set_enabled(true);
    assert_eq!(lazy.brush(), pt(200.0, 0.0));

    lazy.update(pt(230.0, 0.0), false);
    assert_eq!(lazy.brush(), pt(200.0, 0.0));
    lazy.update(pt(300.0, 0.0), false);
    assert_eq!(lazy.brush(), pt(240.0, 0.0));
}

#[test]
fn disabling_then_repeating_position_snaps_brush() {
    let mut lazy = LazyBrush::new(60.0, true, pt(0.0, 0.0));
    lazy.update(pt(100.0, 0.0), false);
    assert_eq!(lazy.brush(), pt(40.0, 0.0));
    lazy.has_brush_moved_since_last_query();

    lazy.set_enabled(false);
    assert!(!lazy.update(pt(100.0, 0.0), false));
    assert_eq!(lazy.brush(), pt(100.0, 0.0));
    assert_eq!(lazy.brush(), lazy.pointer());
    assert!(lazy.has_brush_moved_since_last_query());
}

#[test]
fn zero_radius_behaves_like_disabled() {
    let mut lazy = LazyBrush::new(0.0, true, pt(10.0, 10.0));
    lazy.update(pt(10.0, 40.0), false);
    assert_eq!(lazy.brush(), pt(10.0, 40.0));
}

// =============================================================
// Radius
// =============================================================

#[test]
fn set_radius_does_not_reposition() {
    let mut lazy = LazyBrush::new(60.0, true, pt(0.0, 0.0));
    lazy.update(pt(50.0, 0.0), false);
    lazy.set_radius(10.0);
    assert_eq!(lazy.brush(), pt(0.0, 0.0));
    assert_eq!(lazy.radius(), 10.0);

    lazy.update(pt(51.0, 0.0), false);
    assert_eq!(lazy.brush(), pt(41.0, 0.0));
}

#[test]
fn shrinking_radius_then_repeating_position_clamps_brush() {
    let mut lazy = LazyBrush::new(60.0, true, pt(0.0, 0.0));
    lazy.update(pt(100.0, 0.0), false);
    lazy.has_brush_moved_since_last_query();

    lazy.set_radius(10.0);
    assert!(!lazy.update(pt(100.0, 0.0), false));
    assert_eq!(lazy.brush(), pt(90.0, 0.0));
    assert!(approx_eq(lazy.brush().distance_to(lazy.pointer()), 10.0));
    assert!(lazy.has_brush_moved_since_last_query());
}

// =============================================================
// Moved query
// =============================================================

#[test]
fn moved_flag_accumulates_until_queried() {
    let mut lazy = LazyBrush::new(10.0, true, pt(0.0, 0.0));
    lazy.update(pt(50.0, 0.0), false);
    lazy.update(pt(45.0, 0.0), false);
    assert!(lazy.has_brush_moved_since_last_query());
    assert!(!lazy.has_brush_moved_since_last_query());
}
