#![allow(clippy::float_cmp)]

use super::*;
use crate::config::SceneConfig;
use crate::surface::MemorySurface;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn layers() -> Layers<MemorySurface> {
    Layers::new(
        MemorySurface::new(),
        MemorySurface::new(),
        MemorySurface::new(),
        MemorySurface::new(),
        25.0,
    )
}

fn sized_layers() -> Layers<MemorySurface> {
    let mut l = layers();
    l.resize(&Viewport::new(200.0, 100.0, 2.0), &ScalePolicy::new(&SceneConfig::default()));
    l
}

fn buffer(points: Vec<Point>) -> StrokeBuffer {
    let mut buf = StrokeBuffer::new();
    for p in points {
        buf.push(p);
    }
    buf
}

fn stroke_points() -> Vec<Point> {
    vec![pt(10.0, 10.0), pt(10.0, 40.0), pt(10.0, 70.0)]
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_applies_per_role_scale() {
    let l = sized_layers();
    assert_eq!(l.surface(LayerRole::Grid).info().scale, 2.0);
    assert_eq!(l.surface(LayerRole::Committed).info().scale, 1.0);
    assert_eq!(l.surface(LayerRole::InProgress).info().scale, 1.0);
    assert_eq!(l.surface(LayerRole::Overlay).info().scale, 1.25);
    for role in LayerRole::ALL {
        assert_eq!(l.surface(role).info().logical.width, 200.0);
        assert_eq!(l.surface(role).info().logical.height, 100.0);
    }
}

#[test]
fn resize_repaints_grid() {
    let l = sized_layers();
    let grid = l.surface(LayerRole::Grid);
    assert_eq!(grid.content().len(), 1);
    assert_eq!(grid.content()[0], render::grid(crate::geom::Size::new(200.0, 100.0), 25.0));
}

#[test]
fn resize_replays_committed_strokes() {
    let mut l = sized_layers();
    l.draw_in_progress(&stroke_points(), 12.5);
    assert!(l.commit(&mut buffer(stroke_points()), 12.5).is_some());

    l.resize(&Viewport::new(300.0, 150.0, 1.0), &ScalePolicy::new(&SceneConfig::default()));
    let committed = l.surface(LayerRole::Committed);
    assert_eq!(committed.content().len(), 1);
    assert_eq!(committed.content()[0], stroke::stroke_draw_list(&stroke_points(), 12.5));
}

// =============================================================
// Detached surfaces
// =============================================================

#[test]
fn draws_before_resize_are_skipped() {
    let mut l = layers();
    l.draw_in_progress(&stroke_points(), 12.5);
    l.draw_grid();
    assert_eq!(l.surface(LayerRole::InProgress).paint_count(), 0);
    assert_eq!(l.surface(LayerRole::Grid).paint_count(), 0);
}

#[test]
fn commit_before_resize_still_records_history() {
    let mut l = layers();
    assert!(l.commit(&mut buffer(stroke_points()), 12.5).is_some());
    assert_eq!(l.history().len(), 1);
    assert!(l.surface(LayerRole::Committed).content().is_empty());
}

// =============================================================
// In-progress
// =============================================================

#[test]
fn in_progress_is_redrawn_from_scratch() {
    let mut l = sized_layers();
    l.draw_in_progress(&stroke_points()[..2], 12.5);
    l.draw_in_progress(&stroke_points(), 12.5);
    let surface = l.surface(LayerRole::InProgress);
    assert_eq!(surface.content().len(), 1);
    assert_eq!(surface.content()[0], stroke::stroke_draw_list(&stroke_points(), 12.5));
}

#[test]
fn single_point_draws_nothing() {
    let mut l = sized_layers();
    l.draw_in_progress(&[pt(1.0, 1.0)], 12.5);
    assert!(l.surface(LayerRole::InProgress).content().is_empty());
}

// =============================================================
// Commit
// =============================================================

#[test]
fn commit_copies_in_progress_verbatim_and_clears_it() {
    let mut l = sized_layers();
    l.draw_in_progress(&stroke_points(), 12.5);
    let before = l.surface(LayerRole::InProgress).content().to_vec();

    let mut buf = buffer(stroke_points());
    let Some(entry) = l.commit(&mut buf, 12.5) else {
        panic!("commit should succeed");
    };
    assert!(buf.is_empty());
    assert_eq!(entry.points, stroke_points());
    assert_eq!(l.surface(LayerRole::Committed).content(), before.as_slice());
    assert!(l.surface(LayerRole::InProgress).content().is_empty());
}

#[test]
fn commits_accumulate() {
    let mut l = sized_layers();
    for offset in [0.0, 50.0] {
        let pts = vec![pt(offset, 0.0), pt(offset, 10.0)];
        l.draw_in_progress(&pts, 5.0);
        l.commit(&mut buffer(pts), 5.0);
    }
    assert_eq!(l.surface(LayerRole::Committed).content().len(), 2);
    assert_eq!(l.history().len(), 2);
}

#[test]
fn degenerate_commit_is_noop_but_clears_in_progress() {
    let mut l = sized_layers();
    let mut single = buffer(vec![pt(1.0, 1.0)]);
    assert!(l.commit(&mut single, 12.5).is_none());
    assert!(single.is_empty());
    assert!(l.surface(LayerRole::Committed).content().is_empty());
    assert!(l.history().is_empty());
    assert_eq!(l.surface(LayerRole::InProgress).clear_count(), 1);
}

#[test]
fn committed_stroke_exports_smoothed_path() {
    let mut l = sized_layers();
    let Some(entry) = l.commit(&mut buffer(stroke_points()), 12.5) else {
        panic!("commit should succeed");
    };
    let exported = entry.export();
    assert_eq!(exported.id, entry.id);
    assert_eq!(exported.width, 25.0);
    assert_eq!(exported.commands.quad_count(), 1);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_empties_strokes_but_keeps_grid() {
    let mut l = sized_layers();
    l.draw_in_progress(&stroke_points(), 12.5);
    l.commit(&mut buffer(stroke_points()), 12.5);
    l.draw_in_progress(&stroke_points(), 12.5);

    l.clear();
    assert!(l.surface(LayerRole::Committed).content().is_empty());
    assert!(l.surface(LayerRole::InProgress).content().is_empty());
    assert!(l.history().is_empty());
    assert_eq!(l.surface(LayerRole::Grid).content().len(), 1);
}

// =============================================================
// Overlay
// =============================================================

#[test]
fn overlay_is_replaced_each_draw() {
    let mut l = sized_layers();
    let view = OverlayView { pointer: pt(5.0, 5.0), brush: pt(5.0, 5.0), brush_radius: 12.5, tether: None };
    l.draw_overlay(&view);
    l.draw_overlay(&view);
    let overlay = l.surface(LayerRole::Overlay);
    assert_eq!(overlay.content().len(), 1);
    assert_eq!(overlay.content()[0], render::overlay(&view));
}
