//! Scene drawing: builds the draw lists for the grid and overlay layers.
//!
//! Builders here receive read-only values and return a [`DrawList`]; they
//! never touch a surface or mutate engine state. The compositor decides where
//! each list goes.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::catenary;
use crate::consts::{
    BRUSH_CENTER_COLOR, BRUSH_CENTER_DOT_RADIUS, BRUSH_COLOR, GRID_COLOR, GRID_LINE_WIDTH, INTERFACE_COLOR,
    POINTER_DOT_RADIUS, TETHER_DASH, TETHER_WIDTH,
};
use crate::draw::{DrawList, LineCap, LineJoin, Paint, Path};
use crate::geom::{Point, Size};

/// Reference grid lines every `spacing` logical pixels across `size`.
#[must_use]
pub fn grid(size: Size, spacing: f64) -> DrawList {
    let mut list = DrawList::new();
    if spacing <= 0.0 || !size.is_drawable() {
        return list;
    }

    let mut path = Path::new();
    let mut x = spacing;
    while x < size.width {
        path.move_to(Point::new(x, 0.0));
        path.line_to(Point::new(x, size.height));
        x += spacing;
    }
    let mut y = spacing;
    while y < size.height {
        path.move_to(Point::new(0.0, y));
        path.line_to(Point::new(size.width, y));
        y += spacing;
    }

    list.push(path, Paint::stroke(GRID_COLOR, GRID_LINE_WIDTH));
    list
}

/// What the overlay shows for one frame.
#[derive(Debug, Clone, Copy)]
pub struct OverlayView {
    pub pointer: Point,
    pub brush: Point,
    pub brush_radius: f64,
    /// Chain length of the tether, or `None` when the brush is not tethered.
    pub tether: Option<f64>,
}

/// Brush disc, pointer dot, tether and brush centre, bottom to top.
#[must_use]
pub fn overlay(view: &OverlayView) -> DrawList {
    let mut list = DrawList::new();

    list.push(circle(view.brush, view.brush_radius), Paint::fill(BRUSH_COLOR));
    list.push(circle(view.pointer, POINTER_DOT_RADIUS), Paint::fill(INTERFACE_COLOR));

    if let Some(length) = view.tether {
        list.push(
            catenary::tether_path(view.brush, view.pointer, length),
            Paint::Stroke {
                color: INTERFACE_COLOR.to_owned(),
                width: TETHER_WIDTH,
                join: LineJoin::Miter,
                cap: LineCap::Round,
                dash: TETHER_DASH.to_vec(),
            },
        );
    }

    list.push(circle(view.brush, BRUSH_CENTER_DOT_RADIUS), Paint::fill(BRUSH_CENTER_COLOR));
    list
}

fn circle(center: Point, radius: f64) -> Path {
    let mut path = Path::new();
    if radius > 0.0 {
        path.circle(center, radius);
    }
    path
}
