//! Stroke buffer and midpoint curve smoothing.
//!
//! The buffer collects brush positions for the stroke being drawn. On every
//! accepted move the whole buffer is re-smoothed: each buffered point serves
//! as the control point of a quadratic segment ending at the midpoint between
//! it and its successor, and a straight tail reaches the newest point so the
//! visible line never lags the brush.
//!
//! Re-smoothing is O(n) per move, O(n²) per stroke. That is fine for strokes
//! of interactive length.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use serde::Serialize;
use uuid::Uuid;

use crate::consts::BRUSH_COLOR;
use crate::draw::{DrawList, Paint, Path};
use crate::geom::Point;

/// Points of the stroke currently being drawn, in temporal order.
#[derive(Debug, Clone, Default)]
pub struct StrokeBuffer {
    points: Vec<Point>,
}

impl StrokeBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a brush position. A point identical to the last one is dropped.
    ///
    /// Returns whether the point was appended.
    pub fn push(&mut self, point: Point) -> bool {
        if self.points.last() == Some(&point) {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Empty the buffer, returning what it held.
    pub fn take(&mut self) -> Vec<Point> {
        std::mem::take(&mut self.points)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the buffer holds enough points to draw and commit.
    #[must_use]
    pub fn is_committable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Smooth `points` into a path.
///
/// Fewer than two points yield an empty path. Two points yield a single
/// straight segment.
#[must_use]
pub fn smooth(points: &[Point]) -> Path {
    let mut path = Path::new();
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return path;
    };
    if points.len() < 2 {
        return path;
    }

    path.move_to(first);
    for pair in points[..points.len() - 1].windows(2) {
        let (ctrl, next) = (pair[0], pair[1]);
        path.quad_to(ctrl, ctrl.midpoint(next));
    }
    path.line_to(last);
    path
}

/// Paint for a stroke drawn with a brush of `brush_radius`.
#[must_use]
pub fn stroke_paint(brush_radius: f64) -> Paint {
    Paint::round_stroke(BRUSH_COLOR, brush_radius * 2.0)
}

/// Draw list for the smoothed stroke through `points`.
#[must_use]
pub fn stroke_draw_list(points: &[Point], brush_radius: f64) -> DrawList {
    let mut list = DrawList::new();
    list.push(smooth(points), stroke_paint(brush_radius));
    list
}

/// Serializable description of a committed stroke, handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedStroke {
    pub id: Uuid,
    pub color: String,
    pub width: f64,
    pub commands: Path,
    /// Same geometry as SVG path data.
    pub svg: String,
}

impl ExportedStroke {
    #[must_use]
    pub fn new(id: Uuid, points: &[Point], brush_radius: f64) -> Self {
        let commands = smooth(points);
        let svg = commands.to_svg();
        Self {
            id,
            color: BRUSH_COLOR.to_owned(),
            width: brush_radius * 2.0,
            commands,
            svg,
        }
    }
}
