//! Self-contained draw commands.
//!
//! A [`DrawList`] bundles geometry and paint for every shape it contains, so a
//! surface never depends on pen state left behind by an earlier call. Surfaces
//! apply a list atomically with [`crate::surface::Surface::paint`].

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use serde::Serialize;

use crate::geom::Point;

/// One path-construction step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Point },
    LineTo { to: Point },
    QuadTo { ctrl: Point, to: Point },
    /// A full circle around `center`.
    Circle { center: Point, radius: f64 },
}

/// An ordered sequence of path commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, to: Point) {
        self.commands.push(PathCommand::MoveTo { to });
    }

    pub fn line_to(&mut self, to: Point) {
        self.commands.push(PathCommand::LineTo { to });
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    pub fn circle(&mut self, center: Point, radius: f64) {
        self.commands.push(PathCommand::Circle { center, radius });
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Count of quadratic segments.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadTo { .. }))
            .count()
    }

    /// Count of straight segments.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo { .. }))
            .count()
    }

    /// Render as SVG path data (`M x y Q cx cy x y L x y ...`).
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for cmd in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            let segment = match *cmd {
                PathCommand::MoveTo { to } => format!("M {} {}", to.x, to.y),
                PathCommand::LineTo { to } => format!("L {} {}", to.x, to.y),
                PathCommand::QuadTo { ctrl, to } => format!("Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y),
                PathCommand::Circle { center, radius } => format!(
                    "M {} {} A {r} {r} 0 1 0 {} {} A {r} {r} 0 1 0 {} {}",
                    center.x + radius,
                    center.y,
                    center.x - radius,
                    center.y,
                    center.x + radius,
                    center.y,
                    r = radius,
                ),
            };
            out.push_str(&segment);
        }
        out
    }
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

impl LineJoin {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
        }
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

impl LineCap {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// How a path is painted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Paint {
    Stroke {
        color: String,
        width: f64,
        join: LineJoin,
        cap: LineCap,
        /// Empty for a solid line.
        dash: Vec<f64>,
    },
    Fill {
        color: String,
    },
}

impl Paint {
    /// Solid stroke with default join and cap.
    #[must_use]
    pub fn stroke(color: &str, width: f64) -> Self {
        Self::Stroke {
            color: color.to_owned(),
            width,
            join: LineJoin::default(),
            cap: LineCap::default(),
            dash: Vec::new(),
        }
    }

    /// Solid stroke with round joins and caps.
    #[must_use]
    pub fn round_stroke(color: &str, width: f64) -> Self {
        Self::Stroke {
            color: color.to_owned(),
            width,
            join: LineJoin::Round,
            cap: LineCap::Round,
            dash: Vec::new(),
        }
    }

    #[must_use]
    pub fn fill(color: &str) -> Self {
        Self::Fill { color: color.to_owned() }
    }
}

/// A path with its paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub path: Path,
    pub paint: Paint,
}

/// Ordered shapes applied to a surface in one go.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    shapes: Vec<Shape>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape. Empty paths are dropped.
    pub fn push(&mut self, path: Path, paint: Paint) {
        if path.is_empty() {
            return;
        }
        self.shapes.push(Shape { path, paint });
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
