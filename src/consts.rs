//! Shared constants for the lazy canvas crate.

// ── Brush ───────────────────────────────────────────────────────

/// Default tether radius between pointer and brush, in logical pixels.
pub const LAZY_RADIUS: f64 = 60.0;

/// Default brush radius; strokes are drawn at twice this width.
pub const BRUSH_RADIUS: f64 = 12.5;

/// Stroke and brush-disc colour.
pub const BRUSH_COLOR: &str = "#f2530b";

// ── Overlay ─────────────────────────────────────────────────────

/// Radius of the dot marking the raw pointer position.
pub const POINTER_DOT_RADIUS: f64 = 4.0;

/// Radius of the dot marking the brush centre.
pub const BRUSH_CENTER_DOT_RADIUS: f64 = 2.0;

/// Pointer dot and tether colour.
pub const INTERFACE_COLOR: &str = "#34312f";

/// Brush centre dot colour.
pub const BRUSH_CENTER_COLOR: &str = "#222222";

/// Tether line width.
pub const TETHER_WIDTH: f64 = 2.0;

/// Tether dash pattern (on, off).
pub const TETHER_DASH: [f64; 2] = [2.0, 4.0];

/// Number of straight pieces used to approximate the tether catenary.
pub const CATENARY_SEGMENTS: usize = 50;

// ── Grid ────────────────────────────────────────────────────────

/// Grid line spacing in logical pixels.
pub const GRID_SIZE: f64 = 25.0;

/// Grid line colour.
pub const GRID_COLOR: &str = "rgba(150,150,150,0.17)";

/// Grid line width.
pub const GRID_LINE_WIDTH: f64 = 0.5;

// ── Density caps ────────────────────────────────────────────────

/// Maximum backing pixels per logical pixel for the grid layer.
pub const GRID_DENSITY_CAP: f64 = 2.0;

/// Maximum backing pixels per logical pixel for the committed-strokes layer.
pub const COMMITTED_DENSITY_CAP: f64 = 1.0;

/// Maximum backing pixels per logical pixel for the in-progress stroke layer.
pub const IN_PROGRESS_DENSITY_CAP: f64 = 1.0;

/// Maximum backing pixels per logical pixel for the overlay layer.
pub const OVERLAY_DENSITY_CAP: f64 = 1.25;
