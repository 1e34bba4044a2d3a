//! Lazy brush physics.
//!
//! The brush trails the raw pointer on an invisible tether. While the pointer
//! stays inside the tether radius the brush holds still; once the pointer
//! pulls the tether taut the brush is dragged along the line of travel so that
//! it sits exactly `radius` behind the pointer. Small hand jitter therefore
//! never reaches the stroke.

#[cfg(test)]
#[path = "brush_test.rs"]
mod brush_test;

use crate::geom::Point;

/// Pointer/brush pair under a tether-radius constraint.
///
/// Invariant: after every [`LazyBrush::update`] the brush is within `radius`
/// of the pointer, and equal to it while the brush is disabled.
#[derive(Debug, Clone)]
pub struct LazyBrush {
    pointer: Point,
    brush: Point,
    radius: f64,
    enabled: bool,
    moved: bool,
}

impl LazyBrush {
    /// Create a brush with pointer and brush both resting at `initial`.
    #[must_use]
    pub fn new(radius: f64, enabled: bool, initial: Point) -> Self {
        Self {
            pointer: initial,
            brush: initial,
            radius: radius.max(0.0),
            enabled,
            moved: false,
        }
    }

    /// Feed a new pointer position.
    ///
    /// With `both` set, pointer and brush snap to `pointer` together; this
    /// resets the tether (e.g. on a fresh touch contact) and always reports a
    /// change. Otherwise returns `false` when the pointer did not move; the
    /// tether constraint is still enforced, so a repeated position after a
    /// disable or a radius change settles the brush.
    pub fn update(&mut self, pointer: Point, both: bool) -> bool {
        if both {
            self.pointer = pointer;
            self.brush = pointer;
            self.moved = true;
            return true;
        }
        let changed = pointer != self.pointer;
        self.pointer = pointer;

        if !self.enabled {
            if self.brush != pointer {
                self.brush = pointer;
                self.moved = true;
            }
            return changed;
        }

        let distance = self.brush.distance_to(pointer);
        if distance > self.radius {
            // Pull the brush along the line of travel until the tether is taut.
            let keep = self.radius / distance;
            self.brush = Point::new(
                (self.brush.x - pointer.x).mul_add(keep, pointer.x),
                (self.brush.y - pointer.y).mul_add(keep, pointer.y),
            );
            self.moved = true;
        }
        changed
    }

    /// Enable or disable the tether. Re-enabling keeps the current brush
    /// position; the next update resumes trailing from there.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Change the tether radius. The brush is not repositioned until the
    /// next update.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(0.0);
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    #[must_use]
    pub fn brush(&self) -> Point {
        self.brush
    }

    /// Whether the brush moved during any update since the previous call.
    pub fn has_brush_moved_since_last_query(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }
}
