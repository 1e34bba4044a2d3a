//! Input model: raw pointer/touch events and the drawing session state.
//!
//! Mouse and touch are normalized to the same three-state session. Touch has
//! two extra rules, applied by the engine: a new contact snaps the brush to
//! the contact point before pressing, and lifting the finger re-syncs the
//! pointer to wherever the brush ended up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// One raw input event, in logical coordinates relative to the container.
///
/// Only the primary touch contact is ever reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    TouchStart(Point),
    TouchMove(Point),
    TouchEnd,
}

/// Where the drawing session is between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing pressed.
    #[default]
    Idle,
    /// Pressed, but the brush has not moved yet.
    Pressing,
    /// Pressed and the stroke buffer is collecting points.
    Drawing,
}

impl SessionState {
    #[must_use]
    pub fn is_drawing(self) -> bool {
        self == Self::Drawing
    }
}
