//! Overlay render scheduling.
//!
//! The host ticks the scheduler at display refresh rate. A tick redraws the
//! overlay only when something marked it dirty since the previous redraw.
//! [`CancelToken`] lets the ticker that drives the scheduler be stopped from
//! outside the tick callback.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::Cell;
use std::rc::Rc;

/// What changed since the overlay was last drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyFlags {
    pub pointer_moved: bool,
    pub style_changed: bool,
}

impl Default for DirtyFlags {
    /// A fresh scene has never drawn its overlay.
    fn default() -> Self {
        Self { pointer_moved: true, style_changed: true }
    }
}

impl DirtyFlags {
    #[must_use]
    pub fn is_dirty(self) -> bool {
        self.pointer_moved || self.style_changed
    }
}

/// Decides when the overlay needs redrawing.
#[derive(Debug, Clone, Default)]
pub struct RenderScheduler {
    flags: DirtyFlags,
}

impl RenderScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_pointer_moved(&mut self) {
        self.flags.pointer_moved = true;
    }

    pub fn mark_style_changed(&mut self) {
        self.flags.style_changed = true;
    }

    #[must_use]
    pub fn flags(&self) -> DirtyFlags {
        self.flags
    }

    /// Run `redraw` if dirty, then clear the flags.
    ///
    /// Returns whether `redraw` ran.
    pub fn tick<F>(&mut self, redraw: F) -> bool
    where
        F: FnOnce(),
    {
        if !self.flags.is_dirty() {
            return false;
        }
        redraw();
        self.flags = DirtyFlags { pointer_moved: false, style_changed: false };
        true
    }
}

/// Shared stop switch for a recurring ticker.
///
/// Clones observe the same state; once cancelled a token stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
