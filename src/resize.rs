//! Container resize handling.
//!
//! The container reports its content-box size and the display density. Each
//! layer gets a backing store of `size × min(density, cap)` for its role.
//! Notifications arrive in batches; only the last size of a batch is
//! applied, and a size equal to the one already applied is ignored.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::config::{DensityCaps, SceneConfig};
use crate::geom::Size;
use crate::surface::LayerRole;

/// A container size observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Size,
    /// Device pixels per CSS pixel.
    pub density: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64, density: f64) -> Self {
        Self { size: Size::new(width, height), density }
    }

    /// Whether this observation can be applied.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.size.is_drawable() && self.density > 0.0
    }
}

/// Backing scale per layer role.
#[derive(Debug, Clone, Copy)]
pub struct ScalePolicy {
    caps: DensityCaps,
    breakpoint: Option<f64>,
}

impl ScalePolicy {
    #[must_use]
    pub fn new(config: &SceneConfig) -> Self {
        Self { caps: config.density_caps, breakpoint: config.cap_breakpoint }
    }

    /// Backing pixels per logical pixel for `role` under `viewport`.
    #[must_use]
    pub fn scale_for(&self, role: LayerRole, viewport: &Viewport) -> f64 {
        let uncapped = self
            .breakpoint
            .is_some_and(|limit| viewport.size.width <= limit);
        if uncapped {
            viewport.density
        } else {
            viewport.density.min(self.caps.for_role(role))
        }
    }
}

/// Coalesces resize notifications.
#[derive(Debug, Clone, Default)]
pub struct ResizeSync {
    applied: Option<Viewport>,
}

impl ResizeSync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the viewport to apply from a notification batch.
    ///
    /// Returns `None` when the batch is empty, its last size is zero or
    /// negative, or that size is already applied.
    pub fn accept<I>(&mut self, batch: I) -> Option<Viewport>
    where
        I: IntoIterator<Item = Viewport>,
    {
        let latest = batch.into_iter().last()?;
        if !latest.is_usable() {
            log::debug!(
                "resize skipped: unusable size {}x{} @ {}",
                latest.size.width,
                latest.size.height,
                latest.density
            );
            return None;
        }
        if self.applied == Some(latest) {
            return None;
        }
        self.applied = Some(latest);
        Some(latest)
    }
}
