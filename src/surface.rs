//! Rendering targets.
//!
//! [`Surface`] is the contract the compositor draws through: a raster with its
//! own backing resolution and a logical-to-pixel scale applied by the caller
//! on every resize. The browser implementation lives in [`crate::web`];
//! [`MemorySurface`] records content instead of rasterizing it, which keeps
//! the engine core testable without a browser.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::draw::DrawList;
use crate::error::SurfaceError;
use crate::geom::Size;

/// Which of the four stacked layers a surface plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// Static reference grid.
    Grid,
    /// Accumulated finished strokes.
    Committed,
    /// The stroke being drawn right now.
    InProgress,
    /// Cursor, brush and tether; redrawn every dirty frame.
    Overlay,
}

impl LayerRole {
    /// Bottom-to-top stacking order.
    pub const ALL: [LayerRole; 4] = [Self::Grid, Self::Committed, Self::InProgress, Self::Overlay];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Committed => "committed",
            Self::InProgress => "in-progress",
            Self::Overlay => "overlay",
        }
    }
}

/// Geometry of a surface's backing store.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceInfo {
    /// Size in logical (CSS) pixels.
    pub logical: Size,
    /// Backing pixels per logical pixel.
    pub scale: f64,
}

impl SurfaceInfo {
    /// Backing store size in device pixels.
    #[must_use]
    pub fn backing(&self) -> Size {
        self.logical.scaled(self.scale)
    }

    /// Whether the surface has a backing store to draw into.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.logical.is_drawable() && self.scale > 0.0
    }
}

/// A raster target owned by the compositor.
pub trait Surface {
    /// Current backing geometry.
    fn info(&self) -> SurfaceInfo;

    /// Reallocate the backing store at `logical × scale` and apply the scale
    /// transform so later draws stay in logical coordinates. Prior content is
    /// lost.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the scale transform cannot be applied.
    fn resize(&mut self, logical: Size, scale: f64) -> Result<(), SurfaceError>;

    /// Erase all content.
    fn clear(&mut self);

    /// Apply every shape of `list` in order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    fn paint(&mut self, list: &DrawList) -> Result<(), SurfaceError>;

    /// Copy the whole of `source` onto this surface at logical (0, 0), drawn at
    /// `logical` size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the copy fails.
    fn copy_from(&mut self, source: &Self, logical: Size) -> Result<(), SurfaceError>;
}

/// A surface that keeps the draw lists it received instead of pixels.
///
/// Content is the ordered list of applied draw lists; copying appends the
/// source's content, resizing and clearing drop it.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    info: SurfaceInfo,
    content: Vec<DrawList>,
    clears: usize,
    paints: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything currently drawn on the surface.
    #[must_use]
    pub fn content(&self) -> &[DrawList] {
        &self.content
    }

    /// Number of times [`Surface::clear`] ran.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Number of successful [`Surface::paint`] calls.
    #[must_use]
    pub fn paint_count(&self) -> usize {
        self.paints
    }
}

impl Surface for MemorySurface {
    fn info(&self) -> SurfaceInfo {
        self.info
    }

    fn resize(&mut self, logical: Size, scale: f64) -> Result<(), SurfaceError> {
        self.info = SurfaceInfo { logical, scale };
        self.content.clear();
        Ok(())
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.content.clear();
    }

    fn paint(&mut self, list: &DrawList) -> Result<(), SurfaceError> {
        if !self.info.is_attached() {
            return Err(SurfaceError::Detached);
        }
        self.paints += 1;
        if !list.is_empty() {
            self.content.push(list.clone());
        }
        Ok(())
    }

    fn copy_from(&mut self, source: &Self, _logical: Size) -> Result<(), SurfaceError> {
        if !self.info.is_attached() {
            return Err(SurfaceError::Detached);
        }
        self.content.extend(source.content.iter().cloned());
        Ok(())
    }
}
