//! Layer compositor: four stacked surfaces and the commit/clear protocol.
//!
//! | Layer | Content | Repainted |
//! |-------|---------|-----------|
//! | grid | reference lines | on resize |
//! | committed | finished strokes | on commit (copy), on resize (replay) |
//! | in-progress | the active smoothed stroke | every accepted move |
//! | overlay | pointer, brush, tether | every dirty frame |
//!
//! Resizing destroys backing content, so the compositor keeps a vector log of
//! committed strokes and replays it onto the committed layer afterwards.

#[cfg(test)]
#[path = "layers_test.rs"]
mod layers_test;

use uuid::Uuid;

use crate::draw::DrawList;
use crate::geom::Point;
use crate::render::{self, OverlayView};
use crate::resize::{ScalePolicy, Viewport};
use crate::stroke::{self, ExportedStroke, StrokeBuffer};
use crate::surface::{LayerRole, Surface};

/// A finished stroke kept for replay.
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedStroke {
    pub id: Uuid,
    pub points: Vec<Point>,
    pub brush_radius: f64,
}

impl CommittedStroke {
    #[must_use]
    pub fn draw_list(&self) -> DrawList {
        stroke::stroke_draw_list(&self.points, self.brush_radius)
    }

    #[must_use]
    pub fn export(&self) -> ExportedStroke {
        ExportedStroke::new(self.id, &self.points, self.brush_radius)
    }
}

/// Owns the four layer surfaces.
pub struct Layers<S: Surface> {
    grid: S,
    committed: S,
    in_progress: S,
    overlay: S,
    history: Vec<CommittedStroke>,
    grid_size: f64,
}

impl<S: Surface> Layers<S> {
    #[must_use]
    pub fn new(grid: S, committed: S, in_progress: S, overlay: S, grid_size: f64) -> Self {
        Self {
            grid,
            committed,
            in_progress,
            overlay,
            history: Vec::new(),
            grid_size,
        }
    }

    #[must_use]
    pub fn surface(&self, role: LayerRole) -> &S {
        match role {
            LayerRole::Grid => &self.grid,
            LayerRole::Committed => &self.committed,
            LayerRole::InProgress => &self.in_progress,
            LayerRole::Overlay => &self.overlay,
        }
    }

    fn surface_mut(&mut self, role: LayerRole) -> &mut S {
        match role {
            LayerRole::Grid => &mut self.grid,
            LayerRole::Committed => &mut self.committed,
            LayerRole::InProgress => &mut self.in_progress,
            LayerRole::Overlay => &mut self.overlay,
        }
    }

    /// Committed strokes, oldest first.
    #[must_use]
    pub fn history(&self) -> &[CommittedStroke] {
        &self.history
    }

    // --- Resize ---

    /// Reallocate every layer for `viewport`, then repaint the grid and
    /// replay committed strokes.
    pub fn resize(&mut self, viewport: &Viewport, policy: &ScalePolicy) {
        for role in LayerRole::ALL {
            let scale = policy.scale_for(role, viewport);
            if let Err(e) = self.surface_mut(role).resize(viewport.size, scale) {
                log::warn!("resize of {} layer failed: {e}", role.name());
            }
        }
        self.draw_grid();
        self.replay_committed();
    }

    /// Repaint the grid layer from scratch.
    pub fn draw_grid(&mut self) {
        let size = self.grid.info().logical;
        let list = render::grid(size, self.grid_size);
        self.grid.clear();
        paint_on(&mut self.grid, LayerRole::Grid, &list);
    }

    fn replay_committed(&mut self) {
        self.committed.clear();
        for entry in &self.history {
            paint_on(&mut self.committed, LayerRole::Committed, &entry.draw_list());
        }
    }

    // --- Strokes ---

    /// Redraw the in-progress layer with the smoothed stroke through `points`.
    pub fn draw_in_progress(&mut self, points: &[Point], brush_radius: f64) {
        self.in_progress.clear();
        let list = stroke::stroke_draw_list(points, brush_radius);
        if list.is_empty() {
            return;
        }
        paint_on(&mut self.in_progress, LayerRole::InProgress, &list);
    }

    /// Move the in-progress stroke onto the committed layer, draining
    /// `stroke`.
    ///
    /// A stroke that is not committable commits nothing; the buffer and the
    /// in-progress layer are cleared either way.
    pub fn commit(&mut self, stroke: &mut StrokeBuffer, brush_radius: f64) -> Option<CommittedStroke> {
        if !stroke.is_committable() {
            stroke.clear();
            self.in_progress.clear();
            return None;
        }
        let points = stroke.take();

        if self.committed.info().is_attached() {
            let logical = self.in_progress.info().logical;
            if let Err(e) = self.committed.copy_from(&self.in_progress, logical) {
                log::warn!("commit copy failed: {e}");
            }
        } else {
            log::debug!("committed layer not attached; commit copy skipped");
        }
        self.in_progress.clear();

        let entry = CommittedStroke { id: Uuid::new_v4(), points, brush_radius };
        self.history.push(entry.clone());
        Some(entry)
    }

    /// Empty the committed and in-progress layers. The grid is untouched.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.in_progress.clear();
        self.history.clear();
    }

    // --- Overlay ---

    /// Redraw the overlay layer from scratch.
    pub fn draw_overlay(&mut self, view: &OverlayView) {
        self.overlay.clear();
        paint_on(&mut self.overlay, LayerRole::Overlay, &render::overlay(view));
    }
}

/// Paint `list` on `surface`, skipping detached surfaces and logging failures.
fn paint_on<S: Surface>(surface: &mut S, role: LayerRole, list: &DrawList) {
    if !surface.info().is_attached() {
        log::debug!("{} layer not attached; draw skipped", role.name());
        return;
    }
    if let Err(e) = surface.paint(list) {
        log::warn!("drawing {} layer failed: {e}", role.name());
    }
}
