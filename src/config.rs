//! Scene configuration.
//!
//! Every field has a default, so hosts may pass a partial JSON object (or none
//! at all) to [`crate::engine::Engine::new`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    BRUSH_RADIUS, COMMITTED_DENSITY_CAP, GRID_DENSITY_CAP, GRID_SIZE, IN_PROGRESS_DENSITY_CAP, LAZY_RADIUS,
    OVERLAY_DENSITY_CAP,
};
use crate::surface::LayerRole;

/// Per-layer cap on backing pixels per logical pixel.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DensityCaps {
    pub grid: f64,
    pub committed: f64,
    pub in_progress: f64,
    pub overlay: f64,
}

impl Default for DensityCaps {
    fn default() -> Self {
        Self {
            grid: GRID_DENSITY_CAP,
            committed: COMMITTED_DENSITY_CAP,
            in_progress: IN_PROGRESS_DENSITY_CAP,
            overlay: OVERLAY_DENSITY_CAP,
        }
    }
}

impl DensityCaps {
    #[must_use]
    pub fn for_role(&self, role: LayerRole) -> f64 {
        match role {
            LayerRole::Grid => self.grid,
            LayerRole::Committed => self.committed,
            LayerRole::InProgress => self.in_progress,
            LayerRole::Overlay => self.overlay,
        }
    }
}

/// Tunables for a drawing scene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Tether radius between pointer and brush.
    pub lazy_radius: f64,
    /// Whether the brush starts tethered.
    pub lazy_enabled: bool,
    /// Brush radius; strokes are twice this wide.
    pub brush_radius: f64,
    /// Grid spacing in logical pixels.
    pub grid_size: f64,
    pub density_caps: DensityCaps,
    /// When set, containers no wider than this ignore the caps and use the
    /// full display density.
    pub cap_breakpoint: Option<f64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            lazy_radius: LAZY_RADIUS,
            lazy_enabled: true,
            brush_radius: BRUSH_RADIUS,
            grid_size: GRID_SIZE,
            density_caps: DensityCaps::default(),
            cap_breakpoint: None,
        }
    }
}

impl SceneConfig {
    /// Parse a (possibly partial) JSON config.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
