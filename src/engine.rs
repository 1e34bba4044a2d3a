//! Scene controller: routes input through the brush physics into the stroke
//! buffer and layers, and drives the overlay through the render scheduler.
//!
//! [`EngineCore`] holds every piece of state and is generic over the
//! [`Surface`] backend so it runs headless in tests. [`Engine`] is the
//! browser binding: it owns the canvases, the frame loop and the resize
//! observer and forwards host calls to a shared core.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::brush::LazyBrush;
use crate::config::SceneConfig;
use crate::error::EngineError;
use crate::geom::Point;
use crate::input::{InputEvent, SessionState};
use crate::layers::Layers;
use crate::render::OverlayView;
use crate::resize::{ResizeSync, ScalePolicy, Viewport};
use crate::scheduler::{DirtyFlags, RenderScheduler};
use crate::stroke::{ExportedStroke, StrokeBuffer};
use crate::surface::{MemorySurface, Surface};
use crate::web::{self, CanvasSurface, FrameLoop, ResizeWatcher};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The brush left its press position; a stroke is now being drawn.
    StrokeStarted,
    /// The active stroke grew to `points` buffered points.
    StrokeExtended { points: usize },
    /// A stroke was finished and moved onto the committed layer.
    StrokeCommitted(ExportedStroke),
}

/// Core engine state: everything that doesn't depend on the browser.
pub struct EngineCore<S: Surface> {
    config: SceneConfig,
    brush: LazyBrush,
    brush_radius: f64,
    /// Brush radius latched when the active stroke started.
    stroke_radius: f64,
    stroke: StrokeBuffer,
    session: SessionState,
    layers: Layers<S>,
    scheduler: RenderScheduler,
    resize: ResizeSync,
    policy: ScalePolicy,
}

impl EngineCore<MemorySurface> {
    /// A core backed by in-memory surfaces.
    #[must_use]
    pub fn headless(config: SceneConfig) -> Self {
        Self::new(config, [MemorySurface::new(), MemorySurface::new(), MemorySurface::new(), MemorySurface::new()])
    }
}

impl<S: Surface> EngineCore<S> {
    /// Build a core over `surfaces`, given in grid, committed, in-progress,
    /// overlay order. Surfaces stay detached until the first resize.
    #[must_use]
    pub fn new(config: SceneConfig, surfaces: [S; 4]) -> Self {
        let [grid, committed, in_progress, overlay] = surfaces;
        Self {
            brush: LazyBrush::new(config.lazy_radius, config.lazy_enabled, Point::default()),
            brush_radius: config.brush_radius.max(0.0),
            stroke_radius: config.brush_radius.max(0.0),
            stroke: StrokeBuffer::new(),
            session: SessionState::Idle,
            layers: Layers::new(grid, committed, in_progress, overlay, config.grid_size),
            scheduler: RenderScheduler::new(),
            resize: ResizeSync::new(),
            policy: ScalePolicy::new(&config),
            config,
        }
    }

    // --- Input ---

    /// Dispatch a raw input event to its handler.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Action> {
        match event {
            InputEvent::PointerDown(p) => self.on_pointer_down(p),
            InputEvent::PointerMove(p) => self.on_pointer_move(p),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::TouchStart(p) => self.on_touch_start(p),
            InputEvent::TouchMove(p) => self.on_touch_move(p),
            InputEvent::TouchEnd => self.on_touch_end(),
        }
    }

    pub fn on_pointer_down(&mut self, pos: Point) -> Vec<Action> {
        let changed = self.brush.update(pos, false);
        // A press never starts a stroke by itself; discard the movement flag
        // so only motion after the press counts.
        if changed | self.brush.has_brush_moved_since_last_query() {
            self.scheduler.mark_pointer_moved();
        }
        if self.session == SessionState::Idle {
            self.session = SessionState::Pressing;
        }
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, pos: Point) -> Vec<Action> {
        let start = self.brush.brush();
        let changed = self.brush.update(pos, false);
        let moved = self.brush.has_brush_moved_since_last_query();
        if changed | moved {
            self.scheduler.mark_pointer_moved();
        }
        // Inside the tether the brush holds still and nothing is drawn.
        if !moved {
            return Vec::new();
        }

        match self.session {
            SessionState::Idle => Vec::new(),
            SessionState::Pressing => {
                self.session = SessionState::Drawing;
                self.stroke_radius = self.brush_radius;
                self.stroke.clear();
                self.stroke.push(start);
                self.stroke.push(self.brush.brush());
                self.layers.draw_in_progress(self.stroke.points(), self.stroke_radius);
                vec![Action::StrokeStarted]
            }
            SessionState::Drawing => {
                if !self.stroke.push(self.brush.brush()) {
                    return Vec::new();
                }
                self.layers.draw_in_progress(self.stroke.points(), self.stroke_radius);
                vec![Action::StrokeExtended { points: self.stroke.len() }]
            }
        }
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let was_drawing = self.session.is_drawing();
        self.session = SessionState::Idle;
        if !was_drawing {
            self.stroke.clear();
            return Vec::new();
        }

        match self.layers.commit(&mut self.stroke, self.stroke_radius) {
            Some(entry) => {
                log::debug!("stroke {} committed with {} points", entry.id, entry.points.len());
                vec![Action::StrokeCommitted(entry.export())]
            }
            None => Vec::new(),
        }
    }

    /// A new touch contact snaps pointer and brush to the contact point
    /// before pressing, so the tether never drags across the screen.
    pub fn on_touch_start(&mut self, pos: Point) -> Vec<Action> {
        self.place_brush(pos);
        self.on_pointer_down(pos)
    }

    pub fn on_touch_move(&mut self, pos: Point) -> Vec<Action> {
        self.on_pointer_move(pos)
    }

    /// Lifting the finger ends the stroke, then re-syncs the pointer to
    /// where the brush ended up.
    pub fn on_touch_end(&mut self) -> Vec<Action> {
        let actions = self.on_pointer_up();
        self.place_brush(self.brush.brush());
        actions
    }

    /// Snap pointer and brush to `pos` together.
    pub fn place_brush(&mut self, pos: Point) {
        if self.brush.update(pos, true) | self.brush.has_brush_moved_since_last_query() {
            self.scheduler.mark_pointer_moved();
        }
    }

    // --- Resize ---

    /// Apply a batch of container observations. Returns whether the layers
    /// were reallocated.
    pub fn on_resize<I>(&mut self, batch: I) -> bool
    where
        I: IntoIterator<Item = Viewport>,
    {
        let Some(viewport) = self.resize.accept(batch) else {
            return false;
        };
        log::info!(
            "layers resized to {}x{} at density {}",
            viewport.size.width,
            viewport.size.height,
            viewport.density
        );
        self.layers.resize(&viewport, &self.policy);
        if self.session.is_drawing() {
            self.layers.draw_in_progress(self.stroke.points(), self.stroke_radius);
        }
        self.scheduler.mark_style_changed();
        true
    }

    // --- Frame ---

    /// Redraw the overlay if anything changed since the last frame.
    /// Returns whether a redraw happened.
    pub fn tick(&mut self) -> bool {
        let view = self.overlay_view();
        let layers = &mut self.layers;
        self.scheduler.tick(|| layers.draw_overlay(&view))
    }

    fn overlay_view(&self) -> OverlayView {
        OverlayView {
            pointer: self.brush.pointer(),
            brush: self.brush.brush(),
            brush_radius: self.brush_radius,
            tether: self.brush.is_enabled().then(|| self.brush.radius()),
        }
    }

    // --- Style ---

    pub fn set_brush_radius(&mut self, radius: f64) {
        self.brush_radius = radius.max(0.0);
        self.scheduler.mark_style_changed();
    }

    pub fn set_lazy_radius(&mut self, radius: f64) {
        self.brush.set_radius(radius);
        self.scheduler.mark_style_changed();
    }

    pub fn set_lazy_enabled(&mut self, enabled: bool) {
        self.brush.set_enabled(enabled);
        self.scheduler.mark_style_changed();
    }

    /// Flip the tether on or off. Returns the new state.
    pub fn toggle_lazy(&mut self) -> bool {
        let enabled = !self.brush.is_enabled();
        self.set_lazy_enabled(enabled);
        enabled
    }

    /// Erase every committed and in-progress stroke. The grid stays.
    pub fn clear(&mut self) {
        self.layers.clear();
        self.stroke.clear();
        self.scheduler.mark_style_changed();
        log::debug!("scene cleared");
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> SessionState {
        self.session
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.brush.pointer()
    }

    #[must_use]
    pub fn brush(&self) -> Point {
        self.brush.brush()
    }

    #[must_use]
    pub fn brush_radius(&self) -> f64 {
        self.brush_radius
    }

    #[must_use]
    pub fn lazy_radius(&self) -> f64 {
        self.brush.radius()
    }

    #[must_use]
    pub fn is_lazy_enabled(&self) -> bool {
        self.brush.is_enabled()
    }

    /// Points buffered for the active stroke.
    #[must_use]
    pub fn stroke_points(&self) -> &[Point] {
        self.stroke.points()
    }

    #[must_use]
    pub fn dirty(&self) -> DirtyFlags {
        self.scheduler.flags()
    }

    #[must_use]
    pub fn layers(&self) -> &Layers<S> {
        &self.layers
    }
}

/// Browser engine mounted into a container element.
///
/// Creates four stacked canvases inside the container, redraws on animation
/// frames and follows the container's size. Call [`Engine::destroy`] (or drop
/// the engine) to stop the frame loop and the resize observer.
#[wasm_bindgen]
pub struct Engine {
    core: Rc<RefCell<EngineCore<CanvasSurface>>>,
    frames: Option<FrameLoop>,
    resize: Option<ResizeWatcher>,
}

#[wasm_bindgen]
impl Engine {
    /// Mount into `container`. `config` is an optional JSON object; missing
    /// fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the config does not parse or the canvases cannot be
    /// created.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, config: Option<String>) -> Result<Engine, JsValue> {
        Ok(Self::mount(&container, config.as_deref())?)
    }

    // --- Pointer ---

    pub fn pointer_down(&self, x: f64, y: f64) {
        self.input(InputEvent::PointerDown(Point::new(x, y)));
    }

    pub fn pointer_move(&self, x: f64, y: f64) {
        self.input(InputEvent::PointerMove(Point::new(x, y)));
    }

    /// Release the pointer. Returns the committed stroke as JSON, if any.
    pub fn pointer_up(&self) -> Option<String> {
        self.input(InputEvent::PointerUp)
    }

    // --- Touch ---

    pub fn touch_start(&self, x: f64, y: f64) {
        self.input(InputEvent::TouchStart(Point::new(x, y)));
    }

    pub fn touch_move(&self, x: f64, y: f64) {
        self.input(InputEvent::TouchMove(Point::new(x, y)));
    }

    /// End the touch. Returns the committed stroke as JSON, if any.
    pub fn touch_end(&self) -> Option<String> {
        self.input(InputEvent::TouchEnd)
    }

    // --- Style ---

    pub fn clear(&self) {
        self.with_core(EngineCore::clear);
    }

    pub fn set_brush_radius(&self, radius: f64) {
        self.with_core(|core| core.set_brush_radius(radius));
    }

    pub fn set_lazy_radius(&self, radius: f64) {
        self.with_core(|core| core.set_lazy_radius(radius));
    }

    pub fn set_lazy_enabled(&self, enabled: bool) {
        self.with_core(|core| core.set_lazy_enabled(enabled));
    }

    /// Flip the tether. Returns the new state.
    pub fn toggle_lazy(&self) -> bool {
        self.with_core(EngineCore::toggle_lazy).unwrap_or_default()
    }

    /// Stop the frame loop and disconnect the resize observer.
    pub fn destroy(&mut self) {
        if let Some(frames) = self.frames.take() {
            frames.stop();
        }
        if let Some(resize) = self.resize.take() {
            resize.disconnect();
        }
    }
}

impl Engine {
    fn mount(container: &HtmlElement, config: Option<&str>) -> Result<Self, EngineError> {
        web::install_logging();
        let config = match config {
            Some(json) => SceneConfig::from_json(json)?,
            None => SceneConfig::default(),
        };

        let surfaces = CanvasSurface::mount_layers(container)?;
        let mut core = EngineCore::new(config, surfaces);
        let center = Point::new(
            f64::from(container.client_width()) / 2.0,
            f64::from(container.client_height()) / 2.0,
        );
        core.place_brush(center);
        let core = Rc::new(RefCell::new(core));

        let for_frames = Rc::clone(&core);
        let frames = FrameLoop::start(move || {
            if let Ok(mut core) = for_frames.try_borrow_mut() {
                core.tick();
            } else {
                log::debug!("frame skipped: engine busy");
            }
        })?;

        let for_resize = Rc::clone(&core);
        let resize = ResizeWatcher::observe(container, move |batch| match for_resize.try_borrow_mut() {
            Ok(mut core) => {
                core.on_resize(batch);
            }
            Err(e) => log::warn!("resize dropped: {e}"),
        })?;

        log::info!("engine mounted");
        Ok(Self { core, frames: Some(frames), resize: Some(resize) })
    }

    fn with_core<T>(&self, f: impl FnOnce(&mut EngineCore<CanvasSurface>) -> T) -> Option<T> {
        match self.core.try_borrow_mut() {
            Ok(mut core) => Some(f(&mut core)),
            Err(e) => {
                log::warn!("engine call dropped: {e}");
                None
            }
        }
    }

    /// Feed one event and serialize any committed stroke.
    fn input(&self, event: InputEvent) -> Option<String> {
        let actions = self.with_core(|core| core.handle(event))?;
        actions.into_iter().find_map(|action| match action {
            Action::StrokeCommitted(stroke) => match serde_json::to_string(&stroke) {
                Ok(json) => Some(json),
                Err(e) => {
                    log::warn!("stroke export failed: {e}");
                    None
                }
            },
            Action::StrokeStarted | Action::StrokeExtended { .. } => None,
        })
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.destroy();
    }
}
