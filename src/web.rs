//! Browser backends: canvas layer surfaces, the animation-frame loop and the
//! container resize observer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Once;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, ResizeObserver, ResizeObserverEntry};

use crate::draw::{DrawList, Paint, PathCommand, Shape};
use crate::error::{EngineError, SurfaceError};
use crate::geom::Size;
use crate::resize::Viewport;
use crate::scheduler::CancelToken;
use crate::surface::{LayerRole, Surface, SurfaceInfo};

const LAYER_STYLE: &str = "position:absolute;left:0;top:0;width:100%;height:100%;pointer-events:none;";

static LOGGING: Once = Once::new();

/// Route `log` records and panics to the browser console. Safe to call more
/// than once.
pub(crate) fn install_logging() {
    LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            log::debug!("console logger not installed: {e}");
        }
    });
}

fn window() -> Result<web_sys::Window, EngineError> {
    web_sys::window().ok_or(EngineError::MissingGlobal("window"))
}

fn document() -> Result<Document, EngineError> {
    window()?.document().ok_or(EngineError::MissingGlobal("document"))
}

// =============================================================
// CanvasSurface
// =============================================================

/// One `<canvas>` layer and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    info: SurfaceInfo,
}

impl CanvasSurface {
    /// Create one canvas per layer role inside `container`, stacked in
    /// [`LayerRole::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the DOM is unavailable or a canvas has no 2D context.
    pub fn mount_layers(container: &HtmlElement) -> Result<[CanvasSurface; 4], EngineError> {
        let document = document()?;
        let [grid, committed, in_progress, overlay] = LayerRole::ALL;
        Ok([
            Self::mount(&document, container, grid)?,
            Self::mount(&document, container, committed)?,
            Self::mount(&document, container, in_progress)?,
            Self::mount(&document, container, overlay)?,
        ])
    }

    fn mount(document: &Document, container: &HtmlElement, role: LayerRole) -> Result<Self, EngineError> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| EngineError::Dom("created element is not a canvas".into()))?;
        canvas.set_attribute("style", LAYER_STYLE)?;
        canvas.set_attribute("data-layer", role.name())?;
        container.append_child(&canvas)?;

        let Some(ctx_value) = canvas.get_context("2d")? else {
            return Err(EngineError::NoContext(role.name()));
        };
        let ctx = ctx_value
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::NoContext(role.name()))?;

        Ok(Self { canvas, ctx, info: SurfaceInfo::default() })
    }

    fn trace(&self, shape: &Shape) -> Result<(), JsValue> {
        self.ctx.begin_path();
        for cmd in shape.path.commands() {
            match *cmd {
                PathCommand::MoveTo { to } => self.ctx.move_to(to.x, to.y),
                PathCommand::LineTo { to } => self.ctx.line_to(to.x, to.y),
                PathCommand::QuadTo { ctrl, to } => self.ctx.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y),
                PathCommand::Circle { center, radius } => {
                    self.ctx.move_to(center.x + radius, center.y);
                    self.ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)?;
                }
            }
        }
        Ok(())
    }

    fn draw_shape(&self, shape: &Shape) -> Result<(), JsValue> {
        self.ctx.save();
        let result = self.trace(shape).and_then(|()| self.apply_paint(&shape.paint));
        self.ctx.restore();
        result
    }

    fn apply_paint(&self, paint: &Paint) -> Result<(), JsValue> {
        match paint {
            Paint::Stroke { color, width, join, cap, dash } => {
                self.ctx.set_stroke_style_str(color);
                self.ctx.set_line_width(*width);
                self.ctx.set_line_join(join.as_css());
                self.ctx.set_line_cap(cap.as_css());
                let segments: js_sys::Array = dash.iter().map(|d| JsValue::from_f64(*d)).collect();
                self.ctx.set_line_dash(&segments)?;
                self.ctx.stroke();
            }
            Paint::Fill { color } => {
                self.ctx.set_fill_style_str(color);
                self.ctx.fill();
            }
        }
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn info(&self) -> SurfaceInfo {
        self.info
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&mut self, logical: Size, scale: f64) -> Result<(), SurfaceError> {
        let backing = logical.scaled(scale);
        // Setting the size wipes content and resets the context state.
        self.canvas.set_width(backing.width.round().max(0.0) as u32);
        self.canvas.set_height(backing.height.round().max(0.0) as u32);
        self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)?;
        self.info = SurfaceInfo { logical, scale };
        Ok(())
    }

    fn clear(&mut self) {
        let logical = self.info.logical;
        self.ctx.clear_rect(0.0, 0.0, logical.width, logical.height);
    }

    fn paint(&mut self, list: &DrawList) -> Result<(), SurfaceError> {
        if !self.info.is_attached() {
            return Err(SurfaceError::Detached);
        }
        for shape in list.shapes() {
            self.draw_shape(shape)?;
        }
        Ok(())
    }

    fn copy_from(&mut self, source: &Self, logical: Size) -> Result<(), SurfaceError> {
        if !self.info.is_attached() {
            return Err(SurfaceError::Detached);
        }
        self.ctx
            .draw_image_with_html_canvas_element_and_dw_and_dh(&source.canvas, 0.0, 0.0, logical.width, logical.height)?;
        Ok(())
    }
}

// =============================================================
// FrameLoop
// =============================================================

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Calls a tick function on every animation frame until stopped.
pub struct FrameLoop {
    token: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
    holder: FrameCallback,
}

impl FrameLoop {
    /// Start calling `tick` once per animation frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no window or the first frame cannot be
    /// requested.
    pub fn start(mut tick: impl FnMut() + 'static) -> Result<Self, EngineError> {
        let window = window()?;
        let token = CancelToken::new();
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let holder: FrameCallback = Rc::new(RefCell::new(None));

        let token_for_cb = token.clone();
        let pending_for_cb = Rc::clone(&pending);
        let holder_for_cb = Rc::clone(&holder);
        let window_for_cb = window.clone();
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            pending_for_cb.set(None);
            if token_for_cb.is_cancelled() {
                drop(holder_for_cb.borrow_mut().take());
                return;
            }
            tick();
            let Ok(slot) = holder_for_cb.try_borrow() else {
                return;
            };
            if let Some(cb) = slot.as_ref() {
                match window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_for_cb.set(Some(id)),
                    Err(e) => log::warn!("frame loop stopped: {e:?}"),
                }
            }
        }) as Box<dyn FnMut(f64)>);

        let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *holder.borrow_mut() = Some(cb);
        Ok(Self { token, pending, holder })
    }

    /// Cancel the pending frame and release the callback.
    pub fn stop(self) {
        self.token.cancel();
        if let Some(id) = self.pending.take() {
            match web_sys::window() {
                Some(window) => {
                    if let Err(e) = window.cancel_animation_frame(id) {
                        log::warn!("cancel_animation_frame failed: {e:?}");
                    }
                }
                None => log::debug!("no window; frame {id} left to expire"),
            }
        }
        drop(self.holder.borrow_mut().take());
    }
}

// =============================================================
// ResizeWatcher
// =============================================================

/// Watches a container's content box and reports each notification batch.
pub struct ResizeWatcher {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, ResizeObserver)>,
}

impl ResizeWatcher {
    /// Observe `container`. `on_resize` receives one [`Viewport`] per entry,
    /// in delivery order, with the current display density.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `ResizeObserver` is unavailable.
    pub fn observe(
        container: &HtmlElement,
        mut on_resize: impl FnMut(Vec<Viewport>) + 'static,
    ) -> Result<Self, EngineError> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: ResizeObserver| {
            let density = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
            let batch: Vec<Viewport> = entries
                .iter()
                .filter_map(|entry| match entry.dyn_into::<ResizeObserverEntry>() {
                    Ok(entry) => Some(entry),
                    Err(other) => {
                        log::debug!("resize batch item skipped: not a ResizeObserverEntry: {other:?}");
                        None
                    }
                })
                .map(|entry| {
                    let rect = entry.content_rect();
                    Viewport::new(rect.width(), rect.height(), density)
                })
                .collect();
            on_resize(batch);
        }) as Box<dyn FnMut(js_sys::Array, ResizeObserver)>);

        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(container);
        Ok(Self { observer, _callback: callback })
    }

    pub fn disconnect(self) {
        drop(self);
    }
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
