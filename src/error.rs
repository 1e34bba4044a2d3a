//! Error types for surface and engine failures.
//!
//! Nothing here reaches the user as a hard failure during drawing: the engine
//! core logs a [`SurfaceError`] and carries on. [`EngineError`] is only
//! returned while constructing the browser [`crate::engine::Engine`].

use wasm_bindgen::JsValue;

/// Failure reported by a [`crate::surface::Surface`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The surface has no backing store yet (never resized / not mounted).
    #[error("surface is not attached")]
    Detached,
    /// A canvas API call raised a JavaScript exception.
    #[error("canvas call failed: {0}")]
    Canvas(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        Self::Canvas(js_message(&value))
    }
}

/// Failure while building or mounting the browser engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// No `window` / `document` is available (not running in a browser).
    #[error("browser {0} is unavailable")]
    MissingGlobal(&'static str),
    /// `getContext("2d")` returned nothing for a layer canvas.
    #[error("2d context unavailable for {0} layer")]
    NoContext(&'static str),
    /// The JSON configuration could not be parsed.
    #[error("invalid scene config: {0}")]
    Config(#[from] serde_json::Error),
    /// A DOM call raised a JavaScript exception.
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Dom(js_message(&value))
    }
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
