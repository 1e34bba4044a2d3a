//! Lazy-brush drawing engine.
//!
//! A brush trails the pointer on a tether so hand jitter never reaches the
//! line, and the trail is fitted with quadratic curves before it is drawn.
//! Drawing happens on four stacked layers so that committed strokes are never
//! repainted while the pointer moves.
//!
//! The crate builds natively for tests and headless hosts, and to WebAssembly
//! for the browser. Everything except [`web`] and the [`engine::Engine`]
//! binding is browser-independent; [`engine::EngineCore`] runs over any
//! [`surface::Surface`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Scene controller, testable [`engine::EngineCore`] and the wasm [`engine::Engine`] |
//! | [`brush`] | Lazy brush tether physics |
//! | [`stroke`] | Stroke buffer, curve smoothing and stroke export |
//! | [`catenary`] | Hanging-chain tether geometry |
//! | [`layers`] | Four-layer compositor with commit/clear and stroke replay |
//! | [`render`] | Grid and overlay draw lists |
//! | [`draw`] | Path commands and paint, the unit handed to a surface |
//! | [`surface`] | Surface contract and the in-memory recording surface |
//! | [`resize`] | Container observations, per-layer density caps |
//! | [`scheduler`] | Dirty flags and the frame-loop cancel token |
//! | [`input`] | Input events and the drawing session state |
//! | [`config`] | JSON scene configuration |
//! | [`web`] | Canvas surfaces, animation-frame loop, resize observer |
//! | [`consts`] | Default radii, colours and caps |

pub mod brush;
pub mod catenary;
pub mod config;
pub mod consts;
pub mod draw;
pub mod engine;
pub mod error;
pub mod geom;
pub mod input;
pub mod layers;
pub mod render;
pub mod resize;
pub mod scheduler;
pub mod stroke;
pub mod surface;
pub mod web;
