//! Rendering adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers never mutate world state.
//! - A frame is drawn in order: clear, ball, enemy, then presented.

mod renderer;

pub use renderer::{DebugTextRenderer, DrawRect, Frame, Renderer};

pub fn crate_info() -> &'static str {
    "boxfield-render v0.1.0"
}
