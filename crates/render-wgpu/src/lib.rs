//! wgpu render backend for boxfield.
//!
//! Draws each frame's rectangles as instanced quads in window pixel space,
//! then presents the surface.
//!
//! # Invariants
//! - Renderer never mutates world state.
//! - Rectangles are drawn in frame order over a cleared target.

mod gpu;
mod shaders;

pub use gpu::{GpuError, WgpuRenderer};
