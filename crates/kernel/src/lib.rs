//! Game kernel: the world state, the update step, and frame pacing.
//!
//! # Invariants
//! - After every step the ball lies fully inside the window bounds.
//! - The enemy keeps its setup position and zero velocity.
//! - All state mutations flow through explicit operations and are logged.

pub mod clock;
pub mod world;

pub use clock::{FrameClock, SystemTicks, TickSource, VirtualTicks};
pub use world::{World, WorldEvent, wall_clock_seed};
