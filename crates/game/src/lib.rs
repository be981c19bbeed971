//! Game loop orchestration.
//!
//! Each iteration runs input, then the fixed-timestep update, then rendering,
//! until a quit request moves the loop to its terminal `Stopped` state.

pub mod game_loop;
pub mod handler;

pub use game_loop::GameLoop;
pub use handler::{InputHandler, LoopState};
