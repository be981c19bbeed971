//! Shared types for the boxfield demo: game objects, window bounds, colors,
//! and the compile-time configuration every other crate reads.

pub mod config;
pub mod types;

pub use config::{
    BALL_SIZE, BALL_SPEED, ENEMY_SIZE, FPS, FRAME_TARGET_TIME_MS, GameConfig, WINDOW_HEIGHT,
    WINDOW_WIDTH,
};
pub use types::{Bounds, Color, GameObject};

pub fn crate_info() -> &'static str {
    "boxfield-common v0.1.0"
}
