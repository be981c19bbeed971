use crate::types::Bounds;
use serde::{Deserialize, Serialize};

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const FPS: u32 = 30;
/// Target duration of one loop iteration.
pub const FRAME_TARGET_TIME_MS: u64 = 1000 / FPS as u64;

/// Speed the ball moves at while a direction key is held, in pixels per second.
pub const BALL_SPEED: f32 = 400.0;
pub const BALL_SIZE: f32 = 15.0;
pub const ENEMY_SIZE: f32 = 25.0;

/// Window and pacing settings.
///
/// The defaults are the compile-time constants above; nothing reads
/// configuration from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            target_fps: FPS,
        }
    }
}

impl GameConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.window_width as f32, self.window_height as f32)
    }

    /// Integer milliseconds per frame. A zero FPS is treated as one.
    pub fn frame_target_ms(&self) -> u64 {
        1000 / u64::from(self.target_fps.max(1))
    }
}
