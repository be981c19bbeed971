use anyhow::{Context, Result};
use boxfield_common::GameConfig;
use boxfield_game::GameLoop;
use boxfield_input::{EventQueue, InputEvent, Key, PollPolicy};
use boxfield_kernel::{FrameClock, SystemTicks, World, wall_clock_seed};
use boxfield_render_wgpu::WgpuRenderer;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "boxfield-desktop", about = "Move the ball with the arrow keys")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Seed for enemy placement (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Handle every pending input event each frame instead of one
    #[arg(long)]
    drain_events: bool,
}

/// Translate a physical key into the game's key vocabulary.
fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::Escape => Key::Escape,
        KeyCode::KeyR => Key::Reset,
        _ => Key::Other,
    }
}

struct DesktopApp {
    game: Option<GameLoop<WgpuRenderer, SystemTicks>>,
    window: Option<Arc<Window>>,
    config: GameConfig,
    seed: u64,
    policy: PollPolicy,
    init_error: Option<anyhow::Error>,
}

impl DesktopApp {
    fn new(config: GameConfig, seed: u64, policy: PollPolicy) -> Self {
        Self {
            game: None,
            window: None,
            config,
            seed,
            policy,
            init_error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("boxfield")
            .with_inner_size(PhysicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ))
            .with_decorations(false)
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        let renderer = WgpuRenderer::new(
            window.clone(),
            size.width,
            size.height,
            self.config.bounds(),
        )
        .context("failed to create renderer")?;

        let world = World::with_seed(self.config.bounds(), self.seed);
        let clock = FrameClock::new(SystemTicks::new(), self.config.frame_target_ms());
        self.game = Some(GameLoop::new(
            world,
            EventQueue::new(self.policy),
            clock,
            renderer,
        ));
        self.window = Some(window);
        Ok(())
    }

    /// Release the renderer and its surface, then the window.
    ///
    /// Runs while the event loop is still alive, which `run_app` drops on
    /// return.
    fn release(&mut self) {
        if let Some(game) = self.game.take() {
            tracing::debug!(frames = game.frames(), "releasing renderer");
            drop(game);
        }
        if self.window.take().is_some() {
            tracing::debug!("window closed");
        }
    }
}

impl ApplicationHandler for DesktopApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_error.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            tracing::error!("{e:#}");
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(game) = &mut self.game else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => game.push_event(InputEvent::Quit),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let key = map_key(code);
                game.push_event(match state {
                    ElementState::Pressed => InputEvent::KeyDown(key),
                    ElementState::Released => InputEvent::KeyUp(key),
                });
            }
            WindowEvent::Resized(size) => {
                game.renderer_mut().resize(size.width, size.height);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(game) = &mut self.game else {
            return;
        };

        game.iterate();
        // Nothing replays the desktop run.
        game.drain_events();
        if !game.is_running() {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.release();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let seed = cli.seed.unwrap_or_else(wall_clock_seed);
    let policy = if cli.drain_events {
        PollPolicy::DrainAll
    } else {
        PollPolicy::OnePerFrame
    };
    tracing::info!(seed, ?policy, "boxfield-desktop starting");

    let event_loop = EventLoop::new().context("failed to initialize windowing")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DesktopApp::new(GameConfig::default(), seed, policy);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.init_error.take() {
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(map_key(KeyCode::ArrowLeft), Key::Left);
        assert_eq!(map_key(KeyCode::ArrowRight), Key::Right);
        assert_eq!(map_key(KeyCode::ArrowUp), Key::Up);
        assert_eq!(map_key(KeyCode::ArrowDown), Key::Down);
    }

    #[test]
    fn release_before_init_is_harmless() {
        let mut app = DesktopApp::new(GameConfig::default(), 1, PollPolicy::OnePerFrame);
        app.release();
        app.release();
        assert!(app.game.is_none());
        assert!(app.window.is_none());
        assert!(app.init_error.is_none());
    }

    #[test]
    fn control_keys_map() {
        assert_eq!(map_key(KeyCode::Escape), Key::Escape);
        assert_eq!(map_key(KeyCode::KeyR), Key::Reset);
        assert_eq!(map_key(KeyCode::Space), Key::Other);
    }
}
