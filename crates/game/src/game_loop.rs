use crate::handler::{InputHandler, LoopState};
use boxfield_input::{EventQueue, InputEvent};
use boxfield_kernel::{FrameClock, TickSource, World, WorldEvent};
use boxfield_render::{Frame, Renderer};

/// Drives input, update and render once per iteration.
///
/// A `GameLoop` only exists once the window and renderer are up, so it
/// starts `Running`. It owns the world, the renderer and the clock for its
/// whole lifetime.
pub struct GameLoop<R, T> {
    world: World,
    events: EventQueue,
    clock: FrameClock<T>,
    renderer: R,
    state: LoopState,
    frames: u64,
}

impl<R: Renderer, T: TickSource> GameLoop<R, T> {
    pub fn new(world: World, events: EventQueue, clock: FrameClock<T>, renderer: R) -> Self {
        tracing::info!(
            seed = world.seed(),
            target_ms = clock.target_ms(),
            policy = ?events.policy(),
            "game loop running"
        );
        Self {
            world,
            events,
            clock,
            renderer,
            state: LoopState::Running,
            frames: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn clock(&self) -> &FrameClock<T> {
        &self.clock
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Events waiting for a later iteration.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Take the world's event log, leaving it empty.
    ///
    /// Long-running hosts that never replay call this every iteration so
    /// the log stays bounded.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        self.world.drain_events()
    }

    /// Queue an event from the windowing layer.
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Run one iteration.
    ///
    /// Returns the renderer output, or `None` when the loop is stopped,
    /// either before the call or by this iteration's input. A stopping
    /// iteration does not update or render.
    pub fn iterate(&mut self) -> Option<R::Output> {
        if self.state == LoopState::Stopped {
            return None;
        }

        let events = self.events.poll();
        if InputHandler::handle(&mut self.world, events) == LoopState::Stopped {
            self.stop();
            return None;
        }

        let delta_time = self.clock.tick();
        self.world.step(delta_time);

        let frame = Frame::from_world(&self.world);
        let output = self.renderer.render(&frame);
        self.frames += 1;
        Some(output)
    }

    /// Iterate until stopped.
    pub fn run(&mut self) {
        while self.iterate().is_some() {}
    }

    /// Enter the terminal state.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            tracing::info!(frames = self.frames, tick = self.world.tick(), "game loop stopped");
        }
        self.state = LoopState::Stopped;
    }

    /// Tear the loop down, handing back the world.
    pub fn into_world(self) -> World {
        self.world
    }
}
