use boxfield_input::{Action, InputEvent};
use boxfield_kernel::World;

/// Game loop state. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Applies input to the world.
pub struct InputHandler;

impl InputHandler {
    /// Apply one action. Returns `Stopped` for a quit request.
    pub fn apply(world: &mut World, action: Action) -> LoopState {
        match action {
            Action::Quit => return LoopState::Stopped,
            Action::SetVelocityX(v) => world.set_ball_velocity_x(v),
            Action::SetVelocityY(v) => world.set_ball_velocity_y(v),
            Action::ResetBall => world.reset_ball(),
            Action::Noop => {}
        }
        LoopState::Running
    }

    /// Map and apply events in order, stopping at the first quit request.
    pub fn handle<I>(world: &mut World, events: I) -> LoopState
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            tracing::trace!(%event, "input");
            if Self::apply(world, Action::from_event(event)) == LoopState::Stopped {
                return LoopState::Stopped;
            }
        }
        LoopState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxfield_common::Bounds;
    use boxfield_input::Key;
    use glam::Vec2;

    fn world() -> World {
        World::with_seed(Bounds::new(800.0, 600.0), 1)
    }

    #[test]
    fn key_down_sets_velocity_and_key_up_clears_it() {
        let mut w = world();
        InputHandler::handle(&mut w, [InputEvent::KeyDown(Key::Left)]);
        assert_eq!(w.ball().velocity.x, -400.0);
        InputHandler::handle(&mut w, [InputEvent::KeyDown(Key::Right)]);
        assert_eq!(w.ball().velocity.x, 400.0);
        InputHandler::handle(&mut w, [InputEvent::KeyDown(Key::Up)]);
        assert_eq!(w.ball().velocity, Vec2::new(400.0, -400.0));
        InputHandler::handle(&mut w, [InputEvent::KeyUp(Key::Right)]);
        assert_eq!(w.ball().velocity, Vec2::new(0.0, -400.0));
        InputHandler::handle(&mut w, [InputEvent::KeyUp(Key::Up)]);
        assert_eq!(w.ball().velocity, Vec2::ZERO);
    }

    #[test]
    fn reset_keeps_velocity() {
        let mut w = world();
        InputHandler::handle(&mut w, [InputEvent::KeyDown(Key::Down)]);
        w.step(0.2);
        InputHandler::handle(&mut w, [InputEvent::KeyUp(Key::Reset)]);
        assert_eq!(w.ball().position, Vec2::new(400.0, 300.0));
        assert_eq!(w.ball().velocity.y, 400.0);
    }

    #[test]
    fn quit_stops_and_skips_later_events() {
        let mut w = world();
        let state = InputHandler::handle(
            &mut w,
            [InputEvent::Quit, InputEvent::KeyDown(Key::Right)],
        );
        assert_eq!(state, LoopState::Stopped);
        assert_eq!(w.ball().velocity, Vec2::ZERO);
    }

    #[test]
    fn escape_stops() {
        let mut w = world();
        assert_eq!(
            InputHandler::handle(&mut w, [InputEvent::KeyDown(Key::Escape)]),
            LoopState::Stopped
        );
    }

    #[test]
    fn no_events_keeps_running() {
        let mut w = world();
        assert_eq!(
            InputHandler::handle(&mut w, std::iter::empty()),
            LoopState::Running
        );
    }
}
