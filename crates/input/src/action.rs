use crate::event::{InputEvent, Key};
use boxfield_common::BALL_SPEED;

/// A high-level action produced from an input event.
///
/// The game loop consumes actions, never raw input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Stop the game loop.
    Quit,
    /// Replace the ball's horizontal velocity.
    SetVelocityX(f32),
    /// Replace the ball's vertical velocity.
    SetVelocityY(f32),
    /// Move the ball back to the window center.
    ResetBall,
    /// Event with no effect on the game.
    Noop,
}

impl Action {
    /// Map one input event to the action it triggers.
    ///
    /// Direction presses set a component to `±BALL_SPEED` (screen y grows
    /// downward, so up is negative); releases zero that component. The reset
    /// key acts on release.
    pub fn from_event(event: InputEvent) -> Self {
        match event {
            InputEvent::Quit => Self::Quit,
            InputEvent::KeyDown(key) => match key {
                Key::Escape => Self::Quit,
                Key::Left => Self::SetVelocityX(-BALL_SPEED),
                Key::Right => Self::SetVelocityX(BALL_SPEED),
                Key::Up => Self::SetVelocityY(-BALL_SPEED),
                Key::Down => Self::SetVelocityY(BALL_SPEED),
                Key::Reset | Key::Other => Self::Noop,
            },
            InputEvent::KeyUp(key) => match key {
                Key::Left | Key::Right => Self::SetVelocityX(0.0),
                Key::Up | Key::Down => Self::SetVelocityY(0.0),
                Key::Reset => Self::ResetBall,
                Key::Escape | Key::Other => Self::Noop,
            },
        }
    }
}

impl From<InputEvent> for Action {
    fn from(event: InputEvent) -> Self {
        Self::from_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_and_escape_stop() {
        assert_eq!(Action::from_event(InputEvent::Quit), Action::Quit);
        assert_eq!(
            Action::from_event(InputEvent::KeyDown(Key::Escape)),
            Action::Quit
        );
        assert_eq!(
            Action::from_event(InputEvent::KeyUp(Key::Escape)),
            Action::Noop
        );
    }

    #[test]
    fn horizontal_keys_are_symmetric() {
        assert_eq!(
            Action::from_event(InputEvent::KeyDown(Key::Left)),
            Action::SetVelocityX(-400.0)
        );
        assert_eq!(
            Action::from_event(InputEvent::KeyDown(Key::Right)),
            Action::SetVelocityX(400.0)
        );
        assert_eq!(
            Action::from_event(InputEvent::KeyUp(Key::Left)),
            Action::SetVelocityX(0.0)
        );
        assert_eq!(
            Action::from_event(InputEvent::KeyUp(Key::Right)),
            Action::SetVelocityX(0.0)
        );
    }

    #[test]
    fn vertical_keys_are_symmetric() {
        assert_eq!(
            Action::from_event(InputEvent::KeyDown(Key::Up)),
            Action::SetVelocityY(-400.0)
        );
        assert_eq!(
            Action::from_event(InputEvent::KeyDown(Key::Down)),
            Action::SetVelocityY(400.0)
        );
        assert_eq!(
            Action::from_event(InputEvent::KeyUp(Key::Down)),
            Action::SetVelocityY(0.0)
        );
    }

    #[test]
    fn reset_fires_on_release_only() {
        assert_eq!(
            Action::from_event(InputEvent::KeyDown(Key::Reset)),
            Action::Noop
        );
        assert_eq!(
            Action::from_event(InputEvent::KeyUp(Key::Reset)),
            Action::ResetBall
        );
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(Action::from(InputEvent::KeyDown(Key::Other)), Action::Noop);
        assert_eq!(Action::from(InputEvent::KeyUp(Key::Other)), Action::Noop);
    }
}
