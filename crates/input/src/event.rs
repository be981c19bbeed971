use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keys the game reacts to. Every other key maps to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Escape,
    /// Re-centers the ball on release (`R`).
    Reset,
    Other,
}

/// An input event delivered by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("empty event token")]
    Empty,
    #[error("unknown key {0:?}")]
    UnknownKey(String),
    #[error("event {0:?} must start with '+' (press) or '-' (release), or be \"quit\"")]
    MissingDirection(String),
}

impl Key {
    fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
            Self::Escape => "esc",
            Self::Reset => "r",
            Self::Other => "other",
        }
    }
}

impl FromStr for Key {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "esc" | "escape" => Ok(Self::Escape),
            "r" | "reset" => Ok(Self::Reset),
            "other" => Ok(Self::Other),
            _ => Err(ParseEventError::UnknownKey(s.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Script syntax used by the headless runner: `+key` is a press, `-key` a
/// release, and `quit` a close request.
impl FromStr for InputEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseEventError::Empty);
        }
        if s.eq_ignore_ascii_case("quit") {
            return Ok(Self::Quit);
        }
        if let Some(key) = s.strip_prefix('+') {
            Ok(Self::KeyDown(key.parse()?))
        } else if let Some(key) = s.strip_prefix('-') {
            Ok(Self::KeyUp(key.parse()?))
        } else {
            Err(ParseEventError::MissingDirection(s.to_string()))
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit => f.write_str("quit"),
            Self::KeyDown(key) => write!(f, "+{key}"),
            Self::KeyUp(key) => write!(f, "-{key}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_press_and_release() {
        assert_eq!("+left".parse(), Ok(InputEvent::KeyDown(Key::Left)));
        assert_eq!("-Right".parse(), Ok(InputEvent::KeyUp(Key::Right)));
        assert_eq!("+escape".parse(), Ok(InputEvent::KeyDown(Key::Escape)));
        assert_eq!("-r".parse(), Ok(InputEvent::KeyUp(Key::Reset)));
        assert_eq!(" QUIT ".parse(), Ok(InputEvent::Quit));
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!("".parse::<InputEvent>(), Err(ParseEventError::Empty));
        assert_eq!(
            "left".parse::<InputEvent>(),
            Err(ParseEventError::MissingDirection("left".into()))
        );
        assert_eq!(
            "+space".parse::<InputEvent>(),
            Err(ParseEventError::UnknownKey("space".into()))
        );
    }

    #[test]
    fn display_parses_back() {
        for event in [
            InputEvent::Quit,
            InputEvent::KeyDown(Key::Up),
            InputEvent::KeyUp(Key::Reset),
            InputEvent::KeyDown(Key::Escape),
        ] {
            assert_eq!(event.to_string().parse(), Ok(event));
        }
    }
}
