//! Input: platform-neutral events mapped to game actions.
//!
//! # Invariants
//! - The world consumes actions, never raw platform events.
//! - Under the default policy at most one pending event is handled per frame.

pub mod action;
pub mod event;
pub mod queue;

pub use action::Action;
pub use event::{InputEvent, Key, ParseEventError};
pub use queue::{EventQueue, PollPolicy};
