use crate::event::InputEvent;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How many pending events a single frame consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PollPolicy {
    /// Handle at most one event per frame. Under rapid input the rest wait
    /// for later frames.
    #[default]
    OnePerFrame,
    /// Handle everything pending.
    DrainAll,
}

/// FIFO buffer between the windowing layer and the game loop.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<InputEvent>,
    policy: PollPolicy,
}

impl EventQueue {
    pub fn new(policy: PollPolicy) -> Self {
        Self {
            pending: VecDeque::new(),
            policy,
        }
    }

    pub fn policy(&self) -> PollPolicy {
        self.policy
    }

    pub fn push(&mut self, event: InputEvent) {
        tracing::trace!(%event, "input queued");
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take this frame's events in arrival order. Empty when nothing is pending.
    pub fn poll(&mut self) -> Vec<InputEvent> {
        match self.policy {
            PollPolicy::OnePerFrame => self.pending.pop_front().into_iter().collect(),
            PollPolicy::DrainAll => self.pending.drain(..).collect(),
        }
    }
}

impl Extend<InputEvent> for EventQueue {
    fn extend<I: IntoIterator<Item = InputEvent>>(&mut self, iter: I) {
        for event in iter {
            self.push(event);
        }
    }
}
