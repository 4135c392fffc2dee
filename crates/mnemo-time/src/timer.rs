//! Single-slot step timer
//!
//! The reveal animation and feedback delays never overlap: at most one step
//! is pending at any time. Scheduling replaces (and so cancels) whatever was
//! pending, which is how a new round supersedes a stale animation.

use std::time::Duration;

use mnemo_core::GameTime;
use tracing::trace;

#[derive(Clone, Debug)]
struct Pending<S> {
    due: GameTime,
    step: S,
}

/// Holds at most one pending step of type `S`
#[derive(Clone, Debug)]
pub struct TimerSlot<S> {
    pending: Option<Pending<S>>,
}

impl<S> TimerSlot<S> {
    pub fn new() -> Self {
        TimerSlot { pending: None }
    }

    /// Schedule `step` to fire `delay` after `now`, cancelling any pending step
    pub fn schedule(&mut self, now: GameTime, delay: Duration, step: S) {
        let due = now + delay;
        if let Some(old) = self.pending.replace(Pending { due, step }) {
            trace!(stale_due = ?old.due, ?due, "superseding pending step");
        }
    }

    /// Drop the pending step, returning whether one was pending
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Take the pending step if its deadline has passed
    pub fn poll(&mut self, now: GameTime) -> Option<S> {
        match &self.pending {
            Some(p) if p.due <= now => self.pending.take().map(|p| p.step),
            _ => None,
        }
    }

    /// Deadline of the pending step
    pub fn due(&self) -> Option<GameTime> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Peek at the pending step
    pub fn peek(&self) -> Option<&S> {
        self.pending.as_ref().map(|p| &p.step)
    }
}

impl<S> Default for TimerSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}
