//! Presentation Driver - per-round reveal state machine
//!
//! ```text
//! Idle → Revealing{0} → Revealing{1} → … → AwaitingInput → Resolved
//!   ↑                                                          │
//!   └──────────────── next round / reset ──────────────────────┘
//! ```
//!
//! While `Revealing`, exactly one sequence item is active at a time. Only
//! `AwaitingInput` accepts choices; choices in any other phase are dropped.

use std::time::Duration;

use mnemo_core::Symbol;
use serde::{Deserialize, Serialize};

use crate::Host;

/// Reveal speed: `max(base - level*step, floor)` milliseconds per item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    pub base_ms: u64,
    pub step_ms: u64,
    pub floor_ms: u64,
}

impl RevealTiming {
    /// How long each item stays active at a level
    pub fn item_duration(&self, level: u32) -> Duration {
        let shortened = self
            .base_ms
            .saturating_sub(self.step_ms.saturating_mul(level as u64));
        Duration::from_millis(shortened.max(self.floor_ms))
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        RevealTiming {
            base_ms: 800,
            step_ms: 50,
            floor_ms: 300,
        }
    }
}

/// Round phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No round in progress
    Idle,
    /// Showing the item at `index`
    Revealing { index: usize },
    /// Options are up, choices are accepted
    AwaitingInput,
    /// Round decided, feedback playing
    Resolved,
}

/// Result of advancing the reveal by one item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// Another item is now active; advance again after this long
    Next(Duration),
    /// Every item has been shown and the display cleared
    Finished,
}

/// Drives the host's sequence display and option buttons
#[derive(Debug)]
pub struct PresentationDriver {
    phase: Phase,
    timing: RevealTiming,
    item_duration: Duration,
}

impl PresentationDriver {
    pub fn new(timing: RevealTiming) -> Self {
        PresentationDriver {
            phase: Phase::Idle,
            timing,
            item_duration: timing.item_duration(1),
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::AwaitingInput
    }

    pub fn timing(&self) -> RevealTiming {
        self.timing
    }

    /// Start revealing a master sequence
    ///
    /// Returns how long the first item stays active.
    pub fn begin_reveal<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        master: &[Symbol],
        level: u32,
    ) -> RevealStep {
        host.clear_options();
        host.clear_sequence();
        host.render_sequence(master);

        self.item_duration = self.timing.item_duration(level);

        if master.is_empty() {
            self.phase = Phase::Revealing { index: 0 };
            return RevealStep::Finished;
        }

        host.highlight(0, true);
        self.phase = Phase::Revealing { index: 0 };
        RevealStep::Next(self.item_duration)
    }

    /// Deactivate the current item and activate the next one
    pub fn advance_reveal<H: Host + ?Sized>(&mut self, host: &mut H, master: &[Symbol]) -> RevealStep {
        let Phase::Revealing { index } = self.phase else {
            return RevealStep::Finished;
        };

        if index < master.len() {
            host.highlight(index, false);
        }

        let next = index + 1;
        if next < master.len() {
            host.highlight(next, true);
            self.phase = Phase::Revealing { index: next };
            RevealStep::Next(self.item_duration)
        } else {
            host.clear_sequence();
            RevealStep::Finished
        }
    }

    /// Put up the option buttons and start accepting choices
    pub fn await_input<H: Host + ?Sized>(&mut self, host: &mut H, options: &[Symbol]) {
        host.show_options(options);
        self.phase = Phase::AwaitingInput;
    }

    /// Stop accepting choices while feedback plays
    pub fn resolve(&mut self) {
        self.phase = Phase::Resolved;
    }

    /// Clear the display and go back to idle
    pub fn reset<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.phase != Phase::Idle {
            host.clear_sequence();
            host.clear_options();
        }
        self.phase = Phase::Idle;
    }
}

impl Default for PresentationDriver {
    fn default() -> Self {
        Self::new(RevealTiming::default())
    }
}
