//! Game state
//!
//! One `GameState` value is owned by the engine for the lifetime of a game.
//! It is created on the first play action, mutated by round outcomes and
//! reset on a new game or once the result has been shown.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{GameTime, LevelConfig, MnemoError};

/// Counters and flags for a running game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Current level (1-based)
    pub level: u32,
    /// Successful rounds in the current level
    pub successes_in_level: u32,
    /// Successful rounds across the whole game
    pub correct_sequences: u32,
    /// Failed rounds across the whole game
    pub errors: u32,
    /// When the first round of the session started
    pub started_at: Option<GameTime>,
    /// Input is dropped while locked
    pub locked: bool,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            level: 1,
            successes_in_level: 0,
            correct_sequences: 0,
            errors: 0,
            started_at: None,
            locked: false,
        }
    }

    /// Reset everything back to a fresh game
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    /// Record the session start if not already recorded
    pub fn mark_started(&mut self, now: GameTime) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Record a fully matched round
    pub fn record_success(&mut self) {
        self.correct_sequences += 1;
        self.successes_in_level += 1;
    }

    /// Record a mismatched round
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Has the current level's success requirement been met?
    pub fn level_complete(&self, config: &LevelConfig) -> bool {
        self.successes_in_level >= config.successes_required
    }

    /// Move to the next level and clear the in-level counter
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.successes_in_level = 0;
    }

    /// Progress snapshot for the host's level indicator
    pub fn progress(&self, config: &LevelConfig) -> LevelProgress {
        LevelProgress {
            level: self.level,
            successes: self.successes_in_level,
            required: config.successes_required,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Level progress as shown to the player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    pub successes: u32,
    pub required: u32,
}

/// Why a game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// A choice did not match the master sequence
    #[serde(rename = "erro")]
    Error,
    /// The final level's success requirement was met
    #[serde(rename = "vitoria")]
    Victory,
    /// The host asked for the result
    #[serde(rename = "manual")]
    Manual,
}

impl EndReason {
    /// Token handed to hosts
    pub fn as_str(self) -> &'static str {
        match self {
            EndReason::Error => "erro",
            EndReason::Victory => "vitoria",
            EndReason::Manual => "manual",
        }
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndReason {
    type Err = MnemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "erro" => Ok(EndReason::Error),
            "vitoria" => Ok(EndReason::Victory),
            "manual" => Ok(EndReason::Manual),
            other => Err(MnemoError::UnknownEndReason(other.to_string())),
        }
    }
}
