//! Engine configuration

use mnemo_core::LevelTable;
use serde::Deserialize;

use crate::{RevealTiming, ScoringKind};

/// Sequence engine configuration
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Level table (validated on load)
    pub levels: LevelTable,
    /// Scoring formula
    pub scoring: ScoringKind,
    /// Reveal speed
    pub reveal: RevealTiming,
    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Reproducible configuration with the default levels
    pub fn seeded(seed: u64) -> Self {
        EngineConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn with_levels(mut self, levels: LevelTable) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringKind) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_reveal(mut self, reveal: RevealTiming) -> Self {
        self.reveal = reveal;
        self
    }
}
