//! End-of-game results

use serde::Serialize;

use crate::EndReason;

/// Score band used by hosts to colour the result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub const HIGH_THRESHOLD: u32 = 120;
    pub const MEDIUM_THRESHOLD: u32 = 80;

    pub fn from_score(score: u32) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            ScoreTier::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}

/// Summary written to the host's result view
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultSummary {
    pub reason: EndReason,
    /// Derived IQ/concentration value, already clamped
    pub score: u32,
    pub correct_sequences: u32,
    pub errors: u32,
    /// Correct over attempted, 0 with no attempts
    pub accuracy: f64,
    /// Whole seconds since the session started
    pub elapsed_secs: u64,
    /// Level the player was on when the game ended
    pub level: u32,
    pub tier: ScoreTier,
}

impl ResultSummary {
    /// Elapsed time formatted the way result screens show it
    pub fn elapsed_label(&self) -> String {
        format!("{}s", self.elapsed_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ScoreTier::from_score(150), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(120), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(119), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(80), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(79), ScoreTier::Low);
        assert_eq!(ScoreTier::from_score(50), ScoreTier::Low);
    }

    #[test]
    fn test_elapsed_label() {
        let summary = ResultSummary {
            reason: EndReason::Manual,
            score: 70,
            correct_sequences: 0,
            errors: 0,
            accuracy: 0.0,
            elapsed_secs: 42,
            level: 1,
            tier: ScoreTier::Low,
        };
        assert_eq!(summary.elapsed_label(), "42s");
    }
}
