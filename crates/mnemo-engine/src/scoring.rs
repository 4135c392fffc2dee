//! Scoring policies
//!
//! The end-of-game score (shown to players as an IQ/concentration value) is
//! derived from accuracy, progress and elapsed time, then clamped. Several
//! formulas are in use, so the formula is a strategy the engine is built with.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use mnemo_core::{MnemoError, MnemoResult};
use serde::{Deserialize, Serialize};

/// Everything a policy may look at
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreInput {
    /// Fully matched rounds
    pub correct: u32,
    /// Failed rounds
    pub errors: u32,
    /// Level at the end of the game
    pub level: u32,
    /// Time since the session started
    pub elapsed: Duration,
}

impl ScoreInput {
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.correct + self.errors
    }

    /// Correct over attempted; 0 when nothing was attempted
    pub fn accuracy(&self) -> f64 {
        match self.attempts() {
            0 => 0.0,
            total => self.correct as f64 / total as f64,
        }
    }

    /// Elapsed time in whole seconds
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }
}

/// Inclusive clamp range for a score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreBounds {
    min: u32,
    max: u32,
}

impl ScoreBounds {
    pub fn new(min: u32, max: u32) -> MnemoResult<Self> {
        if min > max {
            return Err(MnemoError::InvalidScoreBounds { min, max });
        }
        Ok(ScoreBounds { min, max })
    }

    const fn fixed(min: u32, max: u32) -> Self {
        ScoreBounds { min, max }
    }

    #[inline]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Round and clamp a raw score; NaN maps to the floor
    pub fn clamp(&self, raw: f64) -> u32 {
        if raw.is_nan() {
            return self.min;
        }
        raw.round().clamp(self.min as f64, self.max as f64) as u32
    }

    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// A scoring formula
pub trait ScoringPolicy: Send + Sync {
    /// Short name used in logs and configuration
    fn name(&self) -> &'static str;

    /// Clamp range of this policy
    fn bounds(&self) -> ScoreBounds;

    /// Unclamped score
    fn raw(&self, input: &ScoreInput) -> f64;

    /// Final score
    fn score(&self, input: &ScoreInput) -> u32 {
        self.bounds().clamp(self.raw(input))
    }
}

/// Progress and speed bonus: `correct*10 + level*5 + max(0, 100 - secs)`, in 50..=150
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearScoring;

impl ScoringPolicy for LinearScoring {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn bounds(&self) -> ScoreBounds {
        ScoreBounds::fixed(50, 150)
    }

    fn raw(&self, input: &ScoreInput) -> f64 {
        let base = input.correct as f64 * 10.0 + input.level as f64 * 5.0;
        let time_bonus = 100.0 - input.elapsed_secs() as f64;
        base + time_bonus.max(0.0)
    }
}

/// Accuracy-weighted with a per-round bonus:
/// `70 + accuracy*80 - min(60, secs)*0.3 + correct*2`, in 70..=150
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedScoring;

impl ScoringPolicy for WeightedScoring {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn bounds(&self) -> ScoreBounds {
        ScoreBounds::fixed(70, 150)
    }

    fn raw(&self, input: &ScoreInput) -> f64 {
        let time_penalty = (input.elapsed_secs().min(60)) as f64 * 0.3;
        70.0 + input.accuracy() * 80.0 - time_penalty + input.correct as f64 * 2.0
    }
}

/// Accuracy-weighted with a stronger time penalty:
/// `70 + accuracy*80 - min(60, secs)*0.5`, in 70..=135
#[derive(Clone, Copy, Debug, Default)]
pub struct CappedScoring;

impl ScoringPolicy for CappedScoring {
    fn name(&self) -> &'static str {
        "capped"
    }

    fn bounds(&self) -> ScoreBounds {
        ScoreBounds::fixed(70, 135)
    }

    fn raw(&self, input: &ScoreInput) -> f64 {
        let time_penalty = (input.elapsed_secs().min(60)) as f64 * 0.5;
        70.0 + input.accuracy() * 80.0 - time_penalty
    }
}

/// Policy selector used in configuration files
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringKind {
    Linear,
    #[default]
    Weighted,
    Capped,
}

impl ScoringKind {
    pub fn policy(self) -> Box<dyn ScoringPolicy> {
        match self {
            ScoringKind::Linear => Box::new(LinearScoring),
            ScoringKind::Weighted => Box::new(WeightedScoring),
            ScoringKind::Capped => Box::new(CappedScoring),
        }
    }
}

impl fmt::Display for ScoringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.policy().name())
    }
}

impl FromStr for ScoringKind {
    type Err = MnemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(ScoringKind::Linear),
            "weighted" => Ok(ScoringKind::Weighted),
            "capped" => Ok(ScoringKind::Capped),
            _ => Err(MnemoError::UnknownScoringPolicy(s.to_string())),
        }
    }
}
