//! Error types for Mnemo

use thiserror::Error;

/// Core Mnemo errors
///
/// A wrong choice is never an error; these only cover invalid configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnemoError {
    // Level table errors
    #[error("Level table is empty")]
    EmptyLevelTable,

    #[error("Level {level} has an empty palette")]
    EmptyPalette { level: u32 },

    #[error("Level {level} has a zero sequence length")]
    ZeroSequenceLength { level: u32 },

    #[error("Level {level} requires zero successes to advance")]
    ZeroSuccessesRequired { level: u32 },

    #[error("Level numbers must be consecutive from 1: expected {expected}, got {actual}")]
    LevelOutOfOrder { expected: u32, actual: u32 },

    #[error("Level {level} has duplicate symbol {symbol} in its palette")]
    DuplicateSymbol { level: u32, symbol: String },

    // Sequence errors
    #[error("Level {level} expects a sequence of {expected} symbols, got {actual}")]
    InvalidSequenceLength {
        level: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Symbol {symbol} is not in the palette of level {level}")]
    SymbolNotInPalette { level: u32, symbol: String },

    // Scoring errors
    #[error("Invalid score bounds: min {min} > max {max}")]
    InvalidScoreBounds { min: u32, max: u32 },

    #[error("Unknown scoring policy: {0}")]
    UnknownScoringPolicy(String),

    // Symbol errors
    #[error("Symbol must not be empty")]
    EmptySymbol,

    #[error("Unknown end reason: {0}")]
    UnknownEndReason(String),
}

/// Result type for Mnemo operations
pub type MnemoResult<T> = Result<T, MnemoError>;
