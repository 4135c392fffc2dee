//! Level configuration
//!
//! A level fixes the palette the master sequence is drawn from, the sequence
//! length, how many option buttons are shown and how many successful rounds
//! are needed before moving on. Levels are 1-based; lookups past the end of
//! the table clamp to the last configured level.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{palette, MnemoError, MnemoResult, Symbol};

/// Difficulty tier configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Level number (1-based)
    pub level: u32,
    /// Symbols the master sequence and padding options are drawn from
    pub palette: Vec<Symbol>,
    /// Length of the master sequence
    pub sequence_length: usize,
    /// Number of option buttons shown to the player
    pub option_count: usize,
    /// Successful rounds needed to advance past this level
    pub successes_required: u32,
}

impl LevelConfig {
    pub fn new(
        level: u32,
        palette: Vec<Symbol>,
        sequence_length: usize,
        option_count: usize,
        successes_required: u32,
    ) -> Self {
        LevelConfig {
            level,
            palette,
            sequence_length,
            option_count,
            successes_required,
        }
    }

    /// Option count actually achievable with this palette
    #[inline]
    pub fn effective_option_count(&self) -> usize {
        self.option_count.min(self.palette.len())
    }

    /// Check whether a symbol belongs to this level's palette
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.palette.contains(symbol)
    }

    fn validate(&self) -> MnemoResult<()> {
        if self.palette.is_empty() {
            return Err(MnemoError::EmptyPalette { level: self.level });
        }
        if self.sequence_length == 0 {
            return Err(MnemoError::ZeroSequenceLength { level: self.level });
        }
        if self.successes_required == 0 {
            return Err(MnemoError::ZeroSuccessesRequired { level: self.level });
        }

        let mut seen = HashSet::new();
        for symbol in &self.palette {
            if !seen.insert(symbol) {
                return Err(MnemoError::DuplicateSymbol {
                    level: self.level,
                    symbol: symbol.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Ordered, validated list of levels
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelConfig>", into = "Vec<LevelConfig>")]
pub struct LevelTable {
    levels: Vec<LevelConfig>,
}

impl LevelTable {
    /// Create a level table
    ///
    /// Levels must be numbered 1, 2, 3... in order.
    pub fn new(levels: Vec<LevelConfig>) -> MnemoResult<Self> {
        if levels.is_empty() {
            return Err(MnemoError::EmptyLevelTable);
        }

        for (i, config) in levels.iter().enumerate() {
            let expected = i as u32 + 1;
            if config.level != expected {
                return Err(MnemoError::LevelOutOfOrder {
                    expected,
                    actual: config.level,
                });
            }
            config.validate()?;
        }

        Ok(LevelTable { levels })
    }

    /// Resolve a level, clamping to the nearest configured level
    pub fn get(&self, level: u32) -> &LevelConfig {
        let index = (level.max(1) as usize - 1).min(self.levels.len() - 1);
        &self.levels[index]
    }

    /// Highest configured level
    #[inline]
    pub fn max_level(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Is this the final configured level (or beyond)?
    #[inline]
    pub fn is_final(&self, level: u32) -> bool {
        level >= self.max_level()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelConfig> {
        self.levels.iter()
    }

    pub fn as_slice(&self) -> &[LevelConfig] {
        &self.levels
    }
}

impl Default for LevelTable {
    /// Five fruit levels, each adding one fruit to the palette
    fn default() -> Self {
        const FRUITS: [&str; 8] = ["🍎", "🍌", "🍇", "🍉", "🍓", "🥝", "🥭", "🍍"];

        let levels = (1..=5u32)
            .map(|level| {
                let n = level as usize;
                LevelConfig::new(level, palette(&FRUITS[..n + 3]), n + 2, n + 2, level + 1)
            })
            .collect();

        LevelTable { levels }
    }
}

impl TryFrom<Vec<LevelConfig>> for LevelTable {
    type Error = MnemoError;

    fn try_from(levels: Vec<LevelConfig>) -> Result<Self, Self::Error> {
        LevelTable::new(levels)
    }
}

impl From<LevelTable> for Vec<LevelConfig> {
    fn from(table: LevelTable) -> Self {
        table.levels
    }
}
