//! Symbols - the emoji shown in sequences and on option buttons

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MnemoError;

/// One emoji symbol
///
/// Compared by exact string value, so variation selectors matter.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol, rejecting empty strings
    pub fn new(value: impl Into<String>) -> Result<Self, MnemoError> {
        let value = value.into();
        if value.is_empty() {
            return Err(MnemoError::EmptySymbol);
        }
        Ok(Symbol(value))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl FromStr for Symbol {
    type Err = MnemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::new(s)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build a palette from string literals, skipping empty entries
pub fn palette(symbols: &[&str]) -> Vec<Symbol> {
    symbols.iter().filter_map(|s| Symbol::new(*s).ok()).collect()
}
