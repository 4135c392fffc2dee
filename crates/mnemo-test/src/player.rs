//! Scripted players
//!
//! A player looks at what is on screen (plus, for simulation purposes, the
//! master sequence) and picks an option button.

use std::collections::VecDeque;

use mnemo_core::Symbol;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides the next option to press
pub trait Player {
    /// Position of the option to press, or `None` to stop playing
    fn choose(&mut self, master: &[Symbol], typed: &[Symbol], options: &[Symbol]) -> Option<usize>;
}

fn position_of(options: &[Symbol], symbol: &Symbol) -> Option<usize> {
    options.iter().position(|s| s == symbol)
}

/// Always presses the right option
#[derive(Clone, Copy, Debug, Default)]
pub struct PerfectPlayer;

impl Player for PerfectPlayer {
    fn choose(&mut self, master: &[Symbol], typed: &[Symbol], options: &[Symbol]) -> Option<usize> {
        let next = master.get(typed.len())?;
        position_of(options, next)
    }
}

/// Presses a wrong option with some probability
#[derive(Clone, Debug)]
pub struct ErrorPronePlayer {
    rng: StdRng,
    error_rate: f64,
    mistakes: u32,
}

impl ErrorPronePlayer {
    pub fn new(seed: u64, error_rate: f64) -> Self {
        ErrorPronePlayer {
            rng: StdRng::seed_from_u64(seed),
            error_rate: error_rate.clamp(0.0, 1.0),
            mistakes: 0,
        }
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }
}

impl Player for ErrorPronePlayer {
    fn choose(&mut self, master: &[Symbol], typed: &[Symbol], options: &[Symbol]) -> Option<usize> {
        let next = master.get(typed.len())?;
        let right = position_of(options, next)?;

        if options.len() > 1 && self.rng.gen_bool(self.error_rate) {
            // Any other position
            let offset = self.rng.gen_range(1..options.len());
            self.mistakes += 1;
            return Some((right + offset) % options.len());
        }
        Some(right)
    }
}

/// Presses a fixed list of symbols, then stops
#[derive(Clone, Debug, Default)]
pub struct ScriptedPlayer {
    presses: VecDeque<Symbol>,
}

impl ScriptedPlayer {
    pub fn new(presses: impl IntoIterator<Item = Symbol>) -> Self {
        ScriptedPlayer {
            presses: presses.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.presses.len()
    }
}

impl Player for ScriptedPlayer {
    fn choose(&mut self, _master: &[Symbol], _typed: &[Symbol], options: &[Symbol]) -> Option<usize> {
        let symbol = self.presses.pop_front()?;
        position_of(options, &symbol)
    }
}
