//! Sequence generation and option pools

use mnemo_core::{LevelConfig, MnemoError, MnemoResult, Symbol};
use rand::seq::SliceRandom;
use rand::Rng;

/// Draw a master sequence for a level
///
/// Each position is an independent uniform draw (with replacement) from the
/// level palette.
pub fn generate_sequence<R: Rng + ?Sized>(rng: &mut R, config: &LevelConfig) -> Vec<Symbol> {
    (0..config.sequence_length)
        .filter_map(|_| config.palette.choose(rng).cloned())
        .collect()
}

/// Check a caller-supplied master sequence against a level
pub fn validate_sequence(sequence: &[Symbol], config: &LevelConfig) -> MnemoResult<()> {
    if sequence.len() != config.sequence_length {
        return Err(MnemoError::InvalidSequenceLength {
            level: config.level,
            expected: config.sequence_length,
            actual: sequence.len(),
        });
    }

    if let Some(stray) = sequence.iter().find(|s| !config.contains(s)) {
        return Err(MnemoError::SymbolNotInPalette {
            level: config.level,
            symbol: stray.to_string(),
        });
    }

    Ok(())
}

/// Distinct symbols of a sequence, in first-seen order
pub fn distinct_symbols(sequence: &[Symbol]) -> Vec<Symbol> {
    let mut distinct: Vec<Symbol> = Vec::with_capacity(sequence.len());
    for symbol in sequence {
        if !distinct.contains(symbol) {
            distinct.push(symbol.clone());
        }
    }
    distinct
}

/// Build the shuffled option buttons for a round
///
/// The pool always holds every distinct symbol of the master sequence, padded
/// with distinct palette symbols up to the level's option count (or the
/// palette size, if smaller). The final order is a uniform permutation.
pub fn build_option_pool<R: Rng + ?Sized>(
    rng: &mut R,
    master: &[Symbol],
    config: &LevelConfig,
) -> Vec<Symbol> {
    let mut pool = distinct_symbols(master);
    let target = config.effective_option_count();

    if pool.len() < target {
        let candidates: Vec<&Symbol> = config
            .palette
            .iter()
            .filter(|s| !pool.contains(s))
            .collect();
        let needed = target - pool.len();
        pool.extend(candidates.choose_multiple(rng, needed).map(|s| (*s).clone()));
    }

    // Fisher-Yates
    pool.shuffle(rng);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnemo_core::{palette, LevelTable};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn level_one() -> LevelConfig {
        LevelTable::default().get(1).clone()
    }

    #[test]
    fn test_generated_sequence_matches_level() {
        let table = LevelTable::default();
        let mut rng = StdRng::seed_from_u64(7);

        for config in table.iter() {
            for _ in 0..50 {
                let seq = generate_sequence(&mut rng, config);
                assert_eq!(seq.len(), config.sequence_length);
                assert!(seq.iter().all(|s| config.contains(s)));
            }
        }
    }

    #[test]
    fn test_sequence_draws_with_replacement() {
        // One-symbol palette must still fill a long sequence
        let config = LevelConfig::new(1, palette(&["🍎"]), 5, 1, 1);
        let mut rng = StdRng::seed_from_u64(1);
        let seq = generate_sequence(&mut rng, &config);
        assert_eq!(seq.len(), 5);
        assert!(seq.iter().all(|s| s.as_str() == "🍎"));
    }

    #[test]
    fn test_pool_keeps_master_symbols_and_pads() {
        let config = level_one();
        let master = palette(&["🍎", "🍎", "🍌"]);
        let mut rng = StdRng::seed_from_u64(3);

        let pool = build_option_pool(&mut rng, &master, &config);
        assert_eq!(pool.len(), 3);
        assert!(master.iter().all(|s| pool.contains(s)));

        let unique: HashSet<_> = pool.iter().collect();
        assert_eq!(unique.len(), pool.len());
    }

    #[test]
    fn test_pool_never_drops_master_symbols() {
        // More distinct master symbols than the option count
        let config = LevelConfig::new(1, palette(&["🍎", "🍌", "🍇", "🍉"]), 4, 2, 1);
        let master = palette(&["🍎", "🍌", "🍇", "🍉"]);
        let mut rng = StdRng::seed_from_u64(11);

        let pool = build_option_pool(&mut rng, &master, &config);
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn test_pool_limited_by_palette() {
        let config = LevelConfig::new(1, palette(&["🍎", "🍌"]), 2, 6, 1);
        let master = palette(&["🍎", "🍎"]);
        let mut rng = StdRng::seed_from_u64(5);

        let pool = build_option_pool(&mut rng, &master, &config);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_shuffle_is_not_rotation_biased() {
        // Every symbol should land in first position roughly equally often
        let config = LevelConfig::new(1, palette(&["🍎", "🍌", "🍇"]), 3, 3, 1);
        let master = palette(&["🍎", "🍌", "🍇"]);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut first: HashMap<Symbol, u32> = HashMap::new();

        let trials = 6000;
        for _ in 0..trials {
            let pool = build_option_pool(&mut rng, &master, &config);
            *first.entry(pool[0].clone()).or_default() += 1;
        }

        for symbol in &master {
            let count = first.get(symbol).copied().unwrap_or(0);
            assert!((1700..=2300).contains(&count), "{symbol}: {count}");
        }
    }

    #[test]
    fn test_validate_sequence() {
        let config = level_one();
        assert!(validate_sequence(&palette(&["🍎", "🍌", "🍇"]), &config).is_ok());

        assert!(matches!(
            validate_sequence(&palette(&["🍎"]), &config),
            Err(MnemoError::InvalidSequenceLength { expected: 3, actual: 1, .. })
        ));

        assert!(matches!(
            validate_sequence(&palette(&["🍎", "🍍", "🍇"]), &config),
            Err(MnemoError::SymbolNotInPalette { level: 1, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_pool_contains_master_and_hits_option_count(seed in any::<u64>(), level in 1u32..=5) {
            let table = LevelTable::default();
            let config = table.get(level);
            let mut rng = StdRng::seed_from_u64(seed);

            let master = generate_sequence(&mut rng, config);
            let pool = build_option_pool(&mut rng, &master, config);

            for symbol in &master {
                prop_assert!(pool.contains(symbol));
            }
            let distinct = distinct_symbols(&master).len();
            prop_assert_eq!(pool.len(), distinct.max(config.effective_option_count()));
            prop_assert!(pool.iter().all(|s| config.contains(s)));
        }
    }
}
