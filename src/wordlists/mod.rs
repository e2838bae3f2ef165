//! Word pools for Bulls and Cows
//!
//! Provides the embedded default pool compiled into the binary and loaders for
//! custom pools.

mod embedded;
pub mod loader;
mod pool;

pub use embedded::{DEFAULT_TIERS, DEFAULT_TIERS_COUNT};
pub use pool::{PoolError, Tier, WordPool};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    #[test]
    fn tier_count_matches_const() {
        assert_eq!(DEFAULT_TIERS.len(), DEFAULT_TIERS_COUNT);
    }

    #[test]
    fn one_tier_per_difficulty() {
        assert_eq!(DEFAULT_TIERS_COUNT, usize::from(Difficulty::MAX_LEVEL));
    }

    #[test]
    fn default_words_are_lowercase() {
        for &(_, words) in DEFAULT_TIERS {
            for word in words {
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn default_easy_tier_contains_documented_words() {
        let (tries, words) = DEFAULT_TIERS[0];
        assert_eq!(tries, 4);
        assert!(words.contains(&"ape"));
        assert!(words.contains(&"bot"));
    }
}
