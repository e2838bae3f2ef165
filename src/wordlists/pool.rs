//! Validated word pool
//!
//! A pool holds one tier per difficulty level. Construction checks every
//! invariant once so the game engine can index tiers and pick words freely.

use crate::core::{Difficulty, Word, WordError};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Tiers are numbered by difficulty level, starting at 1
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Word pool must have {expected} tiers, found {found}")]
    TierCount { expected: usize, found: usize },
    #[error("Tier {tier} has no words")]
    EmptyTier { tier: usize },
    #[error("Tier {tier} allows zero tries")]
    ZeroTries { tier: usize },
    #[error("Tier {tier} contains invalid word '{word}': {source}")]
    InvalidWord {
        tier: usize,
        word: String,
        source: WordError,
    },
    #[error("Tier {tier} mixes word lengths: '{word}' is not {expected} letters")]
    MixedLengths {
        tier: usize,
        word: String,
        expected: usize,
    },
    #[error("Words of length {length} are given both {first} and {second} tries")]
    ConflictingMaxTries { length: usize, first: u32, second: u32 },
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Failed to read word pool: {0}")]
    Io(#[from] std::io::Error),
}

/// Words of one length offered at one difficulty level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    word_length: usize,
    max_tries: u32,
    words: Vec<Word>,
}

impl Tier {
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Tries allotted for a hidden word from this tier
    #[inline]
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a tier inside a validated pool
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Immutable tiered word pool, one tier per difficulty level
#[derive(Debug, Clone)]
pub struct WordPool {
    tiers: Vec<Tier>,
    max_tries_by_length: FxHashMap<usize, u32>,
}

impl WordPool {
    /// Build a pool from `(max_tries, words)` tiers, easiest first
    ///
    /// # Errors
    /// Returns `PoolError` if the tier count is not [`Difficulty::MAX_LEVEL`],
    /// a tier is empty or allows zero tries, a word is not an isogram of
    /// ASCII letters, a tier mixes word lengths, or two tiers with the same
    /// word length disagree on max tries.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::wordlists::WordPool;
    ///
    /// let pool = WordPool::from_tiers([
    ///     (4, vec!["ape"]),
    ///     (7, vec!["drop"]),
    ///     (10, vec!["field"]),
    ///     (14, vec!["planet"]),
    ///     (20, vec!["isogram"]),
    ///     (30, vec!["aftershock"]),
    ///     (40, vec!["ambidextrous"]),
    /// ])
    /// .unwrap();
    /// assert_eq!(pool.max_tries_for_length(5), Some(10));
    /// ```
    pub fn from_tiers<I, W, S>(tiers: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = (u32, W)>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut built = Vec::with_capacity(usize::from(Difficulty::MAX_LEVEL));
        let mut max_tries_by_length: FxHashMap<usize, u32> = FxHashMap::default();

        for (index, (max_tries, words)) in tiers.into_iter().enumerate() {
            let tier = index + 1;
            let tier_built = build_tier(tier, max_tries, words)?;

            let length = tier_built.word_length;
            if let Some(&first) = max_tries_by_length.get(&length)
                && first != max_tries
            {
                return Err(PoolError::ConflictingMaxTries {
                    length,
                    first,
                    second: max_tries,
                });
            }
            max_tries_by_length.insert(length, max_tries);

            built.push(tier_built);
        }

        let expected = usize::from(Difficulty::MAX_LEVEL);
        if built.len() != expected {
            return Err(PoolError::TierCount {
                expected,
                found: built.len(),
            });
        }

        Ok(Self {
            tiers: built,
            max_tries_by_length,
        })
    }

    /// The default pool compiled into the binary
    ///
    /// # Errors
    /// Returns `PoolError` if `data/word_pool.txt` violates a pool invariant.
    pub fn embedded() -> Result<Self, PoolError> {
        Self::from_tiers(
            super::DEFAULT_TIERS
                .iter()
                .map(|&(max_tries, words)| (max_tries, words.iter().copied())),
        )
    }

    /// The tier played at `difficulty`
    #[inline]
    #[must_use]
    pub fn tier(&self, difficulty: Difficulty) -> &Tier {
        &self.tiers[difficulty.tier_index()]
    }

    #[inline]
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Tries allotted to a hidden word of `length` letters
    ///
    /// Returns `None` for lengths no tier produces.
    #[must_use]
    pub fn max_tries_for_length(&self, length: usize) -> Option<u32> {
        self.max_tries_by_length.get(&length).copied()
    }
}

fn build_tier<W, S>(tier: usize, max_tries: u32, words: W) -> Result<Tier, PoolError>
where
    W: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if max_tries == 0 {
        return Err(PoolError::ZeroTries { tier });
    }

    let words = words
        .into_iter()
        .map(|raw| {
            let raw = raw.as_ref();
            Word::new(raw).map_err(|source| PoolError::InvalidWord {
                tier,
                word: raw.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let Some(word_length) = words.first().map(Word::len) else {
        return Err(PoolError::EmptyTier { tier });
    };

    if let Some(odd) = words.iter().find(|w| w.len() != word_length) {
        return Err(PoolError::MixedLengths {
            tier,
            word: odd.text().to_string(),
            expected: word_length,
        });
    }

    Ok(Tier {
        word_length,
        max_tries,
        words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_word_tiers() -> Vec<(u32, Vec<&'static str>)> {
        vec![
            (4, vec!["ape"]),
            (7, vec!["drop"]),
            (10, vec!["field"]),
            (14, vec!["planet"]),
            (20, vec!["isogram"]),
            (30, vec!["aftershock"]),
            (40, vec!["ambidextrous"]),
        ]
    }

    #[test]
    fn embedded_pool_is_valid() {
        let pool = WordPool::embedded().unwrap();
        assert_eq!(pool.tiers().len(), usize::from(Difficulty::MAX_LEVEL));

        let lengths: Vec<usize> = pool.tiers().iter().map(Tier::word_length).collect();
        assert_eq!(lengths, vec![3, 4, 5, 6, 7, 10, 12]);
    }

    #[test]
    fn embedded_max_tries_table() {
        let pool = WordPool::embedded().unwrap();
        assert_eq!(pool.max_tries_for_length(3), Some(4));
        assert_eq!(pool.max_tries_for_length(4), Some(7));
        assert_eq!(pool.max_tries_for_length(5), Some(10));
        assert_eq!(pool.max_tries_for_length(6), Some(14));
        assert_eq!(pool.max_tries_for_length(7), Some(20));
        assert_eq!(pool.max_tries_for_length(10), Some(30));
        assert_eq!(pool.max_tries_for_length(12), Some(40));
        assert_eq!(pool.max_tries_for_length(8), None);
    }

    #[test]
    fn embedded_words_are_isograms_of_tier_length() {
        let pool = WordPool::embedded().unwrap();
        for tier in pool.tiers() {
            assert!(!tier.is_empty());
            for word in tier.words() {
                assert_eq!(word.len(), tier.word_length(), "'{word}' has wrong length");
                assert!(crate::core::is_isogram(word.text()), "'{word}' repeats a letter");
            }
        }
    }

    #[test]
    fn tier_lookup_by_difficulty() {
        let pool = WordPool::from_tiers(single_word_tiers()).unwrap();
        assert_eq!(pool.tier(Difficulty::EASIEST).words()[0].text(), "ape");
        assert_eq!(pool.tier(Difficulty::HARDEST).words()[0].text(), "ambidextrous");
    }

    #[test]
    fn rejects_wrong_tier_count() {
        let mut tiers = single_word_tiers();
        tiers.pop();

        assert!(matches!(
            WordPool::from_tiers(tiers),
            Err(PoolError::TierCount {
                expected: 7,
                found: 6
            })
        ));
    }

    #[test]
    fn rejects_empty_tier() {
        let mut tiers = single_word_tiers();
        tiers[2].1.clear();

        assert!(matches!(
            WordPool::from_tiers(tiers),
            Err(PoolError::EmptyTier { tier: 3 })
        ));
    }

    #[test]
    fn rejects_zero_tries() {
        let mut tiers = single_word_tiers();
        tiers[0].0 = 0;

        assert!(matches!(
            WordPool::from_tiers(tiers),
            Err(PoolError::ZeroTries { tier: 1 })
        ));
    }

    #[test]
    fn rejects_non_isogram() {
        let mut tiers = single_word_tiers();
        tiers[1].1.push("book");

        let err = WordPool::from_tiers(tiers).unwrap_err();
        assert!(matches!(
            err,
            PoolError::InvalidWord {
                tier: 2,
                source: WordError::NotIsogram('o'),
                ..
            }
        ));
    }

    #[test]
    fn rejects_mixed_lengths() {
        let mut tiers = single_word_tiers();
        tiers[0].1.push("drop");

        assert!(matches!(
            WordPool::from_tiers(tiers),
            Err(PoolError::MixedLengths {
                tier: 1,
                expected: 3,
                ..
            })
        ));
    }

    #[test]
    fn rejects_conflicting_max_tries() {
        let mut tiers = single_word_tiers();
        tiers[1] = (5, vec!["zip"]);

        assert!(matches!(
            WordPool::from_tiers(tiers),
            Err(PoolError::ConflictingMaxTries {
                length: 3,
                first: 4,
                second: 5
            })
        ));
    }

    #[test]
    fn allows_repeated_length_with_same_tries() {
        let mut tiers = single_word_tiers();
        tiers[1] = (4, vec!["zip", "war"]);

        let pool = WordPool::from_tiers(tiers).unwrap();
        assert_eq!(pool.tiers()[1].len(), 2);
        assert_eq!(pool.max_tries_for_length(3), Some(4));
    }
}
