//! Difficulty levels
//!
//! Levels run from 1 (EASY) to [`Difficulty::MAX_LEVEL`]. Each level selects a
//! word tier and sets the price of a hint.

use std::fmt;

/// A difficulty level in `1..=MAX_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Highest reachable level
    pub const MAX_LEVEL: u8 = 7;

    /// Starting level of every session
    pub const EASIEST: Self = Self(1);

    /// Hardest level
    pub const HARDEST: Self = Self(Self::MAX_LEVEL);

    /// Create a difficulty, returning `None` outside `1..=MAX_LEVEL`
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if matches!(level, 1..=Self::MAX_LEVEL) {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Numeric level (1-7)
    #[inline]
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Zero-based index of this level's word tier
    #[inline]
    #[must_use]
    pub const fn tier_index(self) -> usize {
        (self.0 - 1) as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_max(self) -> bool {
        self.0 == Self::MAX_LEVEL
    }

    /// The next level up, saturating at `MAX_LEVEL`
    #[must_use]
    pub const fn promoted(self) -> Self {
        if self.is_max() { self } else { Self(self.0 + 1) }
    }

    /// Display label, e.g. "EASY"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "EASY",
            2 => "MODERATE",
            3 => "HARD",
            4 => "CHALLENGE",
            5 => "EXPERT",
            6 => "MASTER",
            _ => "LEGENDARY",
        }
    }

    /// Tries charged for buying a hint at this level
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::EASIEST.hint_cost(), 1);
    /// assert_eq!(Difficulty::HARDEST.hint_cost(), 20);
    /// ```
    #[must_use]
    pub const fn hint_cost(self) -> u32 {
        match self.0 {
            1 => 1,
            2 | 3 => 2,
            4 => 3,
            5 => 5,
            6 => 10,
            _ => 20,
        }
    }

    /// All levels, easiest first
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::MAX_LEVEL).map(Self)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_range() {
        assert!(Difficulty::new(0).is_none());
        assert!(Difficulty::new(8).is_none());
        assert_eq!(Difficulty::new(1), Some(Difficulty::EASIEST));
        assert_eq!(Difficulty::new(7), Some(Difficulty::HARDEST));
    }

    #[test]
    fn difficulty_promotion_saturates() {
        let mut level = Difficulty::EASIEST;
        for expected in 2..=7 {
            level = level.promoted();
            assert_eq!(level.level(), expected);
        }
        assert!(level.is_max());
        assert_eq!(level.promoted(), Difficulty::HARDEST);
    }

    #[test]
    fn difficulty_hint_costs() {
        let costs: Vec<u32> = Difficulty::all().map(Difficulty::hint_cost).collect();
        assert_eq!(costs, vec![1, 2, 2, 3, 5, 10, 20]);
    }

    #[test]
    fn difficulty_labels() {
        let labels: Vec<&str> = Difficulty::all().map(Difficulty::label).collect();
        assert_eq!(
            labels,
            vec!["EASY", "MODERATE", "HARD", "CHALLENGE", "EXPERT", "MASTER", "LEGENDARY"]
        );
        assert_eq!(Difficulty::EASIEST.to_string(), "EASY");
    }

    #[test]
    fn difficulty_tier_index() {
        assert_eq!(Difficulty::EASIEST.tier_index(), 0);
        assert_eq!(Difficulty::HARDEST.tier_index(), 6);
    }
}
