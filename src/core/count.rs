//! Bulls and cows feedback calculation
//!
//! Every (guess position, hidden position) pair with equal letters contributes:
//! - a bull when the positions are the same
//! - a cow when they differ
//!
//! Cows are counted once per matching pair, not once per guessed letter, so a
//! letter that appears at several other positions of the hidden word scores a
//! cow for each of them.

use super::Word;

/// Feedback for a single guess
///
/// Positions index into the guess and are recorded in scan order. There is one
/// entry in `cow_positions` per counted cow, so a position may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BullCowCount {
    pub bulls: usize,
    pub cows: usize,
    pub bull_positions: Vec<usize>,
    pub cow_positions: Vec<usize>,
}

impl BullCowCount {
    /// Score `guess` against the hidden word
    ///
    /// The guess is expected to have the hidden word's length; extra
    /// characters on either side never match.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{BullCowCount, Word};
    ///
    /// let hidden = Word::new("lead").unwrap();
    /// let count = BullCowCount::calculate("deal", &hidden);
    ///
    /// // d(cow) e(bull) a(bull) l(cow)
    /// assert_eq!(count.bulls, 2);
    /// assert_eq!(count.cows, 2);
    /// assert_eq!(count.bull_positions, vec![1, 2]);
    /// assert_eq!(count.cow_positions, vec![0, 3]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, hidden: &Word) -> Self {
        let mut count = Self::default();

        for (i, guessed) in guess.chars().enumerate() {
            for (j, &letter) in hidden.chars().iter().enumerate() {
                if guessed != char::from(letter) {
                    continue;
                }
                if i == j {
                    count.bulls += 1;
                    count.bull_positions.push(i);
                } else {
                    count.cows += 1;
                    count.cow_positions.push(i);
                }
            }
        }

        count
    }

    /// True if every letter of a word of `word_length` letters is a bull
    #[inline]
    #[must_use]
    pub const fn is_win(&self, word_length: usize) -> bool {
        self.bulls == word_length
    }
}
