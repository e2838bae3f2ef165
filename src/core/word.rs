//! Isogram word representation
//!
//! A Word stores a lowercase isogram along with its letters as bytes for scoring.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// A lowercase isogram usable as a hidden word
///
/// Stores the word as text and as bytes so scoring can index positions directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
    #[error("Word is not an isogram, '{0}' repeats")]
    NotIsogram(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    /// - Repeats a letter (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Word;
    ///
    /// let word = Word::new("Planet").unwrap();
    /// assert_eq!(word.text(), "planet");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("letter").is_err());
    /// assert!(Word::new("pl4net").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        if let Some(repeated) = first_repeated_letter(&text) {
            return Err(WordError::NotIsogram(repeated));
        }

        let chars = text.as_bytes().to_vec();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; empty words are rejected by [`Word::new`]
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// First letter of the word
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> char {
        char::from(self.chars[0])
    }

    /// Last letter of the word
    #[inline]
    #[must_use]
    pub fn last_letter(&self) -> char {
        char::from(self.chars[self.chars.len() - 1])
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Check whether a string has no repeated letters, ignoring case
///
/// Strings of zero or one character are isograms.
///
/// # Examples
/// ```
/// use bulls_cows::core::is_isogram;
///
/// assert!(is_isogram("planet"));
/// assert!(!is_isogram("Anna"));
/// assert!(is_isogram(""));
/// ```
#[must_use]
pub fn is_isogram(input: &str) -> bool {
    first_repeated_letter(input).is_none()
}

/// Lowercase the ASCII letters of the input
///
/// Other characters are kept as they are, so the result has the same length as
/// the input.
#[must_use]
pub fn to_lower_case(input: &str) -> String {
    input.to_ascii_lowercase()
}

fn first_repeated_letter(input: &str) -> Option<char> {
    let mut seen = FxHashSet::default();
    input
        .chars()
        .flat_map(char::to_lowercase)
        .find(|&letter| !seen.insert(letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("field").unwrap();
        assert_eq!(word.text(), "field");
        assert_eq!(word.chars(), b"field");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("FIELD").unwrap();
        assert_eq!(word.text(), "field");

        let word2 = Word::new("FiElD").unwrap();
        assert_eq!(word2.text(), "field");
    }

    #[test]
    fn word_creation_rejects_repeats() {
        assert_eq!(Word::new("mood"), Err(WordError::NotIsogram('o')));
        // Case-insensitive: 'A' and 'a' are the same letter
        assert_eq!(Word::new("Anna"), Err(WordError::NotIsogram('a')));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("fie1d"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("fie d"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_first_and_last_letters() {
        let word = Word::new("ambidextrous").unwrap();
        assert_eq!(word.first_letter(), 'a');
        assert_eq!(word.last_letter(), 's');

        let single = Word::new("a").unwrap();
        assert_eq!(single.first_letter(), 'a');
        assert_eq!(single.last_letter(), 'a');
    }

    #[test]
    fn word_display() {
        let word = Word::new("roaming").unwrap();
        assert_eq!(format!("{word}"), "roaming");
    }

    #[test]
    fn isogram_short_inputs() {
        assert!(is_isogram(""));
        assert!(is_isogram("x"));
        assert!(is_isogram("X"));
    }

    #[test]
    fn isogram_case_insensitive() {
        assert!(is_isogram("Planet"));
        assert!(!is_isogram("PlaneP"));
        assert!(!is_isogram("aA"));
    }

    #[test]
    fn isogram_counts_non_letters() {
        assert!(!is_isogram("a--b"));
        assert!(is_isogram("a-b"));
    }

    #[test]
    fn lower_case_folding() {
        assert_eq!(to_lower_case("PlAnEt"), "planet");
        assert_eq!(to_lower_case(""), "");
        assert_eq!(to_lower_case("Q"), "q");
        assert_eq!(to_lower_case("already"), "already");
    }

    #[test]
    fn lower_case_keeps_character_count() {
        // 'İ' would expand to two chars under full Unicode folding
        let folded = to_lower_case("\u{130}AB");
        assert_eq!(folded, "\u{130}ab");
        assert_eq!(folded.chars().count(), 3);
    }
}
