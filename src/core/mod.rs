//! Core domain types for Bulls and Cows
//!
//! Pure, state-free types: words, feedback counts and difficulty levels.

mod count;
mod difficulty;
mod word;

pub use count::BullCowCount;
pub use difficulty::Difficulty;
pub use word::{Word, WordError, is_isogram, to_lower_case};
