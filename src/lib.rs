//! Bulls and Cows
//!
//! A word-guessing game: find the hidden isogram within a limited number of tries,
//! guided by bulls (right letter, right place) and cows (right letter, wrong place).
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{BullCowCount, Word};
//!
//! let hidden = Word::new("lead").unwrap();
//! let count = BullCowCount::calculate("dale", &hidden);
//!
//! assert_eq!(count.bulls, 0);
//! assert_eq!(count.cows, 4);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
