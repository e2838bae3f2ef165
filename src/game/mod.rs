//! Game engine
//!
//! Owns all session and round state. The engine never performs I/O; front
//! ends drive it through queries and commands.

mod engine;
mod hint;
mod status;

pub use engine::{BullCowGame, HELP_COMMAND, HINT_COMMAND, PROMOTION_STREAK, SCORE_COMMAND};
pub use hint::{Hint, HintError};
pub use status::{GuessStatus, RoundState};
