//! Hints: the first and last letter of the hidden word

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub first_letter: char,
    pub last_letter: char,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "starts with '{}' and ends with '{}'",
            self.first_letter, self.last_letter
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("A hint has already been used this round")]
    AlreadyUsed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_display() {
        let hint = Hint {
            first_letter: 'a',
            last_letter: 'e',
        };
        assert_eq!(hint.to_string(), "starts with 'a' and ends with 'e'");
    }
}
