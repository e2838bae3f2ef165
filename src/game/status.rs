//! Guess classification and round progress

/// Result of classifying raw player input
///
/// `NoStatus` is the initial value of a prompt loop and is never returned by
/// [`BullCowGame::check_guess_validity`](super::BullCowGame::check_guess_validity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessStatus {
    Ok,
    #[default]
    NoStatus,
    NotCorrectWordLength,
    NotIsogram,
    Help,
    Hint,
    Score,
}

impl GuessStatus {
    /// True for the keyword commands that bypass guess validation
    #[must_use]
    pub const fn is_command(self) -> bool {
        matches!(self, Self::Help | Self::Hint | Self::Score)
    }
}

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Just reset: no guess submitted and no hint bought
    Fresh,
    InProgress,
    Won,
    /// Try budget exhausted without a win
    Lost,
}

impl RoundState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
