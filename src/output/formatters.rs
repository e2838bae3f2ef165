//! Formatting utilities for terminal output

use crate::core::BullCowCount;

/// Per-letter classification of a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionMark {
    Bull,
    Cow,
    Miss,
}

/// Classify each of the first `length` guess positions
///
/// A bull outranks a cow at the same position.
#[must_use]
pub fn position_marks(length: usize, count: &BullCowCount) -> Vec<PositionMark> {
    (0..length)
        .map(|i| {
            if count.bull_positions.contains(&i) {
                PositionMark::Bull
            } else if count.cow_positions.contains(&i) {
                PositionMark::Cow
            } else {
                PositionMark::Miss
            }
        })
        .collect()
}

/// Create a bar showing how much of the try budget is spent
#[must_use]
pub fn tries_bar(used: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        width
    } else {
        ((u64::from(used) * width as u64) / u64::from(max)) as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "1 guess" / "3 guesses"
#[must_use]
pub fn pluralize_guesses(count: u32) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_for_mixed_guess() {
        use PositionMark::{Bull, Cow, Miss};

        let count = BullCowCount {
            bulls: 2,
            cows: 2,
            bull_positions: vec![0, 1],
            cow_positions: vec![2, 3],
        };
        let marks = position_marks(5, &count);
        assert_eq!(marks, vec![Bull, Bull, Cow, Cow, Miss]);
    }

    #[test]
    fn marks_for_empty_count() {
        let marks = position_marks(3, &BullCowCount::default());
        assert_eq!(marks, vec![PositionMark::Miss; 3]);
    }

    #[test]
    fn marks_prefer_bull_over_cow() {
        let count = BullCowCount {
            bulls: 1,
            cows: 2,
            bull_positions: vec![1],
            cow_positions: vec![0, 1],
        };
        assert_eq!(
            position_marks(3, &count),
            vec![PositionMark::Cow, PositionMark::Bull, PositionMark::Miss]
        );
    }

    #[test]
    fn tries_bar_empty() {
        assert_eq!(tries_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn tries_bar_full_and_overspent() {
        assert_eq!(tries_bar(10, 10, 10), "██████████");
        assert_eq!(tries_bar(25, 10, 10), "██████████");
    }

    #[test]
    fn tries_bar_half() {
        assert_eq!(tries_bar(2, 4, 10), "█████░░░░░");
    }

    #[test]
    fn guess_plurals() {
        assert_eq!(pluralize_guesses(1), "1 guess");
        assert_eq!(pluralize_guesses(4), "4 guesses");
    }
}
