//! The Bulls and Cows game engine
//!
//! `BullCowGame` holds session state (score, win streak, difficulty) that
//! survives across rounds, and round state (hidden word, try count, win and
//! hint flags) that [`BullCowGame::reset`] clears.

use super::{GuessStatus, Hint, HintError, RoundState};
use crate::core::{BullCowCount, Difficulty, Word, is_isogram, to_lower_case};
use crate::wordlists::WordPool;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Keyword that requests the rules
pub const HELP_COMMAND: &str = "help";

/// Keyword that requests a hint
pub const HINT_COMMAND: &str = "hint";

/// Keyword that requests the current score
pub const SCORE_COMMAND: &str = "score";

/// Consecutive wins needed to move up one difficulty level
pub const PROMOTION_STREAK: u32 = 3;

/// Single-player Bulls and Cows session
///
/// # Examples
/// ```
/// use bulls_cows::game::{BullCowGame, GuessStatus};
/// use bulls_cows::wordlists::WordPool;
///
/// let mut game = BullCowGame::with_seed(WordPool::embedded().unwrap(), 42);
/// game.reset();
///
/// let guess = game.hidden_word().to_string();
/// assert_eq!(game.check_guess_validity(&guess), GuessStatus::Ok);
///
/// let count = game.submit_valid_guess(&guess);
/// assert_eq!(count.bulls, game.hidden_word_length());
/// assert!(game.is_game_won());
/// ```
#[derive(Debug, Clone)]
pub struct BullCowGame {
    pool: WordPool,
    rng: StdRng,

    // Round state
    hidden_word: Word,
    max_tries: u32,
    current_try: u32,
    game_won: bool,
    hint_used: bool,

    // Session state
    score: u64,
    difficulty: Difficulty,
    win_streak: u32,
}

impl BullCowGame {
    /// Create a session with an RNG seeded from the operating system
    #[must_use]
    pub fn new(pool: WordPool) -> Self {
        Self::with_rng(pool, StdRng::from_os_rng())
    }

    /// Create a session whose word draws are reproducible from `seed`
    #[must_use]
    pub fn with_seed(pool: WordPool, seed: u64) -> Self {
        Self::with_rng(pool, StdRng::seed_from_u64(seed))
    }

    fn with_rng(pool: WordPool, mut rng: StdRng) -> Self {
        let difficulty = Difficulty::EASIEST;
        let (hidden_word, max_tries) = pick_word(&pool, difficulty, &mut rng);

        Self {
            pool,
            rng,
            hidden_word,
            max_tries,
            current_try: 1,
            game_won: false,
            hint_used: false,
            score: 0,
            difficulty,
            win_streak: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn current_try(&self) -> u32 {
        self.current_try
    }

    /// Tries allotted to the current hidden word's length
    #[inline]
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }

    #[inline]
    #[must_use]
    pub fn hidden_word_length(&self) -> usize {
        self.hidden_word.len()
    }

    /// The hidden word, for revealing it once a round is over
    #[inline]
    #[must_use]
    pub fn hidden_word(&self) -> &str {
        self.hidden_word.text()
    }

    /// Cumulative score for the whole session
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn is_game_won(&self) -> bool {
        self.game_won
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Display label of the current difficulty, e.g. "EASY"
    #[inline]
    #[must_use]
    pub const fn difficulty_label(&self) -> &'static str {
        self.difficulty.label()
    }

    #[inline]
    #[must_use]
    pub const fn is_hint_used(&self) -> bool {
        self.hint_used
    }

    /// Tries a hint costs at the current difficulty
    #[inline]
    #[must_use]
    pub const fn hint_cost(&self) -> u32 {
        self.difficulty.hint_cost()
    }

    #[inline]
    #[must_use]
    pub const fn win_streak(&self) -> u32 {
        self.win_streak
    }

    #[must_use]
    pub const fn round_state(&self) -> RoundState {
        if self.game_won {
            RoundState::Won
        } else if self.current_try > self.max_tries {
            RoundState::Lost
        } else if self.current_try == 1 && !self.hint_used {
            RoundState::Fresh
        } else {
            RoundState::InProgress
        }
    }

    /// Classify raw input without touching any state
    ///
    /// The keywords `help`, `hint` and `score` are matched case-sensitively
    /// before any guess checks. Length is checked before isogram-ness.
    #[must_use]
    pub fn check_guess_validity(&self, input: &str) -> GuessStatus {
        match input {
            HELP_COMMAND => GuessStatus::Help,
            HINT_COMMAND => GuessStatus::Hint,
            SCORE_COMMAND => GuessStatus::Score,
            _ if input.chars().count() != self.hidden_word_length() => {
                GuessStatus::NotCorrectWordLength
            }
            _ if !is_isogram(input) => GuessStatus::NotIsogram,
            _ => GuessStatus::Ok,
        }
    }

    /// Lowercase a guess before submitting it
    #[must_use]
    #[allow(clippy::unused_self)] // Kept on the engine next to the validity check
    pub fn to_lower_case(&self, input: &str) -> String {
        to_lower_case(input)
    }

    /// Score a guess that [`check_guess_validity`](Self::check_guess_validity) accepted
    ///
    /// Uses up one try. A guess made entirely of bulls wins the round: the
    /// score grows by `max(1, max_tries - guesses_before) * level * (streak + 1)`,
    /// the streak grows, and every [`PROMOTION_STREAK`] wins below the top
    /// level promote the difficulty and restart the streak. A first-try win
    /// scores the full `max_tries` as its base.
    pub fn submit_valid_guess(&mut self, guess: &str) -> BullCowCount {
        debug_assert_eq!(
            guess.chars().count(),
            self.hidden_word_length(),
            "guess must be validated before submission"
        );

        let guesses_before = self.current_try - 1;
        self.current_try += 1;

        let count = BullCowCount::calculate(guess, &self.hidden_word);
        if count.is_win(self.hidden_word_length()) {
            self.record_win(guesses_before);
        }

        count
    }

    fn record_win(&mut self, guesses_before: u32) {
        let base = self.max_tries.saturating_sub(guesses_before).max(1);
        let gained = u64::from(base)
            * u64::from(self.difficulty.level())
            * u64::from(self.win_streak + 1);
        self.score += gained;
        self.win_streak += 1;

        info!(
            gained,
            score = self.score,
            streak = self.win_streak,
            level = self.difficulty.level(),
            "round won"
        );

        // At the top level the streak keeps growing and keeps raising the multiplier
        if self.win_streak >= PROMOTION_STREAK && !self.difficulty.is_max() {
            self.win_streak = 0;
            self.difficulty = self.difficulty.promoted();
            info!(
                level = self.difficulty.level(),
                label = self.difficulty.label(),
                "difficulty promoted"
            );
        }

        self.game_won = true;
    }

    /// Charge `cost` tries for a hint
    pub fn pay_hint(&mut self, cost: u32) {
        self.current_try = self.current_try.saturating_add(cost);
        debug!(cost, current_try = self.current_try, "hint paid");
    }

    /// Reveal the hidden word's first and last letters
    ///
    /// # Errors
    /// Returns `HintError::AlreadyUsed` if a hint was already taken this round.
    pub fn get_hint(&mut self) -> Result<Hint, HintError> {
        if self.hint_used {
            return Err(HintError::AlreadyUsed);
        }
        self.hint_used = true;

        Ok(Hint {
            first_letter: self.hidden_word.first_letter(),
            last_letter: self.hidden_word.last_letter(),
        })
    }

    /// End the round without a win
    pub fn lose(&mut self) {
        debug!(streak = self.win_streak, "round lost, streak cleared");
        self.win_streak = 0;
    }

    /// Start a new round with a word from the current difficulty's tier
    pub fn reset(&mut self) {
        self.game_won = false;
        self.hint_used = false;
        self.current_try = 1;

        let (hidden_word, max_tries) = pick_word(&self.pool, self.difficulty, &mut self.rng);
        self.hidden_word = hidden_word;
        self.max_tries = max_tries;

        debug!(
            level = self.difficulty.level(),
            length = self.hidden_word.len(),
            max_tries,
            "round reset"
        );
    }
}

/// Draw a word uniformly from the tier for `difficulty`
fn pick_word(pool: &WordPool, difficulty: Difficulty, rng: &mut StdRng) -> (Word, u32) {
    let tier = pool.tier(difficulty);
    let index = rng.random_range(0..tier.len());
    (tier.words()[index].clone(), tier.max_tries())
}
