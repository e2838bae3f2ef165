//! Display functions for the console game

use super::formatters::{PositionMark, pluralize_guesses, position_marks, tries_bar};
use crate::core::{BullCowCount, Difficulty};
use crate::game::{BullCowGame, HELP_COMMAND, HINT_COMMAND, Hint, SCORE_COMMAND};
use crate::wordlists::WordPool;
use colored::Colorize;

const RULE_WIDTH: usize = 70;

fn rule() {
    println!("{}", "═".repeat(RULE_WIDTH).cyan());
}

/// Print the banner and the goal for the round that just started
pub fn print_introduction(game: &BullCowGame) {
    rule();
    println!();
    println!(
        "{}",
        "        Welcome to Bulls and Cows, a fun word game!"
            .bright_yellow()
            .bold()
    );
    println!();
    println!("                 }}   {{         ___");
    println!("                 (o o)        (o o)");
    println!("          /-------\\ /          \\ /-------\\");
    println!("         / | BULL |O            O| COW  | \\");
    println!("        *  |-,--- |              |------|  *");
    println!("           ^      ^              ^      ^");
    println!();
    rule();
    println!();
    println!(
        "  CURRENT DIFFICULTY - {}:",
        game.difficulty_label().bright_cyan().bold()
    );
    println!(
        "  Can you guess the {} letter isogram I'm thinking of in {} turns?",
        game.hidden_word_length().to_string().bright_yellow(),
        game.max_tries().to_string().bright_yellow()
    );
    println!(
        "  Type '{HELP_COMMAND}' for the rules, '{HINT_COMMAND}' for a hint, '{SCORE_COMMAND}' for your score."
    );
    println!();
    rule();
    println!();
}

/// Print the rules of the game
pub fn print_help(game: &BullCowGame) {
    println!();
    println!("  {}", "How to play".bright_cyan().bold());
    println!(
        "  Guess the hidden {}-letter isogram, a word with no repeated letters.",
        game.hidden_word_length()
    );
    println!(
        "  {} a letter in the right place.",
        "Bull:".bright_green().bold()
    );
    println!(
        "  {}  a letter in the word but somewhere else.",
        "Cow:".bright_yellow().bold()
    );
    println!(
        "  '{HINT_COMMAND}' reveals the first and last letters for {} tries, once per round.",
        game.hint_cost()
    );
    println!("  Three wins in a row raise the difficulty and the points per win.");
    println!();
}

/// Print the running score and progression
pub fn print_score(game: &BullCowGame) {
    println!();
    println!(
        "  Score: {}   Difficulty: {} ({})   Win streak: {}",
        game.score().to_string().bright_yellow().bold(),
        game.difficulty_label().bright_cyan(),
        game.difficulty().level(),
        game.win_streak()
    );
    println!();
}

/// Print a purchased hint
pub fn print_hint(hint: Hint, cost: u32) {
    println!();
    println!(
        "  {} The word {} (cost: {} tries)",
        "Hint:".bright_magenta().bold(),
        hint,
        cost
    );
    println!();
}

/// Print bulls, cows and a letter-by-letter strip for one guess
pub fn print_guess_result(guess: &str, count: &BullCowCount) {
    let marks = position_marks(guess.chars().count(), count);
    let strip: String = guess
        .chars()
        .zip(&marks)
        .map(|(letter, mark)| {
            let letter = letter.to_ascii_uppercase().to_string();
            match mark {
                PositionMark::Bull => letter.black().on_green().bold().to_string(),
                PositionMark::Cow => letter.black().on_yellow().bold().to_string(),
                PositionMark::Miss => letter.bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    println!(
        "  {}   Bulls = {}. Cows = {}",
        strip,
        count.bulls.to_string().bright_green().bold(),
        count.cows.to_string().bright_yellow().bold()
    );
    println!();
}

/// Print the prompt for the next try
pub fn print_prompt(game: &BullCowGame) {
    let used = game.current_try().saturating_sub(1);
    print!(
        "  [{}] Try {} of {}. Enter your guess: ",
        tries_bar(used, game.max_tries(), 10).cyan(),
        game.current_try(),
        game.max_tries()
    );
}

/// Print the outcome of a finished round
pub fn print_round_summary(game: &BullCowGame) {
    if game.is_game_won() {
        let guesses = game.current_try() - 1;
        println!(
            "  {}",
            "You won! Congratulations!".bright_green().bold()
        );
        println!("  It took you {}.", pluralize_guesses(guesses));
    } else {
        println!(
            "  {}",
            "You lost! Better luck next time...".bright_red().bold()
        );
        println!(
            "  The word was {}.",
            game.hidden_word().to_uppercase().bright_yellow().bold()
        );
    }
    println!();
}

/// Print the final score when the session ends
pub fn print_end_screen(score: u64) {
    rule();
    println!("  {}", "Thanks for playing!".bright_cyan().bold());
    println!(
        "  You scored {} points!",
        score.to_string().bright_yellow().bold()
    );
    rule();
}

/// Print one row per difficulty tier
pub fn print_pool(pool: &WordPool) {
    rule();
    println!(" {} ", "WORD POOL".bright_cyan().bold());
    rule();
    println!(
        "  {:<6} {:<10} {:>7} {:>10} {:>10} {:>6}",
        "Level", "Label", "Length", "Max tries", "Hint cost", "Words"
    );

    for (level, tier) in Difficulty::all().zip(pool.tiers()) {
        println!(
            "  {:<6} {:<10} {:>7} {:>10} {:>10} {:>6}",
            level.level(),
            level.label(),
            tier.word_length(),
            tier.max_tries(),
            level.hint_cost(),
            tier.len()
        );
    }
}
