//! Interactive console game
//!
//! Text-based prompt loop around the game engine

use crate::game::{BullCowGame, GuessStatus};
use crate::output::{
    print_end_screen, print_guess_result, print_help, print_hint, print_introduction,
    print_prompt, print_round_summary, print_score,
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// What the prompt loop produced for the current try
enum Turn {
    Guess(String),
    /// A hint used up the remaining tries
    RoundOver,
    EndOfInput,
}

/// Play rounds until the player declines to continue or input ends
///
/// Returns the final session score.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_play<R: BufRead>(game: &mut BullCowGame, input: &mut R) -> Result<u64> {
    let mut rounds = 0u32;

    loop {
        game.reset();
        rounds += 1;
        print_introduction(game);

        if !play_round(game, input)? {
            break;
        }

        if !ask_to_play_again(input)? {
            break;
        }
    }

    info!(rounds, score = game.score(), "session finished");
    print_end_screen(game.score());
    Ok(game.score())
}

/// Play one round; returns false if input ended mid-round
fn play_round<R: BufRead>(game: &mut BullCowGame, input: &mut R) -> Result<bool> {
    while !game.round_state().is_over() {
        match next_guess(game, input)? {
            Turn::Guess(guess) => {
                let count = game.submit_valid_guess(&guess);
                print_guess_result(&guess, &count);
            }
            Turn::RoundOver => break,
            Turn::EndOfInput => return Ok(false),
        }
    }

    if !game.is_game_won() {
        game.lose();
    }
    print_round_summary(game);
    Ok(true)
}

/// Prompt until the player enters a valid guess, handling commands on the way
fn next_guess<R: BufRead>(game: &mut BullCowGame, input: &mut R) -> Result<Turn> {
    loop {
        print_prompt(game);
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = read_line(input)? else {
            println!();
            return Ok(Turn::EndOfInput);
        };

        let status = game.check_guess_validity(&line);
        debug!(?status, "input classified");

        match status {
            GuessStatus::Ok => return Ok(Turn::Guess(game.to_lower_case(&line))),
            command if command.is_command() => {
                run_command(game, command);
                if game.round_state().is_over() {
                    return Ok(Turn::RoundOver);
                }
            }
            GuessStatus::NotIsogram => {
                println!(
                    "  {}\n",
                    "Please enter an isogram, a word with no recurring letters.".red()
                );
            }
            GuessStatus::NotCorrectWordLength => {
                println!(
                    "  {}\n",
                    format!("Please enter a {} letter word.", game.hidden_word_length()).red()
                );
            }
            _ => {}
        }
    }
}

/// Handle a keyword command; only a hint can change round state
fn run_command(game: &mut BullCowGame, command: GuessStatus) {
    match command {
        GuessStatus::Help => print_help(game),
        GuessStatus::Score => print_score(game),
        GuessStatus::Hint => buy_hint(game),
        _ => {}
    }
}

fn buy_hint(game: &mut BullCowGame) {
    if game.is_hint_used() {
        println!("  {}\n", "You already used your hint this round.".yellow());
        return;
    }

    let cost = game.hint_cost();
    game.pay_hint(cost);
    match game.get_hint() {
        Ok(hint) => print_hint(hint, cost),
        Err(e) => println!("  {}\n", e.to_string().yellow()),
    }
}

/// Ask whether to start another round; anything but y/Y ends the session
fn ask_to_play_again<R: BufRead>(input: &mut R) -> Result<bool> {
    print!("  Do you want to play again? (y/n): ");
    io::stdout().flush().context("failed to flush stdout")?;

    let answer = read_line(input)?;
    println!();

    Ok(answer.is_some_and(|a| a.starts_with(['y', 'Y'])))
}

/// Read one trimmed line, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read player input")?;

    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}
