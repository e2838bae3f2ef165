//! Bulls and Cows - CLI
//!
//! Console Bulls and Cows with difficulty progression, hints and a session score.

use anyhow::{Context, Result};
use bulls_cows::{
    commands::{run_play, run_pool},
    game::BullCowGame,
    wordlists::{WordPool, loader::load_from_file},
};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Guess the hidden isogram from bulls and cows",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for word selection (default: random)
    #[arg(short, long, global = true, env = "BULLS_COWS_SEED")]
    seed: Option<u64>,

    /// Word pool file with one `<max tries>: <words...>` line per tier (default: built-in)
    #[arg(short = 'w', long, global = true)]
    word_pool: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the interactive console game (default)
    Play,

    /// Show the difficulty tiers of the word pool
    Pool,
}

/// Load the word pool from the -w flag, or the embedded default
fn load_pool(path: Option<&Path>) -> Result<WordPool> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load word pool from {}", path.display())),
        None => WordPool::embedded().context("embedded word pool is invalid"),
    }
}

fn init_tracing() {
    // Logs go to stderr so they never interleave with the game on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let pool = load_pool(cli.word_pool.as_deref())?;
    debug!(tiers = pool.tiers().len(), seed = ?cli.seed, "word pool loaded");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(pool, cli.seed),
        Commands::Pool => {
            run_pool(&pool);
            Ok(())
        }
    }
}

fn run_play_command(pool: WordPool, seed: Option<u64>) -> Result<()> {
    let mut game = match seed {
        Some(seed) => BullCowGame::with_seed(pool, seed),
        None => BullCowGame::new(pool),
    };

    let stdin = io::stdin();
    run_play(&mut game, &mut stdin.lock())?;
    Ok(())
}
