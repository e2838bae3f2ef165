//! Word pool loading utilities
//!
//! Parses tiered word pools from text. The format matches `data/word_pool.txt`:
//! one tier per line as `<max tries>: <words...>`, with blank lines and `#`
//! comments ignored.

use super::{PoolError, WordPool};
use std::fs;
use std::path::Path;

/// Load a word pool from a file
///
/// # Errors
///
/// Returns `PoolError::Io` if the file cannot be read, `PoolError::Parse` for a
/// malformed line, or any validation error from [`WordPool::from_tiers`].
///
/// # Examples
/// ```no_run
/// use bulls_cows::wordlists::loader::load_from_file;
///
/// let pool = load_from_file("data/word_pool.txt").unwrap();
/// println!("Loaded {} tiers", pool.tiers().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordPool, PoolError> {
    let content = fs::read_to_string(path)?;
    parse_pool(&content)
}

/// Parse a word pool from text
///
/// # Errors
///
/// Returns `PoolError::Parse` with a 1-based line number for a line without a
/// `:` separator or with a non-numeric try count, or any validation error from
/// [`WordPool::from_tiers`].
///
/// # Examples
/// ```
/// use bulls_cows::wordlists::loader::parse_pool;
///
/// let text = "\
/// 4: ape bot
/// 7: drop
/// 10: field
/// 14: planet
/// 20: isogram
/// 30: aftershock
/// 40: ambidextrous
/// ";
/// let pool = parse_pool(text).unwrap();
/// assert_eq!(pool.tiers()[0].len(), 2);
/// ```
pub fn parse_pool(content: &str) -> Result<WordPool, PoolError> {
    let tiers = content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(parse_tier_line(index + 1, trimmed))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    WordPool::from_tiers(tiers)
}

fn parse_tier_line(line: usize, text: &str) -> Result<(u32, Vec<&str>), PoolError> {
    let (tries, words) = text.split_once(':').ok_or_else(|| PoolError::Parse {
        line,
        message: "expected '<max tries>: <words...>'".to_string(),
    })?;

    let tries = tries.trim().parse::<u32>().map_err(|e| PoolError::Parse {
        line,
        message: format!("invalid max tries '{}': {e}", tries.trim()),
    })?;

    Ok((tries, words.split_whitespace().collect()))
}
