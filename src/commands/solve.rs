//! Solve command
//!
//! Loads a dictionary and solves a puzzle for the hint page.

use crate::core::Alphabet;
use crate::solver::{Solution, solve};
use crate::wordlists::load_from_file;
use anyhow::{Context, Result};
use std::path::Path;

/// Solve a puzzle from raw letters and a wordlist path
///
/// # Errors
/// Fails if the letters do not form a valid puzzle alphabet or the wordlist
/// cannot be read.
pub fn solve_puzzle(letters: &str, wordlist: &Path) -> Result<Solution> {
    let alphabet = Alphabet::parse(letters)
        .with_context(|| format!("invalid puzzle letters '{letters}'"))?;
    let dictionary = load_from_file(wordlist)
        .with_context(|| format!("failed to read wordlist {}", wordlist.display()))?;
    Ok(solve(&alphabet, &dictionary))
}
