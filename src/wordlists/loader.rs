//! Wordlist loading utilities
//!
//! Wordlists are plain text, one word per line. Lines with anything other
//! than ASCII letters are skipped so a list scraped from messy sources still
//! loads cleanly.

use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a wordlist file
///
/// Returns lowercased words, skipping blank and non-alphabetic lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use beecode::wordlists::loader::load_from_file;
///
/// let words = load_from_file("nytbee_dict.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Parse wordlist text into a dictionary
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim().to_lowercase();
            if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_lowercase()) {
                Some(trimmed)
            } else {
                None
            }
        })
        .collect()
}
