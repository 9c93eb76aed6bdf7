//! Encode and decode commands
//!
//! Packs a puzzle's solved word set into a payload string, and unpacks a
//! payload back into words.

use crate::codec::Encoding;
use crate::commands::solve_puzzle;
use crate::core::Alphabet;
use anyhow::{Context, Result};
use std::path::Path;

/// Result of encoding a puzzle's answer list
pub struct EncodeResult {
    pub encoding: Encoding,
    pub word_count: usize,
    pub payload: String,
}

/// Solve a puzzle and encode its answer list
///
/// # Errors
/// Fails on invalid letters, an unreadable wordlist, or a codec error.
pub fn encode_puzzle(letters: &str, wordlist: &Path, encoding: Encoding) -> Result<EncodeResult> {
    let solution = solve_puzzle(letters, wordlist)?;
    let payload = encoding
        .encode(&solution.words, &solution.alphabet)
        .with_context(|| format!("{} encoding failed", encoding.name()))?;
    Ok(EncodeResult {
        encoding,
        word_count: solution.words.len(),
        payload,
    })
}

/// Decode a payload against a puzzle's letters
///
/// # Errors
/// Fails on invalid letters or a malformed payload.
pub fn decode_payload(letters: &str, payload: &str, encoding: Encoding) -> Result<Vec<String>> {
    let alphabet = Alphabet::parse(letters)
        .with_context(|| format!("invalid puzzle letters '{letters}'"))?;
    encoding
        .decode(payload, &alphabet)
        .with_context(|| format!("{} decoding failed", encoding.name()))
}
