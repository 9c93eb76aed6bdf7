//! Word validation against a puzzle
//!
//! Every encoding runs the same cleanup and checks once before writing bits and
//! once after decoding, so a corrupt payload that decodes to well-formed bits
//! but out-of-domain words is still rejected.

use crate::core::Alphabet;
use std::fmt;

/// Minimum accepted word length
pub const MIN_WORD_LEN: usize = 4;

/// Error type for words that fail the puzzle preconditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    TooShort { word: String, len: usize },
    NonAlphabetic(String),
    MissingRequired { word: String, required: char },
    OutsideAlphabet { word: String, letter: char },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { word, len } => {
                write!(f, "Word '{word}' has {len} letters, minimum is {MIN_WORD_LEN}")
            }
            Self::NonAlphabetic(word) => {
                write!(f, "Word '{word}' must use letters a-z only")
            }
            Self::MissingRequired { word, required } => {
                write!(f, "Word '{word}' is missing the required letter '{required}'")
            }
            Self::OutsideAlphabet { word, letter } => {
                write!(f, "Word '{word}' uses '{letter}' which is not a puzzle letter")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Normalize and validate a word set against the puzzle
///
/// Each word is lowercased and stripped of surrounding whitespace and stray
/// carriage returns left over from upstream text extraction, then checked:
/// at least four letters, ASCII lowercase only, contains the required letter,
/// and uses only puzzle letters.
///
/// # Errors
/// Returns the first `WordError` encountered; no partial output is produced.
///
/// # Examples
/// ```
/// use beecode::core::{Alphabet, clean_words};
///
/// let alphabet = Alphabet::new("abgcfed").unwrap();
/// let cleaned = clean_words(&["FACE\r"], &alphabet).unwrap();
/// assert_eq!(cleaned, vec!["face"]);
///
/// assert!(clean_words(&["bead", "bee"], &alphabet).is_err());
/// ```
pub fn clean_words<S: AsRef<str>>(
    words: &[S],
    alphabet: &Alphabet,
) -> Result<Vec<String>, WordError> {
    let required = alphabet.required();
    let mut cleaned = Vec::with_capacity(words.len());

    for word in words {
        let normalized = word.as_ref().trim().to_lowercase();
        if normalized.chars().count() < MIN_WORD_LEN {
            return Err(WordError::TooShort {
                len: normalized.chars().count(),
                word: normalized,
            });
        }
        if !normalized.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::NonAlphabetic(normalized));
        }
        if !normalized.contains(required) {
            return Err(WordError::MissingRequired {
                word: normalized,
                required,
            });
        }
        if let Some(outside) = normalized.chars().find(|&c| !alphabet.contains(c)) {
            return Err(WordError::OutsideAlphabet {
                word: normalized,
                letter: outside,
            });
        }
        cleaned.push(normalized);
    }

    Ok(cleaned)
}
