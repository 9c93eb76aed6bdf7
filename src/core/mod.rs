//! Core domain types for Spelling Bee puzzles
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and shared by every encoding strategy.

mod alphabet;
mod word;

pub use alphabet::{Alphabet, AlphabetError, LETTER_COUNT, SENTINEL, SYMBOL_BITS};
pub use word::{MIN_WORD_LEN, WordError, clean_words};
