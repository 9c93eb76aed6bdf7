//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_decoded_words, print_encode_result, print_evaluation, print_hint_page};
