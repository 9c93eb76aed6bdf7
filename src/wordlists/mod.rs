//! Dictionary loading for puzzle solving

pub mod loader;

pub use loader::{load_from_file, words_from_text};
