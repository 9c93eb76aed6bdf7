//! Beecode
//!
//! A NYT Spelling Bee solver with compact, URL-safe encodings for answer
//! lists. Four bit-packing strategies trade order preservation against size;
//! every payload round-trips through 3-bit letter symbols and unpadded
//! URL-safe base64.
//!
//! # Quick Start
//!
//! ```rust
//! use beecode::codec::{decode_terminated, encode_terminated};
//! use beecode::core::Alphabet;
//!
//! let alphabet = Alphabet::new("abgcfed").unwrap();
//! let payload = encode_terminated(&["face", "bead"], &alphabet).unwrap();
//! let words = decode_terminated(&payload, &alphabet).unwrap();
//! assert_eq!(words, vec!["face", "bead"]);
//! ```

// Core domain types
pub mod core;

// Answer-list encodings
pub mod codec;

// Puzzle solving
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
