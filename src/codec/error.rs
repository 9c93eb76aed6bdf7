//! Error type shared by the encoding strategies
//!
//! All codec failures are fail-fast: an error is detected before any corrupting
//! side effect and surfaced to the caller. The codec never silently drops or
//! truncates a word, and no retry logic lives at this layer.

use crate::core::WordError;
use std::fmt;

/// Error type for encode/decode failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A bit width was zero or wider than the accumulator supports
    InvalidBitCount(u32),
    /// A value does not fit in its declared bit width
    ValueOutOfRange { value: u64, bits: u32 },
    /// A word length or suffix length exceeds its wire field
    FieldOverflow {
        field: &'static str,
        value: usize,
        max: usize,
    },
    /// A decode ran past the end of the payload (truncated or corrupt input)
    EndOfStream,
    /// A decode read the sentinel where a letter symbol was expected
    InvalidSymbol(u64),
    /// A word failed validation before encoding or after decoding
    InvalidWord(WordError),
    /// Malformed base64 text
    Envelope(String),
    /// The pluggable byte compressor failed
    Compression(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBitCount(bits) => {
                write!(f, "Bit count must be between 1 and 32, got {bits}")
            }
            Self::ValueOutOfRange { value, bits } => {
                write!(f, "Value {value} does not fit in {bits} bits")
            }
            Self::FieldOverflow { field, value, max } => {
                write!(f, "{field} {value} exceeds the wire maximum of {max}")
            }
            Self::EndOfStream => write!(f, "Payload ended before all bits could be read"),
            Self::InvalidSymbol(symbol) => {
                write!(f, "Symbol {symbol} does not map to a puzzle letter")
            }
            Self::InvalidWord(err) => write!(f, "Invalid word: {err}"),
            Self::Envelope(msg) => write!(f, "Malformed payload text: {msg}"),
            Self::Compression(msg) => write!(f, "Compression failed: {msg}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordError> for CodecError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}
