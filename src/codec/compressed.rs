//! Terminated + compressed encoding
//!
//! Runs the raw terminated byte stream through a pluggable byte compressor
//! before the text envelope, and reverses the pipeline on decode. The codec
//! only fixes the compress-then-envelope ordering; the compressor itself is
//! an opaque `bytes -> bytes` transform.

use crate::codec::terminated::{decode_terminated_bytes, encode_terminated_bytes};
use crate::codec::{CodecError, envelope};
use crate::core::Alphabet;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use std::io::{Read, Write};

/// A lossless byte compressor the compressed encoding can be built on
pub trait Compressor {
    /// Compress a byte stream
    ///
    /// # Errors
    /// Returns `CodecError::Compression` if the underlying codec fails.
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;

    /// Reverse [`Compressor::compress`]
    ///
    /// # Errors
    /// Returns `CodecError::Compression` for corrupt compressed input.
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;
}

/// zlib-wrapped deflate, the default compressor
#[derive(Debug, Clone)]
pub struct Deflate {
    level: Compression,
}

impl Deflate {
    /// Create a deflate compressor with an explicit level (0-9)
    #[must_use]
    pub fn new(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(9)),
        }
    }
}

impl Default for Deflate {
    fn default() -> Self {
        Self {
            level: Compression::default(),
        }
    }
}

impl Compressor for Deflate {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut encoder = ZlibEncoder::new(Vec::new(), self.level);
        encoder
            .write_all(data)
            .map_err(|e| CodecError::Compression(e.to_string()))?;
        encoder
            .finish()
            .map_err(|e| CodecError::Compression(e.to_string()))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut decoder = ZlibDecoder::new(data);
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .map_err(|e| CodecError::Compression(e.to_string()))?;
        Ok(decompressed)
    }
}

/// Encode a word set as terminated bytes squeezed through `compressor`
///
/// # Errors
/// Returns `CodecError::InvalidWord` if any word fails validation, or
/// `CodecError::Compression` if the compressor fails.
pub fn encode_compressed<S: AsRef<str>, C: Compressor>(
    words: &[S],
    alphabet: &Alphabet,
    compressor: &C,
) -> Result<String, CodecError> {
    let raw = encode_terminated_bytes(words, alphabet)?;
    Ok(envelope::wrap(&compressor.compress(&raw)?))
}

/// Decode a compressed payload back into its word set
///
/// # Errors
/// Returns `CodecError::Envelope` for malformed text, `CodecError::Compression`
/// for corrupt compressed bytes, plus any error the terminated decode raises.
pub fn decode_compressed<C: Compressor>(
    payload: &str,
    alphabet: &Alphabet,
    compressor: &C,
) -> Result<Vec<String>, CodecError> {
    let raw = compressor.decompress(&envelope::unwrap(payload)?)?;
    decode_terminated_bytes(&raw, alphabet)
}
