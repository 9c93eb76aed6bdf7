//! Front-coded encoding
//!
//! Sorts the word set, then stores each word as a delta from its predecessor:
//! a 4-bit shared-prefix length (capped at 15), a 5-bit suffix length (max 31),
//! and the suffix as 3-bit symbols.
//!
//! This strategy canonicalizes to sorted order: decoding always yields the
//! sorted word set regardless of the order words were supplied. Callers that
//! need the original order must use the terminated or length-prefixed encoding.

use crate::codec::bits::{BitReader, BitWriter};
use crate::codec::{COUNT_BITS, CodecError, envelope};
use crate::core::{Alphabet, SYMBOL_BITS, clean_words};

/// Bit width of the shared-prefix field
const PREFIX_BITS: u32 = 4;

/// Longest representable shared prefix; longer runs are truncated to this
const MAX_PREFIX: usize = (1 << PREFIX_BITS) - 1;

/// Bit width of the suffix-length field
const SUFFIX_BITS: u32 = 5;

/// Longest representable suffix
const MAX_SUFFIX: usize = (1 << SUFFIX_BITS) - 1;

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}

/// Encode a word set as sorted prefix deltas
///
/// The input is sorted before encoding; see the module docs for the ordering
/// contract.
///
/// # Errors
/// Returns `CodecError::InvalidWord` if any word fails validation, or
/// `CodecError::FieldOverflow` if a word's suffix after the capped shared
/// prefix exceeds 31 letters.
pub fn encode_front_coded<S: AsRef<str>>(
    words: &[S],
    alphabet: &Alphabet,
) -> Result<String, CodecError> {
    let mut cleaned = clean_words(words, alphabet)?;
    cleaned.sort_unstable();

    let mut writer = BitWriter::new();
    writer.write(cleaned.len() as u64, COUNT_BITS)?;
    let mut previous = String::new();
    for word in cleaned {
        let common = common_prefix_len(&previous, &word).min(MAX_PREFIX);
        let suffix = &word[common..];
        if suffix.len() > MAX_SUFFIX {
            return Err(CodecError::FieldOverflow {
                field: "Suffix length",
                value: suffix.len(),
                max: MAX_SUFFIX,
            });
        }
        writer.write(common as u64, PREFIX_BITS)?;
        writer.write(suffix.len() as u64, SUFFIX_BITS)?;
        for ch in suffix.chars() {
            let symbol = alphabet
                .symbol(ch)
                .expect("clean_words only passes puzzle letters");
            writer.write(symbol, SYMBOL_BITS)?;
        }
        previous = word;
    }
    Ok(envelope::wrap(&writer.finish()))
}

/// Decode a front-coded payload into its sorted word set
///
/// # Errors
/// Returns `CodecError::Envelope` for malformed text, `CodecError::EndOfStream`
/// for a truncated payload, `CodecError::InvalidSymbol` if a letter field holds
/// the sentinel, or `CodecError::InvalidWord` if a decoded word fails validation.
pub fn decode_front_coded(payload: &str, alphabet: &Alphabet) -> Result<Vec<String>, CodecError> {
    let bytes = envelope::unwrap(payload)?;
    let mut reader = BitReader::new(&bytes);
    let total = reader.read(COUNT_BITS)?;

    let mut words = Vec::with_capacity(total as usize);
    let mut previous = String::new();
    for _ in 0..total {
        let common = (reader.read(PREFIX_BITS)? as usize).min(previous.len());
        let suffix_len = reader.read(SUFFIX_BITS)? as usize;
        let mut word = String::with_capacity(common + suffix_len);
        word.push_str(&previous[..common]);
        for _ in 0..suffix_len {
            let symbol = reader.read(SYMBOL_BITS)?;
            let letter = alphabet
                .letter(symbol)
                .ok_or(CodecError::InvalidSymbol(symbol))?;
            word.push(letter);
        }
        previous.clone_from(&word);
        words.push(word);
    }
    clean_words(&words, alphabet).map_err(CodecError::from)
}
