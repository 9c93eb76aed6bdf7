//! Terminated encoding
//!
//! Wire format: 12-bit word count, then one 3-bit symbol per letter with the
//! sentinel symbol 7 closing each word. Word order survives the round trip.

use crate::codec::bits::{BitReader, BitWriter};
use crate::codec::{COUNT_BITS, CodecError, envelope};
use crate::core::{Alphabet, SENTINEL, SYMBOL_BITS, clean_words};

/// Encode a word set as sentinel-terminated 3-bit symbols
///
/// # Errors
/// Returns `CodecError::InvalidWord` if any word fails validation, or
/// `CodecError::ValueOutOfRange` if the word count overflows the 12-bit
/// count field (4096 or more words).
pub fn encode_terminated<S: AsRef<str>>(
    words: &[S],
    alphabet: &Alphabet,
) -> Result<String, CodecError> {
    Ok(envelope::wrap(&encode_terminated_bytes(words, alphabet)?))
}

/// Decode a sentinel-terminated payload back into its word set
///
/// # Errors
/// Returns `CodecError::Envelope` for malformed text, `CodecError::EndOfStream`
/// for a truncated payload, or `CodecError::InvalidWord` if a decoded word
/// fails validation.
pub fn decode_terminated(payload: &str, alphabet: &Alphabet) -> Result<Vec<String>, CodecError> {
    decode_terminated_bytes(&envelope::unwrap(payload)?, alphabet)
}

/// Raw byte stage, shared with the compressed encoding
pub(crate) fn encode_terminated_bytes<S: AsRef<str>>(
    words: &[S],
    alphabet: &Alphabet,
) -> Result<Vec<u8>, CodecError> {
    let cleaned = clean_words(words, alphabet)?;
    let mut writer = BitWriter::new();
    writer.write(cleaned.len() as u64, COUNT_BITS)?;
    for word in &cleaned {
        for ch in word.chars() {
            let symbol = alphabet
                .symbol(ch)
                .expect("clean_words only passes puzzle letters");
            writer.write(symbol, SYMBOL_BITS)?;
        }
        writer.write(SENTINEL, SYMBOL_BITS)?;
    }
    Ok(writer.finish())
}

pub(crate) fn decode_terminated_bytes(
    bytes: &[u8],
    alphabet: &Alphabet,
) -> Result<Vec<String>, CodecError> {
    let mut reader = BitReader::new(bytes);
    let total = reader.read(COUNT_BITS)?;

    let mut words = Vec::with_capacity(total as usize);
    let mut current = String::new();
    while (words.len() as u64) < total {
        let symbol = reader.read(SYMBOL_BITS)?;
        if symbol == SENTINEL {
            words.push(std::mem::take(&mut current));
        } else if let Some(letter) = alphabet.letter(symbol) {
            current.push(letter);
        } else {
            return Err(CodecError::InvalidSymbol(symbol));
        }
    }
    clean_words(&words, alphabet).map_err(CodecError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::new("abgcfed").unwrap()
    }

    #[test]
    fn round_trip_preserves_order() {
        let words = ["face", "bead"];
        let payload = encode_terminated(&words, &alphabet()).unwrap();
        let decoded = decode_terminated(&payload, &alphabet()).unwrap();
        assert_eq!(decoded, vec!["face", "bead"]);
    }

    #[test]
    fn round_trip_empty_set() {
        let payload = encode_terminated::<&str>(&[], &alphabet()).unwrap();
        let decoded = decode_terminated(&payload, &alphabet()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn wire_layout_is_count_symbols_sentinel() {
        // "gaff" with alphabet abgcfed: symbols 2 0 4 4, sentinel 7
        // Stream: 000000000001 010 000 100 100 111 -> bytes 00000000 00010100 00100100 111 + 00000
        let bytes = encode_terminated_bytes(&["gaff"], &alphabet()).unwrap();
        assert_eq!(bytes, vec![0b0000_0000, 0b0001_0100, 0b0010_0100, 0b1110_0000]);
    }

    #[test]
    fn encode_rejects_invalid_word_before_writing() {
        assert!(matches!(
            encode_terminated(&["ab"], &alphabet()),
            Err(CodecError::InvalidWord(_))
        ));
    }

    #[test]
    fn truncated_payload_is_end_of_stream() {
        let mut bytes = encode_terminated_bytes(&["face", "bead"], &alphabet()).unwrap();
        bytes.pop();
        assert_eq!(
            decode_terminated_bytes(&bytes, &alphabet()),
            Err(CodecError::EndOfStream)
        );
    }

    #[test]
    fn decoded_words_are_revalidated() {
        // Hand-build a payload whose only word is too short: "gaa" (symbols 2 0 0, sentinel)
        let mut writer = BitWriter::new();
        writer.write(1, COUNT_BITS).unwrap();
        for symbol in [2, 0, 0, SENTINEL] {
            writer.write(symbol, SYMBOL_BITS).unwrap();
        }
        let bytes = writer.finish();
        assert!(matches!(
            decode_terminated_bytes(&bytes, &alphabet()),
            Err(CodecError::InvalidWord(_))
        ));
    }

    #[test]
    fn oversized_word_count_overflows_count_field() {
        let words: Vec<&str> = std::iter::repeat_n("face", 4096).collect();
        assert!(matches!(
            encode_terminated(&words, &alphabet()),
            Err(CodecError::ValueOutOfRange { bits: 12, .. })
        ));
    }

    #[test]
    fn count_field_at_capacity_round_trips() {
        let words: Vec<&str> = std::iter::repeat_n("face", 4095).collect();
        let payload = encode_terminated(&words, &alphabet()).unwrap();
        let decoded = decode_terminated(&payload, &alphabet()).unwrap();
        assert_eq!(decoded.len(), 4095);
    }
}
