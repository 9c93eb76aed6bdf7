//! Length-prefixed encoding
//!
//! Wire format: 12-bit word count, then per word a 5-bit `length - 4` field
//! (lengths 4 through 35) followed by exactly that many 3-bit letter symbols.
//! No sentinel is needed. Order-preserving.

use crate::codec::bits::{BitReader, BitWriter};
use crate::codec::{COUNT_BITS, CodecError, envelope};
use crate::core::{Alphabet, MIN_WORD_LEN, SYMBOL_BITS, clean_words};

/// Bit width of the `length - 4` field
const LEN_BITS: u32 = 5;

/// Longest word the 5-bit length field can carry
const MAX_WORD_LEN: usize = MIN_WORD_LEN + (1 << LEN_BITS) - 1;

/// Encode a word set with per-word length prefixes
///
/// # Errors
/// Returns `CodecError::InvalidWord` if any word fails validation, or
/// `CodecError::FieldOverflow` if a word is longer than 35 letters.
pub fn encode_length_prefixed<S: AsRef<str>>(
    words: &[S],
    alphabet: &Alphabet,
) -> Result<String, CodecError> {
    let cleaned = clean_words(words, alphabet)?;
    let mut writer = BitWriter::new();
    writer.write(cleaned.len() as u64, COUNT_BITS)?;
    for word in &cleaned {
        let len = word.len();
        if len > MAX_WORD_LEN {
            return Err(CodecError::FieldOverflow {
                field: "Word length",
                value: len,
                max: MAX_WORD_LEN,
            });
        }
        writer.write((len - MIN_WORD_LEN) as u64, LEN_BITS)?;
        for ch in word.chars() {
            let symbol = alphabet
                .symbol(ch)
                .expect("clean_words only passes puzzle letters");
            writer.write(symbol, SYMBOL_BITS)?;
        }
    }
    Ok(envelope::wrap(&writer.finish()))
}

/// Decode a length-prefixed payload back into its word set
///
/// # Errors
/// Returns `CodecError::Envelope` for malformed text, `CodecError::EndOfStream`
/// for a truncated payload, `CodecError::InvalidSymbol` if a letter field holds
/// the sentinel, or `CodecError::InvalidWord` if a decoded word fails validation.
pub fn decode_length_prefixed(
    payload: &str,
    alphabet: &Alphabet,
) -> Result<Vec<String>, CodecError> {
    let bytes = envelope::unwrap(payload)?;
    let mut reader = BitReader::new(&bytes);
    let total = reader.read(COUNT_BITS)?;

    let mut words = Vec::with_capacity(total as usize);
    for _ in 0..total {
        let len = reader.read(LEN_BITS)? as usize + MIN_WORD_LEN;
        let mut word = String::with_capacity(len);
        for _ in 0..len {
            let symbol = reader.read(SYMBOL_BITS)?;
            let letter = alphabet
                .letter(symbol)
                .ok_or(CodecError::InvalidSymbol(symbol))?;
            word.push(letter);
        }
        words.push(word);
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
        let payload = encode_length_prefixed(&words, &alphabet()).unwrap();
        let decoded = decode_length_prefixed(&payload, &alphabet()).unwrap();
        assert_eq!(decoded, vec!["face", "bead"]);
    }

    #[test]
    fn round_trip_empty_set() {
        let payload = encode_length_prefixed::<&str>(&[], &alphabet()).unwrap();
        let decoded = decode_length_prefixed(&payload, &alphabet()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn round_trip_varied_lengths() {
        let words = ["gaff", "badge", "cabbage", "defaced"];
        let payload = encode_length_prefixed(&words, &alphabet()).unwrap();
        let decoded = decode_length_prefixed(&payload, &alphabet()).unwrap();
        assert_eq!(decoded, words);
    }

    #[test]
    fn boundary_lengths_round_trip() {
        // 4 letters maps to field value 0, 35 letters to field value 31
        let longest: String = std::iter::repeat_n('a', 34).chain(['b']).collect();
        let words = ["gaff".to_string(), longest.clone()];
        let payload = encode_length_prefixed(&words, &alphabet()).unwrap();
        let decoded = decode_length_prefixed(&payload, &alphabet()).unwrap();
        assert_eq!(decoded, vec!["gaff".to_string(), longest]);
    }

    #[test]
    fn encode_rejects_word_longer_than_field() {
        let too_long: String = std::iter::repeat_n('a', 35).chain(['b']).collect();
        assert_eq!(
            encode_length_prefixed(&[too_long], &alphabet()),
            Err(CodecError::FieldOverflow {
                field: "Word length",
                value: 36,
                max: 35,
            })
        );
    }

    #[test]
    fn encode_rejects_invalid_word_before_writing() {
        assert!(matches!(
            encode_length_prefixed(&["ab"], &alphabet()),
            Err(CodecError::InvalidWord(_))
        ));
    }

    #[test]
    fn truncated_payload_is_end_of_stream() {
        let payload = encode_length_prefixed(&["face", "bead"], &alphabet()).unwrap();
        let mut bytes = envelope::unwrap(&payload).unwrap();
        bytes.pop();
        let truncated = envelope::wrap(&bytes);
        assert_eq!(
            decode_length_prefixed(&truncated, &alphabet()),
            Err(CodecError::EndOfStream)
        );
    }

    #[test]
    fn sentinel_in_letter_field_is_invalid_symbol() {
        let mut writer = BitWriter::new();
        writer.write(1, COUNT_BITS).unwrap();
        writer.write(0, LEN_BITS).unwrap(); // 4-letter word
        writer.write(7, SYMBOL_BITS).unwrap(); // sentinel where a letter belongs
        writer.write(0, SYMBOL_BITS).unwrap();
        writer.write(0, SYMBOL_BITS).unwrap();
        writer.write(0, SYMBOL_BITS).unwrap();
        let payload = envelope::wrap(&writer.finish());
        assert_eq!(
            decode_length_prefixed(&payload, &alphabet()),
            Err(CodecError::InvalidSymbol(7))
        );
    }
}
