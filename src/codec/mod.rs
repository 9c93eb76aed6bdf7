//! Compact encodings for puzzle answer lists
//!
//! Four strategies pack a validated word set into a bit stream wrapped in
//! URL-safe base64. Every payload starts with a 12-bit word count; the
//! strategies differ in how they delimit and delta-encode the words.

pub mod bits;
pub mod compressed;
pub mod envelope;
mod error;
pub mod front_coded;
pub mod length_prefixed;
pub mod terminated;

pub use bits::{BitReader, BitWriter, MAX_FIELD_BITS};
pub use compressed::{Compressor, Deflate, decode_compressed, encode_compressed};
pub use error::CodecError;
pub use front_coded::{decode_front_coded, encode_front_coded};
pub use length_prefixed::{decode_length_prefixed, encode_length_prefixed};
pub use terminated::{decode_terminated, encode_terminated};

use crate::core::Alphabet;

/// Bit width of the leading word-count field shared by every strategy
pub(crate) const COUNT_BITS: u32 = 12;

/// The available encoding strategies
///
/// `FrontCoded` canonicalizes to sorted order on decode; the other three
/// preserve the order words were supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Terminated,
    LengthPrefixed,
    FrontCoded,
    Compressed,
}

impl Encoding {
    /// Every strategy, in reporting order
    pub const ALL: [Self; 4] = [
        Self::Terminated,
        Self::LengthPrefixed,
        Self::FrontCoded,
        Self::Compressed,
    ];

    /// Stable name used on the CLI and in evaluation reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Terminated => "terminated",
            Self::LengthPrefixed => "length_prefixed",
            Self::FrontCoded => "front_coded",
            Self::Compressed => "compressed",
        }
    }

    /// Look up a strategy by name, `None` for unknown names
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "terminated" => Some(Self::Terminated),
            "length_prefixed" => Some(Self::LengthPrefixed),
            "front_coded" => Some(Self::FrontCoded),
            "compressed" => Some(Self::Compressed),
            _ => None,
        }
    }

    /// Encode a word set with this strategy
    ///
    /// The compressed strategy uses the default deflate compressor.
    ///
    /// # Errors
    /// Propagates the strategy's `CodecError`.
    pub fn encode<S: AsRef<str>>(
        self,
        words: &[S],
        alphabet: &Alphabet,
    ) -> Result<String, CodecError> {
        match self {
            Self::Terminated => encode_terminated(words, alphabet),
            Self::LengthPrefixed => encode_length_prefixed(words, alphabet),
            Self::FrontCoded => encode_front_coded(words, alphabet),
            Self::Compressed => encode_compressed(words, alphabet, &Deflate::default()),
        }
    }

    /// Decode a payload produced by this strategy
    ///
    /// # Errors
    /// Propagates the strategy's `CodecError`.
    pub fn decode(self, payload: &str, alphabet: &Alphabet) -> Result<Vec<String>, CodecError> {
        match self {
            Self::Terminated => decode_terminated(payload, alphabet),
            Self::LengthPrefixed => decode_length_prefixed(payload, alphabet),
            Self::FrontCoded => decode_front_coded(payload, alphabet),
            Self::Compressed => decode_compressed(payload, alphabet, &Deflate::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::new("abgcfed").unwrap()
    }

    #[test]
    fn from_name_round_trips() {
        for encoding in Encoding::ALL {
            assert_eq!(Encoding::from_name(encoding.name()), Some(encoding));
        }
    }

    #[test]
    fn from_name_accepts_dashes_and_case() {
        assert_eq!(
            Encoding::from_name("Length-Prefixed"),
            Some(Encoding::LengthPrefixed)
        );
        assert_eq!(Encoding::from_name("FRONT_CODED"), Some(Encoding::FrontCoded));
    }

    #[test]
    fn from_name_unknown_is_none() {
        assert_eq!(Encoding::from_name("huffman"), None);
    }

    #[test]
    fn every_strategy_round_trips_the_shared_scenario() {
        let words = ["face", "bead"];
        for encoding in Encoding::ALL {
            let payload = encoding.encode(&words, &alphabet()).unwrap();
            let decoded = encoding.decode(&payload, &alphabet()).unwrap();
            let expected: Vec<&str> = if encoding == Encoding::FrontCoded {
                vec!["bead", "face"]
            } else {
                vec!["face", "bead"]
            };
            assert_eq!(decoded, expected, "strategy {}", encoding.name());
        }
    }
}
