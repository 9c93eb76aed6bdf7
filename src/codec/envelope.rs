//! Text envelope around raw codec bytes
//!
//! Payloads travel as URL-safe base64 with the trailing `=` padding stripped,
//! so they drop into query strings and file names unescaped.

use crate::codec::CodecError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Encode raw bytes as unpadded URL-safe base64
#[must_use]
pub fn wrap(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode an envelope back into raw bytes
///
/// Accepts payloads with or without their `=` padding reinstated.
///
/// # Errors
/// Returns `CodecError::Envelope` for malformed base64 text.
pub fn unwrap(text: &str) -> Result<Vec<u8>, CodecError> {
    URL_SAFE_NO_PAD
        .decode(text.trim_end_matches('='))
        .map_err(|err| CodecError::Envelope(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_strips_padding() {
        // Two input bytes would normally encode with a single '='
        let text = wrap(&[0xFF, 0xEE]);
        assert!(!text.contains('='));
        assert_eq!(text.len(), 3);
    }

    #[test]
    fn wrap_uses_url_safe_alphabet() {
        // 0xFB 0xEF encodes to characters from the -_ range in URL-safe base64
        let text = wrap(&[0xFB, 0xEF, 0xBE]);
        assert!(!text.contains('+'));
        assert!(!text.contains('/'));
    }

    #[test]
    fn round_trip() {
        let bytes = vec![0, 1, 2, 250, 251, 252];
        assert_eq!(unwrap(&wrap(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn round_trip_empty() {
        assert_eq!(unwrap(&wrap(&[])).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn unwrap_accepts_reinstated_padding() {
        let text = wrap(&[0xFF, 0xEE]);
        let padded = format!("{text}=");
        assert_eq!(unwrap(&padded).unwrap(), vec![0xFF, 0xEE]);
    }

    #[test]
    fn unwrap_rejects_malformed_text() {
        assert!(matches!(unwrap("not base64!!"), Err(CodecError::Envelope(_))));
        assert!(matches!(unwrap("a"), Err(CodecError::Envelope(_))));
    }
}
