//! # Text Encoding
//!
//! All digests are computed over the UTF-8 encoding of the input text.
//! A `&str` is already UTF-8, so encoding is infallible; the fallible
//! direction is turning raw bytes read from a file or stdin into text.

use crate::error::{HashcheckError, Result};

/// UTF-8 bytes of `text`.
pub fn encode_text(text: &str) -> &[u8] {
    text.as_bytes()
}

/// Interpret raw input bytes as UTF-8 text.
///
/// Binary input is out of scope, so invalid UTF-8 is reported as an
/// [`HashcheckError::Encoding`] failure rather than hashed as-is.
pub fn decode_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        HashcheckError::Encoding(format!(
            "input is not valid UTF-8 (first invalid byte at offset {})",
            e.utf8_error().valid_up_to()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_utf8() {
        assert_eq!(encode_text("abc"), b"abc");
        assert_eq!(encode_text("é"), &[0xc3, 0xa9]);
        assert!(encode_text("").is_empty());
    }

    #[test]
    fn decode_valid_utf8() {
        assert_eq!(decode_text(b"hello".to_vec()).unwrap(), "hello");
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let err = decode_text(vec![b'o', b'k', 0xff, 0xfe]).unwrap_err();
        assert_eq!(
            err,
            HashcheckError::Encoding(
                "input is not valid UTF-8 (first invalid byte at offset 2)".to_string()
            )
        );
    }
}
