//! # Hex Codec
//!
//! Lowercase hexadecimal rendering of digest bytes, plus the inverse used
//! by tests and by [`HexDigest::to_bytes`](crate::digest::HexDigest::to_bytes).

use crate::error::{HashcheckError, Result};

/// Render bytes as lowercase hex, two zero-padded characters per byte.
pub fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Parse a hex string (either case) back into bytes.
pub fn decode(hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(HashcheckError::HexDecode(
            "hex string must have even length".to_string(),
        ));
    }
    if let Some(pos) = hex.bytes().position(|b| !b.is_ascii_hexdigit()) {
        return Err(HashcheckError::HexDecode(format!(
            "invalid hex character at position {pos}"
        )));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| HashcheckError::HexDecode(format!("invalid hex at position {i}: {e}")))
        })
        .collect()
}
