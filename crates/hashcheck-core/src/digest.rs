//! # Hex Digests and the Single-Hash Pipeline
//!
//! Defines `HexDigest` and [`compute_hex`], the text → bytes → provider →
//! hex pipeline that every other operation in the crate is built on.
//!
//! ## Invariant
//!
//! A `HexDigest` can only be built from raw bytes whose length matches its
//! algorithm, so its hex length is always `algorithm.hex_len()`. A provider
//! that returns the wrong number of bytes yields
//! [`HashcheckError::DigestLength`] instead of a malformed digest.

use serde::Serialize;

use crate::algorithm::Algorithm;
use crate::codec;
use crate::error::{HashcheckError, Result};
use crate::provider::DigestProvider;
use crate::text::encode_text;

/// A lowercase hex digest tagged with the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HexDigest {
    algorithm: Algorithm,
    hex: String,
}

impl HexDigest {
    /// Build a digest from raw provider output.
    ///
    /// Fails if `bytes` is not exactly `algorithm.byte_len()` long.
    pub fn from_bytes(algorithm: Algorithm, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != algorithm.byte_len() {
            return Err(HashcheckError::DigestLength {
                algorithm,
                expected: algorithm.byte_len(),
                actual: bytes.len(),
            });
        }
        Ok(Self {
            algorithm,
            hex: codec::encode(bytes),
        })
    }

    /// The algorithm that produced this digest.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The lowercase hex string.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Decode back to raw digest bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        codec::decode(&self.hex)
    }
}

impl std::fmt::Display for HexDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex)
    }
}

impl AsRef<str> for HexDigest {
    fn as_ref(&self) -> &str {
        &self.hex
    }
}

/// Compute the hex digest of `text` with `algorithm`.
///
/// Failures are returned to the caller immediately; nothing is retried.
pub async fn compute_hex<P>(provider: &P, text: &str, algorithm: Algorithm) -> Result<HexDigest>
where
    P: DigestProvider,
{
    let bytes = encode_text(text);
    let raw = provider.digest(algorithm, bytes).await?;
    let digest = HexDigest::from_bytes(algorithm, &raw)?;
    tracing::debug!(
        provider = provider.name(),
        %algorithm,
        input_len = bytes.len(),
        "computed digest"
    );
    Ok(digest)
}
