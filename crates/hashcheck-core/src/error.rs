//! # Error Types
//!
//! Faults raised while computing digests. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - A malformed user-supplied hash is NOT an error. It is reported as
//!   [`ValidationResult::Invalid`](crate::validate::ValidationResult) so the
//!   caller can display it as an expected, recoverable outcome.
//! - Single-hash failures propagate to the caller unchanged.
//! - The batch runner turns each error into a per-algorithm failure reason
//!   using the `Display` text below.

use thiserror::Error;

use crate::algorithm::Algorithm;

/// Top-level error type for digest computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashcheckError {
    /// The algorithm identifier is not one of the SHA-2 family names.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The digest provider rejected or failed the computation.
    #[error("failed to generate {algorithm} hash: {reason}")]
    Provider {
        /// Algorithm that was requested.
        algorithm: Algorithm,
        /// Provider-supplied reason.
        reason: String,
    },

    /// The provider returned a digest of the wrong size.
    #[error("{algorithm} digest must be {expected} bytes, provider returned {actual}")]
    DigestLength {
        /// Algorithm that was requested.
        algorithm: Algorithm,
        /// Raw byte length required by the algorithm.
        expected: usize,
        /// Raw byte length actually returned.
        actual: usize,
    },

    /// Input bytes could not be interpreted as text.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A hex string could not be decoded to bytes.
    #[error("hex decode error: {0}")]
    HexDecode(String),
}

/// Result alias for fallible digest operations.
pub type Result<T> = std::result::Result<T, HashcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_names_algorithm() {
        let err = HashcheckError::Provider {
            algorithm: Algorithm::Sha384,
            reason: "not supported".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to generate SHA-384 hash: not supported"
        );
    }

    #[test]
    fn digest_length_error_message() {
        let err = HashcheckError::DigestLength {
            algorithm: Algorithm::Sha256,
            expected: 32,
            actual: 31,
        };
        assert_eq!(
            err.to_string(),
            "SHA-256 digest must be 32 bytes, provider returned 31"
        );
    }

    #[test]
    fn unsupported_algorithm_message() {
        let err = HashcheckError::UnsupportedAlgorithm("MD5".to_string());
        assert_eq!(err.to_string(), "unsupported hash algorithm: MD5");
    }
}
