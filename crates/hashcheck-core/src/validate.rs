//! # Hash-String Validation
//!
//! Decides whether a user-supplied string is a well-formed digest for a
//! given algorithm. The check is lenient about presentation: all whitespace
//! is ignored and uppercase hex is accepted.
//!
//! A malformed string is an expected outcome, reported as
//! [`ValidationResult::Invalid`], never as an error.

use serde::Serialize;
use thiserror::Error;

use crate::algorithm::Algorithm;

/// Why a candidate hash string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvalidHash {
    /// Normalized length differs from the algorithm's hex length.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Hex length required by the algorithm.
        expected: usize,
        /// Length of the normalized candidate, in characters.
        actual: usize,
    },

    /// A character outside `[0-9a-f]` remains after normalization.
    #[error("contains non-hexadecimal characters")]
    NonHex,
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ValidationResult {
    /// The candidate is a well-formed digest for the algorithm.
    Valid,
    /// The candidate is malformed.
    Invalid(InvalidHash),
}

impl ValidationResult {
    /// Whether the candidate was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Human-readable rejection reason, if any.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::Invalid(why) => Some(why.to_string()),
        }
    }
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Strip every whitespace character and lowercase the rest.
///
/// Whitespace is Unicode `White_Space` plus the byte-order mark U+FEFF.
///
/// The comparator uses the same normalization, so any string accepted here
/// compares equal to the digest it spells.
pub fn normalize(candidate: &str) -> String {
    candidate
        .chars()
        .filter(|c| !c.is_whitespace() && *c != BYTE_ORDER_MARK)
        .collect::<String>()
        .to_lowercase()
}

/// Validate `candidate` as a hex digest for `algorithm`.
///
/// An empty candidate fails the length check like any other short string.
pub fn validate(candidate: &str, algorithm: Algorithm) -> ValidationResult {
    let normalized = normalize(candidate);
    let expected = algorithm.hex_len();
    let actual = normalized.chars().count();

    let result = if actual != expected {
        ValidationResult::Invalid(InvalidHash::LengthMismatch { expected, actual })
    } else if !normalized
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    {
        ValidationResult::Invalid(InvalidHash::NonHex)
    } else {
        ValidationResult::Valid
    };

    tracing::debug!(%algorithm, valid = result.is_valid(), "validated hash string");
    result
}
