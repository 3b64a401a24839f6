//! # SHA-2 Algorithm Table
//!
//! Defines the closed `Algorithm` enum. This is the one definition of the
//! supported algorithm set; every `match` on it is exhaustive, so adding a
//! variant forces every consumer (provider, validator, batch runner) to
//! handle it at compile time.
//!
//! | Algorithm | Raw bytes | Hex chars |
//! |-----------|-----------|-----------|
//! | SHA-224   | 28        | 56        |
//! | SHA-256   | 32        | 64        |
//! | SHA-384   | 48        | 96        |
//! | SHA-512   | 64        | 128       |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::HashcheckError;

/// A member of the SHA-2 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    /// SHA-224, 28-byte digest.
    #[serde(rename = "SHA-224", alias = "sha224", alias = "sha-224")]
    Sha224,
    /// SHA-256, 32-byte digest.
    #[serde(rename = "SHA-256", alias = "sha256", alias = "sha-256")]
    Sha256,
    /// SHA-384, 48-byte digest.
    #[serde(rename = "SHA-384", alias = "sha384", alias = "sha-384")]
    Sha384,
    /// SHA-512, 64-byte digest.
    #[serde(rename = "SHA-512", alias = "sha512", alias = "sha-512")]
    Sha512,
}

/// Number of supported algorithms.
pub const ALGORITHM_COUNT: usize = 4;

impl Algorithm {
    /// All algorithms in declared order. Batch results follow this order.
    pub const ALL: [Algorithm; ALGORITHM_COUNT] =
        [Self::Sha224, Self::Sha256, Self::Sha384, Self::Sha512];

    /// Returns the canonical identifier, e.g. `"SHA-256"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Raw digest length in bytes.
    pub const fn byte_len(&self) -> usize {
        match self {
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Expected digest length in hex characters.
    pub const fn hex_len(&self) -> usize {
        self.byte_len() * 2
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = HashcheckError;

    /// Parse an algorithm identifier.
    ///
    /// Accepts the canonical names (`"SHA-256"`) in any case, and the
    /// dash-less forms (`"sha256"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SHA-224" | "SHA224" => Ok(Self::Sha224),
            "SHA-256" | "SHA256" => Ok(Self::Sha256),
            "SHA-384" | "SHA384" => Ok(Self::Sha384),
            "SHA-512" | "SHA512" => Ok(Self::Sha512),
            _ => Err(HashcheckError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}
