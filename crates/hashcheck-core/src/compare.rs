//! # Digest Comparison
//!
//! Compares a computed digest against a user-supplied string after
//! normalizing both with [`validate::normalize`](crate::validate::normalize).
//!
//! Equality is plain string comparison; it is not constant-time.

use serde::Serialize;

use crate::digest::HexDigest;
use crate::validate::normalize;

/// Outcome of [`compare`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// The user-supplied string spells the computed digest.
    Match,
    /// The strings differ. Both are normalized.
    Mismatch {
        /// The user-supplied digest.
        expected: String,
        /// The computed digest.
        actual: String,
    },
}

impl ComparisonOutcome {
    /// Whether the digests matched.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

/// Compare `computed` with `user_supplied`, ignoring case and whitespace.
pub fn compare(computed: &HexDigest, user_supplied: &str) -> ComparisonOutcome {
    let actual = normalize(computed.as_str());
    let expected = normalize(user_supplied);
    if actual == expected {
        ComparisonOutcome::Match
    } else {
        tracing::debug!(algorithm = %computed.algorithm(), "digest mismatch");
        ComparisonOutcome::Mismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::provider::Sha2Provider;
    use proptest::prelude::*;

    fn digest_of(text: &str, algorithm: Algorithm) -> HexDigest {
        let raw = Sha2Provider::digest_sync(algorithm, text.as_bytes());
        HexDigest::from_bytes(algorithm, &raw).unwrap()
    }

    /// Replace the last character with a different hex digit.
    fn flip_last(hex: &str) -> String {
        let (head, last) = hex.split_at(hex.len() - 1);
        let replacement = if last == "0" { "1" } else { "0" };
        format!("{head}{replacement}")
    }

    #[test]
    fn identical_matches() {
        let d = digest_of("abc", Algorithm::Sha256);
        assert_eq!(compare(&d, d.as_str()), ComparisonOutcome::Match);
    }

    #[test]
    fn uppercase_matches() {
        let d = digest_of("abc", Algorithm::Sha384);
        assert!(compare(&d, &d.as_str().to_uppercase()).is_match());
    }

    #[test]
    fn trailing_whitespace_matches() {
        let d = digest_of("abc", Algorithm::Sha224);
        assert!(compare(&d, &format!("{d} ")).is_match());
        assert!(compare(&d, &format!("\n\t{d}\r\n")).is_match());
    }

    #[test]
    fn grouped_input_matches() {
        let d = digest_of("abc", Algorithm::Sha512);
        let grouped = crate::format::group_hex(d.as_str(), 8);
        assert!(compare(&d, &grouped).is_match());
    }

    #[test]
    fn flipped_last_char_mismatches() {
        let d = digest_of("abc", Algorithm::Sha256);
        let wrong = flip_last(d.as_str());
        assert_eq!(
            compare(&d, &wrong),
            ComparisonOutcome::Mismatch {
                expected: wrong.clone(),
                actual: d.as_str().to_string(),
            }
        );
    }

    #[test]
    fn mismatch_reports_normalized_strings() {
        let d = digest_of("abc", Algorithm::Sha256);
        let outcome = compare(&d, "  DEADBEEF ");
        match outcome {
            ComparisonOutcome::Mismatch { expected, actual } => {
                assert_eq!(expected, "deadbeef");
                assert_eq!(actual, d.as_str());
            }
            ComparisonOutcome::Match => panic!("expected mismatch"),
        }
    }

    proptest! {
        #[test]
        fn digest_always_matches_itself(text in ".{0,64}") {
            for algorithm in Algorithm::ALL {
                let d = digest_of(&text, algorithm);
                prop_assert!(compare(&d, d.as_str()).is_match());
                prop_assert!(compare(&d, &d.as_str().to_uppercase()).is_match());
                prop_assert!(!compare(&d, &flip_last(d.as_str())).is_match());
            }
        }
    }
}
