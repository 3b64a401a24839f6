//! # Verification Workflow
//!
//! Validate the user-supplied digest, compute the digest of the text, and
//! compare. A malformed digest short-circuits before the provider is
//! called.

use serde::Serialize;

use crate::algorithm::Algorithm;
use crate::compare::{compare, ComparisonOutcome};
use crate::digest::{compute_hex, HexDigest};
use crate::error::Result;
use crate::provider::DigestProvider;
use crate::validate::{validate, InvalidHash, ValidationResult};

/// Result of [`verify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VerifyOutcome {
    /// The supplied digest is not well-formed for the algorithm.
    Malformed {
        /// Why it was rejected.
        reason: InvalidHash,
    },
    /// The text hashes to the supplied digest.
    Match {
        /// The computed digest.
        digest: HexDigest,
    },
    /// The text hashes to something else.
    Mismatch {
        /// The supplied digest, normalized.
        expected: String,
        /// The computed digest.
        actual: String,
    },
}

impl VerifyOutcome {
    /// Whether verification succeeded.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

/// Check that `text` hashes to `expected` under `algorithm`.
///
/// Provider failures are returned as `Err`; a malformed or non-matching
/// digest is an `Ok` outcome.
pub async fn verify<P: DigestProvider>(
    provider: &P,
    text: &str,
    expected: &str,
    algorithm: Algorithm,
) -> Result<VerifyOutcome> {
    if let ValidationResult::Invalid(reason) = validate(expected, algorithm) {
        tracing::debug!(%algorithm, %reason, "rejected malformed digest");
        return Ok(VerifyOutcome::Malformed { reason });
    }

    let digest = compute_hex(provider, text, algorithm).await?;
    let outcome = match compare(&digest, expected) {
        ComparisonOutcome::Match => VerifyOutcome::Match { digest },
        ComparisonOutcome::Mismatch { expected, actual } => {
            VerifyOutcome::Mismatch { expected, actual }
        }
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::HashcheckError;
    use crate::provider::Sha2Provider;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    /// Counts calls and delegates to `Sha2Provider`.
    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl DigestProvider for CountingProvider {
        fn name(&self) -> &str {
            "counting"
        }

        async fn digest(&self, algorithm: Algorithm, bytes: &[u8]) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Sha2Provider::digest_sync(algorithm, bytes))
        }
    }

    struct BrokenProvider;

    impl DigestProvider for BrokenProvider {
        fn name(&self) -> &str {
            "broken"
        }

        async fn digest(&self, algorithm: Algorithm, _bytes: &[u8]) -> Result<Vec<u8>> {
            Err(HashcheckError::Provider {
                algorithm,
                reason: "platform error".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn matching_digest() {
        let outcome = verify(&Sha2Provider, "abc", ABC_SHA256, Algorithm::Sha256)
            .await
            .unwrap();
        assert!(outcome.is_match());
    }

    #[tokio::test]
    async fn uppercase_grouped_digest_matches() {
        let supplied = crate::format::group_hex(&ABC_SHA256.to_uppercase(), 8);
        let outcome = verify(&Sha2Provider, "abc", &supplied, Algorithm::Sha256)
            .await
            .unwrap();
        assert!(outcome.is_match());
    }

    #[tokio::test]
    async fn different_text_mismatches() {
        let outcome = verify(&Sha2Provider, "abd", ABC_SHA256, Algorithm::Sha256)
            .await
            .unwrap();
        match outcome {
            VerifyOutcome::Mismatch { expected, actual } => {
                assert_eq!(expected, ABC_SHA256);
                assert_ne!(actual, ABC_SHA256);
                assert_eq!(actual.len(), 64);
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_digest_skips_provider() {
        let provider = CountingProvider::default();
        let outcome = verify(&provider, "abc", "not-a-hash", Algorithm::Sha256)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            VerifyOutcome::Malformed {
                reason: InvalidHash::LengthMismatch {
                    expected: 64,
                    actual: 10
                }
            }
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn wrong_algorithm_is_malformed() {
        let outcome = verify(&Sha2Provider, "abc", ABC_SHA256, Algorithm::Sha384)
            .await
            .unwrap();
        assert!(matches!(outcome, VerifyOutcome::Malformed { .. }));
    }

    #[tokio::test]
    async fn provider_failure_is_an_error() {
        let err = verify(&BrokenProvider, "abc", ABC_SHA256, Algorithm::Sha256)
            .await
            .unwrap_err();
        assert!(matches!(err, HashcheckError::Provider { .. }));
    }
}
