//! # Batch Digests
//!
//! Computes one input text under every SHA-2 algorithm.
//!
//! ## Partial-Failure Isolation
//!
//! Each algorithm runs the single-hash pipeline on its own. A failure is
//! recorded as [`BatchOutcome::Failure`] for that algorithm and the loop
//! moves on; it never aborts or skips the remaining algorithms. The result
//! therefore always holds exactly one entry per algorithm, in
//! [`Algorithm::ALL`] order.

use serde::Serialize;

use crate::algorithm::Algorithm;
use crate::digest::{compute_hex, HexDigest};
use crate::provider::DigestProvider;

/// Per-algorithm outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum BatchOutcome {
    /// Digest computed.
    Success(HexDigest),
    /// Digest failed; carries the human-readable reason.
    Failure(String),
}

/// One row of a [`BatchResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    /// Algorithm this row belongs to.
    pub algorithm: Algorithm,
    /// What happened.
    pub outcome: BatchOutcome,
}

/// Ordered results for every algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BatchResult {
    entries: Vec<BatchEntry>,
}

impl BatchResult {
    /// All entries in declared algorithm order.
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// The outcome for one algorithm.
    pub fn get(&self, algorithm: Algorithm) -> Option<&BatchOutcome> {
        self.entries
            .iter()
            .find(|e| e.algorithm == algorithm)
            .map(|e| &e.outcome)
    }

    /// Successful digests, in order.
    pub fn successes(&self) -> impl Iterator<Item = &HexDigest> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            BatchOutcome::Success(d) => Some(d),
            BatchOutcome::Failure(_) => None,
        })
    }

    /// Failed algorithms with their reasons, in order.
    pub fn failures(&self) -> impl Iterator<Item = (Algorithm, &str)> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            BatchOutcome::Failure(reason) => Some((e.algorithm, reason.as_str())),
            BatchOutcome::Success(_) => None,
        })
    }

    /// Whether every algorithm succeeded.
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }
}

impl IntoIterator for BatchResult {
    type Item = BatchEntry;
    type IntoIter = std::vec::IntoIter<BatchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Runs the single-hash pipeline for every algorithm against one provider.
#[derive(Debug, Clone)]
pub struct BatchRunner<'p, P> {
    provider: &'p P,
}

impl<'p, P: DigestProvider> BatchRunner<'p, P> {
    /// Create a runner borrowing `provider`.
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// Digest `text` under every algorithm, one at a time in declared order.
    pub async fn run_all(&self, text: &str) -> BatchResult {
        let mut entries = Vec::with_capacity(Algorithm::ALL.len());
        for algorithm in Algorithm::ALL {
            let outcome = match compute_hex(self.provider, text, algorithm).await {
                Ok(digest) => BatchOutcome::Success(digest),
                Err(e) => {
                    tracing::warn!(%algorithm, error = %e, "digest failed; continuing batch");
                    BatchOutcome::Failure(e.to_string())
                }
            };
            entries.push(BatchEntry { algorithm, outcome });
        }
        BatchResult { entries }
    }
}
