//! # Digest Provider
//!
//! The seam between this crate and the hashing primitive. The crate never
//! implements SHA-2 compression itself; it asks a `DigestProvider` for raw
//! digest bytes and treats the call as an asynchronous operation that may
//! fail.
//!
//! [`Sha2Provider`] is the production implementation backed by the
//! RustCrypto `sha2` crate. Tests substitute providers that fail for
//! selected algorithms.

use std::future::Future;

use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::algorithm::Algorithm;
use crate::error::Result;

/// Source of raw digest bytes for a `(bytes, algorithm)` pair.
///
/// Implementations must be `Send + Sync` so a single provider can be shared
/// across async tasks. A call may fail, e.g. when the backing platform does
/// not support the requested algorithm.
pub trait DigestProvider: Send + Sync {
    /// Human-readable provider name, used in log events.
    fn name(&self) -> &str;

    /// Compute the raw digest of `bytes` with `algorithm`.
    fn digest(
        &self,
        algorithm: Algorithm,
        bytes: &[u8],
    ) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// `DigestProvider` backed by the `sha2` crate. Supports the whole family.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha2Provider;

impl Sha2Provider {
    /// Create a new provider.
    pub fn new() -> Self {
        Self
    }

    /// Synchronous digest computation.
    pub fn digest_sync(algorithm: Algorithm, bytes: &[u8]) -> Vec<u8> {
        match algorithm {
            Algorithm::Sha224 => Sha224::digest(bytes).to_vec(),
            Algorithm::Sha256 => Sha256::digest(bytes).to_vec(),
            Algorithm::Sha384 => Sha384::digest(bytes).to_vec(),
            Algorithm::Sha512 => Sha512::digest(bytes).to_vec(),
        }
    }
}

impl DigestProvider for Sha2Provider {
    fn name(&self) -> &str {
        "sha2"
    }

    async fn digest(&self, algorithm: Algorithm, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(Self::digest_sync(algorithm, bytes))
    }
}
