//! # hashcheck-core — SHA-2 Digest Generation and Verification
//!
//! A thin orchestration layer over a SHA-2 digest primitive. The primitive
//! sits behind the [`DigestProvider`] trait; [`Sha2Provider`] backs it with
//! the RustCrypto `sha2` crate. Everything in this crate is the logic around
//! that call:
//!
//! - [`codec`] — lowercase hex encoding of digest bytes.
//! - [`validate`](mod@validate) — is a user-supplied string a well-formed digest for an
//!   algorithm?
//! - [`compare`](mod@compare) — case- and whitespace-insensitive digest equality.
//! - [`batch`] — one text under every algorithm, with per-algorithm failure
//!   isolation.
//! - [`verify`](mod@verify) — validate, compute, compare.
//!
//! ## Example
//!
//! ```
//! use hashcheck_core::{compute_hex, Algorithm, Sha2Provider};
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let digest = compute_hex(&Sha2Provider, "abc", Algorithm::Sha256).await.unwrap();
//! assert_eq!(
//!     digest.as_str(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # });
//! ```
//!
//! ## Crate Policy
//!
//! - No SHA-2 internals are implemented here.
//! - No shared mutable state; every call is independent.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod algorithm;
pub mod batch;
pub mod codec;
pub mod compare;
pub mod digest;
pub mod error;
pub mod format;
pub mod provider;
pub mod sample;
pub mod text;
pub mod validate;
pub mod verify;

// Re-export primary types for ergonomic imports.
pub use algorithm::{Algorithm, ALGORITHM_COUNT};
pub use batch::{BatchEntry, BatchOutcome, BatchResult, BatchRunner};
pub use compare::{compare, ComparisonOutcome};
pub use digest::{compute_hex, HexDigest};
pub use error::{HashcheckError, Result};
pub use format::{group_hex, DEFAULT_GROUP_SIZE};
pub use provider::{DigestProvider, Sha2Provider};
pub use sample::SAMPLE_TEXT;
pub use text::{decode_text, encode_text};
pub use validate::{normalize, validate, InvalidHash, ValidationResult};
pub use verify::{verify, VerifyOutcome};
