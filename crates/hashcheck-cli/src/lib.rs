//! # hashcheck-cli — SHA-2 Digest Command-Line Interface
//!
//! A clap-based front end over `hashcheck-core`.
//!
//! ## Subcommands
//!
//! - `hash` — Generate one digest
//! - `verify` — Check text against an expected digest
//! - `batch` — Generate all four SHA-2 digests
//! - `sample` — Run the tool on a built-in sample text
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live in one module per
//!   subcommand and take the provider as a parameter.
//! - Handlers return an exit code. Errors propagate as `anyhow::Error` and
//!   are logged once at the top level.
//! - Digest logic stays in `hashcheck-core`.

pub mod batch;
pub mod config;
pub mod hash;
pub mod input;
pub mod output;
pub mod sample;
pub mod verify;
