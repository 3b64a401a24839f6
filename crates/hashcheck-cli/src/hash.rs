//! # Hash Subcommand
//!
//! Generate one digest of the input text.
//!
//! ```bash
//! hashcheck hash "hello"
//! hashcheck hash --algorithm SHA-512 --file notes.txt
//! echo -n hello | hashcheck hash
//! ```

use anyhow::Result;
use clap::Args;

use hashcheck_core::{compute_hex, Algorithm, DigestProvider};

use crate::config::Config;
use crate::input::{require_text, InputArgs};
use crate::output::render_digest;

/// Arguments for the hash subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Digest algorithm (SHA-224, SHA-256, SHA-384, SHA-512).
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,
}

/// Execute the hash subcommand.
pub async fn run_hash<P: DigestProvider>(
    args: &HashArgs,
    config: &Config,
    provider: &P,
) -> Result<u8> {
    let text = require_text(args.input.read()?, "Please enter some text to hash")?;
    let out = hash_text(&text, args.algorithm, config, provider).await?;
    println!("{out}");
    Ok(0)
}

/// Compute and render the digest of `text`.
pub async fn hash_text<P: DigestProvider>(
    text: &str,
    algorithm: Option<Algorithm>,
    config: &Config,
    provider: &P,
) -> Result<String> {
    let algorithm = algorithm.unwrap_or(config.default_algorithm);
    tracing::info!(%algorithm, "generating hash");
    let digest = compute_hex(provider, text, algorithm).await?;
    render_digest(&digest, config.output, config.group_size)
}
