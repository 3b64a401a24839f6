//! # Verify Subcommand
//!
//! Check that the input text hashes to a given digest. The digest is
//! validated first; a malformed digest is reported without hashing.
//!
//! Exit status is 0 on a match and 1 on a mismatch or malformed digest.

use anyhow::Result;
use clap::Args;

use hashcheck_core::{verify, Algorithm, DigestProvider, VerifyOutcome};

use crate::config::Config;
use crate::input::{require_text, InputArgs};
use crate::output::render_verify;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Expected digest, in hex. Case and whitespace are ignored.
    #[arg(long = "hash", value_name = "HEX")]
    pub expected: String,

    /// Digest algorithm (SHA-224, SHA-256, SHA-384, SHA-512).
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,
}

const MISSING_INPUT: &str = "Please enter both the original text and the hash to verify";

/// Execute the verify subcommand.
pub async fn run_verify<P: DigestProvider>(
    args: &VerifyArgs,
    config: &Config,
    provider: &P,
) -> Result<u8> {
    let (out, code) = execute_verify(args, config, provider).await?;
    println!("{out}");
    Ok(code)
}

/// Render the verification report and pick the exit code.
pub async fn execute_verify<P: DigestProvider>(
    args: &VerifyArgs,
    config: &Config,
    provider: &P,
) -> Result<(String, u8)> {
    let text = require_text(args.input.read()?, MISSING_INPUT)?;
    let expected = require_text(args.expected.clone(), MISSING_INPUT)?;

    let algorithm = args.algorithm.unwrap_or(config.default_algorithm);
    let outcome = verify_text(&text, &expected, algorithm, provider).await?;
    let out = render_verify(&outcome, algorithm, config.output)?;
    Ok((out, if outcome.is_match() { 0 } else { 1 }))
}

/// Run verification and log the outcome.
pub async fn verify_text<P: DigestProvider>(
    text: &str,
    expected: &str,
    algorithm: Algorithm,
    provider: &P,
) -> Result<VerifyOutcome> {
    tracing::info!(%algorithm, "verifying hash");
    let outcome = verify(provider, text, expected, algorithm).await?;
    match &outcome {
        VerifyOutcome::Match { .. } => tracing::info!(%algorithm, "hash verified"),
        VerifyOutcome::Mismatch { .. } => tracing::info!(%algorithm, "hash mismatch"),
        VerifyOutcome::Malformed { reason } => {
            tracing::info!(%algorithm, %reason, "malformed hash")
        }
    }
    Ok(outcome)
}
