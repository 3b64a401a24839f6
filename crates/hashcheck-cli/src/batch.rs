//! # Batch Subcommand
//!
//! Generate every SHA-2 digest of the input text. A failing algorithm is
//! reported on its own line and does not stop the others; the exit status
//! is 1 if any algorithm failed.

use anyhow::Result;
use clap::Args;

use hashcheck_core::{BatchRunner, DigestProvider};

use crate::config::Config;
use crate::input::{require_text, InputArgs};
use crate::output::render_batch;

/// Arguments for the batch subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute the batch subcommand.
pub async fn run_batch<P: DigestProvider>(
    args: &BatchArgs,
    config: &Config,
    provider: &P,
) -> Result<u8> {
    let (out, code) = execute_batch(args, config, provider).await?;
    println!("{out}");
    Ok(code)
}

/// Render every digest and pick the exit code: 1 if any algorithm failed.
pub async fn execute_batch<P: DigestProvider>(
    args: &BatchArgs,
    config: &Config,
    provider: &P,
) -> Result<(String, u8)> {
    let text = require_text(args.input.read()?, "Please enter some text to generate hashes")?;
    let (out, complete) = batch_text(&text, config, provider).await?;
    Ok((out, if complete { 0 } else { 1 }))
}

/// Compute and render all digests; also reports whether every one succeeded.
pub async fn batch_text<P: DigestProvider>(
    text: &str,
    config: &Config,
    provider: &P,
) -> Result<(String, bool)> {
    tracing::info!("generating all SHA-2 hashes");
    let result = BatchRunner::new(provider).run_all(text).await;
    let out = render_batch(&result, config.output, config.group_size)?;
    Ok((out, result.is_complete()))
}
