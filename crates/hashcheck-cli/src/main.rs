//! # hashcheck CLI entry point
//!
//! Parses command-line arguments, loads configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hashcheck_cli::batch::{run_batch, BatchArgs};
use hashcheck_cli::config::Config;
use hashcheck_cli::hash::{run_hash, HashArgs};
use hashcheck_cli::sample::run_sample;
use hashcheck_cli::verify::{run_verify, VerifyArgs};
use hashcheck_core::Sha2Provider;

/// Generate and verify SHA-2 digests of text.
#[derive(Parser, Debug)]
#[command(name = "hashcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Group hex output into chunks for readability.
    #[arg(long, global = true)]
    group: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the digest of some text.
    Hash(HashArgs),

    /// Check text against an expected digest.
    Verify(VerifyArgs),

    /// Generate SHA-224, SHA-256, SHA-384 and SHA-512 digests at once.
    Batch(BatchArgs),

    /// Hash and verify a built-in sample text.
    Sample,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("hashcheck v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    let mut config = Config::resolve(cli.config.as_deref())?;
    config.apply_flags(cli.json, cli.group);
    tracing::debug!(?config, "resolved configuration");

    let provider = Sha2Provider::new();
    match cli.command {
        Commands::Hash(args) => run_hash(&args, &config, &provider).await,
        Commands::Verify(args) => run_verify(&args, &config, &provider).await,
        Commands::Batch(args) => run_batch(&args, &config, &provider).await,
        Commands::Sample => run_sample(&config, &provider).await,
    }
}
