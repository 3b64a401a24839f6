//! # Output Rendering
//!
//! Text output is one human-readable block per result; JSON output
//! serializes the core result types directly.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use hashcheck_core::{group_hex, Algorithm, BatchOutcome, BatchResult, HexDigest, VerifyOutcome};

/// Result presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Apply optional grouping to a hex string.
pub fn present_hex(hex: &str, group_size: Option<usize>) -> String {
    match group_size {
        Some(n) => group_hex(hex, n),
        None => hex.to_string(),
    }
}

/// Render a single digest.
pub fn render_digest(
    digest: &HexDigest,
    format: OutputFormat,
    group_size: Option<usize>,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(present_hex(digest.as_str(), group_size)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(digest)?),
    }
}

/// Render a verification outcome.
pub fn render_verify(
    outcome: &VerifyOutcome,
    algorithm: Algorithm,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(outcome)?);
    }
    let text = match outcome {
        VerifyOutcome::Match { .. } => format!(
            "Hash verification successful!\nThe text matches the provided {algorithm} hash."
        ),
        VerifyOutcome::Mismatch { expected, actual } => format!(
            "Hash verification failed!\n\
             The text does not match the provided {algorithm} hash.\n\
             Expected:  {expected}\n\
             Generated: {actual}"
        ),
        VerifyOutcome::Malformed { reason } => format!("Invalid hash format\n{reason}"),
    };
    Ok(text)
}

/// Render a batch result, one line per algorithm.
pub fn render_batch(
    result: &BatchResult,
    format: OutputFormat,
    group_size: Option<usize>,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(result)?);
    }
    let lines: Vec<String> = result
        .entries()
        .iter()
        .map(|entry| match &entry.outcome {
            BatchOutcome::Success(digest) => format!(
                "{:<8} {}",
                entry.algorithm,
                present_hex(digest.as_str(), group_size)
            ),
            BatchOutcome::Failure(reason) => {
                format!("{:<8} Error: {reason}", entry.algorithm)
            }
        })
        .collect();
    Ok(lines.join("\n"))
}
