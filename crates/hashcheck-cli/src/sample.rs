//! # Sample Subcommand
//!
//! Demonstrates the tool on a built-in sample text: prints the text, its
//! SHA-256 digest, and the result of verifying that digest.

use anyhow::Result;
use serde::Serialize;

use hashcheck_core::{compute_hex, verify, Algorithm, DigestProvider, VerifyOutcome, SAMPLE_TEXT};

use crate::config::Config;
use crate::output::{present_hex, OutputFormat};

#[derive(Debug, Serialize)]
struct SampleReport {
    text: &'static str,
    algorithm: Algorithm,
    digest: String,
    verification: VerifyOutcome,
}

/// Execute the sample subcommand.
pub async fn run_sample<P: DigestProvider>(config: &Config, provider: &P) -> Result<u8> {
    let out = sample_report(config, provider).await?;
    println!("{out}");
    Ok(0)
}

/// Build the sample report.
pub async fn sample_report<P: DigestProvider>(config: &Config, provider: &P) -> Result<String> {
    let algorithm = Algorithm::Sha256;
    let digest = compute_hex(provider, SAMPLE_TEXT, algorithm).await?;
    let verification = verify(provider, SAMPLE_TEXT, digest.as_str(), algorithm).await?;

    let report = SampleReport {
        text: SAMPLE_TEXT,
        algorithm,
        digest: digest.to_string(),
        verification,
    };

    if config.output == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    let status = if report.verification.is_match() {
        "successful"
    } else {
        "failed"
    };
    Ok(format!(
        "Sample text: {}\n{algorithm}: {}\nVerification: {status}",
        report.text,
        present_hex(&report.digest, config.group_size),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashcheck_core::Sha2Provider;

    #[tokio::test]
    async fn text_report() {
        let out = sample_report(&Config::default(), &Sha2Provider).await.unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("Sample text: {SAMPLE_TEXT}"));
        assert!(lines[1].starts_with("SHA-256: "));
        assert_eq!(lines[1].len(), "SHA-256: ".len() + 64);
        assert_eq!(lines[2], "Verification: successful");
    }

    #[tokio::test]
    async fn json_report() {
        let config = Config {
            output: OutputFormat::Json,
            ..Config::default()
        };
        let out = sample_report(&config, &Sha2Provider).await.unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["text"], SAMPLE_TEXT);
        assert_eq!(v["algorithm"], "SHA-256");
        assert_eq!(v["verification"]["outcome"], "match");
    }
}
