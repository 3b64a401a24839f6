//! # Configuration
//!
//! Optional YAML file passed with `--config`. Every key has a default, so
//! an empty file (or no file) is a valid configuration. Command-line flags
//! take precedence over values read here.
//!
//! ```yaml
//! default_algorithm: SHA-256
//! group_size: 8
//! output: text
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use hashcheck_core::{Algorithm, DEFAULT_GROUP_SIZE};

use crate::output::OutputFormat;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Algorithm used when `--algorithm` is not given.
    pub default_algorithm: Algorithm,
    /// Group hex output into chunks of this many characters.
    pub group_size: Option<usize>,
    /// Output format for results.
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::Sha256,
            group_size: None,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Parse a configuration from YAML text. Empty text yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("invalid configuration")
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Apply the global `--json` and `--group` flags.
    ///
    /// `--group` keeps a `group_size` already set in the file and falls back
    /// to [`DEFAULT_GROUP_SIZE`] otherwise.
    pub fn apply_flags(&mut self, json: bool, group: bool) {
        if json {
            self.output = OutputFormat::Json;
        }
        if group && self.group_size.is_none() {
            self.group_size = Some(DEFAULT_GROUP_SIZE);
        }
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let config = Self::load(p)?;
                tracing::debug!(path = %p.display(), ?config, "loaded configuration");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}
