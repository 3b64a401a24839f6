//! # Input Collection
//!
//! Text comes from the positional argument, else `--file`, else stdin.
//! Blank input is rejected here; the core library itself hashes empty
//! text without complaint.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use hashcheck_core::decode_text;

/// Where to read the text to hash.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to hash. Read from --file or stdin when absent.
    pub text: Option<String>,

    /// Read the text from a file instead.
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Resolve the input text, reading stdin if needed.
    pub fn read(&self) -> Result<String> {
        self.read_from(std::io::stdin().lock())
    }

    /// Resolve the input text, using `stdin` when no text or file is given.
    pub fn read_from(&self, mut stdin: impl Read) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return read_file(path);
        }
        let mut bytes = Vec::new();
        stdin
            .read_to_end(&mut bytes)
            .context("failed to read text from stdin")?;
        Ok(decode_text(bytes)?)
    }
}

fn read_file(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    decode_text(bytes).with_context(|| format!("in {}", path.display()))
}

/// Reject input that is empty or whitespace-only.
pub fn require_text(text: String, message: &str) -> Result<String> {
    if text.trim().is_empty() {
        bail!("{message}");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_text_wins() {
        let args = InputArgs {
            text: Some("abc".to_string()),
            file: None,
        };
        assert_eq!(args.read_from(&b"ignored"[..]).unwrap(), "abc");
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "from file").unwrap();
        let args = InputArgs {
            text: None,
            file: Some(path),
        };
        assert_eq!(args.read_from(&b""[..]).unwrap(), "from file");
    }

    #[test]
    fn falls_back_to_stdin_verbatim() {
        let args = InputArgs::default();
        assert_eq!(args.read_from(&b"abc\n"[..]).unwrap(), "abc\n");
    }

    #[test]
    fn non_utf8_file_is_an_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let args = InputArgs {
            text: None,
            file: Some(path),
        };
        let err = args.read_from(&b""[..]).unwrap_err();
        assert!(format!("{err:#}").contains("not valid UTF-8"));
    }

    #[test]
    fn missing_file_names_path() {
        let args = InputArgs {
            text: None,
            file: Some(PathBuf::from("/nonexistent/input.txt")),
        };
        let err = args.read_from(&b""[..]).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/input.txt"));
    }

    #[test]
    fn blank_text_rejected() {
        for blank in ["", "   ", "\n\t"] {
            let err =
                require_text(blank.to_string(), "Please enter some text to hash").unwrap_err();
            assert_eq!(err.to_string(), "Please enter some text to hash");
        }
    }

    #[test]
    fn non_blank_text_kept_verbatim() {
        assert_eq!(require_text(" a ".to_string(), "x").unwrap(), " a ");
    }
}
