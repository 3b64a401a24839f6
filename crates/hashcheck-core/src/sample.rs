//! Sample input for demos and smoke tests.

/// Text loaded by `hashcheck sample`.
pub const SAMPLE_TEXT: &str = "Hello, World! This is a sample text for SHA-2 hashing.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_text_is_not_blank() {
        assert!(!SAMPLE_TEXT.trim().is_empty());
    }
}
