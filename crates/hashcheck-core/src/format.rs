//! Readability grouping for long hex strings.

/// Default group width used by the CLI when grouping is enabled.
pub const DEFAULT_GROUP_SIZE: usize = 8;

/// Split `hex` into space-separated groups of `chunk` characters.
///
/// The final group may be shorter. `chunk == 0` returns the input as-is.
pub fn group_hex(hex: &str, chunk: usize) -> String {
    if chunk == 0 {
        return hex.to_string();
    }
    hex.chars()
        .collect::<Vec<_>>()
        .chunks(chunk)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
