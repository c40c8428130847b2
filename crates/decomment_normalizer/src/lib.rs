//! decomment_normalizer: Trailing-whitespace normalization.
//!
//! Runs after comment stripping, which tends to leave spaces in front of
//! the place a `//` comment used to be. Each line keeps its own terminator,
//! so a file mixing `\n` and `\r\n` keeps mixing them line for line.

use decomment_core::lines;

/// Result of normalizing a text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Normalized {
    pub text: String,
    /// Number of lines that had trailing whitespace removed.
    pub lines_trimmed: usize,
}

/// Trim trailing whitespace from every line of `text`, keeping terminators.
///
/// Idempotent: normalizing a normalized text returns it unchanged.
pub fn normalize_lines(text: &str) -> String {
    normalize(text).text
}

/// Like [`normalize_lines`], also counting the lines that changed.
pub fn normalize(text: &str) -> Normalized {
    let mut out = String::with_capacity(text.len());
    let mut lines_trimmed = 0;

    for line in lines(text) {
        if line.has_trailing_white_space() {
            lines_trimmed += 1;
            out.push_str(line.trimmed_content());
        } else {
            out.push_str(line.content);
        }
        out.push_str(line.terminator.as_str());
    }

    Normalized { text: out, lines_trimmed }
}
