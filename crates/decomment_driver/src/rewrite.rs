//! The in-memory pipeline: strip comments, then normalize lines.

use decomment_core::{LineAndColumn, LineMap};
use decomment_normalizer::normalize;
use decomment_scanner::{strip_comments_with_report, ScanState};

/// A literal or block comment still open at end of input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unterminated {
    pub state: ScanState,
    /// Where it opened, in the original text.
    pub start: LineAndColumn,
}

/// The rewritten text of one source, and how it differs from the original.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rewrite {
    pub text: String,
    /// Whether `text` differs from the original, byte for byte.
    pub changed: bool,
    pub comments_removed: usize,
    pub lines_trimmed: usize,
    pub unterminated: Option<Unterminated>,
}

/// Run `normalize_lines(strip_comments(source))`.
///
/// `changed` comes from comparing the output with `source`, never from the
/// scan or trim counters.
pub fn rewrite_source(source: &str) -> Rewrite {
    let stripped = strip_comments_with_report(source);
    let normalized = normalize(&stripped.text);

    let unterminated = stripped.report.unterminated.map(|range| Unterminated {
        state: stripped.report.final_state,
        start: LineMap::new(source).line_and_column_of(range.pos),
    });

    Rewrite {
        changed: normalized.text != source,
        text: normalized.text,
        comments_removed: stripped.report.comments_removed,
        lines_trimmed: normalized.lines_trimmed,
        unterminated,
    }
}
