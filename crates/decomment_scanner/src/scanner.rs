//! The comment scanner.
//!
//! A finite-state machine over the bytes of the input. Bytes that belong to
//! code or to a literal are copied in runs: `copy_start` marks the first byte
//! not yet appended to the output, and the pending run is flushed whenever a
//! comment opens. Inside a block comment only line terminators are emitted.

use decomment_core::TextRange;
use memchr::{memchr2, memchr3};

use crate::char_codes::*;

/// Where the scanner currently is, lexically.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ScanState {
    /// Live code.
    #[default]
    Code,
    /// Inside `"..."`.
    InString,
    /// Inside `'...'`.
    InChar,
    /// Inside `//...`, up to the next line terminator.
    InLineComment,
    /// Inside `/*...*/`.
    InBlockComment,
}

impl ScanState {
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self, ScanState::InString | ScanState::InChar)
    }

    /// Name of the construct this state is inside of.
    pub fn describe(self) -> &'static str {
        match self {
            ScanState::Code => "code",
            ScanState::InString => "string literal",
            ScanState::InChar => "character literal",
            ScanState::InLineComment => "line comment",
            ScanState::InBlockComment => "block comment",
        }
    }
}

/// What the scanner saw, besides the text it produced.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ScanReport {
    /// Number of `//` and `/*` comments dropped.
    pub comments_removed: usize,
    /// State at end of input. `Code` unless a literal or block comment was
    /// left open; a line comment ending at end of input counts as closed.
    pub final_state: ScanState,
    /// Input ended right after a `\` inside a literal.
    pub pending_escape: bool,
    /// From the opening delimiter of the construct left open to end of input.
    pub unterminated: Option<TextRange>,
}

/// Output of a complete scan.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Stripped {
    pub text: String,
    pub report: ScanReport,
}

/// The comment scanner. Owns its state for exactly one pass over one text.
pub struct Scanner<'a> {
    /// The source text being scanned.
    text: &'a str,
    /// Current byte offset.
    pos: usize,
    state: ScanState,
    /// Set right after a `\` inside a literal; cleared by the next byte.
    pending_escape: bool,
    /// Start of the copied run not yet flushed to `output`.
    copy_start: usize,
    /// Where the current literal or comment opened.
    construct_start: usize,
    output: String,
    comments_removed: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source text.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            state: ScanState::Code,
            pending_escape: false,
            copy_start: 0,
            construct_start: 0,
            output: String::with_capacity(text.len()),
            comments_removed: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    #[inline]
    pub fn pending_escape(&self) -> bool {
        self.pending_escape
    }

    /// Current byte offset into the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether we've reached the end of the text.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Run one transition of the state machine.
    ///
    /// Returns `false` once the input is exhausted. A step in `Code` skips
    /// straight to the next quote or slash, so one step may cover many bytes.
    pub fn step(&mut self) -> bool {
        if self.is_eof() {
            return false;
        }
        match self.state {
            ScanState::Code => self.scan_code(),
            ScanState::InString => self.scan_literal(DOUBLE_QUOTE),
            ScanState::InChar => self.scan_literal(SINGLE_QUOTE),
            ScanState::InLineComment => self.skip_line_comment(),
            ScanState::InBlockComment => self.skip_block_comment(),
        }
        true
    }

    /// Scan to end of input and return the stripped text.
    pub fn finish(mut self) -> Stripped {
        while self.step() {}

        if self.state == ScanState::InLineComment {
            self.state = ScanState::Code;
            self.copy_start = self.pos;
        }
        if self.state != ScanState::InBlockComment {
            self.flush(self.text.len());
        }

        let unterminated = match self.state {
            ScanState::Code => None,
            _ => Some(TextRange::from_offsets(self.construct_start, self.text.len())),
        };

        Stripped {
            text: self.output,
            report: ScanReport {
                comments_removed: self.comments_removed,
                final_state: self.state,
                pending_escape: self.pending_escape,
                unterminated,
            },
        }
    }

    // ========================================================================
    // State handlers
    // ========================================================================

    fn scan_code(&mut self) {
        let bytes = self.text.as_bytes();
        // A backslash in code escapes nothing, so only quotes and slashes matter.
        let Some(offset) = memchr3(DOUBLE_QUOTE, SINGLE_QUOTE, SLASH, &bytes[self.pos..]) else {
            self.pos = bytes.len();
            return;
        };
        self.pos += offset;

        match bytes[self.pos] {
            DOUBLE_QUOTE => self.enter_literal(ScanState::InString),
            SINGLE_QUOTE => self.enter_literal(ScanState::InChar),
            _ => match bytes.get(self.pos + 1) {
                Some(&SLASH) => self.enter_comment(ScanState::InLineComment),
                Some(&ASTERISK) => self.enter_comment(ScanState::InBlockComment),
                _ => self.pos += 1,
            },
        }
    }

    fn scan_literal(&mut self, quote: u8) {
        if self.pending_escape {
            self.pending_escape = false;
            self.pos += 1;
            return;
        }

        let bytes = self.text.as_bytes();
        match memchr2(BACKSLASH, quote, &bytes[self.pos..]) {
            Some(offset) => {
                self.pos += offset;
                if bytes[self.pos] == BACKSLASH {
                    self.pending_escape = true;
                } else {
                    self.state = ScanState::Code;
                }
                self.pos += 1;
            }
            None => self.pos = bytes.len(),
        }
    }

    fn skip_line_comment(&mut self) {
        let bytes = self.text.as_bytes();
        // The terminator is left in place for `Code` to copy.
        self.pos = match memchr2(LINE_FEED, CARRIAGE_RETURN, &bytes[self.pos..]) {
            Some(offset) => self.pos + offset,
            None => bytes.len(),
        };
        self.leave_comment();
    }

    fn skip_block_comment(&mut self) {
        let bytes = self.text.as_bytes();
        let Some(offset) = memchr3(ASTERISK, LINE_FEED, CARRIAGE_RETURN, &bytes[self.pos..]) else {
            self.pos = bytes.len();
            return;
        };
        self.pos += offset;

        match bytes[self.pos] {
            ASTERISK => {
                if bytes.get(self.pos + 1) == Some(&SLASH) {
                    self.pos += 2;
                    self.leave_comment();
                } else {
                    self.pos += 1;
                }
            }
            terminator => {
                // Line numbering of the surrounding code must not shift.
                self.output.push(char::from(terminator));
                self.pos += 1;
            }
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    fn enter_literal(&mut self, state: ScanState) {
        self.construct_start = self.pos;
        self.state = state;
        self.pos += 1;
    }

    /// `pos` is on the `/` of `//` or `/*`.
    fn enter_comment(&mut self, state: ScanState) {
        self.flush(self.pos);
        self.construct_start = self.pos;
        self.state = state;
        self.comments_removed += 1;
        self.pos += 2;
    }

    fn leave_comment(&mut self) {
        self.state = ScanState::Code;
        self.copy_start = self.pos;
    }

    /// Append the pending copied run up to `end`.
    #[inline]
    fn flush(&mut self, end: usize) {
        self.output.push_str(&self.text[self.copy_start..end]);
        self.copy_start = end;
    }
}

/// Remove every `//` and `/* */` comment from `text`.
pub fn strip_comments(text: &str) -> String {
    Scanner::new(text).finish().text
}

/// Like [`strip_comments`], also returning what the scan observed.
pub fn strip_comments_with_report(text: &str) -> Stripped {
    Scanner::new(text).finish()
}
