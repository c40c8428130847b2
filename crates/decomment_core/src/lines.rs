//! Line records.
//!
//! A line record is the content of one line plus the terminator it really
//! ended with. Splitting keeps every byte: concatenating the records of a
//! text, terminators included, gives back the text exactly. `\n`, `\r\n` and
//! a lone `\r` all terminate a record, so content never holds a line break.

use std::iter::FusedIterator;

use memchr::memchr2;

use crate::text::TextRange;

/// The terminator a line ended with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LineTerminator {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r` not followed by `\n`
    Cr,
    /// Final line without a terminator.
    None,
}

impl LineTerminator {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
            LineTerminator::Cr => "\r",
            LineTerminator::None => "",
        }
    }
}

/// Whether a character is trailing whitespace that may be trimmed from the
/// end of a line.
///
/// Horizontal whitespace only: line breaks are never trimmable, and neither
/// is U+FEFF, so a byte order mark on an otherwise empty first line survives.
#[inline]
pub fn is_trailing_white_space(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // various spaces
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
    )
}

/// One line of text and its terminator.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LineRecord<'a> {
    /// The line without its terminator.
    pub content: &'a str,
    pub terminator: LineTerminator,
    /// Byte range of the whole record, terminator included.
    pub range: TextRange,
}

impl<'a> LineRecord<'a> {
    /// The content with trailing whitespace removed.
    #[inline]
    pub fn trimmed_content(&self) -> &'a str {
        self.content.trim_end_matches(is_trailing_white_space)
    }

    /// Whether trimming would change this line.
    #[inline]
    pub fn has_trailing_white_space(&self) -> bool {
        self.content.ends_with(is_trailing_white_space)
    }
}

/// Iterator over the line records of a text. See [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    text: &'a str,
    pos: usize,
}

/// Split `text` into line records.
///
/// An empty text has no records; a text ending in a terminator has no empty
/// trailing record.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { text, pos: 0 }
}

impl<'a> Iterator for Lines<'a> {
    type Item = LineRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let rest = self.text.get(start..).filter(|rest| !rest.is_empty())?;

        let bytes = self.text.as_bytes();
        let (content_end, terminator, end) = match memchr2(b'\n', b'\r', rest.as_bytes()) {
            Some(offset) => {
                let brk = start + offset;
                match (bytes[brk], bytes.get(brk + 1)) {
                    (b'\n', _) => (brk, LineTerminator::Lf, brk + 1),
                    (_, Some(&b'\n')) => (brk, LineTerminator::CrLf, brk + 2),
                    _ => (brk, LineTerminator::Cr, brk + 1),
                }
            }
            None => (self.text.len(), LineTerminator::None, self.text.len()),
        };

        self.pos = end;
        Some(LineRecord {
            content: &self.text[start..content_end],
            terminator,
            range: TextRange::from_offsets(start, end),
        })
    }
}

impl FusedIterator for Lines<'_> {}
