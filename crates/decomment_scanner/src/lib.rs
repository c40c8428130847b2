//! decomment_scanner: Comment scanner for C-family source text.
//!
//! A single forward pass over the text that drops `//` line comments and
//! `/* */` block comments while copying everything else, including:
//! - `"..."` string literals and `'...'` character literals, verbatim
//! - backslash escapes inside literals (`\"` never closes a string)
//! - every line terminator, even those inside block comments
//!
//! The scanner never fails. Input that ends inside a literal or a block
//! comment produces whatever was accumulated so far.

mod char_codes;
mod scanner;

pub use scanner::{
    strip_comments, strip_comments_with_report, ScanReport, ScanState, Scanner, Stripped,
};
