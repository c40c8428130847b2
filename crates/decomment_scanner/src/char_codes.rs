//! Byte constants for the characters that drive the scanner.
//!
//! Every one of them is ASCII, so none can occur inside a multi-byte UTF-8
//! sequence and the scanner can work on bytes without decoding.

pub const LINE_FEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const DOUBLE_QUOTE: u8 = b'"';
pub const SINGLE_QUOTE: u8 = b'\'';
pub const ASTERISK: u8 = b'*';
pub const SLASH: u8 = b'/';
pub const BACKSLASH: u8 = b'\\';

