//! decomment_core: Core text utilities for the decomment pipeline.
//!
//! Provides byte ranges and line maps for reporting positions, and line
//! records that remember which terminator each line actually ended with.

pub mod lines;
pub mod text;

// Re-export commonly used types
pub use lines::{is_trailing_white_space, lines, LineRecord, LineTerminator, Lines};
pub use text::{LineAndColumn, LineMap, TextPos, TextRange};
