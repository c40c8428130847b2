//! decomment_driver: Runs the comment-stripping pipeline over source files.
//!
//! Composes the scanner and the normalizer, decides whether a file changed by
//! comparing the result with the original bytes, and rewrites files in
//! parallel. Which files to process is entirely up to the caller.

mod error;
mod files;
mod rewrite;

pub use error::DriverError;
pub use files::{
    decode_source, process_file, process_files, DriverOptions, FileOutcome, Summary, WriteMode,
};
pub use rewrite::{rewrite_source, Rewrite, Unterminated};
