//! Errors raised while reading, decoding or writing source files.
//!
//! The text pipeline itself cannot fail; everything here comes from the
//! file system or from input that is not UTF-8.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum DriverError {
    #[error("failed to read `{}`", .path.display())]
    #[diagnostic(code(decomment::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "`{}` is not valid UTF-8 (invalid byte at offset {})",
        .path.display(),
        .source.valid_up_to()
    )]
    #[diagnostic(
        code(decomment::decode),
        help("only UTF-8 sources are rewritten; the file was left untouched")
    )]
    Decode {
        path: PathBuf,
        #[source]
        source: simdutf8::compat::Utf8Error,
    },

    #[error("failed to write `{}`", .path.display())]
    #[diagnostic(code(decomment::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start the worker pool")]
    #[diagnostic(code(decomment::thread_pool))]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl DriverError {
    /// The file this error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            DriverError::Read { path, .. }
            | DriverError::Decode { path, .. }
            | DriverError::Write { path, .. } => Some(path),
            DriverError::ThreadPool(_) => None,
        }
    }
}
