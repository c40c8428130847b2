//! File-level processing: read, rewrite, write back, in parallel.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use crate::error::DriverError;
use crate::rewrite::rewrite_source;

/// What to do with a file whose rewrite differs from its contents.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum WriteMode {
    /// Write the rewrite back to the file.
    #[default]
    InPlace,
    /// Leave the file alone and only report that it would change.
    Check,
}

/// Options for a batch of files.
#[derive(Debug, Clone, Default)]
pub struct DriverOptions {
    pub mode: WriteMode,
    /// Worker threads. `None` lets rayon pick.
    pub jobs: Option<usize>,
}

/// Result of processing one file successfully.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// The rewrite differs from the file's contents.
    pub changed: bool,
    /// The rewrite was written back.
    pub written: bool,
    pub comments_removed: usize,
    pub lines_trimmed: usize,
}

/// Results of a batch, in the order the paths were given.
#[derive(Debug)]
pub struct Summary {
    pub mode: WriteMode,
    pub outcomes: Vec<FileOutcome>,
    pub failures: Vec<DriverError>,
}

impl Summary {
    /// Files attempted, including those that failed.
    pub fn scanned(&self) -> usize {
        self.outcomes.len() + self.failures.len()
    }

    /// Files whose rewrite differs from their contents.
    pub fn modified(&self) -> usize {
        self.outcomes.iter().filter(|o| o.changed).count()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Paths of the files that changed (or would, in check mode).
    pub fn changed_paths(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|o| o.changed)
            .map(|o| o.path.as_path())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            WriteMode::InPlace => write!(
                f,
                "Scanned {} files, removed comments from {} files.",
                self.scanned(),
                self.modified()
            )?,
            WriteMode::Check => write!(
                f,
                "Checked {} files, {} would be rewritten.",
                self.scanned(),
                self.modified()
            )?,
        }
        if self.failed() > 0 {
            write!(f, " {} failed.", self.failed())?;
        }
        Ok(())
    }
}

/// Decode raw file contents as UTF-8.
pub fn decode_source<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a str, DriverError> {
    simdutf8::compat::from_utf8(bytes).map_err(|source| DriverError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Rewrite a single file.
///
/// The file is read and written as raw bytes, so line terminators are never
/// translated. Nothing is written unless the rewrite differs from the file
/// and `options.mode` is [`WriteMode::InPlace`].
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn process_file(path: &Path, options: &DriverOptions) -> Result<FileOutcome, DriverError> {
    let bytes = fs::read(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let source = decode_source(path, &bytes)?;
    let rewrite = rewrite_source(source);

    if let Some(open) = rewrite.unterminated {
        warn!(
            "{}:{}: unterminated {} runs to end of file",
            path.display(),
            open.start,
            open.state.describe()
        );
    }

    let written = rewrite.changed && options.mode == WriteMode::InPlace;
    if written {
        fs::write(path, rewrite.text.as_bytes()).map_err(|source| DriverError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            comments = rewrite.comments_removed,
            lines_trimmed = rewrite.lines_trimmed,
            "rewrote {}",
            path.display()
        );
    } else {
        debug!(changed = rewrite.changed, "no write");
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        changed: rewrite.changed,
        written,
        comments_removed: rewrite.comments_removed,
        lines_trimmed: rewrite.lines_trimmed,
    })
}

/// Rewrite every file in `paths` on a rayon pool.
///
/// A path given more than once is processed once. Per-file failures are
/// collected in the summary and never stop the batch; only failing to start
/// the pool is an error.
pub fn process_files(paths: &[PathBuf], options: &DriverOptions) -> Result<Summary, DriverError> {
    let mut seen = FxHashSet::default();
    let unique: Vec<&Path> = paths
        .iter()
        .map(PathBuf::as_path)
        .filter(|path| seen.insert(*path))
        .collect();
    if unique.len() < paths.len() {
        debug!(repeated = paths.len() - unique.len(), "skipping repeated paths");
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = options.jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build()?;

    let results: Vec<Result<FileOutcome, DriverError>> = pool.install(|| {
        unique
            .par_iter()
            .map(|path| process_file(path, options))
            .collect()
    });

    let mut summary = Summary {
        mode: options.mode,
        outcomes: Vec::with_capacity(results.len()),
        failures: Vec::new(),
    };
    for result in results {
        match result {
            Ok(outcome) => summary.outcomes.push(outcome),
            Err(err) => {
                // The caller reports collected failures.
                debug!(error = %err, "file failed");
                summary.failures.push(err);
            }
        }
    }
    Ok(summary)
}
