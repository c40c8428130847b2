//! decomment: strip comments from C-family sources in place.
//!
//! Usage:
//!   decomment [options] <file>...
//!   decomment --stdin < in.c > out.c
//!
//! Exit status is 0 on success, 1 when `--check` finds files that would be
//! rewritten, and 2 when any file could not be processed.

use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser as ClapParser;
use decomment_driver::{DriverError, DriverOptions, Summary, WriteMode};
use miette::IntoDiagnostic;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(ClapParser, Debug)]
#[command(
    name = "decomment",
    version,
    about = "Strip // and /* */ comments from C-family source files",
    long_about = "Strip // and /* */ comments from C-family source files, keeping \
                  string and character literals and every line ending"
)]
struct Cli {
    /// Source files to rewrite.
    #[arg(value_name = "FILE", required_unless_present = "stdin", conflicts_with = "stdin")]
    files: Vec<PathBuf>,

    /// Do not write anything; list files that would change and exit with 1 if any.
    #[arg(long)]
    check: bool,

    /// Read source from stdin and write the result to stdout.
    #[arg(long)]
    stdin: bool,

    /// Number of worker threads.
    #[arg(short = 'j', long, value_name = "N")]
    jobs: Option<usize>,

    /// Do not print the summary line.
    #[arg(short, long)]
    quiet: bool,

    /// Log more (-v for info, -vv for debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ANSI color codes
const GRAY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

const STDIN_NAME: &str = "<stdin>";

const EXIT_SUCCESS: u8 = 0;
const EXIT_CHANGES_FOUND: u8 = 1;
const EXIT_FAILURES: u8 = 2;

fn main() -> miette::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.stdin {
        return run_stdin();
    }
    run_files(&cli)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn run_stdin() -> miette::Result<ExitCode> {
    let mut bytes = Vec::new();
    io::stdin().lock().read_to_end(&mut bytes).into_diagnostic()?;

    let text = filter_source(&bytes)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes()).into_diagnostic()?;
    stdout.flush().into_diagnostic()?;
    Ok(ExitCode::SUCCESS)
}

/// Rewrite a source read from stdin; the result is always the full text.
fn filter_source(bytes: &[u8]) -> Result<String, DriverError> {
    let source = decomment_driver::decode_source(Path::new(STDIN_NAME), bytes)?;
    let rewrite = decomment_driver::rewrite_source(source);
    if let Some(open) = rewrite.unterminated {
        tracing::warn!(
            "{}:{}: unterminated {} runs to end of input",
            STDIN_NAME,
            open.start,
            open.state.describe()
        );
    }
    Ok(rewrite.text)
}

fn run_files(cli: &Cli) -> miette::Result<ExitCode> {
    let start = Instant::now();
    let options = DriverOptions {
        mode: if cli.check {
            WriteMode::Check
        } else {
            WriteMode::InPlace
        },
        jobs: cli.jobs,
    };
    tracing::debug!(?options, files = cli.files.len(), "starting");

    let summary = decomment_driver::process_files(&cli.files, &options)?;

    if options.mode == WriteMode::Check {
        let mut stdout = io::stdout().lock();
        for path in summary.changed_paths() {
            writeln!(stdout, "{}", path.display()).into_diagnostic()?;
        }
    }

    let exit = ExitCode::from(exit_status(&summary));

    let line = summary.to_string();
    for failure in summary.failures {
        eprintln!("{:?}", miette::Report::new(failure));
    }

    if !cli.quiet {
        let elapsed = start.elapsed();
        if io::stderr().is_terminal() {
            eprintln!("{}{} ({:.2}s){}", GRAY, line, elapsed.as_secs_f64(), RESET);
        } else {
            eprintln!("{line}");
        }
    }

    Ok(exit)
}

/// Failures win over pending changes, which only count in check mode.
fn exit_status(summary: &Summary) -> u8 {
    if summary.failed() > 0 {
        EXIT_FAILURES
    } else if summary.mode == WriteMode::Check && summary.modified() > 0 {
        EXIT_CHANGES_FOUND
    } else {
        EXIT_SUCCESS
    }
}
