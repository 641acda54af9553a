//! # minmax-cli
//!
//! Command-line drivers for the minmax fixtures.
//!
//! The `max` and `min` binaries share everything here and differ only in the
//! [`Extremum`] they pass to [`run`]:
//! - input from standard input or `--input <FILE>`
//! - `--layout tokens|lines` (or `MINMAX_LAYOUT`) picks the input parser
//! - the result line is the only thing written to standard output
//! - logs go to standard error, filtered by `RUST_LOG`
//! - rejected input exits with status 2, other failures with status 1

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdin, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use minmax_solve::{Counted, Layout, Outcome, solve};
use tracing_subscriber::EnvFilter;

pub use minmax_core::Extremum;

/// Print the extremum of a count followed by that many integers
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Read input from this file instead of standard input
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// How the input is split into a count and values (`tokens` or `lines`)
    #[arg(short, long, env = "MINMAX_LAYOUT", default_value_t = Layout::Tokens)]
    pub layout: Layout,

    /// Enable debug logging on standard error
    #[arg(short, long)]
    pub verbose: bool,
}

/// Exit status for input the program rejects (empty, short, malformed).
pub const EXIT_INPUT_ERROR: u8 = 2;

/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Entry point shared by the `max` and `min` binaries.
pub fn run(extremum: Extremum) -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match execute(&args, extremum, BufWriter::new(stdout().lock())) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let status = exit_status(&err);
            if status == EXIT_INPUT_ERROR {
                tracing::warn!(error = %err, "input rejected");
            } else {
                tracing::error!(error = %err, "run failed");
            }
            eprintln!("Error: {err:?}");
            ExitCode::from(status)
        }
    }
}

/// Maps a failed run to its exit status.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<minmax_solve::Error>() {
        Some(cause) if cause.is_input_error() => EXIT_INPUT_ERROR,
        _ => EXIT_FAILURE,
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the source selected by `args`, computes `extremum` and writes the
/// result line to `sink`.
pub fn execute<W: Write>(args: &Args, extremum: Extremum, sink: W) -> Result<Outcome> {
    tracing::debug!(input = ?args.input, layout = %args.layout, %extremum, "reading input");

    let outcome = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            solve(Counted::new(BufReader::new(file), args.layout), extremum, sink)
        }
        None => solve(Counted::new(stdin().lock(), args.layout), extremum, sink),
    }
    .with_context(|| format!("failed to compute {extremum}"))?;

    if outcome == Outcome::NoInput {
        tracing::info!("input has no leading count, exiting without output");
    }

    Ok(outcome)
}
