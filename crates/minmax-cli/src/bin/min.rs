#![forbid(unsafe_code)]

//! Prints the minimum of a counted sequence of integers.

use std::process::ExitCode;

fn main() -> ExitCode {
    minmax_cli::run(minmax_cli::Extremum::Min)
}
