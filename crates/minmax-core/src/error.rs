//! Error types for minmax core library.

use std::num::ParseIntError;

use crate::Extremum;

/// Errors that can occur while acquiring a sequence or computing its extremum.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The sequence had no elements, so it has no extremum.
    #[error("cannot compute {extremum} of 0 numbers")]
    EmptyInput {
        /// Which extremum was requested
        extremum: Extremum,
    },

    /// A value token could not be parsed as a signed integer.
    #[error("invalid number {token:?}")]
    InvalidNumber {
        /// The offending token, verbatim
        token: String,
        /// Underlying parse failure
        #[source]
        source: ParseIntError,
    },

    /// The declared count disagrees with the values actually supplied.
    #[error("expected {expected} numbers, got {actual}")]
    CountMismatch {
        /// Count declared at the head of the input
        expected: usize,
        /// Number of values found
        actual: usize,
    },

    /// A line of line-oriented input did not hold the expected tokens.
    #[error("malformed {what} line")]
    MalformedLine {
        /// Which line was being read
        what: &'static str,
        /// Underlying read or parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// I/O error while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type alias for minmax operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error was caused by the content of the input
    /// rather than by the environment.
    pub fn is_input_error(&self) -> bool {
        match self {
            Error::EmptyInput { .. } => true,
            Error::InvalidNumber { .. } => true,
            Error::CountMismatch { .. } => true,
            Error::MalformedLine { .. } => true,
            Error::Io(_) => false,
        }
    }

    /// Creates an empty-input error for the given extremum.
    pub fn empty(extremum: Extremum) -> Self {
        Error::EmptyInput { extremum }
    }

    /// Creates an invalid-number error for a token that failed to parse.
    pub fn invalid_number<S: Into<String>>(token: S, source: ParseIntError) -> Self {
        Error::InvalidNumber {
            token: token.into(),
            source,
        }
    }

    /// Creates a malformed-line error wrapping the reader's failure.
    pub fn malformed_line<E>(what: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::MalformedLine {
            what,
            source: Box::new(source),
        }
    }

    /// Creates a count-mismatch error.
    pub fn count_mismatch(expected: usize, actual: usize) -> Self {
        Error::CountMismatch { expected, actual }
    }
}
