//! Glue between a source, the extremum scan, and a sink.

use std::io::Write;

use crate::{Acquire, Acquired, Extremum, Result, write_output};

/// What a driver run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The extremum was computed and written.
    Written(i64),

    /// The source had no usable count; nothing was written.
    NoInput,
}

/// Acquires a sequence from `source`, computes `extremum` of it and writes
/// the result line to `sink`.
///
/// When the source reports [`Acquired::Exhausted`] the sink is left
/// untouched and [`Outcome::NoInput`] is returned.
///
/// # Errors
///
/// Propagates acquisition and write failures, and returns
/// [`Error::EmptyInput`](crate::Error::EmptyInput) for an empty sequence.
pub fn solve<A, W>(source: A, extremum: Extremum, sink: W) -> Result<Outcome>
where
    A: Acquire,
    W: Write,
{
    let values = match source.acquire()? {
        Acquired::Values(values) => values,
        Acquired::Exhausted => {
            tracing::debug!(%extremum, "no count available, nothing to write");
            return Ok(Outcome::NoInput);
        }
    };

    let value = extremum.apply(&values)?;
    write_output(sink, value)?;

    tracing::debug!(%extremum, value, len = values.len(), "result written");
    Ok(Outcome::Written(value))
}
