//! Result emission.

use std::io::Write;

use crate::Result;

/// Writes `value` followed by a newline, then flushes `sink`.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if writing or flushing fails.
pub fn write_output(mut sink: impl Write, value: i64) -> Result<()> {
    writeln!(sink, "{value}")?;
    sink.flush()?;
    Ok(())
}
