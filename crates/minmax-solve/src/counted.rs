//! Counted text streams: a count followed by that many integers.

use std::fmt;
use std::io::{BufRead, Read};
use std::str::FromStr;

use token_read::TokenReader;

use crate::{Acquire, Acquired, Error, Result};

/// How a counted stream is split into a count and values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Whitespace-separated tokens across any number of lines. The first
    /// token is the count, the next `count` tokens are the values, and
    /// anything after them is ignored.
    #[default]
    Tokens,

    /// The count alone on the first line, the values on the second line
    /// separated by whitespace. The value count must match exactly.
    Lines,
}

impl Layout {
    /// Name accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Tokens => "tokens",
            Layout::Lines => "lines",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A layout name that is neither `tokens` nor `lines`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout {0:?}, expected `tokens` or `lines`")]
pub struct UnknownLayout(pub String);

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tokens" => Ok(Layout::Tokens),
            "lines" => Ok(Layout::Lines),
            _ => Err(UnknownLayout(s.to_string())),
        }
    }
}

/// A text source holding a count and then that many integers.
#[derive(Debug)]
pub struct Counted<R> {
    reader: R,
    layout: Layout,
}

impl<R: BufRead> Counted<R> {
    /// Wraps `reader`, to be parsed according to `layout`.
    pub fn new(reader: R, layout: Layout) -> Self {
        Self { reader, layout }
    }
}

impl<R: BufRead> Acquire for Counted<R> {
    fn acquire(self) -> Result<Acquired> {
        match self.layout {
            Layout::Tokens => read_tokens(self.reader),
            Layout::Lines => read_lines(self.reader),
        }
    }
}

// Only the tokens that are consumed get decoded, so bytes after the last
// value never affect the result.
fn read_tokens(mut reader: impl BufRead) -> Result<Acquired> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let mut tokens = bytes
        .split(|byte| byte.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .map(String::from_utf8_lossy);

    let Some(head) = tokens.next() else {
        tracing::debug!("input is empty");
        return Ok(Acquired::Exhausted);
    };
    let Some(count) = parse_count(&head) else {
        return Ok(Acquired::Exhausted);
    };

    let values = tokens
        .take(count)
        .map(|token| parse_value(&token))
        .collect::<Result<Vec<_>>>()?;

    if values.len() != count {
        return Err(Error::count_mismatch(count, values.len()));
    }

    tracing::debug!(count, layout = %Layout::Tokens, "acquired values");
    Ok(Acquired::Values(values))
}

fn read_lines(reader: impl BufRead) -> Result<Acquired> {
    let mut input = TokenReader::new(reader);

    let head: std::result::Result<(usize,), _> = input.line();
    let count = match head {
        Ok((count,)) => count,
        Err(error) => {
            tracing::debug!(%error, "no usable count line");
            return Ok(Acquired::Exhausted);
        }
    };

    if count == 0 {
        tracing::debug!(count, layout = %Layout::Lines, "acquired values");
        return Ok(Acquired::Values(Vec::new()));
    }

    let values: Vec<i64> = input
        .line()
        .map_err(|source| Error::malformed_line("values", source))?;

    if values.len() != count {
        return Err(Error::count_mismatch(count, values.len()));
    }

    tracing::debug!(count, layout = %Layout::Lines, "acquired values");
    Ok(Acquired::Values(values))
}

fn parse_count(token: &str) -> Option<usize> {
    match token.parse() {
        Ok(count) => Some(count),
        Err(error) => {
            tracing::debug!(token, %error, "leading count is malformed");
            None
        }
    }
}

fn parse_value(token: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|source| Error::invalid_number(token, source))
}
