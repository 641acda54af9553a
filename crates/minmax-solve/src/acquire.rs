//! Input acquisition strategies.

use crate::Result;

/// What a source produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquired {
    /// A materialized sequence, possibly empty.
    Values(Vec<i64>),

    /// The source had no usable leading count; the driver should stop
    /// without producing output.
    Exhausted,
}

/// A way of obtaining the sequence a driver operates on.
///
/// Implementations only acquire; the extremum is always computed by
/// `minmax-core` over the materialized result.
pub trait Acquire {
    /// Consumes the source and returns what it held.
    ///
    /// # Errors
    ///
    /// Returns an error when the source is readable but its content is
    /// inconsistent, or when reading fails.
    fn acquire(self) -> Result<Acquired>;
}

/// A sequence that was built before the driver ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Materialized(pub Vec<i64>);

impl Acquire for Materialized {
    fn acquire(self) -> Result<Acquired> {
        Ok(Acquired::Values(self.0))
    }
}

impl From<Vec<i64>> for Materialized {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl FromIterator<i64> for Materialized {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
