//! Which end of the ordering a scan keeps.

use std::fmt;

use crate::Result;

/// Selects the statistic a scan computes.
///
/// Both variants share one fold; they differ only in the strict comparison
/// used to decide whether a candidate replaces the running best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extremum {
    /// Greatest element.
    Max,
    /// Least element.
    Min,
}

impl Extremum {
    /// Returns `true` if `candidate` should replace `best`.
    ///
    /// The comparison is strict, so an element equal to the running best
    /// never replaces it.
    pub fn prefers<T: Ord>(self, candidate: &T, best: &T) -> bool {
        match self {
            Extremum::Max => candidate > best,
            Extremum::Min => candidate < best,
        }
    }

    /// Computes this extremum of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`](crate::Error::EmptyInput) when `values`
    /// is empty.
    pub fn apply<T: Ord + Copy>(self, values: &[T]) -> Result<T> {
        crate::finder::scan(self, values)
    }

    /// Human-readable name, as used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Extremum::Max => "maximum",
            Extremum::Min => "minimum",
        }
    }
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
