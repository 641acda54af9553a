//! The running-best fold.

use crate::{Error, Extremum, Result};

/// Returns the greatest element of `values`.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when `values` is empty.
///
/// # Examples
///
/// ```
/// assert_eq!(minmax_core::max(&[-10, -3, -50]).unwrap(), -3);
/// ```
pub fn max<T: Ord + Copy>(values: &[T]) -> Result<T> {
    scan(Extremum::Max, values)
}

/// Returns the least element of `values`.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when `values` is empty.
pub fn min<T: Ord + Copy>(values: &[T]) -> Result<T> {
    scan(Extremum::Min, values)
}

pub(crate) fn scan<T: Ord + Copy>(extremum: Extremum, values: &[T]) -> Result<T> {
    let Some((&first, rest)) = values.split_first() else {
        return Err(Error::empty(extremum));
    };

    let best = rest.iter().fold(first, |best, &candidate| {
        if extremum.prefers(&candidate, &best) {
            candidate
        } else {
            best
        }
    });

    tracing::trace!(len = values.len(), %extremum, "scan complete");
    Ok(best)
}
