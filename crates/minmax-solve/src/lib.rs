#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Minmax Solve Library
//!
//! Acquisition adapters and output for the minmax drivers.

pub mod acquire;
pub mod counted;
pub mod driver;
pub mod output;

pub use acquire::{Acquire, Acquired, Materialized};
pub use counted::{Counted, Layout, UnknownLayout};
pub use driver::{Outcome, solve};
pub use output::write_output;

// Re-export core types
pub use minmax_core::{Error, Extremum, Result};
