#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Minmax Core Library
//!
//! The extremum scan shared by every minmax driver, and the error type all
//! of them report through.

pub mod error;
pub mod extremum;
mod finder;
mod proptests;

// Re-exports for convenience
pub use error::{Error, Result};
pub use extremum::Extremum;
pub use finder::{max, min};
