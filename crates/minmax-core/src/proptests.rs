//! Property-based tests for the extremum scan.
