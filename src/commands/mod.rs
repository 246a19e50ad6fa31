//! Command implementations
//!
//! - `diff`: compares two files and prints a unified diff, the consumer
//!   of the engine behind the `udiff` binary

pub mod diff;
