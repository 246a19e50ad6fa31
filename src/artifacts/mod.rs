//! Diff algorithms and shared utilities
//!
//! - `core`: cancellation and the pager wrapper
//! - `diff`: the edit-script computer, hunk assembler and unified writer

pub mod core;
pub mod diff;
