//! Core utilities shared by the engine and the command layer
//!
//! - `cancel`: the poll-based cancellation token
//! - `pager`: an `io::Write` adapter over the minus pager

pub mod cancel;
pub mod pager;
