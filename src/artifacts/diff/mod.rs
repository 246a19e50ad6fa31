//! The diff engine
//!
//! Data flows one way through these modules:
//!
//! - `myers`: Myers' shortest edit script over a `SequencePair`
//! - `hunk`: groups the edit script into hunks padded with context
//! - `unified`: renders hunks in unified diff format
//! - `error`: the engine's error type
//!
//! Each run is independent; nothing is shared between runs.

pub mod error;
pub mod hunk;
pub mod myers;
pub mod unified;
