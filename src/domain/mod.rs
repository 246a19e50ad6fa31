//! Values the engine consumes and produces
//!
//! - `sequence`: the `SequencePair` capability and its adapters
//! - `edit`: edit operations and the `EditScript` they form

pub mod edit;
pub mod sequence;
