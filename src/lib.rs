//! Minimal edit scripts and unified diffs over arbitrary sequences
//!
//! The engine runs in three stages over a caller-supplied [`SequencePair`]:
//!
//! 1. [`myers`] computes a minimal [`EditScript`]
//! 2. [`EditScript::hunks`] groups it into hunks with context
//! 3. [`write_unified`] renders the hunks in unified format
//!
//! ```
//! use udiff::{CancelToken, Strings, UnifiedOptions, myers};
//!
//! let a = ["a", "b", "c", "d", "e"];
//! let b = ["a", "x", "c", "d", "e"];
//! let pair = Strings::new(&a, &b);
//!
//! let script = myers(&pair, &CancelToken::new()).unwrap();
//! let mut out: Vec<u8> = Vec::new();
//! script
//!     .write_unified(&mut out, &pair, 1, &UnifiedOptions::default())
//!     .unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "--- a\n+++ b\n@@ -1,3 +1,3 @@\n a\n-b\n+x\n c\n"
//! );
//! ```

pub mod artifacts;
pub mod commands;
pub mod domain;

pub use artifacts::core::cancel::CancelToken;
pub use artifacts::diff::error::DiffError;
pub use artifacts::diff::hunk::{Hunk, Hunks};
pub use artifacts::diff::myers::myers;
pub use artifacts::diff::unified::{UnifiedOptions, write_unified};
pub use domain::edit::{EditScript, Op};
pub use domain::sequence::{Bytes, SequencePair, Slices, Strings, lines};

use std::io::Write;

/// Diffs two texts line by line and writes the result in unified format.
///
/// Runs without a deadline. Returns the number of bytes written, which is
/// zero when the texts have the same lines.
pub fn text(
    a_name: &str,
    b_name: &str,
    a: &str,
    b: &str,
    sink: &mut dyn Write,
    context: usize,
    color: bool,
) -> Result<usize, DiffError> {
    let (a_lines, b_lines) = (lines(a), lines(b));
    let pair = Strings::new(&a_lines, &b_lines);
    let script = myers(&pair, &CancelToken::new())?;
    let opts = UnifiedOptions::default()
        .with_names(a_name, b_name)
        .with_color(color);

    script.write_unified(sink, &pair, context, &opts)
}
