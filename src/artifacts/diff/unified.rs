//! Unified diff rendering
//!
//! Output follows the conventional grammar:
//!
//! ```text
//! --- a
//! +++ b
//! @@ -1,3 +1,3 @@
//!  a
//! -b
//! +x
//!  c
//! ```
//!
//! Elements are streamed through [`SequencePair::write_a_to`] and
//! [`SequencePair::write_b_to`]; nothing is copied or buffered here.

use crate::artifacts::diff::error::DiffError;
use crate::artifacts::diff::hunk::Hunk;
use crate::domain::edit::Op;
use crate::domain::sequence::SequencePair;
use colored::Color;
use std::io::{self, Write};

// Written as raw escapes rather than through `Colorize`, whose global
// override follows NO_COLOR / CLICOLOR and would ignore `with_color(true)`.
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Rendering switches. New options default to off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedOptions {
    pub names: (String, String),
    pub color: bool,
}

impl Default for UnifiedOptions {
    fn default() -> Self {
        Self {
            names: ("a".to_string(), "b".to_string()),
            color: false,
        }
    }
}

impl UnifiedOptions {
    /// Labels printed on the `---` and `+++` header lines.
    pub fn with_names(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.names = (a.into(), b.into());
        self
    }

    /// Wraps headers and changed lines in terminal escape sequences.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Counts every byte that reaches the inner sink.
struct CountingWriter<'w> {
    inner: &'w mut dyn Write,
    written: usize,
}

impl Write for CountingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Writes `hunks` in unified format and returns the number of bytes written.
///
/// Writes nothing when there are no hunks. The first sink error aborts the
/// rendering; whatever was already written stays written.
pub fn write_unified<'s, P, I>(
    sink: &mut dyn Write,
    pair: &P,
    hunks: I,
    opts: &UnifiedOptions,
) -> Result<usize, DiffError>
where
    P: SequencePair + ?Sized,
    I: IntoIterator<Item = Hunk<'s>>,
{
    let mut hunks = hunks.into_iter().peekable();
    if hunks.peek().is_none() {
        return Ok(0);
    }

    let mut out = CountingWriter {
        inner: sink,
        written: 0,
    };

    write_header(&mut out, opts)?;
    for hunk in hunks {
        write_hunk(&mut out, pair, &hunk, opts.color)?;
    }

    tracing::trace!(bytes = out.written, "wrote unified diff");
    Ok(out.written)
}

fn write_header(out: &mut CountingWriter<'_>, opts: &UnifiedOptions) -> io::Result<()> {
    let (a, b) = &opts.names;
    if opts.color {
        writeln!(out, "{BOLD}--- {a}{RESET}")?;
        writeln!(out, "{BOLD}+++ {b}{RESET}")?;
    } else {
        writeln!(out, "--- {a}")?;
        writeln!(out, "+++ {b}")?;
    }
    Ok(())
}

fn write_hunk<P>(
    out: &mut CountingWriter<'_>,
    pair: &P,
    hunk: &Hunk<'_>,
    color: bool,
) -> io::Result<()>
where
    P: SequencePair + ?Sized,
{
    let a_range = range(hunk.a_start(), hunk.a_count());
    let b_range = range(hunk.b_start(), hunk.b_count());
    if color {
        let cyan = paint(Color::Cyan);
        writeln!(out, "{cyan}@@ -{a_range} +{b_range} @@{RESET}")?;
    } else {
        writeln!(out, "@@ -{a_range} +{b_range} @@")?;
    }

    for op in hunk.ops() {
        let (prefix, tint) = match op {
            Op::Keep { .. } => (' ', None),
            Op::Delete { .. } => ('-', Some(Color::Red)),
            Op::Insert { .. } => ('+', Some(Color::Green)),
        };

        match tint.filter(|_| color) {
            Some(c) => write!(out, "{}{prefix}", paint(c))?,
            None => write!(out, "{prefix}")?,
        }

        match *op {
            Op::Keep { a, .. } | Op::Delete { a } => pair.write_a_to(out, a)?,
            Op::Insert { b } => pair.write_b_to(out, b)?,
        };

        if tint.is_some() && color {
            out.write_all(RESET.as_bytes())?;
        }
        out.write_all(b"\n")?;
    }

    Ok(())
}

// 1-based start; an empty range reports the line before it.
fn range(start: usize, count: usize) -> String {
    if count == 0 {
        format!("{start},0")
    } else {
        format!("{},{count}", start + 1)
    }
}

fn paint(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}
