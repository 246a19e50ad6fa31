//! The sequence-pair capability the diff engine operates over
//!
//! The engine never looks at elements directly. It asks a [`SequencePair`]
//! for lengths, for pairwise equality by index, and to render a single
//! element into an output sink. Anything implementing those five
//! operations can be diffed and written in unified format.
//!
//! Three adapters cover the common cases:
//!
//! - [`Strings`]: lines of text
//! - [`Bytes`]: byte records
//! - [`Slices`]: arbitrary `Display` values, compared with `PartialEq`
//!   or a custom comparator

use derive_new::new;
use std::fmt::Display;
use std::io::{self, Write};

/// Two read-only sequences, `A` and `B`, addressed by zero-based index.
///
/// Implementations must behave consistently for the duration of one diff
/// run: lengths must not change and `equal` must be a stable relation.
pub trait SequencePair {
    fn len_a(&self) -> usize;

    fn len_b(&self) -> usize;

    /// Reports whether `A[ai]` and `B[bi]` are equal.
    fn equal(&self, ai: usize, bi: usize) -> bool;

    /// Renders `A[ai]` into `sink`, returning the number of bytes written.
    fn write_a_to(&self, sink: &mut dyn Write, ai: usize) -> io::Result<usize>;

    /// Renders `B[bi]` into `sink`, returning the number of bytes written.
    fn write_b_to(&self, sink: &mut dyn Write, bi: usize) -> io::Result<usize>;
}

/// Splits `text` into lines, dropping `\n` and `\r\n` terminators.
pub fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Lines of text compared by string equality.
#[derive(Debug, Clone, Copy, new)]
pub struct Strings<'s, S> {
    a: &'s [S],
    b: &'s [S],
}

impl<S: AsRef<str>> SequencePair for Strings<'_, S> {
    fn len_a(&self) -> usize {
        self.a.len()
    }

    fn len_b(&self) -> usize {
        self.b.len()
    }

    fn equal(&self, ai: usize, bi: usize) -> bool {
        self.a[ai].as_ref() == self.b[bi].as_ref()
    }

    fn write_a_to(&self, sink: &mut dyn Write, ai: usize) -> io::Result<usize> {
        write_all_counted(sink, self.a[ai].as_ref().as_bytes())
    }

    fn write_b_to(&self, sink: &mut dyn Write, bi: usize) -> io::Result<usize> {
        write_all_counted(sink, self.b[bi].as_ref().as_bytes())
    }
}

/// Byte records compared by byte equality and written verbatim.
#[derive(Debug, Clone, Copy, new)]
pub struct Bytes<'s, B> {
    a: &'s [B],
    b: &'s [B],
}

impl<B: AsRef<[u8]>> SequencePair for Bytes<'_, B> {
    fn len_a(&self) -> usize {
        self.a.len()
    }

    fn len_b(&self) -> usize {
        self.b.len()
    }

    fn equal(&self, ai: usize, bi: usize) -> bool {
        self.a[ai].as_ref() == self.b[bi].as_ref()
    }

    fn write_a_to(&self, sink: &mut dyn Write, ai: usize) -> io::Result<usize> {
        write_all_counted(sink, self.a[ai].as_ref())
    }

    fn write_b_to(&self, sink: &mut dyn Write, bi: usize) -> io::Result<usize> {
        write_all_counted(sink, self.b[bi].as_ref())
    }
}

/// Arbitrary typed slices rendered through `Display`.
///
/// [`Slices::new`] compares elements with `PartialEq`, which for composite
/// types is the derived field-by-field (recursive) equality.
/// [`Slices::with_comparator`] takes any consistent equality relation instead.
pub struct Slices<'s, T, F = fn(&T, &T) -> bool> {
    a: &'s [T],
    b: &'s [T],
    eq: F,
}

impl<'s, T: PartialEq> Slices<'s, T> {
    pub fn new(a: &'s [T], b: &'s [T]) -> Self {
        Self {
            a,
            b,
            eq: |x, y| x == y,
        }
    }
}

impl<'s, T, F> Slices<'s, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn with_comparator(a: &'s [T], b: &'s [T], eq: F) -> Self {
        Self { a, b, eq }
    }
}

impl<T, F> SequencePair for Slices<'_, T, F>
where
    T: Display,
    F: Fn(&T, &T) -> bool,
{
    fn len_a(&self) -> usize {
        self.a.len()
    }

    fn len_b(&self) -> usize {
        self.b.len()
    }

    fn equal(&self, ai: usize, bi: usize) -> bool {
        (self.eq)(&self.a[ai], &self.b[bi])
    }

    fn write_a_to(&self, sink: &mut dyn Write, ai: usize) -> io::Result<usize> {
        write_display(sink, &self.a[ai])
    }

    fn write_b_to(&self, sink: &mut dyn Write, bi: usize) -> io::Result<usize> {
        write_display(sink, &self.b[bi])
    }
}

fn write_all_counted(sink: &mut dyn Write, buf: &[u8]) -> io::Result<usize> {
    sink.write_all(buf)?;
    Ok(buf.len())
}

// Streams the value through `write!` while counting what reached the sink.
fn write_display<T: Display>(sink: &mut dyn Write, value: &T) -> io::Result<usize> {
    struct Counter<'w> {
        inner: &'w mut dyn Write,
        written: usize,
    }

    impl Write for Counter<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = self.inner.write(buf)?;
            self.written += n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.inner.flush()
        }
    }

    let mut counter = Counter {
        inner: sink,
        written: 0,
    };
    write!(counter, "{value}")?;
    Ok(counter.written)
}
