use crate::artifacts::diff::error::DiffError;
use crate::artifacts::diff::hunk::Hunks;
use crate::artifacts::diff::unified::{UnifiedOptions, write_unified};
use crate::domain::sequence::SequencePair;
use std::fmt::Display;
use std::io::Write;

/// A single step of an edit script, carrying the indices it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `A[a]` and `B[b]` are equal and carried over unchanged.
    Keep { a: usize, b: usize },
    /// `A[a]` is removed.
    Delete { a: usize },
    /// `B[b]` is added.
    Insert { b: usize },
}

impl Op {
    pub fn is_change(&self) -> bool {
        !matches!(self, Op::Keep { .. })
    }

    /// Index into `A` consumed by this op, if any.
    pub fn a_index(&self) -> Option<usize> {
        match *self {
            Op::Keep { a, .. } | Op::Delete { a } => Some(a),
            Op::Insert { .. } => None,
        }
    }

    /// Index into `B` consumed by this op, if any.
    pub fn b_index(&self) -> Option<usize> {
        match *self {
            Op::Keep { b, .. } | Op::Insert { b } => Some(b),
            Op::Delete { .. } => None,
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Op::Keep { a, b } => write!(f, "={a}:{b}"),
            Op::Delete { a } => write!(f, "-{a}"),
            Op::Insert { b } => write!(f, "+{b}"),
        }
    }
}

/// An ordered list of ops transforming `A` into `B`.
///
/// Keep and Delete ops visit every index of `A` exactly once, in order;
/// Keep and Insert ops do the same for `B`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    ops: Vec<Op>,
}

impl EditScript {
    pub fn new(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// True when the script contains no insertions or deletions.
    pub fn is_identity(&self) -> bool {
        !self.ops.iter().any(Op::is_change)
    }

    /// Number of insertions plus deletions.
    pub fn distance(&self) -> usize {
        let (inserted, deleted) = self.stat();
        inserted + deleted
    }

    /// Returns `(inserted, deleted)` counts.
    pub fn stat(&self) -> (usize, usize) {
        self.ops
            .iter()
            .fold((0, 0), |(inserted, deleted), op| match op {
                Op::Insert { .. } => (inserted + 1, deleted),
                Op::Delete { .. } => (inserted, deleted + 1),
                Op::Keep { .. } => (inserted, deleted),
            })
    }

    /// Lazily groups the script into hunks with `context` unchanged ops on each side.
    pub fn hunks(&self, context: usize) -> Hunks<'_> {
        Hunks::new(&self.ops, context)
    }

    /// Renders the script in unified format, returning the bytes written.
    pub fn write_unified<P>(
        &self,
        sink: &mut dyn Write,
        pair: &P,
        context: usize,
        opts: &UnifiedOptions,
    ) -> Result<usize, DiffError>
    where
        P: SequencePair + ?Sized,
    {
        write_unified(sink, pair, self.hunks(context), opts)
    }
}

impl Display for EditScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .ops
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{rendered}")
    }
}
