use crate::domain::edit::Op;

/// A contiguous slice of an edit script with its surrounding context.
///
/// `a_count` and `b_count` include the context ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hunk<'s> {
    a_start: usize,
    a_count: usize,
    b_start: usize,
    b_count: usize,
    ops: &'s [Op],
}

impl<'s> Hunk<'s> {
    pub fn a_start(&self) -> usize {
        self.a_start
    }

    pub fn a_count(&self) -> usize {
        self.a_count
    }

    pub fn b_start(&self) -> usize {
        self.b_start
    }

    pub fn b_count(&self) -> usize {
        self.b_count
    }

    pub fn ops(&self) -> &'s [Op] {
        self.ops
    }
}

/// Lazily groups an edit script into hunks.
///
/// Each run of insertions and deletions is padded with up to `context`
/// Keep ops on either side. Runs separated by at most `2 * context` Keeps
/// share a single hunk. Hunks come out in script order and never overlap.
#[derive(Debug, Clone)]
pub struct Hunks<'s> {
    ops: &'s [Op],
    context: usize,
    pos: usize,
    a_next: usize,
    b_next: usize,
}

impl<'s> Hunks<'s> {
    pub fn new(ops: &'s [Op], context: usize) -> Self {
        Self {
            ops,
            context,
            pos: 0,
            a_next: 0,
            b_next: 0,
        }
    }

    fn advance_to(&mut self, end: usize) {
        for op in &self.ops[self.pos..end] {
            self.a_next += usize::from(op.a_index().is_some());
            self.b_next += usize::from(op.b_index().is_some());
        }
        self.pos = end;
    }

    // Index of the first op at or after `from` that is not a change.
    fn run_end(&self, from: usize) -> usize {
        self.ops[from..]
            .iter()
            .position(|op| !op.is_change())
            .map_or(self.ops.len(), |offset| from + offset)
    }

    // Index of the first change at or after `from`, if any.
    fn next_change(&self, from: usize) -> Option<usize> {
        self.ops[from..]
            .iter()
            .position(Op::is_change)
            .map(|offset| from + offset)
    }
}

impl<'s> Iterator for Hunks<'s> {
    type Item = Hunk<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let first_change = self.next_change(self.pos)?;
        let start = first_change.saturating_sub(self.context).max(self.pos);
        self.advance_to(start);

        let mut end = self.run_end(first_change);
        loop {
            match self.next_change(end) {
                Some(next) if next - end <= 2 * self.context => {
                    end = self.run_end(next);
                }
                _ => {
                    let trailing = self.next_change(end).unwrap_or(self.ops.len()) - end;
                    end += trailing.min(self.context);
                    break;
                }
            }
        }

        let (a_start, b_start) = (self.a_next, self.b_next);
        self.advance_to(end);

        Some(Hunk {
            a_start,
            a_count: self.a_next - a_start,
            b_start,
            b_count: self.b_next - b_start,
            ops: &self.ops[start..end],
        })
    }
}
