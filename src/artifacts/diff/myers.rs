//! Myers' O((N+M)·D) shortest edit script
//!
//! The search walks the edit graph breadth-first by edit depth `d`. For
//! each diagonal `k = x - y` reachable at that depth it records the
//! furthest `x` reached, following runs of equal elements (snakes)
//! greedily. The frontier of every depth is kept in an arena so the
//! path can be recovered by walking the depths backwards from `(N, M)`.
//!
//! Only the diagonals `-d..=d` are stored per depth, so the history costs
//! O(D²) rather than O(D·(N+M)).
//!
//! Tie-break: on an interior diagonal the delete move (from `k - 1`) wins
//! only when it lands strictly further right than the insert move (from
//! `k + 1`). Backtracking then yields deletions before insertions inside
//! each change run, which is what conventional diff output shows.

use crate::artifacts::core::cancel::CancelToken;
use crate::artifacts::diff::error::DiffError;
use crate::domain::edit::{EditScript, Op};
use crate::domain::sequence::SequencePair;

/// Furthest-reaching `x` per diagonal at one search depth.
#[derive(Debug, Clone)]
struct Frontier {
    depth: isize,
    xs: Vec<usize>,
}

impl Frontier {
    fn new(depth: isize) -> Self {
        Self {
            depth,
            xs: vec![0; depth as usize + 1],
        }
    }

    fn slot(&self, k: isize) -> usize {
        debug_assert!(k >= -self.depth && k <= self.depth && (k + self.depth) % 2 == 0);
        ((k + self.depth) / 2) as usize
    }

    fn get(&self, k: isize) -> usize {
        self.xs[self.slot(k)]
    }

    fn set(&mut self, k: isize, x: usize) {
        let slot = self.slot(k);
        self.xs[slot] = x;
    }
}

/// Computes a minimal edit script turning `A` into `B`.
///
/// `cancel` is polled once per search depth, including before any work is
/// done. A cancelled run yields [`DiffError::Cancelled`] and no script.
pub fn myers<P>(pair: &P, cancel: &CancelToken) -> Result<EditScript, DiffError>
where
    P: SequencePair + ?Sized,
{
    let (n, m) = (pair.len_a(), pair.len_b());

    if cancel.is_cancelled() {
        return Err(DiffError::Cancelled);
    }

    if n == 0 {
        return Ok(EditScript::new((0..m).map(|b| Op::Insert { b }).collect()));
    }
    if m == 0 {
        return Ok(EditScript::new((0..n).map(|a| Op::Delete { a }).collect()));
    }

    let trace = shortest_edit(pair, cancel)?;
    let script = backtrack(&trace, n, m);

    tracing::debug!(
        len_a = n,
        len_b = m,
        distance = trace.len() - 1,
        "computed edit script"
    );

    Ok(script)
}

fn shortest_edit<P>(pair: &P, cancel: &CancelToken) -> Result<Vec<Frontier>, DiffError>
where
    P: SequencePair + ?Sized,
{
    let (n, m) = (pair.len_a(), pair.len_b());
    let max = (n + m) as isize;
    let mut trace: Vec<Frontier> = Vec::new();

    for d in 0..=max {
        if cancel.is_cancelled() {
            tracing::debug!(depth = d, "edit search cancelled");
            return Err(DiffError::Cancelled);
        }
        tracing::trace!(depth = d, "extending frontier");

        let mut frontier = Frontier::new(d);

        for k in (-d..=d).step_by(2) {
            let mut x = match trace.last() {
                None => 0,
                Some(prev) => {
                    if k == -d {
                        // only reachable from k+1, an insertion
                        prev.get(k + 1)
                    } else if k == d {
                        // only reachable from k-1, a deletion
                        prev.get(k - 1) + 1
                    } else {
                        let x_del = prev.get(k - 1) + 1;
                        let x_ins = prev.get(k + 1);
                        if x_del > x_ins { x_del } else { x_ins }
                    }
                }
            };

            let mut y = (x as isize - k) as usize;
            while x < n && y < m && pair.equal(x, y) {
                // snake
                x += 1;
                y += 1;
            }

            frontier.set(k, x);

            if x >= n && y >= m {
                trace.push(frontier);
                return Ok(trace);
            }
        }

        trace.push(frontier);
    }

    // (N, M) is always reached by depth N + M.
    unreachable!("edit search exhausted without reaching the end of both sequences")
}

fn backtrack(trace: &[Frontier], n: usize, m: usize) -> EditScript {
    let (mut x, mut y) = (n, m);
    let mut ops = Vec::with_capacity(n.max(m));

    for d in (0..trace.len()).rev() {
        let k = x as isize - y as isize;

        if d == 0 {
            while x > 0 && y > 0 {
                x -= 1;
                y -= 1;
                ops.push(Op::Keep { a: x, b: y });
            }
            break;
        }

        let prev = &trace[d - 1];
        let depth = d as isize;
        let prev_k = if k == -depth {
            k + 1
        } else if k == depth {
            k - 1
        } else if prev.get(k - 1) + 1 > prev.get(k + 1) {
            k - 1
        } else {
            k + 1
        };

        let prev_x = prev.get(prev_k);
        let prev_y = (prev_x as isize - prev_k) as usize;

        // where the single edit move lands before the snake
        let (mid_x, mid_y) = if prev_k == k + 1 {
            (prev_x, prev_y + 1)
        } else {
            (prev_x + 1, prev_y)
        };

        while x > mid_x && y > mid_y {
            x -= 1;
            y -= 1;
            ops.push(Op::Keep { a: x, b: y });
        }

        if prev_k == k + 1 {
            ops.push(Op::Insert { b: prev_y });
        } else {
            ops.push(Op::Delete { a: prev_x });
        }

        (x, y) = (prev_x, prev_y);
    }

    ops.reverse();
    EditScript::new(ops)
}
