//! Forward accumulation pass: best cumulative score per cell plus the
//! step tag that produced it.

use crate::matrix::ScoreMatrix;
use crate::steps::StepPatternSet;
use crate::window::SegmentWindow;

/// Which transition produced a cell's optimal accumulated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    /// Stay in the wrap column, consuming one row.
    VerticalContinue,
    /// Re-enter the matrix: the predecessor is the previous row's final
    /// column. Marks the boundary between two paths of the family.
    WrapEnter,
    /// First real column; the predecessor is the wrap cell directly left.
    LeftOfWrap,
    /// Ordinary step, holding the 0-based index into the step pattern set.
    Step(usize),
}

/// Step-tag matrix parallel to the score matrix.
#[derive(Debug, Clone)]
pub(crate) struct TagMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Tag>,
}

impl TagMatrix {
    #[cfg(test)]
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<Tag>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn get(&self, n: usize, m: usize) -> Tag {
        self.data[n * self.cols + m]
    }
}

/// Output of the forward pass.
pub(crate) struct Accumulation {
    pub(crate) scores: ScoreMatrix,
    pub(crate) tags: TagMatrix,
}

/// Run the generalized DTW forward pass over the padded working matrix.
///
/// Rows are swept top to bottom in a single pass; each cell depends only on
/// earlier rows and on cells of the current row already written this sweep
/// (the wrap cell for the first real column, same-row predecessors for
/// `dn = 0` steps), so the order is load-bearing.
///
/// Per row `n`:
/// - Wrap column `m = 0`: the better of continuing down the wrap column and
///   re-entering from the previous row's final column. The `n = 0`
///   predecessors are the virtual seed (score zero above the wrap column)
///   and an unreachable final column. Ties stay in the wrap column.
/// - First real column `m = 1`: seeded from the wrap cell to its left plus
///   the unweighted similarity value, tagged [`Tag::LeftOfWrap`].
/// - Every real column, including `m = 1`: each step proposes its
///   predecessor's score plus `weight * similarity`; a step whose
///   predecessor column would land in or before the wrap column is skipped,
///   which at `m = 1` leaves only `dm = 0` steps competing against the seed.
///   Only a strict improvement replaces the incumbent, so ties keep the
///   lowest-indexed step.
///
/// Reads of unreached cells yield `f64::NEG_INFINITY`; no padding rows or
/// columns are materialized.
pub(crate) fn accumulate(window: &SegmentWindow, steps: &StepPatternSet) -> Accumulation {
    let rows = window.rows();
    let cols = window.cols();

    let mut scores = vec![f64::NEG_INFINITY; rows * cols];
    let mut tags = vec![Tag::VerticalContinue; rows * cols];

    for n in 0..rows {
        let base = n * cols;

        // wrap column
        let (down, reenter) = if n == 0 {
            (0.0, f64::NEG_INFINITY)
        } else {
            (scores[base - cols], scores[base - 1])
        };
        if down >= reenter {
            scores[base] = down;
            tags[base] = Tag::VerticalContinue;
        } else {
            scores[base] = reenter;
            tags[base] = Tag::WrapEnter;
        }

        // first real column
        scores[base + 1] = scores[base] + window.value(n, 1);
        tags[base + 1] = Tag::LeftOfWrap;

        for m in 1..cols {
            let sim = window.value(n, m);
            for (s, step) in steps.iter().enumerate() {
                if step.dm() >= m {
                    // predecessor would cross the wrap boundary
                    continue;
                }
                if step.dn() > n {
                    continue;
                }
                let pred = scores[(n - step.dn()) * cols + (m - step.dm())];
                let candidate = pred + sim * step.weight();
                if candidate > scores[base + m] {
                    scores[base + m] = candidate;
                    tags[base + m] = Tag::Step(s);
                }
            }
        }
    }

    Accumulation {
        scores: ScoreMatrix::from_raw(rows, cols, scores),
        tags: TagMatrix {
            rows,
            cols,
            data: tags,
        },
    }
}
