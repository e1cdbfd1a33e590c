//! Backward walk over the step-tag matrix, splitting the globally optimal
//! route into one path per wrap restart.

use crate::accumulate::{Tag, TagMatrix};
use crate::error::ExtractError;
use crate::path::{Path, PathPoint};
use crate::steps::StepPatternSet;

/// Walk the tag matrix backward from the bottom wrap cell and emit the path
/// family.
///
/// The cursor starts at `(N - 1, 0)` and runs until it reaches the origin.
/// Wrap-column tags move it between rows without recording points; a
/// [`Tag::WrapEnter`] jumps to the final column of the row above and opens a
/// new path; ordinary steps collect points until [`Tag::LeftOfWrap`]
/// finalizes the current path back at the segment's first column. Collected
/// points are reversed on emission so every path reads root to destination,
/// with 1-based rows and columns shifted into full-matrix coordinates.
///
/// Paths are emitted in finalization order: the path holding the global
/// terminal cell first, earlier restarts after it.
///
/// # Errors
///
/// A tag matrix produced by the forward pass always terminates, and every
/// move keeps the cursor inside the matrix. The walk is still bounded
/// defensively; a matrix violating those invariants reports
/// [`ExtractError::BacktrackStalled`], [`ExtractError::CursorOutOfBounds`],
/// or [`ExtractError::UnknownStepTag`] instead of looping or panicking.
pub(crate) fn backtrack(
    tags: &TagMatrix,
    steps: &StepPatternSet,
    seg_start: usize,
) -> Result<Vec<Path>, ExtractError> {
    let rows = tags.rows();
    let cols = tags.cols();

    // Every move decreases the row or, holding the row fixed, the column;
    // rows are consumed at most `rows` times and the column span is `cols`,
    // so any well-formed walk fits comfortably under this ceiling.
    let max_iterations = rows * cols + rows + cols;

    let mut paths: Vec<Path> = Vec::new();
    let mut points: Vec<(usize, usize)> = Vec::new();
    let mut n = rows - 1;
    let mut m = 0usize;
    let mut iterations = 0usize;

    while n > 0 || m > 0 {
        iterations += 1;
        if iterations > max_iterations {
            return Err(ExtractError::BacktrackStalled {
                iterations: max_iterations,
            });
        }

        match tags.get(n, m) {
            Tag::VerticalContinue => {
                n = checked_retreat(n, 1, n, m)?;
            }
            Tag::WrapEnter => {
                n = checked_retreat(n, 1, n, m)?;
                m = cols - 1;
                points.clear();
            }
            Tag::LeftOfWrap => {
                points.push((n, m));
                paths.push(finalize(&points, seg_start));
                points.clear();
                m = checked_retreat(m, 1, n, m)?;
            }
            Tag::Step(s) => {
                let step = steps
                    .get(s)
                    .ok_or(ExtractError::UnknownStepTag { index: s })?;
                points.push((n, m));
                let (row, column) = (n, m);
                n = checked_retreat(n, step.dn(), row, column)?;
                m = checked_retreat(m, step.dm(), row, column)?;
            }
        }
    }

    Ok(paths)
}

fn checked_retreat(value: usize, delta: usize, row: usize, column: usize) -> Result<usize, ExtractError> {
    value
        .checked_sub(delta)
        .ok_or(ExtractError::CursorOutOfBounds { row, column })
}

/// Reverse the backward-collected points and map them into 1-based
/// full-matrix coordinates: rows shift by one, columns drop the wrap offset
/// and gain the segment start.
fn finalize(points: &[(usize, usize)], seg_start: usize) -> Path {
    let coords = points
        .iter()
        .rev()
        .map(|&(n, m)| PathPoint {
            row: n + 1,
            column: m + seg_start - 1,
        })
        .collect();
    Path::new(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wrap_column_walk_emits_nothing() {
        // A wrap column of vertical continues only: the walk runs straight
        // up and produces an empty family.
        let tags = TagMatrix::from_raw(
            3,
            2,
            vec![
                Tag::VerticalContinue,
                Tag::LeftOfWrap,
                Tag::VerticalContinue,
                Tag::LeftOfWrap,
                Tag::VerticalContinue,
                Tag::LeftOfWrap,
            ],
        );
        let paths = backtrack(&tags, &StepPatternSet::default(), 1).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn single_restart_emits_one_path() {
        // Row 1 wrap cell re-enters row 0's final column, which finalizes
        // immediately as a single-point path.
        let tags = TagMatrix::from_raw(
            2,
            2,
            vec![
                Tag::VerticalContinue,
                Tag::LeftOfWrap,
                Tag::WrapEnter,
                Tag::LeftOfWrap,
            ],
        );
        let paths = backtrack(&tags, &StepPatternSet::default(), 4).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].points(), &[PathPoint { row: 1, column: 4 }]);
    }

    #[test]
    fn wrap_enter_at_top_row_reports_out_of_bounds() {
        let tags = TagMatrix::from_raw(
            2,
            2,
            vec![
                Tag::WrapEnter,
                Tag::LeftOfWrap,
                Tag::WrapEnter,
                Tag::WrapEnter,
            ],
        );
        let result = backtrack(&tags, &StepPatternSet::default(), 1);
        assert!(matches!(result, Err(ExtractError::CursorOutOfBounds { .. })));
    }

    #[test]
    fn unknown_step_index_is_reported() {
        let tags = TagMatrix::from_raw(
            2,
            2,
            vec![
                Tag::VerticalContinue,
                Tag::LeftOfWrap,
                Tag::WrapEnter,
                Tag::Step(7),
            ],
        );
        let result = backtrack(&tags, &StepPatternSet::default(), 1);
        assert!(matches!(result, Err(ExtractError::UnknownStepTag { index: 7 })));
    }
}
