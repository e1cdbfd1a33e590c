//! Segment extraction into the padded working matrix.

use crate::error::ExtractError;
use crate::matrix::SimilarityMatrix;
use crate::segment::Segment;

/// Padded working copy of one similarity-matrix segment.
///
/// Shape is `N x M` with `N = rows + 1` and `M = segment length + 1`:
/// column 0 is the all-zero wrap column used to stitch path restarts, row
/// `N - 1` is an all-zero virtual row below the data, and cell `(n, j)` for
/// `j >= 1` holds the similarity value at `(n, start + j - 1)` in 1-based
/// full-matrix coordinates.
#[derive(Debug, Clone)]
pub(crate) struct SegmentWindow {
    rows: usize,
    cols: usize,
    seg_start: usize,
    values: Vec<f64>,
}

impl SegmentWindow {
    /// Carve the segment's columns out of the full matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::SegmentOutOfBounds`] when the segment end
    /// exceeds the matrix width.
    pub(crate) fn extract(sim: &SimilarityMatrix, segment: Segment) -> Result<Self, ExtractError> {
        if segment.end() > sim.cols() {
            return Err(ExtractError::SegmentOutOfBounds {
                end: segment.end(),
                cols: sim.cols(),
            });
        }

        let rows = sim.rows() + 1;
        let cols = segment.len() + 1;
        let mut values = vec![0.0; rows * cols];
        for n in 0..sim.rows() {
            for j in 1..cols {
                values[n * cols + j] = sim.value(n, segment.start() + j - 2);
            }
        }

        Ok(Self {
            rows,
            cols,
            seg_start: segment.start(),
            values,
        })
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    /// 1-based first column of the segment in full-matrix coordinates.
    pub(crate) fn seg_start(&self) -> usize {
        self.seg_start
    }

    pub(crate) fn value(&self, n: usize, m: usize) -> f64 {
        self.values[n * self.cols + m]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim_3x4() -> SimilarityMatrix {
        SimilarityMatrix::from_rows(vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![5.0, 6.0, 7.0, 8.0],
            vec![9.0, 10.0, 11.0, 12.0],
        ])
        .unwrap()
    }

    #[test]
    fn full_width_segment() {
        let window = SegmentWindow::extract(&sim_3x4(), Segment::new(1, 4).unwrap()).unwrap();
        assert_eq!(window.rows(), 4);
        assert_eq!(window.cols(), 5);
        assert_eq!(window.value(0, 1), 1.0);
        assert_eq!(window.value(2, 4), 12.0);
    }

    #[test]
    fn wrap_column_is_zero() {
        let window = SegmentWindow::extract(&sim_3x4(), Segment::new(2, 3).unwrap()).unwrap();
        for n in 0..window.rows() {
            assert_eq!(window.value(n, 0), 0.0);
        }
    }

    #[test]
    fn virtual_row_is_zero() {
        let window = SegmentWindow::extract(&sim_3x4(), Segment::new(1, 4).unwrap()).unwrap();
        for m in 0..window.cols() {
            assert_eq!(window.value(3, m), 0.0);
        }
    }

    #[test]
    fn interior_segment_offsets_columns() {
        let window = SegmentWindow::extract(&sim_3x4(), Segment::new(2, 3).unwrap()).unwrap();
        assert_eq!(window.cols(), 3);
        assert_eq!(window.seg_start(), 2);
        assert_eq!(window.value(0, 1), 2.0);
        assert_eq!(window.value(0, 2), 3.0);
        assert_eq!(window.value(2, 1), 10.0);
        assert_eq!(window.value(2, 2), 11.0);
    }

    #[test]
    fn rejects_segment_past_matrix_width() {
        let result = SegmentWindow::extract(&sim_3x4(), Segment::new(3, 5).unwrap());
        assert!(matches!(
            result,
            Err(ExtractError::SegmentOutOfBounds { end: 5, cols: 4 })
        ));
    }
}
