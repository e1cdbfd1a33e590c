//! Path-family extraction entry points.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::accumulate::accumulate;
use crate::backtrack::backtrack;
use crate::error::ExtractError;
use crate::matrix::SimilarityMatrix;
use crate::path::PathFamily;
use crate::segment::Segment;
use crate::steps::StepPatternSet;

/// Immutable path-family DTW configuration: the step pattern set under which
/// scores accumulate. Cheap to clone and thread-safe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathFamilyDtw {
    steps: StepPatternSet,
}

impl PathFamilyDtw {
    /// Create an extractor with the default diagonal/vertical/horizontal
    /// unit steps.
    #[must_use]
    pub fn with_default_steps() -> Self {
        Self {
            steps: StepPatternSet::default(),
        }
    }

    /// Create an extractor with a custom step pattern set.
    #[must_use]
    pub fn with_steps(steps: StepPatternSet) -> Self {
        Self { steps }
    }

    /// Return the step pattern set.
    #[must_use]
    pub fn steps(&self) -> &StepPatternSet {
        &self.steps
    }

    /// Extract the family of locally optimal alignment paths for one column
    /// segment of the similarity matrix.
    ///
    /// Runs the three stages in order: carve the segment into the padded
    /// working matrix, accumulate scores and step tags forward, backtrack
    /// the path family. The returned score is the accumulated value at the
    /// terminal cell and never less than zero; the family is empty when no
    /// positive-scoring alignment exists.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ExtractError::SegmentOutOfBounds`] | Segment end exceeds the matrix width |
    /// | other [`ExtractError`] variants | Internal consistency violation (never expected for valid inputs) |
    #[instrument(skip(self, sim), fields(rows = sim.rows(), cols = sim.cols(), start = segment.start(), end = segment.end()))]
    pub fn extract(
        &self,
        sim: &SimilarityMatrix,
        segment: Segment,
    ) -> Result<PathFamily, ExtractError> {
        let window = crate::window::SegmentWindow::extract(sim, segment)?;
        let acc = accumulate(&window, &self.steps);
        let paths = backtrack(&acc.tags, &self.steps, window.seg_start())?;
        let score = acc.scores.get(window.rows() - 1, 0);
        debug!(score, n_paths = paths.len(), "path family extracted");
        Ok(PathFamily::new(paths, score, acc.scores))
    }

    /// Extract path families for several segments of the same similarity
    /// matrix in parallel.
    ///
    /// Segments are independent, so the batch parallelizes across rayon
    /// workers; results are returned in input order and are identical to
    /// calling [`extract`][PathFamilyDtw::extract] per segment.
    ///
    /// # Errors
    ///
    /// Returns the first [`ExtractError`] produced by any segment.
    #[instrument(skip(self, sim, segments), fields(rows = sim.rows(), cols = sim.cols(), n_segments = segments.len()))]
    pub fn extract_many(
        &self,
        sim: &SimilarityMatrix,
        segments: &[Segment],
    ) -> Result<Vec<PathFamily>, ExtractError> {
        segments
            .par_iter()
            .map(|&segment| self.extract(sim, segment))
            .collect()
    }
}
