//! Constrained DTW path-family extraction over similarity-matrix segments.
//!
//! Pure math library with no I/O. Given a dense similarity matrix and a
//! column segment, computes a dynamic-time-warping accumulated-score matrix
//! under a configurable step pattern set, then backtracks not one optimal
//! path but a whole family of locally optimal alignment paths, one per
//! restart row. A synthetic zero-valued wrap column lets the optimal route
//! restart from any row at no cost, which is what splits the result into a
//! family: the construction used for repetition-based audio structure
//! analysis (Mueller et al., SM Toolbox).
//!
//! Extraction is deterministic and sequential per call; independent segments
//! can be processed in parallel via
//! [`PathFamilyDtw::extract_many`].
//!
//! # Examples
//!
//! ```
//! use pathfam::{PathFamilyDtw, Segment, SimilarityMatrix};
//!
//! let sim = SimilarityMatrix::from_rows(vec![
//!     vec![1.0, 0.0, 0.0],
//!     vec![0.0, 1.0, 0.0],
//!     vec![0.0, 0.0, 1.0],
//! ])
//! .unwrap();
//!
//! let dtw = PathFamilyDtw::with_default_steps();
//! let family = dtw.extract(&sim, Segment::new(1, 3).unwrap()).unwrap();
//!
//! assert_eq!(family.len(), 1);
//! assert!((family.score() - 3.0).abs() < 1e-12);
//! ```

mod accumulate;
mod backtrack;
mod dtw;
mod error;
mod matrix;
mod path;
mod segment;
mod steps;
mod window;

pub use dtw::PathFamilyDtw;
pub use error::{ExtractError, MatrixError, SegmentError, StepPatternError};
pub use matrix::{ScoreMatrix, SimilarityMatrix};
pub use path::{Path, PathFamily, PathPoint};
pub use segment::Segment;
pub use steps::{StepPattern, StepPatternSet};
