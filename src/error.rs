//! Error types for input validation and path-family extraction.

/// Errors from similarity matrix construction.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// Returned when the matrix has zero rows or zero columns.
    #[error("similarity matrix must have at least one row and one column, got {rows}x{cols}")]
    EmptyMatrix {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
    },

    /// Returned when the flat data length does not match the declared shape.
    #[error("similarity matrix shape {rows}x{cols} requires {expected} values, got {got}")]
    ShapeMismatch {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
        /// Number of values the shape requires.
        expected: usize,
        /// Number of values provided.
        got: usize,
    },

    /// Returned when a row differs in length from the first row.
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        got: usize,
    },

    /// Returned when the matrix contains NaN, infinity, or negative infinity.
    #[error("similarity matrix contains non-finite value at row {row}, column {col}")]
    NonFiniteValue {
        /// Row of the first non-finite value found.
        row: usize,
        /// Column of the first non-finite value found.
        col: usize,
    },
}

/// Errors from segment construction.
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    /// Returned when the 1-based start column is zero.
    #[error("segment start must be at least 1")]
    ZeroStart,

    /// Returned when the end column precedes the start column.
    #[error("segment end {end} precedes segment start {start}")]
    ReversedBounds {
        /// The provided start column.
        start: usize,
        /// The provided end column.
        end: usize,
    },
}

/// Errors from step pattern construction.
#[derive(Debug, thiserror::Error)]
pub enum StepPatternError {
    /// Returned when a step advances neither the row nor the column.
    #[error("step pattern must advance at least one of row or column")]
    NullStep,

    /// Returned when a step weight is NaN or infinite.
    #[error("step weight must be finite, got {weight}")]
    NonFiniteWeight {
        /// The invalid weight provided.
        weight: f64,
    },

    /// Returned when an empty step set is provided.
    #[error("step pattern set must contain at least one step")]
    EmptySet,

    /// Returned when the parallel dn/dm/weight arrays differ in length.
    #[error("step parameter lengths do not match: dn has {dn_len}, dm has {dm_len}, weights has {weight_len}")]
    LengthMismatch {
        /// Length of the row-delta array.
        dn_len: usize,
        /// Length of the column-delta array.
        dm_len: usize,
        /// Length of the weight array.
        weight_len: usize,
    },
}

/// Errors from path-family extraction.
///
/// [`SegmentOutOfBounds`][ExtractError::SegmentOutOfBounds] is a caller error.
/// The remaining variants report an inconsistent step-tag matrix; they cannot
/// occur for tag matrices produced by the forward pass and exist so that a
/// corrupted walk is reported instead of looping or indexing out of bounds.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Returned when the segment end exceeds the similarity matrix width.
    #[error("segment end {end} exceeds similarity matrix width {cols}")]
    SegmentOutOfBounds {
        /// The requested 1-based end column.
        end: usize,
        /// The matrix column count.
        cols: usize,
    },

    /// Returned when backtracking fails to reach the origin within the
    /// iteration ceiling.
    #[error("backtracking did not terminate within {iterations} iterations; step-tag matrix is inconsistent")]
    BacktrackStalled {
        /// The iteration ceiling that was exceeded.
        iterations: usize,
    },

    /// Returned when a backtracking move would step outside the matrix.
    #[error("backtracking stepped outside the score matrix from row {row}, column {column}")]
    CursorOutOfBounds {
        /// Cursor row before the offending move.
        row: usize,
        /// Cursor column before the offending move.
        column: usize,
    },

    /// Returned when a cell references a step index outside the pattern set.
    #[error("step-tag matrix references unknown step index {index}")]
    UnknownStepTag {
        /// The out-of-range step index.
        index: usize,
    },
}
