use thiserror::Error;

/// Error type for vector and matrix operations.
///
/// Every error is raised at the call that detects the violation. Nothing in this crate
/// catches, retries or pads around them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// A matrix was requested with a zero row or column count.
    ///
    /// Also returned when a matrix is built from an empty list of rows, columns or factors.
    #[error("Invalid dimension: a matrix needs at least one row and one column, got {rows}x{cols}")]
    InvalidDimension {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },

    /// Flat literal data does not match the declared shape.
    ///
    /// # Example
    /// ```ignore
    /// // Error: shape 2x3 expects 6 entries, but got 5
    /// let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0], Layout::RowMajor)?;
    /// ```
    #[error("Size mismatch: expected {expected} entries for the shape, but got {actual}")]
    SizeMismatch {
        /// Number of entries implied by the shape
        expected: usize,
        /// Number of entries supplied
        actual: usize,
    },

    /// Rows or columns supplied for construction do not all have the same length.
    #[error("Non-uniform length: entry {index} has length {actual}, expected {expected}")]
    NonUniformLength {
        /// Position of the first offending row or column
        index: usize,
        /// Length of the first row or column
        expected: usize,
        /// Length of the offending row or column
        actual: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    ///
    /// # Examples
    /// - Adding matrices of different shapes
    /// - Dot product of vectors of different lengths
    /// - Matrix product with incompatible inner dimensions
    #[error("Dimension mismatch: {message}. Expected shape: {expected}, got: {actual}")]
    DimensionMismatch {
        /// Human-readable description of the mismatch
        message: String,
        /// Expected shape description
        expected: String,
        /// Actual shape description
        actual: String,
    },

    /// Row, column or entry index outside the valid range.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },
}

impl LinalgError {
    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Creates a DimensionMismatch error with formatted shapes.
    pub fn dimension_mismatch(
        message: impl Into<String>,
        expected: &[usize],
        actual: &[usize],
    ) -> Self {
        Self::DimensionMismatch {
            message: message.into(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }

    /// Returns a user-friendly suggestion for resolving the error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::InvalidDimension { .. } => "Request at least one row and one column",
            Self::SizeMismatch { .. } => {
                "Ensure rows * cols equals the number of supplied entries"
            }
            Self::NonUniformLength { .. } => {
                "Make every supplied row or column the same length"
            }
            Self::DimensionMismatch { .. } => {
                "Check operand shapes with `shape()` before combining them"
            }
            Self::IndexOutOfBounds { .. } => {
                "Verify indices are within bounds (0 <= index < dimension_size)"
            }
        }
    }
}
