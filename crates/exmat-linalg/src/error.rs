//! Errors raised by matrix operations.

use thiserror::Error;

/// Errors that can occur in matrix operations.
///
/// Every variant names the operation that failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand shapes are incompatible.
    #[error("{op}: incompatible matrices ({left_rows}x{left_cols} and {right_rows}x{right_cols})")]
    DimensionMismatch {
        /// Failing operation.
        op: &'static str,
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },

    /// The operation needs a square matrix.
    #[error("{op}: matrix not square ({rows}x{cols})")]
    NotSquare {
        /// Failing operation.
        op: &'static str,
        /// Rows of the matrix.
        rows: usize,
        /// Columns of the matrix.
        cols: usize,
    },

    /// An index lies outside the matrix.
    #[error("{op}: index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        /// Failing operation.
        op: &'static str,
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Rows of the matrix.
        rows: usize,
        /// Columns of the matrix.
        cols: usize,
    },

    /// An argument is not acceptable.
    #[error("{op}: {reason}")]
    InvalidArgument {
        /// Failing operation.
        op: &'static str,
        /// What was wrong.
        reason: String,
    },

    /// The matrix has no inverse.
    #[error("{op}: singular matrix")]
    Singular {
        /// Failing operation.
        op: &'static str,
    },

    /// The linear system has no solution.
    #[error("{op}: inconsistent linear system")]
    Inconsistent {
        /// Failing operation.
        op: &'static str,
    },
}

impl LinalgError {
    pub(crate) fn invalid(op: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            op,
            reason: reason.into(),
        }
    }
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, LinalgError>;
