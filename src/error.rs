use thiserror::Error;

// Unified error type for semla

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, SemlaError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemlaError {
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} container")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("semiring is not supported by {op}")]
    UnsupportedSemiring { op: &'static str },
    #[error("operation cancelled")]
    Cancelled,
    #[error("invalid argument '{arg}': {reason}")]
    InvalidArgument { arg: &'static str, reason: String },
    #[error("matrix has no rows or columns to reduce")]
    Singular,
}

impl SemlaError {
    /// IndexOutOfRange for a vector of length `len` indexed at `index`.
    pub(crate) fn out_of_range_vec(index: usize, len: usize) -> Self {
        SemlaError::IndexOutOfRange {
            row: index,
            col: 0,
            rows: len,
            cols: 1,
        }
    }

    pub(crate) fn invalid(arg: &'static str, reason: impl Into<String>) -> Self {
        SemlaError::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
