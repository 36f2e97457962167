//! Operation kernels over the storage contracts.
//!
//! Kernels are pure functions: immutable inputs, one explicit output
//! container owned by the caller, errors as values. A failed kernel leaves
//! the output structurally valid but with unspecified contents; callers
//! must discard it. An optional mask of the output's shape gates which
//! positions may be written; reads of operands are never masked.

pub mod elementwise;
pub mod matmul;
pub mod reduced;
pub mod strassen;
pub mod structural;

pub use elementwise::{
    add, apply, negate, scalar_multiply, subtract, vector_add, vector_negate,
    vector_scalar_multiply, vector_subtract,
};
pub use matmul::{multiply, multiply_vector};
#[cfg(feature = "rayon")]
pub use matmul::multiply_parallel;
pub use reduced::reduced;
pub use strassen::{multiply_crossover, multiply_strassen};
pub use structural::{copy_into, equal, is_skew_symmetric, is_symmetric, reduce_to_scalar, transpose};

use crate::core::traits::{Matrix, Scalar, Vector};
use crate::error::{Result, SemlaError};

/// True iff the mask permits a write at `(r, c)`. A missing mask permits
/// everything; a present mask permits positions holding a non-zero.
pub(crate) fn mask_allows<T: Scalar>(
    mask: Option<&dyn Matrix<T>>,
    r: usize,
    c: usize,
) -> Result<bool> {
    match mask {
        None => Ok(true),
        Some(m) => Ok(!m.get(r, c)?.is_zero()),
    }
}

pub(crate) fn vector_mask_allows<T: Scalar>(
    mask: Option<&dyn Vector<T>>,
    i: usize,
) -> Result<bool> {
    match mask {
        None => Ok(true),
        Some(m) => Ok(!m.get(i)?.is_zero()),
    }
}

/// A mask must have exactly the output's shape.
pub(crate) fn check_mask_shape<T: Scalar>(
    op: &'static str,
    mask: Option<&dyn Matrix<T>>,
    out_dims: (usize, usize),
) -> Result<()> {
    if let Some(m) = mask {
        if m.dims() != out_dims {
            return Err(SemlaError::DimensionMismatch {
                op,
                lhs: m.dims(),
                rhs: out_dims,
            });
        }
    }
    Ok(())
}

pub(crate) fn check_vector_mask_len<T: Scalar>(
    op: &'static str,
    mask: Option<&dyn Vector<T>>,
    out_len: usize,
) -> Result<()> {
    if let Some(m) = mask {
        if m.len() != out_len {
            return Err(SemlaError::DimensionMismatch {
                op,
                lhs: (m.len(), 1),
                rhs: (out_len, 1),
            });
        }
    }
    Ok(())
}
