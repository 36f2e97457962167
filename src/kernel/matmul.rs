//! Matrix-product kernels parameterised by a semiring.

use crate::context::Context;
use crate::core::traits::{Matrix, Scalar, Vector};
use crate::error::{Result, SemlaError};
use crate::kernel::{check_mask_shape, check_vector_mask_len, mask_allows, vector_mask_allows};
use crate::ops::semiring::Semiring;
use crate::vector::SparseVector;

/// Fold plus(acc, times(a_k, b_k)) over the structural intersection of two
/// sparse vectors, ascending k, starting from the additive identity.
///
/// The ascending merge makes the fold order independent of the operands'
/// storage layout, so every layout produces the identical result.
pub(crate) fn dot<T: Scalar>(
    row: &SparseVector<T>,
    col: &SparseVector<T>,
    semiring: &Semiring<T>,
) -> T {
    let mut acc = semiring.add().identity();
    let mut xs = row.iter().peekable();
    let mut ys = col.iter().peekable();
    while let (Some(&(i, x)), Some(&(j, y))) = (xs.peek(), ys.peek()) {
        if i == j {
            acc = semiring.add().apply(acc, semiring.mul().apply(x, y));
            xs.next();
            ys.next();
        } else if i < j {
            xs.next();
        } else {
            ys.next();
        }
    }
    acc
}

/// C := A x B under the semiring. Requires `a.cols == b.rows` and an
/// output of shape `a.rows x b.cols`.
///
/// A cell with no structural pairing gets the additive identity, which for
/// the arithmetic semiring is zero and therefore costs sparse outputs no
/// storage.
pub fn multiply<T: Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    b: &dyn Matrix<T>,
    mask: Option<&dyn Matrix<T>>,
    out: &mut dyn Matrix<T>,
    semiring: &Semiring<T>,
) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(SemlaError::DimensionMismatch {
            op: "multiply",
            lhs: a.dims(),
            rhs: b.dims(),
        });
    }
    if out.dims() != (a.rows(), b.cols()) {
        return Err(SemlaError::DimensionMismatch {
            op: "multiply output",
            lhs: out.dims(),
            rhs: (a.rows(), b.cols()),
        });
    }
    check_mask_shape("multiply mask", mask, out.dims())?;
    out.clear();

    let cols: Vec<SparseVector<T>> = (0..b.cols()).map(|j| b.col(j)).collect::<Result<_>>()?;
    for i in 0..a.rows() {
        ctx.checkpoint()?;
        let row = a.row(i)?;
        for (j, col) in cols.iter().enumerate() {
            if mask_allows(mask, i, j)? {
                out.set(i, j, dot(&row, col, semiring))?;
            }
        }
    }
    Ok(())
}

/// y := A x v under the semiring, with `v` as a column vector.
pub fn multiply_vector<T: Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    x: &dyn Vector<T>,
    mask: Option<&dyn Vector<T>>,
    out: &mut dyn Vector<T>,
    semiring: &Semiring<T>,
) -> Result<()> {
    if a.cols() != x.len() {
        return Err(SemlaError::DimensionMismatch {
            op: "multiply_vector",
            lhs: a.dims(),
            rhs: (x.len(), 1),
        });
    }
    if out.len() != a.rows() {
        return Err(SemlaError::DimensionMismatch {
            op: "multiply_vector output",
            lhs: (out.len(), 1),
            rhs: (a.rows(), 1),
        });
    }
    check_vector_mask_len("multiply_vector mask", mask, out.len())?;
    out.clear();

    let mut xs = SparseVector::new(x.len());
    x.iterate(&mut |i, v| xs.set(i, v).is_ok());
    for i in 0..a.rows() {
        ctx.checkpoint()?;
        if vector_mask_allows(mask, i)? {
            out.set(i, dot(&a.row(i)?, &xs, semiring))?;
        }
    }
    Ok(())
}

/// Per-row parallel multiply for the unmasked case. Rows of the output are
/// independent, so the only ordering constraint is the in-row fold, which
/// `dot` keeps ascending exactly as the serial kernel does.
#[cfg(feature = "rayon")]
pub fn multiply_parallel<T, A, B>(
    ctx: &Context,
    a: &A,
    b: &B,
    semiring: &Semiring<T>,
) -> Result<crate::matrix::DenseMatrix<T>>
where
    T: Scalar,
    A: Matrix<T> + Sync,
    B: Matrix<T> + Sync,
{
    use rayon::prelude::*;

    use crate::matrix::DenseMatrix;

    if a.cols() != b.rows() {
        return Err(SemlaError::DimensionMismatch {
            op: "multiply_parallel",
            lhs: a.dims(),
            rhs: b.dims(),
        });
    }
    let cols: Vec<SparseVector<T>> = (0..b.cols()).map(|j| b.col(j)).collect::<Result<_>>()?;
    let rows: Vec<Vec<T>> = (0..a.rows())
        .into_par_iter()
        .map(|i| -> Result<Vec<T>> {
            ctx.checkpoint()?;
            let row = a.row(i)?;
            Ok(cols.iter().map(|col| dot(&row, col, semiring)).collect())
        })
        .collect::<Result<_>>()?;
    DenseMatrix::from_raw(a.rows(), b.cols(), rows.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{CsrMatrix, DenseMatrix};
    use crate::ops::semiring;
    use crate::vector::DenseVector;

    #[test]
    fn dot_folds_the_structural_intersection() {
        let x = SparseVector::from_slice(&[1.0, 0.0, 2.0, 3.0]);
        let y = SparseVector::from_slice(&[4.0, 5.0, 0.0, 2.0]);
        // only indices 0 and 3 pair up
        assert_eq!(dot(&x, &y, &semiring::plus_times()), 10.0);
    }

    #[test]
    fn empty_row_yields_the_additive_identity() {
        let ctx = Context::new();
        let a = CsrMatrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 2.0]]).unwrap();
        let b = DenseMatrix::from_rows(&[vec![3.0], vec![4.0]]).unwrap();
        let mut out = CsrMatrix::new(2, 1);
        multiply(&ctx, &a, &b, None, &mut out, &semiring::plus_times()).unwrap();
        assert_eq!(out.get(0, 0).unwrap(), 0.0);
        assert_eq!(out.nnz(), 1);
        assert_eq!(out.get(1, 0).unwrap(), 11.0);
    }

    #[test]
    fn matvec_matches_by_hand() {
        let ctx = Context::new();
        let a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let x = DenseVector::from_slice(&[5.0, 6.0]);
        let mut y = DenseVector::new(2);
        multiply_vector(&ctx, &a, &x, None, &mut y, &semiring::plus_times()).unwrap();
        assert_eq!(y.as_slice(), &[17.0, 39.0]);
    }

    #[test]
    fn mismatched_inner_dimension_is_rejected() {
        let ctx = Context::new();
        let a = DenseMatrix::<f64>::new(2, 3);
        let b = DenseMatrix::new(2, 2);
        let mut out = DenseMatrix::new(2, 2);
        let err = multiply(&ctx, &a, &b, None, &mut out, &semiring::plus_times());
        assert!(matches!(err, Err(SemlaError::DimensionMismatch { .. })));
    }

    #[test]
    fn boolean_semiring_reachability() {
        let ctx = Context::new();
        // edge 0 -> 1 stored as a[1][0], column is the source
        let a = CsrMatrix::from_rows(&[
            vec![false, false],
            vec![true, false],
        ])
        .unwrap();
        let mut frontier = SparseVector::new(2);
        frontier.set(0, true).unwrap();
        let mut next = SparseVector::new(2);
        multiply_vector(&ctx, &a, &frontier, None, &mut next, &semiring::lor_land()).unwrap();
        assert!(!next.get(0).unwrap());
        assert!(next.get(1).unwrap());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_multiply_matches_serial() {
        let ctx = Context::new();
        let a = DenseMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = DenseMatrix::from_rows(&[vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]])
            .unwrap();
        let mut serial = DenseMatrix::new(2, 2);
        multiply(&ctx, &a, &b, None, &mut serial, &semiring::plus_times()).unwrap();
        let parallel = multiply_parallel(&ctx, &a, &b, &semiring::plus_times()).unwrap();
        assert!(crate::kernel::structural::equal(&serial, &parallel));
    }
}
