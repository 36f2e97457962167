//! Structural kernels: transpose, copy, equality, reduction, symmetry.

use num_traits::Float;

use crate::context::Context;
use crate::core::traits::{Matrix, Scalar};
use crate::error::{Result, SemlaError};
use crate::ops::monoid::Monoid;

/// B := A transposed. The output must be `a.cols x a.rows`.
pub fn transpose<T: Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    out: &mut dyn Matrix<T>,
) -> Result<()> {
    if out.dims() != (a.cols(), a.rows()) {
        return Err(SemlaError::DimensionMismatch {
            op: "transpose",
            lhs: out.dims(),
            rhs: (a.cols(), a.rows()),
        });
    }
    out.clear();
    let mut err = None;
    a.iterate(&mut |r, c, v| {
        let mut step = || -> Result<()> {
            ctx.checkpoint()?;
            out.set(c, r, v)
        };
        match step() {
            Ok(()) => true,
            Err(e) => {
                err = Some(e);
                false
            }
        }
    });
    err.map_or(Ok(()), Err)
}

/// B := A. Shapes must match; the output's previous contents are dropped.
pub fn copy_into<T: Scalar>(a: &dyn Matrix<T>, out: &mut dyn Matrix<T>) -> Result<()> {
    if out.dims() != a.dims() {
        return Err(SemlaError::DimensionMismatch {
            op: "copy",
            lhs: out.dims(),
            rhs: a.dims(),
        });
    }
    out.clear();
    let mut err = None;
    a.iterate(&mut |r, c, v| match out.set(r, c, v) {
        Ok(()) => true,
        Err(e) => {
            err = Some(e);
            false
        }
    });
    err.map_or(Ok(()), Err)
}

/// True iff both matrices have the same shape and agree at every position.
///
/// Each side's structural entries are checked through the other side's
/// `get`, so an entry present in only one operand is still compared.
pub fn equal<T: Scalar>(a: &dyn Matrix<T>, b: &dyn Matrix<T>) -> bool {
    if a.dims() != b.dims() {
        return false;
    }
    let forward = a.iterate(&mut |r, c, v| b.get(r, c).map_or(false, |w| w == v));
    forward && b.iterate(&mut |r, c, v| a.get(r, c).map_or(false, |w| w == v))
}

/// Fold the monoid over every structural non-zero of A.
///
/// Implicit zeros contribute the identity, so dense and sparse layouts of
/// the same logical matrix reduce to the same value. The fold runs in the
/// layout's iteration order; commutative monoids make that order
/// irrelevant.
pub fn reduce_to_scalar<T: Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    op: &Monoid<T>,
) -> Result<T> {
    let mut acc = op.identity();
    let mut err = None;
    a.iterate(&mut |_, _, v| {
        if let Err(e) = ctx.checkpoint() {
            err = Some(e);
            return false;
        }
        acc = op.apply(acc, v);
        true
    });
    err.map_or(Ok(acc), Err)
}

/// A square matrix equal to its transpose.
pub fn is_symmetric<T: Scalar>(a: &dyn Matrix<T>) -> bool {
    if a.rows() != a.cols() {
        return false;
    }
    a.iterate(&mut |r, c, v| a.get(c, r).map_or(false, |w| w == v))
}

/// A square matrix whose transpose equals its negative. Forces a zero
/// diagonal, since a structural diagonal entry cannot equal its negation.
pub fn is_skew_symmetric<T: Float + Scalar>(a: &dyn Matrix<T>) -> bool {
    if a.rows() != a.cols() {
        return false;
    }
    a.iterate(&mut |r, c, v| a.get(c, r).map_or(false, |w| w == -v))
}
