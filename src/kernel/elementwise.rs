//! Element-wise kernels: add, subtract, unary apply, scalar multiply, negate.

use num_traits::Float;

use crate::context::Context;
use crate::core::traits::{Matrix, Scalar, Vector};
use crate::error::{Result, SemlaError};
use crate::kernel::{check_mask_shape, check_vector_mask_len, mask_allows, vector_mask_allows};
use crate::ops::binary::{self, BinaryOp};
use crate::ops::monoid::Monoid;
use crate::ops::unary::{self, UnaryOp};

fn check_same_dims<T: Scalar>(
    op: &'static str,
    a: &dyn Matrix<T>,
    b: &dyn Matrix<T>,
) -> Result<()> {
    if a.dims() != b.dims() {
        return Err(SemlaError::DimensionMismatch {
            op,
            lhs: a.dims(),
            rhs: b.dims(),
        });
    }
    Ok(())
}

/// C[r,c] := op(A[r,c], B[r,c]) for every unmasked position.
///
/// When `op(0, 0) = 0` only the structural union of the operands is
/// visited; otherwise implicit zeros produce non-zeros and the kernel
/// sweeps the full index space.
fn combine<T: Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    b: &dyn Matrix<T>,
    mask: Option<&dyn Matrix<T>>,
    out: &mut dyn Matrix<T>,
    name: &'static str,
    op: &BinaryOp<T>,
) -> Result<()> {
    check_same_dims(name, a, b)?;
    check_same_dims(name, a, out)?;
    check_mask_shape(name, mask, out.dims())?;
    out.clear();

    if op.apply(T::zero(), T::zero()).is_zero() {
        let mut err = None;
        a.iterate(&mut |r, c, av| {
            let mut step = || -> Result<()> {
                ctx.checkpoint()?;
                if mask_allows(mask, r, c)? {
                    out.set(r, c, op.apply(av, b.get(r, c)?))?;
                }
                Ok(())
            };
            match step() {
                Ok(()) => true,
                Err(e) => {
                    err = Some(e);
                    false
                }
            }
        });
        if let Some(e) = err {
            return Err(e);
        }
        // positions stored only in b
        b.iterate(&mut |r, c, bv| {
            let mut step = || -> Result<()> {
                ctx.checkpoint()?;
                if a.get(r, c)?.is_zero() && mask_allows(mask, r, c)? {
                    out.set(r, c, op.apply(T::zero(), bv))?;
                }
                Ok(())
            };
            match step() {
                Ok(()) => true,
                Err(e) => {
                    err = Some(e);
                    false
                }
            }
        });
        if let Some(e) = err {
            return Err(e);
        }
        return Ok(());
    }

    for r in 0..a.rows() {
        ctx.checkpoint()?;
        for c in 0..a.cols() {
            if mask_allows(mask, r, c)? {
                out.set(r, c, op.apply(a.get(r, c)?, b.get(r, c)?))?;
            }
        }
    }
    Ok(())
}

/// C := A + B under the monoid's operator.
pub fn add<T: Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    b: &dyn Matrix<T>,
    mask: Option<&dyn Matrix<T>>,
    out: &mut dyn Matrix<T>,
    op: &Monoid<T>,
) -> Result<()> {
    combine(ctx, a, b, mask, out, "add", op.op())
}

/// C := A - B.
pub fn subtract<T: Float + Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    b: &dyn Matrix<T>,
    mask: Option<&dyn Matrix<T>>,
    out: &mut dyn Matrix<T>,
) -> Result<()> {
    combine(ctx, a, b, mask, out, "subtract", &binary::subtraction())
}

/// C[r,c] := op(A[r,c]) for every structural non-zero of A.
pub fn apply<T: Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    mask: Option<&dyn Matrix<T>>,
    out: &mut dyn Matrix<T>,
    op: &UnaryOp<T>,
) -> Result<()> {
    check_same_dims("apply", a, out)?;
    check_mask_shape("apply", mask, out.dims())?;
    out.clear();
    let mut err = None;
    a.iterate(&mut |r, c, v| {
        let mut step = || -> Result<()> {
            ctx.checkpoint()?;
            if mask_allows(mask, r, c)? {
                out.set(r, c, op.apply(v))?;
            }
            Ok(())
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

/// C := alpha * A.
pub fn scalar_multiply<T: Float + Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    alpha: T,
    mask: Option<&dyn Matrix<T>>,
    out: &mut dyn Matrix<T>,
) -> Result<()> {
    check_same_dims("scalar_multiply", a, out)?;
    check_mask_shape("scalar_multiply", mask, out.dims())?;
    out.clear();
    let mut err = None;
    a.iterate(&mut |r, c, v| {
        let mut step = || -> Result<()> {
            ctx.checkpoint()?;
            if mask_allows(mask, r, c)? {
                out.set(r, c, alpha * v)?;
            }
            Ok(())
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

/// C := -A.
pub fn negate<T: Float + Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    mask: Option<&dyn Matrix<T>>,
    out: &mut dyn Matrix<T>,
) -> Result<()> {
    apply(ctx, a, mask, out, &unary::additive_inverse())
}

fn check_same_len<T: Scalar>(
    op: &'static str,
    x: &dyn Vector<T>,
    y: &dyn Vector<T>,
) -> Result<()> {
    if x.len() != y.len() {
        return Err(SemlaError::DimensionMismatch {
            op,
            lhs: (x.len(), 1),
            rhs: (y.len(), 1),
        });
    }
    Ok(())
}

fn combine_vector<T: Scalar>(
    ctx: &Context,
    x: &dyn Vector<T>,
    y: &dyn Vector<T>,
    mask: Option<&dyn Vector<T>>,
    out: &mut dyn Vector<T>,
    name: &'static str,
    op: &BinaryOp<T>,
) -> Result<()> {
    check_same_len(name, x, y)?;
    check_same_len(name, x, out)?;
    check_vector_mask_len(name, mask, out.len())?;
    out.clear();
    for i in 0..x.len() {
        ctx.checkpoint()?;
        if vector_mask_allows(mask, i)? {
            out.set(i, op.apply(x.get(i)?, y.get(i)?))?;
        }
    }
    Ok(())
}

/// y := a + b under the monoid's operator, element by element.
pub fn vector_add<T: Scalar>(
    ctx: &Context,
    x: &dyn Vector<T>,
    y: &dyn Vector<T>,
    mask: Option<&dyn Vector<T>>,
    out: &mut dyn Vector<T>,
    op: &Monoid<T>,
) -> Result<()> {
    combine_vector(ctx, x, y, mask, out, "vector_add", op.op())
}

/// y := a - b, element by element.
pub fn vector_subtract<T: Float + Scalar>(
    ctx: &Context,
    x: &dyn Vector<T>,
    y: &dyn Vector<T>,
    mask: Option<&dyn Vector<T>>,
    out: &mut dyn Vector<T>,
) -> Result<()> {
    combine_vector(ctx, x, y, mask, out, "vector_subtract", &binary::subtraction())
}

fn map_vector<T: Scalar>(
    ctx: &Context,
    x: &dyn Vector<T>,
    mask: Option<&dyn Vector<T>>,
    out: &mut dyn Vector<T>,
    name: &'static str,
    f: impl Fn(T) -> T,
) -> Result<()> {
    check_same_len(name, x, out)?;
    check_vector_mask_len(name, mask, out.len())?;
    out.clear();
    let mut err = None;
    x.iterate(&mut |i, v| {
        let mut step = || -> Result<()> {
            ctx.checkpoint()?;
            if vector_mask_allows(mask, i)? {
                out.set(i, f(v))?;
            }
            Ok(())
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

/// y := alpha * x.
pub fn vector_scalar_multiply<T: Float + Scalar>(
    ctx: &Context,
    x: &dyn Vector<T>,
    alpha: T,
    mask: Option<&dyn Vector<T>>,
    out: &mut dyn Vector<T>,
) -> Result<()> {
    map_vector(ctx, x, mask, out, "vector_scalar_multiply", |v| alpha * v)
}

/// y := -x.
pub fn vector_negate<T: Float + Scalar>(
    ctx: &Context,
    x: &dyn Vector<T>,
    mask: Option<&dyn Vector<T>>,
    out: &mut dyn Vector<T>,
) -> Result<()> {
    map_vector(ctx, x, mask, out, "vector_negate", |v| -v)
}
