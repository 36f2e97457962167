//! Gauss-Jordan elimination to reduced row echelon form.

use num_traits::Float;

use crate::context::Context;
use crate::core::traits::{Matrix, Scalar};
use crate::error::{Result, SemlaError};
use crate::kernel::structural::copy_into;

/// B := rref(A). Pivoting compares against exact zero; callers needing a
/// tolerance must pre-round the matrix themselves.
pub fn reduced<T: Float + Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    out: &mut dyn Matrix<T>,
) -> Result<()> {
    let (rows, cols) = a.dims();
    if rows == 0 || cols == 0 {
        return Err(SemlaError::Singular);
    }
    copy_into(a, out)?;

    let zero = <T as Scalar>::zero();
    let mut lead = 0;
    for r in 0..rows {
        ctx.checkpoint()?;
        if lead >= cols {
            return Ok(());
        }
        // find a pivot row for the lead column, walking right when a
        // column has no non-zero at or below r
        let mut i = r;
        while out.get(i, lead)? == zero {
            i += 1;
            if i == rows {
                i = r;
                lead += 1;
                if lead == cols {
                    return Ok(());
                }
            }
        }
        if i != r {
            for c in 0..cols {
                let vi = out.get(i, c)?;
                let vr = out.get(r, c)?;
                out.set(i, c, vr)?;
                out.set(r, c, vi)?;
            }
        }
        let inv = T::one() / out.get(r, lead)?;
        for c in 0..cols {
            let v = out.get(r, c)?;
            out.set(r, c, v * inv)?;
        }
        for other in 0..rows {
            if other == r {
                continue;
            }
            let f = out.get(other, lead)?;
            if f == zero {
                continue;
            }
            for c in 0..cols {
                let v = out.get(other, c)?;
                let p = out.get(r, c)?;
                out.set(other, c, v - p * f)?;
            }
        }
        lead += 1;
    }
    Ok(())
}
