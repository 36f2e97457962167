//! Recursive Strassen multiply with a crossover to the naive kernel.
//!
//! The seven-product recursion rewrites block products using subtraction,
//! which is only meaningful in the arithmetic semiring; any other algebra
//! is refused up front.

use num_traits::Float;

use crate::config::StrassenOptions;
use crate::context::Context;
use crate::core::traits::{Matrix, Scalar};
use crate::error::{Result, SemlaError};
use crate::kernel::matmul::multiply;
use crate::kernel::structural::copy_into;
use crate::matrix::DenseMatrix;
use crate::ops::semiring::{self, Semiring};

/// [`multiply_crossover`] with the crossover taken from options.
pub fn multiply_strassen<T: Float + Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    b: &dyn Matrix<T>,
    semiring: &Semiring<T>,
    opts: StrassenOptions,
) -> Result<DenseMatrix<T>> {
    multiply_crossover(ctx, a, b, semiring, opts.crossover)
}

/// C := A x B by divide and conquer, delegating to the naive multiply once
/// every dimension of a subproblem is at most `crossover`.
pub fn multiply_crossover<T: Float + Scalar>(
    ctx: &Context,
    a: &dyn Matrix<T>,
    b: &dyn Matrix<T>,
    semiring: &Semiring<T>,
    crossover: usize,
) -> Result<DenseMatrix<T>> {
    if !semiring.is_plus_times() {
        return Err(SemlaError::UnsupportedSemiring {
            op: "strassen multiply",
        });
    }
    if crossover < 2 {
        return Err(SemlaError::invalid("crossover", "must be at least 2"));
    }
    if a.cols() != b.rows() {
        return Err(SemlaError::DimensionMismatch {
            op: "strassen multiply",
            lhs: a.dims(),
            rhs: b.dims(),
        });
    }
    let mut ad = DenseMatrix::new(a.rows(), a.cols());
    copy_into(a, &mut ad)?;
    let mut bd = DenseMatrix::new(b.rows(), b.cols());
    copy_into(b, &mut bd)?;
    recurse(ctx, &ad, &bd, crossover)
}

fn recurse<T: Float + Scalar>(
    ctx: &Context,
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
    crossover: usize,
) -> Result<DenseMatrix<T>> {
    ctx.checkpoint()?;
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    if m.max(k).max(n) <= crossover {
        let mut out = DenseMatrix::new(m, n);
        multiply(ctx, a, b, None, &mut out, &semiring::plus_times())?;
        return Ok(out);
    }

    // split at the (zero-padded) even midpoint
    let (hm, hk, hn) = ((m + 1) / 2, (k + 1) / 2, (n + 1) / 2);
    let a11 = block(a, 0, 0, hm, hk);
    let a12 = block(a, 0, hk, hm, hk);
    let a21 = block(a, hm, 0, hm, hk);
    let a22 = block(a, hm, hk, hm, hk);
    let b11 = block(b, 0, 0, hk, hn);
    let b12 = block(b, 0, hn, hk, hn);
    let b21 = block(b, hk, 0, hk, hn);
    let b22 = block(b, hk, hn, hk, hn);

    let add: fn(T, T) -> T = |x, y| x + y;
    let sub: fn(T, T) -> T = |x, y| x - y;

    let p1 = recurse(ctx, &zip(&a11, &a22, add)?, &zip(&b11, &b22, add)?, crossover)?;
    let p2 = recurse(ctx, &zip(&a21, &a22, add)?, &b11, crossover)?;
    let p3 = recurse(ctx, &a11, &zip(&b12, &b22, sub)?, crossover)?;
    let p4 = recurse(ctx, &a22, &zip(&b21, &b11, sub)?, crossover)?;
    let p5 = recurse(ctx, &zip(&a11, &a12, add)?, &b22, crossover)?;
    let p6 = recurse(ctx, &zip(&a21, &a11, sub)?, &zip(&b11, &b12, add)?, crossover)?;
    let p7 = recurse(ctx, &zip(&a12, &a22, sub)?, &zip(&b21, &b22, add)?, crossover)?;

    let c11 = zip(&zip(&zip(&p1, &p4, add)?, &p5, sub)?, &p7, add)?;
    let c12 = zip(&p3, &p5, add)?;
    let c21 = zip(&p2, &p4, add)?;
    let c22 = zip(&zip(&zip(&p1, &p2, sub)?, &p3, add)?, &p6, add)?;

    let mut out = DenseMatrix::new(m, n);
    paste(&mut out, &c11, 0, 0);
    paste(&mut out, &c12, 0, hn);
    paste(&mut out, &c21, hm, 0);
    paste(&mut out, &c22, hm, hn);
    Ok(out)
}

/// Extract an `h x w` block at `(r0, c0)`, reading zero outside the source.
fn block<T: Float + Scalar>(
    a: &DenseMatrix<T>,
    r0: usize,
    c0: usize,
    h: usize,
    w: usize,
) -> DenseMatrix<T> {
    let (rows, cols) = a.dims();
    let src = a.as_slice();
    let mut out = DenseMatrix::new(h, w);
    let dst = out.as_mut_slice();
    for r in 0..h {
        for c in 0..w {
            let (sr, sc) = (r0 + r, c0 + c);
            if sr < rows && sc < cols {
                dst[r * w + c] = src[sr * cols + sc];
            }
        }
    }
    out
}

/// Write `src` into `dst` at `(r0, c0)`, dropping anything past the edge
/// (the padding introduced by `block`).
fn paste<T: Float + Scalar>(dst: &mut DenseMatrix<T>, src: &DenseMatrix<T>, r0: usize, c0: usize) {
    let (rows, cols) = dst.dims();
    let (srows, scols) = src.dims();
    let s = src.as_slice();
    let d = dst.as_mut_slice();
    for r in 0..srows {
        for c in 0..scols {
            let (dr, dc) = (r0 + r, c0 + c);
            if dr < rows && dc < cols {
                d[dr * cols + dc] = s[r * scols + c];
            }
        }
    }
}

fn zip<T: Float + Scalar>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
    f: fn(T, T) -> T,
) -> Result<DenseMatrix<T>> {
    DenseMatrix::from_raw(
        a.rows(),
        a.cols(),
        a.as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(&x, &y)| f(x, y))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::structural::equal;
    use crate::ops::monoid::{min_monoid, Monoid};
    use crate::ops::binary;

    #[test]
    fn crossover_below_two_is_invalid() {
        let ctx = Context::new();
        let a = DenseMatrix::<f64>::new(2, 2);
        let err = multiply_crossover(&ctx, &a, &a, &semiring::plus_times(), 1);
        assert!(matches!(err, Err(SemlaError::InvalidArgument { .. })));
    }

    #[test]
    fn non_arithmetic_semiring_is_refused() {
        let ctx = Context::new();
        let a = DenseMatrix::<f64>::new(2, 2);
        let min_plus = Semiring::new(
            min_monoid(),
            Monoid::new(binary::addition(), 0.0).unwrap(),
        )
        .unwrap();
        let err = multiply_crossover(&ctx, &a, &a, &min_plus, 2);
        assert_eq!(
            err.unwrap_err(),
            SemlaError::UnsupportedSemiring {
                op: "strassen multiply"
            }
        );
    }

    #[test]
    fn odd_dimensions_are_padded_correctly() {
        let ctx = Context::new();
        let a = DenseMatrix::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();
        let b = DenseMatrix::from_rows(&[
            vec![9.0, 8.0, 7.0],
            vec![6.0, 5.0, 4.0],
            vec![3.0, 2.0, 1.0],
        ])
        .unwrap();
        let mut naive = DenseMatrix::new(3, 3);
        multiply(&ctx, &a, &b, None, &mut naive, &semiring::plus_times()).unwrap();
        let fast = multiply_crossover(&ctx, &a, &b, &semiring::plus_times(), 2).unwrap();
        assert!(equal(&naive, &fast));
    }

    #[test]
    fn options_feed_the_crossover() {
        let ctx = Context::new();
        let a = DenseMatrix::from_rows(&[vec![2.0, 0.0], vec![1.0, 1.0]]).unwrap();
        let got = multiply_strassen(
            &ctx,
            &a,
            &a,
            &semiring::plus_times(),
            StrassenOptions::default(),
        )
        .unwrap();
        let mut want = DenseMatrix::new(2, 2);
        multiply(&ctx, &a, &a, None, &mut want, &semiring::plus_times()).unwrap();
        assert!(equal(&got, &want));

        let err = multiply_strassen(
            &ctx,
            &a,
            &a,
            &semiring::plus_times(),
            StrassenOptions { crossover: 0 },
        );
        assert!(err.is_err());
    }

    #[test]
    fn rectangular_shapes() {
        let ctx = Context::new();
        let a = DenseMatrix::from_rows(&[vec![1.0, 2.0, 3.0, 4.0, 5.0]]).unwrap();
        let b = DenseMatrix::from_rows(&[
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![2.0, 0.0],
            vec![0.0, 2.0],
        ])
        .unwrap();
        let mut naive = DenseMatrix::new(1, 2);
        multiply(&ctx, &a, &b, None, &mut naive, &semiring::plus_times()).unwrap();
        let fast = multiply_crossover(&ctx, &a, &b, &semiring::plus_times(), 2).unwrap();
        assert!(equal(&naive, &fast));
    }
}
