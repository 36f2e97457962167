//! Monoids: an associative binary operator plus a two-sided identity.

use num_traits::Float;

use crate::core::traits::Scalar;
use crate::error::{Result, SemlaError};
use crate::ops::binary::{self, BinaryOp};

/// An associative operator with a verified two-sided identity.
#[derive(Clone, Copy, Debug)]
pub struct Monoid<T> {
    op: BinaryOp<T>,
    identity: T,
}

impl<T: Scalar> Monoid<T> {
    /// Build a monoid, verifying that `op` is tagged associative and that
    /// `identity` absorbs on both sides over the scalar's witness set.
    pub fn new(op: BinaryOp<T>, identity: T) -> Result<Self> {
        if !op.is_associative() {
            return Err(SemlaError::invalid(
                "op",
                "monoid operator must be associative",
            ));
        }
        for &w in T::witnesses() {
            if op.apply(identity, w) != w || op.apply(w, identity) != w {
                return Err(SemlaError::invalid(
                    "identity",
                    format!("{identity:?} does not absorb {w:?} on both sides"),
                ));
            }
        }
        Ok(Self { op, identity })
    }

    /// Catalogue constructor: invariants hold by inspection of the operator.
    fn known(op: BinaryOp<T>, identity: T) -> Self {
        Self { op, identity }
    }

    pub fn identity(&self) -> T {
        self.identity
    }

    pub fn op(&self) -> &BinaryOp<T> {
        &self.op
    }

    pub fn apply(&self, x: T, y: T) -> T {
        self.op.apply(x, y)
    }

    /// Fold the operator over `values` starting from the identity.
    ///
    /// An empty input yields the identity. For a commutative operator the
    /// result is independent of input order.
    pub fn reduce(&self, values: impl IntoIterator<Item = T>) -> T {
        values
            .into_iter()
            .fold(self.identity, |acc, v| self.op.apply(acc, v))
    }

    /// Tree-fold reduction over a slice, valid because the operator is
    /// associative. Falls back to the linear fold for non-commutative
    /// operators so chunk boundaries cannot reorder operands.
    #[cfg(feature = "rayon")]
    pub fn reduce_parallel(&self, values: &[T]) -> T {
        use rayon::prelude::*;

        if !self.op.is_commutative() {
            return self.reduce(values.iter().copied());
        }
        values
            .par_iter()
            .copied()
            .fold(|| self.identity, |acc, v| self.op.apply(acc, v))
            .reduce(|| self.identity, |a, b| self.op.apply(a, b))
    }
}

/// (+, 0)
pub fn plus_monoid<T: Float + Scalar>() -> Monoid<T> {
    Monoid::known(binary::addition(), <T as Scalar>::zero())
}

/// (x, 1)
pub fn times_monoid<T: Float + Scalar>() -> Monoid<T> {
    Monoid::known(binary::multiplication(), T::one())
}

/// (min, +inf)
pub fn min_monoid<T: Float + Scalar>() -> Monoid<T> {
    Monoid::known(binary::minimum(), T::infinity())
}

/// (max, -inf)
pub fn max_monoid<T: Float + Scalar>() -> Monoid<T> {
    Monoid::known(binary::maximum(), T::neg_infinity())
}

/// (or, false)
pub fn lor_monoid() -> Monoid<bool> {
    Monoid::known(binary::lor(), false)
}

/// (and, true)
pub fn land_monoid() -> Monoid<bool> {
    Monoid::known(binary::land(), true)
}

/// (xor, false)
pub fn lxor_monoid() -> Monoid<bool> {
    Monoid::known(binary::lxor(), false)
}
