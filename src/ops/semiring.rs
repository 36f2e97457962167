//! Semirings: a commutative additive monoid paired with a multiplicative
//! monoid, used to parameterise the product kernels.
//!
//! | Semiring    | plus | times | 0     | 1    |
//! |-------------|------|-------|-------|------|
//! | plus_times  | +    | x     | 0     | 1    |
//! | lor_land    | or   | and   | false | true |

use num_traits::Float;

use crate::core::traits::Scalar;
use crate::error::{Result, SemlaError};
use crate::ops::binary::OpKind;
use crate::ops::monoid::{self, Monoid};

/// A pair of monoids (plus, times). The additive operator must be
/// commutative; the multiplicative one need not be.
#[derive(Clone, Copy, Debug)]
pub struct Semiring<T> {
    add: Monoid<T>,
    mul: Monoid<T>,
}

impl<T: Scalar> Semiring<T> {
    pub fn new(add: Monoid<T>, mul: Monoid<T>) -> Result<Self> {
        if !add.op().is_commutative() {
            return Err(SemlaError::invalid(
                "add",
                "additive monoid of a semiring must be commutative",
            ));
        }
        Ok(Self { add, mul })
    }

    pub fn add(&self) -> &Monoid<T> {
        &self.add
    }

    pub fn mul(&self) -> &Monoid<T> {
        &self.mul
    }

    /// True for the standard arithmetic semiring (+ with 0, x with 1).
    pub fn is_plus_times(&self) -> bool {
        self.add.op().kind() == OpKind::Addition && self.mul.op().kind() == OpKind::Multiplication
    }
}

/// The standard arithmetic semiring (+, x).
pub fn plus_times<T: Float + Scalar>() -> Semiring<T> {
    Semiring {
        add: monoid::plus_monoid(),
        mul: monoid::times_monoid(),
    }
}

/// The boolean semiring (or, and) used for reachability and BFS.
pub fn lor_land() -> Semiring<bool> {
    Semiring {
        add: monoid::lor_monoid(),
        mul: monoid::land_monoid(),
    }
}
