//! Algebraic dispatch layer: operator values, monoids, and semirings.
//!
//! Operators are small value types carrying a pure function plus tags;
//! kernels take them by value and inline them. There is no operator
//! subclassing hierarchy.

pub mod binary;
pub mod monoid;
pub mod semiring;
pub mod unary;

pub use binary::{BinaryOp, OpKind};
pub use monoid::Monoid;
pub use semiring::Semiring;
pub use unary::UnaryOp;
