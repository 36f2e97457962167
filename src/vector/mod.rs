//! Vector storage: dense and sparse layouts realising the [`Vector`] contract.
//!
//! [`Vector`]: crate::core::traits::Vector

pub mod dense;
pub mod sparse;

pub use dense::DenseVector;
pub use sparse::SparseVector;
