//! Matrix storage: dense row-major, compressed-sparse-column, and
//! compressed-sparse-row layouts realising the [`Matrix`] contract.
//!
//! [`Matrix`]: crate::core::traits::Matrix

pub mod csc;
pub mod csr;
pub mod dense;

pub use csc::CscMatrix;
pub use csr::CsrMatrix;
pub use dense::DenseMatrix;
