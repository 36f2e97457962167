//! semla: GraphBLAS-style sparse linear algebra kernels over semirings
//!
//! Graph algorithms expressed as matrix and vector operations over a
//! user-supplied semiring. Three interchangeable matrix layouts (dense
//! row-major, CSC, CSR) and two vector layouts realise a single storage
//! contract; the kernels (element-wise, product, Strassen, structural,
//! Gauss-Jordan) are polymorphic over it and yield identical results for
//! any layout holding the same logical matrix.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod kernel;
pub mod matrix;
pub mod ops;
pub mod traversal;
pub mod vector;

// Re-exports for convenience
pub use crate::config::StrassenOptions;
pub use crate::context::Context;
pub use crate::core::{ColumnMatrix, Matrix, RowMatrix, Scalar, Vector};
pub use crate::error::{Result, SemlaError};
pub use crate::matrix::{CscMatrix, CsrMatrix, DenseMatrix};
pub use crate::vector::{DenseVector, SparseVector};
