//! Core contracts: scalar elements, matrix and vector storage traits,
//! and the vector-as-matrix adapter views.

pub mod adapter;
pub mod traits;

pub use adapter::{ColumnMatrix, RowMatrix};
pub use traits::{Matrix, Scalar, Vector};
