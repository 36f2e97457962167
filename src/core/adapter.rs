//! Adapter views presenting a vector as a 1-column or 1-row matrix.
//!
//! Kernels are written against [`Matrix`]; wrapping a vector in one of these
//! views lets the element-wise and product kernels run on vectors without a
//! second code path.

use crate::core::traits::{Matrix, Scalar, Vector};
use crate::error::{Result, SemlaError};
use crate::vector::SparseVector;

/// A vector viewed as an n x 1 matrix.
pub struct ColumnMatrix<V> {
    inner: V,
}

impl<V> ColumnMatrix<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<T: Scalar, V: Vector<T>> Matrix<T> for ColumnMatrix<V> {
    fn rows(&self) -> usize {
        self.inner.len()
    }

    fn cols(&self) -> usize {
        1
    }

    fn nnz(&self) -> usize {
        self.inner.nnz()
    }

    fn get(&self, r: usize, c: usize) -> Result<T> {
        if r >= self.inner.len() || c >= 1 {
            return Err(out_of_range(r, c, self.inner.len(), 1));
        }
        self.inner.get(r)
    }

    fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        if r >= self.inner.len() || c >= 1 {
            return Err(out_of_range(r, c, self.inner.len(), 1));
        }
        self.inner.set(r, value)
    }

    fn row(&self, r: usize) -> Result<SparseVector<T>> {
        let v = self.inner.get(r)?;
        let mut out = SparseVector::new(1);
        out.set(0, v)?;
        Ok(out)
    }

    fn col(&self, c: usize) -> Result<SparseVector<T>> {
        if c >= 1 {
            return Err(out_of_range(0, c, self.inner.len(), 1));
        }
        let mut out = SparseVector::new(self.inner.len());
        self.inner.iterate(&mut |i, v| out.set(i, v).is_ok());
        Ok(out)
    }

    fn iterate(&self, visit: &mut dyn FnMut(usize, usize, T) -> bool) -> bool {
        self.inner.iterate(&mut |i, v| visit(i, 0, v))
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

/// A vector viewed as a 1 x n matrix.
pub struct RowMatrix<V> {
    inner: V,
}

impl<V> RowMatrix<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<T: Scalar, V: Vector<T>> Matrix<T> for RowMatrix<V> {
    fn rows(&self) -> usize {
        1
    }

    fn cols(&self) -> usize {
        self.inner.len()
    }

    fn nnz(&self) -> usize {
        self.inner.nnz()
    }

    fn get(&self, r: usize, c: usize) -> Result<T> {
        if r >= 1 || c >= self.inner.len() {
            return Err(out_of_range(r, c, 1, self.inner.len()));
        }
        self.inner.get(c)
    }

    fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        if r >= 1 || c >= self.inner.len() {
            return Err(out_of_range(r, c, 1, self.inner.len()));
        }
        self.inner.set(c, value)
    }

    fn row(&self, r: usize) -> Result<SparseVector<T>> {
        if r >= 1 {
            return Err(out_of_range(r, 0, 1, self.inner.len()));
        }
        let mut out = SparseVector::new(self.inner.len());
        self.inner.iterate(&mut |i, v| out.set(i, v).is_ok());
        Ok(out)
    }

    fn col(&self, c: usize) -> Result<SparseVector<T>> {
        let v = self.inner.get(c)?;
        let mut out = SparseVector::new(1);
        out.set(0, v)?;
        Ok(out)
    }

    fn iterate(&self, visit: &mut dyn FnMut(usize, usize, T) -> bool) -> bool {
        self.inner.iterate(&mut |i, v| visit(0, i, v))
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

fn out_of_range(r: usize, c: usize, rows: usize, cols: usize) -> SemlaError {
    SemlaError::IndexOutOfRange {
        row: r,
        col: c,
        rows,
        cols,
    }
}
