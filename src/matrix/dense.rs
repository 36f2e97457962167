//! Dense matrix: flat row-major storage.

use crate::core::traits::{Matrix, Scalar, Vector};
use crate::error::{Result, SemlaError};
use crate::vector::SparseVector;

/// Row-major 2-D array. Stores zeros unconditionally; `iterate` filters
/// them so structural kernels see the same entries a sparse layout would.
#[derive(Clone, Debug)]
pub struct DenseMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> DenseMatrix<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Build from row-major storage. `data.len()` must be `rows * cols`.
    pub fn from_raw(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(SemlaError::invalid(
                "data",
                format!("expected {} elements, got {}", rows * cols, data.len()),
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let r = rows.len();
        let c = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(r * c);
        for row in rows {
            if row.len() != c {
                return Err(SemlaError::invalid("rows", "rows have unequal lengths"));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { rows: r, cols: c, data })
    }

    /// The raw row-major storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn check(&self, r: usize, c: usize) -> Result<()> {
        if r >= self.rows || c >= self.cols {
            return Err(SemlaError::IndexOutOfRange {
                row: r,
                col: c,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    #[inline]
    fn idx(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }
}

impl<T: Scalar> Matrix<T> for DenseMatrix<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn nnz(&self) -> usize {
        self.data.iter().filter(|v| !v.is_zero()).count()
    }

    fn get(&self, r: usize, c: usize) -> Result<T> {
        self.check(r, c)?;
        Ok(self.data[self.idx(r, c)])
    }

    fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        self.check(r, c)?;
        let i = self.idx(r, c);
        self.data[i] = value;
        Ok(())
    }

    fn row(&self, r: usize) -> Result<SparseVector<T>> {
        if r >= self.rows {
            return Err(SemlaError::IndexOutOfRange {
                row: r,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(SparseVector::from_slice(
            &self.data[r * self.cols..(r + 1) * self.cols],
        ))
    }

    fn col(&self, c: usize) -> Result<SparseVector<T>> {
        if c >= self.cols {
            return Err(SemlaError::IndexOutOfRange {
                row: 0,
                col: c,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut out = SparseVector::new(self.rows);
        for r in 0..self.rows {
            let v = self.data[self.idx(r, c)];
            if !v.is_zero() {
                out.set(r, v)?;
            }
        }
        Ok(out)
    }

    fn iterate(&self, visit: &mut dyn FnMut(usize, usize, T) -> bool) -> bool {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let v = self.data[self.idx(r, c)];
                if !v.is_zero() && !visit(r, c, v) {
                    return false;
                }
            }
        }
        true
    }

    fn clear(&mut self) {
        self.data.fill(T::zero());
    }
}
