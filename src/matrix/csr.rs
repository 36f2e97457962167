//! Compressed-sparse-row matrix.

use crate::core::traits::{Matrix, Scalar, Vector};
use crate::error::{Result, SemlaError};
use crate::vector::SparseVector;

/// Row-compressed mirror of [`CscMatrix`]: `row_ptr[r]..row_ptr[r + 1]`
/// bounds row r's slice of `col_idx` and `values`, column indices strictly
/// increasing within a slice, no stored zero.
///
/// [`CscMatrix`]: crate::matrix::CscMatrix
#[derive(Clone, Debug)]
pub struct CsrMatrix<T> {
    rows: usize,
    cols: usize,
    values: Vec<T>,
    col_idx: Vec<usize>,
    row_ptr: Vec<usize>,
}

impl<T: Scalar> CsrMatrix<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: Vec::new(),
            col_idx: Vec::new(),
            row_ptr: vec![0; rows + 1],
        }
    }

    /// Build from nested rows. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let r = rows.len();
        let c = rows.first().map_or(0, Vec::len);
        let mut m = Self::new(r, c);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != c {
                return Err(SemlaError::invalid("rows", "rows have unequal lengths"));
            }
            for (j, &v) in row.iter().enumerate() {
                m.set(i, j, v)?;
            }
        }
        Ok(m)
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

    fn position(&self, r: usize, c: usize) -> std::result::Result<usize, usize> {
        let lo = self.row_ptr[r];
        let hi = self.row_ptr[r + 1];
        match self.col_idx[lo..hi].binary_search(&c) {
            Ok(p) => Ok(lo + p),
            Err(p) => Err(lo + p),
        }
    }

    fn insert(&mut self, p: usize, r: usize, c: usize, value: T) {
        self.values.insert(p, value);
        self.col_idx.insert(p, c);
        for ptr in &mut self.row_ptr[r + 1..] {
            *ptr += 1;
        }
    }

    fn remove(&mut self, p: usize, r: usize) {
        self.values.remove(p);
        self.col_idx.remove(p);
        for ptr in &mut self.row_ptr[r + 1..] {
            *ptr -= 1;
        }
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        assert_eq!(self.row_ptr[0], 0);
        assert_eq!(self.row_ptr[self.rows], self.values.len());
        assert_eq!(self.col_idx.len(), self.values.len());
        for r in 0..self.rows {
            assert!(self.row_ptr[r] <= self.row_ptr[r + 1]);
            let slice = &self.col_idx[self.row_ptr[r]..self.row_ptr[r + 1]];
            assert!(slice.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(self.values.iter().all(|v| !v.is_zero()));
    }
}

impl<T: Scalar> Matrix<T> for CsrMatrix<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn get(&self, r: usize, c: usize) -> Result<T> {
        self.check(r, c)?;
        Ok(match self.position(r, c) {
            Ok(p) => self.values[p],
            Err(_) => T::zero(),
        })
    }

    fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        self.check(r, c)?;
        match self.position(r, c) {
            Ok(p) => {
                if value.is_zero() {
                    self.remove(p, r);
                } else {
                    self.values[p] = value;
                }
            }
            Err(p) => {
                if !value.is_zero() {
                    self.insert(p, r, c, value);
                }
            }
        }
        Ok(())
    }

    /// O(nnz in row): materialises the row slice.
    fn row(&self, r: usize) -> Result<SparseVector<T>> {
        if r >= self.rows {
            return Err(SemlaError::IndexOutOfRange {
                row: r,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut out = SparseVector::new(self.cols);
        for p in self.row_ptr[r]..self.row_ptr[r + 1] {
            out.set(self.col_idx[p], self.values[p])?;
        }
        Ok(out)
    }

    /// O(rows * log(row nnz)): one bisection per row.
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
            if let Ok(p) = self.position(r, c) {
                out.set(r, self.values[p])?;
            }
        }
        Ok(out)
    }

    fn iterate(&self, visit: &mut dyn FnMut(usize, usize, T) -> bool) -> bool {
        for r in 0..self.rows {
            for p in self.row_ptr[r]..self.row_ptr[r + 1] {
                if !visit(r, self.col_idx[p], self.values[p]) {
                    return false;
                }
            }
        }
        true
    }

    fn clear(&mut self) {
        self.values.clear();
        self.col_idx.clear();
        self.row_ptr.fill(0);
    }
}
