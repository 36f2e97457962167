//! Compressed-sparse-column matrix.

use crate::core::traits::{Matrix, Scalar, Vector};
use crate::error::{Result, SemlaError};
use crate::vector::SparseVector;

/// Column-compressed storage: three parallel arrays.
///
/// `col_ptr[c]..col_ptr[c + 1]` bounds column c's slice of `row_idx` and
/// `values`. Row indices are strictly increasing within a slice and no
/// stored value equals zero. Insert and delete splice the tails of
/// `values`/`row_idx` and patch every later `col_ptr` entry, an O(nnz)
/// cost accepted for the build-once-read-many pattern.
#[derive(Clone, Debug)]
pub struct CscMatrix<T> {
    rows: usize,
    cols: usize,
    values: Vec<T>,
    row_idx: Vec<usize>,
    col_ptr: Vec<usize>,
}

impl<T: Scalar> CscMatrix<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: Vec::new(),
            row_idx: Vec::new(),
            col_ptr: vec![0; cols + 1],
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

    /// Bisect column c's slice for row r: Ok(position) on a hit, else the
    /// insertion point that keeps the slice strictly increasing.
    fn position(&self, r: usize, c: usize) -> std::result::Result<usize, usize> {
        let lo = self.col_ptr[c];
        let hi = self.col_ptr[c + 1];
        match self.row_idx[lo..hi].binary_search(&r) {
            Ok(p) => Ok(lo + p),
            Err(p) => Err(lo + p),
        }
    }

    fn insert(&mut self, p: usize, r: usize, c: usize, value: T) {
        self.values.insert(p, value);
        self.row_idx.insert(p, r);
        for ptr in &mut self.col_ptr[c + 1..] {
            *ptr += 1;
        }
    }

    fn remove(&mut self, p: usize, c: usize) {
        self.values.remove(p);
        self.row_idx.remove(p);
        for ptr in &mut self.col_ptr[c + 1..] {
            *ptr -= 1;
        }
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        assert_eq!(self.col_ptr[0], 0);
        assert_eq!(self.col_ptr[self.cols], self.values.len());
        assert_eq!(self.row_idx.len(), self.values.len());
        for c in 0..self.cols {
            assert!(self.col_ptr[c] <= self.col_ptr[c + 1]);
            let slice = &self.row_idx[self.col_ptr[c]..self.col_ptr[c + 1]];
            assert!(slice.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(self.values.iter().all(|v| !v.is_zero()));
    }
}

impl<T: Scalar> Matrix<T> for CscMatrix<T> {
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
                    self.remove(p, c);
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

    /// O(cols * log(column nnz)): one bisection per column.
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
        for c in 0..self.cols {
            if let Ok(p) = self.position(r, c) {
                out.set(c, self.values[p])?;
            }
        }
        Ok(out)
    }

    /// O(nnz in column): materialises the column slice.
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
        for p in self.col_ptr[c]..self.col_ptr[c + 1] {
            out.set(self.row_idx[p], self.values[p])?;
        }
        Ok(out)
    }

    fn iterate(&self, visit: &mut dyn FnMut(usize, usize, T) -> bool) -> bool {
        for c in 0..self.cols {
            for p in self.col_ptr[c]..self.col_ptr[c + 1] {
                if !visit(self.row_idx[p], c, self.values[p]) {
                    return false;
                }
            }
        }
        true
    }

    fn clear(&mut self) {
        self.values.clear();
        self.row_idx.clear();
        self.col_ptr.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_unset_leaves_empty_structure() {
        let mut m = CscMatrix::new(2, 2);
        m.set(0, 0, 2.0).unwrap();
        assert_eq!(m.nnz(), 1);
        m.set(0, 0, 0.0).unwrap();
        assert_eq!(m.nnz(), 0);
        for r in 0..2 {
            for c in 0..2 {
                assert_eq!(m.get(r, c).unwrap(), 0.0);
            }
        }
        m.assert_invariants();
    }

    #[test]
    fn splice_keeps_invariants_under_mixed_mutation() {
        let mut m = CscMatrix::new(4, 4);
        let writes = [
            (2, 1, 5.0),
            (0, 1, 1.0),
            (3, 1, 7.0),
            (1, 0, 2.0),
            (3, 3, 4.0),
            (2, 1, 0.0),
            (0, 0, 9.0),
            (3, 1, 8.0),
            (1, 0, 0.0),
        ];
        for (r, c, v) in writes {
            m.set(r, c, v).unwrap();
            m.assert_invariants();
        }
        assert_eq!(m.get(0, 1).unwrap(), 1.0);
        assert_eq!(m.get(3, 1).unwrap(), 8.0);
        assert_eq!(m.get(2, 1).unwrap(), 0.0);
        assert_eq!(m.get(1, 0).unwrap(), 0.0);
        assert_eq!(m.nnz(), 4);
    }

    #[test]
    fn missing_entry_in_populated_column_reads_zero() {
        // a lookup miss must not surface a neighbouring entry's value
        let mut m = CscMatrix::new(3, 1);
        m.set(0, 0, 6.0).unwrap();
        m.set(2, 0, 8.0).unwrap();
        assert_eq!(m.get(1, 0).unwrap(), 0.0);
        let row = m.row(1).unwrap();
        assert_eq!(row.nnz(), 0);
    }

    #[test]
    fn iteration_is_column_major_rows_ascending() {
        let mut m = CscMatrix::new(3, 3);
        m.set(2, 0, 3.0).unwrap();
        m.set(0, 0, 9.0).unwrap();
        m.set(0, 2, 7.0).unwrap();
        m.set(2, 2, 1.0).unwrap();
        let mut seen = Vec::new();
        m.iterate(&mut |r, c, v| {
            seen.push((r, c, v));
            true
        });
        assert_eq!(
            seen,
            vec![(0, 0, 9.0), (2, 0, 3.0), (0, 2, 7.0), (2, 2, 1.0)]
        );
    }

    #[test]
    fn clear_resets_structure() {
        let mut m = CscMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.nnz(), 4);
        m.clear();
        assert_eq!(m.dims(), (2, 2));
        assert_eq!(m.nnz(), 0);
        m.assert_invariants();
    }

    #[test]
    fn out_of_range() {
        let mut m = CscMatrix::<f64>::new(2, 3);
        assert!(m.get(2, 0).is_err());
        assert!(m.get(0, 3).is_err());
        assert!(m.set(2, 0, 1.0).is_err());
        assert!(m.row(2).is_err());
        assert!(m.col(3).is_err());
    }
}
