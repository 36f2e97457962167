//! Sparse vector: sorted index/value pairs.

use crate::core::traits::{Scalar, Vector};
use crate::error::{Result, SemlaError};

/// Indexed-value pairs with indices strictly ascending. No stored value
/// equals zero; assigning zero deletes the entry.
#[derive(Clone, Debug)]
pub struct SparseVector<T> {
    len: usize,
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> SparseVector<T> {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn from_slice(data: &[T]) -> Self {
        let mut v = Self::new(data.len());
        for (i, &x) in data.iter().enumerate() {
            if !x.is_zero() {
                v.indices.push(i);
                v.values.push(x);
            }
        }
        v
    }

    /// Structural entries as `(index, value)`, indices ascending.
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    fn check(&self, i: usize) -> Result<()> {
        if i >= self.len {
            return Err(SemlaError::out_of_range_vec(i, self.len));
        }
        Ok(())
    }
}

impl<T: Scalar> Vector<T> for SparseVector<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn get(&self, i: usize) -> Result<T> {
        self.check(i)?;
        Ok(match self.indices.binary_search(&i) {
            Ok(p) => self.values[p],
            Err(_) => T::zero(),
        })
    }

    fn set(&mut self, i: usize, value: T) -> Result<()> {
        self.check(i)?;
        match self.indices.binary_search(&i) {
            Ok(p) => {
                if value.is_zero() {
                    self.indices.remove(p);
                    self.values.remove(p);
                } else {
                    self.values[p] = value;
                }
            }
            Err(p) => {
                if !value.is_zero() {
                    self.indices.insert(p, i);
                    self.values.insert(p, value);
                }
            }
        }
        Ok(())
    }

    fn iterate(&self, visit: &mut dyn FnMut(usize, T) -> bool) -> bool {
        for (i, v) in self.iter() {
            if !visit(i, v) {
                return false;
            }
        }
        true
    }

    fn clear(&mut self) {
        self.indices.clear();
        self.values.clear();
    }
}
