//! Dense vector: contiguous storage.

use crate::core::traits::{Scalar, Vector};
use crate::error::{Result, SemlaError};

/// A contiguous array of scalars. Stores zeros; `iterate` filters them so
/// dense and sparse vectors are interchangeable under the sparse contract.
#[derive(Clone, Debug)]
pub struct DenseVector<T> {
    values: Vec<T>,
}

impl<T: Scalar> DenseVector<T> {
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![T::zero(); len],
        }
    }

    pub fn from_slice(data: &[T]) -> Self {
        Self {
            values: data.to_vec(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    fn check(&self, i: usize) -> Result<()> {
        if i >= self.values.len() {
            return Err(SemlaError::out_of_range_vec(i, self.values.len()));
        }
        Ok(())
    }
}

impl<T: Scalar> Vector<T> for DenseVector<T> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn nnz(&self) -> usize {
        self.values.iter().filter(|v| !v.is_zero()).count()
    }

    fn get(&self, i: usize) -> Result<T> {
        self.check(i)?;
        Ok(self.values[i])
    }

    fn set(&mut self, i: usize, value: T) -> Result<()> {
        self.check(i)?;
        self.values[i] = value;
        Ok(())
    }

    fn iterate(&self, visit: &mut dyn FnMut(usize, T) -> bool) -> bool {
        for (i, &v) in self.values.iter().enumerate() {
            if !v.is_zero() && !visit(i, v) {
                return false;
            }
        }
        true
    }

    fn clear(&mut self) {
        self.values.fill(T::zero());
    }
}
