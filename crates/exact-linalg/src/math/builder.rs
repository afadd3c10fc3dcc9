//! Staged construction for [`Vector`] and [`Matrix`].
//!
//! A builder is bound to its size or shape when created. Entries are collected into
//! `Option` slots and `build` refuses to produce a value while any slot is empty. The built
//! value owns a copy of the slots, so reusing the builder afterwards never affects it.

use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;
use crate::math::vector::Vector;
use crate::validation;

#[derive(Clone, Debug)]
pub struct VectorBuilder<E> {
    slots: Vec<Option<E>>,
}

impl<E: Clone> VectorBuilder<E> {
    pub fn new(size: usize) -> Result<Self> {
        validation::check_size(size)?;
        validation::check_capacity::<Option<E>>(size)?;
        Ok(Self {
            slots: vec![None; size],
        })
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Set the entry at 1-based `index`, replacing any earlier value.
    pub fn put(&mut self, index: usize, value: E) -> Result<&mut Self> {
        let offset = validation::check_index(index, self.size())?;
        self.slots[offset] = Some(value);
        Ok(self)
    }

    /// Fill the lowest index that has not been set yet.
    pub fn push(&mut self, value: E) -> Result<&mut Self> {
        let size = self.size();
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(value);
                Ok(self)
            }
            None => {
                log::debug!("push rejected: vector builder of size {} is full", size);
                Err(LinalgError::BuilderFull { size })
            }
        }
    }

    /// Set every entry to `value`.
    pub fn put_all(&mut self, value: E) -> &mut Self {
        for slot in self.slots.iter_mut() {
            *slot = Some(value.clone());
        }
        self
    }

    pub fn build(&self) -> Result<Vector<E>> {
        let mut data = Vec::with_capacity(self.slots.len());
        for (offset, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(value) => data.push(value.clone()),
                None => {
                    log::debug!("vector build rejected: index {} is unset", offset + 1);
                    return Err(LinalgError::Incomplete {
                        row: offset + 1,
                        column: 1,
                    });
                }
            }
        }
        Ok(Vector::from_parts(data))
    }
}

#[derive(Clone, Debug)]
pub struct MatrixBuilder<E> {
    slots: Vec<Option<E>>,
    rows: usize,
    columns: usize,
}

impl<E: Clone> MatrixBuilder<E> {
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        validation::check_shape(rows, columns)?;
        let len = validation::check_entry_count(rows, columns)?;
        validation::check_capacity::<Option<E>>(len)?;
        Ok(Self {
            slots: vec![None; len],
            rows,
            columns,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Set the entry at 1-based `(row, column)`, replacing any earlier value.
    pub fn put(&mut self, row: usize, column: usize, value: E) -> Result<&mut Self> {
        let offset = validation::check_position(row, column, self.shape())?;
        self.slots[offset] = Some(value);
        Ok(self)
    }

    pub fn put_all(&mut self, value: E) -> &mut Self {
        for slot in self.slots.iter_mut() {
            *slot = Some(value.clone());
        }
        self
    }

    pub fn build(&self) -> Result<Matrix<E>> {
        let mut data = Vec::with_capacity(self.slots.len());
        for (offset, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(value) => data.push(value.clone()),
                None => {
                    let (row, column) = (offset / self.columns + 1, offset % self.columns + 1);
                    log::debug!("matrix build rejected: ({}, {}) is unset", row, column);
                    return Err(LinalgError::Incomplete { row, column });
                }
            }
        }
        Ok(Matrix::from_parts(data, self.rows, self.columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::math::traits::{LinearMatrix, LinearVector};
    use num_bigint::BigInt;

    #[test]
    fn built_vector_is_detached_from_builder() {
        let mut builder = VectorBuilder::new(2).unwrap();
        builder.put_all(BigInt::from(1));
        let first = builder.build().unwrap();
        builder.put(1, BigInt::from(9)).unwrap();
        assert_eq!(first.entry(1).unwrap(), &BigInt::from(1));
        assert_eq!(builder.build().unwrap().entry(1).unwrap(), &BigInt::from(9));
    }

    #[test]
    fn push_fills_lowest_free_slot() {
        let mut builder = VectorBuilder::new(3).unwrap();
        builder.put(1, BigInt::from(1)).unwrap();
        builder.push(BigInt::from(2)).unwrap();
        builder.push(BigInt::from(3)).unwrap();
        let err = builder.push(BigInt::from(4)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
        let v = builder.build().unwrap();
        assert_eq!(v.to_vec(), vec![BigInt::from(1), BigInt::from(2), BigInt::from(3)]);
    }

    #[test]
    fn matrix_build_reports_first_missing_position() {
        let mut builder = MatrixBuilder::new(2, 2).unwrap();
        builder.put(1, 1, BigInt::from(1)).unwrap();
        builder.put(1, 2, BigInt::from(1)).unwrap();
        builder.put(2, 2, BigInt::from(1)).unwrap();
        assert_eq!(
            builder.build().unwrap_err(),
            LinalgError::Incomplete { row: 2, column: 1 }
        );
        builder.put(2, 1, BigInt::from(0)).unwrap();
        let m = builder.build().unwrap();
        assert_eq!(m.row_size(), 2);
        assert!(m.is_upper_triangular());
    }
}
