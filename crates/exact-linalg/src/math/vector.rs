use std::convert::TryFrom;
use std::fmt;
use std::slice::Iter;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::{LinalgError, Result};
use crate::math::builder::VectorBuilder;
use crate::math::scalar::Scalar;
use crate::math::traits::LinearVector;
use crate::sqrt::{self, Radicand};
use crate::validation;

/// Immutable, 1-indexed vector of exact scalars. Always holds at least one entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<E> {
    data: Vec<E>,
}

pub type BigIntVector = Vector<BigInt>;
pub type BigDecimalVector = Vector<BigDecimal>;

impl<E> Vector<E> {
    /// Wrap already validated, non-empty storage.
    pub(crate) fn from_parts(data: Vec<E>) -> Self {
        debug_assert!(!data.is_empty());
        Self { data }
    }

    pub fn iter(&self) -> Iter<'_, E> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.data.clone()
    }
}

impl<E: Scalar> Vector<E> {
    /// Build a vector from its entries in index order.
    pub fn from_vec(values: Vec<E>) -> Result<Self> {
        let mut builder = VectorBuilder::new(values.len())?;
        for value in values {
            builder.push(value)?;
        }
        builder.build()
    }

    pub fn filled(size: usize, value: E) -> Result<Self> {
        VectorBuilder::new(size)?.put_all(value).build()
    }

    pub fn zeros(size: usize) -> Result<Self> {
        Self::filled(size, E::zero())
    }

    fn zip_with<F>(&self, other: &Self, mut f: F) -> Result<Self>
    where
        F: FnMut(&E, &E) -> E,
    {
        validation::check_same_size(self.size(), other.size())?;
        Ok(Self::from_parts(
            self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect(),
        ))
    }
}

impl<E: Scalar> LinearVector for Vector<E> {
    type Element = E;

    fn size(&self) -> usize {
        self.data.len()
    }

    fn entry(&self, index: usize) -> Result<&E> {
        let offset = validation::check_index(index, self.size())?;
        Ok(&self.data[offset])
    }

    fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }

    fn scalar_multiply(&self, scalar: &E) -> Self {
        Self::from_parts(self.iter().map(|v| v.clone() * scalar.clone()).collect())
    }

    fn dot_product(&self, other: &Self) -> Result<E> {
        validation::check_same_size(self.size(), other.size())?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(E::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }

    fn norm_pow2(&self) -> E {
        self.iter().fold(E::zero(), |acc, v| acc + v.clone() * v.clone())
    }
}

impl Vector<BigInt> {
    /// Sum of absolute values.
    pub fn taxicab_norm(&self) -> BigInt {
        self.iter().fold(BigInt::zero(), |acc, v| acc + Scalar::magnitude(v))
    }

    pub fn taxicab_distance(&self, other: &Self) -> Result<BigInt> {
        Ok(self.subtract(other)?.taxicab_norm())
    }

    /// Largest absolute value.
    pub fn infinity_norm(&self) -> BigInt {
        self.iter().map(Scalar::magnitude).fold(BigInt::zero(), |max, v| {
            if v > max {
                v
            } else {
                max
            }
        })
    }

    pub fn infinity_distance(&self, other: &Self) -> Result<BigInt> {
        Ok(self.subtract(other)?.infinity_norm())
    }

    /// Euclidean norm as an integer; fails unless the squared norm is a perfect square.
    pub fn exact_norm(&self) -> Result<BigInt> {
        sqrt::exact_sqrt(&self.norm_pow2())
    }

    pub fn to_decimal(&self) -> Vector<BigDecimal> {
        Vector::from_parts(self.iter().map(Radicand::to_decimal).collect())
    }
}

impl<E: Scalar> TryFrom<Vec<E>> for Vector<E> {
    type Error = LinalgError;

    fn try_from(values: Vec<E>) -> Result<Self> {
        Vector::from_vec(values)
    }
}

impl<E> From<Vector<E>> for Vec<E> {
    fn from(value: Vector<E>) -> Self {
        value.data
    }
}

impl<'a, E> IntoIterator for &'a Vector<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<E: fmt::Display> fmt::Display for Vector<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
