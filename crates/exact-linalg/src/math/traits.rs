use bigdecimal::BigDecimal;
use num_traits::One;

use crate::config::{RoundingMode, SqrtConfig};
use crate::error::Result;
use crate::math::scalar::Scalar;
use crate::sqrt;
use crate::validation;

/// Operations every exact vector type provides.
///
/// Indices are 1-based. Binary operations check that both operands have the same size
/// before computing anything and fail with `SizeMismatch` otherwise.
pub trait LinearVector: Sized + Clone + PartialEq {
    type Element: Scalar;

    fn size(&self) -> usize;

    /// Entry at `index` in `[1, size]`.
    fn entry(&self, index: usize) -> Result<&Self::Element>;

    fn add(&self, other: &Self) -> Result<Self>;

    fn subtract(&self, other: &Self) -> Result<Self>;

    fn scalar_multiply(&self, scalar: &Self::Element) -> Self;

    fn negate(&self) -> Self {
        self.scalar_multiply(&-Self::Element::one())
    }

    /// Sum of pairwise products.
    fn dot_product(&self, other: &Self) -> Result<Self::Element>;

    /// Squared euclidean norm, `self · self`.
    fn norm_pow2(&self) -> Self::Element;

    fn norm(&self) -> Result<BigDecimal> {
        sqrt::sqrt(&self.norm_pow2())
    }

    fn norm_to_precision(&self, precision: &BigDecimal) -> Result<BigDecimal> {
        sqrt::sqrt_to_precision(&self.norm_pow2(), precision)
    }

    fn norm_to_scale(&self, scale: i64, rounding: RoundingMode) -> Result<BigDecimal> {
        sqrt::sqrt_to_scale(&self.norm_pow2(), scale, rounding)
    }

    fn norm_with(&self, config: &SqrtConfig) -> Result<BigDecimal> {
        sqrt::sqrt_with(&self.norm_pow2(), config)
    }

    fn distance_pow2(&self, other: &Self) -> Result<Self::Element> {
        Ok(self.subtract(other)?.norm_pow2())
    }

    fn distance(&self, other: &Self) -> Result<BigDecimal> {
        self.subtract(other)?.norm()
    }

    fn distance_to_precision(&self, other: &Self, precision: &BigDecimal) -> Result<BigDecimal> {
        validation::check_precision(precision)?;
        self.subtract(other)?.norm_to_precision(precision)
    }

    fn distance_to_scale(
        &self,
        other: &Self,
        scale: i64,
        rounding: RoundingMode,
    ) -> Result<BigDecimal> {
        validation::check_scale(scale)?;
        self.subtract(other)?.norm_to_scale(scale, rounding)
    }

    fn distance_with(&self, other: &Self, config: &SqrtConfig) -> Result<BigDecimal> {
        config.validate()?;
        self.subtract(other)?.norm_with(config)
    }
}

/// Operations every exact matrix type provides.
///
/// Positions are 1-based `(row, column)` pairs. Structural predicates are recomputed on
/// every call.
pub trait LinearMatrix: Sized + Clone + PartialEq {
    type Element: Scalar;
    type Vector: LinearVector<Element = Self::Element>;

    fn row_size(&self) -> usize;

    fn column_size(&self) -> usize;

    fn entry(&self, row: usize, column: usize) -> Result<&Self::Element>;

    /// Row `index` as a vector of length `column_size`.
    fn row(&self, index: usize) -> Result<Self::Vector>;

    /// Column `index` as a vector of length `row_size`.
    fn column(&self, index: usize) -> Result<Self::Vector>;

    fn add(&self, other: &Self) -> Result<Self>;

    fn subtract(&self, other: &Self) -> Result<Self>;

    /// Matrix product; requires `self.column_size() == other.row_size()`.
    fn multiply(&self, other: &Self) -> Result<Self>;

    /// Matrix-vector product; requires `self.column_size() == vector.size()`.
    fn multiply_vector(&self, vector: &Self::Vector) -> Result<Self::Vector>;

    fn scalar_multiply(&self, scalar: &Self::Element) -> Self;

    fn negate(&self) -> Self {
        self.scalar_multiply(&-Self::Element::one())
    }

    /// Sum of the diagonal; requires a square matrix.
    fn trace(&self) -> Result<Self::Element>;

    fn transpose(&self) -> Self;

    /// The matrix with `row` and `column` removed, re-indexed from 1.
    fn minor(&self, row: usize, column: usize) -> Result<Self>;

    fn determinant(&self) -> Result<Self::Element>;

    fn is_square(&self) -> bool {
        self.row_size() == self.column_size()
    }

    fn is_upper_triangular(&self) -> bool;

    fn is_lower_triangular(&self) -> bool;

    fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    fn is_diagonal(&self) -> bool {
        self.is_upper_triangular() && self.is_lower_triangular()
    }

    fn is_identity(&self) -> bool;

    /// Whether the determinant is a unit of the element domain.
    fn is_invertible(&self) -> bool {
        self.is_square()
            && self
                .determinant()
                .map(|det| det.is_unit())
                .unwrap_or(false)
    }

    fn is_symmetric(&self) -> bool {
        self.is_square() && *self == self.transpose()
    }

    fn is_skew_symmetric(&self) -> bool {
        self.is_square() && self.negate() == self.transpose()
    }
}
