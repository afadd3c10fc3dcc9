use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{LinalgError, Result};
use crate::math::builder::{MatrixBuilder, VectorBuilder};
use crate::math::scalar::Scalar;
use crate::math::traits::{LinearMatrix, LinearVector};
use crate::math::vector::Vector;
use crate::sqrt::Radicand;
use crate::validation;

/// Immutable, 1-indexed matrix of exact scalars stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<E> {
    data: Vec<E>,
    rows: usize,
    columns: usize,
}

pub type BigIntMatrix = Matrix<BigInt>;
pub type BigDecimalMatrix = Matrix<BigDecimal>;

impl<E> Matrix<E> {
    /// Wrap already validated storage of exactly `rows * columns` entries.
    pub(crate) fn from_parts(data: Vec<E>, rows: usize, columns: usize) -> Self {
        debug_assert!(rows > 0 && columns > 0 && data.len() == rows * columns);
        Self {
            data,
            rows,
            columns,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> usize {
        (row - 1) * self.columns + (column - 1)
    }

    /// Unchecked 1-based access for loops that already stay inside the shape.
    #[inline]
    fn at(&self, row: usize, column: usize) -> &E {
        &self.data[self.offset(row, column)]
    }
}

impl<E: Scalar> Matrix<E> {
    /// Build a matrix from row-major entries.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<E>) -> Result<Self> {
        let (rows, columns) = shape;
        validation::check_shape(rows, columns)?;
        let len = validation::check_entry_count(rows, columns)?;
        validation::check_same_size(len, data.len())?;
        let mut builder = MatrixBuilder::new(rows, columns)?;
        for (offset, value) in data.into_iter().enumerate() {
            builder.put(offset / columns + 1, offset % columns + 1, value)?;
        }
        builder.build()
    }

    pub fn from_rows(rows: Vec<Vec<E>>) -> Result<Self> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        validation::check_shape(rows.len(), columns)?;
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(LinalgError::RaggedRows {
                    row: idx + 1,
                    expected: columns,
                    found: row.len(),
                });
            }
        }
        let shape = (rows.len(), columns);
        Self::from_shape_vec(shape, rows.into_iter().flatten().collect())
    }

    pub fn zeros(rows: usize, columns: usize) -> Result<Self> {
        MatrixBuilder::new(rows, columns)?.put_all(E::zero()).build()
    }

    /// Square matrix with one on the diagonal and zero elsewhere.
    pub fn identity(size: usize) -> Result<Self> {
        let mut builder = MatrixBuilder::new(size, size)?;
        builder.put_all(E::zero());
        for i in 1..=size {
            builder.put(i, i, E::one())?;
        }
        builder.build()
    }

    fn zip_with<F>(&self, other: &Self, mut f: F) -> Result<Self>
    where
        F: FnMut(&E, &E) -> E,
    {
        validation::check_same_shape(self.shape(), other.shape())?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(Self::from_parts(data, self.rows, self.columns))
    }

    fn product_of(&self, positions: &[(usize, usize)]) -> E {
        positions
            .iter()
            .fold(E::one(), |acc, &(r, c)| acc * self.at(r, c).clone())
    }

    fn diagonal_product(&self) -> E {
        (1..=self.rows).fold(E::one(), |acc, i| acc * self.at(i, i).clone())
    }

    /// Rule of Sarrus for a 3x3 matrix.
    fn sarrus(&self) -> E {
        let forward = self.product_of(&[(1, 1), (2, 2), (3, 3)])
            + self.product_of(&[(1, 2), (2, 3), (3, 1)])
            + self.product_of(&[(1, 3), (2, 1), (3, 2)]);
        let backward = self.product_of(&[(1, 3), (2, 2), (3, 1)])
            + self.product_of(&[(1, 1), (2, 3), (3, 2)])
            + self.product_of(&[(1, 2), (2, 1), (3, 3)]);
        forward - backward
    }

    /// Laplace expansion along the first row.
    fn cofactor_expansion(&self) -> Result<E> {
        let mut det = E::zero();
        for k in 1..=self.columns {
            let a = self.at(1, k);
            if a.is_zero() {
                continue;
            }
            let term = a.clone() * self.minor(1, k)?.determinant()?;
            det = if k % 2 == 1 { det + term } else { det - term };
        }
        Ok(det)
    }
}

impl<E: Scalar> LinearMatrix for Matrix<E> {
    type Element = E;
    type Vector = Vector<E>;

    fn row_size(&self) -> usize {
        self.rows
    }

    fn column_size(&self) -> usize {
        self.columns
    }

    fn entry(&self, row: usize, column: usize) -> Result<&E> {
        let offset = validation::check_position(row, column, self.shape())?;
        Ok(&self.data[offset])
    }

    fn row(&self, index: usize) -> Result<Vector<E>> {
        validation::check_index(index, self.rows)?;
        let start = self.offset(index, 1);
        Ok(Vector::from_parts(self.data[start..start + self.columns].to_vec()))
    }

    fn column(&self, index: usize) -> Result<Vector<E>> {
        validation::check_index(index, self.columns)?;
        Ok(Vector::from_parts(
            (1..=self.rows).map(|r| self.at(r, index).clone()).collect(),
        ))
    }

    fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        validation::check_multipliable(self.shape(), other.shape())?;
        let columns = (1..=other.columns)
            .map(|j| other.column(j))
            .collect::<Result<Vec<_>>>()?;
        let mut builder = MatrixBuilder::new(self.rows, other.columns)?;
        for i in 1..=self.rows {
            let row = self.row(i)?;
            for (j, column) in columns.iter().enumerate() {
                builder.put(i, j + 1, row.dot_product(column)?)?;
            }
        }
        builder.build()
    }

    fn multiply_vector(&self, vector: &Vector<E>) -> Result<Vector<E>> {
        validation::check_same_size(self.columns, vector.size())?;
        let mut builder = VectorBuilder::new(self.rows)?;
        for i in 1..=self.rows {
            builder.put(i, self.row(i)?.dot_product(vector)?)?;
        }
        builder.build()
    }

    fn scalar_multiply(&self, scalar: &E) -> Self {
        let data = self
            .data
            .iter()
            .map(|v| v.clone() * scalar.clone())
            .collect();
        Self::from_parts(data, self.rows, self.columns)
    }

    fn trace(&self) -> Result<E> {
        validation::check_square(self.rows, self.columns)?;
        Ok((1..=self.rows).fold(E::zero(), |acc, i| acc + self.at(i, i).clone()))
    }

    fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 1..=self.columns {
            for r in 1..=self.rows {
                data.push(self.at(r, c).clone());
            }
        }
        Self::from_parts(data, self.columns, self.rows)
    }

    fn minor(&self, row: usize, column: usize) -> Result<Self> {
        validation::check_position(row, column, self.shape())?;
        if self.rows < 2 || self.columns < 2 {
            return Err(LinalgError::DegenerateMinor {
                shape: self.shape(),
            });
        }
        let mut data = Vec::with_capacity((self.rows - 1) * (self.columns - 1));
        for r in (1..=self.rows).filter(|&r| r != row) {
            for c in (1..=self.columns).filter(|&c| c != column) {
                data.push(self.at(r, c).clone());
            }
        }
        Ok(Self::from_parts(data, self.rows - 1, self.columns - 1))
    }

    /// Product of the diagonal for triangular input, closed forms up to 3x3, and
    /// cofactor expansion beyond that. Cofactor expansion is exponential in the size.
    fn determinant(&self) -> Result<E> {
        validation::check_square(self.rows, self.columns)?;
        let n = self.rows;
        if self.is_triangular() {
            log::trace!("determinant of triangular {}x{} matrix from its diagonal", n, n);
            return Ok(self.diagonal_product());
        }
        match n {
            2 => Ok(self.product_of(&[(1, 1), (2, 2)]) - self.product_of(&[(1, 2), (2, 1)])),
            3 => Ok(self.sarrus()),
            _ => {
                log::trace!("determinant of {}x{} matrix by cofactor expansion", n, n);
                self.cofactor_expansion()
            }
        }
    }

    fn is_upper_triangular(&self) -> bool {
        self.is_square()
            && (1..=self.rows).all(|r| (1..r).all(|c| self.at(r, c).is_zero()))
    }

    fn is_lower_triangular(&self) -> bool {
        self.is_square()
            && (1..=self.rows).all(|r| (r + 1..=self.columns).all(|c| self.at(r, c).is_zero()))
    }

    fn is_identity(&self) -> bool {
        self.is_diagonal() && (1..=self.rows).all(|i| self.at(i, i).is_one())
    }
}

impl Matrix<BigInt> {
    pub fn to_decimal(&self) -> Matrix<BigDecimal> {
        Matrix::from_parts(
            self.data.iter().map(Radicand::to_decimal).collect(),
            self.rows,
            self.columns,
        )
    }
}

impl<E: fmt::Display> fmt::Display for Matrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, row) in self.data.chunks(self.columns).enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (jdx, value) in row.iter().enumerate() {
                if jdx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
