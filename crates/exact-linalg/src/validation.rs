//! Precondition checks shared by the vector, matrix, builder and square-root code.
//!
//! Every check is a pure function returning the matching [`LinalgError`] so callers can
//! validate all arguments with `?` before doing any arithmetic.

use std::mem;

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

use crate::error::{LinalgError, Result};

/// Reject zero-sized vectors.
pub fn check_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(LinalgError::NonPositiveSize);
    }
    Ok(())
}

/// Reject matrix shapes with a zero dimension.
pub fn check_shape(rows: usize, columns: usize) -> Result<()> {
    if rows == 0 || columns == 0 {
        return Err(LinalgError::NonPositiveSize);
    }
    Ok(())
}

/// Number of entries in a `rows x columns` matrix.
pub fn check_entry_count(rows: usize, columns: usize) -> Result<usize> {
    rows.checked_mul(columns).ok_or(LinalgError::Overflow("matrix entry count"))
}

/// Reject backing stores of `len` values of `T` larger than the allocator accepts.
pub fn check_capacity<T>(len: usize) -> Result<()> {
    match len.checked_mul(mem::size_of::<T>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(()),
        _ => Err(LinalgError::Overflow("storage size")),
    }
}

/// Validate a 1-based vector index and return its 0-based offset.
pub fn check_index(index: usize, size: usize) -> Result<usize> {
    if index == 0 || index > size {
        return Err(LinalgError::IndexOutOfRange { index, size });
    }
    Ok(index - 1)
}

/// Validate a 1-based matrix position and return its row-major 0-based offset.
pub fn check_position(row: usize, column: usize, shape: (usize, usize)) -> Result<usize> {
    let (rows, columns) = shape;
    if row == 0 || row > rows || column == 0 || column > columns {
        return Err(LinalgError::PositionOutOfRange { row, column, shape });
    }
    Ok((row - 1) * columns + (column - 1))
}

pub fn check_same_size(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(LinalgError::SizeMismatch { expected, found });
    }
    Ok(())
}

pub fn check_same_shape(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left != right {
        return Err(LinalgError::ShapeMismatch { left, right });
    }
    Ok(())
}

/// Left columns must equal right rows.
pub fn check_multipliable(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left.1 != right.0 {
        return Err(LinalgError::ShapeMismatch { left, right });
    }
    Ok(())
}

pub fn check_square(rows: usize, columns: usize) -> Result<()> {
    if rows != columns {
        return Err(LinalgError::NotSquare { rows, columns });
    }
    Ok(())
}

/// Convergence precision must lie strictly inside `(0, 1)`.
pub fn check_precision(precision: &BigDecimal) -> Result<()> {
    if *precision <= BigDecimal::zero() || *precision >= BigDecimal::one() {
        return Err(LinalgError::InvalidPrecision(precision.to_string()));
    }
    Ok(())
}

pub fn check_scale(scale: i64) -> Result<()> {
    if scale < 0 {
        return Err(LinalgError::InvalidScale(scale));
    }
    Ok(())
}
