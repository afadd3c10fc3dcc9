use std::error::Error;
use std::fmt;

/// Broad classification of a [`LinalgError`] by its cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed an argument that violates the operation's preconditions.
    Argument,
    /// The receiver lacks a structural property the operation requires.
    State,
    /// An exact computation has no representable answer.
    Arithmetic,
}

/// Error type for every fallible vector, matrix, builder and square-root operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Two vectors (or a matrix and a vector) have incompatible lengths.
    SizeMismatch { expected: usize, found: usize },
    /// Two matrices have incompatible shapes for the requested operation.
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A 1-based vector index outside `[1, size]`.
    IndexOutOfRange { index: usize, size: usize },
    /// A 1-based matrix position outside the matrix shape.
    PositionOutOfRange {
        row: usize,
        column: usize,
        shape: (usize, usize),
    },
    /// A vector or matrix was requested with a zero dimension.
    NonPositiveSize,
    /// Rows passed to a row-wise constructor do not share one length.
    RaggedRows { row: usize, expected: usize, found: usize },
    /// Convergence precision outside the open interval `(0, 1)`.
    InvalidPrecision(String),
    /// Negative output scale.
    InvalidScale(i64),
    /// Rounding-mode code outside `[0, 7]`, or an unknown rounding-mode name.
    InvalidRoundingMode(String),
    /// Square root of a negative value.
    NegativeRadicand(String),
    /// A minor would remove the only row or column of the matrix.
    DegenerateMinor { shape: (usize, usize) },
    /// The operation needs a square matrix.
    NotSquare { rows: usize, columns: usize },
    /// A builder still has an empty slot, identified by its 1-based position.
    Incomplete { row: usize, column: usize },
    /// Exact integer root requested for a value that is not a perfect square.
    NotPerfectSquare(String),
    /// `RoundingMode::Unnecessary` was requested but the result is not exact at that scale.
    RoundingNecessary { scale: i64 },
    /// A vector builder has no free slot left for `push`.
    BuilderFull { size: usize },
    /// A size, scale or exponent derived from the arguments does not fit its integer type.
    Overflow(&'static str),
}

impl LinalgError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinalgError::SizeMismatch { .. }
            | LinalgError::ShapeMismatch { .. }
            | LinalgError::IndexOutOfRange { .. }
            | LinalgError::PositionOutOfRange { .. }
            | LinalgError::NonPositiveSize
            | LinalgError::RaggedRows { .. }
            | LinalgError::InvalidPrecision(_)
            | LinalgError::InvalidScale(_)
            | LinalgError::InvalidRoundingMode(_)
            | LinalgError::NegativeRadicand(_)
            | LinalgError::DegenerateMinor { .. } => ErrorKind::Argument,
            LinalgError::NotSquare { .. } | LinalgError::Incomplete { .. } => ErrorKind::State,
            LinalgError::NotPerfectSquare(_)
            | LinalgError::RoundingNecessary { .. }
            | LinalgError::BuilderFull { .. }
            | LinalgError::Overflow(_) => ErrorKind::Arithmetic,
        }
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::SizeMismatch { expected, found } => {
                write!(f, "size mismatch: expected {}, found {}", expected, found)
            }
            LinalgError::ShapeMismatch { left, right } => write!(
                f,
                "incompatible shapes ({}, {}) and ({}, {})",
                left.0, left.1, right.0, right.1
            ),
            LinalgError::IndexOutOfRange { index, size } => {
                write!(f, "index {} out of range [1, {}]", index, size)
            }
            LinalgError::PositionOutOfRange { row, column, shape } => write!(
                f,
                "position ({}, {}) out of range for shape ({}, {})",
                row, column, shape.0, shape.1
            ),
            LinalgError::NonPositiveSize => write!(f, "sizes must be positive"),
            LinalgError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} entries, expected {}",
                row, found, expected
            ),
            LinalgError::InvalidPrecision(p) => {
                write!(f, "precision {} must lie strictly between 0 and 1", p)
            }
            LinalgError::InvalidScale(s) => write!(f, "scale {} must not be negative", s),
            LinalgError::InvalidRoundingMode(m) => write!(f, "unknown rounding mode: {}", m),
            LinalgError::NegativeRadicand(v) => {
                write!(f, "cannot take the square root of negative value {}", v)
            }
            LinalgError::DegenerateMinor { shape } => write!(
                f,
                "cannot take a minor of a ({}, {}) matrix",
                shape.0, shape.1
            ),
            LinalgError::NotSquare { rows, columns } => {
                write!(f, "matrix of shape ({}, {}) is not square", rows, columns)
            }
            LinalgError::Incomplete { row, column } => {
                write!(f, "builder entry ({}, {}) has not been set", row, column)
            }
            LinalgError::NotPerfectSquare(v) => write!(f, "{} is not a perfect square", v),
            LinalgError::RoundingNecessary { scale } => {
                write!(f, "square root is not exact at scale {}", scale)
            }
            LinalgError::BuilderFull { size } => {
                write!(f, "all {} builder slots are already filled", size)
            }
            LinalgError::Overflow(what) => write!(f, "{} overflows", what),
        }
    }
}

impl Error for LinalgError {}

/// Result type for exact-linalg operations
pub type Result<T> = std::result::Result<T, LinalgError>;
