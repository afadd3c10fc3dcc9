//! exact-linalg: exact-arithmetic vectors and matrices.
//!
//! This crate provides immutable vectors and matrices over arbitrary-precision integers
//! (`BigInt`) and decimals (`BigDecimal`), the builders that construct them, and a
//! Heron's-method square root used for norms and distances.
//!
//! The design favors small, testable modules: every fallible operation returns
//! [`error::Result`], validates its arguments before computing, and never panics on
//! caller input.
pub mod config;
pub mod error;
pub mod math;
pub mod sqrt;
pub mod validation;

pub use config::{RoundingMode, SqrtConfig};
pub use error::{ErrorKind, LinalgError, Result};

/// Commonly used types and traits
pub mod prelude {
    pub use crate::config::{RoundingMode, SqrtConfig};
    pub use crate::error::{ErrorKind, LinalgError};
    pub use crate::math::{
        BigDecimalMatrix, BigDecimalVector, BigIntMatrix, BigIntVector, LinearMatrix,
        LinearVector, Matrix, MatrixBuilder, Scalar, Vector, VectorBuilder,
    };
    pub use crate::sqrt::{exact_sqrt, is_perfect_square, Radicand};
}
