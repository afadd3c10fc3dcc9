//! Exact vector and matrix types.
//!
//! `Vector<E>` and `Matrix<E>` are generic over a [`Scalar`] element, implemented for
//! `BigInt` and `BigDecimal`. Their operations are defined by the [`LinearVector`] and
//! [`LinearMatrix`] contracts; values are only created through the builders.
pub mod builder;
pub mod matrix;
pub mod scalar;
pub mod traits;
pub mod vector;

pub use builder::{MatrixBuilder, VectorBuilder};
pub use matrix::{BigDecimalMatrix, BigIntMatrix, Matrix};
pub use scalar::Scalar;
pub use traits::{LinearMatrix, LinearVector};
pub use vector::{BigDecimalVector, BigIntVector, Vector};
