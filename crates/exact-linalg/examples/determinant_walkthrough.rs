use std::str::FromStr;

use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use exact_linalg::prelude::*;
use exact_linalg::sqrt;
use num_bigint::BigInt;

fn int_matrix(rows: &[&[i64]]) -> Result<BigIntMatrix> {
    let rows = rows
        .iter()
        .map(|row| row.iter().copied().map(BigInt::from).collect())
        .collect();
    Matrix::from_rows(rows).context("failed to build integer matrix")
}

fn main() -> Result<()> {
    env_logger::init();

    // 4x4 integer matrix, expanded along its first row
    let m = int_matrix(&[
        &[3, 2, 0, 1],
        &[4, 0, 1, 2],
        &[3, 0, 2, 1],
        &[9, 2, 3, 1],
    ])?;
    println!("M = {}", m);
    println!("det(M) = {}", m.determinant()?);
    println!("trace(M) = {}", m.trace()?);
    println!("M^T = {}", m.transpose());
    println!("invertible over the integers: {}", m.is_invertible());

    // Upper triangular input short-circuits to the diagonal product
    let upper = int_matrix(&[&[2, 7, 1], &[0, -5, 4], &[0, 0, 6]])?;
    println!("U = {}, det(U) = {}", upper, upper.determinant()?);

    // Same matrix over decimals
    let d = m.to_decimal().scalar_multiply(&BigDecimal::from_str("0.5")?);
    println!("det(M / 2) = {}", d.determinant()?);

    // Norms and distances
    let v = Vector::from_vec(vec![BigInt::from(3), BigInt::from(4), BigInt::from(12)])?;
    let (r1, r2) = (m.row(1)?, m.row(2)?);
    println!("|v| = {} (exact {})", v.norm()?, v.exact_norm()?);
    println!(
        "distance(r1, r2) = {}",
        r1.distance_to_scale(&r2, 4, RoundingMode::HalfEven)?
    );
    println!("taxicab(r1, r2) = {}", r1.taxicab_distance(&r2)?);

    let config = SqrtConfig::new(BigDecimal::from_str("1e-30")?, 30, RoundingMode::Floor)?;
    println!("sqrt(2) = {}", sqrt::sqrt_with(&BigInt::from(2), &config)?);

    Ok(())
}
