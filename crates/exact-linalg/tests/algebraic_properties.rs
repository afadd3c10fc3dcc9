//! Randomized checks of the algebraic identities the vector and matrix operations obey.
//!
//! Inputs are small integers drawn from a seeded generator so every run sees the same cases.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use exact_linalg::prelude::*;
use exact_linalg::sqrt::sqrt_to_precision;
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CASES: usize = 40;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_vector(rng: &mut StdRng, size: usize) -> BigIntVector {
    let values = (0..size)
        .map(|_| BigInt::from(rng.gen_range(-9i64..=9)))
        .collect();
    Vector::from_vec(values).unwrap()
}

fn random_matrix(rng: &mut StdRng, rows: usize, columns: usize) -> BigIntMatrix {
    let values = (0..rows * columns)
        .map(|_| BigInt::from(rng.gen_range(-9i64..=9)))
        .collect();
    Matrix::from_shape_vec((rows, columns), values).unwrap()
}

// ---------------------------------------------------------------------------
// Vectors
// ---------------------------------------------------------------------------

#[test]
fn vector_addition_identities() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let size = rng.gen_range(1..=6);
        let a = random_vector(&mut rng, size);
        let b = random_vector(&mut rng, size);
        let c = random_vector(&mut rng, size);

        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
        assert_eq!(
            a.add(&b).unwrap().add(&c).unwrap(),
            a.add(&b.add(&c).unwrap()).unwrap()
        );
        assert_eq!(a.negate().negate(), a);
        assert_eq!(a.add(&a.negate()).unwrap(), Vector::<BigInt>::zeros(size).unwrap());
    }
}

#[test]
fn dot_product_identities() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..CASES {
        let size = rng.gen_range(1..=6);
        let a = random_vector(&mut rng, size);
        let b = random_vector(&mut rng, size);
        let k = BigInt::from(rng.gen_range(-5i64..=5));

        assert_eq!(a.dot_product(&b).unwrap(), b.dot_product(&a).unwrap());
        assert_eq!(a.dot_product(&a).unwrap(), a.norm_pow2());
        assert_eq!(
            a.scalar_multiply(&k).dot_product(&b).unwrap(),
            k.clone() * a.dot_product(&b).unwrap()
        );
        assert_eq!(a.distance_pow2(&b).unwrap(), b.distance_pow2(&a).unwrap());
        assert!(a.taxicab_norm() >= a.infinity_norm());
    }
}

#[test]
fn norm_squared_approximates_norm_pow2() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(13);
    let precision = BigDecimal::from_str("1e-20").unwrap();
    let tolerance = BigDecimal::from_str("1e-15").unwrap();
    for _ in 0..CASES {
        let size = rng.gen_range(1..=6);
        let a = random_vector(&mut rng, size);
        let norm = a.norm_to_precision(&precision).unwrap();
        let expected = BigDecimal::from(a.norm_pow2());
        assert!((&norm * &norm - &expected).abs() < tolerance);
    }
}

#[test]
fn sqrt_of_random_decimals_squares_back() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(17);
    let precision = BigDecimal::from_str("1e-25").unwrap();
    let tolerance = BigDecimal::from_str("1e-15").unwrap();
    for _ in 0..CASES {
        let digits = BigInt::from(rng.gen_range(1u64..=1_000_000_000));
        let scale = rng.gen_range(-6i64..=12);
        let x = BigDecimal::new(digits, scale);
        let root = sqrt_to_precision(&x, &precision).unwrap();
        let diff = (&root * &root - &x).abs();
        assert!(diff < tolerance, "sqrt({}) = {}", x, root);
    }
}

// ---------------------------------------------------------------------------
// Matrices
// ---------------------------------------------------------------------------

#[test]
fn matrix_addition_and_transpose_identities() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..CASES {
        let rows = rng.gen_range(1..=4);
        let columns = rng.gen_range(1..=4);
        let a = random_matrix(&mut rng, rows, columns);
        let b = random_matrix(&mut rng, rows, columns);

        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
        assert_eq!(a.negate().negate(), a);
        assert_eq!(a.transpose().transpose(), a);
        assert_eq!(
            a.add(&b).unwrap().transpose(),
            a.transpose().add(&b.transpose()).unwrap()
        );
        assert_eq!(
            a.add(&a.negate()).unwrap(),
            Matrix::<BigInt>::zeros(rows, columns).unwrap()
        );
    }
}

#[test]
fn matrix_product_identities() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..CASES {
        let (m, n, p, q) = (
            rng.gen_range(1..=4),
            rng.gen_range(1..=4),
            rng.gen_range(1..=4),
            rng.gen_range(1..=4),
        );
        let a = random_matrix(&mut rng, m, n);
        let b = random_matrix(&mut rng, n, p);
        let c = random_matrix(&mut rng, p, q);
        let b2 = random_matrix(&mut rng, n, p);
        let v = random_vector(&mut rng, p);

        assert_eq!(
            a.multiply(&b).unwrap().multiply(&c).unwrap(),
            a.multiply(&b.multiply(&c).unwrap()).unwrap()
        );
        assert_eq!(
            a.multiply(&b.add(&b2).unwrap()).unwrap(),
            a.multiply(&b).unwrap().add(&a.multiply(&b2).unwrap()).unwrap()
        );
        assert_eq!(
            a.multiply(&b).unwrap().transpose(),
            b.transpose().multiply(&a.transpose()).unwrap()
        );
        assert_eq!(
            a.multiply(&b).unwrap().multiply_vector(&v).unwrap(),
            a.multiply_vector(&b.multiply_vector(&v).unwrap()).unwrap()
        );
        assert_eq!(a.multiply(&Matrix::identity(n).unwrap()).unwrap(), a);
    }
}

#[test]
fn determinant_identities() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..CASES {
        let n = rng.gen_range(1..=5);
        let a = random_matrix(&mut rng, n, n);
        let b = random_matrix(&mut rng, n, n);
        let det_a = a.determinant().unwrap();

        assert_eq!(a.transpose().determinant().unwrap(), det_a);
        assert_eq!(
            a.multiply(&b).unwrap().determinant().unwrap(),
            det_a.clone() * b.determinant().unwrap()
        );
        let sign = if n % 2 == 0 { 1 } else { -1 };
        assert_eq!(a.negate().determinant().unwrap(), BigInt::from(sign) * det_a.clone());
        assert_eq!(
            a.to_decimal().determinant().unwrap(),
            BigDecimal::from(det_a)
        );
    }
}

#[test]
fn structural_predicates_are_consistent() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..CASES {
        let n = rng.gen_range(1..=4);
        let a = random_matrix(&mut rng, n, n);
        let symmetric = a.add(&a.transpose()).unwrap();
        let skew = a.subtract(&a.transpose()).unwrap();

        assert!(symmetric.is_symmetric());
        assert!(skew.is_skew_symmetric());
        assert_eq!(a.trace().unwrap(), a.transpose().trace().unwrap());
        if a.is_diagonal() {
            assert!(a.is_upper_triangular() && a.is_lower_triangular());
        }
        if a.is_upper_triangular() {
            assert!(a.transpose().is_lower_triangular());
        }
    }
}
