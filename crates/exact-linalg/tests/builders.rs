use exact_linalg::prelude::*;
use num_bigint::BigInt;

// ---------------------------------------------------------------------------
// VectorBuilder
// ---------------------------------------------------------------------------

#[test]
fn vector_builder_rejects_zero_size() {
    let err = VectorBuilder::<BigInt>::new(0).unwrap_err();
    assert_eq!(err, LinalgError::NonPositiveSize);
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[test]
fn vector_builder_rejects_unallocatable_size() {
    let err = VectorBuilder::<BigInt>::new(usize::MAX).unwrap_err();
    assert_eq!(err, LinalgError::Overflow("storage size"));
    assert_eq!(err.kind(), ErrorKind::Arithmetic);
}

#[test]
fn vector_builder_rejects_out_of_range_index() {
    let mut builder = VectorBuilder::new(3).unwrap();
    assert_eq!(
        builder.put(4, BigInt::from(1)).unwrap_err(),
        LinalgError::IndexOutOfRange { index: 4, size: 3 }
    );
    assert_eq!(
        builder.put(0, BigInt::from(1)).unwrap_err(),
        LinalgError::IndexOutOfRange { index: 0, size: 3 }
    );
}

#[test]
fn vector_builder_requires_every_index() {
    let mut builder = VectorBuilder::new(3).unwrap();
    builder.put(1, BigInt::from(5)).unwrap();
    builder.put(2, BigInt::from(6)).unwrap();
    let err = builder.build().unwrap_err();
    assert_eq!(err, LinalgError::Incomplete { row: 3, column: 1 });
    assert_eq!(err.kind(), ErrorKind::State);

    builder.put(3, BigInt::from(7)).unwrap();
    let v = builder.build().unwrap();
    assert_eq!(v.to_string(), "[5, 6, 7]");
}

#[test]
fn vector_builder_put_overwrites_and_chains() {
    let mut builder = VectorBuilder::new(2).unwrap();
    builder
        .put(1, BigInt::from(1))
        .unwrap()
        .put(2, BigInt::from(2))
        .unwrap()
        .put(1, BigInt::from(10))
        .unwrap();
    let v = builder.build().unwrap();
    assert_eq!(v.entry(1).unwrap(), &BigInt::from(10));
    assert_eq!(v.entry(2).unwrap(), &BigInt::from(2));
}

#[test]
fn vector_builder_put_all_then_override() {
    let mut builder = VectorBuilder::new(4).unwrap();
    builder.put_all(BigInt::from(0)).put(3, BigInt::from(-1)).unwrap();
    let v = builder.build().unwrap();
    assert_eq!(v.to_string(), "[0, 0, -1, 0]");
}

// ---------------------------------------------------------------------------
// MatrixBuilder
// ---------------------------------------------------------------------------

#[test]
fn matrix_builder_rejects_empty_shapes() {
    assert_eq!(
        MatrixBuilder::<BigInt>::new(0, 3).unwrap_err(),
        LinalgError::NonPositiveSize
    );
    assert_eq!(
        MatrixBuilder::<BigInt>::new(3, 0).unwrap_err(),
        LinalgError::NonPositiveSize
    );
}

#[test]
fn matrix_builder_rejects_overflowing_shapes() {
    let err = MatrixBuilder::<BigInt>::new(usize::MAX, 2).unwrap_err();
    assert_eq!(err, LinalgError::Overflow("matrix entry count"));
    assert_eq!(err.kind(), ErrorKind::Arithmetic);
    assert_eq!(
        MatrixBuilder::<BigInt>::new(usize::MAX / 2, 2).unwrap_err(),
        LinalgError::Overflow("storage size")
    );
    assert_eq!(
        Matrix::<BigInt>::from_shape_vec((usize::MAX, 2), vec![]).unwrap_err(),
        LinalgError::Overflow("matrix entry count")
    );
}

#[test]
fn matrix_builder_rejects_out_of_range_position() {
    let mut builder = MatrixBuilder::new(2, 3).unwrap();
    assert_eq!(
        builder.put(3, 1, BigInt::from(1)).unwrap_err(),
        LinalgError::PositionOutOfRange {
            row: 3,
            column: 1,
            shape: (2, 3)
        }
    );
    assert!(builder.put(1, 4, BigInt::from(1)).is_err());
    assert!(builder.put(2, 3, BigInt::from(1)).is_ok());
}

#[test]
fn matrix_builder_fills_row_major() {
    let mut builder = MatrixBuilder::new(2, 3).unwrap();
    for r in 1..=2 {
        for c in 1..=3 {
            builder.put(r, c, BigInt::from(10 * r + c)).unwrap();
        }
    }
    let m = builder.build().unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.to_string(), "[[11, 12, 13], [21, 22, 23]]");
    assert_eq!(m.column(2).unwrap().to_string(), "[12, 22]");
}

#[test]
fn matrix_builder_builds_independent_values() {
    let mut builder = MatrixBuilder::new(2, 2).unwrap();
    builder.put_all(BigInt::from(3));
    let first = builder.build().unwrap();
    builder.put(2, 1, BigInt::from(0)).unwrap();
    let second = builder.build().unwrap();
    assert_ne!(first, second);
    assert_eq!(first.entry(2, 1).unwrap(), &BigInt::from(3));
    assert!(second.is_upper_triangular());
}

#[test]
fn from_shape_vec_checks_length() {
    let err = Matrix::from_shape_vec((2, 2), vec![BigInt::from(1); 5]).unwrap_err();
    assert_eq!(
        err,
        LinalgError::SizeMismatch {
            expected: 4,
            found: 5
        }
    );
}
