//! Tests for the generic matrix engine
//!
//! Covers elimination, inversion and determinants over several fields, plus
//! property tests tying the three together:
//! - RREF of an invertible n x n matrix has n unit pivots
//! - `invert(invert(A)) == A` and `A * invert(A) == I`
//! - `determinant(A) == 0` exactly when `A` is singular

use num_bigint::BigInt;
use proptest::prelude::*;
use rsfield::field::{BinaryField, Field, FieldError, IntegerRing, PrimeField, QuadraticSurdField};
use rsfield::matrix::{Matrix, MatrixError};

// ============================================================================
// Matrix basic functionality tests
// ============================================================================

#[test]
fn test_new_is_zero_filled() {
    let field = PrimeField::new(1231).unwrap();
    let m = Matrix::new(2, 3, &field).unwrap();
    assert_eq!(m.row_count(), 2);
    assert_eq!(m.column_count(), 3);
    for i in 0..2 {
        assert_eq!(m.row(i), &[0, 0, 0]);
    }
}

#[test]
fn test_clone_is_independent() {
    let field = PrimeField::new(1231).unwrap();
    let mut m = Matrix::identity(2, &field).unwrap();
    let snapshot = m.clone();
    m.set(0, 1, 5);
    assert_eq!(*snapshot.get(0, 1), 0);
    assert_eq!(*m.get(0, 1), 5);
}

#[test]
fn test_multiply_rectangular() {
    let field = PrimeField::new(1231).unwrap();
    let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]], &field).unwrap();
    let b = Matrix::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]], &field).unwrap();
    let product = a.multiply(&b).unwrap();
    assert_eq!(product.row(0), &[58, 64]);
    assert_eq!(product.row(1), &[139, 154]);
}

#[test]
fn test_transpose_of_product() {
    let field = PrimeField::new(1231).unwrap();
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]], &field).unwrap();
    let b = Matrix::from_rows(vec![vec![7, 8, 9], vec![10, 11, 12]], &field).unwrap();
    let left = a.multiply(&b).unwrap().transpose();
    let right = b.transpose().multiply(&a.transpose()).unwrap();
    assert!(left.equals(&right).unwrap());
}

// ============================================================================
// Elimination tests
// ============================================================================

#[test]
fn test_rref_solves_linear_system() {
    // x + y = 3, x - y = 1 over GF(1231)  ->  x = 2, y = 1
    let field = PrimeField::new(1231).unwrap();
    let minus_one = field.negate(&1).unwrap();
    let mut m = Matrix::from_rows(vec![vec![1, 1, 3], vec![1, minus_one, 1]], &field).unwrap();
    assert_eq!(m.reduced_row_echelon_form().unwrap(), 2);
    assert_eq!(m.row(0), &[1, 0, 2]);
    assert_eq!(m.row(1), &[0, 1, 1]);
}

#[test]
fn test_rref_rank_deficient() {
    let field = BinaryField::new(0x11D).unwrap();
    let mut m = Matrix::from_rows(
        vec![vec![1, 2, 3], vec![2, 4, 6], vec![0, 0, 0]],
        &field,
    )
    .unwrap();
    // Row 2 is 2 * row 1 in GF(2^8)
    assert_eq!(m.reduced_row_echelon_form().unwrap(), 1);
    assert_eq!(m.row(0), &[1, 2, 3]);
    assert_eq!(m.row(1), &[0, 0, 0]);
}

#[test]
fn test_invert_requires_square() {
    let field = PrimeField::new(7).unwrap();
    let mut m = Matrix::new(2, 3, &field).unwrap();
    assert_eq!(
        m.invert().unwrap_err(),
        MatrixError::NotSquare { rows: 2, cols: 3 }
    );
    assert!(matches!(
        m.determinant(),
        Err(MatrixError::NotSquare { .. })
    ));
}

#[test]
fn test_invert_over_surd_field() {
    let field = QuadraticSurdField::new(2).unwrap();
    let root2 = field.element(0, 1, 1).unwrap();
    let a = Matrix::from_rows(
        vec![vec![field.one(), root2], vec![root2, field.integer(3)]],
        &field,
    )
    .unwrap();
    // det = 3 - 2 = 1
    assert_eq!(a.determinant().unwrap(), field.one());
    let product = a.multiply(&a.inverse().unwrap()).unwrap();
    assert!(product.equals(&Matrix::identity(2, &field).unwrap()).unwrap());
}

#[test]
fn test_integer_ring_unit_pivots_only() {
    let ring = IntegerRing::new();
    let int = |n: i64| BigInt::from(n);

    let unimodular =
        Matrix::from_rows(vec![vec![int(1), int(5)], vec![int(0), int(1)]], &ring).unwrap();
    assert_eq!(unimodular.determinant().unwrap(), int(1));

    let scaled = Matrix::from_rows(vec![vec![int(2), int(0)], vec![int(0), int(1)]], &ring).unwrap();
    assert_eq!(
        scaled.determinant().unwrap_err(),
        MatrixError::Field(FieldError::DivisionByZero)
    );

    let product = scaled.multiply(&unimodular).unwrap();
    assert_eq!(product.row(0), &[int(2), int(10)]);
}

#[test]
fn test_determinant_3x3() {
    let field = PrimeField::new(1231).unwrap();
    // det [[2, 0, 1], [1, 3, 2], [1, 1, 1]] = 2(3-2) - 0 + 1(1-3) = 0
    let singular =
        Matrix::from_rows(vec![vec![2, 0, 1], vec![1, 3, 2], vec![1, 1, 1]], &field).unwrap();
    assert_eq!(singular.determinant().unwrap(), 0);

    // det [[2, 0, 1], [1, 3, 2], [1, 1, 2]] = 2(6-2) - 0 + 1(1-3) = 6
    let regular =
        Matrix::from_rows(vec![vec![2, 0, 1], vec![1, 3, 2], vec![1, 1, 2]], &field).unwrap();
    assert_eq!(regular.determinant().unwrap(), 6);
}

// ============================================================================
// Property-based tests
// ============================================================================

fn gf1231_rows(n: usize) -> impl Strategy<Value = Vec<Vec<u64>>> {
    prop::collection::vec(prop::collection::vec(0u64..1231, n), n)
}

fn gf256_rows(n: usize) -> impl Strategy<Value = Vec<Vec<u32>>> {
    prop::collection::vec(prop::collection::vec(0u32..256, n), n)
}

proptest! {
    /// Property: determinant is zero exactly when inversion fails
    #[test]
    fn prop_determinant_zero_iff_singular(rows in gf1231_rows(3)) {
        let field = PrimeField::new(1231).unwrap();
        let a = Matrix::from_rows(rows, &field).unwrap();
        let det = a.determinant().unwrap();
        match a.inverse() {
            Ok(_) => {
                prop_assert_ne!(det, 0);
            }
            Err(err) => {
                prop_assert_eq!(err, MatrixError::NotInvertible);
                prop_assert_eq!(det, 0);
            }
        }
    }

    /// Property: A * A^-1 = I and (A^-1)^-1 = A
    #[test]
    fn prop_inverse_round_trip(rows in gf256_rows(4)) {
        let field = BinaryField::new(0x11D).unwrap();
        let a = Matrix::from_rows(rows, &field).unwrap();
        if let Ok(inverse) = a.inverse() {
            let identity = Matrix::identity(4, &field).unwrap();
            prop_assert!(a.multiply(&inverse).unwrap().equals(&identity).unwrap());
            prop_assert!(inverse.inverse().unwrap().equals(&a).unwrap());
        }
    }

    /// Property: RREF of an invertible matrix is the identity (n unit pivots)
    #[test]
    fn prop_rref_of_invertible_is_identity(rows in gf1231_rows(4)) {
        let field = PrimeField::new(1231).unwrap();
        let a = Matrix::from_rows(rows, &field).unwrap();
        prop_assume!(a.determinant().unwrap() != 0);
        let mut reduced = a.clone();
        prop_assert_eq!(reduced.reduced_row_echelon_form().unwrap(), 4);
        prop_assert!(reduced.equals(&Matrix::identity(4, &field).unwrap()).unwrap());
    }

    /// Property: det(AB) = det(A) det(B)
    #[test]
    fn prop_determinant_multiplicative(a in gf1231_rows(3), b in gf1231_rows(3)) {
        let field = PrimeField::new(1231).unwrap();
        let a = Matrix::from_rows(a, &field).unwrap();
        let b = Matrix::from_rows(b, &field).unwrap();
        let product = a.multiply(&b).unwrap();
        let expected = field
            .multiply(&a.determinant().unwrap(), &b.determinant().unwrap())
            .unwrap();
        prop_assert_eq!(product.determinant().unwrap(), expected);
    }
}
