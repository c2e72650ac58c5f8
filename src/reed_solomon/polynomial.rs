//! Polynomial helpers over a [`Field`]
//!
//! Polynomials are coefficient slices with the constant term first:
//! `[c0, c1, c2]` is `c0 + c1·x + c2·x²`.

use crate::field::{Field, Result};

/// Horner evaluation of `poly` at `point`.
pub fn evaluate<F: Field>(field: &F, poly: &[F::Elem], point: &F::Elem) -> Result<F::Elem> {
    let mut result = field.zero();
    for coefficient in poly.iter().rev() {
        result = field.multiply(point, &result)?;
        result = field.add(coefficient, &result)?;
    }
    Ok(result)
}

/// `∏_{i=0}^{degree-1} (x − generator^i)`, returned with `degree + 1`
/// coefficients. The leading coefficient is always one.
pub fn generator_polynomial<F: Field>(
    field: &F,
    generator: &F::Elem,
    degree: usize,
) -> Result<Vec<F::Elem>> {
    let mut result = vec![field.zero(); degree + 1];
    result[0] = field.one();

    let mut genpow = field.one();
    for _ in 0..degree {
        // Multiply by (x - genpow)
        let root = field.negate(&genpow)?;
        for j in (1..=degree).rev() {
            let scaled = field.multiply(&root, &result[j])?;
            result[j] = field.add(&result[j - 1], &scaled)?;
        }
        result[0] = field.multiply(&root, &result[0])?;
        genpow = field.multiply(generator, &genpow)?;
    }
    Ok(result)
}
