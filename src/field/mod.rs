//! Field arithmetic contract and concrete algebras
//!
//! Every higher layer (the [`Matrix`](crate::matrix::Matrix) engine and the
//! [`ReedSolomon`](crate::reed_solomon::ReedSolomon) codec) is generic over the
//! [`Field`] trait defined here. A field *instance* carries the configuration
//! (modulus, radicand) and all operations go through it, so element types can
//! stay plain values such as `u32` or `u64`.
//!
//! ## Available algebras
//!
//! - [`BinaryField`]: GF(2^n) with a caller-supplied modulus polynomial
//!   (e.g. 0x11D, x⁸ + x⁴ + x³ + x² + 1)
//! - [`PrimeField`]: integers modulo a prime p
//! - [`QuadraticSurdField`]: the number field ℚ(√d)
//! - [`IntegerRing`]: ℤ, which is *not* a field; division is only defined in
//!   restricted cases

pub mod binary;
pub mod error;
pub mod integer;
pub mod prime;
pub mod surd;

pub use binary::BinaryField;
pub use error::{FieldError, Result};
pub use integer::IntegerRing;
pub use prime::PrimeField;
pub use surd::{QuadraticSurd, QuadraticSurdField};

use std::fmt::Debug;

/// Capability contract for a commutative ring with identities and
/// (generally) multiplicative inverses.
///
/// # Laws
/// - `add` and `multiply` are commutative and associative
/// - `zero` and `one` are the identities of `add` and `multiply`
/// - `add(x, negate(x)) == zero`
/// - `multiply(x, reciprocal(x)) == one` for `x != zero`
///
/// Every operation validates its operands and fails with
/// [`FieldError::OutOfDomain`] (or [`FieldError::RadicandMismatch`]) when one
/// of them does not belong to this field instance.
pub trait Field {
    /// Element representation, fixed per implementation.
    type Elem: Clone + Debug;

    fn zero(&self) -> Self::Elem;

    fn one(&self) -> Self::Elem;

    /// Verify that `x` belongs to this field's domain.
    fn check(&self, x: &Self::Elem) -> Result<()>;

    fn equals(&self, x: &Self::Elem, y: &Self::Elem) -> Result<bool>;

    fn negate(&self, x: &Self::Elem) -> Result<Self::Elem>;

    fn add(&self, x: &Self::Elem, y: &Self::Elem) -> Result<Self::Elem>;

    fn subtract(&self, x: &Self::Elem, y: &Self::Elem) -> Result<Self::Elem> {
        self.add(x, &self.negate(y)?)
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    /// [`FieldError::DivisionByZero`] when `x` is zero.
    fn reciprocal(&self, x: &Self::Elem) -> Result<Self::Elem>;

    fn multiply(&self, x: &Self::Elem, y: &Self::Elem) -> Result<Self::Elem>;

    fn divide(&self, x: &Self::Elem, y: &Self::Elem) -> Result<Self::Elem> {
        self.multiply(x, &self.reciprocal(y)?)
    }

    /// Whether `x` is a valid element of this field.
    fn contains(&self, x: &Self::Elem) -> bool {
        self.check(x).is_ok()
    }

    fn is_zero(&self, x: &Self::Elem) -> Result<bool> {
        self.equals(x, &self.zero())
    }

    /// Exponentiation by squaring: `base^exponent`, with `x^0 == one`.
    fn pow(&self, base: &Self::Elem, exponent: u64) -> Result<Self::Elem> {
        self.check(base)?;
        let mut result = self.one();
        let mut square = base.clone();
        let mut remaining = exponent;
        while remaining != 0 {
            if remaining & 1 != 0 {
                result = self.multiply(&result, &square)?;
            }
            remaining >>= 1;
            if remaining != 0 {
                square = self.multiply(&square, &square)?;
            }
        }
        Ok(result)
    }
}
