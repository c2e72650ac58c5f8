//! The ring of integers ℤ behind the [`Field`] interface
//!
//! This is **not a field**: only `1` has a multiplicative inverse here, and
//! [`Field::divide`] is truncating integer division. It is useful for
//! exercising generic code with exact arithmetic, but the Reed-Solomon decoder
//! and matrix elimination will fail with [`FieldError::DivisionByZero`] as soon
//! as they need to invert anything other than `1`.

use super::{Field, FieldError, Result};
use num_bigint::BigInt;
use num_traits::{One, Zero};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerRing;

impl IntegerRing {
    pub fn new() -> Self {
        Self
    }
}

impl Field for IntegerRing {
    type Elem = BigInt;

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }

    // Every integer is in the domain
    fn check(&self, _x: &BigInt) -> Result<()> {
        Ok(())
    }

    fn equals(&self, x: &BigInt, y: &BigInt) -> Result<bool> {
        Ok(x == y)
    }

    fn negate(&self, x: &BigInt) -> Result<BigInt> {
        Ok(-x)
    }

    fn add(&self, x: &BigInt, y: &BigInt) -> Result<BigInt> {
        Ok(x + y)
    }

    fn subtract(&self, x: &BigInt, y: &BigInt) -> Result<BigInt> {
        Ok(x - y)
    }

    fn reciprocal(&self, x: &BigInt) -> Result<BigInt> {
        if x.is_one() {
            Ok(x.clone())
        } else {
            Err(FieldError::DivisionByZero)
        }
    }

    fn multiply(&self, x: &BigInt, y: &BigInt) -> Result<BigInt> {
        Ok(x * y)
    }

    fn divide(&self, x: &BigInt, y: &BigInt) -> Result<BigInt> {
        if y.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(x / y)
    }
}
