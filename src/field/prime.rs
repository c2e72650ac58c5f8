//! Prime fields GF(p)
//!
//! Elements are integers in `[0, p)`. Primality of `p` is the caller's
//! responsibility: the reciprocal is computed as `x^(p-2)` (Fermat), which is
//! only a true inverse when `p` is prime.

use super::{Field, FieldError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// # Errors
    /// [`FieldError::InvalidConfiguration`] if `modulus < 2`.
    pub fn new(modulus: u64) -> Result<Self> {
        if modulus < 2 {
            return Err(FieldError::InvalidConfiguration(format!(
                "prime field modulus must be at least 2, got {modulus}"
            )));
        }
        Ok(Self { modulus })
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    #[inline]
    fn mul_mod(&self, x: u64, y: u64) -> u64 {
        ((x as u128 * y as u128) % self.modulus as u128) as u64
    }
}

impl Field for PrimeField {
    type Elem = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1
    }

    fn check(&self, x: &u64) -> Result<()> {
        if *x < self.modulus {
            Ok(())
        } else {
            Err(FieldError::OutOfDomain {
                value: x.to_string(),
                field: format!("GF({})", self.modulus),
            })
        }
    }

    fn equals(&self, x: &u64, y: &u64) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(x == y)
    }

    fn negate(&self, x: &u64) -> Result<u64> {
        self.check(x)?;
        Ok((self.modulus - x) % self.modulus)
    }

    fn add(&self, x: &u64, y: &u64) -> Result<u64> {
        self.check(x)?;
        self.check(y)?;
        Ok(((*x as u128 + *y as u128) % self.modulus as u128) as u64)
    }

    fn subtract(&self, x: &u64, y: &u64) -> Result<u64> {
        self.check(x)?;
        self.check(y)?;
        Ok(((*x as u128 + self.modulus as u128 - *y as u128) % self.modulus as u128) as u64)
    }

    fn reciprocal(&self, x: &u64) -> Result<u64> {
        self.check(x)?;
        if *x == 0 {
            return Err(FieldError::DivisionByZero);
        }

        let mut result = 1;
        let mut base = *x;
        let mut exponent = self.modulus - 2;
        while exponent != 0 {
            if exponent & 1 != 0 {
                result = self.mul_mod(result, base);
            }
            base = self.mul_mod(base, base);
            exponent >>= 1;
        }
        Ok(result)
    }

    fn multiply(&self, x: &u64, y: &u64) -> Result<u64> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.mul_mod(*x, *y))
    }
}
