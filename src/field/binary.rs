//! Binary extension fields GF(2^n)
//!
//! Elements are polynomials over GF(2) of degree < n, packed into the bits of a
//! `u32` (bit i holds the coefficient of xⁱ). The field is defined by a modulus
//! polynomial of degree n, given in the same packed form:
//!
//! - **GF(2^8)**: 0x11D (x⁸ + x⁴ + x³ + x² + 1), the usual byte-oriented codec polynomial
//! - **GF(2^16)**: 0x1100B (x¹⁶ + x¹² + x³ + x + 1)
//!
//! Irreducibility of the modulus is not checked at construction. A reducible
//! modulus surfaces as [`FieldError::ModulusNotIrreducible`] the first time
//! [`Field::reciprocal`] meets an element sharing a factor with it.

use super::{Field, FieldError, Result};

/// GF(2^8) modulus: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
pub const GF256_MODULUS: u32 = 0x11D;

/// GF(2^16) modulus: 0x1100B (x¹⁶ + x¹² + x³ + x + 1)
pub const GF65536_MODULUS: u32 = 0x1100B;

/// Largest modulus bit length that keeps shifted products inside a `u32`
const MAX_MODULUS_BITS: u32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryField {
    modulus: u32,
    size: u32,
}

#[inline]
fn bit_length(n: u32) -> u32 {
    u32::BITS - n.leading_zeros()
}

impl BinaryField {
    /// Create GF(2^n) where n is the degree of `modulus`.
    ///
    /// # Errors
    /// [`FieldError::InvalidConfiguration`] if `modulus <= 1` or its degree
    /// exceeds 30.
    pub fn new(modulus: u32) -> Result<Self> {
        if modulus <= 1 {
            return Err(FieldError::InvalidConfiguration(format!(
                "binary field modulus must be greater than 1, got {modulus:#x}"
            )));
        }
        if bit_length(modulus) > MAX_MODULUS_BITS {
            return Err(FieldError::InvalidConfiguration(format!(
                "binary field modulus {modulus:#x} exceeds {MAX_MODULUS_BITS} bits"
            )));
        }
        Ok(Self {
            modulus,
            size: 1 << (bit_length(modulus) - 1),
        })
    }

    /// Modulus polynomial in packed-bit form
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Number of field elements (2^n)
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Degree of the extension
    pub fn degree(&self) -> u32 {
        bit_length(self.modulus) - 1
    }

    /// Carry-less multiply with reduction. `x` must already be reduced; `y`
    /// may be any polynomial (quotients in the Euclid loop exceed the field).
    fn multiply_raw(&self, mut x: u32, mut y: u32) -> u32 {
        let mut result = 0;
        while y != 0 {
            if y & 1 != 0 {
                result ^= x;
            }
            x <<= 1;
            if x >= self.size {
                x ^= self.modulus;
            }
            y >>= 1;
        }
        result
    }

    /// Polynomial long division over GF(2). `y` must be non-zero.
    fn divide_and_remainder(mut x: u32, y: u32) -> (u32, u32) {
        let ylen = bit_length(y);
        let xlen = bit_length(x);
        if xlen < ylen {
            return (0, x);
        }
        let mut quotient = 0;
        for i in (0..=(xlen - ylen)).rev() {
            if bit_length(x) == ylen + i {
                x ^= y << i;
                quotient |= 1 << i;
            }
        }
        (quotient, x)
    }

    fn describe(&self) -> String {
        format!("GF(2^{}) mod {:#x}", self.degree(), self.modulus)
    }
}

impl Field for BinaryField {
    type Elem = u32;

    fn zero(&self) -> u32 {
        0
    }

    fn one(&self) -> u32 {
        1
    }

    fn check(&self, x: &u32) -> Result<()> {
        if *x < self.size {
            Ok(())
        } else {
            Err(FieldError::OutOfDomain {
                value: x.to_string(),
                field: self.describe(),
            })
        }
    }

    fn equals(&self, x: &u32, y: &u32) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(x == y)
    }

    // Characteristic 2: every element is its own additive inverse
    fn negate(&self, x: &u32) -> Result<u32> {
        self.check(x)?;
        Ok(*x)
    }

    fn add(&self, x: &u32, y: &u32) -> Result<u32> {
        self.check(x)?;
        self.check(y)?;
        Ok(x ^ y)
    }

    fn subtract(&self, x: &u32, y: &u32) -> Result<u32> {
        self.add(x, y)
    }

    fn reciprocal(&self, w: &u32) -> Result<u32> {
        self.check(w)?;
        if *w == 0 {
            return Err(FieldError::DivisionByZero);
        }

        // Extended Euclid on (modulus, w), tracking the Bezout coefficient of w
        let mut x = self.modulus;
        let mut y = *w;
        let mut a = 0;
        let mut b = 1;
        while y != 0 {
            let (quotient, remainder) = Self::divide_and_remainder(x, y);
            x = y;
            y = remainder;
            let next = a ^ self.multiply_raw(b, quotient);
            a = b;
            b = next;
        }

        if x == 1 {
            Ok(a)
        } else {
            Err(FieldError::ModulusNotIrreducible {
                modulus: self.modulus,
            })
        }
    }

    fn multiply(&self, x: &u32, y: &u32) -> Result<u32> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.multiply_raw(*x, *y))
    }
}
