//! Quadratic number fields ℚ(√d)
//!
//! An element `(a + b√d) / c` is kept in canonical form: `c > 0` and
//! `gcd(a, b, c) == 1`, so structural equality is field equality.
//! Intermediate products are computed in `i128` and must fit back into `i64`
//! after reduction, otherwise the operation fails with [`FieldError::Overflow`].

use super::{Field, FieldError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadraticSurd {
    a: i64,
    b: i64,
    c: i64,
    d: i64,
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

fn narrow(value: i128) -> Result<i64> {
    i64::try_from(value).map_err(|_| FieldError::Overflow("quadratic surd"))
}

fn checked(value: Option<i128>) -> Result<i128> {
    value.ok_or(FieldError::Overflow("quadratic surd"))
}

impl QuadraticSurd {
    /// Build `(a + b√d) / c` in lowest terms.
    ///
    /// # Errors
    /// [`FieldError::DivisionByZero`] if `c == 0`.
    pub fn new(a: i64, b: i64, c: i64, d: i64) -> Result<Self> {
        Self::reduce(a as i128, b as i128, c as i128, d)
    }

    fn reduce(mut a: i128, mut b: i128, mut c: i128, d: i64) -> Result<Self> {
        if c == 0 {
            return Err(FieldError::DivisionByZero);
        }
        if c < 0 {
            a = -a;
            b = -b;
            c = -c;
        }
        let divisor = gcd(gcd(a, b), c);
        if divisor != 0 {
            a /= divisor;
            b /= divisor;
            c /= divisor;
        }
        Ok(Self {
            a: narrow(a)?,
            b: narrow(b)?,
            c: narrow(c)?,
            d,
        })
    }

    /// Rational part numerator
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Coefficient of √d in the numerator
    pub fn b(&self) -> i64 {
        self.b
    }

    /// Denominator, always positive
    pub fn c(&self) -> i64 {
        self.c
    }

    /// Radicand
    pub fn d(&self) -> i64 {
        self.d
    }
}

impl fmt::Display for QuadraticSurd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} + {}*sqrt({})) / {}", self.a, self.b, self.d, self.c)
    }
}

/// The field ℚ(√d) for a fixed non-square radicand `d`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadraticSurdField {
    d: i64,
}

impl QuadraticSurdField {
    /// # Errors
    /// [`FieldError::InvalidConfiguration`] if `d` is a perfect square
    /// (including 0 and 1), since ℚ(√d) then collapses to ℚ and
    /// `a + b√d` stops being a unique representation.
    pub fn new(d: i64) -> Result<Self> {
        if d >= 0 {
            let root = (d as f64).sqrt() as i64;
            if (root.saturating_sub(1)..=root.saturating_add(1))
                .any(|r| r >= 0 && r.checked_mul(r) == Some(d))
            {
                return Err(FieldError::InvalidConfiguration(format!(
                    "radicand {d} is a perfect square"
                )));
            }
        }
        Ok(Self { d })
    }

    pub fn radicand(&self) -> i64 {
        self.d
    }

    /// Element `(a + b√d) / c` of this field
    pub fn element(&self, a: i64, b: i64, c: i64) -> Result<QuadraticSurd> {
        QuadraticSurd::new(a, b, c, self.d)
    }

    /// The rational integer `n`
    pub fn integer(&self, n: i64) -> QuadraticSurd {
        QuadraticSurd {
            a: n,
            b: 0,
            c: 1,
            d: self.d,
        }
    }
}

impl Field for QuadraticSurdField {
    type Elem = QuadraticSurd;

    fn zero(&self) -> QuadraticSurd {
        self.integer(0)
    }

    fn one(&self) -> QuadraticSurd {
        self.integer(1)
    }

    fn check(&self, x: &QuadraticSurd) -> Result<()> {
        if x.d == self.d {
            Ok(())
        } else {
            Err(FieldError::RadicandMismatch {
                expected: self.d,
                found: x.d,
            })
        }
    }

    fn equals(&self, x: &QuadraticSurd, y: &QuadraticSurd) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(x == y)
    }

    fn negate(&self, x: &QuadraticSurd) -> Result<QuadraticSurd> {
        self.check(x)?;
        QuadraticSurd::reduce(-(x.a as i128), -(x.b as i128), x.c as i128, self.d)
    }

    fn add(&self, x: &QuadraticSurd, y: &QuadraticSurd) -> Result<QuadraticSurd> {
        self.check(x)?;
        self.check(y)?;
        let (xa, xb, xc) = (x.a as i128, x.b as i128, x.c as i128);
        let (ya, yb, yc) = (y.a as i128, y.b as i128, y.c as i128);
        QuadraticSurd::reduce(xa * yc + ya * xc, xb * yc + yb * xc, xc * yc, self.d)
    }

    /// `1 / ((a + b√d) / c) = (-ac + bc√d) / (b²d - a²)`
    fn reciprocal(&self, x: &QuadraticSurd) -> Result<QuadraticSurd> {
        self.check(x)?;
        let (a, b, c) = (x.a as i128, x.b as i128, x.c as i128);
        let b2d = checked((b * b).checked_mul(self.d as i128))?;
        let denominator = checked(b2d.checked_sub(a * a))?;
        QuadraticSurd::reduce(-a * c, b * c, denominator, self.d)
    }

    fn multiply(&self, x: &QuadraticSurd, y: &QuadraticSurd) -> Result<QuadraticSurd> {
        self.check(x)?;
        self.check(y)?;
        let (xa, xb, xc) = (x.a as i128, x.b as i128, x.c as i128);
        let (ya, yb, yc) = (y.a as i128, y.b as i128, y.c as i128);
        let surd_part = checked((xb * yb).checked_mul(self.d as i128))?;
        let rational = checked((xa * ya).checked_add(surd_part))?;
        let coefficient = checked((xa * yb).checked_add(ya * xb))?;
        QuadraticSurd::reduce(rational, coefficient, xc * yc, self.d)
    }
}
