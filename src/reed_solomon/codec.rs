//! Reed-Solomon encoder/decoder generic over a [`Field`]
//!
//! ## Codeword layout
//!
//! A codeword is `ecc_len` check symbols followed by the `message_len`
//! message symbols, read as a polynomial with the constant term first. Every
//! valid codeword is a multiple of the generator polynomial
//! `∏ (x − gⁱ)` for `i` in `0..ecc_len`.
//!
//! ## Decoding
//!
//! Instead of Berlekamp-Massey, decoding solves two linear systems with the
//! [`Matrix`] engine:
//!
//! 1. syndromes `Sᵢ = c(gⁱ)`; all zero means the codeword is intact
//! 2. error-locator coefficients from the Hankel system of syndromes
//! 3. error positions by brute-force root search at `g⁻ⁱ`
//! 4. error magnitudes from the Vandermonde system of located positions
//! 5. subtract magnitudes and re-check syndromes

use super::error::{DecodeOutcome, RsError, RsResult, UncorrectableReason};
use super::polynomial::{evaluate, generator_polynomial};
use crate::field::Field;
use crate::matrix::Matrix;
use log::{debug, error, trace, warn};

/// Reed-Solomon codec over field `F`
///
/// Immutable after construction; encode and decode allocate their own
/// working state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct ReedSolomon<F: Field> {
    field: F,
    generator: F::Elem,
    message_len: usize,
    ecc_len: usize,
    /// Generator polynomial, `ecc_len + 1` coefficients, constant term first
    generator_poly: Vec<F::Elem>,
}

impl<F: Field> ReedSolomon<F> {
    /// Create a codec for `message_len` message symbols protected by
    /// `ecc_len` check symbols.
    ///
    /// `generator` should be a primitive element of `field`; this is not
    /// verified, but a non-primitive generator can make distinct codeword
    /// positions indistinguishable.
    pub fn new(
        field: F,
        generator: F::Elem,
        message_len: usize,
        ecc_len: usize,
    ) -> RsResult<Self> {
        if message_len == 0 || ecc_len == 0 {
            return Err(RsError::InvalidConfiguration(format!(
                "message and ECC lengths must be positive, got {message_len} and {ecc_len}"
            )));
        }
        if message_len.checked_add(ecc_len).is_none() {
            return Err(RsError::InvalidConfiguration(format!(
                "codeword length {message_len} + {ecc_len} overflows"
            )));
        }
        if field.is_zero(&generator)? {
            return Err(RsError::InvalidConfiguration(
                "generator must be non-zero".to_string(),
            ));
        }
        let generator_poly = generator_polynomial(&field, &generator, ecc_len)?;
        Ok(Self {
            field,
            generator,
            message_len,
            ecc_len,
            generator_poly,
        })
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn generator(&self) -> &F::Elem {
        &self.generator
    }

    pub fn message_len(&self) -> usize {
        self.message_len
    }

    pub fn ecc_len(&self) -> usize {
        self.ecc_len
    }

    pub fn codeword_len(&self) -> usize {
        self.message_len + self.ecc_len
    }

    /// Default correction capacity, `⌊ecc_len / 2⌋`
    pub fn max_errors(&self) -> usize {
        self.ecc_len / 2
    }

    /// Encode `message` into `ecc ++ message`.
    pub fn encode(&self, message: &[F::Elem]) -> RsResult<Vec<F::Elem>> {
        if message.len() != self.message_len {
            return Err(RsError::InvalidLength {
                what: "message",
                expected: self.message_len,
                actual: message.len(),
            });
        }

        let field = &self.field;
        let ecc_len = self.ecc_len;
        let mut remainder = vec![field.zero(); ecc_len];

        // Shift-register division by the generator polynomial
        for symbol in message.iter().rev() {
            let factor = field.add(symbol, &remainder[ecc_len - 1])?;
            remainder.rotate_right(1);
            remainder[0] = field.zero();
            for (value, coefficient) in remainder.iter_mut().zip(&self.generator_poly) {
                let product = field.multiply(coefficient, &factor)?;
                *value = field.subtract(value, &product)?;
            }
        }

        let mut codeword = Vec::with_capacity(self.codeword_len());
        for value in &remainder {
            codeword.push(field.negate(value)?);
        }
        codeword.extend_from_slice(message);
        Ok(codeword)
    }

    /// Decode with the default correction capacity `⌊ecc_len / 2⌋`.
    pub fn decode(&self, codeword: &[F::Elem]) -> RsResult<DecodeOutcome<F::Elem>> {
        self.decode_with(codeword, self.max_errors())
    }

    /// Decode, correcting at most `errors_to_correct` symbol errors.
    ///
    /// # Errors
    /// Hard failures only: wrong codeword length, `errors_to_correct` above
    /// `⌊ecc_len / 2⌋`, or symbols outside the field. Excess corruption is
    /// reported as [`DecodeOutcome::Uncorrectable`].
    pub fn decode_with(
        &self,
        codeword: &[F::Elem],
        errors_to_correct: usize,
    ) -> RsResult<DecodeOutcome<F::Elem>> {
        if codeword.len() != self.codeword_len() {
            return Err(RsError::InvalidLength {
                what: "codeword",
                expected: self.codeword_len(),
                actual: codeword.len(),
            });
        }
        if errors_to_correct > self.max_errors() {
            return Err(RsError::ErrorsToCorrectOutOfRange {
                requested: errors_to_correct,
                max: self.max_errors(),
            });
        }

        let syndromes = self.syndromes(codeword)?;
        if self.all_zero(&syndromes)? {
            trace!("Codeword consistent, no correction needed");
            return Ok(DecodeOutcome::Decoded(codeword[self.ecc_len..].to_vec()));
        }
        debug!("Non-zero syndromes: {:?}", syndromes);

        if errors_to_correct == 0 {
            return Ok(self.uncorrectable(UncorrectableReason::NoCorrectionCapacity));
        }

        let Some(locator) = self.error_locator_polynomial(&syndromes, errors_to_correct)? else {
            return Ok(self.uncorrectable(UncorrectableReason::InconsistentLocatorSystem));
        };
        debug!("Error-locator polynomial: {:?}", locator);

        let locations = self.find_error_locations(&locator)?;
        if locations.is_empty() {
            return Ok(self.uncorrectable(UncorrectableReason::NoErrorLocations));
        }
        if locations.len() > errors_to_correct {
            return Ok(self.uncorrectable(UncorrectableReason::TooManyErrorLocations {
                found: locations.len(),
                max: errors_to_correct,
            }));
        }
        debug!("Error locations: {:?}", locations);

        let Some(magnitudes) = self.error_magnitudes(&locations, &syndromes)? else {
            return Ok(self.uncorrectable(UncorrectableReason::InconsistentMagnitudeSystem));
        };
        debug!("Error magnitudes: {:?}", magnitudes);

        let mut corrected = codeword.to_vec();
        for (&location, magnitude) in locations.iter().zip(&magnitudes) {
            corrected[location] = self.field.subtract(&corrected[location], magnitude)?;
        }

        let residual = self.syndromes(&corrected)?;
        if !self.all_zero(&residual)? {
            error!(
                "Syndromes still non-zero after correcting {} errors: {:?}",
                locations.len(),
                residual
            );
            return Ok(DecodeOutcome::InvariantViolation {
                residual_syndromes: residual,
            });
        }

        debug!("Corrected {} symbol errors", locations.len());
        Ok(DecodeOutcome::Decoded(corrected.split_off(self.ecc_len)))
    }

    /// `Sᵢ = codeword(gⁱ)` for `i` in `0..ecc_len`.
    pub fn syndromes(&self, codeword: &[F::Elem]) -> RsResult<Vec<F::Elem>> {
        let field = &self.field;
        let mut syndromes = Vec::with_capacity(self.ecc_len);
        let mut genpow = field.one();
        for _ in 0..self.ecc_len {
            syndromes.push(evaluate(field, codeword, &genpow)?);
            genpow = field.multiply(&self.generator, &genpow)?;
        }
        Ok(syndromes)
    }

    /// Solve for the error-locator polynomial `Λ(x) = 1 + Λ₁x + … + Λₜxᵗ`.
    ///
    /// Row `r` of the `t x (t+1)` augmented system is
    /// `[S_r … S_{r+t-1} | −S_{r+t}]`; column `c` carries `Λ_{t−c}`. Free
    /// variables of an underdetermined system are taken as zero. Returns
    /// `None` if the system is inconsistent.
    pub fn error_locator_polynomial(
        &self,
        syndromes: &[F::Elem],
        errors_to_correct: usize,
    ) -> RsResult<Option<Vec<F::Elem>>> {
        let field = &self.field;
        let t = errors_to_correct;
        let mut matrix = Matrix::new(t, t + 1, field)?;
        for r in 0..t {
            for c in 0..=t {
                let value = syndromes.get(r + c).cloned().unwrap_or_else(|| field.zero());
                let value = if c == t { field.negate(&value)? } else { value };
                matrix.set(r, c, value);
            }
        }
        matrix.reduced_row_echelon_form()?;

        let mut result = vec![field.zero(); t + 1];
        result[0] = field.one();
        for row in 0..t {
            let mut col = 0;
            while col < t && field.is_zero(matrix.get(row, col))? {
                col += 1;
            }
            if col == t {
                // 0 = nonzero
                if !field.is_zero(matrix.get(row, t))? {
                    return Ok(None);
                }
            } else {
                result[t - col] = matrix.get(row, t).clone();
            }
        }
        Ok(Some(result))
    }

    /// Codeword positions `i` where `Λ(g⁻ⁱ) = 0`.
    fn find_error_locations(&self, locator: &[F::Elem]) -> RsResult<Vec<usize>> {
        let field = &self.field;
        let genrec = field.reciprocal(&self.generator)?;
        let mut genrecpow = field.one();
        let mut locations = Vec::new();
        for i in 0..self.codeword_len() {
            if field.is_zero(&evaluate(field, locator, &genrecpow)?)? {
                locations.push(i);
            }
            genrecpow = field.multiply(&genrec, &genrecpow)?;
        }
        Ok(locations)
    }

    /// Solve `Σ_c e_c · (g^{loc_c})ʳ = S_r` for the magnitudes `e_c`. Returns
    /// `None` if the reduced system is not `[I | e]` over zero rows.
    fn error_magnitudes(
        &self,
        locations: &[usize],
        syndromes: &[F::Elem],
    ) -> RsResult<Option<Vec<F::Elem>>> {
        let field = &self.field;
        let n = locations.len();
        let mut matrix = Matrix::new(self.ecc_len, n + 1, field)?;
        for (c, &location) in locations.iter().enumerate() {
            let genpow = field.pow(&self.generator, location as u64)?;
            let mut genpowpow = field.one();
            for r in 0..self.ecc_len {
                matrix.set(r, c, genpowpow.clone());
                genpowpow = field.multiply(&genpow, &genpowpow)?;
            }
        }
        for (r, syndrome) in syndromes.iter().enumerate() {
            matrix.set(r, n, syndrome.clone());
        }
        matrix.reduced_row_echelon_form()?;

        let mut magnitudes = Vec::with_capacity(n);
        for i in 0..n {
            if !field.equals(matrix.get(i, i), &field.one())? {
                return Ok(None);
            }
            magnitudes.push(matrix.get(i, n).clone());
        }
        for r in n..self.ecc_len {
            if !field.is_zero(matrix.get(r, n))? {
                return Ok(None);
            }
        }
        Ok(Some(magnitudes))
    }

    fn all_zero(&self, values: &[F::Elem]) -> RsResult<bool> {
        for value in values {
            if !self.field.is_zero(value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn uncorrectable(&self, reason: UncorrectableReason) -> DecodeOutcome<F::Elem> {
        warn!("Codeword uncorrectable: {}", reason);
        DecodeOutcome::Uncorrectable(reason)
    }
}
