//! Property-based tests for Reed-Solomon error correction
//!
//! These tests use proptest to validate encoding and decoding with randomly
//! generated messages and corruption patterns, ensuring correctness across a
//! wide range of scenarios in both GF(2^8) and GF(1231).

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rsfield::field::binary::GF256_MODULUS;
use rsfield::field::{BinaryField, Field, PrimeField};
use rsfield::reed_solomon::{DecodeOutcome, ReedSolomon};

/// Add a random non-zero delta at `count` distinct random positions.
fn corrupt<F, R>(
    rs: &ReedSolomon<F>,
    codeword: &mut [F::Elem],
    count: usize,
    rng: &mut StdRng,
    random_nonzero: R,
) where
    F: Field,
    R: Fn(&mut StdRng) -> F::Elem,
{
    let positions = rand::seq::index::sample(rng, codeword.len(), count);
    for position in positions.iter() {
        let delta = random_nonzero(rng);
        codeword[position] = rs.field().add(&codeword[position], &delta).unwrap();
    }
}

proptest! {
    /// Property: decode(encode(m)) == m with no corruption
    #[test]
    fn prop_round_trip_gf256(
        message in prop::collection::vec(0u32..256, 1..40),
        ecc_len in 1usize..=12,
    ) {
        let field = BinaryField::new(GF256_MODULUS).unwrap();
        let rs = ReedSolomon::new(field, 2, message.len(), ecc_len).unwrap();
        let codeword = rs.encode(&message).unwrap();
        prop_assert_eq!(&codeword[ecc_len..], message.as_slice());
        prop_assert_eq!(rs.decode(&codeword).unwrap(), DecodeOutcome::Decoded(message));
    }

    /// Property: up to ⌊ecc/2⌋ errors are always corrected in GF(2^8)
    #[test]
    fn prop_corrects_up_to_capacity_gf256(
        message in prop::collection::vec(0u32..256, 1..30),
        ecc_len in 2usize..=10,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = BinaryField::new(GF256_MODULUS).unwrap();
        let rs = ReedSolomon::new(field, 2, message.len(), ecc_len).unwrap();
        let mut codeword = rs.encode(&message).unwrap();

        let errors = rng.random_range(0..=rs.max_errors());
        corrupt(&rs, &mut codeword, errors, &mut rng, |rng| rng.random_range(1..256));

        prop_assert_eq!(rs.decode(&codeword).unwrap(), DecodeOutcome::Decoded(message));
    }

    /// Property: up to ⌊ecc/2⌋ errors are always corrected in GF(1231)
    #[test]
    fn prop_corrects_up_to_capacity_prime(
        message in prop::collection::vec(0u64..1231, 1..30),
        ecc_len in 2usize..=10,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = PrimeField::new(1231).unwrap();
        let rs = ReedSolomon::new(field, 3, message.len(), ecc_len).unwrap();
        let mut codeword = rs.encode(&message).unwrap();

        let errors = rng.random_range(0..=rs.max_errors());
        corrupt(&rs, &mut codeword, errors, &mut rng, |rng| rng.random_range(1..1231));

        prop_assert_eq!(rs.decode(&codeword).unwrap(), DecodeOutcome::Decoded(message));
    }

    /// Property: beyond capacity the decoder either lands on a codeword within
    /// capacity or reports the codeword as uncorrectable
    #[test]
    fn prop_over_capacity_detected_or_nearby(
        message in prop::collection::vec(0u32..256, 4..20),
        ecc_len in 2usize..=8,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = BinaryField::new(GF256_MODULUS).unwrap();
        let rs = ReedSolomon::new(field, 2, message.len(), ecc_len).unwrap();
        let mut codeword = rs.encode(&message).unwrap();

        let errors = rng.random_range((rs.max_errors() + 1)..=ecc_len + 2);
        corrupt(&rs, &mut codeword, errors, &mut rng, |rng| rng.random_range(1..256));

        match rs.decode(&codeword).unwrap() {
            DecodeOutcome::Decoded(decoded) => {
                let reencoded = rs.encode(&decoded).unwrap();
                let distance = reencoded.iter().zip(&codeword).filter(|(x, y)| x != y).count();
                prop_assert!(distance <= rs.max_errors());
            }
            DecodeOutcome::Uncorrectable(_) => {}
            DecodeOutcome::InvariantViolation { residual_syndromes } => {
                prop_assert!(false, "invariant violated: {:?}", residual_syndromes);
            }
        }
    }

    /// Property: with zero capacity any corruption is reported, never corrected
    #[test]
    fn prop_zero_capacity_never_corrects(
        message in prop::collection::vec(0u64..1231, 1..20),
        ecc_len in 1usize..=8,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = PrimeField::new(1231).unwrap();
        let rs = ReedSolomon::new(field, 3, message.len(), ecc_len).unwrap();
        let mut codeword = rs.encode(&message).unwrap();
        // A single error always yields a non-zero syndrome
        corrupt(&rs, &mut codeword, 1, &mut rng, |rng| rng.random_range(1..1231));

        prop_assert!(matches!(
            rs.decode_with(&codeword, 0).unwrap(),
            DecodeOutcome::Uncorrectable(_)
        ));
    }
}
