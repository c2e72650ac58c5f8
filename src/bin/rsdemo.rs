//! Reed-Solomon round-trip demonstration
//!
//! Maps each character of the message to a field element (its Unicode scalar
//! value), encodes, adds a random non-zero value to a number of randomly chosen
//! codeword positions, and reports what the decoder makes of it.

use anyhow::{bail, Context, Result};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rsfield::field::{BinaryField, Field, PrimeField};
use rsfield::reed_solomon::{DecodeOutcome, ReedSolomon};
use std::fmt::Debug;

struct DemoConfig {
    ecc_len: usize,
    corrupt: usize,
}

fn run<F, R>(
    field: F,
    generator: F::Elem,
    symbols: Vec<F::Elem>,
    config: &DemoConfig,
    rng: &mut StdRng,
    random_nonzero: R,
) -> Result<bool>
where
    F: Field,
    F::Elem: Debug + PartialEq + Into<u64>,
    R: Fn(&mut StdRng) -> F::Elem,
{
    let rs = ReedSolomon::new(field, generator, symbols.len(), config.ecc_len)
        .context("Failed to create codec")?;

    println!("Message symbols: {:?}", symbols);
    let mut codeword = rs.encode(&symbols).context("Failed to encode message")?;
    println!("Encoded codeword: {:?}", codeword);

    let count = config.corrupt.min(codeword.len());
    let positions = rand::seq::index::sample(rng, codeword.len(), count);
    for position in positions.iter() {
        let delta = random_nonzero(rng);
        codeword[position] = rs.field().add(&codeword[position], &delta)?;
    }
    println!("Corrupted {} positions: {:?}", count, positions.into_vec());
    println!("Corrupted codeword: {:?}", codeword);

    match rs.decode(&codeword)? {
        DecodeOutcome::Decoded(message) => {
            let text: String = message
                .iter()
                .map(|symbol| {
                    let code: u64 = symbol.clone().into();
                    u32::try_from(code)
                        .ok()
                        .and_then(char::from_u32)
                        .unwrap_or(char::REPLACEMENT_CHARACTER)
                })
                .collect();
            println!("Decoded message: {}", text);
            Ok(message == symbols)
        }
        DecodeOutcome::Uncorrectable(reason) => {
            println!("Decoding failed: {}", reason);
            Ok(false)
        }
        DecodeOutcome::InvariantViolation { residual_syndromes } => {
            bail!(
                "Decoder invariant violated, residual syndromes {:?}; is the generator primitive?",
                residual_syndromes
            )
        }
    }
}

fn main() -> Result<()> {
    let matches = rsfield::parse_args();

    let level = match matches.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let text = matches
        .get_one::<String>("message")
        .context("Message is required")?;
    if text.is_empty() {
        bail!("Message must not be empty");
    }
    let ecc_len = *matches
        .get_one::<usize>("ecc")
        .context("ECC length is required")?;
    let config = DemoConfig {
        ecc_len,
        corrupt: matches
            .get_one::<usize>("corrupt")
            .copied()
            .unwrap_or(ecc_len / 2),
    };
    let seed = matches
        .get_one::<u64>("seed")
        .copied()
        .unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    println!("Original message: {}", text);
    let recovered = match matches.get_one::<String>("field").map(String::as_str) {
        Some("binary") => {
            let modulus = matches.get_one::<u64>("modulus").copied().unwrap_or(0x11D);
            let modulus = u32::try_from(modulus).context("Binary modulus too large")?;
            let field = BinaryField::new(modulus)?;
            let generator = matches.get_one::<u64>("generator").copied().unwrap_or(2);
            let generator = u32::try_from(generator).context("Generator too large")?;
            let symbols = text.chars().map(u32::from).collect();
            let size = field.size();
            run(field, generator, symbols, &config, &mut rng, |rng| {
                rng.random_range(1..size)
            })?
        }
        _ => {
            let modulus = matches.get_one::<u64>("modulus").copied().unwrap_or(1231);
            let field = PrimeField::new(modulus)?;
            let generator = matches.get_one::<u64>("generator").copied().unwrap_or(3);
            let symbols = text.chars().map(|c| u64::from(u32::from(c))).collect();
            run(field, generator, symbols, &config, &mut rng, |rng| {
                rng.random_range(1..modulus)
            })?
        }
    };

    if recovered {
        println!("Message recovered (seed {})", seed);
        Ok(())
    } else {
        bail!("Message not recovered (seed {})", seed)
    }
}
