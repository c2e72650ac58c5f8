//! Reed-Solomon error correction generic over finite fields
//!
//! - [`field`]: the [`Field`](field::Field) contract and its algebras
//! - [`matrix`]: Gaussian elimination, inversion and determinants over any field
//! - [`reed_solomon`]: the codec, decoding through linear-system solves

pub mod args;
pub mod field;
pub mod matrix;
pub mod reed_solomon;

pub use args::parse_args;
pub use field::Field;
pub use matrix::Matrix;
pub use reed_solomon::{DecodeOutcome, ReedSolomon, RsError, UncorrectableReason};
