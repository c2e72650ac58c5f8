//! Reed-Solomon Error Correction Module
//!
//! Generic Reed-Solomon coding over any [`Field`](crate::field::Field).
//! Encoding appends `ecc_len` check symbols (placed *before* the message);
//! decoding corrects up to `⌊ecc_len / 2⌋` corrupted symbols by solving the
//! error-locator and error-magnitude systems with the
//! [`Matrix`](crate::matrix::Matrix) engine.

pub mod codec;
pub mod error;
pub mod polynomial;

pub use codec::*;
pub use error::*;
