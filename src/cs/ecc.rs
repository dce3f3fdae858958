//! Error correction code implementations.
//!
//! This module provides an extended Hamming(10,6) SECDED code together with
//! the GF(2) linear algebra it is built on:
//! - [`gf2`]: dimension-carrying bit vectors and matrices
//! - [`systematic`]: reduction of a generator matrix to `[I_k | P]` form and
//!   derivation of the matching parity-check matrix
//! - [`hamming`]: the encoder and syndrome decoder
//!
//! # Examples
//!
//! ```rust
//! use secded::cs::ecc::{DecodeStatus, HammingCode, Vector};
//!
//! let code = HammingCode::new().unwrap();
//! let word = Vector::from_bits(&[0, 1, 1, 0, 1, 1]).unwrap();
//!
//! let mut received = code.encode(&word).unwrap();
//! received.flip(4);
//!
//! let outcome = code.decode(&received).unwrap();
//! assert_eq!(outcome.status(), DecodeStatus::Corrected);
//! assert_eq!(outcome.data(), Some(&word));
//! ```

use crate::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for block codes mapping fixed-size data words to fixed-size codewords
pub trait BlockCode {
    /// Number of data bits per block
    fn data_len(&self) -> usize;

    /// Number of bits in a transmitted codeword
    fn codeword_len(&self) -> usize;

    /// Encode one data word into a codeword
    fn encode(&self, word: &Vector) -> Result<Vector>;

    /// Decode one received codeword, correcting errors where possible
    fn decode(&self, codeword: &Vector) -> Result<DecodeOutcome>;
}

/// GF(2) vectors and matrices
pub mod gf2;
pub use gf2::{dot, hconcat, mat_mul, row_xor, transpose, vec_mul_matrix, Matrix, Vector};

/// Systematic generator and parity-check derivation
pub mod systematic;
pub use systematic::{derive_parity_check, is_systematic, to_systematic};

/// Extended Hamming(10,6) SECDED code
pub mod hamming;
pub use hamming::{DecodeOutcome, DecodeStatus, HammingCode};
