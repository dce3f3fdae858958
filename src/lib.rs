//! Extended Hamming(10,6) SECDED codec.
//!
//! The codec derives a systematic generator and parity-check matrix from a
//! fixed non-systematic generator, encodes 6-bit data words into 11-bit
//! codewords and decodes received codewords, correcting single bit errors
//! and detecting double bit errors.

pub mod cs;
pub mod error;

pub use cs::ecc;
pub use cs::ecc::{BlockCode, DecodeOutcome, DecodeStatus, HammingCode, Matrix, Vector};
pub use error::{Error, Result};
