//! Error types shared by the GF(2) algebra and the codec built on top of it.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by matrix algebra, code construction and codec calls.
///
/// Decoding outcomes such as a corrected or uncorrectable word are not
/// errors; see [`crate::cs::ecc::DecodeStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Operands of a GF(2) operation have incompatible shapes
    #[error("dimension mismatch in {op}: expected {expected}, got {actual}")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A data word or codeword of the wrong length was passed to the codec
    #[error("invalid word length: expected {expected} bits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The leading square block of a generator matrix is not invertible over GF(2)
    #[error("generator matrix is singular: no pivot for column {column}")]
    SingularGenerator { column: usize },

    /// A parity-check matrix was requested from a generator not in `[I | P]` form
    #[error("generator matrix is not in systematic form")]
    NotSystematic,

    /// A bit literal held something other than 0 or 1
    #[error("invalid bit value {value} at index {index}")]
    InvalidBit { index: usize, value: u8 },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
