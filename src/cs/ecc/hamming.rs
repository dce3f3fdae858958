//! Extended Hamming(10,6) SECDED code.
//!
//! Hamming codes are linear error-correcting codes developed by Richard
//! Hamming in 1950. A Hamming code corrects any single bit error; appending
//! one overall parity bit (the "extended" code) additionally detects any
//! double bit error. This combination is known as SECDED: single error
//! correction, double error detection.
//!
//! This implementation encodes 6 data bits into 10 bits with 4 parity bits,
//! plus the overall parity bit, for 11 transmitted bits:
//!
//! ```text
//! | d0 d1 d2 d3 d4 d5 | p0 p1 p2 p3 | overall |
//! ```
//!
//! The generator matrix `G` and parity-check matrix `H` are derived once, at
//! construction, from the fixed non-systematic source matrix
//! [`GENERATOR_SOURCE`]. Decoding classifies every received word as
//! [`DecodeStatus::Valid`], [`DecodeStatus::Corrected`] or
//! [`DecodeStatus::Uncorrectable`].
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Low-rate telemetry and control links
//! - Bit transmission over noisy physical channels

use crate::cs::ecc::gf2::{transpose, vec_mul_matrix, Matrix, Vector};
use crate::cs::ecc::systematic;
use crate::cs::ecc::{BlockCode, Result};
use crate::error::Error;
use log::{debug, trace, warn};
use std::fmt;

/// Number of data bits per block (k)
pub const DATA_BITS: usize = 6;
/// Number of parity bits per block (r)
pub const PARITY_BITS: usize = 4;
/// Length of the systematic codeword core (n = k + r)
pub const CODE_BITS: usize = DATA_BITS + PARITY_BITS;
/// Length of a transmitted codeword including the overall parity bit
pub const TOTAL_BITS: usize = CODE_BITS + 1;

/// Non-systematic generator matrix `G'` the codec is built from
pub const GENERATOR_SOURCE: [[u8; CODE_BITS]; DATA_BITS] = [
    [0, 0, 0, 1, 0, 1, 0, 0, 1, 0],
    [0, 0, 1, 0, 0, 1, 1, 1, 1, 0],
    [1, 0, 1, 0, 1, 0, 1, 0, 0, 1],
    [1, 1, 0, 1, 0, 1, 0, 0, 0, 1],
    [1, 1, 1, 0, 1, 0, 0, 1, 0, 0],
    [1, 1, 0, 0, 0, 1, 0, 1, 1, 0],
];

/// Classification of a received codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStatus {
    /// No error detected
    Valid,
    /// A single bit error was detected and repaired
    Corrected,
    /// Errors were detected that cannot be repaired
    Uncorrectable,
}

impl DecodeStatus {
    /// Short status code: `OK`, `FIXED` or `ERROR`
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeStatus::Valid => "OK",
            DecodeStatus::Corrected => "FIXED",
            DecodeStatus::Uncorrectable => "ERROR",
        }
    }
}

impl fmt::Display for DecodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of decoding one codeword: the recovered data word, if any, and
/// the status. Data is present unless the status is `Uncorrectable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome {
    data: Option<Vector>,
    status: DecodeStatus,
}

impl DecodeOutcome {
    fn valid(data: Vector) -> Self {
        DecodeOutcome {
            data: Some(data),
            status: DecodeStatus::Valid,
        }
    }

    fn corrected(data: Vector) -> Self {
        DecodeOutcome {
            data: Some(data),
            status: DecodeStatus::Corrected,
        }
    }

    fn uncorrectable() -> Self {
        DecodeOutcome {
            data: None,
            status: DecodeStatus::Uncorrectable,
        }
    }

    pub fn data(&self) -> Option<&Vector> {
        self.data.as_ref()
    }

    pub fn status(&self) -> DecodeStatus {
        self.status
    }

    /// True if data was recovered, with or without correction
    pub fn is_ok(&self) -> bool {
        self.status != DecodeStatus::Uncorrectable
    }

    pub fn into_data(self) -> Option<Vector> {
        self.data
    }

    pub fn into_parts(self) -> (Option<Vector>, DecodeStatus) {
        (self.data, self.status)
    }
}

/// Extended Hamming(10,6) encoder and syndrome decoder.
///
/// `G` and `H` are immutable once built, so a single instance can be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct HammingCode {
    /// Systematic generator matrix `[I_6 | P]`, 6 × 10
    generator: Matrix,
    /// Parity-check matrix `[Pᵗ | I_4]`, 4 × 10
    parity_check: Matrix,
    /// `Hᵗ`, kept for syndrome computation as a row-vector product
    parity_check_t: Matrix,
}

impl HammingCode {
    /// Creates the codec from [`GENERATOR_SOURCE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use secded::cs::ecc::hamming::{HammingCode, DATA_BITS};
    ///
    /// let code = HammingCode::new().unwrap();
    /// assert!(code.generator().block(0..DATA_BITS, 0..DATA_BITS).unwrap().is_identity());
    /// ```
    pub fn new() -> Result<Self> {
        let source = Matrix::from_rows(&GENERATOR_SOURCE)?;
        Self::with_generator(&source)
    }

    /// Creates the codec from another `6 × 10` non-systematic generator.
    ///
    /// # Errors
    ///
    /// * [`Error::DimensionMismatch`] if `source` is not `6 × 10`
    /// * [`Error::SingularGenerator`] if its leading `6 × 6` block is not
    ///   invertible over GF(2)
    pub fn with_generator(source: &Matrix) -> Result<Self> {
        if source.rows() != DATA_BITS {
            return Err(Error::DimensionMismatch {
                op: "generator rows",
                expected: DATA_BITS,
                actual: source.rows(),
            });
        }
        if source.cols() != CODE_BITS {
            return Err(Error::DimensionMismatch {
                op: "generator cols",
                expected: CODE_BITS,
                actual: source.cols(),
            });
        }

        let (generator, parity_check) = systematic::derive(source)?;
        debug!(
            "derived Hamming({},{}) matrices\nG =\n{}\nH =\n{}",
            CODE_BITS, DATA_BITS, generator, parity_check
        );

        let parity_check_t = transpose(&parity_check);
        Ok(HammingCode {
            generator,
            parity_check,
            parity_check_t,
        })
    }

    /// Systematic generator matrix `G`
    pub fn generator(&self) -> &Matrix {
        &self.generator
    }

    /// Parity-check matrix `H`
    pub fn parity_check(&self) -> &Matrix {
        &self.parity_check
    }

    pub fn data_bits(&self) -> usize {
        DATA_BITS
    }

    pub fn parity_bits(&self) -> usize {
        PARITY_BITS
    }

    pub fn code_bits(&self) -> usize {
        CODE_BITS
    }

    pub fn total_bits(&self) -> usize {
        TOTAL_BITS
    }

    /// Encodes a 6-bit data word into an 11-bit codeword.
    ///
    /// # Examples
    ///
    /// ```
    /// use secded::cs::ecc::{HammingCode, Vector};
    ///
    /// let code = HammingCode::new().unwrap();
    /// let word = Vector::from_bits(&[0, 1, 1, 0, 1, 1]).unwrap();
    /// assert_eq!(code.encode(&word).unwrap().to_string(), "01101111110");
    /// ```
    pub fn encode(&self, word: &Vector) -> Result<Vector> {
        check_word_len(word, DATA_BITS)?;

        let mut codeword = vec_mul_matrix(word, &self.generator)?;
        let overall = codeword.parity();
        codeword.push(overall);
        Ok(codeword)
    }

    /// Decodes an 11-bit codeword, correcting a single bit error if present.
    ///
    /// Only a wrong-length input is an error; every well-formed word yields
    /// an outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use secded::cs::ecc::{DecodeStatus, HammingCode, Vector};
    ///
    /// let code = HammingCode::new().unwrap();
    /// let received = Vector::from_bits(&[0, 1, 0, 0, 1, 1, 1, 1, 1, 1, 0]).unwrap();
    ///
    /// let outcome = code.decode(&received).unwrap();
    /// assert_eq!(outcome.status(), DecodeStatus::Corrected);
    /// assert_eq!(outcome.data().unwrap().to_string(), "011011");
    /// ```
    pub fn decode(&self, codeword: &Vector) -> Result<DecodeOutcome> {
        check_word_len(codeword, TOTAL_BITS)?;

        let overall_ok = !codeword.parity();
        let mut core = codeword.slice(0..CODE_BITS)?;
        let syndrome = vec_mul_matrix(&core, &self.parity_check_t)?;
        trace!(
            "decoding {}: syndrome {}, overall parity {}",
            codeword,
            syndrome,
            if overall_ok { "even" } else { "odd" }
        );

        let outcome = match (overall_ok, syndrome.is_zero()) {
            (true, true) => DecodeOutcome::valid(core.slice(0..DATA_BITS)?),
            // Only the overall parity bit itself was hit
            (false, true) => DecodeOutcome::corrected(core.slice(0..DATA_BITS)?),
            // Even number of errors, canonically two
            (true, false) => DecodeOutcome::uncorrectable(),
            (false, false) => {
                let matches = self.matching_columns(&syndrome)?;
                let mut hits = matches.iter_ones();
                match (hits.next(), hits.next()) {
                    (Some(position), None) => {
                        trace!("correcting bit {}", position);
                        core.flip(position);
                        DecodeOutcome::corrected(core.slice(0..DATA_BITS)?)
                    }
                    _ => {
                        warn!(
                            "syndrome {} matches {} columns of H, reporting uncorrectable",
                            syndrome,
                            matches.weight()
                        );
                        DecodeOutcome::uncorrectable()
                    }
                }
            }
        };

        trace!("decoded {} as {}", codeword, outcome.status());
        Ok(outcome)
    }

    /// Bitmask over the columns of `H`; a set bit marks a column equal to
    /// `syndrome`.
    ///
    /// Starting from all ones, each row of `H` is ANDed in as is where the
    /// syndrome bit is 1 and complemented where it is 0.
    fn matching_columns(&self, syndrome: &Vector) -> Result<Vector> {
        check_word_len(syndrome, self.parity_check.rows())?;

        let mut mask = Vector::ones(self.parity_check.cols());
        for (row, bit) in self.parity_check.iter_rows().zip(syndrome.iter()) {
            mask = if bit {
                mask.and(row)?
            } else {
                mask.and(&row.complement())?
            };
        }
        Ok(mask)
    }

    /// Syndrome `H · xᵗ` of a 10-bit core or an 11-bit codeword.
    ///
    /// The overall parity bit of an 11-bit codeword is ignored.
    pub fn syndrome(&self, word: &Vector) -> Result<Vector> {
        if word.len() != CODE_BITS {
            check_word_len(word, TOTAL_BITS)?;
        }
        let core = word.slice(0..CODE_BITS)?;
        vec_mul_matrix(&core, &self.parity_check_t)
    }

    /// The syndrome as an integer, with syndrome bit `i` weighted `2^i`
    pub fn syndrome_index(&self, word: &Vector) -> Result<usize> {
        Ok(self.syndrome(word)?.iter_ones().map(|i| 1 << i).sum())
    }

    /// True if `codeword` has a zero syndrome and even overall parity
    pub fn is_codeword(&self, codeword: &Vector) -> Result<bool> {
        check_word_len(codeword, TOTAL_BITS)?;
        Ok(!codeword.parity() && self.syndrome(codeword)?.is_zero())
    }

    /// [`HammingCode::encode`] over 0/1 byte literals
    pub fn encode_bits(&self, word: &[u8]) -> Result<Vec<u8>> {
        Ok(self.encode(&Vector::from_bits(word)?)?.to_bits())
    }

    /// [`HammingCode::decode`] over 0/1 byte literals
    pub fn decode_bits(&self, codeword: &[u8]) -> Result<(Option<Vec<u8>>, DecodeStatus)> {
        let (data, status) = self.decode(&Vector::from_bits(codeword)?)?.into_parts();
        Ok((data.map(|word| word.to_bits()), status))
    }
}

impl BlockCode for HammingCode {
    fn data_len(&self) -> usize {
        DATA_BITS
    }

    fn codeword_len(&self) -> usize {
        TOTAL_BITS
    }

    fn encode(&self, word: &Vector) -> Result<Vector> {
        HammingCode::encode(self, word)
    }

    fn decode(&self, codeword: &Vector) -> Result<DecodeOutcome> {
        HammingCode::decode(self, codeword)
    }
}

fn check_word_len(word: &Vector, expected: usize) -> Result<()> {
    if word.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: word.len(),
        });
    }
    Ok(())
}
