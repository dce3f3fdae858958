//! Systematic generator and parity-check matrices.
//!
//! A `k × n` generator matrix is systematic when it has the shape
//! `G = [I_k | P]`: the first `k` bits of every codeword are the data bits
//! verbatim and the remaining `r = n - k` bits are parity. Any generator whose
//! leading `k × k` block is invertible over GF(2) spans the same code as a
//! systematic one, which [`to_systematic`] finds by Gauss-Jordan elimination.
//! The parity-check matrix then follows directly as `H = [Pᵗ | I_r]`, and
//! satisfies `H · Gᵗ = 0` by construction.

use crate::cs::ecc::gf2::{hconcat, transpose, Matrix};
use crate::cs::ecc::Result;
use crate::error::Error;
use log::trace;

/// Row-reduces a generator matrix over GF(2) until its leading `k × k` block
/// is the identity.
///
/// Row swaps and row additions do not change the row space, so the result
/// generates the same code as `source`.
///
/// # Errors
///
/// * [`Error::InvalidInput`] if `source` has no parity columns (`n <= k`)
/// * [`Error::SingularGenerator`] if the leading block is not invertible
pub fn to_systematic(source: &Matrix) -> Result<Matrix> {
    let (k, n) = source.shape();
    if n <= k {
        return Err(Error::InvalidInput(format!(
            "Generator matrix must have more columns than rows, got {}x{}",
            k, n
        )));
    }

    let mut g = source.clone();
    for col in 0..k {
        let pivot = (col..k)
            .find(|&row| g.get(row, col))
            .ok_or(Error::SingularGenerator { column: col })?;

        if pivot != col {
            trace!("swapping rows {} and {} to pivot column {}", pivot, col, col);
            g.swap_rows(pivot, col);
        }

        // Clear the pivot column everywhere else, above and below
        for row in 0..k {
            if row != col && g.get(row, col) {
                g.xor_row_into(row, col)?;
            }
        }
    }

    Ok(g)
}

/// True if `g` has the shape `[I_k | P]` with at least one parity column
pub fn is_systematic(g: &Matrix) -> bool {
    let (k, n) = g.shape();
    n > k
        && g
            .block(0..k, 0..k)
            .map(|lead| lead.is_identity())
            .unwrap_or(false)
}

/// Derives the parity-check matrix `H = [Pᵗ | I_r]` from `G = [I_k | P]`.
///
/// # Errors
///
/// [`Error::NotSystematic`] if `g` is not in systematic form.
pub fn derive_parity_check(g: &Matrix) -> Result<Matrix> {
    if !is_systematic(g) {
        return Err(Error::NotSystematic);
    }

    let (k, n) = g.shape();
    let p = g.block(0..k, k..n)?;
    hconcat(&transpose(&p), &Matrix::identity(n - k))
}

/// Reduces `source` and derives both matrices, returning `(G, H)`
pub fn derive(source: &Matrix) -> Result<(Matrix, Matrix)> {
    let g = to_systematic(source)?;
    let h = derive_parity_check(&g)?;
    Ok((g, h))
}
