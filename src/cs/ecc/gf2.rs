//! Linear algebra over GF(2).
//!
//! GF(2) is the two-element field {0, 1}: addition is XOR and multiplication
//! is AND. Block codes such as Hamming codes are linear subspaces of GF(2)^n,
//! so encoding, syndrome computation and the derivation of systematic
//! matrices all reduce to a handful of vector and matrix operations.
//!
//! [`Vector`] and [`Matrix`] carry their dimensions. Every operation checks
//! them up front and reports [`Error::DimensionMismatch`] instead of
//! truncating or reading out of range.

use crate::cs::ecc::Result;
use crate::error::Error;
use bitvec::prelude::*;
use std::fmt;
use std::ops::{Index, Range};

/// Backing storage for vectors and matrix rows
type Bits = BitVec<u8, Msb0>;

/// A fixed-length vector over GF(2)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vector {
    bits: Bits,
}

impl Vector {
    /// Creates an all-zero vector of the given length
    pub fn zeros(len: usize) -> Self {
        Vector {
            bits: bitvec![u8, Msb0; 0; len],
        }
    }

    /// Creates an all-one vector of the given length
    pub fn ones(len: usize) -> Self {
        Vector {
            bits: Bits::repeat(true, len),
        }
    }

    /// Creates a vector from 0/1 byte literals, e.g. `&[0, 1, 1, 0]`
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        bits.iter()
            .enumerate()
            .map(|(index, &value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(Error::InvalidBit { index, value }),
            })
            .collect()
    }

    /// Creates a vector of `len` bits from the low bits of `value`.
    ///
    /// The most significant of those bits lands at index 0, so
    /// `from_value(0b011011, 6)` is `011011`.
    pub fn from_value(value: u64, len: usize) -> Self {
        assert!(len <= 64, "a u64 holds at most 64 bits");
        (0..len).map(|i| (value >> (len - 1 - i)) & 1 == 1).collect()
    }

    /// Creates a vector from a bit slice
    pub fn from_bitslice(bits: &BitSlice<u8, Msb0>) -> Self {
        Vector {
            bits: bits.to_bitvec(),
        }
    }

    /// Returns the bits as 0/1 byte literals
    pub fn to_bits(&self) -> Vec<u8> {
        self.iter().map(u8::from).collect()
    }

    /// Inverse of [`Vector::from_value`]; index 0 is the most significant bit
    pub fn to_value(&self) -> u64 {
        self.iter().fold(0, |acc, bit| (acc << 1) | u64::from(bit))
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at `index`, or `None` if out of range
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    /// Sets the bit at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, value: bool) {
        self.bits.set(index, value);
    }

    /// Flips the bit at `index`, as a channel error would
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn flip(&mut self, index: usize) {
        let bit = self.bits[index];
        self.bits.set(index, !bit);
    }

    /// Appends a bit
    pub fn push(&mut self, value: bool) {
        self.bits.push(value);
    }

    /// Hamming weight (number of ones)
    pub fn weight(&self) -> usize {
        self.bits.count_ones()
    }

    /// Mod-2 sum of all bits
    pub fn parity(&self) -> bool {
        self.weight() % 2 == 1
    }

    pub fn is_zero(&self) -> bool {
        self.bits.not_any()
    }

    /// Indices of the set bits, in ascending order
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Copies out the bits in `range`
    pub fn slice(&self, range: Range<usize>) -> Result<Vector> {
        if range.start > range.end || range.end > self.len() {
            return Err(Error::DimensionMismatch {
                op: "slice",
                expected: range.end,
                actual: self.len(),
            });
        }
        Ok(Vector::from_bitslice(&self.bits[range]))
    }

    /// Element-wise AND
    pub fn and(&self, other: &Vector) -> Result<Vector> {
        check_len("and", self.len(), other.len())?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a & b).collect())
    }

    /// Bitwise complement
    pub fn complement(&self) -> Vector {
        self.iter().map(|bit| !bit).collect()
    }
}

impl FromIterator<bool> for Vector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Vector {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Vector {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.bits[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}

/// A row-major matrix over GF(2) with fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vector>,
    cols: usize,
}

impl Matrix {
    /// Creates an all-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows: vec![Vector::zeros(cols); rows],
            cols,
        }
    }

    /// Creates the `n × n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            m.set(i, i, true);
        }
        m
    }

    /// Creates a matrix from rows of 0/1 byte literals.
    ///
    /// All rows must have the same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let vectors = rows
            .iter()
            .map(|row| Vector::from_bits(row.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Matrix::from_vectors(vectors)
    }

    /// Creates a matrix from row vectors of equal length
    pub fn from_vectors(rows: Vec<Vector>) -> Result<Self> {
        let cols = match rows.first() {
            Some(first) => first.len(),
            None => {
                return Err(Error::InvalidInput(
                    "Matrix must have at least one row".to_string(),
                ))
            }
        };

        for row in rows.iter() {
            check_len("matrix row", cols, row.len())?;
        }

        Ok(Matrix { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols)
    }

    /// Returns row `i`
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn row(&self, i: usize) -> &Vector {
        &self.rows[i]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &Vector> + '_ {
        self.rows.iter()
    }

    /// Copies out column `j`
    ///
    /// # Panics
    ///
    /// Panics if `j` is out of range.
    pub fn column(&self, j: usize) -> Vector {
        assert!(j < self.cols, "column {} out of range", j);
        self.rows.iter().map(|row| row[j]).collect()
    }

    /// Returns the entry at row `i`, column `j`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.rows[i][j]
    }

    /// Sets the entry at row `i`, column `j`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        self.rows[i].set(j, value);
    }

    /// Swaps rows `a` and `b`
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// Replaces row `target` with `row(target) XOR row(source)`
    pub fn xor_row_into(&mut self, target: usize, source: usize) -> Result<()> {
        let sum = row_xor(&self.rows[target], &self.rows[source])?;
        self.rows[target] = sum;
        Ok(())
    }

    /// Copies out the block spanning `rows × cols`
    pub fn block(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Matrix> {
        if rows.start >= rows.end || rows.end > self.rows() {
            return Err(Error::DimensionMismatch {
                op: "block rows",
                expected: rows.end,
                actual: self.rows(),
            });
        }
        if cols.start >= cols.end || cols.end > self.cols {
            return Err(Error::DimensionMismatch {
                op: "block cols",
                expected: cols.end,
                actual: self.cols,
            });
        }

        let block = self.rows[rows]
            .iter()
            .map(|row| row.slice(cols.clone()))
            .collect::<Result<Vec<_>>>()?;
        Matrix::from_vectors(block)
    }

    /// True if the matrix is square with ones exactly on the diagonal
    pub fn is_identity(&self) -> bool {
        self.rows() == self.cols
            && self
                .rows
                .iter()
                .enumerate()
                .all(|(i, row)| row.weight() == 1 && row[i])
    }

    pub fn is_zero(&self) -> bool {
        self.rows.iter().all(Vector::is_zero)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

fn check_len(op: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch {
            op,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Returns the transpose `Mᵗ`
pub fn transpose(m: &Matrix) -> Matrix {
    Matrix {
        rows: (0..m.cols()).map(|j| m.column(j)).collect(),
        cols: m.rows(),
    }
}

/// Inner product `Σ uᵢvᵢ mod 2`
pub fn dot(u: &Vector, v: &Vector) -> Result<bool> {
    check_len("dot", u.len(), v.len())?;
    Ok(u.iter().zip(v.iter()).filter(|&(a, b)| a && b).count() % 2 == 1)
}

/// Element-wise mod-2 sum
pub fn row_xor(a: &Vector, b: &Vector) -> Result<Vector> {
    check_len("row_xor", a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}

/// Row vector times matrix: entry `j` is `dot(v, column_j(m))`
pub fn vec_mul_matrix(v: &Vector, m: &Matrix) -> Result<Vector> {
    check_len("vec_mul_matrix", m.rows(), v.len())?;

    // Sum of the rows of m selected by the ones of v
    let mut out = Vector::zeros(m.cols());
    for i in v.iter_ones() {
        for j in m.row(i).iter_ones() {
            out.flip(j);
        }
    }
    Ok(out)
}

/// Matrix product `a · b` over GF(2)
pub fn mat_mul(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_len("mat_mul", a.cols(), b.rows())?;
    let rows = a
        .iter_rows()
        .map(|row| vec_mul_matrix(row, b))
        .collect::<Result<Vec<_>>>()?;
    Ok(Matrix {
        rows,
        cols: b.cols(),
    })
}

/// Column-wise concatenation `[a | b]`
pub fn hconcat(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_len("hconcat", a.rows(), b.rows())?;
    let rows = a
        .iter_rows()
        .zip(b.iter_rows())
        .map(|(left, right)| left.iter().chain(right.iter()).collect::<Vector>())
        .collect();
    Ok(Matrix {
        rows,
        cols: a.cols() + b.cols(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(bits: &[u8]) -> Vector {
        Vector::from_bits(bits).unwrap()
    }

    #[test]
    fn test_vector_from_bits_rejects_non_binary() {
        assert_eq!(
            Vector::from_bits(&[0, 1, 2]),
            Err(Error::InvalidBit { index: 2, value: 2 })
        );
    }

    #[test]
    fn test_vector_value_conversions() {
        let word = Vector::from_value(0b011011, 6);
        assert_eq!(word.to_bits(), vec![0, 1, 1, 0, 1, 1]);
        assert_eq!(word.to_value(), 0b011011);
        assert_eq!(word.to_string(), "011011");
        assert_eq!(word.weight(), 4);
        assert!(!word.parity());
    }

    #[test]
    fn test_vector_flip_and_slice() {
        let mut word = v(&[1, 0, 1, 1]);
        word.flip(1);
        assert_eq!(word, v(&[1, 1, 1, 1]));
        assert_eq!(word.slice(1..3).unwrap(), v(&[1, 1]));
        assert!(word.slice(2..5).is_err());
        assert_eq!(word.get(4), None);
    }

    #[test]
    fn test_dot() {
        assert!(dot(&v(&[1, 1, 0]), &v(&[1, 0, 1])).unwrap());
        assert!(!dot(&v(&[1, 1, 0]), &v(&[1, 1, 1])).unwrap());
        assert!(matches!(
            dot(&v(&[1, 1]), &v(&[1, 1, 1])),
            Err(Error::DimensionMismatch { op: "dot", .. })
        ));
    }

    #[test]
    fn test_row_xor() {
        assert_eq!(
            row_xor(&v(&[1, 1, 0, 0]), &v(&[1, 0, 1, 0])).unwrap(),
            v(&[0, 1, 1, 0])
        );
        assert!(row_xor(&v(&[1]), &v(&[1, 0])).is_err());
    }

    #[test]
    fn test_and_and_complement() {
        let a = v(&[1, 1, 0, 0]);
        assert_eq!(a.and(&v(&[1, 0, 1, 0])).unwrap(), v(&[1, 0, 0, 0]));
        assert_eq!(a.complement(), v(&[0, 0, 1, 1]));
        assert_eq!(Vector::ones(3), v(&[1, 1, 1]));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows: [&[u8]; 2] = [&[1, 0, 1], &[1, 0]];
        assert_eq!(
            Matrix::from_rows(&rows),
            Err(Error::DimensionMismatch {
                op: "matrix row",
                expected: 3,
                actual: 2
            })
        );

        let empty: [&[u8]; 0] = [];
        assert!(matches!(
            Matrix::from_rows(&empty),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_rows(&[[1u8, 0, 1], [0, 1, 1]]).unwrap();
        let t = transpose(&m);
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t, Matrix::from_rows(&[[1u8, 0], [0, 1], [1, 1]]).unwrap());
        assert_eq!(transpose(&t), m);
    }

    #[test]
    fn test_vec_mul_matrix() {
        let m = Matrix::from_rows(&[[1u8, 0, 1], [0, 1, 1]]).unwrap();
        assert_eq!(vec_mul_matrix(&v(&[1, 1]), &m).unwrap(), v(&[1, 1, 0]));
        assert_eq!(vec_mul_matrix(&v(&[0, 1]), &m).unwrap(), v(&[0, 1, 1]));

        // Entry j matches dot(v, column j)
        let x = v(&[1, 1]);
        let product = vec_mul_matrix(&x, &m).unwrap();
        for j in 0..m.cols() {
            assert_eq!(product[j], dot(&x, &m.column(j)).unwrap());
        }

        assert!(matches!(
            vec_mul_matrix(&v(&[1, 1, 1]), &m),
            Err(Error::DimensionMismatch {
                op: "vec_mul_matrix",
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_mat_mul() {
        let a = Matrix::from_rows(&[[1u8, 1], [0, 1]]).unwrap();
        let b = Matrix::from_rows(&[[1u8, 0, 1], [1, 1, 0]]).unwrap();
        assert_eq!(
            mat_mul(&a, &b).unwrap(),
            Matrix::from_rows(&[[0u8, 1, 1], [1, 1, 0]]).unwrap()
        );
        assert_eq!(mat_mul(&Matrix::identity(2), &b).unwrap(), b);
        assert!(mat_mul(&b, &a).is_err());
    }

    #[test]
    fn test_hconcat_and_block() {
        let left = Matrix::from_rows(&[[1u8, 0], [0, 1]]).unwrap();
        let right = Matrix::from_rows(&[[1u8], [1]]).unwrap();
        let joined = hconcat(&left, &right).unwrap();
        assert_eq!(joined, Matrix::from_rows(&[[1u8, 0, 1], [0, 1, 1]]).unwrap());
        assert!(joined.block(0..2, 0..2).unwrap().is_identity());
        assert_eq!(joined.block(0..2, 2..3).unwrap(), right);
        assert!(joined.block(0..3, 0..1).is_err());

        let tall = Matrix::zeros(3, 1);
        assert!(hconcat(&left, &tall).is_err());
    }

    #[test]
    fn test_row_operations() {
        let mut m = Matrix::from_rows(&[[0u8, 1, 1], [1, 0, 1]]).unwrap();
        m.swap_rows(0, 1);
        assert_eq!(m.row(0), &v(&[1, 0, 1]));
        m.xor_row_into(1, 0).unwrap();
        assert_eq!(m.row(1), &v(&[1, 1, 0]));
        assert!(!m.is_zero());
        assert!(Matrix::zeros(2, 4).is_zero());
        assert_eq!(m.to_string(), "101\n110");
    }
}
