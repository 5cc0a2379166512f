//! Pairwise boolean algebra over bitsets of equal length.
//!
//! Each operation borrows both operands, leaves them untouched, and returns a
//! freshly allocated [`Bitset`]. Operands of different lengths are rejected
//! with [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch)
//! before any result is allocated.

use crate::bitset::Bitset;
use crate::bitwise::zip_with;
use crate::error::Result;

/// Bitwise AND: bit `i` is set iff it is set in both operands.
///
/// # Errors
///
/// Returns [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch)
/// if the operands differ in length.
///
/// # Example
///
/// ```
/// use bitset::{Bitset, and};
///
/// let left = Bitset::parse("1010").unwrap();
/// let right = Bitset::parse("0110").unwrap();
/// assert_eq!(and(&left, &right).unwrap().to_string(), "0010");
/// ```
pub fn and(bitset1: &Bitset, bitset2: &Bitset) -> Result<Bitset> {
    zip_with(bitset1.as_slice(), bitset2.as_slice(), |a, b| a && b).map(Bitset::from)
}

/// Bitwise OR: bit `i` is set iff it is set in at least one operand.
///
/// # Errors
///
/// Returns [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch)
/// if the operands differ in length.
///
/// # Example
///
/// ```
/// use bitset::{Bitset, or};
///
/// let left = Bitset::parse("1010").unwrap();
/// let right = Bitset::parse("0110").unwrap();
/// assert_eq!(or(&left, &right).unwrap().to_string(), "1110");
/// ```
pub fn or(bitset1: &Bitset, bitset2: &Bitset) -> Result<Bitset> {
    zip_with(bitset1.as_slice(), bitset2.as_slice(), |a, b| a || b).map(Bitset::from)
}

/// Bitwise XOR: bit `i` is set iff the operands differ at `i`.
///
/// # Errors
///
/// Returns [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch)
/// if the operands differ in length.
///
/// # Example
///
/// ```
/// use bitset::{Bitset, BitsetError, xor};
///
/// let left = Bitset::parse("1010").unwrap();
/// let right = Bitset::parse("0110").unwrap();
/// assert_eq!(xor(&left, &right).unwrap().to_string(), "1100");
///
/// assert_eq!(
///     xor(&left, &Bitset::zeros(3)),
///     Err(BitsetError::LengthMismatch { left: 4, right: 3 })
/// );
/// ```
pub fn xor(bitset1: &Bitset, bitset2: &Bitset) -> Result<Bitset> {
    zip_with(bitset1.as_slice(), bitset2.as_slice(), |a, b| a != b).map(Bitset::from)
}

impl Bitset {
    /// Method form of [`and`].
    ///
    /// # Errors
    ///
    /// See [`and`].
    pub fn and(&self, other: &Bitset) -> Result<Bitset> {
        and(self, other)
    }

    /// Method form of [`or`].
    ///
    /// # Errors
    ///
    /// See [`or`].
    pub fn or(&self, other: &Bitset) -> Result<Bitset> {
        or(self, other)
    }

    /// Method form of [`xor`].
    ///
    /// # Errors
    ///
    /// See [`xor`].
    pub fn xor(&self, other: &Bitset) -> Result<Bitset> {
        xor(self, other)
    }
}
