use sorted_iter::SortedIterator;
use std::fmt;
use std::str::FromStr;

use crate::bitwise::{Bitwise, BitwiseMut};
use crate::error::{BitsetError, Result};

/// A fixed-length, owned sequence of bits.
///
/// The length is chosen at construction and never changes afterwards. Bits are
/// addressed by a zero-based index; every index-taking method is checked and
/// returns [`BitsetError::IndexOutOfRange`] rather than panicking or wrapping.
///
/// # Construction
///
/// ```
/// use bitset::Bitset;
///
/// // All bits clear
/// let zeros = Bitset::zeros(8);
/// assert!(zeros.none());
///
/// // From the binary-string format, leftmost character is index 0
/// let parsed: Bitset = "0110".parse().unwrap();
/// assert_eq!(parsed.count(), 2);
///
/// // From an iterator
/// let collected: Bitset = [true, false, true].into_iter().collect();
/// assert_eq!(collected.to_string(), "101");
/// ```
///
/// # Mutation
///
/// ```
/// use bitset::Bitset;
///
/// let mut bits = Bitset::zeros(5);
/// bits.set(2).unwrap();
/// bits.set(4).unwrap();
/// assert_eq!(bits.count(), 2);
/// assert_eq!(bits.to_string(), "00101");
///
/// bits.not();
/// assert_eq!(bits.to_string(), "11010");
///
/// assert!(bits.flip(5).is_err());
/// ```
///
/// # See Also
///
/// - [`and`](crate::and), [`or`](crate::or), [`xor`](crate::xor) for pairwise combination
/// - [`Bitwise`], [`BitwiseMut`], [`BitwisePair`](crate::BitwisePair) for the trait view
#[must_use]
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitset {
    bits: Vec<bool>,
}

impl Bitset {
    /// Creates a bitset of `length` bits, all `false`.
    ///
    /// # Panics
    ///
    /// Panics if `length` exceeds `isize::MAX`, like `vec!`. Use
    /// [`try_with_length`](Bitset::try_with_length) for untrusted lengths.
    pub fn zeros(length: usize) -> Self {
        tracing::trace!(length, "creating bitset");
        Self {
            bits: vec![false; length],
        }
    }

    /// Creates a bitset of `length` bits, all `false`, from any integer type.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::InvalidArgument`] when `length` is negative, does
    /// not fit in `usize`, or cannot be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use bitset::{Bitset, BitsetError};
    ///
    /// assert_eq!(Bitset::try_with_length(3i64).unwrap().len(), 3);
    /// assert!(matches!(
    ///     Bitset::try_with_length(-1i32),
    ///     Err(BitsetError::InvalidArgument { .. })
    /// ));
    /// ```
    pub fn try_with_length<N>(length: N) -> Result<Self>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        let reject = || {
            tracing::debug!(%length, "rejected bitset length");
            BitsetError::InvalidArgument {
                value: length.to_string(),
            }
        };
        let bit_length: usize = length.try_into().map_err(|_| reject())?;
        let mut bits = Vec::new();
        bits.try_reserve_exact(bit_length).map_err(|_| reject())?;
        bits.resize(bit_length, false);
        Ok(Self::from(bits))
    }

    /// Parses the binary-string format: one `'0'` or `'1'` per bit, index 0 first.
    ///
    /// The empty string yields a zero-length bitset.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::Parse`] naming the first character that is not
    /// `'0'` or `'1'` and its position.
    ///
    /// # Example
    ///
    /// ```
    /// use bitset::{Bitset, BitsetError};
    ///
    /// let bits = Bitset::parse("1010").unwrap();
    /// assert_eq!(bits.len(), 4);
    /// assert_eq!(bits.get(0), Ok(true));
    ///
    /// assert_eq!(
    ///     Bitset::parse("10x1"),
    ///     Err(BitsetError::Parse { position: 2, character: 'x' })
    /// );
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let bits = text
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => {
                    tracing::debug!(position, ?character, "rejected binary string");
                    Err(BitsetError::Parse { position, character })
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from(bits))
    }

    /// Returns the number of bits, fixed at construction.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Reads the bit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<bool> {
        Bitwise::index(self.as_slice(), index)
    }

    /// Sets the bit at `index` to `true`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::IndexOutOfRange`] if `index >= self.len()`; the
    /// bitset is left unchanged.
    pub fn set(&mut self, index: usize) -> Result<()> {
        self.bits.assign_index(index, true)
    }

    /// Sets the bit at `index` to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::IndexOutOfRange`] if `index >= self.len()`; the
    /// bitset is left unchanged.
    pub fn reset(&mut self, index: usize) -> Result<()> {
        self.bits.assign_index(index, false)
    }

    /// Inverts the bit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::IndexOutOfRange`] if `index >= self.len()`; the
    /// bitset is left unchanged.
    pub fn flip(&mut self, index: usize) -> Result<()> {
        self.bits.negate_index(index)
    }

    /// Inverts every bit in place.
    pub fn not(&mut self) {
        self.bits.negate_bits();
    }

    /// Population count: the number of bits that are `true`.
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.weight()
    }

    /// Returns `true` when no bit is set, including for a zero-length bitset.
    #[must_use]
    pub fn none(&self) -> bool {
        self.bits.is_zero()
    }

    /// Iterates over the bits in index order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, bool>> {
        self.bits.iter().copied()
    }

    /// Indices of the set bits, in increasing order.
    pub fn support(&self) -> impl SortedIterator<Item = usize> {
        self.bits.support()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<bool> {
        self.bits
    }
}

impl AsRef<[bool]> for Bitset {
    fn as_ref(&self) -> &[bool] {
        &self.bits
    }
}

// Exposes element mutation only; a slice cannot change the length.
impl AsMut<[bool]> for Bitset {
    fn as_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }
}

delegate_bitwise_via_slice!(Bitset);

impl From<Vec<bool>> for Bitset {
    fn from(bits: Vec<bool>) -> Self {
        tracing::trace!(length = bits.len(), "creating bitset");
        Self { bits }
    }
}

impl From<Bitset> for Vec<bool> {
    fn from(bitset: Bitset) -> Self {
        bitset.bits
    }
}

impl FromIterator<bool> for Bitset {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'life> IntoIterator for &'life Bitset {
    type Item = bool;
    type IntoIter = std::iter::Copied<std::slice::Iter<'life, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for Bitset {
    type Err = BitsetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitset(len={},value={})", self.len(), self)
    }
}
