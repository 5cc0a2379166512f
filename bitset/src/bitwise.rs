use sorted_iter::{SortedIterator, assume::AssumeSortedByItemExt};

use crate::error::{Result, check_index, check_same_length};

/// Read-only access to a fixed-length sequence of bits.
///
/// All index-taking methods are bounds-checked and report
/// [`BitsetError::IndexOutOfRange`](crate::BitsetError::IndexOutOfRange)
/// instead of panicking.
///
/// See also [`BitwiseMut`] and [`BitwisePair`].
pub trait Bitwise {
    fn bit_len(&self) -> usize;
    fn index(&self, index: usize) -> Result<bool>;
    /// Indices of the set bits, in increasing order.
    fn support(&self) -> impl SortedIterator<Item = usize>;
    #[inline]
    fn weight(&self) -> usize {
        self.support().count()
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.weight() == 0
    }
}

/// See also [`Bitwise`] and [`BitwisePair`].
pub trait BitwiseMut: Bitwise {
    fn assign_index(&mut self, index: usize, to: bool) -> Result<()>;
    fn negate_index(&mut self, index: usize) -> Result<()>;
    fn negate_bits(&mut self);
}

/// Population counts of pairwise combinations, without materializing the result.
///
/// See also [`Bitwise`] and [`BitwiseMut`].
pub trait BitwisePair<Other: ?Sized = Self> {
    fn and_weight(&self, other: &Other) -> Result<usize>;
    fn or_weight(&self, other: &Other) -> Result<usize>;
    fn xor_weight(&self, other: &Other) -> Result<usize>;
}

fn support_iterator(iter: impl Iterator<Item = bool>) -> impl SortedIterator<Item = usize> {
    iter.enumerate()
        .filter(|pair| pair.1)
        .map(|pair| pair.0)
        .assume_sorted_by_item()
}

/// Combines two equally long bit sequences pair by pair.
///
/// The lengths are compared before anything is allocated.
pub(crate) fn zip_with(left: &[bool], right: &[bool], rule: impl Fn(bool, bool) -> bool) -> Result<Vec<bool>> {
    check_same_length(left.len(), right.len())?;
    Ok(left.iter().zip(right).map(|(&a, &b)| rule(a, b)).collect())
}

fn zip_weight(left: &[bool], right: &[bool], rule: impl Fn(bool, bool) -> bool) -> Result<usize> {
    check_same_length(left.len(), right.len())?;
    Ok(left.iter().zip(right).filter(|&(&a, &b)| rule(a, b)).count())
}

impl Bitwise for [bool] {
    #[inline]
    fn bit_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn index(&self, index: usize) -> Result<bool> {
        check_index(index, self.len())?;
        Ok(self[index])
    }

    #[inline]
    fn support(&self) -> impl SortedIterator<Item = usize> {
        support_iterator(self.iter().copied())
    }

    #[inline]
    fn weight(&self) -> usize {
        self.iter().filter(|bit| **bit).count()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        !self.contains(&true)
    }
}

impl BitwiseMut for [bool] {
    #[inline]
    fn assign_index(&mut self, index: usize, to: bool) -> Result<()> {
        check_index(index, self.len())?;
        self[index] = to;
        Ok(())
    }

    #[inline]
    fn negate_index(&mut self, index: usize) -> Result<()> {
        check_index(index, self.len())?;
        self[index] ^= true;
        Ok(())
    }

    #[inline]
    fn negate_bits(&mut self) {
        for bit in self.iter_mut() {
            *bit = !*bit;
        }
    }
}

impl<Other> BitwisePair<Other> for [bool]
where
    Other: AsRef<[bool]> + ?Sized,
{
    fn and_weight(&self, other: &Other) -> Result<usize> {
        zip_weight(self, other.as_ref(), |a, b| a && b)
    }

    fn or_weight(&self, other: &Other) -> Result<usize> {
        zip_weight(self, other.as_ref(), |a, b| a || b)
    }

    fn xor_weight(&self, other: &Other) -> Result<usize> {
        zip_weight(self, other.as_ref(), |a, b| a != b)
    }
}

/// Implements the bit traits for a type by forwarding to its `[bool]` view.
macro_rules! delegate_bitwise_via_slice {
    ($type:ty) => {
        impl $crate::Bitwise for $type {
            #[inline]
            fn bit_len(&self) -> usize {
                <[bool] as $crate::Bitwise>::bit_len(self.as_ref())
            }

            #[inline]
            fn index(&self, index: usize) -> $crate::Result<bool> {
                <[bool] as $crate::Bitwise>::index(self.as_ref(), index)
            }

            #[inline]
            fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize> {
                <[bool] as $crate::Bitwise>::support(self.as_ref())
            }

            #[inline]
            fn weight(&self) -> usize {
                <[bool] as $crate::Bitwise>::weight(self.as_ref())
            }

            #[inline]
            fn is_zero(&self) -> bool {
                <[bool] as $crate::Bitwise>::is_zero(self.as_ref())
            }
        }

        impl $crate::BitwiseMut for $type {
            #[inline]
            fn assign_index(&mut self, index: usize, to: bool) -> $crate::Result<()> {
                <[bool] as $crate::BitwiseMut>::assign_index(self.as_mut(), index, to)
            }

            #[inline]
            fn negate_index(&mut self, index: usize) -> $crate::Result<()> {
                <[bool] as $crate::BitwiseMut>::negate_index(self.as_mut(), index)
            }

            #[inline]
            fn negate_bits(&mut self) {
                <[bool] as $crate::BitwiseMut>::negate_bits(self.as_mut());
            }
        }

        impl<Other> $crate::BitwisePair<Other> for $type
        where
            Other: AsRef<[bool]> + ?Sized,
        {
            fn and_weight(&self, other: &Other) -> $crate::Result<usize> {
                <[bool] as $crate::BitwisePair<Other>>::and_weight(self.as_ref(), other)
            }

            fn or_weight(&self, other: &Other) -> $crate::Result<usize> {
                <[bool] as $crate::BitwisePair<Other>>::or_weight(self.as_ref(), other)
            }

            fn xor_weight(&self, other: &Other) -> $crate::Result<usize> {
                <[bool] as $crate::BitwisePair<Other>>::xor_weight(self.as_ref(), other)
            }
        }
    };
}

delegate_bitwise_via_slice!(Vec<bool>);
