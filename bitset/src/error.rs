use thiserror::Error;

/// Reasons a bitset operation can be rejected.
///
/// Every variant describes a violated input contract; none of them is
/// transient, so retrying the same call yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitsetError {
    #[error("bitsets should have same length (left has {left} bits, right has {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("cannot parse bitset: unexpected {character:?} at position {position}, expected '0' or '1'")]
    Parse { position: usize, character: char },

    #[error("cannot create bitset from a {kind} value")]
    UnsupportedType { kind: &'static str },

    #[error("index {index} is out of range for a bitset of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    #[error("invalid bitset length {value}")]
    InvalidArgument { value: String },
}

pub type Result<T, E = BitsetError> = std::result::Result<T, E>;

/// Checks `index` against `length`, logging the rejection.
pub(crate) fn check_index(index: usize, length: usize) -> Result<()> {
    if index < length {
        Ok(())
    } else {
        tracing::debug!(index, length, "rejected out-of-range bit index");
        Err(BitsetError::IndexOutOfRange { index, length })
    }
}

/// Checks that two operands have the same number of bits.
pub(crate) fn check_same_length(left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        tracing::debug!(left, right, "rejected operands of different length");
        Err(BitsetError::LengthMismatch { left, right })
    }
}
