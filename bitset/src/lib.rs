//! Fixed-length bit vectors.
//!
//! [`Bitset`] is an owned sequence of bits whose length is fixed when it is
//! created. Single bits are mutated through checked, index-based methods, and
//! two bitsets of the same length combine through [`and`], [`or`] and [`xor`].
//! Every failure is reported as a [`BitsetError`]; nothing is clamped, wrapped
//! or truncated.
//!
//! ```
//! use bitset::{Bitset, xor};
//!
//! let left: Bitset = "1010".parse()?;
//! let mut right = Bitset::zeros(4);
//! right.set(1)?;
//! right.set(2)?;
//!
//! let difference = xor(&left, &right)?;
//! assert_eq!(difference.to_string(), "1100");
//! assert_eq!(difference.count(), 2);
//! # Ok::<(), bitset::BitsetError>(())
//! ```

#[macro_use]
pub mod bitwise;
pub use bitwise::{Bitwise, BitwiseMut, BitwisePair};

pub mod error;
pub use error::{BitsetError, Result};

mod bitset;
pub use bitset::Bitset;

pub mod ops;
pub use ops::{and, or, xor};

#[cfg(feature = "dynamic")]
mod value;
