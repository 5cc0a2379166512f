use serde_json::Value;

use crate::bitset::Bitset;
use crate::error::{BitsetError, Result};

impl Bitset {
    /// Builds a bitset from a dynamically typed value.
    ///
    /// An integer is taken as a length (all bits clear) and a string is parsed
    /// in the binary-string format. Any other kind of value is rejected.
    ///
    /// # Errors
    ///
    /// - [`BitsetError::InvalidArgument`] for a negative integer length.
    /// - [`BitsetError::Parse`] for a string with a character other than `'0'`/`'1'`.
    /// - [`BitsetError::UnsupportedType`] for null, booleans, floats, arrays and objects.
    ///
    /// # Example
    ///
    /// ```
    /// use bitset::{Bitset, BitsetError};
    /// use serde_json::json;
    ///
    /// assert_eq!(Bitset::from_value(&json!(3)).unwrap().to_string(), "000");
    /// assert_eq!(Bitset::from_value(&json!("101")).unwrap().count(), 2);
    /// assert_eq!(
    ///     Bitset::from_value(&json!(true)),
    ///     Err(BitsetError::UnsupportedType { kind: "boolean" })
    /// );
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Self::parse(text),
            Value::Number(number) => {
                if let Some(length) = number.as_u64() {
                    Self::try_with_length(length)
                } else if let Some(length) = number.as_i64() {
                    Self::try_with_length(length)
                } else {
                    Err(unsupported("float"))
                }
            }
            Value::Null => Err(unsupported("null")),
            Value::Bool(_) => Err(unsupported("boolean")),
            Value::Array(_) => Err(unsupported("array")),
            Value::Object(_) => Err(unsupported("object")),
        }
    }
}

fn unsupported(kind: &'static str) -> BitsetError {
    tracing::debug!(kind, "rejected bitset source");
    BitsetError::UnsupportedType { kind }
}
