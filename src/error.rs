//! Error type for decoding ULIDs from strings and byte buffers.

use thiserror::Error;

/// Error decoding an invalid string or binary representation of ULID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum DecodeError {
    /// The input does not carry exactly 128 bits: a string is not 26 symbols long or a byte
    /// buffer is not 16 bytes long.
    #[error("invalid length: expected {expected} {unit}, found {found}")]
    InvalidLength {
        /// What was counted, `"symbols"` or `"bytes"`.
        unit: &'static str,
        expected: usize,
        found: usize,
    },

    /// A character outside the Crockford Base32 alphabet and its aliases.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

impl DecodeError {
    pub(crate) const fn symbols(found: usize) -> Self {
        Self::InvalidLength {
            unit: "symbols",
            expected: crate::base32::ENCODED_LEN,
            found,
        }
    }

    pub(crate) const fn bytes(found: usize) -> Self {
        Self::InvalidLength {
            unit: "bytes",
            expected: 16,
            found,
        }
    }

    /// Returns true if this error reports a length mismatch.
    pub fn is_length_error(&self) -> bool {
        matches!(self, Self::InvalidLength { .. })
    }

    /// Returns true if this error reports an unrecognized symbol.
    pub fn is_symbol_error(&self) -> bool {
        matches!(self, Self::InvalidSymbol { .. })
    }
}
