#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use fstr::FStr;

use crate::{base32, DecodeError};

const TIMESTAMP_BITS: u32 = 48;
const RANDOM_BITS: u32 = 80;
const MAX_TIMESTAMP: u64 = (1 << TIMESTAMP_BITS) - 1;
const MAX_RANDOM: u128 = (1 << RANDOM_BITS) - 1;

/// Represents a Universally Unique Lexicographically Sortable Identifier.
///
/// The value is stored as a 16-byte big-endian array whose first 6 bytes hold the timestamp and
/// whose remaining 10 bytes hold the random payload, so the derived ordering matches the ordering
/// of both the 128-bit unsigned integer and the Base32 string.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Ulid([u8; 16]);

impl Ulid {
    /// Nil ULID (00000000000000000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max ULID (7ZZZZZZZZZZZZZZZZZZZZZZZZZ)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates a ULID from a timestamp and a random payload.
    ///
    /// Values wider than 48 bits (`timestamp`) or 80 bits (`random`) are truncated to their
    /// low-order bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulid32::Ulid;
    ///
    /// let x = Ulid::from_parts(0x0123_4567_89ab, 0xcdef_0123_4567_89ab_cdef);
    /// assert_eq!(x.to_string(), "014D2PF2DBSQQG28T5CY4TQKFF");
    /// assert_eq!(x.to_parts(), (0x0123_4567_89ab, 0xcdef_0123_4567_89ab_cdef));
    /// ```
    pub const fn from_parts(timestamp: u64, random: u128) -> Self {
        Self::from_u128(
            ((timestamp & MAX_TIMESTAMP) as u128) << RANDOM_BITS | (random & MAX_RANDOM),
        )
    }

    /// Returns the `(timestamp, random)` pair.
    pub const fn to_parts(self) -> (u64, u128) {
        (self.timestamp_ms(), self.random())
    }

    /// Creates a ULID from a `(timestamp, random)` tuple, truncating like [`Ulid::from_parts`].
    pub const fn from_tuple(parts: (u64, u128)) -> Self {
        Self::from_parts(parts.0, parts.1)
    }

    /// Returns the `(timestamp, random)` tuple.
    pub const fn to_tuple(self) -> (u64, u128) {
        self.to_parts()
    }

    /// Returns the 48-bit timestamp in milliseconds since the Unix epoch.
    pub const fn timestamp_ms(&self) -> u64 {
        (self.to_u128() >> RANDOM_BITS) as u64
    }

    /// Returns the 80-bit random payload.
    pub const fn random(&self) -> u128 {
        self.to_u128() & MAX_RANDOM
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 16-byte big-endian representation.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Creates a ULID from a 16-byte big-endian buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidLength`] if `bytes` is not exactly 16 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        <[u8; 16]>::try_from(bytes)
            .map(Self)
            .map_err(|_| DecodeError::bytes(bytes.len()))
    }

    const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    const fn to_u128(self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Returns the ULID with the same timestamp and the random payload incremented by one, or
    /// `None` if the random payload is already at its maximum.
    pub const fn increment(self) -> Option<Self> {
        if self.random() == MAX_RANDOM {
            None
        } else {
            Some(Self::from_u128(self.to_u128() + 1))
        }
    }

    /// Increments the random payload by one, wrapping to zero within the 80-bit field so that the
    /// timestamp is never touched.
    pub(crate) const fn wrapping_increment(self) -> Self {
        Self::from_parts(self.timestamp_ms(), self.random().wrapping_add(1))
    }

    /// Returns the 26-character Crockford Base32 representation stored in a stack-allocated
    /// string.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the canonical string
    /// representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulid32::Ulid;
    ///
    /// let x = "01j9hsaqg7yr6z16ss7zth26wq".parse::<Ulid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "01J9HSAQG7YR6Z16SS7ZTH26WQ");
    /// assert_eq!(format!("{}", y), "01J9HSAQG7YR6Z16SS7ZTH26WQ");
    /// # Ok::<(), ulid32::DecodeError>(())
    /// ```
    pub fn encode(&self) -> FStr<{ base32::ENCODED_LEN }> {
        let buffer = base32::encode(self.to_u128());
        debug_assert!(buffer.is_ascii());
        // SAFETY: every byte comes from the ASCII alphabet
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Creates a ULID from its 26-character Crockford Base32 representation.
    ///
    /// Decoding is case-insensitive and accepts `O` for `0` and `I`/`L` for `1`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidSymbol`] on the first unaccepted character, or
    /// [`DecodeError::InvalidLength`] if the input is not exactly 26 symbols long.
    pub fn decode(src: &str) -> Result<Self, DecodeError> {
        base32::decode(src).map(Self::from_u128)
    }
}

impl fmt::Display for Ulid {
    /// Returns the 26-character canonical Crockford Base32 representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Ulid {
    type Err = DecodeError;

    /// Creates an object from the 26-character Crockford Base32 representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::decode(src)
    }
}

impl TryFrom<&str> for Ulid {
    type Error = DecodeError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::decode(src)
    }
}

impl From<Ulid> for [u8; 16] {
    fn from(src: Ulid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Ulid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Ulid {
    type Error = DecodeError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(src)
    }
}

impl AsRef<[u8]> for Ulid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Ulid> for u128 {
    fn from(src: Ulid) -> Self {
        src.to_u128()
    }
}

impl From<u128> for Ulid {
    fn from(src: u128) -> Self {
        Self::from_u128(src)
    }
}

impl From<Ulid> for (u64, u128) {
    fn from(src: Ulid) -> Self {
        src.to_tuple()
    }
}

impl From<(u64, u128)> for Ulid {
    fn from(src: (u64, u128)) -> Self {
        Self::from_tuple(src)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{DecodeError, Ulid};

    impl From<Ulid> for String {
        fn from(src: Ulid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Ulid {
        type Error = DecodeError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Ulid;

    impl From<Ulid> for uuid::Uuid {
        fn from(src: Ulid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Ulid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Ulid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Ulid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Ulid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Ulid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a ULID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ulid::decode(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Ulid::from_bytes(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Ulid;
        use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000000000000000000000", &[0u8; 16]),
                (
                    "01J9HSAQG7YR6Z16SS7ZTH26WQ",
                    &[
                        1, 146, 99, 149, 94, 7, 246, 13, 240, 155, 57, 63, 245, 17, 27, 151,
                    ],
                ),
                (
                    "014D2PF2DBSQQG28T5CY4TQKFF",
                    &[
                        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67,
                        0x89, 0xab, 0xcd, 0xef,
                    ],
                ),
                ("7ZZZZZZZZZZZZZZZZZZZZZZZZZ", &[0xff; 16]),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Ulid>().unwrap();
                assert_tokens(&e.readable(), &[Token::Str(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Deserializes lowercase and aliased strings
        #[test]
        fn deserializes_lowercase_and_aliased_strings() {
            let e = Ulid::from_parts(1, 1);
            assert_de_tokens(&e.readable(), &[Token::Str("ooooooooo1ooooooooooooooOl")]);
        }

        /// Rejects invalid representations
        #[test]
        fn rejects_invalid_representations() {
            assert_de_tokens_error::<serde_test::Readable<Ulid>>(
                &[Token::Str("ABSOLUTEBS")],
                "invalid symbol 'U' at position 5",
            );
            assert_de_tokens_error::<serde_test::Compact<Ulid>>(
                &[Token::Bytes(&[0u8; 15])],
                "invalid length: expected 16 bytes, found 15",
            );
        }
    }
}
