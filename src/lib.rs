//! Universally Unique Lexicographically Sortable Identifiers
//!
//! ```rust
//! let ulid = ulid32::ulid();
//! println!("{}", ulid); // e.g. "01J9HSAQG7YR6Z16SS7ZTH26WQ"
//! println!("{:?}", ulid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See the [ULID specification](https://github.com/ulid/spec).
//!
//! # Field and bit layout
//!
//! A ULID is a 128-bit value with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |            random             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in milliseconds.
//! - The 80-bit `random` field carries a cryptographically strong random number.
//!
//! The binary form is these 16 bytes in big-endian order. The string form is 26 symbols of the
//! Crockford Base32 alphabet (`0123456789ABCDEFGHJKMNPQRSTVWXYZ`) and sorts exactly like the
//! binary form.
//!
//! # Monotonic generation
//!
//! [`generate_monotonic`] and [`Generator::generate_monotonic`] take the previous ULID. If the
//! clock has not advanced past its timestamp, the previous timestamp is kept and the `random`
//! field is incremented by one; otherwise a new random payload is drawn under the new timestamp.
//! The order is guaranteed only within a sequence of calls threading the same previous value.
//!
//! ```rust
//! let mut prev = ulid32::generate_fresh();
//! for _ in 0..10 {
//!     let curr = ulid32::generate_monotonic(prev);
//!     assert!(prev.to_string() < curr.to_string());
//!     prev = curr;
//! }
//! ```
//!
//! # Crate features
//!
//! - `std` (enabled by `global_gen`): `String` conversions and [`StdSystemTime`].
//! - `global_gen` (default): process-wide default generator and the entry point functions.
//! - `serde`: `Serialize` and `Deserialize` implementations for [`Ulid`].
//! - `uuid`: conversions to and from `uuid::Uuid`.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::Ulid;

pub mod base32;

mod error;
pub use error::DecodeError;

pub mod generator;
#[cfg(feature = "std")]
pub use generator::StdSystemTime;
pub use generator::{Generator, Monotonic, RandSource, TimeSource};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{generate_fresh, generate_monotonic, ulid};
