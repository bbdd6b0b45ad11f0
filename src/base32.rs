//! Crockford Base32 codec for the 128-bit ULID value.
//!
//! The 128 bits are left-padded with two zero bits to 130 bits and rendered as 26 symbols of
//! 5 bits each, most significant first. Because the alphabet is in ASCII order, the string form
//! sorts exactly like the underlying unsigned integer.
//!
//! Decoding is case-insensitive and accepts the Crockford aliases `O` for `0` and `I`/`L` for
//! `1`. `U` is not accepted.

use crate::DecodeError;

/// The canonical Crockford Base32 alphabet, indexed by 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Length of the string representation of a ULID.
pub const ENCODED_LEN: usize = 26;

const INVALID: u8 = 0xff;

/// Symbol-to-value table indexed by ASCII code, `INVALID` for anything not accepted.
const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        let c = ALPHABET[i];
        table[c as usize] = i as u8;
        table[c.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    table[b'O' as usize] = 0;
    table[b'o' as usize] = 0;
    table[b'I' as usize] = 1;
    table[b'i' as usize] = 1;
    table[b'L' as usize] = 1;
    table[b'l' as usize] = 1;
    table
};

/// Returns the 5-bit value of a symbol, or `None` if the symbol is not accepted.
pub const fn decode_symbol(c: char) -> Option<u8> {
    let code = c as u32;
    if code < 128 && DECODE_TABLE[code as usize] != INVALID {
        Some(DECODE_TABLE[code as usize])
    } else {
        None
    }
}

/// Renders a 128-bit value as 26 uppercase ASCII symbols.
pub const fn encode(value: u128) -> [u8; ENCODED_LEN] {
    let mut buffer = [0u8; ENCODED_LEN];
    let mut i = 0;
    while i < ENCODED_LEN {
        let shift = 5 * (ENCODED_LEN - 1 - i);
        buffer[i] = ALPHABET[((value >> shift) & 31) as usize];
        i += 1;
    }
    buffer
}

/// Parses 26 Crockford Base32 symbols into a 128-bit value.
///
/// Every character is validated in order, so an unaccepted symbol is reported even when the
/// length is also wrong. The two bits above the 128-bit range are discarded without being
/// checked.
pub fn decode(src: &str) -> Result<u128, DecodeError> {
    let mut value = 0u128;
    let mut count = 0usize;
    for (position, symbol) in src.chars().enumerate() {
        let digit = decode_symbol(symbol).ok_or(DecodeError::InvalidSymbol { symbol, position })?;
        // shifting a u128 drops the two leading padding bits of the 130-bit sequence
        value = (value << 5) | digit as u128;
        count += 1;
    }

    if count == ENCODED_LEN {
        Ok(value)
    } else {
        Err(DecodeError::symbols(count))
    }
}
