//! Base-128 integer codec: the big-endian, 7-bits-per-byte continuation
//! encoding used by ASN.1 `OBJECT IDENTIFIER` arcs (X.690 Section 8.19.2).

use crate::{ErrorKind, Result};

/// Decode one base-128 value from the front of `bytes`, returning the value
/// together with the number of bytes consumed.
///
/// Every byte but the last carries a continuation high bit. Values which do
/// not fit the 32-bit arc width fail with [`ErrorKind::Overflow`];
/// a missing terminating byte fails with [`ErrorKind::EndOfInput`].
pub(crate) fn decode(bytes: &[u8]) -> Result<(u32, usize)> {
    let mut value = 0u32;
    let mut consumed = 0;

    loop {
        let byte = *bytes.get(consumed).ok_or(ErrorKind::EndOfInput)?;
        consumed += 1;

        if value >> 25 != 0 {
            return Err(ErrorKind::Overflow.into());
        }

        value = (value << 7) | u32::from(byte & 0x7F);

        if byte & 0x80 == 0 {
            return Ok((value, consumed));
        }
    }
}

/// Number of bytes needed to encode the given value.
pub(crate) const fn encoded_len(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x001F_FFFF => 3,
        0x0020_0000..=0x0FFF_FFFF => 4,
        _ => 5,
    }
}

/// Encode a value with the minimum number of bytes, returning the buffer
/// together with the number of bytes used.
pub(crate) const fn encode(value: u32) -> ([u8; 5], usize) {
    let len = encoded_len(value);
    let mut buffer = [0u8; 5];
    let mut i = 0;

    while i < len {
        let shift = 7 * (len - 1 - i);
        let mut byte = ((value >> shift) & 0x7F) as u8;

        if i != len - 1 {
            byte |= 0x80;
        }

        buffer[i] = byte;
        i += 1;
    }

    (buffer, len)
}

/// Worst-case encoded size for an `n`-byte big-endian integer.
#[cfg(test)]
pub(crate) const fn max_encoded_len(value_bytes: usize) -> usize {
    (value_bytes * 8 + 6) / 7
}
