//! ASN.1 `INTEGER` support: casts from canonically encoded two's-complement
//! payloads into Rust integer types.

use crate::{Any, Error, ErrorKind, Result, Tag, Tagged};
use core::convert::TryFrom;

/// Reject payloads which are not the canonical (i.e. shortest) encoding of
/// their value (X.690 Section 8.3.2): a leading zero octet followed by a
/// byte without its sign bit set, or a leading all-ones octet followed by a
/// byte with its sign bit set, are both redundant.
fn check_canonical(bytes: &[u8]) -> Result<()> {
    match bytes {
        [] => Err(ErrorKind::NonCanonical.into()),
        [0x00, second, ..] if *second < 0x80 => Err(ErrorKind::NonCanonical.into()),
        [0xFF, second, ..] if *second >= 0x80 => Err(ErrorKind::NonCanonical.into()),
        _ => Ok(()),
    }
}

macro_rules! impl_signed_int {
    ($int:ty) => {
        impl TryFrom<Any<'_>> for $int {
            type Error = Error;

            fn try_from(any: Any<'_>) -> Result<$int> {
                const WIDTH: usize = core::mem::size_of::<$int>();

                any.tag().expect(Tag::INTEGER)?;

                let bytes = any.as_bytes();
                check_canonical(bytes)?;

                if bytes.len() > WIDTH {
                    return Err(ErrorKind::Overflow.into());
                }

                // sign-extend into the high-order bytes
                let mut buffer = if bytes[0] & 0x80 != 0 {
                    [0xFF; WIDTH]
                } else {
                    [0x00; WIDTH]
                };

                buffer[WIDTH - bytes.len()..].copy_from_slice(bytes);
                Ok(<$int>::from_be_bytes(buffer))
            }
        }

        impl Tagged for $int {
            const TAG: Tag = Tag::INTEGER;
        }
    };
}

impl_signed_int!(i8);
impl_signed_int!(i16);
impl_signed_int!(i32);
impl_signed_int!(i64);

impl TryFrom<Any<'_>> for u8 {
    type Error = Error;

    fn try_from(any: Any<'_>) -> Result<u8> {
        any.tag().expect(Tag::INTEGER)?;

        let bytes = any.as_bytes();
        check_canonical(bytes)?;

        match *bytes {
            [byte] if byte < 0x80 => Ok(byte),
            [0x00, byte] => Ok(byte),
            _ => Err(ErrorKind::Overflow.into()),
        }
    }
}

impl Tagged for u8 {
    const TAG: Tag = Tag::INTEGER;
}
