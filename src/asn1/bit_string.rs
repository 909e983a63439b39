//! ASN.1 `BIT STRING` support.

use crate::{Any, ByteSlice, Error, ErrorKind, Length, Result, Tag, Tagged};
use core::convert::TryFrom;

/// ASN.1 `BIT STRING` type.
///
/// The first payload octet counts the unused trailing bits of the final
/// content octet (X.690 Section 8.6.2). The content is kept exactly as
/// encoded: trailing unused bits are *not* masked off.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BitString<'a> {
    /// Number of unused bits in the final octet.
    unused_bits: u8,

    /// Bit string content, sans the unused-bits count octet.
    inner: ByteSlice<'a>,
}

impl<'a> BitString<'a> {
    /// Maximum number of unused bits a `BIT STRING` may declare.
    pub const MAX_UNUSED_BITS: u8 = 7;

    /// Create a new `BIT STRING` from the unused-bits count and content.
    pub fn new(unused_bits: u8, content: &'a [u8]) -> Result<Self> {
        if unused_bits > Self::MAX_UNUSED_BITS {
            return Err(ErrorKind::MaxUnusedBitsExceeded.into());
        }

        Ok(Self {
            unused_bits,
            inner: ByteSlice::new(content)?,
        })
    }

    /// Get the number of unused bits in the final content octet.
    pub fn unused_bits(&self) -> u8 {
        self.unused_bits
    }

    /// Borrow the content octets.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.inner.as_bytes()
    }

    /// Get the length of the content in octets.
    pub fn len(&self) -> Length {
        self.inner.len()
    }

    /// Is the content empty?
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl AsRef<[u8]> for BitString<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> TryFrom<Any<'a>> for BitString<'a> {
    type Error = Error;

    fn try_from(any: Any<'a>) -> Result<BitString<'a>> {
        any.tag().expect(Tag::BIT_STRING)?;

        match any.as_bytes() {
            [] => Err(ErrorKind::Empty.into()),
            [unused_bits, content @ ..] => Self::new(*unused_bits, content),
        }
    }
}

impl Tagged for BitString<'_> {
    const TAG: Tag = Tag::BIT_STRING;
}
