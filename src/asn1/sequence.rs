//! ASN.1 `SEQUENCE` support.

use crate::{Any, ByteSlice, Decoder, Error, Length, Result, Tag, Tagged};
use core::convert::TryFrom;

/// ASN.1 `SEQUENCE` type: an opaque view of the payload over which a
/// nested [`Decoder`] iterates the child elements.
///
/// Schema-level record types decode themselves through
/// [`Any::sequence`] rather than using this type directly.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Sequence<'a> {
    /// Inner value
    inner: ByteSlice<'a>,
}

impl<'a> Sequence<'a> {
    /// Borrow the inner byte sequence.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.inner.as_bytes()
    }

    /// Get the length of the payload.
    pub fn len(&self) -> Length {
        self.inner.len()
    }

    /// Is the payload empty?
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Obtain a [`Decoder`] over the payload of this [`Sequence`].
    pub fn decoder(&self) -> Decoder<'a> {
        Decoder::new(self.as_bytes())
    }
}

impl AsRef<[u8]> for Sequence<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> TryFrom<Any<'a>> for Sequence<'a> {
    type Error = Error;

    fn try_from(any: Any<'a>) -> Result<Sequence<'a>> {
        // X.690 Section 8.9.1: the encoding of a sequence value shall be
        // constructed; `Tag::expect` reports a primitive form as
        // non-canonical
        any.tag().expect(Tag::SEQUENCE)?;
        Ok(Self { inner: any.value })
    }
}

impl Tagged for Sequence<'_> {
    const TAG: Tag = Tag::SEQUENCE;
}

#[cfg(test)]
mod tests {
    use super::Sequence;
    use crate::{Decodable, ErrorKind};

    #[test]
    fn decode_and_iterate_children() {
        let seq = Sequence::from_der(&[0x30, 0x06, 0x02, 0x01, 0x2A, 0x05, 0x00]).unwrap();
        let mut children = seq.decoder();
        assert_eq!(children.decode::<i8>().unwrap(), 42);
        children.decode::<crate::Null>().unwrap();
        assert!(children.is_finished());
    }

    #[test]
    fn reject_primitive_form() {
        assert_eq!(
            Sequence::from_der(&[0x10, 0x00]).err().map(|e| e.kind()),
            Some(ErrorKind::NonCanonical)
        );
    }
}
