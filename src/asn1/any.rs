//! ASN.1 `ANY` type.

use crate::{ByteSlice, Decodable, Decoder, Header, Length, Result, Sequence, Tag};
use core::convert::TryInto;

/// ASN.1 `ANY`: a tagged value whose interpretation is deferred.
///
/// Decoding a value as [`Any`] consumes a complete TLV but makes no attempt
/// to interpret its payload, which is kept as a borrowed view. Schemas use
/// it for fields whose type depends on context (e.g. algorithm-defined
/// parameters) and for implicitly tagged content whose underlying tag has
/// been replaced.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Any<'a> {
    /// Tag representing the type of the encoded value.
    pub(crate) tag: Tag,

    /// Inner value encoded as bytes.
    pub(crate) value: ByteSlice<'a>,
}

impl<'a> Any<'a> {
    /// Create a new [`Any`] from the provided [`Tag`] and slice.
    pub fn new(tag: Tag, value: &'a [u8]) -> Result<Self> {
        Ok(Self {
            tag,
            value: ByteSlice::new(value)?,
        })
    }

    /// Get the tag for this [`Any`] value.
    pub fn tag(self) -> Tag {
        self.tag
    }

    /// Get the [`Length`] of this [`Any`] value's payload.
    pub fn len(self) -> Length {
        self.value.len()
    }

    /// Is the payload of this [`Any`] value empty?
    pub fn is_empty(self) -> bool {
        self.value.is_empty()
    }

    /// Get the raw payload of this [`Any`] value as a byte slice.
    pub fn as_bytes(self) -> &'a [u8] {
        self.value.as_bytes()
    }

    /// Attempt to decode this value as an ASN.1 `SEQUENCE`, creating a new
    /// nested [`Decoder`] over its payload and calling the provided
    /// function with it.
    pub fn sequence<F, T>(self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Decoder<'a>) -> Result<T>,
    {
        let sequence: Sequence<'a> = self.try_into()?;
        let mut decoder = sequence.decoder();
        f(&mut decoder)
    }
}

impl<'a> Decodable<'a> for Any<'a> {
    fn decode(decoder: &mut Decoder<'a>) -> Result<Any<'a>> {
        let header = Header::decode(decoder)?;
        let value = decoder.bytes(header.length.into())?;

        Ok(Self {
            tag: header.tag,
            value: ByteSlice::new(value)?,
        })
    }
}
