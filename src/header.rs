//! ASN.1 DER headers.

use crate::{Class, Decodable, Decoder, ErrorKind, Length, Result, Tag};

/// ASN.1 DER headers: tag + length component of TLV-encoded values.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Header {
    /// Tag representing the type of the encoded value.
    pub tag: Tag,

    /// Length of the encoded value.
    pub length: Length,
}

impl Header {
    /// Decode a header, checking its tag's class and number against the
    /// given expectation.
    pub(crate) fn expect(
        decoder: &mut Decoder<'_>,
        class: Class,
        number: u8,
    ) -> Result<Header> {
        let header = Header::decode(decoder)?;

        if header.tag.class() != class {
            return Err(ErrorKind::UnexpectedClass {
                class: header.tag.class(),
            }
            .into());
        }

        if header.tag.number() != number {
            return Err(ErrorKind::UnexpectedTag {
                byte: header.tag.octet(),
            }
            .into());
        }

        Ok(header)
    }
}

impl Decodable<'_> for Header {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Header> {
        let tag = Tag::decode(decoder)?;
        let length = Length::decode(decoder)?;
        Ok(Self { tag, length })
    }
}
