//! Context-specific fields.

use crate::{
    Any, Class, Decodable, Decoder, Error, Header, Result, TagNumber, Tagged,
};
use core::convert::TryFrom;

/// Whether a context-specific tag replaces the underlying value's own tag
/// or wraps the value's complete TLV.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TagMode {
    /// `IMPLICIT`: the payload is the inner value's content directly; the
    /// underlying tag has been replaced by the context-specific one.
    Implicit,

    /// `EXPLICIT`: the payload is itself a complete TLV for the inner
    /// value.
    Explicit,
}

/// Context-specific field: a value wrapped in a `CONTEXT-SPECIFIC` class
/// tag with a given number, used within schemas for optional fields and
/// disambiguation.
///
/// The tagging mode is a parameter of the wrapper rather than a separate
/// reader: the two modes differ only in whether the wrapped value is
/// re-prefixed with its own TLV inside the context tag.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ContextSpecific {
    /// Context-specific tag number.
    number: TagNumber,

    /// Tagging mode.
    mode: TagMode,
}

impl ContextSpecific {
    /// Create a new context-specific field description.
    pub fn new(number: TagNumber, mode: TagMode) -> Self {
        Self { number, mode }
    }

    /// Get the tag number of this field.
    pub fn number(self) -> TagNumber {
        self.number
    }

    /// Decode the wrapped inner value.
    ///
    /// A tag of the wrong class or number is an error; use
    /// [`ContextSpecific::decode_optional`] for `OPTIONAL` fields.
    pub fn decode<'a, T>(self, decoder: &mut Decoder<'a>) -> Result<T>
    where
        T: TryFrom<Any<'a>, Error = Error> + Tagged,
    {
        let body = self.decode_body(decoder)?;

        match self.mode {
            // re-tag the payload with the inner value's own tag: implicit
            // tagging strips the inner TLV
            TagMode::Implicit => T::try_from(Any::new(T::TAG, body)?),
            TagMode::Explicit => {
                let mut inner = Decoder::new(body);
                T::decode(&mut inner)
            }
        }
    }

    /// Decode the wrapped inner value of an `OPTIONAL` field.
    ///
    /// An exhausted decoder and a failed attempt (other than a truncation
    /// error) both yield `None`; the latter restores the cursor to where
    /// the attempt began.
    pub fn decode_optional<'a, T>(self, decoder: &mut Decoder<'a>) -> Result<Option<T>>
    where
        T: TryFrom<Any<'a>, Error = Error> + Tagged,
    {
        decoder.attempt(|d| self.decode(d))
    }

    /// Decode the wrapped payload as an [`Any`] value carrying the
    /// context-specific tag itself, deferring all interpretation.
    ///
    /// This is the only way to capture an `IMPLICIT` field whose underlying
    /// type is unknown, since implicit tagging discards the inner tag.
    pub fn decode_any<'a>(self, decoder: &mut Decoder<'a>) -> Result<Any<'a>> {
        let header = Header::expect(decoder, Class::ContextSpecific, self.number.value())?;
        let body = decoder.bytes(header.length.into())?;
        Any::new(header.tag, body)
    }

    /// Decode an `OPTIONAL` field's payload as an [`Any`] value (see
    /// [`ContextSpecific::decode_any`]).
    pub fn decode_any_optional<'a>(self, decoder: &mut Decoder<'a>) -> Result<Option<Any<'a>>> {
        decoder.attempt(|d| self.decode_any(d))
    }

    /// Read the header, validate class and number, and return the payload.
    fn decode_body<'a>(self, decoder: &mut Decoder<'a>) -> Result<&'a [u8]> {
        let header = Header::expect(decoder, Class::ContextSpecific, self.number.value())?;
        decoder.bytes(header.length.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{ContextSpecific, TagMode};
    use crate::{BitString, Class, Decoder, ErrorKind, ObjectIdentifier, TagNumber};

    const EXPLICIT_OID: &[u8] = &[
        0xA0, 0x0A, 0x06, 0x08, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07,
    ];

    #[test]
    fn decode_explicit() {
        let field = ContextSpecific::new(TagNumber::new(0), TagMode::Explicit);
        let mut decoder = Decoder::new(EXPLICIT_OID);

        let oid: ObjectIdentifier = field.decode(&mut decoder).unwrap();
        assert_eq!(oid, ObjectIdentifier::new("1.2.840.10045.3.1.7"));
        assert!(decoder.is_finished());
    }

    #[test]
    fn decode_implicit() {
        // [1] IMPLICIT BIT STRING: the payload starts with the unused-bits
        // octet, not a nested tag
        let field = ContextSpecific::new(TagNumber::new(1), TagMode::Implicit);
        let mut decoder = Decoder::new(&[0x81, 0x04, 0x00, 0x01, 0x02, 0x03]);

        let bs: BitString<'_> = field.decode(&mut decoder).unwrap();
        assert_eq!(bs.as_bytes(), &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn reject_wrong_class() {
        let field = ContextSpecific::new(TagNumber::new(0), TagMode::Explicit);
        let mut decoder = Decoder::new(&[0x30, 0x02, 0x05, 0x00]);

        let result: crate::Result<ObjectIdentifier> = field.decode(&mut decoder);
        assert_eq!(
            result.err().map(|e| e.kind()),
            Some(ErrorKind::UnexpectedClass {
                class: Class::Universal
            })
        );
    }

    #[test]
    fn reject_wrong_number() {
        let field = ContextSpecific::new(TagNumber::new(1), TagMode::Explicit);
        let mut decoder = Decoder::new(EXPLICIT_OID);

        let result: crate::Result<ObjectIdentifier> = field.decode(&mut decoder);
        assert_eq!(
            result.err().map(|e| e.kind()),
            Some(ErrorKind::UnexpectedTag { byte: 0xA0 })
        );
    }

    #[test]
    fn optional_rewinds_on_number_mismatch() {
        let field = ContextSpecific::new(TagNumber::new(1), TagMode::Explicit);
        let mut decoder = Decoder::new(EXPLICIT_OID);

        let absent: Option<ObjectIdentifier> = field.decode_optional(&mut decoder).unwrap();
        assert_eq!(absent, None);
        assert_eq!(decoder.position(), 0);
    }

    #[test]
    fn optional_absent_when_exhausted() {
        let field = ContextSpecific::new(TagNumber::new(0), TagMode::Explicit);
        let mut decoder = Decoder::new(&[]);

        let absent: Option<ObjectIdentifier> = field.decode_optional(&mut decoder).unwrap();
        assert_eq!(absent, None);
    }

    #[test]
    fn decode_any_keeps_context_tag() {
        let field = ContextSpecific::new(TagNumber::new(0), TagMode::Implicit);
        let mut decoder = Decoder::new(&[0xA0, 0x02, 0xDE, 0xAD]);

        let any = field.decode_any(&mut decoder).unwrap();
        assert_eq!(any.tag().class(), Class::ContextSpecific);
        assert_eq!(any.tag().number(), 0);
        assert_eq!(any.as_bytes(), &[0xDE, 0xAD]);
    }
}
