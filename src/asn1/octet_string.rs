//! ASN.1 `OCTET STRING` support.

use crate::{Any, ByteSlice, Decodable, Decoder, Error, ErrorKind, Length, Result, Tag, Tagged};
use core::convert::TryFrom;

/// ASN.1 `OCTET STRING` type: a borrowed view of the payload octets.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OctetString<'a> {
    /// Inner value
    inner: ByteSlice<'a>,
}

impl<'a> OctetString<'a> {
    /// Borrow the inner byte slice.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.inner.as_bytes()
    }

    /// Get the length of the inner byte slice.
    pub fn len(&self) -> Length {
        self.inner.len()
    }

    /// Is the inner byte slice empty?
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Interpret the payload as a self-contained DER stream and decode a
    /// nested value from it.
    ///
    /// PKCS#8 uses this construction to embed an algorithm-specific key
    /// structure inside the `privateKey` field.
    pub fn decode_nested<T: Decodable<'a>>(&self) -> Result<T> {
        let mut decoder = Decoder::new(self.as_bytes());
        T::decode(&mut decoder)
    }
}

impl AsRef<[u8]> for OctetString<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> TryFrom<Any<'a>> for OctetString<'a> {
    type Error = Error;

    fn try_from(any: Any<'a>) -> Result<OctetString<'a>> {
        any.tag().expect(Tag::OCTET_STRING)?;
        Ok(Self { inner: any.value })
    }
}

impl Tagged for OctetString<'_> {
    const TAG: Tag = Tag::OCTET_STRING;
}

impl<'a> TryFrom<Any<'a>> for &'a [u8] {
    type Error = Error;

    fn try_from(any: Any<'a>) -> Result<&'a [u8]> {
        OctetString::try_from(any).map(|os| os.as_bytes())
    }
}

impl<'a> Tagged for &'a [u8] {
    const TAG: Tag = Tag::OCTET_STRING;
}

impl<'a, const N: usize> TryFrom<Any<'a>> for [u8; N] {
    type Error = Error;

    fn try_from(any: Any<'a>) -> Result<[u8; N]> {
        let bytes = <&[u8]>::try_from(any)?;

        if bytes.len() != N {
            return Err(ErrorKind::WrongArrayLength.into());
        }

        let mut array = [0u8; N];
        array.copy_from_slice(bytes);
        Ok(array)
    }
}

impl<const N: usize> Tagged for [u8; N] {
    const TAG: Tag = Tag::OCTET_STRING;
}

#[cfg(test)]
mod tests {
    use super::OctetString;
    use crate::{Decodable, ErrorKind, Null};

    #[test]
    fn decode_as_view() {
        let os = OctetString::from_der(&[0x04, 0x03, 0xAA, 0xBB, 0xCC]).unwrap();
        assert_eq!(os.as_bytes(), &[0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn decode_as_slice() {
        let bytes: &[u8] = Decodable::from_der(&[0x04, 0x02, 0x01, 0x02]).unwrap();
        assert_eq!(bytes, &[0x01, 0x02]);
    }

    #[test]
    fn decode_as_array() {
        let array: [u8; 2] = Decodable::from_der(&[0x04, 0x02, 0x01, 0x02]).unwrap();
        assert_eq!(array, [0x01, 0x02]);

        let too_short: crate::Result<[u8; 4]> = Decodable::from_der(&[0x04, 0x02, 0x01, 0x02]);
        assert_eq!(
            too_short.err().map(|e| e.kind()),
            Some(ErrorKind::WrongArrayLength)
        );
    }

    #[test]
    fn decode_nested_value() {
        let os = OctetString::from_der(&[0x04, 0x02, 0x05, 0x00]).unwrap();
        assert_eq!(os.decode_nested::<Null>().unwrap(), Null);
    }
}
