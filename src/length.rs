//! Length decoding for ASN.1 DER values.

use crate::{Decodable, Decoder, ErrorKind, Result};
use core::{convert::TryFrom, fmt};

/// ASN.1-encoded length.
///
/// # Limits
///
/// Constrained to the range `0..=0x0FFF_FFFF` (i.e. 256 MiB − 1). Longer
/// values are rejected outright rather than decoded: this crate targets
/// cryptographic key documents, which are always tiny.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Length(u32);

impl Length {
    /// Maximum length supported by this crate.
    pub const MAX: Length = Length(0x0FFF_FFFF);

    /// Length of zero.
    pub const ZERO: Length = Length(0);

    /// Get the raw value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u8> for Length {
    fn from(len: u8) -> Length {
        Length(len.into())
    }
}

impl From<u16> for Length {
    fn from(len: u16) -> Length {
        Length(len.into())
    }
}

impl From<Length> for usize {
    fn from(len: Length) -> usize {
        len.0 as usize
    }
}

impl TryFrom<usize> for Length {
    type Error = crate::Error;

    fn try_from(len: usize) -> Result<Length> {
        match u32::try_from(len) {
            Ok(n) if n <= Length::MAX.0 => Ok(Length(n)),
            _ => Err(ErrorKind::LengthExceedsMax.into()),
        }
    }
}

impl Decodable<'_> for Length {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Length> {
        match decoder.byte()? {
            len if len < 0x80 => Ok(len.into()),
            // X.690 Section 8.1.3.6.1: 0x80 introduces an indefinite length
            0x80 => Err(decoder.error(ErrorKind::IndefiniteLength)),
            tag @ 0x81..=0x84 => {
                let mut len = 0u32;

                for _ in 0..(tag & 0x7F) {
                    len = (len << 8) | u32::from(decoder.byte()?);
                }

                if len <= Length::MAX.0 {
                    Ok(Length(len))
                } else {
                    Err(decoder.error(ErrorKind::LengthExceedsMax))
                }
            }
            // Five or more length octets can only describe lengths beyond
            // the supported maximum
            _ => Err(decoder.error(ErrorKind::LengthExceedsMax)),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::Length;
    use crate::{Decodable, ErrorKind};

    #[test]
    fn decode_short_form() {
        assert_eq!(Length::ZERO, Length::from_der(&[0x00]).unwrap());
        assert_eq!(Length::from(0x7Fu8), Length::from_der(&[0x7F]).unwrap());
    }

    #[test]
    fn decode_long_form() {
        assert_eq!(
            Length::from(0x80u8),
            Length::from_der(&[0x81, 0x80]).unwrap()
        );

        assert_eq!(
            Length::from(0x100u16),
            Length::from_der(&[0x82, 0x01, 0x00]).unwrap()
        );

        assert_eq!(
            Length::MAX,
            Length::from_der(&[0x84, 0x0F, 0xFF, 0xFF, 0xFF]).unwrap()
        );
    }

    #[test]
    fn reject_indefinite_length() {
        assert_eq!(
            Length::from_der(&[0x80]).err().map(|e| e.kind()),
            Some(ErrorKind::IndefiniteLength)
        );
    }

    #[test]
    fn reject_oversize_lengths() {
        // 2^28 is one past the maximum
        assert_eq!(
            Length::from_der(&[0x84, 0x10, 0x00, 0x00, 0x00])
                .err()
                .map(|e| e.kind()),
            Some(ErrorKind::LengthExceedsMax)
        );

        // five length octets are rejected without reading them
        assert_eq!(
            Length::from_der(&[0x85, 0x00, 0x10, 0x00, 0x00, 0x00])
                .err()
                .map(|e| e.kind()),
            Some(ErrorKind::LengthExceedsMax)
        );
    }

    #[test]
    fn truncated_long_form() {
        assert_eq!(
            Length::from_der(&[0x82, 0x01]).err().map(|e| e.kind()),
            Some(ErrorKind::EndOfInput)
        );
    }
}
