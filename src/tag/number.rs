//! ASN.1 tag numbers.

use crate::{Error, ErrorKind, Result};
use core::{convert::TryFrom, fmt};

/// ASN.1 tag numbers for the non-universal classes (i.e. the lower 5 bits
/// of the identifier octet).
///
/// From X.690 Section 8.1.2.2:
///
/// > bits 5 to 1 shall encode the number of the tag as a binary integer with
/// > bit 5 as the most significant bit.
///
/// Tag numbers which can be represented in a single identifier octet range
/// from zero to 30 inclusive. Section 8.1.2.4 describes the multi-byte form
/// used for larger numbers; this crate deliberately does not support it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct TagNumber(pub(super) u8);

impl TagNumber {
    /// Maximum tag number supported (inclusive).
    pub const MAX: u8 = 30;

    /// Create a new tag number (const-friendly).
    ///
    /// Panics if the tag number is greater than [`TagNumber::MAX`]. For a
    /// fallible conversion, use [`TryFrom`] instead.
    pub const fn new(number: u8) -> Self {
        if number > Self::MAX {
            panic!("tag number out of range");
        }

        Self(number)
    }

    /// Get the inner value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for TagNumber {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self> {
        match number {
            0..=Self::MAX => Ok(Self(number)),
            _ => Err(ErrorKind::HighTagNumberNotSupported.into()),
        }
    }
}

impl From<TagNumber> for u8 {
    fn from(number: TagNumber) -> u8 {
        number.0
    }
}

impl fmt::Display for TagNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tag numbers fixed by ASN.1 for the `UNIVERSAL` class (X.680 Section 8.6,
/// Table 1).
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum UniversalTagNumber {
    /// `BOOLEAN`
    Boolean = 1,

    /// `INTEGER`
    Integer = 2,

    /// `BIT STRING`
    BitString = 3,

    /// `OCTET STRING`
    OctetString = 4,

    /// `NULL`
    Null = 5,

    /// `OBJECT IDENTIFIER`
    ObjectIdentifier = 6,

    /// `REAL`
    Real = 9,

    /// `ENUMERATED`
    Enumerated = 10,

    /// `UTF8String`
    Utf8String = 12,

    /// `SEQUENCE` / `SEQUENCE OF`
    Sequence = 16,

    /// `SET` / `SET OF`
    Set = 17,

    /// `NumericString`
    NumericString = 18,

    /// `PrintableString`
    PrintableString = 19,

    /// `TeletexString`
    TeletexString = 20,

    /// `VideotexString`
    VideotexString = 21,

    /// `IA5String`
    Ia5String = 22,

    /// `UTCTime`
    UtcTime = 23,

    /// `GeneralizedTime`
    GeneralizedTime = 24,

    /// `VisibleString`
    VisibleString = 26,

    /// `GeneralString`
    GeneralString = 27,

    /// `BMPString`
    BmpString = 30,
}

impl UniversalTagNumber {
    /// Look up the universal type assigned to a tag number, if any.
    pub fn from_number(number: u8) -> Option<Self> {
        Some(match number {
            1 => UniversalTagNumber::Boolean,
            2 => UniversalTagNumber::Integer,
            3 => UniversalTagNumber::BitString,
            4 => UniversalTagNumber::OctetString,
            5 => UniversalTagNumber::Null,
            6 => UniversalTagNumber::ObjectIdentifier,
            9 => UniversalTagNumber::Real,
            10 => UniversalTagNumber::Enumerated,
            12 => UniversalTagNumber::Utf8String,
            16 => UniversalTagNumber::Sequence,
            17 => UniversalTagNumber::Set,
            18 => UniversalTagNumber::NumericString,
            19 => UniversalTagNumber::PrintableString,
            20 => UniversalTagNumber::TeletexString,
            21 => UniversalTagNumber::VideotexString,
            22 => UniversalTagNumber::Ia5String,
            23 => UniversalTagNumber::UtcTime,
            24 => UniversalTagNumber::GeneralizedTime,
            26 => UniversalTagNumber::VisibleString,
            27 => UniversalTagNumber::GeneralString,
            30 => UniversalTagNumber::BmpString,
            _ => return None,
        })
    }

    /// Get the tag number.
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for UniversalTagNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniversalTagNumber::Boolean => f.write_str("BOOLEAN"),
            UniversalTagNumber::Integer => f.write_str("INTEGER"),
            UniversalTagNumber::BitString => f.write_str("BIT STRING"),
            UniversalTagNumber::OctetString => f.write_str("OCTET STRING"),
            UniversalTagNumber::Null => f.write_str("NULL"),
            UniversalTagNumber::ObjectIdentifier => f.write_str("OBJECT IDENTIFIER"),
            UniversalTagNumber::Real => f.write_str("REAL"),
            UniversalTagNumber::Enumerated => f.write_str("ENUMERATED"),
            UniversalTagNumber::Utf8String => f.write_str("UTF8String"),
            UniversalTagNumber::Sequence => f.write_str("SEQUENCE"),
            UniversalTagNumber::Set => f.write_str("SET"),
            UniversalTagNumber::NumericString => f.write_str("NumericString"),
            UniversalTagNumber::PrintableString => f.write_str("PrintableString"),
            UniversalTagNumber::TeletexString => f.write_str("TeletexString"),
            UniversalTagNumber::VideotexString => f.write_str("VideotexString"),
            UniversalTagNumber::Ia5String => f.write_str("IA5String"),
            UniversalTagNumber::UtcTime => f.write_str("UTCTime"),
            UniversalTagNumber::GeneralizedTime => f.write_str("GeneralizedTime"),
            UniversalTagNumber::VisibleString => f.write_str("VisibleString"),
            UniversalTagNumber::GeneralString => f.write_str("GeneralString"),
            UniversalTagNumber::BmpString => f.write_str("BMPString"),
        }
    }
}
