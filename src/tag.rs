//! ASN.1 tags.

mod class;
mod number;

pub use self::{
    class::Class,
    number::{TagNumber, UniversalTagNumber},
};

use crate::{Decodable, Decoder, Error, ErrorKind, Result};
use core::{convert::TryFrom, fmt};

/// Indicator bit for constructed form encoding (i.e. vs primitive form)
const CONSTRUCTED_FLAG: u8 = 0b0010_0000;

/// Tag number bits of the identifier octet
const TAG_NUMBER_MASK: u8 = 0b0001_1111;

/// ASN.1 tags.
///
/// Tags are the leading identifier octet of the Tag-Length-Value encoding
/// used by ASN.1 DER and identify the type of the subsequent value.
///
/// They are described in X.690 Section 8.1.2 and structured as follows:
///
/// ```text
/// | Class | P/C | Tag Number |
/// ```
///
/// - Bits 8/7: [`Class`]
/// - Bit 6: primitive (0) or constructed (1)
/// - Bits 5-1: tag number, low-tag-number form only
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Tag {
    /// `UNIVERSAL` tag.
    Universal {
        /// Tag number, restricted to the set assigned by X.680.
        number: UniversalTagNumber,

        /// Primitive or constructed form.
        constructed: bool,
    },

    /// `APPLICATION` tag.
    Application {
        /// Tag number.
        number: TagNumber,

        /// Primitive or constructed form.
        constructed: bool,
    },

    /// `CONTEXT-SPECIFIC` tag.
    ContextSpecific {
        /// Tag number.
        number: TagNumber,

        /// Primitive or constructed form.
        constructed: bool,
    },

    /// `PRIVATE` tag.
    Private {
        /// Tag number.
        number: TagNumber,

        /// Primitive or constructed form.
        constructed: bool,
    },
}

impl Tag {
    /// `INTEGER` tag.
    pub const INTEGER: Tag = Tag::Universal {
        number: UniversalTagNumber::Integer,
        constructed: false,
    };

    /// `BIT STRING` tag.
    pub const BIT_STRING: Tag = Tag::Universal {
        number: UniversalTagNumber::BitString,
        constructed: false,
    };

    /// `OCTET STRING` tag.
    pub const OCTET_STRING: Tag = Tag::Universal {
        number: UniversalTagNumber::OctetString,
        constructed: false,
    };

    /// `NULL` tag.
    pub const NULL: Tag = Tag::Universal {
        number: UniversalTagNumber::Null,
        constructed: false,
    };

    /// `OBJECT IDENTIFIER` tag.
    pub const OBJECT_IDENTIFIER: Tag = Tag::Universal {
        number: UniversalTagNumber::ObjectIdentifier,
        constructed: false,
    };

    /// `SEQUENCE` tag. Always constructed (X.690 Section 8.9.1).
    pub const SEQUENCE: Tag = Tag::Universal {
        number: UniversalTagNumber::Sequence,
        constructed: true,
    };

    /// Get the [`Class`] of this tag.
    pub fn class(self) -> Class {
        match self {
            Tag::Universal { .. } => Class::Universal,
            Tag::Application { .. } => Class::Application,
            Tag::ContextSpecific { .. } => Class::ContextSpecific,
            Tag::Private { .. } => Class::Private,
        }
    }

    /// Get the tag number as the raw 5-bit value.
    pub fn number(self) -> u8 {
        match self {
            Tag::Universal { number, .. } => number.value(),
            Tag::Application { number, .. }
            | Tag::ContextSpecific { number, .. }
            | Tag::Private { number, .. } => number.value(),
        }
    }

    /// Is this tag encoded in constructed form?
    pub fn is_constructed(self) -> bool {
        match self {
            Tag::Universal { constructed, .. }
            | Tag::Application { constructed, .. }
            | Tag::ContextSpecific { constructed, .. }
            | Tag::Private { constructed, .. } => constructed,
        }
    }

    /// Get the identifier octet for this tag.
    pub fn octet(self) -> u8 {
        let constructed = if self.is_constructed() {
            CONSTRUCTED_FLAG
        } else {
            0
        };

        self.class().bits() | constructed | self.number()
    }

    /// Check this tag against the one expected for the value being decoded.
    ///
    /// Class mismatches are reported as [`ErrorKind::UnexpectedClass`] and
    /// tag number mismatches as [`ErrorKind::UnexpectedTag`]. A value whose
    /// class and number match but whose primitive/constructed flag differs
    /// is not validly DER-encoded and is reported as
    /// [`ErrorKind::NonCanonical`].
    pub fn expect(self, expected: Tag) -> Result<Tag> {
        if self.class() != expected.class() {
            Err(ErrorKind::UnexpectedClass { class: self.class() }.into())
        } else if self.number() != expected.number() {
            Err(ErrorKind::UnexpectedTag { byte: self.octet() }.into())
        } else if self.is_constructed() != expected.is_constructed() {
            Err(ErrorKind::NonCanonical.into())
        } else {
            Ok(self)
        }
    }
}

impl TryFrom<u8> for Tag {
    type Error = Error;

    fn try_from(octet: u8) -> Result<Tag> {
        let constructed = octet & CONSTRUCTED_FLAG != 0;
        let number = octet & TAG_NUMBER_MASK;

        // X.690 Section 8.1.2.4: 0b11111 introduces subsequent tag number
        // octets
        if number == TAG_NUMBER_MASK {
            return Err(ErrorKind::HighTagNumberNotSupported.into());
        }

        Ok(match Class::from_octet(octet) {
            Class::Universal => Tag::Universal {
                number: UniversalTagNumber::from_number(number)
                    .ok_or(ErrorKind::UnexpectedTag { byte: octet })?,
                constructed,
            },
            Class::Application => Tag::Application {
                number: TagNumber(number),
                constructed,
            },
            Class::ContextSpecific => Tag::ContextSpecific {
                number: TagNumber(number),
                constructed,
            },
            Class::Private => Tag::Private {
                number: TagNumber(number),
                constructed,
            },
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> u8 {
        tag.octet()
    }
}

impl Decodable<'_> for Tag {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        decoder.byte().and_then(Self::try_from)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Universal { number, .. } => write!(f, "{}", number),
            Tag::Application { number, .. } => write!(f, "APPLICATION [{}]", number),
            Tag::ContextSpecific { number, .. } => write!(f, "CONTEXT-SPECIFIC [{}]", number),
            Tag::Private { number, .. } => write!(f, "PRIVATE [{}]", number),
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(0x{:02x}: {})", self.octet(), self)
    }
}
