//! Error types.

use crate::{Class, ObjectIdentifier};
use core::fmt;

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Error {
    /// Kind of error.
    kind: ErrorKind,

    /// Position inside of the input where the error occurred.
    position: Option<usize>,
}

impl Error {
    /// Create a new [`Error`] at the given input position.
    pub fn new(kind: ErrorKind, position: usize) -> Error {
        Error {
            kind,
            position: Some(position),
        }
    }

    /// Get the [`ErrorKind`] which occurred.
    pub fn kind(self) -> ErrorKind {
        self.kind
    }

    /// Get the position inside of the input where the error occurred.
    pub fn position(self) -> Option<usize> {
        self.position
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(pos) = self.position {
            write!(f, " at byte {}", pos)?;
        }

        Ok(())
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            position: None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Kinds of errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input exhausted where more bytes were required.
    EndOfInput,

    /// Textual grammar violation: a failed literal or character predicate,
    /// including malformed Base64 in a PEM body.
    Parse,

    /// Tag number did not match the expectation for the value being decoded.
    UnexpectedTag {
        /// Raw identifier octet of the tag that was encountered.
        byte: u8,
    },

    /// Tag class did not match the expectation for the value being decoded.
    UnexpectedClass {
        /// Class that was encountered.
        class: Class,
    },

    /// Length octet was `0x80`: indefinite lengths are BER-only and
    /// forbidden in DER (X.690 Section 10.1).
    IndefiniteLength,

    /// Length is larger than this crate's internal limits support, or the
    /// long form used more than four length octets.
    LengthExceedsMax,

    /// Canonical encoding rule violated (`INTEGER` with a redundant leading
    /// octet, non-empty `NULL`, primitive `SEQUENCE`).
    NonCanonical,

    /// `BIT STRING` declared more than 7 unused bits.
    MaxUnusedBitsExceeded,

    /// `BIT STRING` with an empty payload, i.e. missing the unused-bits
    /// count octet.
    Empty,

    /// `OBJECT IDENTIFIER` payload exceeds the supported length.
    OidTooLong,

    /// Identifier octet used the multi-byte tag number form (tag bits
    /// 5..1 all set), which this crate does not support.
    HighTagNumberNotSupported,

    /// `OCTET STRING` payload length did not match the expected
    /// fixed-length array.
    WrongArrayLength,

    /// Integer value does not fit the destination type.
    Overflow,

    /// Value matched none of the alternatives of a choice.
    Cast,

    /// PEM label does not name a supported key encoding.
    UnknownEncoding,

    /// Algorithm identifier names an unsupported algorithm.
    UnsupportedAlgorithm {
        /// OID of the algorithm that was encountered.
        oid: ObjectIdentifier,
    },
}

impl ErrorKind {
    /// Annotate this [`ErrorKind`] with the position where it occurred,
    /// returning an error.
    pub fn at(self, position: usize) -> Error {
        Error::new(self, position)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::EndOfInput => f.write_str("unexpected end of input"),
            ErrorKind::Parse => f.write_str("malformed text"),
            ErrorKind::UnexpectedTag { byte } => {
                write!(f, "unexpected ASN.1 tag: 0x{:02x}", byte)
            }
            ErrorKind::UnexpectedClass { class } => {
                write!(f, "unexpected ASN.1 class: {}", class)
            }
            ErrorKind::IndefiniteLength => f.write_str("indefinite length forbidden in DER"),
            ErrorKind::LengthExceedsMax => f.write_str("length exceeds supported maximum"),
            ErrorKind::NonCanonical => f.write_str("value is not canonically encoded"),
            ErrorKind::MaxUnusedBitsExceeded => {
                f.write_str("BIT STRING declares more than 7 unused bits")
            }
            ErrorKind::Empty => f.write_str("BIT STRING payload is empty"),
            ErrorKind::OidTooLong => f.write_str("OBJECT IDENTIFIER is too long"),
            ErrorKind::HighTagNumberNotSupported => {
                f.write_str("multi-byte tag numbers are not supported")
            }
            ErrorKind::WrongArrayLength => {
                f.write_str("OCTET STRING length does not match expected array length")
            }
            ErrorKind::Overflow => f.write_str("integer overflow"),
            ErrorKind::Cast => f.write_str("value matched no alternative"),
            ErrorKind::UnknownEncoding => f.write_str("unrecognized PEM label"),
            ErrorKind::UnsupportedAlgorithm { oid } => {
                write!(f, "unsupported algorithm: {}", oid)
            }
        }
    }
}
