//! X.509 `AlgorithmIdentifier`.

use crate::{Any, Decodable, Decoder, Error, Null, ObjectIdentifier, Result};
use core::convert::TryFrom;

/// X.509 `AlgorithmIdentifier` as defined in [RFC 5280 Section 4.1.1.2].
///
/// ```text
/// AlgorithmIdentifier  ::=  SEQUENCE  {
///      algorithm               OBJECT IDENTIFIER,
///      parameters              ANY DEFINED BY algorithm OPTIONAL  }
/// ```
///
/// [RFC 5280 Section 4.1.1.2]: https://tools.ietf.org/html/rfc5280#section-4.1.1.2
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AlgorithmIdentifier<'a> {
    /// Algorithm OID, i.e. the `algorithm` field in the
    /// `AlgorithmIdentifier` ASN.1 schema.
    pub oid: ObjectIdentifier,

    /// Algorithm `parameters`.
    pub parameters: Option<AlgorithmParameters<'a>>,
}

impl<'a> AlgorithmIdentifier<'a> {
    /// Get the `parameters` field as an [`ObjectIdentifier`].
    ///
    /// Returns `None` if parameters are absent or not an OID.
    pub fn parameters_oid(&self) -> Option<ObjectIdentifier> {
        self.parameters.and_then(AlgorithmParameters::oid)
    }
}

impl<'a> TryFrom<Any<'a>> for AlgorithmIdentifier<'a> {
    type Error = Error;

    fn try_from(any: Any<'a>) -> Result<AlgorithmIdentifier<'a>> {
        any.sequence(|decoder| {
            let oid = decoder.decode()?;
            let parameters = decoder.optional()?;
            Ok(Self { oid, parameters })
        })
    }
}

/// The `parameters` field of `AlgorithmIdentifier`.
///
/// This is an algorithm-defined `ANY` field, modeled as a choice over the
/// shapes in actual use: an OID (as used by `id-ecPublicKey` to name the
/// curve), an ASN.1 `NULL` (as RSA requires per [RFC 3279 Section 2.3.1]),
/// or any other value as a catch-all.
///
/// [RFC 3279 Section 2.3.1]: https://tools.ietf.org/html/rfc3279#section-2.3.1
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum AlgorithmParameters<'a> {
    /// [`ObjectIdentifier`] that names a sub-algorithm.
    Oid(ObjectIdentifier),

    /// ASN.1 `NULL` value.
    Null,

    /// Catch-all ASN.1 `ANY` value.
    Any(Any<'a>),
}

impl<'a> AlgorithmParameters<'a> {
    /// Get the OID value, if applicable.
    pub fn oid(self) -> Option<ObjectIdentifier> {
        if let AlgorithmParameters::Oid(oid) = self {
            Some(oid)
        } else {
            None
        }
    }

    /// Is this parameter value `NULL`?
    pub fn is_null(self) -> bool {
        self == AlgorithmParameters::Null
    }
}

impl<'a> Decodable<'a> for AlgorithmParameters<'a> {
    fn decode(decoder: &mut Decoder<'a>) -> Result<Self> {
        decoder.choice(&[
            &|d: &mut Decoder<'a>| d.decode::<ObjectIdentifier>().map(AlgorithmParameters::Oid),
            &|d: &mut Decoder<'a>| d.decode::<Null>().map(|_| AlgorithmParameters::Null),
            &|d: &mut Decoder<'a>| d.any().map(AlgorithmParameters::Any),
        ])
    }
}
