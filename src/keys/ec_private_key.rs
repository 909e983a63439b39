//! SEC1 elliptic curve private key structure.

use crate::{
    Any, BitString, ContextSpecific, Error, ObjectIdentifier, Result, TagMode, TagNumber,
};
use core::{convert::TryFrom, fmt};

/// Elliptic curve private key structure as described in [RFC 5915
/// Section 3]:
///
/// ```text
/// ECPrivateKey ::= SEQUENCE {
///     version        INTEGER { ecPrivkeyVer1(1) } (ecPrivkeyVer1),
///     privateKey     OCTET STRING,
///     parameters [0] ECParameters {{ NamedCurve }} OPTIONAL,
///     publicKey  [1] BIT STRING OPTIONAL
/// }
/// ```
///
/// The context-specific fields are tagged `EXPLICIT`, as RFC 5915 mandates.
/// A `parameters` field naming a curve other than the one the caller
/// expects is not a decoding error; callers check it via
/// [`EcPrivateKey::parameters`].
///
/// [RFC 5915 Section 3]: https://datatracker.ietf.org/doc/html/rfc5915#section-3
#[derive(Clone)]
pub struct EcPrivateKey<'a> {
    /// Structure version (always 1).
    pub version: u8,

    /// Private key data.
    pub private_key: &'a [u8],

    /// Elliptic curve parameters: the OID of a named curve.
    pub parameters: Option<ObjectIdentifier>,

    /// Encoded public key: an uncompressed or compressed elliptic curve
    /// point, carried as-is.
    pub public_key: Option<BitString<'a>>,
}

impl<'a> TryFrom<Any<'a>> for EcPrivateKey<'a> {
    type Error = Error;

    fn try_from(any: Any<'a>) -> Result<EcPrivateKey<'a>> {
        any.sequence(|decoder| {
            let version = decoder.decode::<u8>()?;
            let private_key = decoder.decode::<&'a [u8]>()?;

            let parameters = ContextSpecific::new(TagNumber::new(0), TagMode::Explicit)
                .decode_optional(decoder)?;

            let public_key = ContextSpecific::new(TagNumber::new(1), TagMode::Explicit)
                .decode_optional(decoder)?;

            Ok(Self {
                version,
                private_key,
                parameters,
                public_key,
            })
        })
    }
}

impl<'a> fmt::Debug for EcPrivateKey<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcPrivateKey")
            .field("version", &self.version)
            .field("parameters", &self.parameters)
            .field("public_key", &self.public_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::EcPrivateKey;
    use crate::{Decodable, ObjectIdentifier};
    use hex_literal::hex;

    /// P-256 key with no optional fields present
    const BARE: &[u8] = &hex!(
        "30 25
         02 01 01
         04 20 aabbccddeeff00112233445566778899aabbccddeeff00112233445566778899"
    );

    #[test]
    fn decode_without_optional_fields() {
        let key = EcPrivateKey::from_der(BARE).unwrap();
        assert_eq!(key.version, 1);
        assert_eq!(key.private_key.len(), 32);
        assert_eq!(key.parameters, None);
        assert_eq!(key.public_key, None);
    }

    #[test]
    fn decode_with_parameters() {
        let der = hex!(
            "30 31
             02 01 01
             04 20 aabbccddeeff00112233445566778899aabbccddeeff00112233445566778899
             a0 0a 06 08 2a8648ce3d030107"
        );

        let key = EcPrivateKey::from_der(&der).unwrap();
        assert_eq!(
            key.parameters,
            Some(ObjectIdentifier::new("1.2.840.10045.3.1.7"))
        );
        assert_eq!(key.public_key, None);
    }

    #[test]
    fn debug_omits_private_key() {
        extern crate std;
        use std::format;

        let key = EcPrivateKey::from_der(BARE).unwrap();
        assert!(!format!("{:?}", key).contains("aabbcc"));
    }
}
