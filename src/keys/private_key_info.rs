//! PKCS#8 `PrivateKeyInfo`.

use crate::{
    AlgorithmIdentifier, Any, BitString, ContextSpecific, EcPrivateKey, Error, OctetString,
    Result, TagMode, TagNumber,
};
use core::{convert::TryFrom, fmt};

/// PKCS#8 `PrivateKeyInfo`.
///
/// ASN.1 structure containing an [`AlgorithmIdentifier`] and private key
/// data, described in [RFC 5208 Section 5] and extended with a public key
/// field by the PKCS#8v2 `OneAsymmetricKey` structure of [RFC 5958]:
///
/// ```text
/// OneAsymmetricKey ::= SEQUENCE {
///     version                   Version,
///     privateKeyAlgorithm       PrivateKeyAlgorithmIdentifier,
///     privateKey                PrivateKey,
///     attributes            [0] Attributes OPTIONAL,
///     ...,
///     [[2: publicKey        [1] PublicKey OPTIONAL ]],
///     ...
/// }
/// ```
///
/// The `privateKey` OCTET STRING nests the algorithm-specific key
/// structure; with the elliptic curve algorithm this is an
/// [`EcPrivateKey`].
///
/// [RFC 5208 Section 5]: https://tools.ietf.org/html/rfc5208#section-5
/// [RFC 5958]: https://datatracker.ietf.org/doc/html/rfc5958
#[derive(Clone)]
pub struct PrivateKeyInfo<'a> {
    /// Structure version: 0, or 1 when the public key is present.
    pub version: u8,

    /// X.509 [`AlgorithmIdentifier`] for the private key type.
    pub algorithm: AlgorithmIdentifier<'a>,

    /// Private key data, parsed out of the nested `privateKey`
    /// OCTET STRING.
    pub private_key: EcPrivateKey<'a>,

    /// Attributes, kept unparsed.
    pub attributes: Option<Any<'a>>,

    /// Public key, present in PKCS#8v2 documents.
    pub public_key: Option<BitString<'a>>,
}

impl<'a> TryFrom<Any<'a>> for PrivateKeyInfo<'a> {
    type Error = Error;

    fn try_from(any: Any<'a>) -> Result<PrivateKeyInfo<'a>> {
        any.sequence(|decoder| {
            let version = decoder.decode::<u8>()?;
            let algorithm = decoder.decode()?;
            let private_key = decoder.decode::<OctetString<'a>>()?.decode_nested()?;

            let attributes = ContextSpecific::new(TagNumber::new(0), TagMode::Implicit)
                .decode_any_optional(decoder)?;

            let public_key = ContextSpecific::new(TagNumber::new(1), TagMode::Implicit)
                .decode_optional(decoder)?;

            Ok(Self {
                version,
                algorithm,
                private_key,
                attributes,
                public_key,
            })
        })
    }
}

impl<'a> fmt::Debug for PrivateKeyInfo<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyInfo")
            .field("version", &self.version)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::PrivateKeyInfo;
    use crate::{Decodable, ErrorKind, EC_PUBLIC_KEY_OID, SECP256R1_OID};
    use hex_literal::hex;

    /// PKCS#8 document wrapping a bare `ECPrivateKey`
    const PKCS8: &[u8] = &hex!(
        "30 3c
         02 01 00
         30 13 06 07 2a8648ce3d0201 06 08 2a8648ce3d030107
         04 22
         30 20
         02 01 01
         04 1b aabbccddeeff00112233445566778899aabbccddeeff0011223344"
    );

    #[test]
    fn decode() {
        let info = PrivateKeyInfo::from_der(PKCS8).unwrap();
        assert_eq!(info.version, 0);
        assert_eq!(info.algorithm.oid, EC_PUBLIC_KEY_OID);
        assert_eq!(info.algorithm.parameters_oid(), Some(SECP256R1_OID));
        assert_eq!(info.private_key.version, 1);
        assert_eq!(info.attributes, None);
        assert_eq!(info.public_key, None);
    }

    #[test]
    fn decode_v2_with_attributes_and_public_key() {
        let pkcs8v2 = hex!(
            "30 2a
             02 01 01
             30 13 06 07 2a8648ce3d0201 06 08 2a8648ce3d030107
             04 07
             30 05 02 01 01 04 00
             a0 02 05 00
             81 03 00 aabb"
        );

        let info = PrivateKeyInfo::from_der(&pkcs8v2).unwrap();
        assert_eq!(info.version, 1);

        let attributes = info.attributes.unwrap();
        assert_eq!(attributes.tag().number(), 0);
        assert_eq!(attributes.as_bytes(), &[0x05, 0x00]);

        let public_key = info.public_key.unwrap();
        assert_eq!(public_key.unused_bits(), 0);
        assert_eq!(public_key.as_bytes(), &[0xAA, 0xBB]);
    }

    #[test]
    fn reject_truncated_nested_key() {
        // the nested OCTET STRING ends mid-ECPrivateKey
        let truncated = hex!(
            "30 1e
             02 01 00
             30 13 06 07 2a8648ce3d0201 06 08 2a8648ce3d030107
             04 04
             30 20 02 01"
        );

        assert_eq!(
            PrivateKeyInfo::from_der(&truncated).err().map(|e| e.kind()),
            Some(ErrorKind::EndOfInput)
        );
    }
}
