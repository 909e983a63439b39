//! X.509 `SubjectPublicKeyInfo`.

use crate::{AlgorithmIdentifier, Any, BitString, Error, Result};
use core::convert::TryFrom;

/// X.509 `SubjectPublicKeyInfo` (SPKI) as defined in [RFC 5280
/// Section 4.1.2.7]:
///
/// ```text
/// SubjectPublicKeyInfo  ::=  SEQUENCE  {
///      algorithm            AlgorithmIdentifier,
///      subjectPublicKey     BIT STRING  }
/// ```
///
/// [RFC 5280 Section 4.1.2.7]: https://tools.ietf.org/html/rfc5280#section-4.1.2.7
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SubjectPublicKeyInfo<'a> {
    /// X.509 [`AlgorithmIdentifier`] for the public key type.
    pub algorithm: AlgorithmIdentifier<'a>,

    /// Public key data.
    pub subject_public_key: BitString<'a>,
}

impl<'a> TryFrom<Any<'a>> for SubjectPublicKeyInfo<'a> {
    type Error = Error;

    fn try_from(any: Any<'a>) -> Result<SubjectPublicKeyInfo<'a>> {
        any.sequence(|decoder| {
            let algorithm = decoder.decode()?;
            let subject_public_key = decoder.decode()?;

            Ok(Self {
                algorithm,
                subject_public_key,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SubjectPublicKeyInfo;
    use crate::{Decodable, EC_PUBLIC_KEY_OID, SECP256R1_OID};
    use hex_literal::hex;

    #[test]
    fn decode() {
        // P-256 public key; the point is fabricated but well-formed
        let der = hex!(
            "30 59
             30 13 06 07 2a8648ce3d0201 06 08 2a8648ce3d030107
             03 42 00
             04
             1111111111111111111111111111111111111111111111111111111111111111
             2222222222222222222222222222222222222222222222222222222222222222"
        );

        let spki = SubjectPublicKeyInfo::from_der(&der).unwrap();
        assert_eq!(spki.algorithm.oid, EC_PUBLIC_KEY_OID);
        assert_eq!(spki.algorithm.parameters_oid(), Some(SECP256R1_OID));
        assert_eq!(spki.subject_public_key.unused_bits(), 0);

        let point = spki.subject_public_key.as_bytes();
        assert_eq!(point.len(), 65);
        assert_eq!(point[0], 0x04);
    }
}
