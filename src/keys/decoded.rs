//! Key material decoded from a PEM document.

use crate::{
    Decodable, ErrorKind, PemDocument, PrivateKeyInfo, Result, SubjectPublicKeyInfo,
    EC_PUBLIC_KEY_OID,
};
use alloc::vec::Vec;
use core::fmt;
use zeroize::Zeroizing;

use super::ec_private_key::EcPrivateKey;

/// PEM type label for PKCS#8 private keys.
const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";

/// PEM type label for SEC1/RFC 5915 elliptic curve private keys.
const EC_PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";

/// PEM type label for `SubjectPublicKeyInfo` public keys.
const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// Kind of key material carried by a [`DecodedKey`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyKind {
    /// ECDSA private key: a raw scalar (32 bytes for P-256).
    EcdsaPrivateKey,

    /// ECDSA public key: an elliptic curve point as encoded in the
    /// document, uncompressed points being 65 bytes starting with `0x04`.
    EcdsaPublicKey,
}

/// Key material decoded from a PEM document.
///
/// Owns its backing storage, which is zeroed on drop. The bytes are
/// suitable for handing directly to a signing or verification primitive.
pub struct DecodedKey {
    /// Kind of key material.
    kind: KeyKind,

    /// Key bytes, copied out of the decoded document.
    bytes: Zeroizing<Vec<u8>>,
}

impl DecodedKey {
    /// Get the kind of key material.
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// Borrow the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn new(kind: KeyKind, bytes: &[u8]) -> Self {
        Self {
            kind,
            bytes: Zeroizing::new(bytes.to_vec()),
        }
    }
}

impl AsRef<[u8]> for DecodedKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for DecodedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedKey").field("kind", &self.kind).finish()
    }
}

/// Decode a PEM-encoded key document.
///
/// Dispatches on the PEM type label: `PRIVATE KEY` documents are decoded as
/// PKCS#8 [`PrivateKeyInfo`], `EC PRIVATE KEY` as RFC 5915
/// [`EcPrivateKey`], and `PUBLIC KEY` as [`SubjectPublicKeyInfo`]. Any
/// other label fails with [`ErrorKind::UnknownEncoding`].
///
/// The containers which carry an algorithm identifier must name the
/// elliptic curve public key algorithm; any other algorithm fails with
/// [`ErrorKind::UnsupportedAlgorithm`].
pub fn decode_pem(input: &[u8]) -> Result<DecodedKey> {
    let document = PemDocument::decode(input)?;

    match document.label() {
        PRIVATE_KEY_LABEL => {
            let info = PrivateKeyInfo::from_der(document.body())?;
            check_algorithm(info.algorithm.oid)?;
            Ok(DecodedKey::new(
                KeyKind::EcdsaPrivateKey,
                info.private_key.private_key,
            ))
        }
        EC_PRIVATE_KEY_LABEL => {
            let key = EcPrivateKey::from_der(document.body())?;
            Ok(DecodedKey::new(KeyKind::EcdsaPrivateKey, key.private_key))
        }
        PUBLIC_KEY_LABEL => {
            let info = SubjectPublicKeyInfo::from_der(document.body())?;
            check_algorithm(info.algorithm.oid)?;
            Ok(DecodedKey::new(
                KeyKind::EcdsaPublicKey,
                info.subject_public_key.as_bytes(),
            ))
        }
        _ => Err(ErrorKind::UnknownEncoding.into()),
    }
}

/// Verify the embedded algorithm OID names the elliptic curve public key
/// algorithm.
fn check_algorithm(oid: crate::ObjectIdentifier) -> Result<()> {
    if oid == EC_PUBLIC_KEY_OID {
        Ok(())
    } else {
        Err(ErrorKind::UnsupportedAlgorithm { oid }.into())
    }
}
