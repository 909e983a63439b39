//! Typed views of the supported key container formats, plus the PEM label
//! dispatcher which turns a decoded document into key material.

mod algorithm;
mod ec_private_key;
mod private_key_info;
mod public_key_info;

#[cfg(feature = "alloc")]
mod decoded;

pub use self::{
    algorithm::{AlgorithmIdentifier, AlgorithmParameters},
    ec_private_key::EcPrivateKey,
    private_key_info::PrivateKeyInfo,
    public_key_info::SubjectPublicKeyInfo,
};

#[cfg(feature = "alloc")]
pub use self::decoded::{decode_pem, DecodedKey, KeyKind};

use crate::ObjectIdentifier;

/// `id-ecPublicKey` algorithm OID (RFC 5480): elliptic curve public key
/// cryptography.
pub const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new("1.2.840.10045.2.1");

/// `secp256r1` named curve OID (RFC 5480), a.k.a. NIST P-256 /
/// `prime256v1`.
pub const SECP256R1_OID: ObjectIdentifier = ObjectIdentifier::new("1.2.840.10045.3.1.7");
