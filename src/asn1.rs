//! ASN.1 type primitives: typed views over the byte region of a DER header.

mod any;
mod bit_string;
mod context_specific;
mod integer;
mod null;
mod octet_string;
mod oid;
mod sequence;

pub use self::{
    any::Any,
    bit_string::BitString,
    context_specific::{ContextSpecific, TagMode},
    null::Null,
    octet_string::OctetString,
    oid::{Arc, Arcs, ObjectIdentifier},
    sequence::Sequence,
};
