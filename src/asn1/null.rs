//! ASN.1 `NULL` support.

use crate::{Any, Error, ErrorKind, Result, Tag, Tagged};
use core::convert::TryFrom;

/// ASN.1 `NULL` type.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Null;

impl TryFrom<Any<'_>> for Null {
    type Error = Error;

    fn try_from(any: Any<'_>) -> Result<Null> {
        any.tag().expect(Tag::NULL)?;

        // X.690 Section 8.8.2: the contents octets shall not contain any
        // octets
        if any.is_empty() {
            Ok(Null)
        } else {
            Err(ErrorKind::NonCanonical.into())
        }
    }
}

impl Tagged for Null {
    const TAG: Tag = Tag::NULL;
}
