//! Common handling for byte slices backing decoded values.

use crate::{Length, Result};
use core::convert::TryFrom;

/// Byte slice whose length is guaranteed to fit in a [`Length`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub(crate) struct ByteSlice<'a> {
    /// Inner value
    inner: &'a [u8],
}

impl<'a> ByteSlice<'a> {
    /// Create a new [`ByteSlice`], ensuring that its length is in range.
    pub fn new(slice: &'a [u8]) -> Result<Self> {
        Length::try_from(slice.len())?;
        Ok(Self { inner: slice })
    }

    /// Borrow the inner byte slice.
    pub fn as_bytes(self) -> &'a [u8] {
        self.inner
    }

    /// Get the length of the inner byte slice.
    pub fn len(self) -> Length {
        debug_assert!(Length::try_from(self.inner.len()).is_ok());
        Length::try_from(self.inner.len()).unwrap_or(Length::MAX)
    }

    /// Is the inner byte slice empty?
    pub fn is_empty(self) -> bool {
        self.inner.is_empty()
    }
}

impl AsRef<[u8]> for ByteSlice<'_> {
    fn as_ref(&self) -> &[u8] {
        self.inner
    }
}
