//! Cursor over an input byte slice, shared by the PEM text reader and the
//! ASN.1 DER reader.

use crate::{Any, Decodable, Error, ErrorKind, Result};

/// Decoder: a single-pass, rewindable cursor over an input byte slice.
///
/// Combinators which can fail do not advance the cursor past the point
/// where they could still succeed; callers implementing a backtracking
/// alternative save the cursor with [`Decoder::position`] and restore it
/// with [`Decoder::rewind`].
pub struct Decoder<'a> {
    /// Byte slice being decoded.
    bytes: &'a [u8],

    /// Position within the decoded slice.
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Create a new decoder for the given byte slice.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Decode a value which impls the [`Decodable`] trait.
    pub fn decode<T: Decodable<'a>>(&mut self) -> Result<T> {
        T::decode(self)
    }

    /// Attempt to decode an ASN.1 `ANY` value.
    pub fn any(&mut self) -> Result<Any<'a>> {
        self.decode()
    }

    /// Look at the next byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Consume a single byte, updating the internal cursor.
    pub fn byte(&mut self) -> Result<u8> {
        let byte = self.peek().ok_or_else(|| self.error(ErrorKind::EndOfInput))?;
        self.pos += 1;
        Ok(byte)
    }

    /// Obtain a slice of bytes of the given length from the current cursor
    /// position, or return an error if insufficient data remains.
    pub fn bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining().len() {
            return Err(self.error(ErrorKind::EndOfInput));
        }

        let result = &self.remaining()[..len];
        self.pos += len;
        Ok(result)
    }

    /// Consume the given literal.
    ///
    /// Fails with [`ErrorKind::Parse`] when the upcoming bytes differ from
    /// the literal, leaving the cursor unchanged.
    pub fn expect(&mut self, literal: &[u8]) -> Result<()> {
        if self.remaining().len() < literal.len() {
            return Err(self.error(ErrorKind::EndOfInput));
        }

        if &self.remaining()[..literal.len()] == literal {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(self.error(ErrorKind::Parse))
        }
    }

    /// Consume one byte provided it is a member of the given set, leaving
    /// the cursor unchanged otherwise.
    pub fn accept_any_of(&mut self, set: &[u8]) -> Result<u8> {
        match self.peek() {
            Some(byte) if set.contains(&byte) => {
                self.pos += 1;
                Ok(byte)
            }
            Some(_) => Err(self.error(ErrorKind::Parse)),
            None => Err(self.error(ErrorKind::EndOfInput)),
        }
    }

    /// Consume bytes while the predicate holds, returning them (possibly
    /// empty).
    pub fn take_while(&mut self, mut predicate: impl FnMut(u8) -> bool) -> &'a [u8] {
        let start = self.pos;

        while let Some(byte) = self.peek() {
            if !predicate(byte) {
                break;
            }

            self.pos += 1;
        }

        &self.bytes[start..self.pos]
    }

    /// Consume bytes while the predicate holds, requiring at least one
    /// match.
    pub fn take_while1(&mut self, predicate: impl FnMut(u8) -> bool) -> Result<&'a [u8]> {
        if self.is_finished() {
            return Err(self.error(ErrorKind::EndOfInput));
        }

        match self.take_while(predicate) {
            [] => Err(self.error(ErrorKind::Parse)),
            matched => Ok(matched),
        }
    }

    /// Discard bytes while the predicate holds.
    pub fn skip_while(&mut self, predicate: impl FnMut(u8) -> bool) {
        let _ = self.take_while(predicate);
    }

    /// Get the current cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Restore a cursor position previously obtained from
    /// [`Decoder::position`].
    pub fn rewind(&mut self, position: usize) {
        debug_assert!(position <= self.pos);
        self.pos = position;
    }

    /// Have all of the bytes in this decoder been consumed?
    pub fn is_finished(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Attempt to decode an `OPTIONAL` value.
    ///
    /// An exhausted decoder yields `None`, as does a failed attempt, which
    /// additionally restores the cursor to where the attempt began. A
    /// truncation error inside the attempted value is fatal and propagates.
    pub fn optional<T: Decodable<'a>>(&mut self) -> Result<Option<T>> {
        self.attempt(T::decode)
    }

    /// Try each alternative of a choice in declaration order, restoring the
    /// cursor between attempts. The first success wins.
    ///
    /// An exhausted decoder propagates [`ErrorKind::EndOfInput`]; if no
    /// alternative matches the error is [`ErrorKind::Cast`].
    pub fn choice<T>(
        &mut self,
        alternatives: &[&dyn Fn(&mut Decoder<'a>) -> Result<T>],
    ) -> Result<T> {
        if self.is_finished() {
            return Err(self.error(ErrorKind::EndOfInput));
        }

        let checkpoint = self.pos;

        for alternative in alternatives {
            match alternative(self) {
                Ok(value) => return Ok(value),
                Err(e) if e.kind() == ErrorKind::EndOfInput => return Err(e),
                Err(_) => self.rewind(checkpoint),
            }
        }

        Err(self.error(ErrorKind::Cast))
    }

    /// Run a fallible decode attempt with rewind-on-failure semantics
    /// (see [`Decoder::optional`]).
    pub(crate) fn attempt<T>(
        &mut self,
        f: impl FnOnce(&mut Decoder<'a>) -> Result<T>,
    ) -> Result<Option<T>> {
        if self.is_finished() {
            return Ok(None);
        }

        let checkpoint = self.pos;

        match f(self) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::EndOfInput => Err(e),
            Err(_) => {
                self.rewind(checkpoint);
                Ok(None)
            }
        }
    }

    /// Create an error annotated with the current cursor position.
    pub(crate) fn error(&self, kind: ErrorKind) -> Error {
        kind.at(self.pos)
    }

    /// Obtain the remaining bytes in this decoder from the current cursor
    /// position.
    fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl<'a> From<&'a [u8]> for Decoder<'a> {
    fn from(bytes: &'a [u8]) -> Decoder<'a> {
        Decoder::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::Decoder;
    use crate::{ErrorKind, Null, Result};

    #[test]
    fn byte_and_bytes() {
        let mut decoder = Decoder::new(&[1, 2, 3]);
        assert_eq!(decoder.peek(), Some(1));
        assert_eq!(decoder.byte().unwrap(), 1);
        assert_eq!(decoder.bytes(2).unwrap(), &[2, 3]);
        assert_eq!(
            decoder.byte().err().map(|e| e.kind()),
            Some(ErrorKind::EndOfInput)
        );
    }

    #[test]
    fn expect_leaves_cursor_on_mismatch() {
        let mut decoder = Decoder::new(b"-----END");
        assert_eq!(
            decoder.expect(b"-----BEGIN").err().map(|e| e.kind()),
            Some(ErrorKind::EndOfInput)
        );
        assert_eq!(
            decoder.expect(b"---end").err().map(|e| e.kind()),
            Some(ErrorKind::Parse)
        );
        assert_eq!(decoder.position(), 0);
        decoder.expect(b"-----").unwrap();
        assert_eq!(decoder.position(), 5);
    }

    #[test]
    fn accept_any_of_leaves_cursor_on_mismatch() {
        let mut decoder = Decoder::new(b"\r\n");
        assert_eq!(
            decoder.accept_any_of(&[b'x', b'y']).err().map(|e| e.kind()),
            Some(ErrorKind::Parse)
        );
        assert_eq!(decoder.accept_any_of(&[b'\r', b'\n']).unwrap(), b'\r');
        assert_eq!(decoder.position(), 1);
    }

    #[test]
    fn take_while_variants() {
        let mut decoder = Decoder::new(b"abc123");
        assert_eq!(decoder.take_while(|b| b.is_ascii_alphabetic()), b"abc");
        assert!(decoder.take_while1(|b| b.is_ascii_alphabetic()).is_err());
        assert_eq!(decoder.position(), 3);
        assert_eq!(
            decoder.take_while1(|b| b.is_ascii_digit()).unwrap(),
            b"123"
        );
        assert_eq!(
            decoder
                .take_while1(|b| b.is_ascii_digit())
                .err()
                .map(|e| e.kind()),
            Some(ErrorKind::EndOfInput)
        );
    }

    #[test]
    fn rewind_restores_saved_position() {
        let mut decoder = Decoder::new(b"abcdef");
        let checkpoint = decoder.position();
        decoder.bytes(4).unwrap();
        decoder.rewind(checkpoint);
        assert_eq!(decoder.bytes(3).unwrap(), b"abc");
    }

    #[test]
    fn optional_absent_when_exhausted() {
        let mut decoder = Decoder::new(&[]);
        assert_eq!(decoder.optional::<Null>().unwrap(), None);
    }

    #[test]
    fn optional_rewinds_on_mismatch() {
        // INTEGER 5 is not a NULL; the cursor must be back at the start
        let mut decoder = Decoder::new(&[0x02, 0x01, 0x05]);
        assert_eq!(decoder.optional::<Null>().unwrap(), None);
        assert_eq!(decoder.decode::<i8>().unwrap(), 5);
    }

    #[test]
    fn optional_propagates_truncation() {
        // NULL header promising a byte which is not there
        let mut decoder = Decoder::new(&[0x05, 0x01]);
        assert_eq!(
            decoder.optional::<Null>().err().map(|e| e.kind()),
            Some(ErrorKind::EndOfInput)
        );
    }

    #[test]
    fn choice_takes_first_matching_alternative() {
        let mut decoder = Decoder::new(&[0x02, 0x01, 0x2A]);

        let value: i8 = decoder
            .choice(&[
                &|d: &mut Decoder<'_>| d.decode::<Null>().map(|_| 0),
                &|d: &mut Decoder<'_>| d.decode::<i8>(),
            ])
            .unwrap();

        assert_eq!(value, 42);
    }

    #[test]
    fn choice_without_match_is_cast() {
        let mut decoder = Decoder::new(&[0x04, 0x00]);

        let result: Result<i8> =
            decoder.choice(&[&|d: &mut Decoder<'_>| d.decode::<i8>()]);

        assert_eq!(result.err().map(|e| e.kind()), Some(ErrorKind::Cast));
        // the failed alternative must not consume input
        assert_eq!(decoder.position(), 0);
    }

    #[test]
    fn choice_on_exhausted_input() {
        let mut decoder = Decoder::new(&[]);

        let result: Result<i8> =
            decoder.choice(&[&|d: &mut Decoder<'_>| d.decode::<i8>()]);

        assert_eq!(result.err().map(|e| e.kind()), Some(ErrorKind::EndOfInput));
    }
}
