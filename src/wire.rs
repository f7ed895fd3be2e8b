use bytes::Buf;
use std::io::Cursor;

/// Failure while reading a wire payload.
///
/// Every variant is deterministic: a malformed buffer fails on the first
/// short read instead of looping or reading past the end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The buffer ended before the requested bytes.
    #[error("truncated message: need {needed} byte(s), {remaining} remain")]
    Truncated { needed: usize, remaining: usize },
    /// A string field has no NUL terminator before the buffer end.
    #[error("unterminated string in message")]
    UnterminatedString,
    /// A string field is not valid UTF-8.
    #[error("invalid UTF-8 in string field")]
    InvalidUtf8,
}

/// Read cursor over one incoming message payload.
///
/// The transport layer hands this a slice positioned at the start of the
/// payload body; reads advance the position and nothing else.
#[derive(Debug)]
pub struct WireCursor<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> WireCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    /// Returns the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Reads the next byte.
    pub fn next_byte(&mut self) -> Result<u8, DecodeError> {
        if !self.cursor.has_remaining() {
            return Err(DecodeError::Truncated {
                needed: 1,
                remaining: 0,
            });
        }
        Ok(self.cursor.get_u8())
    }

    /// Reads the next NUL-terminated string, consuming the terminator.
    pub fn next_string(&mut self) -> Result<String, DecodeError> {
        let chunk = self.cursor.chunk();
        let end = chunk
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::UnterminatedString)?;
        let text = std::str::from_utf8(&chunk[..end])
            .map_err(|_| DecodeError::InvalidUtf8)?
            .to_owned();
        self.cursor.advance(end + 1);
        Ok(text)
    }
}
