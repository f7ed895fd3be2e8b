use std::collections::HashMap;
use std::fmt;

use crate::severity;
use crate::wire::{DecodeError, WireCursor};

/// Structured error or notice reported by the server.
///
/// Wraps the field map of an `ErrorResponse`/`NoticeResponse` payload. Field
/// codes are opaque single bytes; only `S` (severity) and `M` (message)
/// carry semantics inside this crate. Everything else — SQLSTATE code,
/// detail, hint, position — passes through for the caller to interpret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerError {
    fields: HashMap<u8, String>,
}

impl ServerError {
    /// Decodes the tagged field sequence of an error or notice payload.
    ///
    /// Reads one field-code byte followed by one NUL-terminated value per
    /// field, until a zero code byte terminates the sequence. A buffer that
    /// runs out before the terminator fails with a [`DecodeError`] rather
    /// than looping.
    pub fn decode(buf: &mut WireCursor<'_>) -> Result<Self, DecodeError> {
        let mut fields = HashMap::new();
        loop {
            let code = buf.next_byte()?;
            if code == 0 {
                return Ok(Self { fields });
            }
            fields.insert(code, buf.next_string()?);
        }
    }

    /// Builds an error directly from `(code, value)` pairs.
    ///
    /// Intended for callers that already hold decoded fields, and for tests.
    pub fn from_fields<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, V)>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(code, value)| (code, value.into()))
                .collect(),
        }
    }

    /// Returns the value of a field, or `""` when the code is absent.
    pub fn field(&self, code: u8) -> &str {
        self.fields.get(&code).map(String::as_str).unwrap_or("")
    }

    /// Returns the severity field `S`.
    pub fn severity(&self) -> &str {
        self.field(b'S')
    }

    /// Returns the human-readable message field `M`.
    pub fn message(&self) -> &str {
        self.field(b'M')
    }

    /// True iff the severity is exactly `FATAL`.
    ///
    /// `PANIC` and every other severity are non-fatal here; the match is
    /// case-sensitive and exact.
    pub fn is_fatal(&self) -> bool {
        self.severity() == severity::FATAL
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "server error:")?;
        let mut codes: Vec<u8> = self.fields.keys().copied().collect();
        codes.sort_unstable();
        for code in codes {
            write!(f, " {}:{:?}", code as char, self.fields[&code])?;
        }
        Ok(())
    }
}

impl std::error::Error for ServerError {}

/// Server error reduced to its message field.
///
/// Used during the connection handshake, where the structured fields are
/// not yet actionable and only the bare message is meaningful.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartupError(ServerError);

impl StartupError {
    /// Returns the message field `M` of the underlying error.
    pub fn message(&self) -> &str {
        self.0.message()
    }
}

impl From<ServerError> for StartupError {
    fn from(err: ServerError) -> Self {
        Self(err)
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for StartupError {}
