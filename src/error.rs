use crate::message::{ServerError, StartupError};

/// Error type returned by driver operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The connection is broken and must not be reused. Pool logic detects
    /// this variant by identity, never by message text.
    #[error("driver: bad connection")]
    ConnectionBad,
    /// Non-fatal structured error reported by the server, fields preserved
    /// verbatim.
    #[error(transparent)]
    Server(ServerError),
    /// Server error reduced to its message, reported during the connection
    /// handshake.
    #[error(transparent)]
    Startup(StartupError),
    /// Any other recoverable operational failure.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// True iff this is the connection-discard sentinel.
    pub fn is_connection_bad(&self) -> bool {
        matches!(self, Self::ConnectionBad)
    }
}
