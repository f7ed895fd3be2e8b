use std::io;

use crate::message::ServerError;
use crate::wire::DecodeError;

/// Message text of a read that hit the end of the stream.
pub const END_OF_STREAM: &str = "EOF";

/// Message text the TLS layer produces when the server rejects the
/// handshake.
pub const TLS_HANDSHAKE_FAILURE: &str = "remote error: handshake failure";

/// A fault raised by a driver operation, before classification.
///
/// This is the closed set of fault shapes the classifier dispatches on.
/// Operations below the recovery boundary return these; the boundary turns
/// them into [`crate::Error`] values exactly once.
#[derive(Debug, thiserror::Error)]
pub enum Fault {
    /// Structured error payload sent by the server.
    #[error("{0}")]
    Server(#[from] ServerError),
    /// Failure in the byte-stream transport, including timeouts the
    /// transport surfaces as I/O errors.
    #[error("transport error: {0}")]
    Transport(#[from] io::Error),
    /// Any other operational failure, reduced to a message.
    #[error("{0}")]
    Other(String),
    /// A bug in the driver itself. Never converted into a returned error;
    /// the classifier propagates it as a panic.
    #[error("driver defect: {0}")]
    Defect(String),
}

impl Fault {
    /// Builds a generic operational fault.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Tags a fault as a programming error in the driver.
    pub fn defect(msg: impl Into<String>) -> Self {
        Self::Defect(msg.into())
    }

    /// Builds the end-of-stream fault raised when the server closes the
    /// connection mid-message.
    pub fn end_of_stream() -> Self {
        Self::Other(END_OF_STREAM.to_owned())
    }
}

impl From<DecodeError> for Fault {
    fn from(err: DecodeError) -> Self {
        Self::Other(err.to_string())
    }
}
