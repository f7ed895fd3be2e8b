use crate::classify::{self, HandshakeVerdict};
use crate::error::Error;
use crate::fault::Fault;
use crate::message::StartupError;

/// Failure surfaced by the handshake boundary.
#[derive(Debug, thiserror::Error)]
pub enum HandshakeError {
    /// Server rejected the startup sequence; reduced to its message.
    #[error(transparent)]
    Startup(StartupError),
    /// Fault this boundary does not classify, handed back unchanged for
    /// the caller's operational boundary.
    #[error(transparent)]
    Unclassified(Fault),
}

/// Runs one driver operation, converting a raised fault into the driver's
/// error type.
///
/// Classification happens exactly once, here, on the way out; nothing below
/// this boundary re-classifies. At most one fault is captured per
/// invocation — the one the operation returns. A [`Fault::Defect`]
/// propagates as a panic and is never converted into an `Err`.
pub fn run_operation<T, F>(op: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Fault>,
{
    op().map_err(classify::operational)
}

/// Runs one startup-phase operation.
///
/// A server rejection comes back as [`HandshakeError::Startup`] carrying
/// only the message text. A [`Fault::Defect`] propagates as a panic, never
/// as an `Err`, just as at [`run_operation`]. Any other fault comes back
/// unchanged in [`HandshakeError::Unclassified`]; deciding what it means is
/// the outer operational boundary's job.
pub fn run_handshake<T, F>(op: F) -> Result<T, HandshakeError>
where
    F: FnOnce() -> Result<T, Fault>,
{
    op().map_err(|fault| match classify::handshake(fault) {
        HandshakeVerdict::Startup(err) => HandshakeError::Startup(err),
        HandshakeVerdict::Propagate(fault) => HandshakeError::Unclassified(fault),
    })
}
