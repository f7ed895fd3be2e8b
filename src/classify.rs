use crate::error::Error;
use crate::fault::{Fault, END_OF_STREAM, TLS_HANDSHAKE_FAILURE};
use crate::message::StartupError;

/// Classifies a fault raised by a general driver operation.
///
/// The match is exhaustive over [`Fault`], so a new fault shape is a
/// compile error here rather than a silent fallthrough. Rules, in order:
/// - a defect is a bug in the driver and is re-raised as a panic, never
///   converted into a returned error
/// - a fatal server error, any transport failure, an end-of-stream message,
///   or a TLS handshake rejection all mean the connection is unusable
/// - everything else surfaces verbatim
pub(crate) fn operational(fault: Fault) -> Error {
    match fault {
        Fault::Defect(msg) => panic!("driver defect: {msg}"),
        Fault::Server(err) if err.is_fatal() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("discarding connection after fatal server error: {err}");
            #[cfg(not(feature = "tracing"))]
            let _ = err;
            Error::ConnectionBad
        }
        Fault::Server(err) => Error::Server(err),
        Fault::Transport(err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("discarding connection after transport failure: {err}");
            #[cfg(not(feature = "tracing"))]
            let _ = err;
            Error::ConnectionBad
        }
        Fault::Other(msg) if msg == END_OF_STREAM || msg == TLS_HANDSHAKE_FAILURE => {
            Error::ConnectionBad
        }
        Fault::Other(msg) => Error::Other(msg),
    }
}

/// Verdict of the handshake-phase classifier.
pub(crate) enum HandshakeVerdict {
    /// Server rejected the startup sequence; reduced to its message.
    Startup(StartupError),
    /// Not classified at this boundary; handed back unchanged.
    Propagate(Fault),
}

/// Classifies a fault raised during the connection handshake.
///
/// Only server errors are meaningful to the caller at this phase, and only
/// their message text. A defect re-raises as a panic, same as at the
/// operational boundary; every other fault passes through for the
/// connection-level boundary to decide.
pub(crate) fn handshake(fault: Fault) -> HandshakeVerdict {
    match fault {
        Fault::Defect(msg) => panic!("driver defect: {msg}"),
        Fault::Server(err) => HandshakeVerdict::Startup(err.into()),
        other => HandshakeVerdict::Propagate(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ServerError;
    use std::io;

    fn fatal_server_error() -> ServerError {
        ServerError::from_fields([(b'S', "FATAL"), (b'M', "terminating connection")])
    }

    fn syntax_error() -> ServerError {
        ServerError::from_fields([(b'S', "ERROR"), (b'M', "syntax error"), (b'C', "42601")])
    }

    #[test]
    fn fatal_server_error_marks_connection_bad() {
        let classified = operational(Fault::Server(fatal_server_error()));
        assert_eq!(classified, Error::ConnectionBad);
    }

    #[test]
    fn non_fatal_server_error_surfaces_with_fields_intact() {
        let classified = operational(Fault::Server(syntax_error()));
        match classified {
            Error::Server(err) => {
                assert_eq!(err, syntax_error());
                assert_eq!(err.field(b'C'), "42601");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn panic_severity_is_not_connection_fatal() {
        let err = ServerError::from_fields([(b'S', "PANIC"), (b'M', "crash-restart")]);
        assert!(matches!(operational(Fault::Server(err)), Error::Server(_)));
    }

    #[test]
    fn transport_failure_marks_connection_bad() {
        let io_err = io::Error::new(io::ErrorKind::TimedOut, "read timed out");
        assert_eq!(operational(Fault::Transport(io_err)), Error::ConnectionBad);
    }

    #[test]
    fn end_of_stream_marks_connection_bad() {
        assert_eq!(operational(Fault::end_of_stream()), Error::ConnectionBad);
    }

    #[test]
    fn tls_handshake_rejection_marks_connection_bad() {
        let fault = Fault::other("remote error: handshake failure");
        assert_eq!(operational(fault), Error::ConnectionBad);
    }

    #[test]
    fn other_message_surfaces_verbatim() {
        let classified = operational(Fault::other("unexpected describe response"));
        assert_eq!(
            classified,
            Error::Other("unexpected describe response".to_owned())
        );
    }

    #[test]
    fn near_miss_sentinels_stay_generic() {
        assert!(matches!(operational(Fault::other("EOF ")), Error::Other(_)));
        assert!(matches!(
            operational(Fault::other("remote error: handshake failure!")),
            Error::Other(_)
        ));
    }

    #[test]
    #[should_panic(expected = "driver defect: slice index out of range")]
    fn defect_is_reraised_not_classified() {
        operational(Fault::defect("slice index out of range"));
    }

    #[test]
    fn handshake_reduces_server_error_to_message() {
        let verdict = handshake(Fault::Server(fatal_server_error()));
        match verdict {
            HandshakeVerdict::Startup(err) => {
                assert_eq!(err.to_string(), "terminating connection");
            }
            HandshakeVerdict::Propagate(_) => panic!("expected startup verdict"),
        }
    }

    #[test]
    fn handshake_propagates_transport_and_generic_faults() {
        let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            handshake(Fault::Transport(io_err)),
            HandshakeVerdict::Propagate(Fault::Transport(_))
        ));
        assert!(matches!(
            handshake(Fault::other("boom")),
            HandshakeVerdict::Propagate(Fault::Other(msg)) if msg == "boom"
        ));
    }

    #[test]
    #[should_panic(expected = "driver defect: null portal")]
    fn handshake_reraises_defects_not_classifies() {
        handshake(Fault::defect("null portal"));
    }
}
