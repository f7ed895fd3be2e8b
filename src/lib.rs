//! `pgfault` is the error model and fault classification core for a
//! PostgreSQL wire-protocol driver.
//!
//! The crate does two things:
//! - decodes an `ErrorResponse`/`NoticeResponse` payload into a structured
//!   [`ServerError`] via [`ServerError::decode`]
//! - classifies a raised [`Fault`] into a driver-visible [`Error`] at one of
//!   two boundaries, [`run_operation`] and [`run_handshake`]
//!
//! It performs no I/O: the transport layer supplies the byte buffers and
//! tags its own failures as [`Fault::Transport`].

mod boundary;
mod classify;
mod error;
mod fault;
mod message;
pub mod severity;
mod wire;

pub use boundary::{run_handshake, run_operation, HandshakeError};
pub use error::Error;
pub use fault::{Fault, END_OF_STREAM, TLS_HANDSHAKE_FAILURE};
pub use message::{ServerError, StartupError};
pub use wire::{DecodeError, WireCursor};

pub type Result<T> = std::result::Result<T, Error>;
