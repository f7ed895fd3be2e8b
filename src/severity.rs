//! Severity codes carried in field `S` of a server error or notice.

/// The session is terminating; the connection must be discarded.
pub const FATAL: &str = "FATAL";
/// The whole server is restarting. Not treated as connection-fatal by the
/// classifier; only [`FATAL`] is.
pub const PANIC: &str = "PANIC";
pub const WARNING: &str = "WARNING";
pub const NOTICE: &str = "NOTICE";
pub const DEBUG: &str = "DEBUG";
pub const INFO: &str = "INFO";
pub const LOG: &str = "LOG";
