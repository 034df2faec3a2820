//! Reply definitions
//!
//! Represents replies read from the server.

use bytes::Bytes;

/// A decoded server reply
///
/// Exactly one reply arrives per command sent; the protocol is strictly
/// request/reply with no pipelining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `-message` line: the server rejected the command.
    ///
    /// The client facade surfaces this as [`LineupError::Server`] rather
    /// than a value, so it cannot be mistaken for a successful result.
    ///
    /// [`LineupError::Server`]: crate::error::LineupError::Server
    Error(String),

    /// `+text` line: short inline textual result
    Inline(String),

    /// `$size` header plus `size` raw bytes; the trailing CRLF terminator
    /// is consumed during decoding and is not part of the value
    Bulk(Bytes),
}

impl Reply {
    /// Get the inline value, if this is an inline reply
    pub fn as_inline(&self) -> Option<&str> {
        match self {
            Reply::Inline(value) => Some(value),
            _ => None,
        }
    }

    /// Get the bulk payload, if this is a bulk reply
    pub fn as_bulk(&self) -> Option<&Bytes> {
        match self {
            Reply::Bulk(data) => Some(data),
            _ => None,
        }
    }
}
