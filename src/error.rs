//! Error types for the Lineup client
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using LineupError
pub type Result<T> = std::result::Result<T, LineupError>;

/// Unified error type for Lineup client operations
#[derive(Debug, Error)]
pub enum LineupError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    /// The initial TCP connect failed. Fatal; there is no retry logic.
    #[error("connect failed: {0}")]
    Connect(#[source] std::io::Error),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// A write could not complete or a read hit EOF/timeout mid-frame.
    /// The stream is presumed desynchronized; callers wanting to continue
    /// should open a fresh client.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// The server sent a reply the decoder does not recognize, or a bulk
    /// size field that does not parse. Fatal to that call only.
    #[error("protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Server Errors
    // -------------------------------------------------------------------------
    /// A well-formed `-` reply from the server (e.g. `-NO_MESSAGES`).
    /// A normal, expected outcome of a call, not a stream failure.
    #[error("server error: {0}")]
    Server(String),
}
