//! # lineup-client
//!
//! A client for the Lineup priority message queue protocol:
//! - Line-oriented, text-framed request/reply over one TCP connection
//! - Length-prefixed payloads for data commands (GIVE)
//! - Typed error taxonomy separating connect, transport, protocol, and
//!   server failures
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────┐    ┌────────────────┐    ┌───────────┐    ┌──────────────┐
//! │  Caller  │───▶│ CommandEncoder │───▶│ Transport │───▶│ ReplyDecoder │
//! └──────────┘    └────────────────┘    └───────────┘    └──────┬───────┘
//!      ▲                                                        │
//!      └────────────────────────────────────────────────────────┘
//! ```
//!
//! The encoder is pure; the transport owns the socket and guarantees
//! full-buffer writes plus line/exact reads; the decoder classifies the
//! reply by its first byte. [`Client`] sequences the three per call.
//!
//! ## Example
//!
//! ```no_run
//! use lineup_client::Client;
//!
//! # fn main() -> lineup_client::Result<()> {
//! let mut client = Client::connect("localhost", 9876)?;
//! client.give(5, "hello world", None)?;
//! let message = client.take()?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LineupError, Result};
pub use config::{Config, DEFAULT_PORT};
pub use client::Client;
pub use protocol::{CallArgs, Command, Reply};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
