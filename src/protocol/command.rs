//! Command definitions
//!
//! Represents commands sent to the server. Verbs are classified against a
//! fixed registry of data-carrying commands; everything else goes over the
//! wire as a bare verb line.

use bytes::Bytes;

use crate::error::{LineupError, Result};

/// Verbs that carry a length-prefixed payload after the header line.
///
/// The server's command set is closed; only GIVE takes a payload today.
pub const DATA_COMMANDS: &[&str] = &["GIVE"];

/// Check whether an (already uppercased) verb is a data command
pub fn is_data_command(name: &str) -> bool {
    DATA_COMMANDS.contains(&name)
}

/// Command kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Simple,
    Data,
}

/// Arguments passed through the generic call entry point.
///
/// Data arguments supplied with a simple verb are silently ignored, which
/// mirrors the server's own handling of trailing junk on a verb line.
#[derive(Debug, Clone, Default)]
pub enum CallArgs {
    /// No arguments (simple verbs)
    #[default]
    None,

    /// Arguments for a data command
    Data {
        /// Message priority (non-negative)
        priority: u32,

        /// Raw message payload
        payload: Bytes,

        /// Explicit wire size; defaults to the payload length.
        ///
        /// Must equal the number of payload bytes actually sent or the
        /// server misframes the next command on this connection.
        size: Option<usize>,
    },
}

/// A command ready for encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Bare verb, no arguments on the wire
    Simple { name: String },

    /// Verb with priority/size header line followed by raw payload bytes
    Data {
        name: String,
        priority: u32,
        payload: Bytes,
        size: usize,
    },
}

impl Command {
    /// Build a simple command from any verb
    pub fn simple(verb: &str) -> Self {
        Command::Simple {
            name: verb.to_ascii_uppercase(),
        }
    }

    /// Build a data command, computing the size field from the payload
    /// when no explicit size is given
    pub fn data(verb: &str, priority: u32, payload: impl Into<Bytes>, size: Option<usize>) -> Self {
        let payload = payload.into();
        let size = size.unwrap_or(payload.len());
        Command::Data {
            name: verb.to_ascii_uppercase(),
            priority,
            payload,
            size,
        }
    }

    /// Classify a verb against the data-command registry and build the
    /// matching command from the supplied arguments.
    ///
    /// Any verb string is accepted; unknown verbs are sent as simple
    /// commands and the server answers with an error reply if it does not
    /// recognize them.
    pub fn from_call(verb: &str, args: CallArgs) -> Result<Self> {
        let name = verb.to_ascii_uppercase();
        if is_data_command(&name) {
            match args {
                CallArgs::Data {
                    priority,
                    payload,
                    size,
                } => Ok(Command::data(&name, priority, payload, size)),
                CallArgs::None => Err(LineupError::Protocol(format!(
                    "{name} requires a priority and a payload"
                ))),
            }
        } else {
            // Extra arguments on a simple verb are dropped, not rejected.
            Ok(Command::Simple { name })
        }
    }

    /// Get the command kind
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Simple { .. } => CommandKind::Simple,
            Command::Data { .. } => CommandKind::Data,
        }
    }

    /// Get the uppercase verb name
    pub fn name(&self) -> &str {
        match self {
            Command::Simple { name } => name,
            Command::Data { name, .. } => name,
        }
    }
}
