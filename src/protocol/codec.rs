//! Protocol codec
//!
//! Command serialization and the reply classification state machine.
//!
//! ## Wire Format
//!
//! ### Commands
//! ```text
//! Simple:  NAME\r\n
//! Data:    NAME <priority> <size>\r\n<payload bytes>\r\n
//! ```
//!
//! ### Replies (classified by the first byte)
//! ```text
//! Inline:  +text\r\n
//! Error:   -text\r\n
//! Bulk:    $<size>\r\n<size bytes>\r\n
//! ```

use std::io::{Read, Write};

use bytes::Bytes;

use crate::error::{LineupError, Result};
use crate::network::{Transport, MAX_LINE_LEN};
use super::{Command, Reply};

/// Length of the CRLF terminator that follows a bulk payload
pub const BULK_TERMINATOR_LEN: usize = 2;

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode a command to its exact wire bytes.
///
/// Pure function; no I/O and no state. Payload bytes are written verbatim
/// with no escaping: the declared size field, not a delimiter, frames the
/// payload, so arbitrary binary data (including embedded CRLF) is safe.
pub fn encode_command(command: &Command) -> Vec<u8> {
    match command {
        Command::Simple { name } => format!("{name}\r\n").into_bytes(),
        Command::Data {
            name,
            priority,
            payload,
            size,
        } => {
            let header = format!("{name} {priority} {size}\r\n");
            let mut message = Vec::with_capacity(header.len() + payload.len() + 2);
            message.extend_from_slice(header.as_bytes());
            message.extend_from_slice(payload);
            message.extend_from_slice(b"\r\n");
            message
        }
    }
}

/// Encode a command and send it over the transport
pub fn write_command<S: Read + Write>(
    transport: &mut Transport<S>,
    command: &Command,
) -> Result<()> {
    transport.write_all(&encode_command(command))
}

// =============================================================================
// Reply Decoding
// =============================================================================

/// Read and classify one reply from the transport.
///
/// The first byte of the first line selects the reply kind; an
/// unrecognized byte is fatal to the call, with no resynchronization
/// attempt. Bulk decoding never reads past the declared size plus the
/// two terminator bytes, so the stream stays aligned for the next
/// command.
pub fn read_reply<S: Read + Write>(transport: &mut Transport<S>) -> Result<Reply> {
    let line = transport.read_line(MAX_LINE_LEN)?;
    match line.as_bytes().first() {
        Some(b'-') => Ok(Reply::Error(line[1..].to_string())),
        Some(b'+') => Ok(Reply::Inline(line[1..].to_string())),
        Some(b'$') => {
            let size: usize = line[1..].parse().map_err(|_| {
                LineupError::Protocol(format!("invalid bulk size: {:?}", &line[1..]))
            })?;
            let data = transport.read_exact_chunked(size)?;
            transport.discard(BULK_TERMINATOR_LEN)?;
            Ok(Reply::Bulk(Bytes::from(data)))
        }
        _ => Err(LineupError::Protocol(format!(
            "invalid server response: {line}"
        ))),
    }
}
