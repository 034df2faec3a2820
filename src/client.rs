//! Client facade
//!
//! Sequences encode, write, read, decode for each call. One connection,
//! one outstanding request at a time; methods take `&mut self` so a shared
//! client must be externally serialized (wrap it in a mutex around the
//! full request/reply cycle).

use std::net::TcpStream;

use bytes::Bytes;

use crate::config::Config;
use crate::error::{LineupError, Result};
use crate::network::Transport;
use crate::protocol::{read_reply, write_command, CallArgs, Command, Reply};

/// A connected Lineup client
///
/// The connection is opened once at construction and owned exclusively by
/// this instance; it closes when the client is dropped. A transport error
/// leaves the stream desynchronized, so recovery means constructing a new
/// client.
pub struct Client {
    transport: Transport<TcpStream>,
}

impl Client {
    /// Connect to a server on the given host and port
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        Self::with_config(Config::builder().host(host).port(port).build())
    }

    /// Connect using an explicit configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let transport = Transport::connect(&config)?;
        Ok(Self { transport })
    }

    // =========================================================================
    // Generic Call Surface
    // =========================================================================

    /// Send any verb and return its decoded reply.
    ///
    /// Verbs are classified against the data-command registry; anything
    /// else goes out as a bare verb line. An error reply from the server
    /// comes back as [`LineupError::Server`], never as a value.
    pub fn call(&mut self, verb: &str, args: CallArgs) -> Result<Reply> {
        let command = Command::from_call(verb, args)?;
        tracing::trace!("sending {} command", command.name());
        write_command(&mut self.transport, &command)?;
        match read_reply(&mut self.transport)? {
            Reply::Error(message) => Err(LineupError::Server(message)),
            reply => Ok(reply),
        }
    }

    // =========================================================================
    // Typed Wrappers
    // =========================================================================

    /// Enqueue a message with the given priority.
    ///
    /// `size` defaults to the payload length. An explicit size must equal
    /// the payload length actually sent; lying about it desynchronizes the
    /// server's framing for the rest of the connection.
    pub fn give(
        &mut self,
        priority: u32,
        payload: impl Into<Bytes>,
        size: Option<usize>,
    ) -> Result<String> {
        let args = CallArgs::Data {
            priority,
            payload: payload.into(),
            size,
        };
        expect_inline(self.call("GIVE", args)?)
    }

    /// Dequeue the highest-priority message.
    ///
    /// An empty queue surfaces as [`LineupError::Server`] with the
    /// server's message (`NO_MESSAGES`).
    pub fn take(&mut self) -> Result<Bytes> {
        expect_bulk(self.call("TAKE", CallArgs::None)?)
    }

    /// Health check; returns the server's inline answer (`PONG`)
    pub fn ping(&mut self) -> Result<String> {
        expect_inline(self.call("PING", CallArgs::None)?)
    }

    /// Tell the server this client is done and close the connection.
    ///
    /// EXIT is the one verb the server answers with nothing, so no reply
    /// is read.
    pub fn quit(mut self) -> Result<()> {
        write_command(&mut self.transport, &Command::simple("EXIT"))?;
        self.transport.shutdown()
    }
}

/// Narrow a reply to its inline value
fn expect_inline(reply: Reply) -> Result<String> {
    match reply {
        Reply::Inline(value) => Ok(value),
        Reply::Bulk(data) => Err(LineupError::Protocol(format!(
            "expected inline reply, got bulk reply of {} bytes",
            data.len()
        ))),
        Reply::Error(message) => Err(LineupError::Server(message)),
    }
}

/// Narrow a reply to its bulk payload
fn expect_bulk(reply: Reply) -> Result<Bytes> {
    match reply {
        Reply::Bulk(data) => Ok(data),
        Reply::Inline(value) => Err(LineupError::Protocol(format!(
            "expected bulk reply, got inline reply {value:?}"
        ))),
        Reply::Error(message) => Err(LineupError::Server(message)),
    }
}
