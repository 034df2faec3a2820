//! Protocol Module
//!
//! Defines the Lineup wire protocol: line-oriented, text-framed
//! request/reply over one persistent connection.
//!
//! ## Request Format
//! ```text
//! Simple command:  NAME\r\n
//! Data command:    NAME <priority> <size>\r\n<payload>\r\n
//! ```
//! `<size>` is the exact byte length of `<payload>`; the server uses it to
//! frame the raw bytes that follow the header line.
//!
//! ## Reply Format
//! ```text
//! +text\r\n                     inline reply
//! -text\r\n                     error reply
//! $<size>\r\n<payload>\r\n      bulk reply
//! ```
//!
//! Exactly one reply per command; the connection carries no pipelined or
//! multiplexed traffic.

mod command;
mod reply;
mod codec;

pub use command::{is_data_command, CallArgs, Command, CommandKind, DATA_COMMANDS};
pub use reply::Reply;
pub use codec::{encode_command, read_reply, write_command, BULK_TERMINATOR_LEN};
