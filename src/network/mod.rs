//! Network Module
//!
//! Owns the client side of the TCP connection.

mod transport;

pub use transport::{Transport, MAX_LINE_LEN, READ_CHUNK_SIZE};
