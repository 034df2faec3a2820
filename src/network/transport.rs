//! Stream transport
//!
//! Owns the connection and provides the read/write primitives the codec
//! builds on: full-buffer writes, line reads, and bounded chunked reads.
//!
//! The transport is generic over any `Read + Write` stream so tests can
//! drive it with in-memory streams; [`Transport<TcpStream>`] adds the
//! connect and shutdown paths.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use crate::config::Config;
use crate::error::{LineupError, Result};

/// Upper bound on a single read when accumulating a bulk payload
pub const READ_CHUNK_SIZE: usize = 1024;

/// Maximum length of a reply header line
pub const MAX_LINE_LEN: usize = 512;

/// Owns one stream connection and mediates all I/O on it
pub struct Transport<S> {
    stream: S,
}

impl<S: Read + Write> Transport<S> {
    /// Wrap an already-established stream
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Write the entire buffer, looping over short writes.
    ///
    /// A write that returns zero bytes means the peer can no longer accept
    /// data; the transport raises immediately with no retry.
    pub fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        let mut written = 0;
        while written < buf.len() {
            match self.stream.write(&buf[written..]) {
                Ok(0) => {
                    return Err(LineupError::Transport(io::Error::new(
                        io::ErrorKind::WriteZero,
                        format!("write stalled after {} of {} bytes", written, buf.len()),
                    )))
                }
                Ok(n) => written += n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.stream.flush()?;
        Ok(())
    }

    /// Read one line, up to `max_len` bytes, with the trailing CRLF
    /// trimmed.
    ///
    /// Reads byte-at-a-time so no data past the terminator is consumed;
    /// the bytes that follow a bulk header belong to the payload.
    pub fn read_line(&mut self, max_len: usize) -> Result<String> {
        let mut line = Vec::with_capacity(64);
        let mut byte = [0u8; 1];
        while line.len() < max_len {
            let n = match self.stream.read(&mut byte) {
                Ok(n) => n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if n == 0 {
                return Err(LineupError::Transport(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection closed while reading a reply line",
                )));
            }
            if byte[0] == b'\n' {
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                break;
            }
            line.push(byte[0]);
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    /// Read exactly `n` bytes, accumulating in bounded chunks.
    ///
    /// The chunking keeps each underlying read request small regardless of
    /// how large the declared payload is.
    pub fn read_exact_chunked(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut data = vec![0u8; n];
        let mut read = 0;
        while read < n {
            let want = READ_CHUNK_SIZE.min(n - read);
            match self.stream.read(&mut data[read..read + want]) {
                Ok(0) => {
                    return Err(LineupError::Transport(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        format!("connection closed after {read} of {n} payload bytes"),
                    )))
                }
                Ok(got) => read += got,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(data)
    }

    /// Read and drop exactly `n` bytes (bulk-reply terminator)
    pub fn discard(&mut self, n: usize) -> Result<()> {
        let mut scratch = [0u8; READ_CHUNK_SIZE];
        let mut remaining = n;
        while remaining > 0 {
            let want = scratch.len().min(remaining);
            match self.stream.read(&mut scratch[..want]) {
                Ok(0) => {
                    return Err(LineupError::Transport(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "connection closed while discarding terminator bytes",
                    )))
                }
                Ok(got) => remaining -= got,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Get a reference to the underlying stream
    pub fn get_ref(&self) -> &S {
        &self.stream
    }
}

impl Transport<TcpStream> {
    /// Establish a TCP connection per the config.
    ///
    /// Fails fast with [`LineupError::Connect`] if the connection cannot
    /// be established; the stream is released on every construction
    /// failure path.
    pub fn connect(config: &Config) -> Result<Self> {
        let stream = TcpStream::connect((config.host.as_str(), config.port))
            .map_err(LineupError::Connect)?;

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true).map_err(LineupError::Connect)?;

        if config.read_timeout_ms > 0 {
            stream
                .set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))
                .map_err(LineupError::Connect)?;
        }
        if config.write_timeout_ms > 0 {
            stream
                .set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))
                .map_err(LineupError::Connect)?;
        }

        tracing::debug!("connected to {}:{}", config.host, config.port);
        Ok(Self::new(stream))
    }

    /// Shut down both directions of the socket.
    ///
    /// Dropping the transport also closes the socket; this exists for
    /// callers that want teardown errors surfaced.
    pub fn shutdown(&mut self) -> Result<()> {
        self.stream.shutdown(Shutdown::Both)?;
        Ok(())
    }
}
