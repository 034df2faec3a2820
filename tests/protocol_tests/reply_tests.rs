//! Reply Decoder Tests
//!
//! Drives the decoder over in-memory streams.

use std::io::{Cursor, Read, Write};

use lineup_client::network::Transport;
use lineup_client::protocol::{read_reply, Reply};
use lineup_client::LineupError;

/// In-memory stream serving a fixed reply script; writes are discarded
/// (the decoder never writes)
struct MockStream {
    input: Cursor<Vec<u8>>,
}

impl MockStream {
    fn new(script: &[u8]) -> Self {
        Self {
            input: Cursor::new(script.to_vec()),
        }
    }
}

impl Read for MockStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.input.read(buf)
    }
}

impl Write for MockStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Like MockStream, but yields at most one byte per read call
struct TrickleStream(MockStream);

impl Read for TrickleStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let cap = buf.len().min(1);
        self.0.read(&mut buf[..cap])
    }
}

impl Write for TrickleStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

fn decode(script: &[u8]) -> lineup_client::Result<Reply> {
    let mut transport = Transport::new(MockStream::new(script));
    read_reply(&mut transport)
}

// =============================================================================
// Classification Tests
// =============================================================================

#[test]
fn test_decode_inline() {
    assert_eq!(decode(b"+ok\r\n").unwrap(), Reply::Inline("ok".to_string()));
}

#[test]
fn test_decode_inline_empty() {
    assert_eq!(decode(b"+\r\n").unwrap(), Reply::Inline(String::new()));
}

#[test]
fn test_decode_error_reply() {
    assert_eq!(
        decode(b"-not found\r\n").unwrap(),
        Reply::Error("not found".to_string())
    );
}

#[test]
fn test_decode_bulk() {
    assert_eq!(
        decode(b"$5\r\nhello\r\n").unwrap(),
        Reply::Bulk(b"hello".as_slice().into())
    );
}

#[test]
fn test_decode_bulk_empty() {
    assert_eq!(decode(b"$0\r\n\r\n").unwrap(), Reply::Bulk(b"".as_slice().into()));
}

#[test]
fn test_decode_bulk_single_byte() {
    assert_eq!(decode(b"$1\r\nx\r\n").unwrap(), Reply::Bulk(b"x".as_slice().into()));
}

#[test]
fn test_decode_bulk_with_internal_crlf() {
    // The declared size frames the payload; embedded CRLF is data.
    assert_eq!(
        decode(b"$12\r\nhello\r\nworld\r\n").unwrap(),
        Reply::Bulk(b"hello\r\nworld".as_slice().into())
    );
}

#[test]
fn test_decode_unrecognized_marker() {
    match decode(b"*3\r\n") {
        Err(LineupError::Protocol(msg)) => {
            assert!(msg.contains("invalid server response"));
            assert!(msg.contains("*3"));
        }
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[test]
fn test_decode_non_numeric_bulk_size() {
    match decode(b"$abc\r\nxyz\r\n") {
        Err(LineupError::Protocol(msg)) => assert!(msg.contains("invalid bulk size")),
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[test]
fn test_decode_negative_bulk_size() {
    assert!(matches!(decode(b"$-1\r\n"), Err(LineupError::Protocol(_))));
}

// =============================================================================
// Stream Alignment Tests
// =============================================================================

#[test]
fn test_decode_consumes_bulk_terminator() {
    // After a bulk reply the stream must sit exactly past the 2-byte
    // terminator, so the next reply decodes cleanly.
    let mut transport = Transport::new(MockStream::new(b"$3\r\nfoo\r\n+next\r\n"));
    assert_eq!(
        read_reply(&mut transport).unwrap(),
        Reply::Bulk(b"foo".as_slice().into())
    );
    assert_eq!(
        read_reply(&mut transport).unwrap(),
        Reply::Inline("next".to_string())
    );
}

#[test]
fn test_decode_sequential_replies() {
    let script = b"+one\r\n-gone\r\n$3\r\ntwo\r\n+three\r\n";
    let mut transport = Transport::new(MockStream::new(script));
    assert_eq!(read_reply(&mut transport).unwrap(), Reply::Inline("one".to_string()));
    assert_eq!(read_reply(&mut transport).unwrap(), Reply::Error("gone".to_string()));
    assert_eq!(
        read_reply(&mut transport).unwrap(),
        Reply::Bulk(b"two".as_slice().into())
    );
    assert_eq!(read_reply(&mut transport).unwrap(), Reply::Inline("three".to_string()));
}

#[test]
fn test_decode_bulk_over_trickle_stream() {
    // A transport that yields one byte per read must still produce the
    // full declared payload.
    let script = b"$11\r\nhello world\r\n";
    let mut transport = Transport::new(TrickleStream(MockStream::new(script)));
    assert_eq!(
        read_reply(&mut transport).unwrap(),
        Reply::Bulk(b"hello world".as_slice().into())
    );
}

#[test]
fn test_decode_bulk_truncated_payload() {
    match decode(b"$10\r\nhello") {
        Err(LineupError::Transport(_)) => {}
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn test_decode_eof_before_line() {
    assert!(matches!(decode(b""), Err(LineupError::Transport(_))));
}

#[test]
fn test_reply_accessors() {
    let inline = decode(b"+ok\r\n").unwrap();
    assert_eq!(inline.as_inline(), Some("ok"));
    assert_eq!(inline.as_bulk(), None);

    let bulk = decode(b"$2\r\nhi\r\n").unwrap();
    assert_eq!(bulk.as_inline(), None);
    assert_eq!(bulk.as_bulk().map(|b| b.as_ref()), Some(b"hi".as_slice()));
}
