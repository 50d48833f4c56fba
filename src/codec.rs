//! CRLF line framing over the raw byte stream.
//!
//! [`LineCodec`] accumulates arbitrary-sized chunks in the `Framed`
//! read buffer and yields complete lines in arrival order, stripped of
//! their two-byte CRLF terminator. Outbound lines get the terminator
//! appended. Text is decoded and encoded with the configured
//! `encoding_rs` encoding (UTF-8 by default).

use bytes::{Buf, BufMut, BytesMut};
use encoding::Encoding;
use tokio_util::codec::{Decoder, Encoder};

use crate::error::ProtocolError;

/// Maximum bytes a single line may occupy, terminator included.
///
/// A peer that streams bytes with no delimiter would otherwise grow the
/// read buffer without bound; exceeding this limit is reported as an
/// error, which the connection loop turns into a forced disconnect.
pub const MAX_LINE_LEN: usize = 8191;

/// Codec framing CRLF-terminated lines as `String`s.
#[derive(Debug, Clone)]
pub struct LineCodec {
    encoding: &'static Encoding,
    max_line_len: usize,
}

impl LineCodec {
    /// Build a codec for the given encoding label (e.g. `"utf-8"`).
    pub fn new(label: &str) -> Result<Self, ProtocolError> {
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| ProtocolError::UnknownEncoding(label.to_string()))?;
        Ok(Self {
            encoding,
            max_line_len: MAX_LINE_LEN,
        })
    }

    /// Build a codec with a custom line-length limit.
    pub fn with_max_line_len(label: &str, max_line_len: usize) -> Result<Self, ProtocolError> {
        let mut codec = Self::new(label)?;
        codec.max_line_len = max_line_len;
        Ok(codec)
    }

    fn find_delimiter(buf: &BytesMut) -> Option<usize> {
        buf.windows(2).position(|w| w == b"\r\n")
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<String>, ProtocolError> {
        let Some(pos) = Self::find_delimiter(buf) else {
            if buf.len() > self.max_line_len {
                return Err(ProtocolError::LineTooLong {
                    actual: buf.len(),
                    limit: self.max_line_len,
                });
            }
            // No complete line yet; retain the remainder for the next read.
            return Ok(None);
        };

        if pos + 2 > self.max_line_len {
            return Err(ProtocolError::LineTooLong {
                actual: pos + 2,
                limit: self.max_line_len,
            });
        }

        let line = buf.split_to(pos);
        buf.advance(2);

        // Undecodable byte sequences are replaced rather than fatal; a
        // single garbled line should not tear down the connection.
        let (text, _, _) = self.encoding.decode(&line);
        Ok(Some(text.into_owned()))
    }
}

impl Encoder<String> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        let (bytes, _, _) = self.encoding.encode(&line);
        dst.reserve(bytes.len() + 2);
        dst.put_slice(&bytes);
        dst.put_slice(b"\r\n");
        Ok(())
    }
}
