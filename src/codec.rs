//! Line framing for tokio streams.
//!
//! [`LineCodec`] plugs into [`tokio_util::codec::Framed`] and turns a byte
//! stream into [`Message`] values and back. It only frames lines; it never
//! looks at what a message means.
//!
//! ```no_run
//! use futures_util::{SinkExt, StreamExt};
//! use ircwire::{LineCodec, Message};
//! use tokio::net::TcpStream;
//! use tokio_util::codec::Framed;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let stream = TcpStream::connect("irc.example.net:6667").await?;
//! let mut framed = Framed::new(stream, LineCodec::new());
//!
//! framed.send(Message::builder("NICK").param("ircwire").build()?).await?;
//! while let Some(msg) = framed.next().await {
//!     println!("{}", msg?);
//! }
//! # Ok(())
//! # }
//! ```

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{trace, warn};

use crate::encode::IrcEncode;
use crate::error::CodecError;
use crate::validation::find_line_breaking_char;
use crate::Message;

/// Default maximum line length in bytes, including tags and the terminator.
pub const MAX_LINE_LEN: usize = 8191;

/// Codec framing CRLF-terminated IRC lines.
///
/// Lines may also end in a bare LF. Empty lines are skipped.
#[derive(Debug, Clone)]
pub struct LineCodec {
    max_len: usize,
    /// Bytes already scanned for LF in the current buffer.
    next_index: usize,
    /// Dropping the rest of an oversized line up to its LF.
    discarding: bool,
}

impl LineCodec {
    /// Create a codec with the default [`MAX_LINE_LEN`].
    pub fn new() -> Self {
        Self::with_max_len(MAX_LINE_LEN)
    }

    /// Create a codec that rejects lines longer than `max_len` bytes.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len,
            next_index: 0,
            discarding: false,
        }
    }

    /// The configured maximum line length.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Validate one raw line and parse it. Returns `None` for blank lines.
    fn decode_line(&self, bytes: &[u8]) -> Result<Option<Message>, CodecError> {
        let text = std::str::from_utf8(bytes)?;
        let line = text.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return Ok(None);
        }

        if let Some(ch) = find_line_breaking_char(line) {
            return Err(CodecError::IllegalControlChar(ch));
        }

        trace!(line, "decoded line");
        Message::parse(line)
            .map(Some)
            .map_err(|cause| CodecError::InvalidMessage {
                line: line.to_string(),
                cause,
            })
    }

    fn too_long(&self, len: usize) -> CodecError {
        warn!(len, max = self.max_len, "discarding oversized line");
        CodecError::LineTooLong(len)
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = Message;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Message>, CodecError> {
        loop {
            let Some(offset) = src[self.next_index..].iter().position(|&b| b == b'\n') else {
                if self.discarding {
                    src.clear();
                    self.next_index = 0;
                    return Ok(None);
                }
                if src.len() > self.max_len {
                    let len = src.len();
                    src.clear();
                    self.next_index = 0;
                    self.discarding = true;
                    return Err(self.too_long(len));
                }
                self.next_index = src.len();
                return Ok(None);
            };

            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if self.discarding {
                self.discarding = false;
                trace!(len = line.len(), "dropped tail of oversized line");
                continue;
            }

            if line.len() > self.max_len {
                return Err(self.too_long(line.len()));
            }

            if let Some(msg) = self.decode_line(&line)? {
                return Ok(Some(msg));
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Message>, CodecError> {
        if let Some(msg) = self.decode(src)? {
            return Ok(Some(msg));
        }
        self.discarding = false;
        if src.is_empty() {
            return Ok(None);
        }

        // Final line without a terminator.
        let line = src.split();
        self.next_index = 0;
        if line.len() > self.max_len {
            return Err(self.too_long(line.len()));
        }
        self.decode_line(&line)
    }
}

impl Encoder<&Message> for LineCodec {
    type Error = CodecError;

    fn encode(&mut self, msg: &Message, dst: &mut BytesMut) -> Result<(), CodecError> {
        if let Some(ch) = msg.line_breaking_char() {
            warn!(verb = msg.verb(), ?ch, "refusing to encode message that would split the line");
            return Err(CodecError::IllegalControlChar(ch));
        }

        let start = dst.len();
        let len = msg.encode(&mut BufMut::writer(&mut *dst))?;
        if len > self.max_len {
            dst.truncate(start);
            return Err(self.too_long(len));
        }
        Ok(())
    }
}

impl Encoder<Message> for LineCodec {
    type Error = CodecError;

    fn encode(&mut self, msg: Message, dst: &mut BytesMut) -> Result<(), CodecError> {
        Encoder::<&Message>::encode(self, &msg, dst)
    }
}
