//! Byte-level encoding for IRC messages.
//!
//! This module provides the [`IrcEncode`] trait for writing IRC messages directly
//! to byte buffers without an intermediate `String`.
//!
//! Unlike [`Display`](std::fmt::Display), which yields the bare line,
//! `IrcEncode` writes the line followed by the CRLF terminator, ready for a
//! socket.
//!
//! # Example
//!
//! ```
//! use ircwire::encode::IrcEncode;
//! use ircwire::Message;
//!
//! let msg = Message::builder("PRIVMSG").params(["#channel", "Hello!"]).build()?;
//! let mut buf = Vec::new();
//! msg.encode(&mut buf)?;
//!
//! assert_eq!(&buf, b"PRIVMSG #channel :Hello!\r\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::{self, Write};

use crate::message::tags::tag_escape;
use crate::message::Message;

/// A trait for encoding IRC protocol elements directly to a byte stream.
pub trait IrcEncode {
    /// Encode this value to the given writer.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the write fails.
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<usize>;

    /// Encode this value to a new `Vec<u8>`.
    #[must_use]
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512); // IRC max line length
        let _ = self.encode(&mut buf);
        buf
    }
}

/// Write `bytes` in full and return how many were written.
#[inline]
fn put<W: Write>(w: &mut W, bytes: &[u8]) -> io::Result<usize> {
    w.write_all(bytes)?;
    Ok(bytes.len())
}

/// Write a tag value with IRCv3 escaping applied.
fn put_escaped<W: Write>(w: &mut W, value: &str) -> io::Result<usize> {
    let mut written = 0;
    let mut start = 0;

    for (i, c) in value.char_indices() {
        let Some(escaped) = tag_escape(c) else {
            continue;
        };
        written += put(w, &value.as_bytes()[start..i])?;
        written += put(w, escaped.as_bytes())?;
        start = i + c.len_utf8();
    }

    written += put(w, &value.as_bytes()[start..])?;
    Ok(written)
}

impl IrcEncode for Message {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut written = 0;

        if !self.tags().is_empty() {
            written += put(w, b"@")?;
            for (i, (key, value)) in self.tags().iter().enumerate() {
                if i > 0 {
                    written += put(w, b";")?;
                }
                written += put(w, key.as_bytes())?;
                if !value.is_empty() {
                    written += put(w, b"=")?;
                    written += put_escaped(w, value)?;
                }
            }
            written += put(w, b" ")?;
        }

        if self.has_source() {
            written += put(w, b":")?;
            written += put(w, self.source().as_bytes())?;
            written += put(w, b" ")?;
        }

        written += put(w, self.verb().as_bytes())?;

        if let Some((trailing, middle)) = self.params().split_last() {
            for param in middle {
                written += put(w, b" ")?;
                written += put(w, param.as_bytes())?;
            }
            written += put(w, b" :")?;
            written += put(w, trailing.as_bytes())?;
        }

        written += put(w, b"\r\n")?;
        Ok(written)
    }
}
