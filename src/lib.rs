//! # ircwire
//!
//! A strict, bidirectional codec for the IRC wire line format, with IRCv3
//! message tags.
//!
//! ## Features
//!
//! - Parsing one line into a validated [`Message`] (tags, source, verb, parameters)
//! - Serializing a [`Message`] back into the exact line to send
//! - A fail-fast [`MessageBuilder`] for outgoing messages
//! - IRCv3 tag value escaping and unescaping
//! - Optional Tokio line framing ([`LineCodec`], feature `tokio`)
//! - An explicit verb → handler table ([`dispatch::HandlerRegistry`])
//!
//! The codec never interprets verbs: `PRIVMSG`, `001` and `FOO` are all just
//! verbs. Verbs keep the case they were given.

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Parsing
//!
//! ```rust
//! use ircwire::Message;
//!
//! let raw = "@time=2023-01-01T12:00:00Z :nick!user@host PRIVMSG #channel :Hello!";
//! let message: Message = raw.parse().expect("Valid IRC message");
//!
//! assert_eq!(message.tag("time"), Some("2023-01-01T12:00:00Z"));
//! assert_eq!(message.verb(), "PRIVMSG");
//! assert_eq!(message.params(), ["#channel", "Hello!"]);
//! ```
//!
//! ### Building and serializing
//!
//! ```rust
//! use ircwire::Message;
//!
//! let msg = Message::builder("PRIVMSG")
//!     .tag("+draft/reply", "abc123")?
//!     .params(["#rust", "Hello, world!"])
//!     .build()?;
//!
//! assert_eq!(msg.to_string(), "@+draft/reply=abc123 PRIVMSG #rust :Hello, world!");
//! # Ok::<(), ircwire::error::ValidationError>(())
//! ```

pub mod dispatch;
pub mod encode;
pub mod error;
pub mod message;
pub mod validation;

#[cfg(feature = "tokio")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
pub mod codec;

pub use self::encode::IrcEncode;
pub use self::error::{FormatError, ParseError, ValidationError};
pub use self::message::{Message, MessageBuilder, Tags};

#[cfg(feature = "tokio")]
pub use self::codec::{LineCodec, MAX_LINE_LEN};
#[cfg(feature = "tokio")]
pub use self::error::CodecError;
