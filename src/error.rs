//! Error types for the IRC wire codec.
//!
//! Construction failures are reported as [`ValidationError`], lines that do
//! not match the base grammar as [`FormatError`]. [`ParseError`] wraps both
//! for callers of [`Message::parse`](crate::Message::parse).

use thiserror::Error;

/// Convenience type alias for Results using [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// A message field violated one of the [`Message`](crate::Message) invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The verb was empty.
    #[error("verb is empty")]
    EmptyVerb,

    /// The verb contained whitespace.
    #[error("verb contains whitespace: {0:?}")]
    InvalidVerb(String),

    /// A tag key was empty.
    #[error("tag key is empty")]
    EmptyTagKey,

    /// A tag key contained whitespace.
    #[error("tag key contains whitespace: {0:?}")]
    InvalidTagKey(String),

    /// A parameter other than the last one contained a space.
    #[error("parameter {index} is not last but contains a space: {value:?}")]
    SpaceInMiddleParameter {
        /// Zero-based position of the offending parameter.
        index: usize,
        /// The offending parameter.
        value: String,
    },
}

/// The line does not match the base message grammar.
///
/// In practice this means no verb token could be found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed line at position {position}{}: {input:?}", context_suffix(.context))]
pub struct FormatError {
    /// The line that failed to parse.
    pub input: String,
    /// Byte offset where the grammar stopped matching.
    pub position: usize,
    /// What the parser was looking for when it failed.
    pub context: Option<&'static str>,
}

fn context_suffix(context: &Option<&'static str>) -> String {
    match context {
        Some(ctx) => format!(" while {}", ctx),
        None => String::new(),
    }
}

/// Errors returned by [`Message::parse`](crate::Message::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The line does not match the base grammar.
    #[error("invalid format")]
    Format(#[from] FormatError),

    /// The decomposed fields violate a message invariant.
    #[error("invalid message")]
    Validation(#[from] ValidationError),
}

/// Errors raised by the line codec.
#[cfg(feature = "tokio")]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The line was not valid UTF-8.
    #[error("decode error: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// Line exceeded the configured maximum length.
    #[error("line too long: {0} bytes")]
    LineTooLong(usize),

    /// Illegal control character in a line.
    #[error("illegal control character: {0:?}")]
    IllegalControlChar(char),

    /// The line was framed correctly but is not a valid message.
    #[error("invalid message: {line}")]
    InvalidMessage {
        /// The raw line.
        line: String,
        /// The underlying parse error.
        #[source]
        cause: ParseError,
    },
}
