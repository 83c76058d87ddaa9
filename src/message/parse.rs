use std::str::FromStr;

use crate::error::{ParseError, Result};

use super::nom_parser::RawMessage;
use super::tags::unescape_tag_value;
use super::types::{Message, Tags};

impl Message {
    /// Parse one line of IRC into a validated message.
    ///
    /// `line` must already have its CRLF terminator removed; any CR or LF left
    /// in it is message data. Lines without a verb fail with
    /// [`ParseError::Format`]; lines whose fields break a message invariant
    /// fail with [`ParseError::Validation`].
    ///
    /// ```
    /// use ircwire::Message;
    ///
    /// let msg = Message::parse("@id=123 :alice!u@h PRIVMSG #chan :Hello world")?;
    /// assert_eq!(msg.tag("id"), Some("123"));
    /// assert_eq!(msg.source(), "alice!u@h");
    /// assert_eq!(msg.verb(), "PRIVMSG");
    /// assert_eq!(msg.params(), ["#chan", "Hello world"]);
    /// # Ok::<(), ircwire::error::ParseError>(())
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let raw = RawMessage::parse(line)?;

        let tags: Tags = raw
            .tag_pieces()
            .map(|(key, value)| (key.to_string(), unescape_tag_value(value)))
            .collect();

        let (middle, trailing) = raw.split_params();
        let params = middle
            .into_iter()
            .chain(trailing)
            .map(str::to_string)
            .collect();

        let source = raw.source.unwrap_or_default().to_string();

        Ok(Message::from_parts(tags, source, raw.verb.to_string(), params)?)
    }
}

impl FromStr for Message {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Message::parse(s)
    }
}
