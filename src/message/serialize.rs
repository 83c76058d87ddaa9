use std::fmt::{self, Display, Formatter, Write};

use super::tags::escape_tag_value;
use super::types::Message;

impl Display for Message {
    /// Render the message as one wire line, without the CRLF terminator.
    ///
    /// The last parameter is always written with a `:` prefix, so the
    /// output re-parses to an equal message.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.tags().is_empty() {
            f.write_char('@')?;
            for (i, (key, value)) in self.tags().iter().enumerate() {
                if i > 0 {
                    f.write_char(';')?;
                }
                f.write_str(key)?;
                if !value.is_empty() {
                    f.write_char('=')?;
                    escape_tag_value(f, value)?;
                }
            }
            f.write_char(' ')?;
        }

        if self.has_source() {
            write!(f, ":{} ", self.source())?;
        }

        f.write_str(self.verb())?;

        if let Some((trailing, middle)) = self.params().split_last() {
            for param in middle {
                write!(f, " {}", param)?;
            }
            write!(f, " :{}", trailing)?;
        }

        Ok(())
    }
}

/// Messages serialize as their wire line and deserialize by parsing it, so a
/// deserialized message is always valid.
#[cfg(feature = "serde")]
impl serde::Serialize for Message {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Message {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let line = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Message::parse(&line).map_err(serde::de::Error::custom)
    }
}
