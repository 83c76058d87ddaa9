//! Fluent construction of [`Message`] values.

use crate::error::ValidationError;
use crate::validation::validate_tag_key;

use super::types::{Message, Tags};

/// Incremental builder for a [`Message`].
///
/// Tag keys are checked as soon as they are added. The rule that only the
/// last parameter may contain a space is checked by [`build`](Self::build),
/// since a parameter that is last now may not be last later.
///
/// ```
/// use ircwire::Message;
///
/// let msg = Message::builder("NOTICE")
///     .tag("msgid", "abc")?
///     .source("x")
///     .param("*")
///     .param("hi there")
///     .build()?;
///
/// assert_eq!(msg.to_string(), "@msgid=abc :x NOTICE * :hi there");
/// # Ok::<(), ircwire::error::ValidationError>(())
/// ```
#[derive(Clone, Debug, Default)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct MessageBuilder {
    verb: String,
    tags: Tags,
    source: String,
    params: Vec<String>,
}

impl Message {
    /// Start building a message with the given verb.
    pub fn builder(verb: impl Into<String>) -> MessageBuilder {
        MessageBuilder::new(verb)
    }
}

impl MessageBuilder {
    /// Create a builder for `verb`. The verb is validated by [`build`](Self::build).
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            ..Self::default()
        }
    }

    /// Add a tag. A repeated key replaces the earlier value.
    pub fn tag(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let key = key.into();
        validate_tag_key(&key)?;
        self.tags.insert(key, value.into());
        Ok(self)
    }

    /// Add several tags, stopping at the first invalid key.
    pub fn tags<I, K, V>(self, tags: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        tags.into_iter()
            .try_fold(self, |builder, (key, value)| builder.tag(key, value))
    }

    /// Set the message source.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Append a parameter.
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Append several parameters in order.
    pub fn params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Validate the accumulated fields and produce the message.
    pub fn build(self) -> Result<Message, ValidationError> {
        Message::from_parts(self.tags, self.source, self.verb, self.params)
    }
}
