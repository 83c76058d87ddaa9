//! The validated, immutable IRC message value.

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::validation::{find_line_breaking_char, validate_params, validate_tag_key, validate_verb};

/// Tag storage: keys are unique and kept in ascending order, so equality
/// ignores insertion order and serialization is deterministic.
pub type Tags = BTreeMap<String, String>;

/// A single IRC protocol message.
///
/// A `Message` is always valid: every constructor checks the field
/// invariants and there are no mutators.
///
/// - The verb is non-empty, free of whitespace, and stored exactly as given.
/// - Tag keys are non-empty and free of whitespace; values may be empty.
/// - An empty source means the message has no source.
/// - Only the last parameter may contain a space.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Message {
    tags: Tags,
    source: String,
    verb: String,
    params: Vec<String>,
}

impl Message {
    /// Construct a message, validating every field.
    ///
    /// ```
    /// use ircwire::Message;
    ///
    /// let msg = Message::new([("id", "123")], "alice!u@h", "PRIVMSG", ["#chan", "Hello world"])?;
    /// assert_eq!(msg.to_string(), "@id=123 :alice!u@h PRIVMSG #chan :Hello world");
    /// # Ok::<(), ircwire::error::ValidationError>(())
    /// ```
    pub fn new<T, K, V, P, S>(
        tags: T,
        source: impl Into<String>,
        verb: impl Into<String>,
        params: P,
    ) -> Result<Self, ValidationError>
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = tags
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let params = params.into_iter().map(Into::into).collect();
        Self::from_parts(tags, source.into(), verb.into(), params)
    }

    /// Construct a message from already-owned parts.
    pub fn from_parts(
        tags: Tags,
        source: String,
        verb: String,
        params: Vec<String>,
    ) -> Result<Self, ValidationError> {
        validate_verb(&verb)?;
        for key in tags.keys() {
            validate_tag_key(key)?;
        }
        validate_params(&params)?;

        Ok(Self {
            tags,
            source,
            verb,
            params,
        })
    }

    /// All tags on this message.
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Look up a tag value by key.
    ///
    /// A tag sent without a value yields `Some("")`.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// The message source, or `""` when there is none.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the message carries a source.
    pub fn has_source(&self) -> bool {
        !self.source.is_empty()
    }

    /// The verb, exactly as constructed or received.
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// All parameters in order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The parameter at `index`, if present.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// The last parameter, if any.
    pub fn trailing(&self) -> Option<&str> {
        self.params.last().map(String::as_str)
    }

    /// The first character that would break this message across lines when
    /// sent, if any.
    ///
    /// Verb, source, tag keys and parameters are checked for NUL, CR and LF.
    /// Tag values are escaped on the wire, so only NUL matters there.
    pub fn line_breaking_char(&self) -> Option<char> {
        let tag_keys = self.tags.keys().find_map(|k| find_line_breaking_char(k));
        let tag_values = self.tags.values().find_map(|v| v.chars().find(|&c| c == '\0'));

        tag_keys
            .or(tag_values)
            .or_else(|| find_line_breaking_char(&self.source))
            .or_else(|| find_line_breaking_char(&self.verb))
            .or_else(|| self.params.iter().find_map(|p| find_line_breaking_char(p)))
    }

    /// Consume the message, returning `(tags, source, verb, params)`.
    pub fn into_parts(self) -> (Tags, String, String, Vec<String>) {
        (self.tags, self.source, self.verb, self.params)
    }
}
