//! Field-level validation for message components.
//!
//! These checks back the invariants of [`Message`](crate::Message):
//!
//! - Verbs are non-empty and contain no whitespace.
//! - Tag keys are non-empty and contain no whitespace.
//! - Only the final parameter may contain a space (U+0020).
//!
//! Tag values and parameters may be empty strings. They can never be absent,
//! which the `String` type already guarantees.
//!
//! [`find_line_breaking_char`] is the transport-level check: a valid message
//! may still hold characters that cannot be sent inside one line.

use crate::error::ValidationError;

/// Validate a verb (command name or numeric).
///
/// Case is not inspected; the verb is stored exactly as given.
pub fn validate_verb(verb: &str) -> Result<(), ValidationError> {
    if verb.is_empty() {
        return Err(ValidationError::EmptyVerb);
    }
    if verb.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidVerb(verb.to_string()));
    }
    Ok(())
}

/// Validate a tag key.
pub fn validate_tag_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::EmptyTagKey);
    }
    if key.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidTagKey(key.to_string()));
    }
    Ok(())
}

/// Validate a parameter list.
///
/// Every parameter except the last must be free of spaces. The last one is
/// always emitted as the colon-prefixed trailing parameter, so it may hold
/// anything.
pub fn validate_params<S: AsRef<str>>(params: &[S]) -> Result<(), ValidationError> {
    let Some((_, middle)) = params.split_last() else {
        return Ok(());
    };

    match middle.iter().position(|p| p.as_ref().contains(' ')) {
        Some(index) => Err(ValidationError::SpaceInMiddleParameter {
            index,
            value: middle[index].as_ref().to_string(),
        }),
        None => Ok(()),
    }
}

/// Whether `c` would end or corrupt an IRC line on the wire.
///
/// Only NUL, CR and LF qualify. Formatting codes such as bold (`\x02`) and
/// colour (`\x03`) and the CTCP delimiter (`\x01`) are ordinary message text.
#[inline]
pub fn is_line_breaking_char(c: char) -> bool {
    matches!(c, '\0' | '\r' | '\n')
}

/// The first character of `s` that cannot appear inside a line, if any.
pub fn find_line_breaking_char(s: &str) -> Option<char> {
    s.chars().find(|&c| is_line_breaking_char(c))
}
