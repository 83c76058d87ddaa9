//! IRCv3 message tag escaping utilities.

use std::borrow::Cow;
use std::fmt::{Result as FmtResult, Write};

/// Tag value escape table: raw character and its wire form.
pub(crate) const TAG_ESCAPES: &[(char, &str)] = &[
    ('\\', "\\\\"),
    (';', "\\:"),
    (' ', "\\s"),
    ('\r', "\\r"),
    ('\n', "\\n"),
];

/// The wire form of `c` inside a tag value, if it needs escaping.
#[inline]
pub(crate) fn tag_escape(c: char) -> Option<&'static str> {
    TAG_ESCAPES
        .iter()
        .find_map(|&(raw, escaped)| (raw == c).then_some(escaped))
}

/// Escape a tag value for serialization.
///
/// Each character is mapped exactly once, so a backslash introduced by one
/// substitution is never escaped again.
pub fn escape_tag_value(f: &mut dyn Write, value: &str) -> FmtResult {
    for c in value.chars() {
        match tag_escape(c) {
            Some(escaped) => f.write_str(escaped)?,
            None => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Escape a tag value, borrowing the input when nothing needs escaping.
pub fn escaped_tag_value(value: &str) -> Cow<'_, str> {
    if !value.chars().any(|c| tag_escape(c).is_some()) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    // Writing into a String cannot fail.
    let _ = escape_tag_value(&mut escaped, value);
    Cow::Owned(escaped)
}

/// Decode a tag value as received on the wire.
///
/// `\:`, `\s`, `\\`, `\r` and `\n` map back to the raw character. Any
/// other character after a backslash is kept as is, without the backslash.
/// A backslash at the very end of the value produces nothing.
pub fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    unescaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape(value: &str) -> String {
        escaped_tag_value(value).into_owned()
    }

    #[test]
    fn test_escape_each_special_char() {
        assert_eq!(escape("a;b"), "a\\:b");
        assert_eq!(escape("hello world"), "hello\\sworld");
        assert_eq!(escape("path\\file"), "path\\\\file");
        assert_eq!(escape("line\rend"), "line\\rend");
        assert_eq!(escape("line\nend"), "line\\nend");
    }

    #[test]
    fn test_escape_table_inverts_unescape() {
        for &(raw, escaped) in TAG_ESCAPES {
            assert_eq!(escape(&raw.to_string()), escaped);
            assert_eq!(unescape_tag_value(escaped), raw.to_string());
        }
        assert_eq!(tag_escape('a'), None);
    }

    #[test]
    fn test_escape_all_specials_in_order() {
        assert_eq!(escape("\\; \r\n"), "\\\\\\:\\s\\r\\n");
    }

    #[test]
    fn test_escape_borrows_plain_values() {
        assert!(matches!(escaped_tag_value("plain-value"), Cow::Borrowed(_)));
        assert!(matches!(escaped_tag_value(""), Cow::Borrowed("")));
        assert!(matches!(escaped_tag_value("a b"), Cow::Owned(_)));
    }

    #[test]
    fn test_escape_does_not_double_escape() {
        // An already-escaped sequence is treated as literal text.
        assert_eq!(escape("\\s"), "\\\\s");
        assert_eq!(unescape_tag_value(&escape("\\s")), "\\s");
    }

    #[test]
    fn test_unescape_combined() {
        let input = "a\\:b\\sc\\\\d\\re\\nf";
        let expected = "a;b c\\d\re\nf";
        assert_eq!(unescape_tag_value(input), expected);
    }

    #[test]
    fn test_unescape_trailing_backslash() {
        assert_eq!(unescape_tag_value("test\\"), "test");
        assert_eq!(unescape_tag_value("\\"), "");
    }

    #[test]
    fn test_unescape_unknown_escape() {
        assert_eq!(unescape_tag_value("a\\xb"), "axb");
        assert_eq!(unescape_tag_value("\\b"), "b");
    }

    #[test]
    fn test_unescape_passes_plain_text() {
        assert_eq!(unescape_tag_value("2023-01-01T00:00:00Z"), "2023-01-01T00:00:00Z");
        assert_eq!(unescape_tag_value(""), "");
    }

    #[test]
    fn test_escape_roundtrip() {
        let test_values = vec![
            "simple",
            "with space",
            "with;semicolon",
            "with\\backslash",
            "with\nnewline",
            "with\rcarriage",
            "complex; \\ \n \r all",
            "ünïcødé;✓",
        ];

        for original in test_values {
            let escaped = escape(original);
            let unescaped = unescape_tag_value(&escaped);
            assert_eq!(
                unescaped, original,
                "Roundtrip failed: '{}' -> '{}' -> '{}'",
                original, escaped, unescaped
            );
        }
    }
}
