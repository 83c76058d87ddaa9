//! Property-based tests for IRC message parsing.
//!
//! Uses proptest to generate random message components and verify that:
//! 1. Parsing never panics, whatever the input
//! 2. Serialized messages re-parse to an equal message (roundtrip)
//! 3. Tag escaping is lossless and never leaks separators onto the wire

use std::collections::BTreeMap;

use proptest::prelude::*;
use ircwire::message::tags::{escaped_tag_value, unescape_tag_value};
use ircwire::Message;

// =============================================================================
// STRATEGIES - Generators for valid IRC components
// =============================================================================

/// Verb: a command word or numeric.
fn verb_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[A-Za-z]{1,12}").expect("valid regex"),
        prop::string::string_regex("[0-9]{3}").expect("valid regex"),
    ]
}

/// Source: nick!user@host or a server name, or nothing at all.
fn source_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_]{0,8}![a-z]{1,8}@[a-z0-9.:]{1,20}")
            .expect("valid regex"),
        prop::string::string_regex("[a-z]+\\.[a-z]+\\.[a-z]+").expect("valid regex"),
    ]
}

/// Tag key: alphanumeric with optional client-only or vendor prefix.
fn tag_key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\+?([a-z]+\\.[a-z]+/)?[a-zA-Z][a-zA-Z0-9\\-]{0,20}")
        .expect("valid regex")
}

/// Tag value: anything at all, including the characters that need escaping.
fn tag_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("(?s).{0,40}").expect("valid regex"),
        prop::string::string_regex("[\\\\; \r\na-z]{0,20}").expect("valid regex"),
    ]
}

fn tags_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(tag_key_strategy(), tag_value_strategy(), 0..5)
}

/// Middle parameter: non-empty, no spaces, no leading colon.
fn middle_param_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9#&+!*,.@\\-][a-zA-Z0-9#&+!*,.@:\\-]{0,15}")
        .expect("valid regex")
}

/// Trailing parameter: any text, including CR and LF.
fn trailing_param_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("(?s).{0,80}").expect("valid regex"),
        prop::string::string_regex("[a-z :\r\n]{0,20}").expect("valid regex"),
    ]
}

fn params_strategy() -> impl Strategy<Value = Vec<String>> {
    (
        prop::collection::vec(middle_param_strategy(), 0..6),
        prop::option::of(trailing_param_strategy()),
    )
        .prop_map(|(mut params, trailing)| {
            params.extend(trailing);
            params
        })
}

/// Generate a complete valid Message
fn message_strategy() -> impl Strategy<Value = Message> {
    (
        tags_strategy(),
        source_strategy(),
        verb_strategy(),
        params_strategy(),
    )
        .prop_map(|(tags, source, verb, params)| {
            Message::from_parts(tags, source, verb, params).expect("strategy yields valid fields")
        })
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The fundamental roundtrip property: serialize → parse = identity
    #[test]
    fn message_roundtrip(msg in message_strategy()) {
        let serialized = msg.to_string();

        let parsed: Message = serialized.parse()
            .expect("Serialized message should be parseable");

        prop_assert_eq!(&msg, &parsed,
            "Roundtrip failed for serialized: {}", serialized);
    }

    /// Serialization is stable: a reparsed message serializes identically
    #[test]
    fn serialization_is_stable(msg in message_strategy()) {
        let first = msg.to_string();
        let second = first.parse::<Message>().expect("should parse").to_string();
        prop_assert_eq!(first, second);
    }

    /// The builder produces the same value as direct construction
    #[test]
    fn builder_matches_constructor(
        tags in tags_strategy(),
        source in source_strategy(),
        verb in verb_strategy(),
        params in params_strategy()
    ) {
        let built = Message::builder(verb.clone())
            .tags(tags.clone())
            .expect("valid tag keys")
            .source(source.clone())
            .params(params.clone())
            .build()
            .expect("valid fields");
        let direct = Message::from_parts(tags, source, verb, params).expect("valid fields");
        prop_assert_eq!(built, direct);
    }

    /// Parsing should never panic, even on garbage
    #[test]
    fn parse_never_panics(line in any::<String>()) {
        let _ = Message::parse(&line);
    }

    /// Tag values survive escaping exactly
    #[test]
    fn tag_value_escape_roundtrip(value in tag_value_strategy()) {
        let escaped = escaped_tag_value(&value);
        prop_assert_eq!(unescape_tag_value(&escaped), value);
    }

    /// Escaped values never contain raw separators or line terminators
    #[test]
    fn escaped_value_is_wire_safe(value in tag_value_strategy()) {
        let escaped = escaped_tag_value(&value);
        prop_assert!(!escaped.contains([';', ' ', '\r', '\n']),
            "unsafe escaped value: {:?}", escaped);
    }
}

// =============================================================================
// EDGE CASE TESTS
// =============================================================================

proptest! {
    /// Empty trailing text is kept as a present, empty parameter
    #[test]
    fn empty_trailing_roundtrip(target in middle_param_strategy()) {
        let msg = Message::builder("PRIVMSG")
            .params([target, String::new()])
            .build()
            .expect("valid message");

        let serialized = msg.to_string();
        prop_assert!(serialized.ends_with(" :"));
        let parsed: Message = serialized.parse().expect("Should parse");
        prop_assert_eq!(msg, parsed);
    }

    /// Tags come back with the same keys and values regardless of order
    #[test]
    fn multiple_tags_roundtrip(tags in tags_strategy()) {
        let msg = Message::from_parts(tags.clone(), String::new(), "PING".into(), vec!["x".into()])
            .expect("valid message");

        let parsed: Message = msg.to_string().parse().expect("Should parse");
        prop_assert_eq!(parsed.tags(), &tags);
    }
}
