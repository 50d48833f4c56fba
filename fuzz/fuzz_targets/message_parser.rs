//! Fuzz target for message parsing
//!
//! Feeds randomly generated lines to the parser and ensures it never
//! panics, whatever the token layout.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    // Only fuzz valid UTF-8 strings to focus on protocol-level issues
    if let Ok(input) = str::from_utf8(data) {
        // Skip very long inputs (over 512 bytes is unusual for IRC)
        if input.len() > 512 {
            return;
        }

        // Parsing either succeeds or rejects; it must never panic
        if let Ok(msg) = banter_irc::Message::parse(input) {
            // Reconstruction of a parsed message must not panic either
            let _ = msg.to_string();
        }
    }
});
