//! Fuzz target for the transmission codec
//!
//! # Invariants
//!
//! - `normalize`, `format_blocks`, and `to_plain_text` NEVER panic
//! - `normalize` output carries no digits and no spaces
//! - `format_blocks` groups are exactly the requested width

#![no_main]

use enigma_codec::{format_blocks, normalize, to_plain_text};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: String| {
    let stream = normalize(&text);
    assert!(!stream.chars().any(|c| c.is_ascii_digit() || c == ' '));

    let blocks = format_blocks(&stream, 5);
    for group in blocks.split(' ') {
        assert!(group.chars().count() <= 5);
    }

    let _ = to_plain_text(&stream);
    let _ = to_plain_text(&text);
});
