//! Common Test Utilities
//!
//! Shared bigram-set and payload builders used across the integration suite.

#![allow(dead_code)]

use payload_inspect::bigrams::{BigramTable, COMMON_ENGLISH};
use std::io::Write;

/// Bigrams spelling out "helloworld"
pub const HELLO_WORLD: [[u8; 2]; 9] = [
    *b"he", *b"el", *b"ll", *b"lo", *b"ow", *b"wo", *b"or", *b"rl", *b"ld",
];

/// Table holding exactly `keys`
pub fn bigram_set(keys: &[&str]) -> BigramTable {
    keys.iter()
        .map(|k| {
            let bytes = k.as_bytes();
            assert_eq!(bytes.len(), 2, "test bigram {:?} must be two bytes", k);
            [bytes[0], bytes[1]]
        })
        .collect()
}

/// Built-in English bigrams plus the "helloworld" pairs
pub fn english_with_hello_world() -> BigramTable {
    COMMON_ENGLISH
        .iter()
        .copied()
        .chain(HELLO_WORLD)
        .collect()
}

/// Surround `text` with `pad` non-readable bytes on each side
pub fn padded(text: &str, pad: usize) -> Vec<u8> {
    let mut payload = vec![0x01; pad];
    payload.extend_from_slice(text.as_bytes());
    payload.extend(std::iter::repeat(0x02).take(pad));
    payload
}

/// Write a bigram listing to a temporary file
pub fn write_bigram_file(listing: &str) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile()?;
    file.write_all(listing.as_bytes())?;
    file.flush()?;
    Ok(file)
}
