//! Observable properties of the readable-string scanner

use payload_inspect::bigrams::{english, BigramTable};
use payload_inspect::detection::{
    find_readable_string, has_human_readable_string, readable::scan, SENTINEL,
};
use payload_inspect::utils::preview::until_sentinel;
use std::collections::HashSet;

use crate::common::{bigram_set, english_with_hello_world, padded, HELLO_WORLD};

#[test]
fn test_hello_world_is_found_between_junk() {
    let bigrams = english_with_hello_world();
    let mut out = [0xffu8; 64];

    let outcome = scan(&bigrams, b"xyz!!!helloworld###", 4, &mut out);

    assert!(outcome.found);
    assert_eq!(outcome.run_len, 10);
    assert_eq!(until_sentinel(&out), b"helloworld");
    assert_eq!(out[10], SENTINEL);
}

#[test]
fn test_control_bytes_never_match() {
    let payload: Vec<u8> = (0u8..0x20).cycle().take(200).collect();
    let mut out = [0xffu8; 16];

    for threshold in [0, 1, 4, 100] {
        assert!(!has_human_readable_string(english(), &payload, threshold, &mut out));
        assert_eq!(out[0], SENTINEL);
        assert_eq!(out[15], SENTINEL);
    }
}

#[test]
fn test_truncated_output_still_reports_found() {
    let bigrams = english_with_hello_world();
    let mut out = [0xffu8; 3];

    let outcome = scan(&bigrams, b"xyz!!!helloworld###", 4, &mut out);

    assert!(outcome.found);
    assert_eq!(outcome.run_len, 10);
    assert_eq!(outcome.written, 2);
    assert_eq!(&out, b"he\0");
}

#[test]
fn test_threshold_is_strict() {
    let bigrams = bigram_set(&["he", "ll"]);
    let payload = b"##hello##";

    let found = find_readable_string(&bigrams, payload, 4, 32).unwrap();
    assert_eq!(found.text, "hello");
    assert_eq!(found.run_len, 5);

    assert!(find_readable_string(&bigrams, payload, 5, 32).is_none());
}

#[test]
fn test_digits_pass_without_bigrams() {
    let empty = BigramTable::new();
    let payload = b"\x01\x0101234567\x01\x01";

    let found = find_readable_string(&empty, payload, 4, 32).unwrap();
    assert_eq!(found.text, "01234567");
    assert_eq!(found.run_len, 8);
}

#[test]
fn test_punctuation_pairs_pass_without_bigrams() {
    let empty = BigramTable::new();

    let found = find_readable_string(&empty, b"a.b.c.d.e.f", 4, 32).unwrap();
    // The last byte is lookahead only and never starts a pair
    assert_eq!(found.text, "a.b.c.d.e.");
    assert_eq!(found.run_len, 10);
}

#[test]
fn test_short_run_is_erased_before_the_next_one() {
    let bigrams: BigramTable = HELLO_WORLD.into_iter().collect();
    let mut payload = b"\x00helo\x00\x00".to_vec();
    payload.extend_from_slice(&padded("helloworld", 2));
    let mut out = [0xffu8; 32];

    let outcome = scan(&bigrams, &payload, 4, &mut out);

    assert!(outcome.found);
    assert_eq!(until_sentinel(&out), b"helloworld");
}

#[test]
fn test_degenerate_payloads() {
    let mut out = [0xffu8; 8];
    for payload in [&b""[..], &b"a"[..], &b"ab"[..]] {
        let outcome = scan(english(), payload, 0, &mut out);
        assert!(!outcome.found);
        assert_eq!(out[0], SENTINEL);
    }

    let mut empty_out: [u8; 0] = [];
    assert!(!scan(english(), b"the quick brown fox", 0, &mut empty_out).found);
}

#[test]
fn test_case_insensitive_bigram_lookup() {
    let bigrams: HashSet<[u8; 2]> = HELLO_WORLD.into_iter().collect();

    let found = find_readable_string(&bigrams, &padded("HeLLoWorLD", 2), 4, 32).unwrap();
    assert_eq!(found.text, "HeLLoWorLD");
}

#[test]
fn test_scan_is_deterministic() {
    let bigrams = english_with_hello_world();
    let payload = padded("there is the helloworld", 3);

    let mut first = [0u8; 64];
    let mut second = [0xaau8; 64];
    let a = scan(&bigrams, &payload, 4, &mut first);
    let b = scan(&bigrams, &payload, 4, &mut second);

    assert_eq!(a, b);
    assert_eq!(until_sentinel(&first), until_sentinel(&second));
}
