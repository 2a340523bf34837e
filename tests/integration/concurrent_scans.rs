//! A single scanner shared by many worker threads

use payload_inspect::bigrams::english;
use payload_inspect::detection::{ReadableScanner, SENTINEL};
use std::sync::Arc;
use std::thread;

use crate::common::{english_with_hello_world, padded};

fn payloads() -> Vec<Vec<u8>> {
    vec![
        padded("helloworld", 2),
        padded("there is the", 1),
        padded("0123456789", 4),
        vec![0x00; 40],
        b"xy".to_vec(),
        padded("mail.example.com", 3),
    ]
}

#[test]
fn test_shared_scanner_matches_sequential_results() {
    let scanner = Arc::new(ReadableScanner::new(english_with_hello_world(), 4));
    let inputs = payloads();
    let expected: Vec<_> = inputs.iter().map(|p| scanner.find(p, 64)).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let scanner = Arc::clone(&scanner);
            let inputs = inputs.clone();
            thread::spawn(move || {
                inputs
                    .iter()
                    .map(|p| scanner.find(p, 64))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_per_thread_output_buffers() {
    let scanner = ReadableScanner::new(english(), 4);
    assert_eq!(scanner.min_match_len(), 4);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let mut out = [0xffu8; 32];
                let outcome = scanner.scan(&padded("there is the", 2), &mut out);
                assert!(outcome.found);
                assert_eq!(&out[..outcome.written], b"there is the");
                assert_eq!(out[outcome.written], SENTINEL);
            });
        }
    });
}
