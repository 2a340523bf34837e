//! Integration Tests
//!
//! End-to-end checks of the public API: the readable-string scanner against
//! built-in and file-backed bigram sets, the inspection report, and the
//! lookup helpers.

#[path = "../common/mod.rs"]
mod common;

mod bigram_files;
mod cli_smoke_test;
mod concurrent_scans;
mod lookups;
mod scanner_properties;
