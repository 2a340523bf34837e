//! CLI Smoke Test
//!
//! Parses real argument vectors and runs each command end to end, checking
//! that valid input succeeds and bad input surfaces the expected error.

use clap::Parser;
use payload_inspect::cli::Cli;
use payload_inspect::errors::{AppError, AppResult};

use crate::common::write_bigram_file;

fn run(args: &[&str]) -> AppResult<()> {
    let argv = std::iter::once("payload-inspect").chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).unwrap();
    cli.command.run()
}

#[test]
fn test_scan_command_text_and_json() {
    run(&["scan", "--text", "\u{1}\u{1}there is the\u{2}\u{2}"]).unwrap();
    run(&["scan", "--hex", "0102 68656c6c6f 0304", "--format", "json"]).unwrap();
    run(&["scan", "--text", "\u{1}\u{2}\u{3}", "--min-len", "0", "--capacity", "1"]).unwrap();
}

#[test]
fn test_scan_command_with_bigram_file() -> anyhow::Result<()> {
    let bigrams = write_bigram_file("zq\nqz\n")?;
    let path = bigrams.path().to_string_lossy().into_owned();

    run(&["scan", "--text", "!!zqzqzq!!", "--bigrams", &path])?;
    Ok(())
}

#[test]
fn test_scan_command_errors() {
    let bad_hex = run(&["scan", "--hex", "zz"]).unwrap_err();
    assert!(matches!(bad_hex, AppError::InvalidData(ref msg) if msg.contains("hex")));

    let zero_capacity = run(&["scan", "--text", "hello", "--capacity", "0"]).unwrap_err();
    assert!(matches!(zero_capacity, AppError::InvalidData(ref msg) if msg.contains("capacity")));

    let missing_file = run(&["scan", "--file", "/nonexistent/payload.bin"]).unwrap_err();
    assert!(matches!(missing_file, AppError::InvalidData(_)));

    let missing_bigrams = run(&["scan", "--text", "hello", "--bigrams", "/nonexistent/bg.txt"])
        .unwrap_err();
    assert!(matches!(missing_bigrams, AppError::InvalidData(ref msg) if msg.contains("bigram")));
}

#[test]
fn test_lookup_commands_run() {
    run(&["cipher", "0xc02f"]).unwrap();
    run(&["cipher", "0x00fe", "--format", "json"]).unwrap();
    run(&["tls-version", "771"]).unwrap();
    run(&["tls-version", "0x1234", "--format", "json"]).unwrap();
    run(&["net-match", "10.0.0.1", "10.0.0.0/8"]).unwrap();
    run(&["net-match", "8.8.8.8", "10.0.0.0/8", "--peer", "10.1.1.1"]).unwrap();
    run(&["punycode", "xn--p1ai"]).unwrap();
}

#[test]
fn test_invalid_lookup_arguments_rejected_at_parse() {
    for args in [
        &["cipher", "0xzz"][..],
        &["tls-version", "0x10000"][..],
        &["net-match", "10.0.0.1", "10.0.0.0/33"][..],
        &["net-match", "not-an-ip", "10.0.0.0/8"][..],
    ] {
        let argv = std::iter::once("payload-inspect").chain(args.iter().copied());
        assert!(Cli::try_parse_from(argv).is_err(), "{:?} should not parse", args);
    }
}
