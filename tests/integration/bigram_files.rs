//! File-backed bigram sets and the inspection report

use payload_inspect::bigrams::{BigramSet, BigramTable};
use payload_inspect::detection::{inspect, InspectSettings, PayloadSource};
use payload_inspect::errors::{AppError, BigramError};

use crate::common::write_bigram_file;

fn settings(bigram_file: Option<std::path::PathBuf>) -> InspectSettings {
    InspectSettings {
        min_match_len: 4,
        output_capacity: 64,
        bigram_file,
    }
}

#[test]
fn test_listing_with_comments_loads() -> anyhow::Result<()> {
    let file = write_bigram_file("# common pairs\nTH\nhe  # trailing comment\n\nin\n")?;
    let table = BigramTable::load(file.path())?;

    assert_eq!(table.len(), 3);
    assert!(table.contains(*b"th"));
    assert!(table.contains(*b"he"));
    assert!(!table.contains(*b"TH"));
    Ok(())
}

#[test]
fn test_bad_entry_reports_line() -> anyhow::Result<()> {
    let file = write_bigram_file("th\nhe\nthe\n")?;

    match BigramTable::load(file.path()) {
        Err(BigramError::InvalidEntry { line, entry }) => {
            assert_eq!(line, 3);
            assert_eq!(entry, "the");
        }
        other => panic!("expected InvalidEntry, got {:?}", other),
    }

    let app_err: AppError = BigramTable::load(file.path()).unwrap_err().into();
    assert!(app_err.to_string().contains("line 3"));
    Ok(())
}

#[test]
fn test_report_uses_file_backed_set() -> anyhow::Result<()> {
    let file = write_bigram_file("zq\nqz\n")?;
    let source = PayloadSource::Hex("0101 7a717a717a71 0202".to_string());

    let report = inspect(&source, &settings(Some(file.path().to_path_buf())))?;

    assert!(report.found);
    assert_eq!(report.bigram_count, 2);
    assert_eq!(report.text.as_deref(), Some("zqzqzq"));
    assert_eq!(report.payload_len, 10);
    Ok(())
}

#[test]
fn test_report_reads_payload_file() -> anyhow::Result<()> {
    let payload = write_bigram_file("\u{1}\u{1}there is the\u{2}\u{2}")?;
    let report = inspect(
        &PayloadSource::File(payload.path().to_path_buf()),
        &settings(None),
    )?;

    assert!(report.found);
    assert_eq!(report.text.as_deref(), Some("there is the"));

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["found"], true);
    assert_eq!(json["run_len"], 12);
    Ok(())
}

#[test]
fn test_report_not_found_has_no_text() -> anyhow::Result<()> {
    let report = inspect(&PayloadSource::Hex("00010203".into()), &settings(None))?;
    assert!(!report.found);
    assert!(report.text.is_none());
    assert_eq!(report.payload_preview, "....");
    Ok(())
}
