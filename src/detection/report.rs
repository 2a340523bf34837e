//! Payload inspection report
//!
//! Ties payload loading, bigram-set selection and the readable-string scan
//! together for tools that start from a file, a hex string or literal text
//! rather than an in-memory buffer.

use crate::bigrams::{english, BigramTable};
use crate::detection::readable::{self, SENTINEL};
use crate::utils::preview::ascii_preview;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Maximum preview length (bytes) shown for the raw payload
const PAYLOAD_PREVIEW_LEN: usize = 64;

/// Where the payload bytes come from
#[derive(Debug, Clone)]
pub enum PayloadSource {
    File(PathBuf),
    Hex(String),
    Text(String),
}

impl PayloadSource {
    pub fn load(&self) -> Result<Vec<u8>> {
        match self {
            PayloadSource::File(path) => std::fs::read(path)
                .with_context(|| format!("Failed to read payload file {}", path.display())),
            PayloadSource::Hex(hex_str) => {
                let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();
                hex::decode(&cleaned).context("Payload is not valid hex")
            }
            PayloadSource::Text(text) => Ok(text.as_bytes().to_vec()),
        }
    }
}

/// Scanner parameters for one inspection
#[derive(Debug, Clone)]
pub struct InspectSettings {
    pub min_match_len: usize,
    pub output_capacity: usize,
    /// Reference listing; `None` selects the built-in English set
    pub bigram_file: Option<PathBuf>,
}

/// Result of inspecting one payload
#[derive(Debug, Clone, Serialize)]
pub struct InspectionReport {
    pub payload_len: usize,
    pub bigram_source: String,
    pub bigram_count: usize,
    pub min_match_len: usize,
    pub output_capacity: usize,
    pub found: bool,
    pub run_len: usize,
    pub written: usize,
    /// Recorded run (lossy UTF-8), present only when a run was accepted
    pub text: Option<String>,
    pub payload_preview: String,
}

/// Load the payload and bigram set, scan, and summarise the outcome
pub fn inspect(source: &PayloadSource, settings: &InspectSettings) -> Result<InspectionReport> {
    let payload = source.load()?;

    let loaded;
    let (bigrams, bigram_source): (&BigramTable, String) = match &settings.bigram_file {
        Some(path) => {
            loaded = load_bigrams(path)?;
            (&loaded, path.display().to_string())
        }
        None => (english(), "built-in english".to_string()),
    };

    anyhow::ensure!(settings.output_capacity > 0, "Output capacity must be at least 1");

    let mut out = vec![SENTINEL; settings.output_capacity];
    let outcome = readable::scan(bigrams, &payload, settings.min_match_len, &mut out);

    info!("Scanned {} bytes: found={} run_len={}", payload.len(), outcome.found, outcome.run_len);

    let text = outcome
        .found
        .then(|| String::from_utf8_lossy(&out[..outcome.written]).into_owned());

    Ok(InspectionReport {
        payload_len: payload.len(),
        bigram_source,
        bigram_count: bigrams.len(),
        min_match_len: settings.min_match_len,
        output_capacity: settings.output_capacity,
        found: outcome.found,
        run_len: outcome.run_len,
        written: outcome.written,
        text,
        payload_preview: ascii_preview(&payload, PAYLOAD_PREVIEW_LEN),
    })
}

fn load_bigrams(path: &Path) -> Result<BigramTable> {
    BigramTable::load(path)
        .with_context(|| format!("Failed to load bigram set from {}", path.display()))
}
