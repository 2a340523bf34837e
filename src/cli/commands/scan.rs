use crate::config::AppConfig;
use crate::detection::{inspect, InspectSettings, InspectionReport, PayloadSource};
use crate::errors::{AppError, AppResult};
use clap::{ArgGroup, Args};
use std::path::PathBuf;
use tracing::info;

/// Scan a payload for a human-readable string
#[derive(Args)]
#[command(group(ArgGroup::new("input").required(true).multiple(false)))]
pub struct ScanCommand {
    /// Read the payload from a file
    #[arg(long, group = "input")]
    pub file: Option<PathBuf>,

    /// Payload as a hex string (whitespace ignored)
    #[arg(long, group = "input")]
    pub hex: Option<String>,

    /// Payload as literal text
    #[arg(long, group = "input")]
    pub text: Option<String>,

    /// Minimum run length; a run must be strictly longer (overrides config)
    #[arg(long)]
    pub min_len: Option<usize>,

    /// Output buffer size including the sentinel slot (overrides config)
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Bigram reference file (overrides config and PAYLOAD_INSPECT_BIGRAM_FILE)
    #[arg(long)]
    pub bigrams: Option<PathBuf>,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl ScanCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;

        let settings = self.settings(&config);
        let source = self.source()?;

        info!(
            "Scanning payload (min_match_len={}, capacity={})",
            settings.min_match_len, settings.output_capacity
        );

        let report = inspect(&source, &settings)
            .map_err(|e| AppError::InvalidData(format!("Scan failed: {:#}", e)))?;

        match self.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&report)?),
            _ => print_report_text(&report),
        }

        Ok(())
    }

    /// Merge CLI overrides onto the loaded configuration
    fn settings(&self, config: &AppConfig) -> InspectSettings {
        InspectSettings {
            min_match_len: self.min_len.unwrap_or(config.scanner.min_match_len),
            output_capacity: self.capacity.unwrap_or(config.scanner.output_capacity),
            bigram_file: self.bigrams.clone().or_else(|| config.bigrams.path.clone()),
        }
    }

    fn source(&self) -> AppResult<PayloadSource> {
        match (&self.file, &self.hex, &self.text) {
            (Some(path), _, _) => Ok(PayloadSource::File(path.clone())),
            (_, Some(hex), _) => Ok(PayloadSource::Hex(hex.clone())),
            (_, _, Some(text)) => Ok(PayloadSource::Text(text.clone())),
            _ => Err(AppError::InvalidData(
                "One of --file, --hex or --text is required".to_string(),
            )),
        }
    }
}

fn print_report_text(report: &InspectionReport) {
    println!("\n=== Readable String Scan ===");
    println!("Payload: {} bytes", report.payload_len);
    println!("  {}", report.payload_preview);
    println!();
    println!("Bigram set: {} ({} entries)", report.bigram_source, report.bigram_count);
    println!("Min match length: {} (run must be longer)", report.min_match_len);
    println!("Output capacity: {}", report.output_capacity);
    println!();

    match &report.text {
        Some(text) => {
            println!("Readable string: found");
            println!("  Run length: {}", report.run_len);
            println!("  Recorded ({} bytes): {:?}", report.written, text);
        }
        None => println!("Readable string: not found"),
    }
    println!();
}
