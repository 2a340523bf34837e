use crate::errors::{AppError, AppResult};
use crate::tls::{cipher_name, cipher_strength, tls_version_label};
use clap::Args;
use serde_json::json;

/// Look up a TLS cipher-suite name and strength
#[derive(Args)]
pub struct CipherCommand {
    /// Cipher-suite id, decimal or 0x-prefixed hex
    #[arg(value_parser = parse_numeric_id)]
    pub id: u32,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl CipherCommand {
    pub fn run(&self) -> AppResult<()> {
        let name = cipher_name(self.id);
        let strength = cipher_strength(self.id);

        match self.format.as_str() {
            "json" => {
                let value = json!({
                    "id": format!("0x{:04x}", self.id),
                    "name": name,
                    "strength": strength,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            _ => {
                println!("Cipher 0x{:04x}", self.id);
                println!("  Name:     {}", name);
                println!("  Strength: {}", strength);
            }
        }
        Ok(())
    }
}

/// Label a TLS/SSL protocol version
#[derive(Args)]
pub struct TlsVersionCommand {
    /// Wire version, decimal or 0x-prefixed hex (e.g. 0x0303)
    #[arg(value_parser = parse_version)]
    pub version: u16,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl TlsVersionCommand {
    pub fn run(&self) -> AppResult<()> {
        let label = tls_version_label(self.version);

        match self.format.as_str() {
            "json" => {
                let value = json!({
                    "version": format!("0x{:04x}", self.version),
                    "label": label.name,
                    "known": label.known,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            _ => {
                let suffix = if label.known { "" } else { " (unrecognised)" };
                println!("0x{:04x}: {}{}", self.version, label.name, suffix);
            }
        }
        Ok(())
    }
}

/// Parse `0x1234`, `0X1234` or a plain decimal number
pub fn parse_numeric_id(value: &str) -> AppResult<u32> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex_digits) => u32::from_str_radix(hex_digits, 16),
        None => trimmed.parse::<u32>(),
    };
    parsed.map_err(|e| AppError::InvalidData(format!("Invalid id {:?}: {}", value, e)))
}

fn parse_version(value: &str) -> AppResult<u16> {
    let id = parse_numeric_id(value)?;
    u16::try_from(id)
        .map_err(|_| AppError::InvalidData(format!("Version {:?} does not fit in 16 bits", value)))
}
