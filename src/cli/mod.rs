use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Readable-string detection and DPI lookup helpers
#[derive(Parser)]
#[command(name = "payload-inspect")]
#[command(about = "Readable-string detection and DPI lookup helpers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan a payload for a human-readable string
    Scan(commands::scan::ScanCommand),
    /// Look up a TLS cipher-suite name and strength
    Cipher(commands::lookup::CipherCommand),
    /// Label a TLS/SSL protocol version
    TlsVersion(commands::lookup::TlsVersionCommand),
    /// Check whether an IPv4 address lies inside a prefix
    NetMatch(commands::net::NetMatchCommand),
    /// Check whether a host name contains a punycode label
    Punycode(commands::net::PunycodeCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    Cli::parse().command.run()
}

impl Commands {
    /// Execute the selected command
    pub fn run(&self) -> AppResult<()> {
        match self {
            Commands::Scan(command) => command.run(),
            Commands::Cipher(command) => command.run(),
            Commands::TlsVersion(command) => command.run(),
            Commands::NetMatch(command) => command.run(),
            Commands::Punycode(command) => command.run(),
        }
    }
}
