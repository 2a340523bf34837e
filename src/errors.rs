use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Bigram reference set could not be loaded
    #[error("Bigram set error: {0}")]
    Bigram(#[from] BigramError),

    /// Hex payload decoding
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// JSON rendering
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bigram reference set loading errors
#[derive(Error, Debug)]
pub enum BigramError {
    /// A line in the reference file is not a two-byte bigram
    #[error("Invalid bigram {entry:?} at line {line}")]
    InvalidEntry { line: usize, entry: String },

    /// Reference file could not be read
    #[error("Failed to read bigram file: {0}")]
    Io(#[from] std::io::Error),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for bigram set loading
pub type BigramResult<T> = Result<T, BigramError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
