use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Default base name of the optional configuration file in the working directory
pub const CONFIG_FILE_NAME: &str = "payload-inspect";

/// Environment variable naming a bigram reference file (overrides `bigrams.path`)
pub const BIGRAM_FILE_ENV: &str = "PAYLOAD_INSPECT_BIGRAM_FILE";

/// Application configuration loaded from payload-inspect.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub bigrams: BigramsConfig,
}

/// Readable-string scanner parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// A run must be strictly longer than this to be accepted
    pub min_match_len: usize,
    /// Output buffer size including the sentinel slot
    pub output_capacity: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            min_match_len: 4,
            output_capacity: 64,
        }
    }
}

/// Bigram reference set selection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BigramsConfig {
    /// Reference listing on disk; the built-in English set is used when unset
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from payload-inspect.toml (if present) and environment variables.
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `file` (which must exist) instead of the
    /// default optional payload-inspect.toml
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = ScannerConfig::default();
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let config = Config::builder()
            // Start with default values
            .set_default("scanner.min_match_len", defaults.min_match_len as i64)?
            .set_default("scanner.output_capacity", defaults.output_capacity as i64)?
            .add_source(file_source)
            // PAYLOAD_INSPECT_SCANNER__MIN_MATCH_LEN and friends override file values
            .add_source(
                Environment::with_prefix("PAYLOAD_INSPECT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        if let Ok(bigram_file) = env::var(BIGRAM_FILE_ENV) {
            app_config.bigrams.path = Some(PathBuf::from(bigram_file));
        }

        app_config.validate()?;
        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scanner.output_capacity == 0 {
            return Err(ConfigError::Message(
                "scanner.output_capacity must be at least 1 (one slot is reserved for the sentinel)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
