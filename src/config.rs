use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::query::complexity::DEFAULT_WARNING_THRESHOLD;
use crate::core::query::config::DEFAULT_MAX_SYNONYMS_PER_WORD;
use crate::core::query::error::QueryResult;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub compiler: CompilerSettings,
    pub logging: LoggingConfig,
}

/// Query compiler tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerSettings {
    /// Complexity scores strictly above this attach a warning.
    pub complexity_warning_threshold: u8,
    /// Size limit in bytes for each compiled matcher.
    pub regex_size_limit: usize,
    /// Synonym cap used when a configuration does not set its own.
    pub default_max_synonyms_per_word: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines on stdout instead of pretty output.
    pub json: bool,
    /// Also write daily-rolling JSON logs into this directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            complexity_warning_threshold: DEFAULT_WARNING_THRESHOLD,
            regex_size_limit: 64 * (1 << 20),
            default_max_synonyms_per_word: DEFAULT_MAX_SYNONYMS_PER_WORD,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/scripture-search/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}, using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> QueryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> QueryResult<Self> {
        Ok(toml::from_str(content)?)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("scripture-search").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
