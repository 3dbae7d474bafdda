//! Card preview configuration
//!
//! Settings are read from `card.toml` and can be overridden per run through
//! environment variables.

pub use card_ir::DEFAULT_PRIMARY;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default file name looked up in the working directory.
pub const CONFIG_FILE: &str = "card.toml";

/// Main configuration structure for the card preview
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CardConfig {
    /// Preview host settings
    pub preview: PreviewConfig,
    /// Theme fallbacks
    pub theme: ThemeDefaults,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// How the preview output is printed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Preview host configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreviewConfig {
    /// Card schema to render when none is given on the command line.
    /// The bundled sample card is used when unset.
    pub schema_path: Option<PathBuf>,
    /// Output format of the rendered card
    pub output: OutputFormat,
}

/// Theme fallback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDefaults {
    /// Primary color for cards without `theme.primary`
    pub primary: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log every dispatched node at debug level
    pub debug: bool,
}

impl Default for ThemeDefaults {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
        }
    }
}

impl CardConfig {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(CardConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from `card.toml` in the current directory, or the
    /// defaults if the file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file(CONFIG_FILE).unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(path) = std::env::var("CARD_SCHEMA_PATH") {
            self.preview.schema_path = Some(PathBuf::from(path));
        }
        if let Ok(val) = std::env::var("CARD_OUTPUT") {
            if let Some(format) = OutputFormat::parse(&val) {
                self.preview.output = format;
            }
        }
        if let Ok(primary) = std::env::var("CARD_DEFAULT_PRIMARY") {
            if !primary.trim().is_empty() {
                self.theme.primary = primary;
            }
        }
        if let Ok(val) = std::env::var("CARD_DEBUG") {
            self.logging.debug = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from card.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
