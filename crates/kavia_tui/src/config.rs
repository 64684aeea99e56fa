//! Display settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Settings file as written on disk. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    x_color: Option<String>,
    o_color: Option<String>,
    show_hints: Option<bool>,
}

/// Resolved display settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TuiConfig {
    /// Color used for X marks.
    x_color: Color,
    /// Color used for O marks.
    o_color: Color,
    /// Whether to draw the key help footer.
    show_hints: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            x_color: Color::Blue,
            o_color: Color::Red,
            show_hints: true,
        }
    }
}

impl TuiConfig {
    /// Loads settings from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded");
        Ok(config)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        let defaults = Self::default();
        Ok(Self {
            x_color: parse_color(file.x_color.as_deref())?.unwrap_or(defaults.x_color),
            o_color: parse_color(file.o_color.as_deref())?.unwrap_or(defaults.o_color),
            show_hints: file.show_hints.unwrap_or(defaults.show_hints),
        })
    }

    /// Returns a copy with the help footer forced off.
    pub fn without_hints(self) -> Self {
        Self {
            show_hints: false,
            ..self
        }
    }
}

#[track_caller]
fn parse_color(name: Option<&str>) -> Result<Option<Color>, ConfigError> {
    let Some(name) = name else {
        return Ok(None);
    };
    match Color::from_str(name) {
        Ok(color) => Ok(Some(color)),
        Err(_) => Err(ConfigError::new(format!("Unknown color: {}", name))),
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
