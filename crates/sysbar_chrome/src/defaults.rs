//! Style defaults file handling
//!
//! Applications can ship a small TOML file describing the bar appearance
//! the session hands out before any explicit configuration:
//!
//! ```toml
//! [status]
//! color = "#1E66F5"
//! icon_mode = "dark"
//!
//! [navigation]
//! color = "#00000000"
//! ```
//!
//! Missing tables fall back to the built-in default (transparent,
//! unspecified icon mode).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bar_config::BarConfig;

/// Errors loading style defaults.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML (or a color inside it) failed to parse
    #[error("failed to parse style defaults: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default bar appearance handed out on config miss (`sysbar.toml`).
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct StyleDefaults {
    #[serde(default)]
    pub status: Option<BarConfig>,
    #[serde(default)]
    pub navigation: Option<BarConfig>,
}

impl StyleDefaults {
    /// Parse from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Status config to hand out on miss.
    pub fn status_config(&self) -> BarConfig {
        self.status.unwrap_or_default()
    }

    /// Navigation config to hand out on miss.
    pub fn navigation_config(&self) -> BarConfig {
        self.navigation.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar_config::IconMode;
    use sysbar_core::Color;

    #[test]
    fn parses_both_tables() {
        let defaults = StyleDefaults::from_toml(
            r##"
            [status]
            color = "#1E66F5"
            icon_mode = "dark"

            [navigation]
            color = "#00000000"
            "##,
        )
        .unwrap();

        assert_eq!(
            defaults.status_config(),
            BarConfig::colored(Color::from_hex(0x1E66F5)).with_icon_mode(IconMode::Dark)
        );
        assert_eq!(defaults.navigation_config().color, Color::TRANSPARENT);
        assert_eq!(
            defaults.navigation_config().icon_mode,
            IconMode::Unspecified
        );
    }

    #[test]
    fn missing_tables_fall_back_to_builtin_default() {
        let defaults = StyleDefaults::from_toml("").unwrap();
        assert_eq!(defaults.status_config(), BarConfig::default());
        assert_eq!(defaults.navigation_config(), BarConfig::default());
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let err = StyleDefaults::from_toml(
            r##"
            [status]
            color = "336699"
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = StyleDefaults::from_path("/nonexistent/sysbar.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
