//! Desired appearance for one bar

use serde::{Deserialize, Serialize};
use sysbar_core::Color;

/// Icon tone for one bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// Leave whatever the platform picked.
    #[default]
    Unspecified,
    /// Dark icons for a light bar.
    Light,
    /// Light icons for a dark bar.
    Dark,
}

/// Color and icon tone for one system bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarConfig {
    /// Bar background color.
    #[serde(default)]
    pub color: Color,
    /// Icon tone.
    #[serde(default)]
    pub icon_mode: IconMode,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            color: Color::TRANSPARENT,
            icon_mode: IconMode::Unspecified,
        }
    }
}

impl BarConfig {
    /// Config with the given color and an unspecified icon mode.
    pub fn colored(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Replace the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Replace the icon mode.
    pub fn with_icon_mode(mut self, icon_mode: IconMode) -> Self {
        self.icon_mode = icon_mode;
        self
    }
}
