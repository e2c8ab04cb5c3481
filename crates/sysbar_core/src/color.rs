//! Packed ARGB colors
//!
//! Bar colors travel through the platform window APIs as packed 32-bit ARGB
//! integers, and some inherited behavior (the icon-tone midpoint threshold)
//! compares those packed values directly. `Color` therefore keeps the packed
//! representation instead of unpacking to float channels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Packed 32-bit ARGB color.
///
/// Alpha occupies the top byte, then red, green, blue. Stored as `i32`
/// because that is how the window APIs hand colors back.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(i32);

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// Fully transparent, the "no color requested" value.
    pub const TRANSPARENT: Color = Color(0);

    /// Opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xFF, r, g, b)
    }

    /// Color from 8-bit channels including alpha.
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color((((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)) as i32)
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Color((0xFF00_0000 | (hex & 0x00FF_FFFF)) as i32)
    }

    /// From the raw packed value as reported by platform window APIs.
    pub const fn from_packed(packed: i32) -> Self {
        Color(packed)
    }

    /// The raw packed ARGB value.
    pub const fn packed(self) -> i32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Replace the alpha channel.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Color((self.0 & 0x00FF_FFFF) | (((alpha as u32) << 24) as i32))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha() == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.red(), self.green(), self.blue())
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.alpha(),
                self.red(),
                self.green(),
                self.blue()
            )
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

/// Error parsing a `#RRGGBB` / `#AARRGGBB` color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Missing the leading `#`.
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    /// Wrong digit count.
    #[error("color must have 6 or 8 hex digits: {0:?}")]
    BadLength(String),

    /// A non-hex character in the digits.
    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.into()))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::BadLength(s.into()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::BadDigit(s.into()))?;
        if digits.len() == 6 {
            Ok(Color::from_hex(value))
        } else {
            Ok(Color::from_packed(value as i32))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
