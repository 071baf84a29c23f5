//! Configuration enum types.

use crate::draw::{Color, TextAlign, WHITE};
use log::warn;
use serde::{Deserialize, Serialize};

/// Text alignment as written in the config file.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlignSpec {
    #[default]
    Left,
    Center,
    Right,
}

impl From<TextAlignSpec> for TextAlign {
    fn from(spec: TextAlignSpec) -> Self {
        match spec {
            TextAlignSpec::Left => TextAlign::Left,
            TextAlignSpec::Center => TextAlign::Center,
            TextAlignSpec::Right => TextAlign::Right,
        }
    }
}

/// Color specification - a named/hex color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "white"
///
/// # CSS hex
/// background = "#222222"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, ..., white, black) or `#rrggbb`-style hex
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Unparseable names fall back to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => name.parse().unwrap_or_else(|_| {
                warn!("Unknown color '{}', using fallback", name);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Like [`to_color_or`](Self::to_color_or) with white as the fallback.
    pub fn to_color(&self) -> Color {
        self.to_color_or(WHITE)
    }
}
