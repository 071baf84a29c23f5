//! Configuration type definitions.

use super::enums::{ColorSpec, TextAlignSpec};
use serde::{Deserialize, Serialize};

/// Default drawing style committed when a renderer is initialized.
///
/// Scenes can change any of these at runtime; this only decides where they start.
#[derive(Debug, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Background painted at the start of every render cycle
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Stroke and fill color
    #[serde(default = "default_color")]
    pub color: ColorSpec,

    /// Line width in pixels (valid range: 0.1 - 100.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// CSS-style font shorthand, e.g. "14px Sans" or "bold 12pt Monospace"
    #[serde(default = "default_font")]
    pub font: String,

    /// Text anchoring (left, center, right)
    #[serde(default)]
    pub text_align: TextAlignSpec,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            color: default_color(),
            line_width: default_line_width(),
            font: default_font(),
            text_align: TextAlignSpec::default(),
        }
    }
}

/// Output surface settings used by the command-line host.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Number of render cycles to run before writing the image (valid range: 1 - 1000)
    #[serde(default = "default_frames")]
    pub frames: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            frames: default_frames(),
        }
    }
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_line_width() -> f64 {
    1.0
}

fn default_font() -> String {
    "14px Sans".to_string()
}

fn default_width() -> i32 {
    960
}

fn default_height() -> i32 {
    120
}

fn default_frames() -> u32 {
    1
}
