//! Configuration file support for pixelspace.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/pixelspace/config.toml`. Settings include the default drawing
//! style committed at renderer init and the output surface used by the CLI host.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, TextAlignSpec};
pub use types::{OutputConfig, StyleConfig};

use crate::draw::{BLACK, DrawingState, FontDescriptor, LineWidth, WHITE};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [style]
/// background = "#222222"
/// color = "white"
/// line_width = 1.0
/// font = "14px Terminus"
/// text_align = "left"
///
/// [output]
/// width = 960
/// height = 120
/// frames = 1
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default drawing style
    #[serde(default)]
    pub style: StyleConfig,

    /// Output surface settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `style.line_width`: 0.1 - 100.0
    /// - `output.width` / `output.height`: 1 - 8192
    /// - `output.frames`: 1 - 1000
    fn validate_and_clamp(&mut self) {
        if !(0.1..=100.0).contains(&self.style.line_width) {
            log::warn!(
                "Invalid line_width {:.2}, clamping to 0.1-100.0 range",
                self.style.line_width
            );
            self.style.line_width = if self.style.line_width.is_nan() {
                1.0
            } else {
                self.style.line_width.clamp(0.1, 100.0)
            };
        }

        if !(1..=8192).contains(&self.output.width) {
            log::warn!(
                "Invalid output width {}, clamping to 1-8192 range",
                self.output.width
            );
            self.output.width = self.output.width.clamp(1, 8192);
        }

        if !(1..=8192).contains(&self.output.height) {
            log::warn!(
                "Invalid output height {}, clamping to 1-8192 range",
                self.output.height
            );
            self.output.height = self.output.height.clamp(1, 8192);
        }

        if !(1..=1000).contains(&self.output.frames) {
            log::warn!(
                "Invalid frames {}, clamping to 1-1000 range",
                self.output.frames
            );
            self.output.frames = self.output.frames.clamp(1, 1000);
        }

        if self.style.font.trim().is_empty() {
            log::warn!("Empty font, falling back to '14px Sans'");
            self.style.font = "14px Sans".to_string();
        }
    }

    /// Builds the drawing state a renderer starts from after `init`.
    pub fn drawing_state(&self) -> DrawingState {
        let color = self.style.color.to_color_or(WHITE);
        DrawingState {
            background: self.style.background.to_color_or(BLACK),
            stroke_color: color,
            fill_color: color,
            line_width: LineWidth::new(self.style.line_width).unwrap_or_default(),
            font: FontDescriptor::new(self.style.font.clone()),
            text_align: self.style.text_align.into(),
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/pixelspace/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pixelspace");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::parse(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn parse(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Writes the documented example config to the default location.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or the file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Color, TextAlign};

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        let state = config.drawing_state();
        assert_eq!(state, DrawingState::default());
        assert_eq!(config.output.width, 960);
        assert_eq!(config.output.frames, 1);
    }

    #[test]
    fn style_section_maps_to_drawing_state() {
        let config = Config::parse(
            r##"
            [style]
            background = "#222222"
            color = [255, 0, 0]
            line_width = 2.5
            font = "bold 12px Monospace"
            text_align = "center"
            "##,
        )
        .unwrap();
        let state = config.drawing_state();
        assert_eq!(state.background, Color::from_rgb8(0x22, 0x22, 0x22));
        assert_eq!(state.stroke_color, Color::from_rgb8(255, 0, 0));
        assert_eq!(state.fill_color, state.stroke_color);
        assert_eq!(state.line_width.get(), 2.5);
        assert_eq!(state.font.as_str(), "bold 12px Monospace");
        assert_eq!(state.text_align, TextAlign::Center);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::parse(
            r#"
            [style]
            line_width = 0.0
            font = "  "

            [output]
            width = 0
            height = 100000
            frames = 0
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.style.line_width, 0.1);
        assert_eq!(config.style.font, "14px Sans");
        assert_eq!(config.output.width, 1);
        assert_eq!(config.output.height, 8192);
        assert_eq!(config.output.frames, 1);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.output.height, 120);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[style\nline_width = ").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn example_config_parses() {
        let config = Config::parse(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config.style.font, "14px Sans");
    }
}
