//! RGBA color type, predefined color constants and CSS-style parsing.

use super::error::DrawError;
use std::str::FromStr;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
/// The renderer never inspects a color; it hands it to the surface unchanged.
///
/// # Examples
///
/// ```
/// use pixelspace::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let sky: Color = "#66CCFF".parse().unwrap();
/// assert_eq!(sky, Color::from_rgb8(0x66, 0xCC, 0xFF));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Creates a color from 8-bit channels including alpha.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }
}

impl FromStr for Color {
    type Err = DrawError;

    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` or one of the named colors
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| DrawError::invalid(format!("bad hex color '{s}'")));
        }
        name_to_color(s).ok_or_else(|| DrawError::invalid(format!("unknown color name '{s}'")))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let mut nibbles = hex.chars().filter_map(|c| c.to_digit(16)).map(|d| (d * 17) as u8);
            Some(Color::from_rgb8(nibbles.next()?, nibbles.next()?, nibbles.next()?))
        }
        6 => Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black",
///   "gray"/"grey", "transparent"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "gray" | "grey" => Some(GRAY),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// Predefined mid gray (R=G=B=0.5)
pub const GRAY: Color = Color::new(0.5, 0.5, 0.5, 1.0);

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Fully transparent color
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#222222".parse::<Color>().unwrap(), Color::from_rgb8(0x22, 0x22, 0x22));
        assert_eq!("#fff".parse::<Color>().unwrap(), WHITE);
        assert_eq!(
            "#FF336680".parse::<Color>().unwrap(),
            Color::from_rgba8(0xFF, 0x33, 0x66, 0x80)
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("White".parse::<Color>().unwrap(), WHITE);
        assert_eq!("red".parse::<Color>().unwrap(), RED);
        assert_eq!("grey".parse::<Color>().unwrap(), GRAY);
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(matches!("#12345".parse::<Color>(), Err(DrawError::InvalidArgument(_))));
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("chartreuse".parse::<Color>().is_err());
    }
}
