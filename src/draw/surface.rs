//! Capability interface over a pixel-addressable drawing surface.
//!
//! The renderer never touches pixels itself. Every primitive is expressed as a
//! sequence of calls on a [`Surface`]; implementations translate them onto a
//! concrete backend (Cairo, a recording buffer, ...).

use super::color::Color;
use super::font::FontDescriptor;
use super::geometry::Point;
use super::state::TextAlign;
use thiserror::Error;

/// Failure reported by a surface implementation.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("cairo operation failed: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to write surface: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode PNG: {0}")]
    Png(String),

    #[error("surface restore without matching save")]
    UnbalancedRestore,

    #[error("surface rejected operation: {0}")]
    Rejected(String),
}

/// Drawing operations every backing surface must provide.
///
/// Path construction is infallible; operations that rasterize or touch the
/// backend's state stack report failures through [`SurfaceError`].
pub trait Surface {
    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    /// Adds a circular arc to the current path.
    ///
    /// Angles are in radians and taken literally. With `counterclockwise`
    /// false the sweep goes in the positive-angle direction; an `end` below
    /// `start` therefore sweeps the long way around.
    fn arc_to(&mut self, center: Point, radius: f64, start: f64, end: f64, counterclockwise: bool);

    fn close_path(&mut self);

    fn fill(&mut self) -> Result<(), SurfaceError>;

    fn stroke(&mut self) -> Result<(), SurfaceError>;

    /// Draws `text` with the current font and fill color, anchored at `p`
    /// according to the current text alignment. `p.y` is the baseline.
    fn draw_text(&mut self, p: Point, text: &str) -> Result<(), SurfaceError>;

    fn apply_stroke_color(&mut self, color: Color);

    fn apply_fill_color(&mut self, color: Color);

    fn apply_line_width(&mut self, width: f64);

    fn apply_font(&mut self, font: &FontDescriptor);

    fn apply_text_align(&mut self, align: TextAlign);

    /// Paints the whole surface with `color`, leaving style untouched.
    fn apply_background(&mut self, color: Color) -> Result<(), SurfaceError>;

    fn save(&mut self) -> Result<(), SurfaceError>;

    fn restore(&mut self) -> Result<(), SurfaceError>;
}
