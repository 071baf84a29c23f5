//! Drawing style state with a scoped save/restore stack.

use super::color::{BLACK, Color, WHITE};
use super::error::{DrawError, DrawResult};
use super::font::FontDescriptor;
use super::surface::Surface;

/// A validated, strictly positive line width in pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LineWidth(f64);

impl LineWidth {
    /// # Errors
    /// `InvalidArgument` when `width` is zero, negative or not finite.
    pub fn new(width: f64) -> DrawResult<Self> {
        if width.is_finite() && width > 0.0 {
            Ok(Self(width))
        } else {
            Err(DrawError::invalid(format!(
                "line width must be positive, got {width}"
            )))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for LineWidth {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Horizontal anchoring of text relative to its x coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Snapshot of every style value the renderer tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingState {
    pub background: Color,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub line_width: LineWidth,
    pub font: FontDescriptor,
    pub text_align: TextAlign,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            background: BLACK,
            stroke_color: WHITE,
            fill_color: WHITE,
            line_width: LineWidth::default(),
            font: FontDescriptor::default(),
            text_align: TextAlign::Left,
        }
    }
}

impl DrawingState {
    /// Pushes every style value (except the background) onto `surface`.
    pub fn apply_to(&self, surface: &mut dyn Surface) {
        surface.apply_stroke_color(self.stroke_color);
        surface.apply_fill_color(self.fill_color);
        surface.apply_line_width(self.line_width.get());
        surface.apply_font(&self.font);
        surface.apply_text_align(self.text_align);
    }
}

/// The live drawing state plus the stack of saved snapshots.
///
/// Every mutation is mirrored onto the surface immediately.
#[derive(Debug, Default)]
pub struct StateStack {
    current: DrawingState,
    saved: Vec<DrawingState>,
}

impl StateStack {
    pub fn new(initial: DrawingState) -> Self {
        Self {
            current: initial,
            saved: Vec::new(),
        }
    }

    pub fn current(&self) -> &DrawingState {
        &self.current
    }

    /// Number of snapshots waiting for a restore.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Sets both stroke and fill color.
    pub fn set_color(&mut self, surface: &mut dyn Surface, color: Color) {
        self.current.stroke_color = color;
        self.current.fill_color = color;
        surface.apply_stroke_color(color);
        surface.apply_fill_color(color);
    }

    pub fn set_stroke_color(&mut self, surface: &mut dyn Surface, color: Color) {
        self.current.stroke_color = color;
        surface.apply_stroke_color(color);
    }

    pub fn set_fill_color(&mut self, surface: &mut dyn Surface, color: Color) {
        self.current.fill_color = color;
        surface.apply_fill_color(color);
    }

    /// # Errors
    /// `InvalidArgument` for a non-positive width; the state is left untouched.
    pub fn set_line_width(&mut self, surface: &mut dyn Surface, width: f64) -> DrawResult<()> {
        let width = LineWidth::new(width)?;
        self.current.line_width = width;
        surface.apply_line_width(width.get());
        Ok(())
    }

    pub fn set_font(&mut self, surface: &mut dyn Surface, font: FontDescriptor) {
        surface.apply_font(&font);
        self.current.font = font;
    }

    pub fn set_text_align(&mut self, surface: &mut dyn Surface, align: TextAlign) {
        self.current.text_align = align;
        surface.apply_text_align(align);
    }

    /// Records the background and paints the surface with it.
    pub fn set_background(&mut self, surface: &mut dyn Surface, color: Color) -> DrawResult<()> {
        surface.apply_background(color)?;
        self.current.background = color;
        Ok(())
    }

    /// Pushes a copy of the current state.
    pub fn save(&mut self) {
        self.saved.push(self.current.clone());
    }

    /// Pops the most recent snapshot, makes it current and re-applies it.
    ///
    /// # Errors
    /// `State` when nothing was saved.
    pub fn restore(&mut self, surface: &mut dyn Surface) -> DrawResult<()> {
        let previous = self
            .saved
            .pop()
            .ok_or_else(|| DrawError::state("restore without matching save"))?;
        self.current = previous;
        self.current.apply_to(surface);
        Ok(())
    }
}
