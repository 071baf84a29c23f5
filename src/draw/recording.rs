//! In-memory surface that records every call as a command.
//!
//! Useful as a command buffer (record once, [`replay`](RecordingSurface::replay)
//! onto a real surface later) and for inspecting exactly what a primitive
//! asked the surface to do.

use super::color::Color;
use super::font::FontDescriptor;
use super::geometry::Point;
use super::state::TextAlign;
use super::surface::{Surface, SurfaceError};

/// A single recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        counterclockwise: bool,
    },
    ClosePath,
    Fill,
    Stroke,
    Text {
        at: Point,
        text: String,
    },
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f64),
    Font(FontDescriptor),
    TextAlign(TextAlign),
    Background(Color),
    Save,
    Restore,
}

/// Surface implementation that stores calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    depth: usize,
    rejecting: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in issue order.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Drops the recorded calls, keeping the save depth.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// When set, every rasterizing call (fill, stroke, text, background)
    /// fails with [`SurfaceError::Rejected`] instead of being recorded.
    pub fn set_rejecting(&mut self, rejecting: bool) {
        self.rejecting = rejecting;
    }

    fn paint(&mut self, call: SurfaceCall) -> Result<(), SurfaceError> {
        if self.rejecting {
            return Err(SurfaceError::Rejected(format!("{call:?}")));
        }
        self.calls.push(call);
        Ok(())
    }

    /// Re-issues every recorded call on `target`, stopping at the first failure.
    pub fn replay(&self, target: &mut dyn Surface) -> Result<(), SurfaceError> {
        for call in &self.calls {
            match call {
                SurfaceCall::BeginPath => target.begin_path(),
                SurfaceCall::MoveTo(p) => target.move_to(*p),
                SurfaceCall::LineTo(p) => target.line_to(*p),
                SurfaceCall::Arc {
                    center,
                    radius,
                    start,
                    end,
                    counterclockwise,
                } => target.arc_to(*center, *radius, *start, *end, *counterclockwise),
                SurfaceCall::ClosePath => target.close_path(),
                SurfaceCall::Fill => target.fill()?,
                SurfaceCall::Stroke => target.stroke()?,
                SurfaceCall::Text { at, text } => target.draw_text(*at, text)?,
                SurfaceCall::StrokeColor(c) => target.apply_stroke_color(*c),
                SurfaceCall::FillColor(c) => target.apply_fill_color(*c),
                SurfaceCall::LineWidth(w) => target.apply_line_width(*w),
                SurfaceCall::Font(f) => target.apply_font(f),
                SurfaceCall::TextAlign(a) => target.apply_text_align(*a),
                SurfaceCall::Background(c) => target.apply_background(*c)?,
                SurfaceCall::Save => target.save()?,
                SurfaceCall::Restore => target.restore()?,
            }
        }
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) {
        self.calls.push(SurfaceCall::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.calls.push(SurfaceCall::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.calls.push(SurfaceCall::LineTo(p));
    }

    fn arc_to(&mut self, center: Point, radius: f64, start: f64, end: f64, counterclockwise: bool) {
        self.calls.push(SurfaceCall::Arc {
            center,
            radius,
            start,
            end,
            counterclockwise,
        });
    }

    fn close_path(&mut self) {
        self.calls.push(SurfaceCall::ClosePath);
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        self.paint(SurfaceCall::Fill)
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        self.paint(SurfaceCall::Stroke)
    }

    fn draw_text(&mut self, p: Point, text: &str) -> Result<(), SurfaceError> {
        self.paint(SurfaceCall::Text {
            at: p,
            text: text.to_string(),
        })
    }

    fn apply_stroke_color(&mut self, color: Color) {
        self.calls.push(SurfaceCall::StrokeColor(color));
    }

    fn apply_fill_color(&mut self, color: Color) {
        self.calls.push(SurfaceCall::FillColor(color));
    }

    fn apply_line_width(&mut self, width: f64) {
        self.calls.push(SurfaceCall::LineWidth(width));
    }

    fn apply_font(&mut self, font: &FontDescriptor) {
        self.calls.push(SurfaceCall::Font(font.clone()));
    }

    fn apply_text_align(&mut self, align: TextAlign) {
        self.calls.push(SurfaceCall::TextAlign(align));
    }

    fn apply_background(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.paint(SurfaceCall::Background(color))
    }

    fn save(&mut self) -> Result<(), SurfaceError> {
        self.depth += 1;
        self.calls.push(SurfaceCall::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), SurfaceError> {
        if self.depth == 0 {
            return Err(SurfaceError::UnbalancedRestore);
        }
        self.depth -= 1;
        self.calls.push(SurfaceCall::Restore);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn replay_reproduces_calls() {
        let mut source = RecordingSurface::new();
        source.apply_stroke_color(RED);
        source.begin_path();
        source.move_to(Point::new(1.0, 2.0));
        source.line_to(Point::new(3.0, 4.0));
        source.stroke().unwrap();

        let mut target = RecordingSurface::new();
        source.replay(&mut target).unwrap();
        assert_eq!(source.calls(), target.calls());
    }

    #[test]
    fn unbalanced_restore_fails() {
        let mut surface = RecordingSurface::new();
        assert!(matches!(
            surface.restore(),
            Err(SurfaceError::UnbalancedRestore)
        ));
        surface.save().unwrap();
        surface.restore().unwrap();
    }

    #[test]
    fn rejecting_surface_fails_paint_calls_only() {
        let mut surface = RecordingSurface::new();
        surface.set_rejecting(true);
        surface.begin_path();
        assert!(surface.stroke().is_err());
        assert!(surface.draw_text(Point::default(), "x").is_err());
        assert_eq!(surface.calls(), &[SurfaceCall::BeginPath]);
    }
}
