//! Cairo-backed [`Surface`] implementation with Pango text.

use super::color::{BLACK, Color, WHITE};
use super::font::FontDescriptor;
use super::geometry::Point;
use super::state::TextAlign;
use super::surface::{Surface, SurfaceError};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Style bits Cairo does not track itself (it has a single source color and
/// no font or alignment state).
#[derive(Debug, Clone)]
struct AdapterStyle {
    stroke: Color,
    fill: Color,
    font: pango::FontDescription,
    align: TextAlign,
}

/// Draws onto a Cairo context.
///
/// Paths follow canvas semantics: `fill` and `stroke` keep the current path,
/// only `begin_path` discards it.
pub struct CairoSurface {
    ctx: cairo::Context,
    width: f64,
    height: f64,
    style: AdapterStyle,
    saved: Vec<AdapterStyle>,
}

impl CairoSurface {
    /// Wraps a context owned by the caller. `width`/`height` bound the area
    /// painted by [`Surface::apply_background`].
    pub fn new(ctx: cairo::Context, width: f64, height: f64) -> Self {
        // Best (gray) antialiasing avoids color fringing on ARGB targets
        ctx.set_antialias(cairo::Antialias::Best);
        let style = AdapterStyle {
            stroke: WHITE,
            fill: WHITE,
            font: pango::FontDescription::from_string(&FontDescriptor::default().to_pango_string()),
            align: TextAlign::Left,
        };
        Self {
            ctx,
            width,
            height,
            style,
            saved: Vec::new(),
        }
    }

    /// Creates an ARGB32 image surface of the given size, cleared to black.
    pub fn image(width: i32, height: i32) -> Result<Self, SurfaceError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let ctx = cairo::Context::new(&surface)?;
        let mut this = Self::new(ctx, width as f64, height as f64);
        this.apply_background(BLACK)?;
        Ok(this)
    }

    /// Encodes the target surface as PNG into `path`.
    pub fn write_png(&self, path: &Path) -> Result<(), SurfaceError> {
        let target = self.ctx.target();
        target.flush();
        let mut out = BufWriter::new(File::create(path)?);
        target
            .write_to_png(&mut out)
            .map_err(|e| SurfaceError::Png(e.to_string()))?;
        log::debug!("Wrote {}x{} PNG to {}", self.width, self.height, path.display());
        Ok(())
    }

    fn set_source(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

impl Surface for CairoSurface {
    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn arc_to(&mut self, center: Point, radius: f64, start: f64, end: f64, counterclockwise: bool) {
        // Cairo sweeps the long way around for end < start, same as canvas
        if counterclockwise {
            self.ctx.arc_negative(center.x, center.y, radius, start, end);
        } else {
            self.ctx.arc(center.x, center.y, radius, start, end);
        }
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        self.set_source(self.style.fill);
        self.ctx.fill_preserve()?;
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        self.set_source(self.style.stroke);
        self.ctx.stroke_preserve()?;
        Ok(())
    }

    fn draw_text(&mut self, p: Point, text: &str) -> Result<(), SurfaceError> {
        let layout = pangocairo::functions::create_layout(&self.ctx);
        layout.set_font_description(Some(&self.style.font));
        layout.set_text(text);

        let (_ink_rect, logical_rect) = layout.extents();
        let scale = pango::SCALE as f64;
        let text_width = logical_rect.width() as f64 / scale;
        let offset_x = match self.style.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -text_width / 2.0,
            TextAlign::Right => -text_width,
        };
        // Pango positions from the top-left of the layout, callers give a baseline
        let baseline = layout.baseline() as f64 / scale;

        self.ctx.save()?;
        self.ctx.new_path();
        self.set_source(self.style.fill);
        self.ctx.move_to(p.x + offset_x, p.y - baseline);
        pangocairo::functions::show_layout(&self.ctx, &layout);
        self.ctx.new_path();
        self.ctx.restore()?;
        Ok(())
    }

    fn apply_stroke_color(&mut self, color: Color) {
        self.style.stroke = color;
    }

    fn apply_fill_color(&mut self, color: Color) {
        self.style.fill = color;
    }

    fn apply_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn apply_font(&mut self, font: &FontDescriptor) {
        self.style.font = pango::FontDescription::from_string(&font.to_pango_string());
    }

    fn apply_text_align(&mut self, align: TextAlign) {
        self.style.align = align;
    }

    fn apply_background(&mut self, color: Color) -> Result<(), SurfaceError> {
        // Keep the caller's path intact
        let path = self.ctx.copy_path()?;
        self.ctx.save()?;
        self.ctx.new_path();
        self.ctx.set_operator(cairo::Operator::Source);
        self.set_source(color);
        self.ctx.rectangle(0.0, 0.0, self.width, self.height);
        self.ctx.fill()?;
        self.ctx.append_path(&path);
        self.ctx.restore()?;
        Ok(())
    }

    fn save(&mut self) -> Result<(), SurfaceError> {
        self.ctx.save()?;
        self.saved.push(self.style.clone());
        Ok(())
    }

    fn restore(&mut self) -> Result<(), SurfaceError> {
        if self.saved.is_empty() {
            return Err(SurfaceError::UnbalancedRestore);
        }
        self.ctx.restore()?;
        if let Some(style) = self.saved.pop() {
            self.style = style;
        }
        Ok(())
    }
}
