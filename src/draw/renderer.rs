//! The primitive renderer: shape operations, style setters and the
//! init/render lifecycle.

use super::color::Color;
use super::error::{DrawError, DrawResult};
use super::font::FontDescriptor;
use super::geometry::{self, PathSegment, Point};
use super::state::{DrawingState, StateStack, TextAlign};
use super::surface::Surface;
use crate::scene::Scene;
use std::f64::consts::TAU;

/// Surface dimensions in pixels, readable by scenes while they render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Lifecycle position of a [`Renderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built, no style committed yet.
    Constructed,
    /// `init` completed; ready for render cycles.
    Initialized,
    /// Inside a render cycle.
    Rendering,
}

/// High-level drawing operations on top of a borrowed [`Surface`].
///
/// The renderer owns its [`DrawingState`] and borrows the surface for its
/// whole lifetime. Scenes drive it through [`Renderer::init`] once and
/// [`Renderer::render`] any number of times afterwards.
///
/// A primitive that fails validation returns an error before touching the
/// surface; surface failures are passed through unchanged. Either way the
/// drawing state is left as it was and further calls may follow.
pub struct Renderer<'s> {
    surface: &'s mut dyn Surface,
    size: Size,
    defaults: DrawingState,
    state: StateStack,
    phase: Phase,
    frames: u64,
}

impl<'s> Renderer<'s> {
    /// Creates a renderer with the built-in default style.
    pub fn new(surface: &'s mut dyn Surface, size: Size) -> Self {
        Self::with_defaults(surface, size, DrawingState::default())
    }

    /// Creates a renderer whose style is reset to `defaults` on `init`.
    pub fn with_defaults(surface: &'s mut dyn Surface, size: Size, defaults: DrawingState) -> Self {
        Self {
            surface,
            size,
            state: StateStack::new(defaults.clone()),
            defaults,
            phase: Phase::Constructed,
            frames: 0,
        }
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of completed render cycles.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The live drawing state.
    pub fn state(&self) -> &DrawingState {
        self.state.current()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Commits the default style to the surface and runs the scene's `init`.
    ///
    /// # Errors
    /// `State` when the renderer was already initialized. A failing scene
    /// `init` leaves the renderer in [`Phase::Constructed`].
    pub fn init(&mut self, scene: &mut dyn Scene) -> DrawResult<()> {
        if self.phase != Phase::Constructed {
            return Err(DrawError::state("init called more than once"));
        }

        self.state = StateStack::new(self.defaults.clone());
        self.state.current().apply_to(self.surface);
        scene.init(self)?;

        self.phase = Phase::Initialized;
        log::debug!(
            "Renderer initialized ({}x{})",
            self.size.width,
            self.size.height
        );
        Ok(())
    }

    /// Runs one render cycle: paints the background, then the scene.
    ///
    /// Saves left open by the scene are unwound before returning and reported
    /// as a `State` error.
    ///
    /// # Errors
    /// `State` before `init` or when re-entered from inside a render cycle;
    /// otherwise whatever the scene or surface reported.
    pub fn render(&mut self, scene: &dyn Scene) -> DrawResult<()> {
        match self.phase {
            Phase::Constructed => return Err(DrawError::state("render called before init")),
            Phase::Rendering => return Err(DrawError::state("render cycles cannot overlap")),
            Phase::Initialized => {}
        }

        self.phase = Phase::Rendering;
        let result = self
            .surface
            .apply_background(self.state.current().background)
            .map_err(DrawError::from)
            .and_then(|()| scene.render(self));
        let unwound = self.unwind_saved_states();
        self.phase = Phase::Initialized;
        self.frames += 1;

        result?;
        unwound?;
        log::trace!("Render cycle {} complete", self.frames);
        Ok(())
    }

    fn unwind_saved_states(&mut self) -> DrawResult<()> {
        let open = self.state.depth();
        if open == 0 {
            return Ok(());
        }
        log::warn!("Render cycle left {open} saved state(s) open, restoring");
        for _ in 0..open {
            self.restore_state()?;
        }
        Err(DrawError::state(format!(
            "{open} save_state call(s) without matching restore_state"
        )))
    }

    // ------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------

    /// Sets both stroke and fill color.
    pub fn color(&mut self, color: Color) {
        self.state.set_color(self.surface, color);
    }

    pub fn stroke_color(&mut self, color: Color) {
        self.state.set_stroke_color(self.surface, color);
    }

    pub fn fill_color(&mut self, color: Color) {
        self.state.set_fill_color(self.surface, color);
    }

    /// Sets the line width in pixels.
    pub fn line_style(&mut self, width: f64) -> DrawResult<()> {
        self.state.set_line_width(self.surface, width)
    }

    pub fn font(&mut self, font: impl Into<FontDescriptor>) {
        self.state.set_font(self.surface, font.into());
    }

    pub fn text_align(&mut self, align: TextAlign) {
        self.state.set_text_align(self.surface, align);
    }

    /// Sets the background painted at the start of every render cycle and
    /// paints it right away.
    pub fn background(&mut self, color: Color) -> DrawResult<()> {
        self.state.set_background(self.surface, color)
    }

    /// Saves the drawing state and the surface state.
    pub fn save_state(&mut self) -> DrawResult<()> {
        self.surface.save()?;
        self.state.save();
        Ok(())
    }

    /// Restores the most recently saved drawing and surface state.
    ///
    /// # Errors
    /// `State` when there is no matching [`save_state`](Self::save_state).
    pub fn restore_state(&mut self) -> DrawResult<()> {
        if self.state.depth() == 0 {
            return Err(DrawError::state("restore_state without matching save_state"));
        }
        self.surface.restore()?;
        self.state.restore(self.surface)
    }

    /// Runs `f` between a save and a restore. The restore happens on every
    /// exit path; an error from `f` takes precedence over one from restoring.
    pub fn with_saved_state<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> DrawResult<T>,
    ) -> DrawResult<T> {
        self.save_state()?;
        let result = f(self);
        let restored = self.restore_state();
        let value = result?;
        restored?;
        Ok(value)
    }

    // ------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------

    /// Strokes a circular arc. Angles are used as given, without
    /// normalization.
    pub fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
        counterclockwise: bool,
    ) -> DrawResult<()> {
        let center = Point::new(cx, cy);
        check_center(center)?;
        check_radius(radius)?;
        if !start.is_finite() || !end.is_finite() {
            return Err(DrawError::invalid("arc angles must be finite"));
        }
        self.surface.begin_path();
        self.surface
            .arc_to(center, radius, start, end, counterclockwise);
        self.surface.stroke()?;
        Ok(())
    }

    /// Draws a full circle, filled or stroked.
    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64, filled: bool) -> DrawResult<()> {
        let center = Point::new(cx, cy);
        check_center(center)?;
        check_radius(radius)?;
        self.circle_path(center, radius, filled)
    }

    /// Draws one circle of `radius` around each point with the current style.
    pub fn circles(&mut self, centers: &[Point], radius: f64, filled: bool) -> DrawResult<()> {
        check_radius(radius)?;
        for &center in centers {
            check_center(center)?;
        }
        for &center in centers {
            self.circle_path(center, radius, filled)?;
        }
        Ok(())
    }

    fn circle_path(&mut self, center: Point, radius: f64, filled: bool) -> DrawResult<()> {
        self.surface.begin_path();
        self.surface.arc_to(center, radius, 0.0, TAU, false);
        self.paint(filled)
    }

    /// Strokes a grid of `cell_width` x `cell_height` cells covering
    /// `total_width` x `total_height` from `(x, y)`.
    pub fn grid(
        &mut self,
        x: f64,
        y: f64,
        cell_width: f64,
        cell_height: f64,
        total_width: f64,
        total_height: f64,
    ) -> DrawResult<()> {
        let lines =
            geometry::grid_lines(x, y, cell_width, cell_height, total_width, total_height)?;
        self.surface.begin_path();
        for segment in lines.iter() {
            self.surface.move_to(segment.from);
            self.surface.line_to(segment.to);
        }
        self.surface.stroke()?;
        Ok(())
    }

    /// Strokes the closed path through `points` in order.
    pub fn shape(&mut self, points: &[Point]) -> DrawResult<()> {
        self.closed_path(points, false)
    }

    /// Fills the closed path through `points` in order.
    pub fn fill_shape(&mut self, points: &[Point]) -> DrawResult<()> {
        self.closed_path(points, true)
    }

    /// Draws a regular polygon with its first vertex at angle zero.
    pub fn polygon(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        sides: usize,
        filled: bool,
    ) -> DrawResult<()> {
        let vertices = geometry::regular_polygon_vertices(Point::new(cx, cy), radius, sides, 0.0)?;
        self.closed_path(&vertices, filled)
    }

    /// Strokes `rings` concentric polygons, each as its own path.
    pub fn polygon_ring(
        &mut self,
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        sides: usize,
        rings: usize,
    ) -> DrawResult<()> {
        let rings = geometry::polygon_ring_vertices(
            Point::new(cx, cy),
            inner_radius,
            outer_radius,
            sides,
            rings,
        )?;
        for ring in &rings {
            self.closed_path(ring, false)?;
        }
        Ok(())
    }

    /// Strokes a rounded rectangle.
    pub fn rounded_rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
    ) -> DrawResult<()> {
        let segments = geometry::rounded_rectangle_segments(x, y, width, height, corner_radius)?;
        self.outline(&segments, false)
    }

    /// Fills a rounded rectangle.
    pub fn fill_rounded_rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
    ) -> DrawResult<()> {
        let segments = geometry::rounded_rectangle_segments(x, y, width, height, corner_radius)?;
        self.outline(&segments, true)
    }

    /// Draws `text` with the current font, fill color and alignment;
    /// `y` is the baseline.
    pub fn text(&mut self, x: f64, y: f64, text: &str) -> DrawResult<()> {
        self.surface.draw_text(Point::new(x, y), text)?;
        Ok(())
    }

    fn closed_path(&mut self, points: &[Point], filled: bool) -> DrawResult<()> {
        let Some((first, rest)) = points.split_first() else {
            return Err(DrawError::invalid("shape needs at least one point"));
        };
        self.surface.begin_path();
        self.surface.move_to(*first);
        for &p in rest {
            self.surface.line_to(p);
        }
        self.surface.close_path();
        self.paint(filled)
    }

    fn outline(&mut self, segments: &[PathSegment], filled: bool) -> DrawResult<()> {
        self.surface.begin_path();
        for (i, segment) in segments.iter().enumerate() {
            match *segment {
                PathSegment::Line(line) => {
                    if i == 0 {
                        self.surface.move_to(line.from);
                    }
                    self.surface.line_to(line.to);
                }
                // Arcs connect from the current point on their own
                PathSegment::Arc {
                    center,
                    radius,
                    start,
                    end,
                } => self.surface.arc_to(center, radius, start, end, false),
            }
        }
        self.surface.close_path();
        self.paint(filled)
    }

    fn paint(&mut self, filled: bool) -> DrawResult<()> {
        if filled {
            self.surface.fill()?;
        } else {
            self.surface.stroke()?;
        }
        Ok(())
    }
}

fn check_center(center: Point) -> DrawResult<()> {
    if center.x.is_finite() && center.y.is_finite() {
        Ok(())
    } else {
        Err(DrawError::invalid(format!(
            "center must be finite, got ({}, {})",
            center.x, center.y
        )))
    }
}

fn check_radius(radius: f64) -> DrawResult<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(DrawError::invalid(format!(
            "radius must be positive, got {radius}"
        )))
    }
}
