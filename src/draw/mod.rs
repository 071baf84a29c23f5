//! Drawing primitives on top of a pluggable surface (Cairo-based by default).
//!
//! This module defines the core drawing types:
//! - [`geometry`]: pure vertex/path calculations for the primitives
//! - [`DrawingState`] / [`StateStack`]: style values with scoped save/restore
//! - [`Surface`]: the capability interface a backend implements
//! - [`Renderer`]: the shape operations scenes call
//! - [`CairoSurface`] and [`RecordingSurface`]: surface implementations

pub mod cairo_surface;
pub mod color;
pub mod error;
pub mod font;
pub mod geometry;
pub mod recording;
pub mod renderer;
pub mod state;
pub mod surface;

// Re-export commonly used types at module level
pub use cairo_surface::CairoSurface;
pub use color::Color;
pub use error::{DrawError, DrawResult};
pub use font::FontDescriptor;
pub use geometry::{GridLines, LineSegment, PathSegment, Point};
pub use recording::{RecordingSurface, SurfaceCall};
pub use renderer::{Phase, Renderer, Size};
pub use state::{DrawingState, LineWidth, StateStack, TextAlign};
pub use surface::{Surface, SurfaceError};

pub use color::{BLACK, BLUE, GRAY, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
