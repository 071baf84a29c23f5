//! Library exports for the pixelspace drawing primitives.
//!
//! Exposes the renderer, its surfaces and the scene lifecycle so that host
//! programs can drive their own drawings, alongside the configuration types
//! and the bundled demo scenes used by the `pixelspace` binary.

pub mod config;
pub mod demos;
pub mod draw;
pub mod host;
pub mod scene;

pub use config::Config;
pub use draw::{DrawError, Renderer};
pub use scene::Scene;
