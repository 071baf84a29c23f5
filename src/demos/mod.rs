//! Demo scenes exercising every primitive.
//!
//! These are ordinary [`Scene`] implementations; they only use the public
//! renderer API.

mod drawing;
mod grids;

pub use drawing::Drawing;
pub use grids::Grids;

use crate::scene::Scene;

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &["drawing", "grids"];

/// Looks up a demo scene by name (case-insensitive).
pub fn by_name(name: &str) -> Option<Box<dyn Scene>> {
    match name.to_ascii_lowercase().as_str() {
        "drawing" => Some(Box::new(Drawing)),
        "grids" => Some(Box::new(Grids)),
        _ => None,
    }
}
