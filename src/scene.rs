//! Lifecycle hooks implemented by drawing programs.

use crate::draw::{DrawResult, Renderer};

/// A drawing program driven by a [`Renderer`].
///
/// The host calls [`Renderer::init`] once, which forwards to [`Scene::init`];
/// each later [`Renderer::render`] call paints the background and forwards to
/// [`Scene::render`]. `render` only gets `&self`, so repeated cycles draw the
/// same picture unless the scene's own fields change between them.
pub trait Scene {
    /// Sets the initial background and style. Runs exactly once.
    fn init(&mut self, r: &mut Renderer<'_>) -> DrawResult<()>;

    /// Issues the drawing calls for one cycle.
    fn render(&self, r: &mut Renderer<'_>) -> DrawResult<()>;
}
