//! Error types shared by the drawing layer.

use super::surface::SurfaceError;
use thiserror::Error;

/// Errors raised by geometry helpers, drawing state and the renderer.
#[derive(Debug, Error)]
pub enum DrawError {
    /// A caller supplied a value outside the accepted domain
    /// (non-positive radius, fewer than three sides, zero line width, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not allowed in the current lifecycle or stack state.
    #[error("invalid state: {0}")]
    State(String),

    /// The drawing surface could not perform the requested operation.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl DrawError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        DrawError::InvalidArgument(msg.into())
    }

    pub(crate) fn state(msg: impl Into<String>) -> Self {
        DrawError::State(msg.into())
    }
}

/// Convenience alias used across the drawing modules.
pub type DrawResult<T> = Result<T, DrawError>;
