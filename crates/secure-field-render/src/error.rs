//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while preparing geometry for drawing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Bounds with zero or negative area cannot host a drawing.
    #[error("invalid drawing bounds: {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },

    /// The path has no commands to tessellate.
    #[error("path is empty")]
    EmptyPath,

    /// lyon rejected the path.
    #[error("tessellation failed: {0}")]
    Tessellation(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
