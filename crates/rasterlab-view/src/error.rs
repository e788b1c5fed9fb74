//! Error types for rasterlab-view

use thiserror::Error;

/// Errors that can occur during compositing and picking
#[derive(Debug, Error)]
pub enum ViewError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::CoreError),

    /// Resampling error
    #[error("transform error: {0}")]
    Transform(#[from] rasterlab_transform::TransformError),

    /// Requested logical image dimensions are degenerate
    #[error("invalid logical size: {width}x{height}")]
    InvalidLogicalSize { width: u32, height: u32 },

    /// Pick coordinates outside the display surface
    #[error("pick at ({x}, {y}) outside {width}x{height} surface")]
    PickOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for view operations
pub type ViewResult<T> = Result<T, ViewError>;
