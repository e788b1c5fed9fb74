//! Error types for rasterlab-transform

use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::CoreError),

    /// Invalid target dimensions
    #[error("invalid target dimensions: {width}x{height}")]
    InvalidTarget { width: u32, height: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
