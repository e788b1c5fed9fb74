//! Error types for rasterlab-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::CoreError),

    /// Invalid kernel shape or contents
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Invalid tone-curve control points
    #[error("invalid curve: {0}")]
    InvalidCurve(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
