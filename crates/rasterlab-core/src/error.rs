//! Error types for rasterlab-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Contract violations (zero dimensions, mismatched data length,
//! out-of-range coordinates) fail fast with a typed variant instead of
//! silently degrading.

use thiserror::Error;

/// Rasterlab core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid buffer dimensions
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw data length does not match width*height*4
    #[error("data length mismatch: expected {expected} bytes, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Pixel coordinates outside the buffer
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
