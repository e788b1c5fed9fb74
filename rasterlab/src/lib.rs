//! Rasterlab - In-memory raster editing engine
//!
//! Rasterlab provides the algorithmic core of an image editor as pure
//! operations over RGBA pixel buffers:
//!
//! - Convolution filtering with preset and user-edited kernels
//! - Two-point tone-curve remapping with per-channel histograms
//! - Nearest-neighbor resampling
//! - RGB / XYZ / Lab conversion and WCAG contrast analysis
//! - A deterministic viewport compositor with preview-before-commit
//!   editing state and pixel picking
//!
//! The host application owns decoding, windowing and widgets; it feeds
//! decoded buffers and input events in, and reads rendered surfaces and
//! picked colors out.
//!
//! # Example
//!
//! ```
//! use rasterlab::{PixelBuffer, Sample};
//! use rasterlab::filter::Kernel;
//!
//! let buffer = PixelBuffer::new_filled(16, 16, Sample::opaque(120, 80, 40)).unwrap();
//! let blurred = rasterlab::filter::convolve(&buffer, &Kernel::gaussian()).unwrap();
//! assert_eq!(blurred.dimensions(), (16, 16));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterlab_color as color;
pub use rasterlab_filter as filter;
pub use rasterlab_transform as transform;
pub use rasterlab_view as view;
