//! rasterlab-test - Regression test support
//!
//! Shared helpers for the crate-level regression tests:
//!
//! - [`RegParams`] - accumulates value and buffer comparisons for one
//!   named test and reports every failure at the end instead of
//!   stopping at the first
//! - deterministic buffer factories replacing on-disk fixtures
//!
//! # Usage
//!
//! ```
//! use rasterlab_test::{RegParams, gradient_buffer};
//!
//! let mut rp = RegParams::new("example");
//! let buf = gradient_buffer(8, 8);
//! rp.compare_values(8.0, buf.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use rasterlab_core::{PixelBuffer, Sample};

/// A buffer filled with one color.
pub fn uniform_buffer(width: u32, height: u32, sample: Sample) -> PixelBuffer {
    PixelBuffer::new_filled(width, height, sample).expect("test dimensions are positive")
}

/// A buffer with distinct, position-dependent channel values; useful
/// for catching coordinate mixups.
pub fn gradient_buffer(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height).expect("test dimensions are positive");
    for y in 0..height {
        for x in 0..width {
            buf.set_sample_unchecked(
                x,
                y,
                Sample::new(
                    (x * 255 / width.max(1)) as u8,
                    (y * 255 / height.max(1)) as u8,
                    ((x + y) % 256) as u8,
                    255,
                ),
            );
        }
    }
    buf
}

/// The 2x2 red/green/blue/white corner buffer used by resampling and
/// compositor tests.
pub fn quadrant_buffer() -> PixelBuffer {
    let mut buf = PixelBuffer::new(2, 2).expect("fixed dimensions");
    buf.set_sample_unchecked(0, 0, Sample::opaque(255, 0, 0));
    buf.set_sample_unchecked(1, 0, Sample::opaque(0, 255, 0));
    buf.set_sample_unchecked(0, 1, Sample::opaque(0, 0, 255));
    buf.set_sample_unchecked(1, 1, Sample::WHITE);
    buf
}
