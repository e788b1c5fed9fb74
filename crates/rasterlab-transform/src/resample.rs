//! Nearest-neighbor resampling
//!
//! For every destination cell the nearest source cell is
//! `(floor(x * src_w / new_w), floor(y * src_h / new_h))`; all four
//! channels are copied verbatim. No blending, no anti-aliasing.
//!
//! The floor-of-ratio is computed in integer arithmetic so corner
//! sampling is exact for any dimension pair.

use crate::{TransformError, TransformResult};
use rasterlab_core::PixelBuffer;

/// Resize a buffer to the given dimensions by nearest-neighbor sampling.
///
/// Returns a new buffer; resizing to the source's own dimensions yields
/// a byte-identical copy.
///
/// # Errors
///
/// Returns [`TransformError::InvalidTarget`] if either target dimension
/// is zero. A degenerate target is a caller bug, not a request to no-op.
pub fn resize_nearest(
    src: &PixelBuffer,
    new_width: u32,
    new_height: u32,
) -> TransformResult<PixelBuffer> {
    if new_width == 0 || new_height == 0 {
        return Err(TransformError::InvalidTarget {
            width: new_width,
            height: new_height,
        });
    }

    let src_w = src.width() as u64;
    let src_h = src.height() as u64;
    let mut out = PixelBuffer::new(new_width, new_height)?;

    for y in 0..new_height {
        let nearest_y = (y as u64 * src_h / new_height as u64) as u32;
        for x in 0..new_width {
            let nearest_x = (x as u64 * src_w / new_width as u64) as u32;
            out.set_sample_unchecked(x, y, src.sample_unchecked(nearest_x, nearest_y));
        }
    }

    Ok(out)
}
