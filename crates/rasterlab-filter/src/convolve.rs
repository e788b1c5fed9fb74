//! Convolution over RGBA buffers
//!
//! Applies a square kernel to every pixel of a buffer using replicate
//! (clamp) border handling: out-of-range coordinates read the nearest
//! edge pixel. Each color channel accumulates independently, is scaled
//! by the kernel coefficient and clamped to [0, 255].
//!
//! Output alpha is always 255, regardless of input alpha. Transparency
//! does not survive a filter pass; callers that care must reapply alpha
//! themselves.

use crate::{FilterResult, Kernel};
use rasterlab_core::{PixelBuffer, Sample};

/// Convolve a buffer with a kernel.
///
/// Returns a new buffer of identical dimensions. Runs synchronously over
/// the whole buffer in O(width * height * size^2).
pub fn convolve(src: &PixelBuffer, kernel: &Kernel) -> FilterResult<PixelBuffer> {
    let w = src.width();
    let h = src.height();
    let half = kernel.half();
    let n = kernel.size();
    let coeff = kernel.coefficient();

    let extended = extend_replicate(src, half)?;
    let mut out = PixelBuffer::new(w, h)?;

    for y in 0..h {
        for x in 0..w {
            let mut sum_r = 0.0f32;
            let mut sum_g = 0.0f32;
            let mut sum_b = 0.0f32;

            for ky in 0..n {
                for kx in 0..n {
                    // (x, y) in the source maps to (x + half, y + half) in
                    // the extended copy, so the window starts at (x, y).
                    let sample = extended.sample_unchecked(x + kx as u32, y + ky as u32);
                    let k = kernel.get(kx, ky);

                    sum_r += sample.r as f32 * k;
                    sum_g += sample.g as f32 * k;
                    sum_b += sample.b as f32 * k;
                }
            }

            let r = (sum_r * coeff).round().clamp(0.0, 255.0) as u8;
            let g = (sum_g * coeff).round().clamp(0.0, 255.0) as u8;
            let b = (sum_b * coeff).round().clamp(0.0, 255.0) as u8;

            out.set_sample_unchecked(x, y, Sample::opaque(r, g, b));
        }
    }

    Ok(out)
}

/// Build a copy of `src` with a `border`-pixel replicated edge on all
/// sides.
fn extend_replicate(src: &PixelBuffer, border: usize) -> FilterResult<PixelBuffer> {
    if border == 0 {
        return Ok(src.clone());
    }

    let w = src.width();
    let h = src.height();
    let border = border as u32;
    let mut extended = PixelBuffer::new(w + 2 * border, h + 2 * border)?;

    for y in 0..extended.height() {
        let src_y = y.saturating_sub(border).min(h - 1);
        for x in 0..extended.width() {
            let src_x = x.saturating_sub(border).min(w - 1);
            extended.set_sample_unchecked(x, y, src.sample_unchecked(src_x, src_y));
        }
    }

    Ok(extended)
}
