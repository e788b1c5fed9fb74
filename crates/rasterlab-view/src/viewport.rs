//! Viewport compositing
//!
//! Maps the logical image onto the display surface. Every render runs
//! the same fixed pipeline:
//!
//! 1. clear the surface to its background
//! 2. take the geometric scale factor `scale / 100`
//! 3. compute the centering offset inside the scale-adjusted surface
//! 4. resample the active buffer to the current logical dimensions
//! 5. blit at `(center + pan)` under the scale factor
//!
//! The resample in step 4 serves editing-resolution changes (the
//! user-requested logical width/height); display zoom is purely the
//! geometric factor in steps 2-5 and never touches pixel data.
//! Rendering the same state twice yields a byte-identical surface.

use crate::ViewResult;
use crate::state::EditorState;
use crate::surface::DisplaySurface;
use rasterlab_core::PixelBuffer;
use rasterlab_transform::resize_nearest;

/// Minimum zoom percentage.
pub const SCALE_MIN: u32 = 12;
/// Maximum zoom percentage.
pub const SCALE_MAX: u32 = 300;

/// Border kept around the image when computing the initial fit scale.
const FIT_BORDER: u32 = 50;

/// Zoom and pan applied when compositing the image onto the surface.
///
/// Scale is a percentage clamped to `[SCALE_MIN, SCALE_MAX]`; pan is an
/// offset in logical pixels and accumulates fractions from scaled drag
/// deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    scale: u32,
    pan_x: f32,
    pan_y: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 100,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl ViewState {
    /// 100% zoom, no pan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current zoom percentage.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Set the zoom percentage, clamping to `[SCALE_MIN, SCALE_MAX]`.
    pub fn set_scale(&mut self, percent: u32) {
        self.scale = percent.clamp(SCALE_MIN, SCALE_MAX);
    }

    /// The geometric scale factor, `scale / 100`.
    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.scale as f32 / 100.0
    }

    /// Current pan offset in logical pixels.
    #[inline]
    pub fn pan(&self) -> (f32, f32) {
        (self.pan_x, self.pan_y)
    }

    /// Add to the pan offset.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Replace the pan offset.
    pub fn set_pan(&mut self, x: f32, y: f32) {
        self.pan_x = x;
        self.pan_y = y;
    }
}

/// The zoom percentage that fits an image inside a surface with a
/// `FIT_BORDER`-pixel margin on every side, clamped to the scale range.
pub fn fit_scale(image_width: u32, image_height: u32, surface_width: u32, surface_height: u32) -> u32 {
    let usable_w = surface_width.saturating_sub(2 * FIT_BORDER);
    let usable_h = surface_height.saturating_sub(2 * FIT_BORDER);
    if usable_w == 0 || usable_h == 0 || image_width == 0 || image_height == 0 {
        return SCALE_MIN;
    }

    let width_k = image_width as f32 / usable_w as f32;
    let height_k = image_height as f32 / usable_h as f32;
    let max_k = width_k.max(height_k);

    let percent = (100.0 / max_k).ceil() as u32;
    percent.clamp(SCALE_MIN, SCALE_MAX)
}

/// Render the editor's active buffer onto the surface.
///
/// The active buffer is the preview when one is set, else the committed
/// image; it is resampled to the logical dimensions before placement.
pub fn render(state: &EditorState, surface: &mut DisplaySurface) -> ViewResult<()> {
    surface.clear();

    let k = state.view().scale_factor();
    let (logical_w, logical_h) = state.logical_size();
    let resampled = resize_nearest(state.active_buffer(), logical_w, logical_h)?;

    let center_x = (surface.width() as f32 / k - logical_w as f32) / 2.0;
    let center_y = (surface.height() as f32 / k - logical_h as f32) / 2.0;
    let (pan_x, pan_y) = state.view().pan();

    blit_scaled(&resampled, surface.buffer_mut(), k, center_x + pan_x, center_y + pan_y);
    Ok(())
}

/// Draw `src` into `dst` with its top-left corner at `(origin_x,
/// origin_y)` in pre-scale coordinates, under the geometric factor `k`.
///
/// Each destination pixel samples the source cell under its center
/// (nearest, no blending); pixels outside the image keep whatever `dst`
/// already holds.
fn blit_scaled(src: &PixelBuffer, dst: &mut PixelBuffer, k: f32, origin_x: f32, origin_y: f32) {
    let src_w = src.width() as f32;
    let src_h = src.height() as f32;

    for dy in 0..dst.height() {
        let v = ((dy as f32 + 0.5) / k - origin_y).floor();
        if v < 0.0 || v >= src_h {
            continue;
        }
        for dx in 0..dst.width() {
            let u = ((dx as f32 + 0.5) / k - origin_x).floor();
            if u < 0.0 || u >= src_w {
                continue;
            }
            dst.set_sample_unchecked(dx, dy, src.sample_unchecked(u as u32, v as u32));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::Sample;

    #[test]
    fn test_scale_clamping() {
        let mut view = ViewState::new();
        view.set_scale(5);
        assert_eq!(view.scale(), SCALE_MIN);
        view.set_scale(1000);
        assert_eq!(view.scale(), SCALE_MAX);
        view.set_scale(150);
        assert_eq!(view.scale(), 150);
        assert!((view.scale_factor() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_pan_accumulates() {
        let mut view = ViewState::new();
        view.pan_by(3.5, -2.0);
        view.pan_by(0.5, 1.0);
        assert_eq!(view.pan(), (4.0, -1.0));
    }

    #[test]
    fn test_fit_scale_small_image_caps_at_max() {
        // 10x10 image in a large surface would fit at >300%.
        assert_eq!(fit_scale(10, 10, 1000, 1000), SCALE_MAX);
    }

    #[test]
    fn test_fit_scale_large_image() {
        // 1800x900 image in a 1000x1000 surface: usable 900x900,
        // max_k = 2.0, fit at 50%.
        assert_eq!(fit_scale(1800, 900, 1000, 1000), 50);
    }

    #[test]
    fn test_fit_scale_degenerate_surface() {
        assert_eq!(fit_scale(100, 100, 60, 60), SCALE_MIN);
    }

    #[test]
    fn test_blit_centers_image_at_unit_scale() {
        let src = PixelBuffer::new_filled(2, 2, Sample::opaque(10, 20, 30)).unwrap();
        let mut dst = PixelBuffer::new_filled(4, 4, Sample::WHITE).unwrap();
        // Centered: origin (1, 1).
        blit_scaled(&src, &mut dst, 1.0, 1.0, 1.0);

        assert_eq!(dst.sample_unchecked(0, 0), Sample::WHITE);
        assert_eq!(dst.sample_unchecked(1, 1), Sample::opaque(10, 20, 30));
        assert_eq!(dst.sample_unchecked(2, 2), Sample::opaque(10, 20, 30));
        assert_eq!(dst.sample_unchecked(3, 3), Sample::WHITE);
    }

    #[test]
    fn test_blit_doubles_pixels_at_200_percent() {
        let mut src = PixelBuffer::new(2, 1).unwrap();
        src.set_sample_unchecked(0, 0, Sample::opaque(1, 0, 0));
        src.set_sample_unchecked(1, 0, Sample::opaque(2, 0, 0));

        let mut dst = PixelBuffer::new_filled(4, 2, Sample::WHITE).unwrap();
        blit_scaled(&src, &mut dst, 2.0, 0.0, 0.0);

        // Each source pixel covers a 2x2 block.
        for dy in 0..2 {
            assert_eq!(dst.sample_unchecked(0, dy).r, 1);
            assert_eq!(dst.sample_unchecked(1, dy).r, 1);
            assert_eq!(dst.sample_unchecked(2, dy).r, 2);
            assert_eq!(dst.sample_unchecked(3, dy).r, 2);
        }
    }
}
