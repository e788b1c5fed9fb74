//! Display surface
//!
//! The render target the compositor writes into. A surface is a pixel
//! buffer plus the fixed background color it clears to; the image is
//! drawn over the cleared background each render, leaving background
//! wherever the image does not cover.

use crate::ViewResult;
use rasterlab_core::{PixelBuffer, Sample};

/// Render target for the viewport compositor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySurface {
    buffer: PixelBuffer,
    background: Sample,
}

impl DisplaySurface {
    /// Create a surface with an opaque white background.
    ///
    /// # Errors
    ///
    /// Returns an error for zero dimensions.
    pub fn new(width: u32, height: u32) -> ViewResult<Self> {
        Ok(Self {
            buffer: PixelBuffer::new_filled(width, height, Sample::WHITE)?,
            background: Sample::WHITE,
        })
    }

    /// Surface width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Surface height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// The rendered pixels.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Mutable access for the compositor's blit.
    pub(crate) fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Reset every pixel to the background color.
    pub fn clear(&mut self) {
        self.buffer.fill(self.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_background() {
        let surface = DisplaySurface::new(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(surface.buffer().sample_unchecked(x, y), Sample::WHITE);
            }
        }
    }

    #[test]
    fn test_clear_restores_background() {
        let mut surface = DisplaySurface::new(2, 2).unwrap();
        surface
            .buffer_mut()
            .set_sample_unchecked(0, 0, Sample::opaque(1, 2, 3));
        surface.clear();
        assert_eq!(surface.buffer().sample_unchecked(0, 0), Sample::WHITE);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(DisplaySurface::new(0, 5).is_err());
    }
}
