//! Conversions between `PixelBuffer` and the `image` crate
//!
//! The surrounding application decodes files and URLs itself; this is
//! the in-memory boundary through which decoded pixels enter and leave
//! the engine. Both directions are lossless byte copies.

use crate::buffer::PixelBuffer;
use crate::error::CoreResult;

impl PixelBuffer {
    /// Build a buffer from a decoded `image::RgbaImage`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::InvalidDimension`] for zero-sized images.
    pub fn from_image(img: &image::RgbaImage) -> CoreResult<Self> {
        Self::from_raw(img.width(), img.height(), img.as_raw().clone())
    }

    /// Copy the buffer out as an `image::RgbaImage`.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width(), self.height(), self.data().to_vec())
            .expect("buffer length invariant matches image dimensions")
    }
}
