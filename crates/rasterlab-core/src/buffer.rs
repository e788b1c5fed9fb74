//! PixelBuffer - the main raster container
//!
//! A `PixelBuffer` is a rectangular grid of RGBA samples stored row-major
//! as flat bytes, stride = `width * 4`.
//!
//! # Invariants
//!
//! - `width > 0` and `height > 0`
//! - `data.len() == width * height * 4`
//!
//! # Ownership model
//!
//! Every transform in the workspace takes its input by shared reference
//! and returns a newly allocated buffer. Input and output of a single
//! call never alias, and a buffer is uniquely owned by whichever stage
//! last produced it.

use crate::error::{CoreError, CoreResult};
use crate::sample::Sample;

/// Rectangular RGBA raster in memory.
///
/// # Examples
///
/// ```
/// use rasterlab_core::{PixelBuffer, Sample};
///
/// let mut buf = PixelBuffer::new(640, 480).unwrap();
/// buf.set_sample(10, 20, Sample::opaque(255, 0, 0)).unwrap();
/// assert_eq!(buf.sample(10, 20).unwrap().r, 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer with all channels zeroed (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize * 4;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Create a new buffer with every pixel set to `sample`.
    pub fn new_filled(width: u32, height: u32, sample: Sample) -> CoreResult<Self> {
        let mut buffer = Self::new(width, height)?;
        buffer.fill(sample);
        Ok(buffer)
    }

    /// Build a buffer from raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimension`] for zero dimensions and
    /// [`CoreError::DataLengthMismatch`] if `data.len() != width*height*4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(CoreError::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The raw RGBA bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel (x, y).
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Whether (x, y) lies inside the buffer.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Get the sample at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn sample(&self, x: u32, y: u32) -> Option<Sample> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.sample_unchecked(x, y))
    }

    /// Get the sample at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn sample_unchecked(&self, x: u32, y: u32) -> Sample {
        let i = self.offset(x, y);
        Sample::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    /// Set the sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_sample(&mut self, x: u32, y: u32, sample: Sample) -> CoreResult<()> {
        if !self.contains(x, y) {
            return Err(CoreError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_sample_unchecked(x, y, sample);
        Ok(())
    }

    /// Set the sample at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_sample_unchecked(&mut self, x: u32, y: u32, sample: Sample) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&sample.to_array());
    }

    /// Set every pixel to `sample`.
    pub fn fill(&mut self, sample: Sample) {
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&sample.to_array());
        }
    }

    /// The bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize * 4;
        let end = start + self.width as usize * 4;
        &self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let buf = PixelBuffer::new(3, 2).unwrap();
        assert_eq!(buf.dimensions(), (3, 2));
        assert_eq!(buf.data().len(), 3 * 2 * 4);
        assert!(buf.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(PixelBuffer::new(0, 10).is_err());
        assert!(PixelBuffer::new(10, 0).is_err());
    }

    #[test]
    fn test_from_raw_length_mismatch() {
        let err = PixelBuffer::from_raw(2, 2, vec![0u8; 15]).unwrap_err();
        assert!(matches!(err, CoreError::DataLengthMismatch { expected: 16, actual: 15 }));
    }

    #[test]
    fn test_sample_roundtrip() {
        let mut buf = PixelBuffer::new(4, 4).unwrap();
        let sample = Sample::new(1, 2, 3, 4);
        buf.set_sample(3, 2, sample).unwrap();
        assert_eq!(buf.sample(3, 2), Some(sample));
        assert_eq!(buf.sample(4, 2), None);
    }

    #[test]
    fn test_set_sample_out_of_bounds() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        let err = buf.set_sample(2, 0, Sample::BLACK).unwrap_err();
        assert!(matches!(err, CoreError::OutOfBounds { x: 2, y: 0, .. }));
    }

    #[test]
    fn test_fill_and_row() {
        let mut buf = PixelBuffer::new(2, 3).unwrap();
        buf.fill(Sample::opaque(9, 8, 7));
        assert_eq!(buf.row(1), &[9, 8, 7, 255, 9, 8, 7, 255]);
    }
}
