//! Convolution kernels
//!
//! A kernel is a square, odd-sized matrix of weights plus the
//! normalization coefficient applied to each accumulated channel sum.
//! The blur presets carry fixed coefficients; every other kernel
//! (presets and user-edited alike) normalizes by the reciprocal of its
//! weight sum, falling back to 1 for zero-sum kernels so edge-detection
//! style matrices stay usable.

use crate::{FilterError, FilterResult};

/// A square 2D convolution kernel with its normalization coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length; always odd
    size: usize,
    /// Weights in row-major order, `size * size` entries
    data: Vec<f32>,
    /// Multiplier applied to each accumulated channel sum
    coefficient: f32,
}

impl Kernel {
    /// Create a kernel from a slice of weights.
    ///
    /// The coefficient is `1 / sum(weights)` when the sum is non-zero,
    /// else 1. This is the rule for user-edited kernels.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is even or zero,
    /// or if `data.len() != size * size`.
    pub fn from_slice(size: usize, data: &[f32]) -> FilterResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel size must be odd, got {size}"
            )));
        }
        if data.len() != size * size {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for a {size}x{size} kernel, got {}",
                size * size,
                data.len()
            )));
        }

        let sum: f32 = data.iter().sum();
        let coefficient = if sum != 0.0 { 1.0 / sum } else { 1.0 };

        Ok(Self {
            size,
            data: data.to_vec(),
            coefficient,
        })
    }

    /// The identity preset: output equals input (alpha aside).
    pub fn identity() -> Self {
        Self {
            size: 3,
            data: vec![
                0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0,
            ],
            coefficient: 1.0,
        }
    }

    /// The sharpening preset.
    pub fn sharpen() -> Self {
        Self {
            size: 3,
            data: vec![
                0.0, -1.0, 0.0, //
                -1.0, 5.0, -1.0, //
                0.0, -1.0, 0.0,
            ],
            coefficient: 1.0,
        }
    }

    /// The 3x3 Gaussian blur preset, with its fixed 1/16 coefficient.
    pub fn gaussian() -> Self {
        Self {
            size: 3,
            data: vec![
                1.0, 2.0, 1.0, //
                2.0, 4.0, 2.0, //
                1.0, 2.0, 1.0,
            ],
            coefficient: 1.0 / 16.0,
        }
    }

    /// The 3x3 box (rectangular) blur preset, with its fixed 1/9
    /// coefficient.
    pub fn box_blur() -> Self {
        Self {
            size: 3,
            data: vec![1.0; 9],
            coefficient: 1.0 / 9.0,
        }
    }

    /// Side length of the kernel.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Half-width of the kernel, the replicate-padding border it needs.
    #[inline]
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// The normalization coefficient.
    #[inline]
    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }

    /// Weight at kernel position (kx, ky).
    ///
    /// # Panics
    ///
    /// Panics if `kx >= size` or `ky >= size`.
    #[inline]
    pub fn get(&self, kx: usize, ky: usize) -> f32 {
        self.data[ky * self.size + kx]
    }

    /// All weights in row-major order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}
