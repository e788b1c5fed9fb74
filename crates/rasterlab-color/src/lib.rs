//! rasterlab-color - Color space conversion and contrast analysis
//!
//! This crate provides the per-sample analysis operations behind the
//! color picker:
//!
//! - RGB -> XYZ -> Lab conversion (sRGB linearization, D65 white point)
//! - WCAG relative luminance and contrast ratio
//!
//! Every operation is a pure, total function over 8-bit samples; there
//! are no failure modes and no error type in this crate.

pub mod colorspace;
pub mod contrast;

pub use colorspace::{Lab, Xyz, rgb_to_lab, rgb_to_xyz, xyz_to_lab};
pub use contrast::{contrast_ratio, is_adequate_contrast, relative_luminance};
