//! WCAG contrast analysis
//!
//! Relative luminance per ITU-R BT.709 weights over linearized sRGB
//! channels, and the WCAG contrast ratio between two colors. The 4.5
//! threshold is the WCAG AA requirement for body text.

use rasterlab_core::Sample;

use crate::colorspace::srgb_to_linear;

/// WCAG AA contrast threshold for body text.
const AA_CONTRAST_THRESHOLD: f64 = 4.5;

/// Relative luminance of a sample in [0.0, 1.0].
///
/// Linearizes each channel and combines with BT.709 weights. Alpha is
/// ignored.
pub fn relative_luminance(sample: Sample) -> f64 {
    let r = srgb_to_linear(sample.r as f64 / 255.0);
    let g = srgb_to_linear(sample.g as f64 / 255.0);
    let b = srgb_to_linear(sample.b as f64 / 255.0);

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio between two colors, in [1.0, 21.0].
///
/// Symmetric in its arguments: the brighter luminance always ends up in
/// the numerator.
pub fn contrast_ratio(first: Sample, second: Sample) -> f64 {
    let lum1 = relative_luminance(first);
    let lum2 = relative_luminance(second);

    (lum1.max(lum2) + 0.05) / (lum1.min(lum2) + 0.05)
}

/// Whether two colors meet the WCAG AA body-text contrast requirement.
pub fn is_adequate_contrast(first: Sample, second: Sample) -> bool {
    contrast_ratio(first, second) > AA_CONTRAST_THRESHOLD
}
