//! Pixel picking
//!
//! Reads a single rendered sample from the display surface, i.e. the
//! post-scale, post-pan color that is visually shown at the given
//! coordinate, not a logical-buffer value.

use crate::error::{ViewError, ViewResult};
use crate::surface::DisplaySurface;
use rasterlab_core::Sample;

/// One picked pixel: the rendered sample and where on the surface it
/// was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedPixel {
    pub sample: Sample,
    pub x: u32,
    pub y: u32,
}

/// Read the rendered sample at display coordinates (x, y).
///
/// # Errors
///
/// Returns [`ViewError::PickOutOfBounds`] for coordinates outside the
/// surface; pointer handling at the boundary is expected to keep picks
/// in bounds, so this indicates a caller bug.
pub fn pick(surface: &DisplaySurface, x: u32, y: u32) -> ViewResult<PickedPixel> {
    match surface.buffer().sample(x, y) {
        Some(sample) => Ok(PickedPixel { sample, x, y }),
        None => Err(ViewError::PickOutOfBounds {
            x,
            y,
            width: surface.width(),
            height: surface.height(),
        }),
    }
}
