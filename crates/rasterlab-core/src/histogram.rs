//! Histogram generation for pixel buffers
//!
//! Computes per-channel value distributions used by the tone-curve
//! dialog for visualization. Counting is a single O(width*height) pass;
//! normalization rescales all three channels against one shared peak so
//! their relative heights stay comparable.

use crate::buffer::PixelBuffer;

/// Per-channel 256-bin histograms of an RGBA buffer.
///
/// Alpha is not counted; only R, G and B distributions are of interest
/// to curve visualization.
#[derive(Debug, Clone)]
pub struct ChannelHistograms {
    /// Red channel counts, one bin per 8-bit value
    pub red: [u32; 256],
    /// Green channel counts
    pub green: [u32; 256],
    /// Blue channel counts
    pub blue: [u32; 256],
}

/// Histograms rescaled to a common peak of 255.0.
#[derive(Debug, Clone)]
pub struct NormalizedHistograms {
    pub red: [f32; 256],
    pub green: [f32; 256],
    pub blue: [f32; 256],
}

impl ChannelHistograms {
    /// Rescale all three histograms so the single tallest bin across the
    /// channels maps to 255.0.
    pub fn normalized(&self) -> NormalizedHistograms {
        let peak = self
            .red
            .iter()
            .chain(self.green.iter())
            .chain(self.blue.iter())
            .copied()
            .max()
            .unwrap_or(0);

        let mut out = NormalizedHistograms {
            red: [0.0; 256],
            green: [0.0; 256],
            blue: [0.0; 256],
        };
        if peak == 0 {
            return out;
        }

        let peak = peak as f32;
        for i in 0..256 {
            out.red[i] = self.red[i] as f32 / peak * 255.0;
            out.green[i] = self.green[i] as f32 / peak * 255.0;
            out.blue[i] = self.blue[i] as f32 / peak * 255.0;
        }
        out
    }
}

impl PixelBuffer {
    /// Count the occurrences of each 8-bit value per color channel.
    pub fn channel_histograms(&self) -> ChannelHistograms {
        let mut hist = ChannelHistograms {
            red: [0; 256],
            green: [0; 256],
            blue: [0; 256],
        };

        for pixel in self.data().chunks_exact(4) {
            hist.red[pixel[0] as usize] += 1;
            hist.green[pixel[1] as usize] += 1;
            hist.blue[pixel[2] as usize] += 1;
        }

        hist
    }
}
