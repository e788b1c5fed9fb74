//! Rasterlab Core - Basic data structures for raster editing
//!
//! This crate provides the fundamental data structures used throughout
//! the Rasterlab image editing engine:
//!
//! - [`PixelBuffer`] - In-memory RGBA raster, the unit every engine
//!   consumes and produces
//! - [`Sample`] - A single RGBA pixel value
//! - [`ChannelHistograms`] - Per-channel 256-bin value distributions
//!
//! All transforms in the workspace take a buffer by reference and return
//! a newly allocated one; buffers are never mutated through a shared
//! reference, so each stage uniquely owns its output.

pub mod buffer;
pub mod error;
pub mod histogram;
pub mod sample;

#[cfg(feature = "image")]
mod interop;

pub use buffer::PixelBuffer;
pub use error::{CoreError, CoreResult};
pub use histogram::{ChannelHistograms, NormalizedHistograms};
pub use sample::Sample;
