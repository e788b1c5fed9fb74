//! rasterlab-transform - Geometric resampling
//!
//! Nearest-neighbor resampling to an explicit target size. This is the
//! resize path behind both the resize dialog and the compositor's
//! per-render resample of the active buffer.
//!
//! No interpolating scaler lives here; nearest-neighbor is the only
//! supported method.

mod error;
pub mod resample;

pub use error::{TransformError, TransformResult};
pub use resample::resize_nearest;
