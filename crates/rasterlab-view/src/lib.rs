//! rasterlab-view - Viewport compositing and editor state
//!
//! This crate owns everything between the pure buffer transforms and
//! the host application's window:
//!
//! - [`DisplaySurface`] - the raster the compositor renders into
//! - [`render`] - the deterministic clear/scale/center/resample/blit
//!   pipeline
//! - [`EditorState`] - the explicit state value (committed + preview
//!   buffers, view, tools, drag) updated only through [`InputEvent`]s
//! - [`pick`] - bounds-checked pixel picking from the rendered surface
//!
//! The host translates windowing events into `InputEvent`s on a single
//! control thread and calls `render` whenever the active buffer,
//! logical size, scale or pan changed. Rendering the same state twice
//! produces a byte-identical surface.

mod error;
pub mod picker;
pub mod state;
pub mod surface;
pub mod viewport;

pub use error::{ViewError, ViewResult};
pub use picker::{PickedPixel, pick};
pub use state::{EditorState, InputEvent, Key};
pub use surface::DisplaySurface;
pub use viewport::{SCALE_MAX, SCALE_MIN, ViewState, fit_scale, render};
