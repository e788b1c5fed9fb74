//! Editor state
//!
//! One explicit value holds everything the compositor and tools read:
//! the committed image, the optional preview, the logical target
//! dimensions, the view (scale + pan), tool activation and in-flight
//! drag state. It changes only through [`InputEvent`]s and the explicit
//! buffer-lifecycle methods, processed on a single control thread.
//!
//! The committed buffer is the single source of truth: a preview never
//! becomes committed except through [`EditorState::commit_preview`],
//! and [`EditorState::clear_preview`] restores the committed image as
//! the active buffer before the next render.

use crate::error::{ViewError, ViewResult};
use crate::picker::PickedPixel;
use crate::viewport::ViewState;
use rasterlab_core::PixelBuffer;

/// Arrow-key pan step in logical pixels.
const PAN_STEP: f32 = 10.0;
/// Step multiplier while the boost key is held.
const PAN_BOOST: f32 = 5.0;

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Space: multiplies arrow-key pan steps while held.
    Boost,
    /// Shift/Ctrl/Alt/Meta: routes picks to the secondary color slot.
    SecondaryModifier,
}

/// Input events translated from the host's pointer and keyboard.
///
/// Pointer coordinates are display-surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    KeyDown(Key),
    KeyUp(Key),
    /// Zoom control moved; the value is a percentage.
    ScaleChanged(u32),
}

/// The explicit editor state value.
#[derive(Debug, Clone)]
pub struct EditorState {
    committed: PixelBuffer,
    preview: Option<PixelBuffer>,
    logical_width: u32,
    logical_height: u32,
    view: ViewState,
    /// Last pointer position while a drag is in flight.
    drag_origin: Option<(f32, f32)>,
    hand_active: bool,
    pipette_active: bool,
    boost_held: bool,
    secondary_held: bool,
    last_pick: Option<PickedPixel>,
    primary_color: Option<PickedPixel>,
    secondary_color: Option<PickedPixel>,
}

impl EditorState {
    /// Create editor state around a committed image. Logical dimensions
    /// start at the image's own size.
    pub fn new(committed: PixelBuffer) -> Self {
        let (logical_width, logical_height) = committed.dimensions();
        Self {
            committed,
            preview: None,
            logical_width,
            logical_height,
            view: ViewState::new(),
            drag_origin: None,
            hand_active: false,
            pipette_active: false,
            boost_held: false,
            secondary_held: false,
            last_pick: None,
            primary_color: None,
            secondary_color: None,
        }
    }

    // --- buffer lifecycle ---

    /// The buffer the compositor should sample: the preview when one is
    /// set, else the committed image.
    pub fn active_buffer(&self) -> &PixelBuffer {
        self.preview.as_ref().unwrap_or(&self.committed)
    }

    /// The committed image.
    pub fn committed(&self) -> &PixelBuffer {
        &self.committed
    }

    /// Whether a preview is currently active.
    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// Install a provisional transform result for live preview.
    pub fn set_preview(&mut self, buffer: PixelBuffer) {
        self.preview = Some(buffer);
    }

    /// Discard the preview; the committed image becomes active again.
    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Promote the preview to committed. This is the only path by which
    /// a preview becomes the authoritative image.
    pub fn commit_preview(&mut self) {
        if let Some(preview) = self.preview.take() {
            self.committed = preview;
        }
    }

    /// Replace the committed image directly (an accepted transform that
    /// was computed without a preview pass).
    pub fn commit(&mut self, buffer: PixelBuffer) {
        self.committed = buffer;
        self.preview = None;
    }

    // --- logical dimensions ---

    /// Current logical target dimensions.
    pub fn logical_size(&self) -> (u32, u32) {
        (self.logical_width, self.logical_height)
    }

    /// Set the logical target dimensions from the resize dialog.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidLogicalSize`] for zero dimensions.
    pub fn set_logical_size(&mut self, width: u32, height: u32) -> ViewResult<()> {
        if width == 0 || height == 0 {
            return Err(ViewError::InvalidLogicalSize { width, height });
        }
        self.logical_width = width;
        self.logical_height = height;
        Ok(())
    }

    // --- view ---

    /// The current view (scale + pan).
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mutable view access for direct host adjustments.
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    // --- tools ---

    /// Toggle the pan (hand) tool.
    pub fn toggle_hand(&mut self) {
        self.hand_active = !self.hand_active;
    }

    /// Toggle the color-picker (pipette) tool.
    pub fn toggle_pipette(&mut self) {
        self.pipette_active = !self.pipette_active;
    }

    pub fn hand_active(&self) -> bool {
        self.hand_active
    }

    pub fn pipette_active(&self) -> bool {
        self.pipette_active
    }

    // --- picked colors ---

    /// Record a pick result. The last pick is always kept; with the
    /// pipette active it additionally lands in the primary slot, or the
    /// secondary slot while the secondary modifier is held.
    pub fn record_pick(&mut self, picked: PickedPixel) {
        self.last_pick = Some(picked);
        if self.pipette_active {
            if self.secondary_held {
                self.secondary_color = Some(picked);
            } else {
                self.primary_color = Some(picked);
            }
        }
    }

    pub fn last_pick(&self) -> Option<&PickedPixel> {
        self.last_pick.as_ref()
    }

    pub fn primary_color(&self) -> Option<&PickedPixel> {
        self.primary_color.as_ref()
    }

    pub fn secondary_color(&self) -> Option<&PickedPixel> {
        self.secondary_color.as_ref()
    }

    // --- event handling ---

    /// Apply one input event.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.drag_origin = Some((x, y));
            }
            InputEvent::PointerMove { x, y } => {
                if let Some((last_x, last_y)) = self.drag_origin {
                    if self.hand_active {
                        // Pointer deltas are display pixels; divide by the
                        // scale factor to pan in logical units.
                        let k = self.view.scale_factor();
                        self.view.pan_by((x - last_x) / k, (y - last_y) / k);
                    }
                    self.drag_origin = Some((x, y));
                }
            }
            InputEvent::PointerUp => {
                self.drag_origin = None;
            }
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
            InputEvent::ScaleChanged(percent) => self.view.set_scale(percent),
        }
    }

    fn key_down(&mut self, key: Key) {
        // Arrow nudges are already logical units; no scale division.
        let step = if self.boost_held {
            PAN_STEP * PAN_BOOST
        } else {
            PAN_STEP
        };
        match key {
            Key::Boost => self.boost_held = true,
            Key::SecondaryModifier => self.secondary_held = true,
            Key::ArrowLeft if self.hand_active => self.view.pan_by(-step, 0.0),
            Key::ArrowRight if self.hand_active => self.view.pan_by(step, 0.0),
            Key::ArrowUp if self.hand_active => self.view.pan_by(0.0, -step),
            Key::ArrowDown if self.hand_active => self.view.pan_by(0.0, step),
            _ => {}
        }
    }

    fn key_up(&mut self, key: Key) {
        match key {
            Key::Boost => self.boost_held = false,
            Key::SecondaryModifier => self.secondary_held = false,
            _ => {}
        }
    }
}
