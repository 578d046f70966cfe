//! Interactive crop selection.
//!
//! The drag gesture is tracked entirely in preview coordinates; only the
//! commit maps the selection into image space.
//!
//! ```text
//! Idle --arm--> Armed --down--> Dragging --up--> Selected --commit--> Idle
//!                 ^                                  |
//!                 +------- zero-area commit ---------+
//! ```
//!
//! `cancel` returns to `Idle` from any state. A pointer-down while
//! `Selected` starts a new drag.

use crate::error::EditorError;
use crate::transform::CropRegion;
use crate::viewport::ViewportGeometry;

/// A point in preview (canvas) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPoint {
    pub x: f64,
    pub y: f64,
}

impl PreviewPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Overlay rectangle in preview coordinates, from the drag start to the
/// pointer. Not normalized: `start` may be right of or below `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewRect {
    pub start: PreviewPoint,
    pub end: PreviewPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CropState {
    /// Not cropping
    #[default]
    Idle,
    /// Waiting for the first pointer-down
    Armed,
    /// Pointer held down; `end` follows the pointer
    Dragging { start: PreviewPoint, end: PreviewPoint },
    /// Pointer released; the selection awaits commit or cancel
    Selected { start: PreviewPoint, end: PreviewPoint },
}

/// Crop gesture state machine.
#[derive(Debug, Clone, Default)]
pub struct CropSession {
    state: CropState,
}

impl CropSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CropState {
        self.state
    }

    /// True in every state except `Idle`.
    pub fn is_active(&self) -> bool {
        self.state != CropState::Idle
    }

    /// Enter `Armed`. Requires a loaded image.
    ///
    /// Re-arming an active session discards its selection.
    pub fn arm(&mut self, has_image: bool) -> Result<(), EditorError> {
        if !has_image {
            log::warn!("crop requested with no image loaded");
            return Err(EditorError::NoImage);
        }
        self.state = CropState::Armed;
        Ok(())
    }

    /// Start a drag. Ignored unless armed or holding a selection.
    ///
    /// Returns whether the event was consumed.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        match self.state {
            CropState::Armed | CropState::Selected { .. } => {
                let p = PreviewPoint::new(x, y);
                self.state = CropState::Dragging { start: p, end: p };
                true
            }
            CropState::Idle | CropState::Dragging { .. } => false,
        }
    }

    /// Track the pointer while dragging, returning the overlay to draw.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<PreviewRect> {
        if let CropState::Dragging { start, .. } = self.state {
            let end = PreviewPoint::new(x, y);
            self.state = CropState::Dragging { start, end };
            Some(PreviewRect { start, end })
        } else {
            None
        }
    }

    /// Finish the drag at `(x, y)`.
    ///
    /// Returns whether the event was consumed.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> bool {
        if let CropState::Dragging { start, .. } = self.state {
            self.state = CropState::Selected {
                start,
                end: PreviewPoint::new(x, y),
            };
            true
        } else {
            false
        }
    }

    /// Rectangle to draw over the preview, if any.
    pub fn overlay(&self) -> Option<PreviewRect> {
        match self.state {
            CropState::Dragging { start, end } | CropState::Selected { start, end } => {
                Some(PreviewRect { start, end })
            }
            CropState::Idle | CropState::Armed => None,
        }
    }

    /// Convert the selection into an image-space region and leave the session.
    ///
    /// Without a finished selection this is [`EditorError::NoSelection`] and
    /// nothing changes. A selection covering no image pixels is
    /// [`EditorError::InvalidSelection`] and drops back to `Armed` so the
    /// user can draw again.
    pub fn commit(&mut self, geometry: &ViewportGeometry) -> Result<CropRegion, EditorError> {
        let CropState::Selected { start, end } = self.state else {
            log::warn!("crop commit without a selection");
            return Err(EditorError::NoSelection);
        };

        let region = CropRegion::from_corners(
            geometry.to_image_space(start.x, start.y),
            geometry.to_image_space(end.x, end.y),
            geometry.image_width,
            geometry.image_height,
        );

        if region.is_empty() {
            log::warn!("rejected zero-area crop selection {:?}", region);
            self.state = CropState::Armed;
            return Err(EditorError::InvalidSelection);
        }

        self.state = CropState::Idle;
        Ok(region)
    }

    /// Abandon cropping and clear any selection.
    pub fn cancel(&mut self) {
        self.state = CropState::Idle;
    }
}
