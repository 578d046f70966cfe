//! Session-level errors.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors returned by [`EditingSession`](crate::EditingSession) operations.
///
/// Every variant leaves the session state unchanged.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The operation needs an open image
    #[error("No image loaded")]
    NoImage,

    /// Width/height input could not be used for a resize
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Crop commit requested before a selection was made
    #[error("No crop selection")]
    NoSelection,

    /// The selection maps to a zero-area region of the image
    #[error("Invalid crop selection: the selected area is empty")]
    InvalidSelection,

    /// The canvas has not been laid out yet; retry after the next resize event
    #[error("Canvas geometry not ready")]
    GeometryNotReady,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl EditorError {
    /// Whether the error should be reported to the user.
    ///
    /// `GeometryNotReady` is internal: the host retries once layout is known.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, EditorError::GeometryNotReady)
    }
}
