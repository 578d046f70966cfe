//! Runtime configuration for an editing session.

use serde::{Deserialize, Serialize};

use crate::adjustments::DEFAULT_PASSES;
use crate::decode::FilterType;
use crate::encode::DEFAULT_JPEG_QUALITY;

/// Editor settings. All fields have defaults, so partial objects deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Resampling filter for the on-screen preview
    pub preview_filter: FilterType,
    /// Resampling filter for explicit resizes
    pub resize_filter: FilterType,
    /// JPEG quality (1-100) when saving to a `.jpg`/`.jpeg` path
    pub jpeg_quality: u8,
    /// Box passes used to approximate the Gaussian blur
    pub blur_passes: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            preview_filter: FilterType::Lanczos3,
            resize_filter: FilterType::Lanczos3,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            blur_passes: DEFAULT_PASSES,
        }
    }
}

impl EditorConfig {
    /// Copy with out-of-range values pulled back into range.
    pub fn normalized(self) -> Self {
        Self {
            jpeg_quality: self.jpeg_quality.clamp(1, 100),
            blur_passes: self.blur_passes.max(1),
            ..self
        }
    }
}
