//! Snapedit Core - Image editing library
//!
//! This crate provides the core of the Snapedit editor: loading and saving
//! images, the adjustment pipeline, preview/image coordinate mapping, the
//! interactive crop session and histogram computation.

pub mod adjustments;
pub mod config;
pub mod crop_session;
pub mod decode;
pub mod encode;
pub mod error;
pub mod histogram;
pub mod luminance;
pub mod session;
pub mod transform;
pub mod viewport;

pub use adjustments::recompute;
pub use config::EditorConfig;
pub use crop_session::{CropSession, CropState, PreviewPoint, PreviewRect};
pub use decode::{decode_image as load_image, DecodeError, FilterType, PixelBuffer};
pub use encode::{encode_image, save_image, EncodeError, ImageFormat};
pub use error::EditorError;
pub use histogram::compute_histogram;
pub use session::{parse_dimensions, EditingSession, RecomputeJob, RecomputeResult};
pub use transform::{apply_crop, CropRegion};
pub use viewport::{compute_geometry, render_preview, ViewportGeometry};

/// Current value of every editing control.
///
/// The default is the identity configuration: recomputing with it
/// reproduces the original image exactly.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AdjustmentParameters {
    /// Gaussian blur radius in pixels (0 to 10)
    pub blur_radius: f32,
    /// Brightness factor (0.1 to 3.0)
    pub brightness: f32,
    /// Contrast factor (0.1 to 3.0)
    pub contrast: f32,
    /// Red channel offset (-255 to 255)
    pub red_offset: i32,
    /// Green channel offset (-255 to 255)
    pub green_offset: i32,
    /// Blue channel offset (-255 to 255)
    pub blue_offset: i32,
    /// Colour temperature (-100 to 100)
    pub temperature: f64,
    /// Tint (-100 to 100)
    pub tint: f64,
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self {
            blur_radius: 0.0,
            brightness: 1.0,
            contrast: 1.0,
            red_offset: 0,
            green_offset: 0,
            blue_offset: 0,
            temperature: 0.0,
            tint: 0.0,
        }
    }
}

impl AdjustmentParameters {
    pub const BLUR_RANGE: (f32, f32) = (0.0, 10.0);
    pub const FACTOR_RANGE: (f32, f32) = (0.1, 3.0);
    pub const OFFSET_RANGE: (i32, i32) = (-255, 255);
    pub const SHIFT_RANGE: (f64, f64) = (-100.0, 100.0);

    /// Create parameters at the identity configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Copy with every field forced into its documented range.
    ///
    /// NaN values fall back to the field's default.
    pub fn clamped(&self) -> Self {
        let d = Self::default();
        let clamp = |v: f32, (lo, hi): (f32, f32), fallback: f32| {
            if v.is_nan() {
                fallback
            } else {
                v.clamp(lo, hi)
            }
        };
        let clamp_shift = |v: f64, fallback: f64| {
            if v.is_nan() {
                fallback
            } else {
                v.clamp(Self::SHIFT_RANGE.0, Self::SHIFT_RANGE.1)
            }
        };
        let (olo, ohi) = Self::OFFSET_RANGE;
        Self {
            blur_radius: clamp(self.blur_radius, Self::BLUR_RANGE, d.blur_radius),
            brightness: clamp(self.brightness, Self::FACTOR_RANGE, d.brightness),
            contrast: clamp(self.contrast, Self::FACTOR_RANGE, d.contrast),
            red_offset: self.red_offset.clamp(olo, ohi),
            green_offset: self.green_offset.clamp(olo, ohi),
            blue_offset: self.blue_offset.clamp(olo, ohi),
            temperature: clamp_shift(self.temperature, d.temperature),
            tint: clamp_shift(self.tint, d.tint),
        }
    }
}

/// A histogram series label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
    /// The single series of a one-channel (greyscale) buffer
    Gray,
}

impl Channel {
    /// Lowercase name, as used by plotting front ends
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Gray => "gray",
        }
    }
}

/// Per-channel frequency tables of 256 unit-width bins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    series: Vec<(Channel, [u32; 256])>,
}

impl Histogram {
    /// Create an empty histogram with one zeroed series per channel
    pub fn new(channels: &[Channel]) -> Self {
        Self {
            series: channels.iter().map(|&c| (c, [0; 256])).collect(),
        }
    }

    /// Empty RGB histogram
    pub fn rgb() -> Self {
        Self::new(&[Channel::Red, Channel::Green, Channel::Blue])
    }

    /// Empty single-series histogram
    pub fn gray() -> Self {
        Self::new(&[Channel::Gray])
    }

    /// Channels in series order
    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.series.iter().map(|(c, _)| *c)
    }

    /// Bins for a channel, if present
    pub fn get(&self, channel: Channel) -> Option<&[u32; 256]> {
        self.series
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, bins)| bins)
    }

    pub(crate) fn series_mut(&mut self, index: usize) -> &mut [u32; 256] {
        &mut self.series[index].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &[u32; 256])> {
        self.series.iter().map(|(c, bins)| (*c, bins))
    }

    /// Find the maximum value across all channels for normalization
    pub fn max_value(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|(_, bins)| bins.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Number of samples counted in each series (equal across series)
    pub fn total(&self) -> u64 {
        self.series
            .first()
            .map(|(_, bins)| bins.iter().map(|&n| n as u64).sum())
            .unwrap_or(0)
    }

    /// Check for highlight clipping (values at 255)
    pub fn has_highlight_clipping(&self) -> bool {
        self.series.iter().any(|(_, bins)| bins[255] > 0)
    }

    /// Check for shadow clipping (values at 0)
    pub fn has_shadow_clipping(&self) -> bool {
        self.series.iter().any(|(_, bins)| bins[0] > 0)
    }
}
