//! Brightness and contrast enhancement.
//!
//! Both are expressed as a linear blend between a degenerate image and the
//! input: `out = degenerate + factor * (in - degenerate)`. For brightness the
//! degenerate image is black, for contrast it is a flat grey at the input's
//! mean luminance. A factor of 1.0 reproduces the input exactly.

use crate::luminance::mean_luma;

/// Scale every sample by `factor`.
///
/// Values below 1.0 darken, above 1.0 brighten.
pub fn apply_brightness(pixels: &mut [u8], factor: f32) {
    if factor == 1.0 {
        return;
    }
    for sample in pixels.iter_mut() {
        *sample = blend(0.0, *sample, factor);
    }
}

/// Stretch (or compress) every sample away from the image's mean grey level.
pub fn apply_contrast(pixels: &mut [u8], factor: f32) {
    if factor == 1.0 {
        return;
    }
    let pivot = mean_luma(pixels) as f32;
    log::debug!("contrast pivot {} factor {}", pivot, factor);

    // 256 possible inputs, so precompute.
    let mut lut = [0u8; 256];
    for (value, entry) in lut.iter_mut().enumerate() {
        *entry = blend(pivot, value as u8, factor);
    }
    for sample in pixels.iter_mut() {
        *sample = lut[*sample as usize];
    }
}

/// Linear blend with truncation toward zero and saturation at both ends.
#[inline]
fn blend(degenerate: f32, sample: u8, factor: f32) -> u8 {
    let value = degenerate + factor * (sample as f32 - degenerate);
    if value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        value as u8
    }
}
