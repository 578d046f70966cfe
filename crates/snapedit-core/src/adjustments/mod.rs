//! The adjustment pipeline.
//!
//! Derives the displayed image from the original and a snapshot of the
//! control values. Stages always run in this order, each reading the 8-bit
//! output of the previous one:
//!
//! 1. Gaussian blur
//! 2. Brightness
//! 3. Contrast
//! 4. RGB offset
//! 5. Temperature / tint
//!
//! A stage whose parameters are at their identity value is skipped.

mod blur;
mod color;
mod enhance;

use crate::decode::PixelBuffer;
use crate::AdjustmentParameters;

pub use blur::{gaussian_blur, DEFAULT_PASSES};
pub use color::{apply_rgb_offset, apply_temperature_tint, COLOR_SHIFT_RANGE};
pub use enhance::{apply_brightness, apply_contrast};

/// Apply every adjustment to `original`, returning a new buffer.
///
/// Pure: the same inputs always produce the same output.
///
/// # Example
/// ```ignore
/// let mut params = AdjustmentParameters::default();
/// params.brightness = 1.2;
/// let current = recompute(&original, &params);
/// ```
pub fn recompute(original: &PixelBuffer, params: &AdjustmentParameters) -> PixelBuffer {
    recompute_with_passes(original, params, DEFAULT_PASSES)
}

/// Like [`recompute`], with an explicit number of box-blur passes.
pub fn recompute_with_passes(
    original: &PixelBuffer,
    params: &AdjustmentParameters,
    blur_passes: u32,
) -> PixelBuffer {
    if params.is_default() {
        return original.clone();
    }

    let mut image = if params.blur_radius > 0.0 {
        gaussian_blur(original, params.blur_radius, blur_passes)
    } else {
        original.clone()
    };

    apply_brightness(&mut image.pixels, params.brightness);
    apply_contrast(&mut image.pixels, params.contrast);
    apply_rgb_offset(
        &mut image.pixels,
        params.red_offset,
        params.green_offset,
        params.blue_offset,
    );
    apply_temperature_tint(&mut image.pixels, params.temperature, params.tint);

    log::debug!(
        "recomputed {}x{} (blur {}, passes {})",
        image.width,
        image.height,
        params.blur_radius,
        blur_passes
    );
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> PixelBuffer {
        let mut pixels = Vec::new();
        for y in 0..8u32 {
            for x in 0..10u32 {
                pixels.push((x * 25) as u8);
                pixels.push((y * 30) as u8);
                pixels.push(((x * y) % 256) as u8);
            }
        }
        PixelBuffer::new(10, 8, pixels)
    }

    #[test]
    fn test_default_params_are_identity() {
        let img = sample_image();
        assert_eq!(recompute(&img, &AdjustmentParameters::default()), img);
    }

    #[test]
    fn test_recompute_does_not_touch_original() {
        let img = sample_image();
        let before = img.clone();
        let params = AdjustmentParameters {
            brightness: 2.0,
            red_offset: 40,
            ..Default::default()
        };
        let out = recompute(&img, &params);
        assert_eq!(img, before);
        assert_ne!(out, img);
    }

    #[test]
    fn test_brightness_only() {
        let img = PixelBuffer::filled(2, 2, [100, 50, 10]);
        let params = AdjustmentParameters {
            brightness: 2.0,
            ..Default::default()
        };
        assert_eq!(recompute(&img, &params), PixelBuffer::filled(2, 2, [200, 100, 20]));
    }

    #[test]
    fn test_stage_order_offset_before_temperature() {
        let img = PixelBuffer::filled(1, 1, [250, 128, 10]);
        let params = AdjustmentParameters {
            red_offset: 10,
            blue_offset: -15,
            temperature: -100.0,
            ..Default::default()
        };
        // Offset clamps first (255, 0), then temperature shifts by 20.
        assert_eq!(recompute(&img, &params).pixel(0, 0), [235, 128, 20]);
    }

    #[test]
    fn test_brightness_before_offset() {
        let img = PixelBuffer::filled(1, 1, [100, 100, 100]);
        let params = AdjustmentParameters {
            brightness: 2.0,
            red_offset: 10,
            ..Default::default()
        };
        // (100 * 2) + 10, not (100 + 10) * 2
        assert_eq!(recompute(&img, &params).pixel(0, 0), [210, 200, 200]);
    }

    #[test]
    fn test_blur_then_brightness_on_flat_image() {
        let img = PixelBuffer::filled(6, 6, [40, 40, 40]);
        let params = AdjustmentParameters {
            blur_radius: 3.0,
            brightness: 1.5,
            ..Default::default()
        };
        assert_eq!(recompute(&img, &params), PixelBuffer::filled(6, 6, [60, 60, 60]));
    }

    #[test]
    fn test_explicit_passes() {
        let img = sample_image();
        let params = AdjustmentParameters {
            blur_radius: 2.0,
            ..Default::default()
        };
        assert_eq!(
            recompute(&img, &params),
            recompute_with_passes(&img, &params, DEFAULT_PASSES)
        );
    }
}
