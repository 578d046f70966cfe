//! Image cropping operations.
//!
//! Crop regions are half-open pixel rectangles `[x1, x2) × [y1, y2)` in
//! image space. Origin is the top-left corner.
//!
//! # Example
//!
//! ```ignore
//! // Keep the 50x70 block whose top-left corner is (10, 10)
//! let region = CropRegion::new(10, 10, 60, 80);
//! let cropped = apply_crop(&image, region);
//! ```

use crate::decode::{PixelBuffer, CHANNELS};

/// A rectangle in image pixel coordinates, `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl CropRegion {
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Region spanned by two arbitrary corners, clamped to `width × height`.
    ///
    /// Corners may be given in any order and may lie outside the image.
    pub fn from_corners(a: (i64, i64), b: (i64, i64), width: u32, height: u32) -> Self {
        let clamp_x = |v: i64| v.clamp(0, width as i64) as u32;
        let clamp_y = |v: i64| v.clamp(0, height as i64) as u32;
        Self {
            x1: clamp_x(a.0.min(b.0)),
            y1: clamp_y(a.1.min(b.1)),
            x2: clamp_x(a.0.max(b.0)),
            y2: clamp_y(a.1.max(b.1)),
        }
    }

    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// True if the region covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// True if the region lies inside a `width × height` image.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2 && self.x2 <= width && self.y2 <= height
    }
}

/// Copy the pixels inside `region` into a new buffer.
///
/// # Panics
///
/// Panics if the region is empty or extends past the image; callers clamp
/// and validate the region first.
pub fn apply_crop(image: &PixelBuffer, region: CropRegion) -> PixelBuffer {
    assert!(
        region.fits(image.width, image.height) && !region.is_empty(),
        "Crop region {:?} is not a non-empty part of a {}x{} image",
        region,
        image.width,
        image.height
    );

    // Fast path: full crop returns a clone
    if region.width() == image.width && region.height() == image.height {
        return image.clone();
    }

    let src_stride = image.stride();
    let row_len = region.width() as usize * CHANNELS;
    let mut output = Vec::with_capacity(row_len * region.height() as usize);

    // Copy pixel data row by row for efficiency
    for y in region.y1..region.y2 {
        let start = y as usize * src_stride + region.x1 as usize * CHANNELS;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    PixelBuffer::new(region.width(), region.height(), output)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x % 256) as u8);
                pixels.push((y % 256) as u8);
                pixels.push(((y * width + x) % 256) as u8);
            }
        }
        PixelBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_full_crop() {
        let img = test_image(20, 10);
        let result = apply_crop(&img, CropRegion::new(0, 0, 20, 10));
        assert_eq!(result, img);
    }

    #[test]
    fn test_sub_region_dimensions_and_values() {
        let img = test_image(100, 100);
        let result = apply_crop(&img, CropRegion::new(10, 10, 60, 80));

        assert_eq!(result.dimensions(), (50, 70));
        for y in 0..70 {
            for x in 0..50 {
                assert_eq!(result.pixel(x, y), img.pixel(x + 10, y + 10));
            }
        }
    }

    #[test]
    fn test_non_square_rows_follow_stride() {
        let img = test_image(9, 4);
        let result = apply_crop(&img, CropRegion::new(2, 1, 8, 4));

        assert_eq!(result.dimensions(), (6, 3));
        assert_eq!(result.stride(), 18);
        for y in 0..3 {
            for x in 0..6 {
                assert_eq!(result.pixel(x, y), img.pixel(x + 2, y + 1));
            }
        }
    }

    #[test]
    fn test_single_pixel_crop() {
        let img = test_image(5, 5);
        let result = apply_crop(&img, CropRegion::new(4, 4, 5, 5));
        assert_eq!(result.dimensions(), (1, 1));
        assert_eq!(result.pixel(0, 0), img.pixel(4, 4));
    }

    #[test]
    #[should_panic(expected = "Crop region")]
    fn test_empty_region_panics() {
        let img = test_image(5, 5);
        apply_crop(&img, CropRegion::new(2, 2, 2, 4));
    }

    #[test]
    #[should_panic(expected = "Crop region")]
    fn test_out_of_bounds_region_panics() {
        let img = test_image(5, 5);
        apply_crop(&img, CropRegion::new(0, 0, 6, 5));
    }

    #[test]
    fn test_from_corners_normalizes_and_clamps() {
        let region = CropRegion::from_corners((80, -5), (20, 300), 100, 200);
        assert_eq!(region, CropRegion::new(20, 0, 80, 200));
        assert_eq!(region.width(), 60);
        assert_eq!(region.height(), 200);
    }

    #[test]
    fn test_from_corners_zero_area() {
        let region = CropRegion::from_corners((30, 30), (30, 30), 100, 100);
        assert!(region.is_empty());

        // Entirely outside the image collapses to an edge
        let region = CropRegion::from_corners((150, 10), (180, 40), 100, 100);
        assert!(region.is_empty());
    }
}
