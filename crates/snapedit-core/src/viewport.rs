//! Mapping between image space and the on-screen preview.
//!
//! The preview is the image scaled by a single factor (never above 1.0) and
//! centred in the canvas:
//!
//! ```text
//! preview = image * scale + offset
//! image   = floor((preview - offset) / scale)
//! ```

use crate::decode::{resize, FilterType, PixelBuffer};
use crate::error::EditorError;

/// Placement of a scaled image inside a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    pub image_width: u32,
    pub image_height: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// `min(canvas_w / image_w, canvas_h / image_h, 1.0)`
    pub scale: f64,
    pub offset_x: i64,
    pub offset_y: i64,
    /// Width of the rendered preview, `floor(image_width * scale)`, at least 1
    pub display_width: u32,
    /// Height of the rendered preview, `floor(image_height * scale)`, at least 1
    pub display_height: u32,
}

/// Compute where an image of the given size lands in the canvas.
///
/// Returns [`EditorError::GeometryNotReady`] while the canvas has not been
/// laid out (either side ≤ 1) or when the image has a zero dimension.
pub fn compute_geometry(
    image_width: u32,
    image_height: u32,
    canvas_width: u32,
    canvas_height: u32,
) -> Result<ViewportGeometry, EditorError> {
    if canvas_width <= 1 || canvas_height <= 1 || image_width == 0 || image_height == 0 {
        return Err(EditorError::GeometryNotReady);
    }

    let scale_x = canvas_width as f64 / image_width as f64;
    let scale_y = canvas_height as f64 / image_height as f64;
    let scale = scale_x.min(scale_y).min(1.0);

    let display_width = ((image_width as f64 * scale).floor() as u32).max(1);
    let display_height = ((image_height as f64 * scale).floor() as u32).max(1);

    Ok(ViewportGeometry {
        image_width,
        image_height,
        canvas_width,
        canvas_height,
        scale,
        offset_x: (canvas_width as i64 - display_width as i64).div_euclid(2),
        offset_y: (canvas_height as i64 - display_height as i64).div_euclid(2),
        display_width,
        display_height,
    })
}

impl ViewportGeometry {
    /// Preview point to image pixel, unclamped.
    ///
    /// Points outside the displayed image map outside `[0, w) × [0, h)`.
    pub fn to_image_space(&self, x: f64, y: f64) -> (i64, i64) {
        (
            ((x - self.offset_x as f64) / self.scale).floor() as i64,
            ((y - self.offset_y as f64) / self.scale).floor() as i64,
        )
    }

    /// Image coordinate to preview point.
    pub fn to_preview_space(&self, x: i64, y: i64) -> (f64, f64) {
        (
            x as f64 * self.scale + self.offset_x as f64,
            y as f64 * self.scale + self.offset_y as f64,
        )
    }

    /// Whether a preview point falls on the displayed image.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let left = self.offset_x as f64;
        let top = self.offset_y as f64;
        x >= left
            && y >= top
            && x < left + self.display_width as f64
            && y < top + self.display_height as f64
    }

    /// True if the preview is the image at full size.
    pub fn is_unscaled(&self) -> bool {
        self.display_width == self.image_width && self.display_height == self.image_height
    }
}

/// Resample `current` to the preview size described by `geometry`.
///
/// # Panics
/// Panics if `geometry` was computed for a different image size.
pub fn render_preview(
    current: &PixelBuffer,
    geometry: &ViewportGeometry,
    filter: FilterType,
) -> Result<PixelBuffer, EditorError> {
    assert_eq!(
        (current.width, current.height),
        (geometry.image_width, geometry.image_height),
        "Viewport geometry does not match the image"
    );
    if geometry.is_unscaled() {
        return Ok(current.clone());
    }
    Ok(resize(
        current,
        geometry.display_width,
        geometry.display_height,
        filter,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_for_degenerate_canvas() {
        for (cw, ch) in [(0, 0), (1, 500), (500, 1), (1, 1)] {
            assert!(matches!(
                compute_geometry(100, 100, cw, ch),
                Err(EditorError::GeometryNotReady)
            ));
        }
        assert!(compute_geometry(100, 100, 2, 2).is_ok());
    }

    #[test]
    fn test_never_upscales() {
        let g = compute_geometry(100, 50, 800, 600).unwrap();
        assert_eq!(g.scale, 1.0);
        assert_eq!((g.display_width, g.display_height), (100, 50));
        assert_eq!((g.offset_x, g.offset_y), (350, 275));
        assert!(g.is_unscaled());
    }

    #[test]
    fn test_downscale_letterbox() {
        // Width-limited: 1000x500 into 500x500 -> scale 0.5, 500x250, centred vertically
        let g = compute_geometry(1000, 500, 500, 500).unwrap();
        assert_eq!(g.scale, 0.5);
        assert_eq!((g.display_width, g.display_height), (500, 250));
        assert_eq!((g.offset_x, g.offset_y), (0, 125));
    }

    #[test]
    fn test_odd_remainder_offset_floors() {
        let g = compute_geometry(10, 10, 15, 20).unwrap();
        assert_eq!(g.scale, 1.0);
        assert_eq!((g.offset_x, g.offset_y), (2, 5));
    }

    #[test]
    fn test_tiny_scale_keeps_one_pixel() {
        let g = compute_geometry(10_000, 10, 5, 5).unwrap();
        assert_eq!(g.display_width, 5);
        assert_eq!(g.display_height, 1);
    }

    #[test]
    fn test_to_image_space_identity_scale() {
        let g = compute_geometry(100, 100, 100, 100).unwrap();
        assert_eq!(g.to_image_space(10.0, 80.0), (10, 80));
        assert_eq!(g.to_image_space(-5.0, 120.0), (-5, 120));
    }

    #[test]
    fn test_to_image_space_scaled() {
        let g = compute_geometry(1000, 500, 500, 500).unwrap();
        // (250, 250) preview is (500, 250) image: (250 - 0) / 0.5, (250 - 125) / 0.5
        assert_eq!(g.to_image_space(250.0, 250.0), (500, 250));
        assert_eq!(g.to_preview_space(500, 250), (250.0, 250.0));
        // Above the letterboxed image
        assert_eq!(g.to_image_space(0.0, 0.0), (0, -250));
    }

    #[test]
    fn test_contains() {
        let g = compute_geometry(100, 50, 200, 200).unwrap();
        assert!(g.contains(50.0, 75.0));
        assert!(g.contains(149.9, 124.9));
        assert!(!g.contains(150.0, 100.0));
        assert!(!g.contains(49.0, 100.0));
        assert!(!g.contains(100.0, 74.0));
    }

    #[test]
    fn test_render_preview_unscaled_is_clone() {
        let img = PixelBuffer::filled(4, 3, [1, 2, 3]);
        let g = compute_geometry(4, 3, 100, 100).unwrap();
        assert_eq!(render_preview(&img, &g, FilterType::Lanczos3).unwrap(), img);
    }

    #[test]
    fn test_render_preview_downscaled_size() {
        let img = PixelBuffer::filled(40, 20, [200, 100, 50]);
        let g = compute_geometry(40, 20, 10, 10).unwrap();
        let preview = render_preview(&img, &g, FilterType::Lanczos3).unwrap();
        assert_eq!(preview.dimensions(), (10, 5));
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_render_preview_mismatched_geometry_panics() {
        let img = PixelBuffer::filled(4, 3, [0, 0, 0]);
        let g = compute_geometry(5, 3, 100, 100).unwrap();
        let _ = render_preview(&img, &g, FilterType::Nearest);
    }
}
