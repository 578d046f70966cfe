//! Editing session WASM bindings.
//!
//! `JsEditingSession` is the whole editor as seen from the UI: it owns the
//! original/current image pair and receives control changes, canvas resizes
//! and pointer events.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = JsEditingSession.with_config({ jpeg_quality: 85 });
//! session.open(bytes);
//!
//! const geometry = session.on_canvas_resized(canvas.width, canvas.height);
//! if (geometry === undefined) {
//!   // Canvas not laid out yet; wait for the next resize event.
//! }
//!
//! session.start_crop();
//! canvas.onpointerdown = (e) => session.pointer_down(e.offsetX, e.offsetY);
//! canvas.onpointermove = (e) => drawOverlay(session.pointer_move(e.offsetX, e.offsetY));
//! canvas.onpointerup = (e) => session.pointer_up(e.offsetX, e.offsetY);
//! cropButton.onclick = () => session.apply_crop();
//! ```

use crate::adjustments::JsAdjustmentParameters;
use crate::histogram::JsHistogram;
use crate::types::JsPixelBuffer;
use snapedit_core::crop_session::{CropState, PreviewRect};
use snapedit_core::{EditingSession, EditorConfig, EditorError, ImageFormat, ViewportGeometry};
use wasm_bindgen::prelude::*;

fn js_error(e: EditorError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn rect_to_vec(rect: PreviewRect) -> Vec<f64> {
    vec![rect.start.x, rect.start.y, rect.end.x, rect.end.y]
}

/// Where the preview sits in the canvas.
#[wasm_bindgen]
pub struct JsViewportGeometry {
    inner: ViewportGeometry,
}

#[wasm_bindgen]
impl JsViewportGeometry {
    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.scale
    }

    #[wasm_bindgen(getter)]
    pub fn offset_x(&self) -> f64 {
        self.inner.offset_x as f64
    }

    #[wasm_bindgen(getter)]
    pub fn offset_y(&self) -> f64 {
        self.inner.offset_y as f64
    }

    #[wasm_bindgen(getter)]
    pub fn display_width(&self) -> u32 {
        self.inner.display_width
    }

    #[wasm_bindgen(getter)]
    pub fn display_height(&self) -> u32 {
        self.inner.display_height
    }

    /// Image pixel under a preview point, as `[x, y]` (may be out of bounds).
    pub fn to_image_space(&self, x: f64, y: f64) -> Vec<f64> {
        let (ix, iy) = self.inner.to_image_space(x, y);
        vec![ix as f64, iy as f64]
    }

    /// Preview point of an image pixel, as `[x, y]`.
    pub fn to_preview_space(&self, x: f64, y: f64) -> Vec<f64> {
        let (px, py) = self.inner.to_preview_space(x as i64, y as i64);
        vec![px, py]
    }

    /// Whether a preview point lies on the displayed image.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.inner.contains(x, y)
    }
}

/// The editor state behind one canvas.
#[wasm_bindgen]
pub struct JsEditingSession {
    inner: EditingSession,
}

#[wasm_bindgen]
impl JsEditingSession {
    /// Create a session with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: EditingSession::new(),
        }
    }

    /// Create a session from a settings object such as
    /// `{ preview_filter: "Bilinear", jpeg_quality: 85 }`.
    pub fn with_config(config: JsValue) -> Result<JsEditingSession, JsValue> {
        let config: EditorConfig =
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner: EditingSession::with_config(config),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.has_image()
    }

    /// Width of the current image, 0 when none is open.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.current().map_or(0, |c| c.width)
    }

    /// Height of the current image, 0 when none is open.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.current().map_or(0, |c| c.height)
    }

    /// Decode `bytes` and make it the image being edited.
    pub fn open(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner.open(bytes).map(|_| ()).map_err(js_error)
    }

    /// Install an already decoded image.
    pub fn load(&mut self, image: &JsPixelBuffer) {
        self.inner.load_buffer(image.buffer().clone());
    }

    /// Current image at full resolution.
    pub fn current(&self) -> Option<JsPixelBuffer> {
        self.inner
            .current()
            .map(|c| JsPixelBuffer::from_buffer(c.clone()))
    }

    pub fn params(&self) -> JsAdjustmentParameters {
        JsAdjustmentParameters::from_inner(*self.inner.params())
    }

    /// Recompute the current image from the control values.
    pub fn on_parameter_changed(&mut self, params: &JsAdjustmentParameters) -> Result<(), JsValue> {
        self.inner
            .on_parameter_changed(*params.inner())
            .map(|_| ())
            .map_err(js_error)
    }

    /// Record the canvas size. Returns `undefined` until the canvas has a
    /// usable size.
    pub fn on_canvas_resized(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<Option<JsViewportGeometry>, JsValue> {
        match self.inner.on_canvas_resized(width, height) {
            Ok(inner) => Ok(Some(JsViewportGeometry { inner })),
            Err(EditorError::GeometryNotReady) => Ok(None),
            Err(e) => Err(js_error(e)),
        }
    }

    /// Current image scaled for display.
    pub fn preview(&self) -> Result<JsPixelBuffer, JsValue> {
        self.inner
            .preview()
            .map(JsPixelBuffer::from_buffer)
            .map_err(js_error)
    }

    pub fn histogram(&self) -> Result<JsHistogram, JsValue> {
        self.inner
            .histogram()
            .map(JsHistogram::from_histogram)
            .map_err(js_error)
    }

    pub fn start_crop(&mut self) -> Result<(), JsValue> {
        self.inner.start_crop().map_err(js_error)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.inner.pointer_down(x, y)
    }

    /// Returns the overlay rectangle `[x0, y0, x1, y1]` while dragging.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<Vec<f64>> {
        self.inner.pointer_move(x, y).map(rect_to_vec)
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.inner.pointer_up(x, y)
    }

    /// Overlay rectangle `[x0, y0, x1, y1]` to draw, if any.
    pub fn crop_overlay(&self) -> Option<Vec<f64>> {
        self.inner.crop_overlay().map(rect_to_vec)
    }

    /// One of `"idle"`, `"armed"`, `"dragging"`, `"selected"`.
    pub fn crop_state(&self) -> String {
        match self.inner.crop_state() {
            CropState::Idle => "idle",
            CropState::Armed => "armed",
            CropState::Dragging { .. } => "dragging",
            CropState::Selected { .. } => "selected",
        }
        .to_string()
    }

    /// Commit the selection. Returns the new `[width, height]`.
    pub fn apply_crop(&mut self) -> Result<Vec<u32>, JsValue> {
        self.inner
            .apply_crop()
            .map(|(w, h)| vec![w, h])
            .map_err(js_error)
    }

    pub fn cancel_crop(&mut self) {
        self.inner.cancel_crop();
    }

    /// Discard adjustments (does not undo crop or resize).
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.inner.reset().map_err(js_error)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.inner.resize(width, height).map_err(js_error)
    }

    /// Resize from the raw text of the width/height inputs.
    pub fn resize_from_text(&mut self, width: &str, height: &str) -> Result<(), JsValue> {
        self.inner.resize_from_text(width, height).map_err(js_error)
    }

    /// Encode the current image as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, JsValue> {
        self.inner.encode(ImageFormat::Png).map_err(js_error)
    }

    /// Encode the current image as JPEG, using the configured quality when
    /// none is given.
    pub fn encode_jpeg(&self, quality: Option<u8>) -> Result<Vec<u8>, JsValue> {
        let quality = quality.unwrap_or(self.inner.config().jpeg_quality);
        self.inner
            .encode(ImageFormat::Jpeg { quality })
            .map_err(js_error)
    }

    /// Encode the current image in the format implied by `file_name`'s
    /// extension (png, jpg/jpeg, bmp, gif, tif/tiff).
    pub fn encode_as(&self, file_name: &str) -> Result<Vec<u8>, JsValue> {
        let format = self.inner.output_format(file_name).map_err(js_error)?;
        self.inner.encode(format).map_err(js_error)
    }

    /// MIME type to use for a Blob holding the output of [`encode_as`](Self::encode_as).
    pub fn mime_type_for(&self, file_name: &str) -> Result<String, JsValue> {
        self.inner
            .output_format(file_name)
            .map(|format| format.mime_type().to_string())
            .map_err(js_error)
    }
}

impl Default for JsEditingSession {
    fn default() -> Self {
        Self::new()
    }
}
