//! Image encoding WASM bindings.
//!
//! The browser has no filesystem, so saving means encoding to bytes and
//! handing them to a download or the File System Access API.
//!
//! # Example
//!
//! ```typescript
//! const png = encode_png_from_image(image);
//! const jpeg = encode_jpeg_from_image(image, 90);
//! const writable = await fileHandle.createWritable();
//! await writable.write(new Blob([png], { type: 'image/png' }));
//! await writable.close();
//! ```

use crate::types::JsPixelBuffer;
use snapedit_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to PNG bytes.
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode RGB pixel data to JPEG bytes.
///
/// `quality` is 1-100 (90 recommended); out-of-range values are clamped.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsPixelBuffer to PNG bytes.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsPixelBuffer) -> Result<Vec<u8>, JsValue> {
    encode::encode_image(image.buffer(), encode::ImageFormat::Png)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsPixelBuffer to JPEG bytes.
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsPixelBuffer, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_image(image.buffer(), encode::ImageFormat::Jpeg { quality })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
