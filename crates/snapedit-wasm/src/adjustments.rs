//! Adjustment parameter WASM bindings.
//!
//! This module provides JavaScript bindings for the AdjustmentParameters type,
//! allowing the editing controls to be manipulated from TypeScript.

use crate::types::JsPixelBuffer;
use snapedit_core::AdjustmentParameters;
use wasm_bindgen::prelude::*;

/// Adjustment parameters wrapper for JavaScript
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct JsAdjustmentParameters {
    inner: AdjustmentParameters,
}

#[wasm_bindgen]
impl JsAdjustmentParameters {
    /// Create parameters at the identity configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn blur_radius(&self) -> f32 {
        self.inner.blur_radius
    }

    #[wasm_bindgen(setter)]
    pub fn set_blur_radius(&mut self, value: f32) {
        self.inner.blur_radius = value;
    }

    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.brightness = value;
    }

    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.contrast = value;
    }

    #[wasm_bindgen(getter)]
    pub fn red_offset(&self) -> i32 {
        self.inner.red_offset
    }

    #[wasm_bindgen(setter)]
    pub fn set_red_offset(&mut self, value: i32) {
        self.inner.red_offset = value;
    }

    #[wasm_bindgen(getter)]
    pub fn green_offset(&self) -> i32 {
        self.inner.green_offset
    }

    #[wasm_bindgen(setter)]
    pub fn set_green_offset(&mut self, value: i32) {
        self.inner.green_offset = value;
    }

    #[wasm_bindgen(getter)]
    pub fn blue_offset(&self) -> i32 {
        self.inner.blue_offset
    }

    #[wasm_bindgen(setter)]
    pub fn set_blue_offset(&mut self, value: i32) {
        self.inner.blue_offset = value;
    }

    #[wasm_bindgen(getter)]
    pub fn temperature(&self) -> f64 {
        self.inner.temperature
    }

    #[wasm_bindgen(setter)]
    pub fn set_temperature(&mut self, value: f64) {
        self.inner.temperature = value;
    }

    #[wasm_bindgen(getter)]
    pub fn tint(&self) -> f64 {
        self.inner.tint
    }

    #[wasm_bindgen(setter)]
    pub fn set_tint(&mut self, value: f64) {
        self.inner.tint = value;
    }

    /// Check if all parameters are at their identity values
    pub fn is_default(&self) -> bool {
        self.inner.is_default()
    }

    /// Copy with every value pulled into its slider range
    pub fn clamped(&self) -> JsAdjustmentParameters {
        Self::from_inner(self.inner.clamped())
    }

    /// Serialize to a plain JS object
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a plain JS object; missing fields take their defaults
    pub fn from_json(value: JsValue) -> Result<JsAdjustmentParameters, JsValue> {
        let inner: AdjustmentParameters =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl JsAdjustmentParameters {
    pub(crate) fn from_inner(inner: AdjustmentParameters) -> Self {
        Self { inner }
    }

    pub(crate) fn inner(&self) -> &AdjustmentParameters {
        &self.inner
    }
}

/// Run the adjustment pipeline on an image without a session.
///
/// # Example (TypeScript)
/// ```typescript
/// const params = new JsAdjustmentParameters();
/// params.blur_radius = 2;
/// params.temperature = 30;
///
/// const adjusted = recompute(sourceImage, params);
/// ```
#[wasm_bindgen]
pub fn recompute(image: &JsPixelBuffer, params: &JsAdjustmentParameters) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(snapedit_core::recompute(image.buffer(), params.inner()))
}
