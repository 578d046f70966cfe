//! Histogram computation WASM bindings.
//!
//! Exposes the per-channel histogram to the plotting component.

use js_sys::Array;
use snapedit_core::{Channel, Histogram};
use wasm_bindgen::prelude::*;

/// Histogram result accessible from JavaScript.
///
/// RGB input yields `red`, `green` and `blue` series; single-channel input
/// yields only `gray`. Absent series are returned as empty arrays.
#[wasm_bindgen]
pub struct JsHistogram {
    inner: Histogram,
}

#[wasm_bindgen]
impl JsHistogram {
    /// Names of the series present, in order (e.g. `["red", "green", "blue"]`).
    pub fn channel_names(&self) -> Array {
        self.inner
            .channels()
            .map(|c| JsValue::from_str(c.name()))
            .collect()
    }

    /// Get red channel histogram (256 bins).
    pub fn red(&self) -> Vec<u32> {
        self.series(Channel::Red)
    }

    /// Get green channel histogram (256 bins).
    pub fn green(&self) -> Vec<u32> {
        self.series(Channel::Green)
    }

    /// Get blue channel histogram (256 bins).
    pub fn blue(&self) -> Vec<u32> {
        self.series(Channel::Blue)
    }

    /// Get the single-channel histogram (256 bins).
    pub fn gray(&self) -> Vec<u32> {
        self.series(Channel::Gray)
    }

    /// Get maximum bin value across all channels.
    ///
    /// Useful for normalizing histogram display.
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.inner.max_value()
    }

    /// Number of pixels counted.
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> f64 {
        self.inner.total() as f64
    }

    /// Check if any channel has values at 255 (highlight clipping).
    #[wasm_bindgen(getter)]
    pub fn has_highlight_clipping(&self) -> bool {
        self.inner.has_highlight_clipping()
    }

    /// Check if any channel has values at 0 (shadow clipping).
    #[wasm_bindgen(getter)]
    pub fn has_shadow_clipping(&self) -> bool {
        self.inner.has_shadow_clipping()
    }
}

impl JsHistogram {
    pub(crate) fn from_histogram(inner: Histogram) -> Self {
        Self { inner }
    }

    fn series(&self, channel: Channel) -> Vec<u32> {
        self.inner
            .get(channel)
            .map(|bins| bins.to_vec())
            .unwrap_or_default()
    }
}

/// Compute a histogram from interleaved pixel data.
///
/// # Arguments
/// * `samples` - Pixel data as Uint8Array
/// * `channels` - Interleaved channel count: 3 for RGB, 1 for grayscale
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_histogram(image.pixels(), 3);
/// const redBins = hist.red();   // Uint32Array[256]
/// const max = hist.max_value;   // For normalization
/// hist.free();
/// ```
#[wasm_bindgen]
pub fn compute_histogram(samples: &[u8], channels: u8) -> Result<JsHistogram, JsValue> {
    let channels = channels as usize;
    if channels != 1 && channels != 3 {
        return Err(JsValue::from_str(&format!(
            "Unsupported channel count: {}",
            channels
        )));
    }
    if samples.len() % channels != 0 {
        return Err(JsValue::from_str(&format!(
            "Sample count {} is not a multiple of {}",
            samples.len(),
            channels
        )));
    }
    Ok(JsHistogram::from_histogram(
        snapedit_core::compute_histogram(samples, channels),
    ))
}
