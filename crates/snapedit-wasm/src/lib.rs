//! Snapedit WASM - WebAssembly bindings for Snapedit
//!
//! This crate exposes the snapedit-core editing session to a browser UI.
//!
//! # Module Structure
//!
//! - `session` - The stateful editor: open, adjust, preview, crop, resize, save
//! - `adjustments` - Adjustment parameters and the stateless pipeline
//! - `histogram` - Per-channel histogram bindings
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding and resize bindings
//! - `encode` - PNG/JPEG encoding bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditingSession, JsAdjustmentParameters } from '@snapedit/wasm';
//!
//! await init();
//!
//! const session = new JsEditingSession();
//! session.open(new Uint8Array(await file.arrayBuffer()));
//! session.on_canvas_resized(canvas.width, canvas.height);
//!
//! const params = new JsAdjustmentParameters();
//! params.brightness = 1.2;
//! session.on_parameter_changed(params);
//! const preview = session.preview();
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod decode;
mod encode;
mod histogram;
mod session;
mod types;

// Re-export public types
pub use adjustments::{recompute, JsAdjustmentParameters};
pub use decode::{decode_image, resize};
pub use encode::{encode_jpeg, encode_jpeg_from_image, encode_png, encode_png_from_image};
pub use histogram::{compute_histogram, JsHistogram};
pub use session::{JsEditingSession, JsViewportGeometry};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("logger already initialized");
    }

    log::info!("Snapedit WASM {} ready", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
