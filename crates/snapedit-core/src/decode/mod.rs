//! Image decoding for Snapedit.
//!
//! This module provides functionality for:
//! - Decoding JPEG, PNG, BMP, GIF and TIFF files into RGB buffers
//! - Resampling buffers for user resizes and preview rendering
//!
//! All operations are synchronous and single-threaded so they can run inside
//! a Web Worker through the WASM bindings.
//!
//! # Examples
//!
//! ```ignore
//! use snapedit_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.png")?;
//! let image = decode_image(&bytes)?;
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod raster;
mod resize;
mod types;

pub use raster::{decode_image, load_image_file};
pub use resize::resize;
pub use types::{DecodeError, FilterType, PixelBuffer, CHANNELS};
