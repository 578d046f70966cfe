//! Image encoding for Snapedit.
//!
//! This module provides functionality for:
//! - Encoding buffers to PNG (lossless, the default), JPEG, BMP, GIF or TIFF
//! - Picking the output format from a file extension
//! - Writing the encoded bytes to disk
//!
//! # Examples
//!
//! ```ignore
//! use snapedit_core::encode::{save_image, ImageFormat};
//!
//! save_image(&buffer, "out.png", ImageFormat::Png)?;
//! ```

mod container;
mod jpeg;
mod png;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{PixelBuffer, CHANNELS};

pub use container::encode_with_format;
pub use jpeg::encode_jpeg;
pub use png::encode_png;

/// Default JPEG quality used when the format is inferred from a path.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors that can occur while encoding or writing an image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The output extension maps to no supported encoder
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The encoder itself failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the encoded bytes failed
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Output container for saved images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg { quality: u8 },
    Bmp,
    Gif,
    Tiff,
}

impl ImageFormat {
    /// Choose a format from the path's extension.
    ///
    /// No extension means PNG. `jpg`/`jpeg` map to JPEG with `jpeg_quality`,
    /// `bmp`, `gif` and `tif`/`tiff` to their own encoders.
    pub fn from_path(path: impl AsRef<Path>, jpeg_quality: u8) -> Result<Self, EncodeError> {
        let ext = match path.as_ref().extension() {
            None => return Ok(ImageFormat::Png),
            Some(ext) => ext.to_string_lossy().to_ascii_lowercase(),
        };
        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg {
                quality: jpeg_quality,
            }),
            "bmp" => Ok(ImageFormat::Bmp),
            "gif" => Ok(ImageFormat::Gif),
            "tif" | "tiff" => Ok(ImageFormat::Tiff),
            other => Err(EncodeError::UnsupportedFormat(other.to_string())),
        }
    }

    /// MIME type of the encoded output.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg { .. } => "image/jpeg",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Tiff => "image/tiff",
        }
    }
}

/// Encode a buffer in the requested format.
pub fn encode_image(buffer: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        ImageFormat::Png => encode_png(&buffer.pixels, buffer.width, buffer.height),
        ImageFormat::Jpeg { quality } => {
            encode_jpeg(&buffer.pixels, buffer.width, buffer.height, quality)
        }
        ImageFormat::Bmp => encode_container(buffer, image::ImageFormat::Bmp),
        ImageFormat::Gif => encode_container(buffer, image::ImageFormat::Gif),
        ImageFormat::Tiff => encode_container(buffer, image::ImageFormat::Tiff),
    }
}

fn encode_container(
    buffer: &PixelBuffer,
    format: image::ImageFormat,
) -> Result<Vec<u8>, EncodeError> {
    encode_with_format(&buffer.pixels, buffer.width, buffer.height, format)
}

/// Encode a buffer and write it to `path`.
pub fn save_image(
    buffer: &PixelBuffer,
    path: impl AsRef<Path>,
    format: ImageFormat,
) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let bytes = encode_image(buffer, format)?;
    std::fs::write(path, bytes)
        .map_err(|e| EncodeError::IoError(format!("{}: {}", path.display(), e)))?;
    log::info!(
        "saved {}x{} image to {}",
        buffer.width,
        buffer.height,
        path.display()
    );
    Ok(())
}

fn validate(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    let expected = (width as usize) * (height as usize) * CHANNELS;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}
