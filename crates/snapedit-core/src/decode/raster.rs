//! Raster image decoding (JPEG, PNG, BMP, GIF, TIFF) into RGB buffers.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use super::{DecodeError, PixelBuffer};

/// Decode an image from bytes, guessing the format from its magic bytes.
///
/// Animated formats contribute their first frame. Every colour type is
/// converted to 8-bit RGB; alpha is discarded.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if the data fails to decode.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if img.width() == 0 || img.height() == 0 {
        return Err(DecodeError::CorruptedFile("image has zero area".to_string()));
    }

    let buffer = PixelBuffer::from_rgb_image(img.into_rgb8());
    log::debug!("decoded {}x{} image", buffer.width, buffer.height);
    Ok(buffer)
}

/// Read and decode an image file from disk.
pub fn load_image_file(path: impl AsRef<Path>) -> Result<PixelBuffer, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| DecodeError::IoError(format!("{}: {}", path.display(), e)))?;
    decode_image(&bytes)
}
