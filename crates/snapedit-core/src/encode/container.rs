//! BMP, GIF and TIFF output through the `image` crate's generic writer.

use std::io::Cursor;

use image::RgbImage;

use super::{validate, EncodeError};

/// Encode RGB pixel data in one of the container formats `image` can write.
///
/// GIF output is palettised by the encoder, so it is only exact for images
/// with at most 256 distinct colours.
pub fn encode_with_format(
    pixels: &[u8],
    width: u32,
    height: u32,
    format: image::ImageFormat,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height)?;

    let img = RgbImage::from_raw(width, height, pixels.to_vec()).ok_or_else(|| {
        EncodeError::EncodingFailed(format!("buffer does not fit {}x{}", width, height))
    })?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(out.into_inner())
}
