//! Grey-level conversion using ITU-R BT.601 weights.
//!
//! Matches the 16.16 fixed-point RGB to L conversion of common imaging
//! libraries, so the contrast pivot computed from it is reproducible.

/// BT.601 red weight scaled by 2^16.
pub const LUMA_R: u32 = 19595;

/// BT.601 green weight scaled by 2^16.
pub const LUMA_G: u32 = 38470;

/// BT.601 blue weight scaled by 2^16.
pub const LUMA_B: u32 = 7471;

/// Grey level of an RGB triple, rounded to the nearest integer.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B + 0x8000) >> 16) as u8
}

/// Mean grey level of interleaved RGB pixels, rounded half up.
///
/// Returns 0 for empty input.
pub fn mean_luma(pixels: &[u8]) -> u8 {
    let mut sum: u64 = 0;
    let mut count: u64 = 0;
    for chunk in pixels.chunks_exact(3) {
        sum += luma_u8(chunk[0], chunk[1], chunk[2]) as u64;
        count += 1;
    }
    if count == 0 {
        return 0;
    }
    let mean = sum as f64 / count as f64;
    (mean + 0.5).floor().min(255.0) as u8
}
