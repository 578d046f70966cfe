//! Per-channel colour shifts: RGB offsets and temperature/tint.

/// Largest shift, in sample units, produced by temperature or tint at ±100.
pub const COLOR_SHIFT_RANGE: f64 = 20.0;

/// Add a constant to each channel, saturating at 0 and 255.
pub fn apply_rgb_offset(pixels: &mut [u8], red: i32, green: i32, blue: i32) {
    if red == 0 && green == 0 && blue == 0 {
        return;
    }
    let offsets = [red, green, blue];
    for chunk in pixels.chunks_exact_mut(3) {
        for (sample, offset) in chunk.iter_mut().zip(offsets) {
            *sample = (*sample as i32 + offset).clamp(0, 255) as u8;
        }
    }
}

/// Shift the red/blue balance by `temperature` and green by `tint`.
///
/// Positive temperature warms (more red, less blue); positive tint adds
/// green. All terms are accumulated in floating point before a single clamp,
/// and the result is truncated to an integer.
pub fn apply_temperature_tint(pixels: &mut [u8], temperature: f64, tint: f64) {
    if temperature == 0.0 && tint == 0.0 {
        return;
    }
    let warm = temperature / 100.0 * COLOR_SHIFT_RANGE;
    let green = tint / 100.0 * COLOR_SHIFT_RANGE;
    let shifts = [warm, green, -warm];

    for chunk in pixels.chunks_exact_mut(3) {
        for (sample, shift) in chunk.iter_mut().zip(shifts) {
            *sample = (*sample as f64 + shift).clamp(0.0, 255.0) as u8;
        }
    }
}
