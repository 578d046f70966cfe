//! Gaussian blur approximated by repeated extended box blurs.
//!
//! A Gaussian of standard deviation `radius` is approximated with `passes`
//! box blurs whose (fractional) box radius is chosen so the variances match
//! (Gwosdek et al., "Theoretical foundations of Gaussian convolution by
//! extended box filtering", SSVM 2011). Each pass runs along rows with
//! 8.24 fixed-point weights; columns are handled by transposing.
//!
//! Pixels outside the image repeat the nearest edge pixel.

use crate::decode::{PixelBuffer, CHANNELS};

/// Number of box passes used when none is configured.
pub const DEFAULT_PASSES: u32 = 3;

const ONE: u32 = 1 << 24;
const HALF: u32 = 1 << 23;

/// Blur an image with a Gaussian of the given radius (standard deviation).
///
/// A radius of zero (or less) returns a copy of the input.
pub fn gaussian_blur(image: &PixelBuffer, radius: f32, passes: u32) -> PixelBuffer {
    let passes = passes.max(1);
    let box_radius = extended_box_radius(radius.max(0.0), passes);
    if box_radius == 0.0 {
        return image.clone();
    }

    let (width, height) = (image.width as usize, image.height as usize);
    let mut pixels = image.pixels.clone();

    for _ in 0..passes {
        pixels = blur_rows(&pixels, width, height, box_radius);
    }

    let mut transposed = transpose(&pixels, width, height);
    for _ in 0..passes {
        transposed = blur_rows(&transposed, height, width, box_radius);
    }
    let pixels = transpose(&transposed, height, width);

    PixelBuffer::new(image.width, image.height, pixels)
}

/// Fractional box radius whose `passes`-fold convolution has variance `radius^2`.
fn extended_box_radius(radius: f32, passes: u32) -> f32 {
    let sigma2 = radius * radius / passes as f32;
    let box_len = (12.0 * sigma2 as f64 + 1.0).sqrt() as f32;
    let l = ((box_len as f64 - 1.0) / 2.0).floor() as f32;
    let mut a = (2.0 * l + 1.0) * (l * (l + 1.0) - 3.0 * sigma2);
    a /= 6.0 * (sigma2 - (l + 1.0) * (l + 1.0));
    l + a
}

fn blur_rows(src: &[u8], width: usize, height: usize, box_radius: f32) -> Vec<u8> {
    let radius = box_radius as usize;
    // Weight of each fully covered pixel, then of the two partially covered ones.
    let ww = (ONE as f32 / (box_radius * 2.0 + 1.0)) as u32;
    let fw = (ONE - (radius as u32 * 2 + 1).wrapping_mul(ww)) / 2;
    let edge_a = (radius + 1).min(width);
    let edge_b = width.saturating_sub(radius + 1);

    let stride = width * CHANNELS;
    let mut out = vec![0u8; src.len()];
    for (line_in, line_out) in src.chunks_exact(stride).zip(out.chunks_exact_mut(stride)) {
        let line = Line {
            input: line_in,
            last: width - 1,
            ww,
            fw,
        };
        line.blur(line_out, radius, edge_a, edge_b);
    }
    debug_assert_eq!(out.len(), width * height * CHANNELS);
    out
}

struct Line<'a> {
    input: &'a [u8],
    last: usize,
    ww: u32,
    fw: u32,
}

impl Line<'_> {
    #[inline]
    fn at(&self, x: usize, c: usize) -> u32 {
        self.input[x * CHANNELS + c] as u32
    }

    #[inline]
    fn slide(&self, acc: &mut [u32; CHANNELS], subtract: usize, add: usize) {
        for (c, value) in acc.iter_mut().enumerate() {
            *value = value.wrapping_add(self.at(add, c)).wrapping_sub(self.at(subtract, c));
        }
    }

    #[inline]
    fn emit(&self, out: &mut [u8], x: usize, acc: &[u32; CHANNELS], left: usize, right: usize) {
        for (c, value) in acc.iter().enumerate() {
            let bulk = value
                .wrapping_mul(self.ww)
                .wrapping_add((self.at(left, c) + self.at(right, c)).wrapping_mul(self.fw));
            out[x * CHANNELS + c] = (bulk.wrapping_add(HALF) >> 24) as u8;
        }
    }

    fn blur(&self, out: &mut [u8], radius: usize, edge_a: usize, edge_b: usize) {
        let last = self.last;

        // Window sum centred on the virtual pixel at x = -1.
        let mut acc = [0u32; CHANNELS];
        for (c, value) in acc.iter_mut().enumerate() {
            *value = self.at(0, c).wrapping_mul(radius as u32 + 1);
            for x in 0..edge_a - 1 {
                *value = value.wrapping_add(self.at(x, c));
            }
            *value = value.wrapping_add(self.at(last, c).wrapping_mul((radius + 1 - edge_a) as u32));
        }

        if edge_a <= edge_b {
            for x in 0..edge_a {
                self.slide(&mut acc, 0, x + radius);
                self.emit(out, x, &acc, 0, x + radius + 1);
            }
            for x in edge_a..edge_b {
                self.slide(&mut acc, x - radius - 1, x + radius);
                self.emit(out, x, &acc, x - radius - 1, x + radius + 1);
            }
            for x in edge_b..=last {
                self.slide(&mut acc, x - radius - 1, last);
                self.emit(out, x, &acc, x - radius - 1, last);
            }
        } else {
            for x in 0..edge_b {
                self.slide(&mut acc, 0, x + radius);
                self.emit(out, x, &acc, 0, x + radius + 1);
            }
            for x in edge_b..edge_a {
                self.slide(&mut acc, 0, last);
                self.emit(out, x, &acc, 0, last);
            }
            for x in edge_a..=last {
                self.slide(&mut acc, x - radius - 1, last);
                self.emit(out, x, &acc, x - radius - 1, last);
            }
        }
    }
}

fn transpose(src: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut out = vec![0u8; src.len()];
    for y in 0..height {
        for x in 0..width {
            let from = (y * width + x) * CHANNELS;
            let to = (x * height + y) * CHANNELS;
            out[to..to + CHANNELS].copy_from_slice(&src[from..from + CHANNELS]);
        }
    }
    out
}
