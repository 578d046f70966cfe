//! Histogram computation from interleaved pixel data.
//!
//! Produces the per-channel frequency tables consumed by the histogram
//! display.

use crate::Histogram;

/// Count every sample of each channel into 256 unit-width bins.
///
/// `channels` is the number of interleaved channels: 3 yields red, green and
/// blue series, 1 yields a single gray series.
///
/// # Panics
/// Panics if `channels` is not 1 or 3, or if `samples` is not a whole number
/// of pixels.
///
/// # Performance
/// Single pass, O(n) in the number of samples, constant extra memory.
pub fn compute_histogram(samples: &[u8], channels: usize) -> Histogram {
    let mut hist = match channels {
        3 => Histogram::rgb(),
        1 => Histogram::gray(),
        n => panic!("Unsupported channel count for histogram: {}", n),
    };
    assert!(
        samples.len() % channels == 0,
        "Sample count {} is not a multiple of {} channels",
        samples.len(),
        channels
    );

    if channels == 1 {
        let bins = hist.series_mut(0);
        for &v in samples {
            bins[v as usize] += 1;
        }
        return hist;
    }

    let mut red = [0u32; 256];
    let mut green = [0u32; 256];
    let mut blue = [0u32; 256];
    for chunk in samples.chunks_exact(3) {
        red[chunk[0] as usize] += 1;
        green[chunk[1] as usize] += 1;
        blue[chunk[2] as usize] += 1;
    }
    *hist.series_mut(0) = red;
    *hist.series_mut(1) = green;
    *hist.series_mut(2) = blue;
    hist
}

/// Histogram of an RGB pixel buffer.
pub fn histogram_of(buffer: &crate::PixelBuffer) -> Histogram {
    compute_histogram(&buffer.pixels, crate::decode::CHANNELS)
}
