//! Per-channel image statistics
//!
//! Channel means feed the gray-world illuminant estimate. Means are given
//! in the units of the sample type, so an 8-bit image yields values in
//! `[0, 255]`.

use tracing::trace;

use crate::image::sample::Sample;
use crate::image::{Image, Pixels};
use crate::parallel::{self, CHUNK_PIXELS};
use crate::{Error, Result, simd};

/// Arithmetic mean of each channel over all pixels of a view
pub fn pixels_mean<T: Sample>(pixels: Pixels<'_, T>) -> Result<[f64; 3]> {
    if pixels.is_empty() {
        return Err(Error::EmptyImage);
    }

    let sum = parallel::map_reduce(
        pixels.as_array(),
        CHUNK_PIXELS,
        || [0.0f64; 3],
        |chunk| simd::sum_pixels_batch(chunk),
        |a: [f64; 3], b: [f64; 3]| [a[0] + b[0], a[1] + b[1], a[2] + b[2]],
    );
    let n = pixels.len() as f64;
    let mean = [sum[0] / n, sum[1] / n, sum[2] / n];
    trace!(pixels = pixels.len(), ?mean, "channel means");
    Ok(mean)
}

/// Arithmetic mean of each channel over all pixels of an image
pub fn image_mean<T: Sample>(image: &Image<T>) -> Result<[f64; 3]> {
    pixels_mean(image.pixels())
}
