//! Unsigned ↔ floating sample conversion
//!
//! `to_floating` maps `v` to `v / MAX`; `to_unsigned` maps `f` to
//! `round(clip(f, 0, 1) * MAX)`. Out-of-range floats saturate and NaN becomes
//! 0. Both allocate a fresh buffer of the same shape.

use tracing::debug;

use crate::image::sample::{FloatSample, UnsignedSample};
use crate::image::{CHANNELS, Image, check_len};
use crate::parallel::{self, CHUNK_PIXELS};
use crate::{Result, simd};

const CHUNK_SAMPLES: usize = CHUNK_PIXELS * CHANNELS;

/// Convert a flat unsigned `[H, W, 3]` buffer to normalized floats
pub fn to_floating<U, F>(data: &[U], width: usize, height: usize) -> Result<Vec<F>>
where
    U: UnsignedSample,
    F: FloatSample,
{
    check_len(data.len(), width, height)?;
    debug!(width, height, max = U::MAX_VALUE, "unsigned to floating");
    Ok(normalize_all(data))
}

/// Convert a flat floating `[H, W, 3]` buffer to unsigned samples
pub fn to_unsigned<F, U>(data: &[F], width: usize, height: usize) -> Result<Vec<U>>
where
    F: FloatSample,
    U: UnsignedSample,
{
    check_len(data.len(), width, height)?;
    debug!(width, height, max = U::MAX_VALUE, "floating to unsigned");
    Ok(quantize_all(data))
}

fn normalize_all<U: UnsignedSample, F: FloatSample>(data: &[U]) -> Vec<F> {
    let mut out = vec![F::zeroed(); data.len()];
    parallel::zip_for_each(data, &mut out, CHUNK_SAMPLES, |s, d| {
        simd::normalize_batch(s, d)
    });
    out
}

fn quantize_all<F: FloatSample, U: UnsignedSample>(data: &[F]) -> Vec<U> {
    let mut out = vec![U::zeroed(); data.len()];
    parallel::zip_for_each(data, &mut out, CHUNK_SAMPLES, |s, d| {
        simd::quantize_batch(s, d)
    });
    out
}

impl<U: UnsignedSample> Image<U> {
    /// Normalized floating copy of this image
    pub fn to_floating<F: FloatSample>(&self) -> Image<F> {
        debug!(
            width = self.width(),
            height = self.height(),
            "image to floating"
        );
        Image::from_parts(normalize_all(self.as_slice()), self.width(), self.height())
    }
}

impl<F: FloatSample> Image<F> {
    /// Clipped, rounded unsigned copy of this image
    pub fn to_unsigned<U: UnsignedSample>(&self) -> Image<U> {
        debug!(
            width = self.width(),
            height = self.height(),
            "image to unsigned"
        );
        Image::from_parts(quantize_all(self.as_slice()), self.width(), self.height())
    }
}
