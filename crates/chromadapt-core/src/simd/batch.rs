//! Batch kernels over packed samples and pixels
//!
//! Each kernel processes one contiguous chunk; callers split the image
//! into chunks (see `parallel`) and invoke the kernel per chunk.

use multiversion::multiversion;

use crate::image::sample::{FloatSample, Sample, UnsignedSample};

/// Unsigned sample to `[0, 1]` float
#[inline(always)]
pub fn normalize<U: UnsignedSample, F: FloatSample>(v: U) -> F {
    F::from_f64(v.to_f64() / U::MAX_VALUE)
}

/// Float in nominal `[0, 1]` to unsigned, clipping first
///
/// NaN quantizes to 0.
#[inline(always)]
pub fn quantize<U: UnsignedSample>(f: f64) -> U {
    if f.is_nan() {
        return U::from_scaled(0.0);
    }
    U::from_scaled((f.clamp(0.0, 1.0) * U::MAX_VALUE).round())
}

/// Normalize a buffer of unsigned samples into floats
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn normalize_batch<U, F>(src: &[U], dst: &mut [F])
where
    U: UnsignedSample,
    F: FloatSample,
{
    assert_eq!(src.len(), dst.len());

    for (s, d) in src.iter().zip(dst.iter_mut()) {
        *d = normalize(*s);
    }
}

/// Clip, scale and round a buffer of floats into unsigned samples
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn quantize_batch<F, U>(src: &[F], dst: &mut [U])
where
    F: FloatSample,
    U: UnsignedSample,
{
    assert_eq!(src.len(), dst.len());

    for (s, d) in src.iter().zip(dst.iter_mut()) {
        *d = quantize(s.to_f64());
    }
}

/// Apply a per-pixel function from `src` into `dst`
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn map_pixels_batch<T, U, Func>(src: &[[T; 3]], dst: &mut [[U; 3]], f: &Func)
where
    T: Copy,
    Func: Fn([T; 3]) -> [U; 3],
{
    assert_eq!(src.len(), dst.len());

    for (s, d) in src.iter().zip(dst.iter_mut()) {
        *d = f(*s);
    }
}

/// Apply a per-pixel function in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn map_pixels_in_place_batch<T, Func>(data: &mut [[T; 3]], f: &Func)
where
    T: Copy,
    Func: Fn([T; 3]) -> [T; 3],
{
    for p in data.iter_mut() {
        *p = f(*p);
    }
}

/// Per-channel sum of a pixel chunk, accumulated in f64
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn sum_pixels_batch<T: Sample>(src: &[[T; 3]]) -> [f64; 3] {
    let mut sum = [0.0f64; 3];
    for p in src {
        sum[0] += p[0].to_f64();
        sum[1] += p[1].to_f64();
        sum[2] += p[2].to_f64();
    }
    sum
}
