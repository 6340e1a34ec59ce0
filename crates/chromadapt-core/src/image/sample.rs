//! Channel sample types
//!
//! Unsigned samples carry a declared maximum that maps to 1.0; floating
//! samples are used as-is. All arithmetic happens in f64.

use bytemuck::Pod;
use std::fmt::Debug;

/// Any element type an [`Image`](crate::Image) can hold
pub trait Sample: Pod + Send + Sync + Debug + PartialEq + 'static {
    /// Widen to f64 without scaling
    fn to_f64(self) -> f64;
}

/// Unsigned integer sample with a fixed full-scale value
pub trait UnsignedSample: Sample {
    /// Full-scale value, mapped to 1.0
    const MAX_VALUE: f64;

    /// Narrow an already clipped and rounded value in `[0, MAX_VALUE]`
    fn from_scaled(v: f64) -> Self;
}

/// Floating-point sample, nominally in [0, 1] but never clamped
pub trait FloatSample: Sample {
    /// Narrow from f64
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }

            impl UnsignedSample for $t {
                const MAX_VALUE: f64 = <$t>::MAX as f64;

                #[inline]
                fn from_scaled(v: f64) -> Self {
                    // `as` saturates and maps NaN to 0
                    v as $t
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32);

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl FloatSample for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl FloatSample for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

/// Widen a pixel to f64
#[inline]
pub fn pixel_to_f64<T: Sample>(p: [T; 3]) -> [f64; 3] {
    [p[0].to_f64(), p[1].to_f64(), p[2].to_f64()]
}

/// Narrow an f64 pixel to a floating sample type
#[inline]
pub fn pixel_from_f64<F: FloatSample>(p: [f64; 3]) -> [F; 3] {
    [F::from_f64(p[0]), F::from_f64(p[1]), F::from_f64(p[2])]
}
