//! sRGB companding
//!
//! IEC 61966-2-1 transfer function. Neither direction clamps: values that
//! leave [0, 1] after adaptation keep flowing until the unsigned conversion
//! saturates them.

/// Encoded values at or below this use the linear segment when decoding
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Linear values at or below this use the linear segment when encoding
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

const LINEAR_SLOPE: f64 = 12.92;
const POWER_OFFSET: f64 = 0.055;
const POWER_SCALE: f64 = 1.055;
const POWER_EXP: f64 = 2.4;

/// sRGB gamma decode (encoded → linear)
#[inline]
pub fn srgb_decode(encoded: f64) -> f64 {
    if encoded <= SRGB_DECODE_THRESHOLD {
        encoded / LINEAR_SLOPE
    } else {
        ((encoded + POWER_OFFSET) / POWER_SCALE).powf(POWER_EXP)
    }
}

/// sRGB gamma encode (linear → encoded)
#[inline]
pub fn srgb_encode(linear: f64) -> f64 {
    if linear <= SRGB_ENCODE_THRESHOLD {
        linear * LINEAR_SLOPE
    } else {
        POWER_SCALE * linear.powf(1.0 / POWER_EXP) - POWER_OFFSET
    }
}
