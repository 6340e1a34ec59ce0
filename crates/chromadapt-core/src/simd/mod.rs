//! SIMD-dispatched batch kernels
//!
//! Kernels are compiled with `multiversion` for several instruction sets
//! and dispatch to the best available one at runtime. The scalar fallback
//! is always available.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON

mod batch;

pub use batch::{
    map_pixels_batch, map_pixels_in_place_batch, normalize, normalize_batch, quantize,
    quantize_batch, sum_pixels_batch,
};

/// Get a description of the active SIMD features
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}
