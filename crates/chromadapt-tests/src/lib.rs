//! # chromadapt-tests
//!
//! Cross-checking harness for chromadapt.
//!
//! This crate provides:
//! - Deterministic test images (gradients, cube corners, seeded noise, color casts)
//! - Error statistics and CIEDE2000 comparison of 8-bit results
//! - Reference conversions and adaptations computed with `palette`
//!
//! ## Test Categories
//!
//! 1. **Color transforms**: sRGB/sBGR ↔ XYZ against palette, round trips
//! 2. **Adaptation**: matrices and images against palette for every preset
//! 3. **Sample conversion**: unsigned ↔ floating round trips and saturation
//! 4. **Gray world**: statistics and white balancing
//! 5. **Contract errors**: malformed shapes and illuminants

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, ErrorStats, compare_pixels, compare_rgb8};
pub use patterns::{TestPattern, generate_pattern};
