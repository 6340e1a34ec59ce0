//! # chromadapt - sRGB/XYZ conversion and chromatic adaptation
//!
//! Pixel-level color operations for packed 3-channel images:
//!
//! - sRGB (and sBGR) ↔ CIE XYZ with exact sRGB companding
//! - Bradford, von Kries and XYZ-scaling chromatic adaptation
//! - Gray-world illuminant estimation and white balancing
//! - Unsigned ↔ floating sample conversion with saturation
//!
//! Images are row-major, channel-interleaved `[H, W, 3]` buffers. Pixels
//! are exposed as `[T; 3]` windows into that storage, so per-pixel work
//! never allocates.
//!
//! ## Quick Start
//!
//! ```no_run
//! use chromadapt_core::{AdaptOptions, Image, chrom_adapt, illuminant};
//!
//! // 8-bit RGB buffer from a decoder
//! let raw = vec![200u8, 150, 90, 40, 60, 80];
//! let image = Image::from_vec(raw, 2, 1)?;
//!
//! // Re-render a D65 capture as if lit by illuminant A
//! let floats = image.to_floating::<f32>();
//! let adapted = chrom_adapt(
//!     &floats,
//!     &illuminant::D65,
//!     &illuminant::A,
//!     &AdaptOptions::default(),
//! )?;
//! let out: Image<u8> = adapted.to_unsigned();
//! # Ok::<(), chromadapt_core::Error>(())
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): split pixel work across rayon workers

pub mod adapt;
pub mod balance;
pub mod color;
pub mod error;
pub mod image;
pub mod math;
mod parallel;
pub mod simd;
pub mod transform;
pub mod types;

pub use adapt::{AdaptOptions, AdaptationTransform, chrom_adapt, chrom_adapt_in_place};
pub use balance::{adapt_unsigned, gray_world_balance, gray_world_illuminant};
pub use color::illuminant;
pub use color::{Illuminant, WorkingSpace, Xyz};
pub use error::{Error, Result};
pub use image::{
    FloatSample, Image, Pixels, PixelsMut, Sample, UnsignedSample, image_mean, map_pixels_into,
    pixel_map, pixel_map_in_place, pixels_mean, to_floating, to_unsigned,
};
pub use math::{ChromAdaptMethod, Matrix3x3, adaptation_matrix, bradford_matrix};
pub use transform::{
    ColorTransform, bgr_to_xyz, bgr_to_xyz_pixel, rgb_to_xyz, rgb_to_xyz_pixel, xyz_to_bgr,
    xyz_to_bgr_pixel, xyz_to_rgb, xyz_to_rgb_pixel,
};
pub use types::{ChannelOrder, ConversionDirection};

/// Version of chromadapt
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
