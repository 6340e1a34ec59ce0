//! Mathematical operations for color conversion
//!
//! This module provides foundational math operations used throughout chromadapt:
//! - 3x3 matrix operations for RGB↔XYZ transforms
//! - sRGB companding
//! - Chromatic adaptation (Bradford, von Kries, XYZ scaling)

pub mod chromatic_adaptation;
pub mod gamma;
pub mod matrix;

pub use chromatic_adaptation::{ChromAdaptMethod, adaptation_matrix, bradford_matrix};
pub use gamma::{srgb_decode, srgb_encode};
pub use matrix::Matrix3x3;
