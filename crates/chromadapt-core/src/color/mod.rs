//! Color space types
//!
//! This module provides:
//! - CIE XYZ coordinates
//! - Illuminant white points and presets
//! - RGB working spaces and their conversion matrices

pub mod illuminant;
pub mod working_space;
pub mod xyz;

pub use illuminant::{D50, D55, D65, D75, Illuminant};
pub use working_space::WorkingSpace;
pub use xyz::Xyz;
