//! RGB working spaces and their conversion matrices
//!
//! Matrices are `const` tables; the BGR variants are derived at compile
//! time by reversing columns (to XYZ) or rows (from XYZ).

use crate::color::illuminant::{self, Illuminant};
use crate::math::Matrix3x3;
use crate::math::gamma::{srgb_decode, srgb_encode};
use crate::types::{ChannelOrder, ConversionDirection};

/// sRGB to XYZ matrix (D65 white point)
///
/// From IEC 61966-2-1:1999
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ to sRGB matrix (D65 white point)
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// sRGB to XYZ for BGR-ordered input
pub const SBGR_TO_XYZ: Matrix3x3 = SRGB_TO_XYZ.reverse_columns();

/// XYZ to sRGB producing BGR-ordered output
pub const XYZ_TO_SBGR: Matrix3x3 = XYZ_TO_SRGB.reverse_rows();

/// RGB working space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum WorkingSpace {
    /// sRGB with D65 reference white
    #[default]
    Srgb,
}

impl WorkingSpace {
    /// Conversion matrix for a direction and channel order
    pub const fn matrix(self, direction: ConversionDirection, order: ChannelOrder) -> &'static Matrix3x3 {
        match (self, direction, order) {
            (WorkingSpace::Srgb, ConversionDirection::ToXyz, ChannelOrder::Rgb) => &SRGB_TO_XYZ,
            (WorkingSpace::Srgb, ConversionDirection::ToXyz, ChannelOrder::Bgr) => &SBGR_TO_XYZ,
            (WorkingSpace::Srgb, ConversionDirection::FromXyz, ChannelOrder::Rgb) => &XYZ_TO_SRGB,
            (WorkingSpace::Srgb, ConversionDirection::FromXyz, ChannelOrder::Bgr) => &XYZ_TO_SBGR,
        }
    }

    /// Reference white the matrices are relative to
    pub const fn reference_white(self) -> Illuminant {
        match self {
            WorkingSpace::Srgb => illuminant::D65,
        }
    }

    /// Encoded → linear transfer function
    #[inline]
    pub fn decode(self, encoded: f64) -> f64 {
        match self {
            WorkingSpace::Srgb => srgb_decode(encoded),
        }
    }

    /// Linear → encoded transfer function
    #[inline]
    pub fn encode(self, linear: f64) -> f64 {
        match self {
            WorkingSpace::Srgb => srgb_encode(linear),
        }
    }

    /// Name of the working space
    pub fn name(self) -> &'static str {
        match self {
            WorkingSpace::Srgb => "sRGB",
        }
    }
}
