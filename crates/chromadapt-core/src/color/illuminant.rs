//! CIE Standard Illuminant White Points
//!
//! White points are CIE XYZ coordinates (2° observer) normalized to Y = 1.0.
//! An [`Illuminant`] can also be built from measured values, e.g. a
//! gray-world estimate.

use crate::color::Xyz;
use crate::{Error, Result};

/// An XYZ white point
///
/// Always holds finite components. Caller data goes through
/// [`from_xyz`](Self::from_xyz) or the `TryFrom` impls; only the presets
/// below are built unchecked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illuminant {
    xyz: Xyz,
}

impl Illuminant {
    /// Create an illuminant from trusted constants
    pub(crate) const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            xyz: Xyz::new(x, y, z),
        }
    }

    /// Create an illuminant from caller-supplied XYZ, rejecting NaN/inf
    pub fn from_xyz(xyz: Xyz) -> Result<Self> {
        for (channel, value) in xyz.to_array().into_iter().enumerate() {
            if !value.is_finite() {
                return Err(Error::NonFiniteIlluminant { channel, value });
            }
        }
        Ok(Self { xyz })
    }

    /// Create an illuminant from a vector that must hold exactly 3 components
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let arr: [f64; 3] = values
            .try_into()
            .map_err(|_| Error::IlluminantLength(values.len()))?;
        Self::from_xyz(Xyz::from_array(arr))
    }

    /// XYZ coordinates
    #[inline]
    pub const fn xyz(&self) -> Xyz {
        self.xyz
    }

    /// XYZ coordinates as an array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        self.xyz.to_array()
    }

    /// Chromaticity coordinates (x, y)
    pub fn chromaticity(&self) -> (f64, f64) {
        self.xyz.chromaticity()
    }

    /// Same chromaticity scaled to Y = 1.0
    pub fn normalized(&self) -> Result<Self> {
        let xyz = self
            .xyz
            .normalize()
            .ok_or(Error::DegenerateIlluminant { channel: 1 })?;
        Self::from_xyz(xyz)
    }

    /// Check if approximately equal to another white point
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.xyz.approx_eq(&other.xyz, epsilon)
    }
}

impl TryFrom<&[f64]> for Illuminant {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl TryFrom<[f64; 3]> for Illuminant {
    type Error = Error;

    fn try_from(values: [f64; 3]) -> Result<Self> {
        Self::from_xyz(Xyz::from_array(values))
    }
}

impl From<Illuminant> for Xyz {
    fn from(illuminant: Illuminant) -> Self {
        illuminant.xyz
    }
}

// ============================================================================
// Standard CIE Illuminants
// ============================================================================

/// CIE Standard Illuminant D50 (~5003K)
pub const D50: Illuminant = Illuminant::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D55 (~5500K)
pub const D55: Illuminant = Illuminant::new(0.95682, 1.0, 0.92149);

/// CIE Standard Illuminant D65 (~6504K)
///
/// Reference white of sRGB.
pub const D65: Illuminant = Illuminant::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D75 (~7500K)
pub const D75: Illuminant = Illuminant::new(0.94972, 1.0, 1.22638);

/// CIE Standard Illuminant A (incandescent, ~2856K)
pub const A: Illuminant = Illuminant::new(1.09850, 1.0, 0.35585);

/// CIE Standard Illuminant E (equal energy)
pub const E: Illuminant = Illuminant::new(1.0, 1.0, 1.0);

/// CIE Standard Illuminant F2 (cool white fluorescent)
pub const F2: Illuminant = Illuminant::new(0.99187, 1.0, 0.67395);

/// CIE Standard Illuminant F7 (broadband daylight fluorescent)
pub const F7: Illuminant = Illuminant::new(0.95044, 1.0, 1.08755);

/// CIE Standard Illuminant F11 (narrow band white fluorescent)
pub const F11: Illuminant = Illuminant::new(1.00966, 1.0, 0.64370);

/// Get a standard illuminant by name
pub fn from_name(name: &str) -> Option<Illuminant> {
    match name.to_ascii_uppercase().as_str() {
        "D50" => Some(D50),
        "D55" => Some(D55),
        "D65" => Some(D65),
        "D75" => Some(D75),
        "A" => Some(A),
        "E" => Some(E),
        "F2" => Some(F2),
        "F7" => Some(F7),
        "F11" => Some(F11),
        _ => None,
    }
}
