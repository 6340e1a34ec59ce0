//! CIE XYZ Color Space
//!
//! XYZ is the connection space between device RGB and chromatic adaptation.

/// CIE 1931 XYZ color coordinates
///
/// Y represents luminance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Get the luminance (Y component)
    #[inline]
    pub const fn luminance(&self) -> f64 {
        self.y
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Normalize so Y = 1.0
    ///
    /// Returns None when Y is zero or not finite.
    #[inline]
    pub fn normalize(&self) -> Option<Self> {
        if self.y != 0.0 && self.y.is_finite() {
            Some(self.scale(1.0 / self.y))
        } else {
            None
        }
    }

    /// Chromaticity coordinates (x, y)
    #[inline]
    pub fn chromaticity(&self) -> (f64, f64) {
        let sum = self.x + self.y + self.z;
        if sum > 0.0 {
            (self.x / sum, self.y / sum)
        } else {
            (0.0, 0.0)
        }
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}
