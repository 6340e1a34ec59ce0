//! Public API enums shared across the engines

/// Interleaving order of the three color channels in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelOrder {
    /// Red, green, blue
    #[default]
    Rgb,
    /// Blue, green, red (OpenCV and Windows DIB layout)
    Bgr,
}

impl ChannelOrder {
    /// Reorder a pixel between this order and RGB (the operation is its own inverse)
    #[inline]
    pub fn to_rgb<T: Copy>(self, p: [T; 3]) -> [T; 3] {
        match self {
            ChannelOrder::Rgb => p,
            ChannelOrder::Bgr => [p[2], p[1], p[0]],
        }
    }
}

/// Which way a device ↔ XYZ conversion runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionDirection {
    /// Encoded device values → CIE XYZ
    ToXyz,
    /// CIE XYZ → encoded device values
    FromXyz,
}

impl ConversionDirection {
    /// The opposite direction
    pub fn inverse(self) -> Self {
        match self {
            ConversionDirection::ToXyz => ConversionDirection::FromXyz,
            ConversionDirection::FromXyz => ConversionDirection::ToXyz,
        }
    }
}
