//! Packed 3-channel images
//!
//! An [`Image`] owns a row-major, channel-interleaved buffer of
//! `width * height * 3` samples. The length invariant is checked once at
//! construction, so the views handed out by [`Image::pixels`] and
//! [`Image::pixels_mut`] never fail.

pub mod convert;
pub mod map;
pub mod sample;
pub mod stats;
pub mod view;

pub use convert::{to_floating, to_unsigned};
pub use map::{map_pixels_into, pixel_map, pixel_map_in_place};
pub use sample::{FloatSample, Sample, UnsignedSample};
pub use stats::{image_mean, pixels_mean};
pub use view::{Pixels, PixelsMut};

use crate::{Error, Result};

/// Number of interleaved channels in every image
pub const CHANNELS: usize = 3;

/// Number of samples in a `width x height` image, or an error on overflow
pub fn buffer_len(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(Error::InvalidDimensions { width, height })
}

/// Check that a flat buffer holds exactly `width * height * 3` samples
pub(crate) fn check_len(len: usize, width: usize, height: usize) -> Result<()> {
    let expected = buffer_len(width, height)?;
    if len != expected {
        return Err(Error::BufferSize {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// An owned packed RGB/BGR/XYZ image
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Sample> Image<T> {
    /// Wrap a flat buffer
    pub fn from_vec(data: Vec<T>, width: usize, height: usize) -> Result<Self> {
        check_len(data.len(), width, height)?;
        Ok(Self::from_parts(data, width, height))
    }

    /// Copy a pixel sequence into a new image
    pub fn from_pixels(pixels: &[[T; 3]], width: usize, height: usize) -> Result<Self> {
        let view = Pixels::from_pixels(pixels, width, height)?;
        Ok(Self::from_parts(view.as_flat().to_vec(), width, height))
    }

    /// Zero-filled image
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = buffer_len(width, height)?;
        Ok(Self::from_parts(vec![T::zeroed(); len], width, height))
    }

    /// Image where every pixel is `pixel`
    pub fn filled(width: usize, height: usize, pixel: [T; 3]) -> Result<Self> {
        let len = buffer_len(width, height)?;
        let data = pixel.iter().copied().cycle().take(len).collect();
        Ok(Self::from_parts(data, width, height))
    }

    /// Caller guarantees `data.len() == width * height * 3`
    pub(crate) fn from_parts(data: Vec<T>, width: usize, height: usize) -> Self {
        debug_assert_eq!(Some(data.len()), buffer_len(width, height).ok());
        Self {
            data,
            width,
            height,
        }
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// (width, height)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// True when the image has no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat sample buffer
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable flat sample buffer
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Give the flat buffer back to the caller
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Read-only pixel view over the buffer
    pub fn pixels(&self) -> Pixels<'_, T> {
        Pixels::from_parts(bytemuck::cast_slice(&self.data), self.width, self.height)
    }

    /// Mutable pixel view over the buffer
    pub fn pixels_mut(&mut self) -> PixelsMut<'_, T> {
        PixelsMut::from_parts(
            bytemuck::cast_slice_mut(&mut self.data),
            self.width,
            self.height,
        )
    }

    /// Pixel at (x, y)
    pub fn pixel(&self, x: usize, y: usize) -> Option<[T; 3]> {
        self.pixels().at(x, y).copied()
    }

    /// Error unless `other` has the same width and height
    pub fn ensure_same_shape<U: Sample>(&self, other: &Image<U>) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::ShapeMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }
}
