//! Zero-copy pixel views
//!
//! A packed `[H, W, 3]` sample buffer is reinterpreted as `H * W` pixel
//! windows of type `[T; 3]` through a checked `bytemuck` slice cast. The
//! views only carry the pixel slice and the image shape: no allocation, no
//! elementwise work. [`Pixels::as_flat`] goes back the other way.

use bytemuck::Pod;
use std::slice::{Iter, IterMut};

use crate::image::{CHANNELS, buffer_len, check_len};
use crate::{Error, Result};

// Sizes are reported in samples, like `check_len`
fn check_pixel_count(len: usize, width: usize, height: usize) -> Result<()> {
    let expected = buffer_len(width, height)?;
    if len.checked_mul(CHANNELS) != Some(expected) {
        return Err(Error::BufferSize {
            expected,
            actual: len.saturating_mul(CHANNELS),
        });
    }
    Ok(())
}

/// Read-only view of a packed buffer as pixels
#[derive(Debug, Clone, Copy)]
pub struct Pixels<'a, T> {
    pixels: &'a [[T; 3]],
    width: usize,
    height: usize,
}

impl<'a, T: Pod> Pixels<'a, T> {
    /// View a flat `[H, W, 3]` buffer as `H * W` pixels
    pub fn new(buffer: &'a [T], width: usize, height: usize) -> Result<Self> {
        check_len(buffer.len(), width, height)?;
        Ok(Self::from_parts(bytemuck::cast_slice(buffer), width, height))
    }

    /// Attach an explicit shape to a pixel sequence
    pub fn from_pixels(pixels: &'a [[T; 3]], width: usize, height: usize) -> Result<Self> {
        check_pixel_count(pixels.len(), width, height)?;
        Ok(Self::from_parts(pixels, width, height))
    }

    pub(crate) fn from_parts(pixels: &'a [[T; 3]], width: usize, height: usize) -> Self {
        Self {
            pixels,
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

    /// Distance between vertically adjacent pixels, in pixels
    #[inline]
    pub fn stride(&self) -> usize {
        self.width
    }

    /// Number of pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when there are no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at a linear index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a [T; 3]> {
        self.pixels.get(index)
    }

    /// Pixel at (x, y)
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> Option<&'a [T; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.stride() + x)
    }

    /// Row `y`
    pub fn row(&self, y: usize) -> Option<&'a [[T; 3]]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride();
        self.pixels.get(start..start + self.width)
    }

    /// Iterate rows top to bottom
    ///
    /// Always yields `height` rows, empty ones when the width is zero.
    pub fn rows(
        &self,
    ) -> impl ExactSizeIterator<Item = &'a [[T; 3]]> + DoubleEndedIterator + use<'a, T> {
        let (pixels, width) = (self.pixels, self.width);
        (0..self.height).map(move |y| {
            let start = y * width;
            pixels.get(start..start + width).unwrap_or_default()
        })
    }

    /// Iterate pixels in storage order
    pub fn iter(&self) -> Iter<'a, [T; 3]> {
        self.pixels.iter()
    }

    /// The pixel sequence
    #[inline]
    pub fn as_array(&self) -> &'a [[T; 3]] {
        self.pixels
    }

    /// The underlying flat `[H, W, 3]` buffer
    #[inline]
    pub fn as_flat(&self) -> &'a [T] {
        bytemuck::cast_slice(self.pixels)
    }
}

impl<'a, T: Pod> IntoIterator for Pixels<'a, T> {
    type Item = &'a [T; 3];
    type IntoIter = Iter<'a, [T; 3]>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

/// Mutable view of a packed buffer as pixels
#[derive(Debug)]
pub struct PixelsMut<'a, T> {
    pixels: &'a mut [[T; 3]],
    width: usize,
    height: usize,
}

impl<'a, T: Pod> PixelsMut<'a, T> {
    /// View a flat mutable `[H, W, 3]` buffer as `H * W` pixels
    pub fn new(buffer: &'a mut [T], width: usize, height: usize) -> Result<Self> {
        check_len(buffer.len(), width, height)?;
        Ok(Self::from_parts(
            bytemuck::cast_slice_mut(buffer),
            width,
            height,
        ))
    }

    /// Attach an explicit shape to a mutable pixel sequence
    pub fn from_pixels(pixels: &'a mut [[T; 3]], width: usize, height: usize) -> Result<Self> {
        check_pixel_count(pixels.len(), width, height)?;
        Ok(Self::from_parts(pixels, width, height))
    }

    pub(crate) fn from_parts(pixels: &'a mut [[T; 3]], width: usize, height: usize) -> Self {
        Self {
            pixels,
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

    /// Number of pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when there are no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Reborrow as a read-only view
    pub fn as_pixels(&self) -> Pixels<'_, T> {
        Pixels::from_parts(self.pixels, self.width, self.height)
    }

    /// Pixel at a linear index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&[T; 3]> {
        self.pixels.get(index)
    }

    /// Mutable pixel at a linear index
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [T; 3]> {
        self.pixels.get_mut(index)
    }

    /// Mutable pixel at (x, y)
    pub fn at_mut(&mut self, x: usize, y: usize) -> Option<&mut [T; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get_mut(y * self.width + x)
    }

    /// Mutable row `y`
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [[T; 3]]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.pixels.get_mut(start..start + self.width)
    }

    /// Iterate mutable rows top to bottom
    ///
    /// Always yields `height` rows, empty ones when the width is zero.
    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [[T; 3]]> + '_ {
        let mut chunks = self.pixels.chunks_exact_mut(self.width.max(1));
        (0..self.height).map(move |_| chunks.next().unwrap_or_default())
    }

    /// Iterate mutable pixels in storage order
    pub fn iter_mut(&mut self) -> IterMut<'_, [T; 3]> {
        self.pixels.iter_mut()
    }

    /// The mutable pixel sequence
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [[T; 3]] {
        self.pixels
    }

    /// Consume the view, keeping the full borrow
    #[inline]
    pub fn into_array_mut(self) -> &'a mut [[T; 3]] {
        self.pixels
    }

    /// The underlying mutable flat buffer
    #[inline]
    pub fn as_flat_mut(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(self.pixels)
    }
}
