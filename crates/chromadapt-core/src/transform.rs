//! RGB ↔ XYZ transforms
//!
//! # Transform Pipeline
//!
//! ```text
//! to XYZ:    encoded RGB/BGR → sRGB decode → matrix → XYZ
//! from XYZ:  XYZ → matrix → sRGB encode → encoded RGB/BGR
//! ```
//!
//! Channel order is folded into the matrix, so BGR costs nothing extra.
//! Nothing is clamped: out-of-gamut values pass through unchanged.

use tracing::debug;

use crate::color::WorkingSpace;
use crate::image::sample::{FloatSample, pixel_from_f64, pixel_to_f64};
use crate::image::{Image, Pixels, PixelsMut, map_pixels_into, pixel_map, pixel_map_in_place};
use crate::math::Matrix3x3;
use crate::types::{ChannelOrder, ConversionDirection};
use crate::Result;

/// A per-pixel conversion between a working space and XYZ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTransform {
    space: WorkingSpace,
    direction: ConversionDirection,
    order: ChannelOrder,
    matrix: &'static Matrix3x3,
}

impl ColorTransform {
    /// Select the transform for a working space, direction and channel order
    pub const fn new(space: WorkingSpace, direction: ConversionDirection, order: ChannelOrder) -> Self {
        Self {
            space,
            direction,
            order,
            matrix: space.matrix(direction, order),
        }
    }

    /// sRGB → XYZ
    pub const fn to_xyz(order: ChannelOrder) -> Self {
        Self::new(WorkingSpace::Srgb, ConversionDirection::ToXyz, order)
    }

    /// XYZ → sRGB
    pub const fn from_xyz(order: ChannelOrder) -> Self {
        Self::new(WorkingSpace::Srgb, ConversionDirection::FromXyz, order)
    }

    pub fn space(&self) -> WorkingSpace {
        self.space
    }

    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// The 3x3 matrix this transform applies
    pub fn matrix(&self) -> &'static Matrix3x3 {
        self.matrix
    }

    /// The transform going the other way
    pub fn inverse(&self) -> Self {
        Self::new(self.space, self.direction.inverse(), self.order)
    }

    /// Transform one pixel
    #[inline]
    pub fn apply_pixel(&self, p: [f64; 3]) -> [f64; 3] {
        match self.direction {
            ConversionDirection::ToXyz => {
                let linear = [
                    self.space.decode(p[0]),
                    self.space.decode(p[1]),
                    self.space.decode(p[2]),
                ];
                self.matrix.multiply_vec(linear)
            }
            ConversionDirection::FromXyz => {
                let linear = self.matrix.multiply_vec(p);
                [
                    self.space.encode(linear[0]),
                    self.space.encode(linear[1]),
                    self.space.encode(linear[2]),
                ]
            }
        }
    }

    #[inline]
    fn apply_sample_pixel<F: FloatSample>(&self, p: [F; 3]) -> [F; 3] {
        pixel_from_f64(self.apply_pixel(pixel_to_f64(p)))
    }

    /// Transform an image into a new buffer
    pub fn apply<F: FloatSample>(&self, image: &Image<F>) -> Image<F> {
        debug!(
            width = image.width(),
            height = image.height(),
            direction = ?self.direction,
            order = ?self.order,
            space = self.space.name(),
            "color transform"
        );
        let t = *self;
        pixel_map(image, move |p| t.apply_sample_pixel(p))
    }

    /// Transform an owned image in place
    pub fn apply_in_place<F: FloatSample>(&self, image: &mut Image<F>) {
        debug!(
            width = image.width(),
            height = image.height(),
            direction = ?self.direction,
            order = ?self.order,
            "color transform in place"
        );
        let t = *self;
        pixel_map_in_place(image, move |p| t.apply_sample_pixel(p));
    }

    /// Transform `src` into a caller-provided view of the same shape
    pub fn apply_into<F: FloatSample>(&self, src: Pixels<'_, F>, dst: PixelsMut<'_, F>) -> Result<()> {
        let t = *self;
        map_pixels_into(src, dst, move |p| t.apply_sample_pixel(p))
    }
}

/// Encoded sRGB image → XYZ image
pub fn rgb_to_xyz<F: FloatSample>(image: &Image<F>) -> Image<F> {
    ColorTransform::to_xyz(ChannelOrder::Rgb).apply(image)
}

/// Encoded sBGR image → XYZ image
pub fn bgr_to_xyz<F: FloatSample>(image: &Image<F>) -> Image<F> {
    ColorTransform::to_xyz(ChannelOrder::Bgr).apply(image)
}

/// XYZ image → encoded sRGB image
pub fn xyz_to_rgb<F: FloatSample>(image: &Image<F>) -> Image<F> {
    ColorTransform::from_xyz(ChannelOrder::Rgb).apply(image)
}

/// XYZ image → encoded sBGR image
pub fn xyz_to_bgr<F: FloatSample>(image: &Image<F>) -> Image<F> {
    ColorTransform::from_xyz(ChannelOrder::Bgr).apply(image)
}

/// Encoded sRGB pixel → XYZ
#[inline]
pub fn rgb_to_xyz_pixel(rgb: [f64; 3]) -> [f64; 3] {
    ColorTransform::to_xyz(ChannelOrder::Rgb).apply_pixel(rgb)
}

/// Encoded sBGR pixel → XYZ
#[inline]
pub fn bgr_to_xyz_pixel(bgr: [f64; 3]) -> [f64; 3] {
    ColorTransform::to_xyz(ChannelOrder::Bgr).apply_pixel(bgr)
}

/// XYZ → encoded sRGB pixel
#[inline]
pub fn xyz_to_rgb_pixel(xyz: [f64; 3]) -> [f64; 3] {
    ColorTransform::from_xyz(ChannelOrder::Rgb).apply_pixel(xyz)
}

/// XYZ → encoded sBGR pixel
#[inline]
pub fn xyz_to_bgr_pixel(xyz: [f64; 3]) -> [f64; 3] {
    ColorTransform::from_xyz(ChannelOrder::Bgr).apply_pixel(xyz)
}
