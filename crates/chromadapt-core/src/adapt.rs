//! Image chromatic adaptation
//!
//! ```text
//! RGB → [to XYZ] → [T · xyz per pixel] → [from XYZ] → RGB
//! ```
//!
//! `T` is computed once per call from the two white points; a degenerate
//! source white fails before any pixel is touched.

use tracing::{debug, trace};

use crate::color::{Illuminant, WorkingSpace};
use crate::image::sample::{FloatSample, pixel_from_f64, pixel_to_f64};
use crate::image::{Image, pixel_map_in_place};
use crate::math::{ChromAdaptMethod, Matrix3x3, adaptation_matrix};
use crate::transform::ColorTransform;
use crate::types::{ChannelOrder, ConversionDirection};
use crate::Result;

/// Options for [`chrom_adapt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AdaptOptions {
    /// RGB working space of the image
    pub working_space: WorkingSpace,
    /// Cone-response model
    pub method: ChromAdaptMethod,
    /// Channel order of the image
    pub order: ChannelOrder,
}

impl AdaptOptions {
    /// sRGB, Bradford, RGB order
    pub const fn new() -> Self {
        Self {
            working_space: WorkingSpace::Srgb,
            method: ChromAdaptMethod::Bradford,
            order: ChannelOrder::Rgb,
        }
    }

    pub const fn with_method(mut self, method: ChromAdaptMethod) -> Self {
        self.method = method;
        self
    }

    pub const fn with_order(mut self, order: ChannelOrder) -> Self {
        self.order = order;
        self
    }

    pub const fn with_working_space(mut self, working_space: WorkingSpace) -> Self {
        self.working_space = working_space;
        self
    }

    pub(crate) fn to_xyz(&self) -> ColorTransform {
        ColorTransform::new(self.working_space, ConversionDirection::ToXyz, self.order)
    }

    pub(crate) fn from_xyz(&self) -> ColorTransform {
        ColorTransform::new(self.working_space, ConversionDirection::FromXyz, self.order)
    }
}

/// XYZ-domain white point mapping between two illuminants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptationTransform {
    matrix: Matrix3x3,
    source: Illuminant,
    destination: Illuminant,
    method: ChromAdaptMethod,
}

impl AdaptationTransform {
    /// Compose `A⁻¹ · diag(A·Wd / A·Ws) · A`
    pub fn new(source: Illuminant, destination: Illuminant, method: ChromAdaptMethod) -> Result<Self> {
        let matrix = adaptation_matrix(&source, &destination, method)?;
        trace!(?method, ?matrix, "adaptation matrix");
        Ok(Self {
            matrix,
            source,
            destination,
            method,
        })
    }

    pub fn matrix(&self) -> &Matrix3x3 {
        &self.matrix
    }

    pub fn source(&self) -> Illuminant {
        self.source
    }

    pub fn destination(&self) -> Illuminant {
        self.destination
    }

    pub fn method(&self) -> ChromAdaptMethod {
        self.method
    }

    /// True if the transform leaves XYZ unchanged within `epsilon`
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.matrix.is_identity(epsilon)
    }

    /// Adapt one XYZ value
    #[inline]
    pub fn apply(&self, xyz: [f64; 3]) -> [f64; 3] {
        self.matrix.multiply_vec(xyz)
    }

    /// Adapt every pixel of an owned XYZ image
    pub fn apply_in_place<F: FloatSample>(&self, xyz: &mut Image<F>) {
        let matrix = self.matrix;
        pixel_map_in_place(xyz, move |p| {
            pixel_from_f64(matrix.multiply_vec(pixel_to_f64(p)))
        });
    }
}

/// Adapt an encoded RGB/BGR image from `source` white to `destination` white
pub fn chrom_adapt<F: FloatSample>(
    image: &Image<F>,
    source: &Illuminant,
    destination: &Illuminant,
    options: &AdaptOptions,
) -> Result<Image<F>> {
    let adaptation = AdaptationTransform::new(*source, *destination, options.method)?;
    debug!(
        width = image.width(),
        height = image.height(),
        method = ?options.method,
        order = ?options.order,
        source = ?source.to_array(),
        destination = ?destination.to_array(),
        "chromatic adaptation"
    );

    let mut xyz = options.to_xyz().apply(image);
    adaptation.apply_in_place(&mut xyz);
    options.from_xyz().apply_in_place(&mut xyz);
    Ok(xyz)
}

/// Adapt an owned image in place
pub fn chrom_adapt_in_place<F: FloatSample>(
    image: &mut Image<F>,
    source: &Illuminant,
    destination: &Illuminant,
    options: &AdaptOptions,
) -> Result<()> {
    let adaptation = AdaptationTransform::new(*source, *destination, options.method)?;
    debug!(
        width = image.width(),
        height = image.height(),
        method = ?options.method,
        "chromatic adaptation in place"
    );

    adapt_encoded_in_place(image, &adaptation, options);
    Ok(())
}

/// Decode, adapt and re-encode every pixel of an owned RGB/BGR image
pub(crate) fn adapt_encoded_in_place<F: FloatSample>(
    image: &mut Image<F>,
    adaptation: &AdaptationTransform,
    options: &AdaptOptions,
) {
    let to_xyz = options.to_xyz();
    let from_xyz = options.from_xyz();
    let matrix = adaptation.matrix;
    pixel_map_in_place(image, move |p| {
        let xyz = matrix.multiply_vec(to_xyz.apply_pixel(pixel_to_f64(p)));
        pixel_from_f64(from_xyz.apply_pixel(xyz))
    });
}
