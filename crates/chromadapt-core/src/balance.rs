//! Unsigned-image white balancing
//!
//! These run the whole flow on an 8/16/32-bit buffer: normalize, adapt in
//! f64, quantize back to the input sample type. The gray-world variant
//! takes the source white from the image itself.

use tracing::debug;

use crate::adapt::{AdaptOptions, AdaptationTransform, adapt_encoded_in_place};
use crate::color::{Illuminant, Xyz};
use crate::image::sample::{FloatSample, UnsignedSample};
use crate::image::{Image, image_mean};
use crate::Result;

/// Estimate the scene illuminant as the mean XYZ of the image, scaled to Y = 1
///
/// Fails with [`Error::EmptyImage`](crate::Error::EmptyImage) for an image
/// without pixels and [`Error::DegenerateIlluminant`](crate::Error::DegenerateIlluminant)
/// when the mean has zero luminance.
pub fn gray_world_illuminant<F: FloatSample>(image: &Image<F>, options: &AdaptOptions) -> Result<Illuminant> {
    let xyz = options.to_xyz().apply(image);
    let mean = image_mean(&xyz)?;
    let estimate = Illuminant::from_xyz(Xyz::from_array(mean))?.normalized()?;
    debug!(
        estimate = ?estimate.to_array(),
        chromaticity = ?estimate.chromaticity(),
        "gray-world illuminant"
    );
    Ok(estimate)
}

/// Adapt an unsigned image between two known white points
pub fn adapt_unsigned<U: UnsignedSample>(
    image: &Image<U>,
    source: &Illuminant,
    destination: &Illuminant,
    options: &AdaptOptions,
) -> Result<Image<U>> {
    let adaptation = AdaptationTransform::new(*source, *destination, options.method)?;
    let mut floats = image.to_floating::<f64>();
    adapt_encoded_in_place(&mut floats, &adaptation, options);
    Ok(floats.to_unsigned())
}

/// White-balance an unsigned image to `destination` using the gray-world estimate
pub fn gray_world_balance<U: UnsignedSample>(
    image: &Image<U>,
    destination: &Illuminant,
    options: &AdaptOptions,
) -> Result<Image<U>> {
    let mut floats = image.to_floating::<f64>();
    let source = gray_world_illuminant(&floats, options)?;
    let adaptation = AdaptationTransform::new(source, *destination, options.method)?;
    adapt_encoded_in_place(&mut floats, &adaptation, options);
    Ok(floats.to_unsigned())
}
