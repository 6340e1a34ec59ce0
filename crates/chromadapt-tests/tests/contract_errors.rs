//! Caller contract violations surface as errors, never panics

use anyhow::{Context, Result};
use chromadapt_core::{
    AdaptOptions, AdaptationTransform, ChromAdaptMethod, Error, Illuminant, Image, Pixels,
    PixelsMut, Xyz, chrom_adapt, gray_world_balance, gray_world_illuminant, illuminant,
    map_pixels_into, pixels_mean, to_floating, to_unsigned,
};

fn expect_err<T: std::fmt::Debug>(result: chromadapt_core::Result<T>) -> Result<Error> {
    match result {
        Ok(value) => anyhow::bail!("expected an error, got {value:?}"),
        Err(e) => Ok(e),
    }
}

#[test]
fn buffer_length_must_match_dimensions() -> Result<()> {
    let data = vec![0u8; 10];
    let err = expect_err(to_floating::<u8, f64>(&data, 2, 2))?;
    assert!(matches!(err, Error::BufferSize { expected: 12, actual: 10 }), "{err}");

    let err = expect_err(to_unsigned::<f32, u16>(&[0.5; 7], 1, 2))?;
    assert!(matches!(err, Error::BufferSize { expected: 6, actual: 7 }), "{err}");

    let err = expect_err(Image::from_vec(vec![0.0f64; 4], 1, 1))?;
    assert!(matches!(err, Error::BufferSize { .. }), "{err}");

    let err = expect_err(Pixels::new(&data, 3, 1))?;
    assert!(matches!(err, Error::BufferSize { expected: 9, actual: 10 }), "{err}");
    Ok(())
}

#[test]
fn overflowing_dimensions_are_rejected() -> Result<()> {
    let err = expect_err(Image::<u8>::new(usize::MAX, 2))?;
    assert!(
        matches!(err, Error::InvalidDimensions { width: usize::MAX, height: 2 }),
        "{err}"
    );

    // Pixel count fits but the sample count does not
    let half = usize::MAX / 2;
    let err = expect_err(Pixels::from_pixels(&[[0u8; 3]], half, 1))?;
    assert!(matches!(err, Error::InvalidDimensions { width, height: 1 } if width == half), "{err}");

    let err = expect_err(Image::from_pixels(&[[0.5f32; 3]; 2], 2, half))?;
    assert!(matches!(err, Error::InvalidDimensions { .. }), "{err}");
    Ok(())
}

#[test]
fn illuminant_vectors_are_validated() -> Result<()> {
    let err = expect_err(Illuminant::from_slice(&[0.9, 1.0]))?;
    assert!(matches!(err, Error::IlluminantLength(2)), "{err}");

    let err = expect_err(Illuminant::from_slice(&[0.9, 1.0, 1.1, 0.0]))?;
    assert!(matches!(err, Error::IlluminantLength(4)), "{err}");

    let err = expect_err(Illuminant::from_xyz(Xyz::new(0.9, f64::NAN, 1.1)))?;
    assert!(matches!(err, Error::NonFiniteIlluminant { channel: 1, .. }), "{err}");

    let err = expect_err(Illuminant::try_from([f64::INFINITY, 1.0, 1.0]))?;
    assert!(matches!(err, Error::NonFiniteIlluminant { channel: 0, .. }), "{err}");

    let ok = Illuminant::from_slice(&[0.95047, 1.0, 1.08883])?;
    assert!(ok.approx_eq(&illuminant::D65, 1e-12));
    Ok(())
}

#[test]
fn unknown_preset_names() {
    assert!(illuminant::from_name("D93").is_none());
    assert!(illuminant::from_name("").is_none());
    assert!(illuminant::from_name("d65").is_some());
}

#[test]
fn zero_source_white_is_degenerate() -> Result<()> {
    let zero = Illuminant::try_from([0.0; 3])?;
    for method in [
        ChromAdaptMethod::Bradford,
        ChromAdaptMethod::VonKries,
        ChromAdaptMethod::XyzScaling,
    ] {
        let err = expect_err(AdaptationTransform::new(zero, illuminant::D65, method))?;
        assert!(matches!(err, Error::DegenerateIlluminant { .. }), "{err}");
    }

    // A zero destination is well defined: everything maps to black
    let t = AdaptationTransform::new(illuminant::D65, zero, ChromAdaptMethod::Bradford)?;
    let black = t.apply([0.3, 0.4, 0.5]);
    assert!(black.iter().all(|v| v.abs() < 1e-12), "{black:?}");
    Ok(())
}

#[test]
fn black_image_cannot_be_balanced() -> Result<()> {
    let black = Image::filled(4, 4, [0u8; 3])?;
    let err = expect_err(gray_world_balance(&black, &illuminant::D65, &AdaptOptions::default()))?;
    assert!(matches!(err, Error::DegenerateIlluminant { .. }), "{err}");
    Ok(())
}

#[test]
fn empty_images_have_no_mean() -> Result<()> {
    let empty = Image::<f64>::new(0, 5)?;
    let err = expect_err(gray_world_illuminant(&empty, &AdaptOptions::default()))?;
    assert!(matches!(err, Error::EmptyImage), "{err}");

    let err = expect_err(pixels_mean(Pixels::<u8>::new(&[], 0, 0)?))?;
    assert!(matches!(err, Error::EmptyImage), "{err}");

    // Transforms on empty images are fine
    let out = chrom_adapt(&empty, &illuminant::D65, &illuminant::A, &AdaptOptions::default())?;
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn mismatched_shapes_are_rejected() -> Result<()> {
    let src = Image::filled(4, 2, [1u8, 2, 3])?;
    let mut dst = Image::<u16>::new(2, 4)?;
    let err = expect_err(map_pixels_into(src.pixels(), dst.pixels_mut(), |[r, g, b]| {
        [r as u16, g as u16, b as u16]
    }))?;
    assert!(
        matches!(err, Error::ShapeMismatch { expected: (4, 2), actual: (2, 4) }),
        "{err}"
    );

    let mut buffer = vec![0.0f32; 24];
    let target = PixelsMut::new(&mut buffer, 8, 1)?;
    let err = expect_err(map_pixels_into(src.pixels(), target, |p| p.map(f32::from)))?;
    assert!(matches!(err, Error::ShapeMismatch { .. }), "{err}");
    Ok(())
}

#[test]
fn error_messages_are_readable() -> Result<()> {
    let err = expect_err(Illuminant::from_slice(&[1.0]))?;
    assert_eq!(err.to_string(), "Illuminant must have 3 components, got 1");

    let err = expect_err(to_floating::<u8, f32>(&[0; 2], 1, 1))?;
    assert_eq!(err.to_string(), "Buffer size mismatch: expected 3, got 2");

    let err = expect_err(pixels_mean(Pixels::<f64>::new(&[], 0, 1)?))?;
    assert_eq!(err.to_string(), "Image has no pixels");

    // Errors compose with anyhow
    let wrapped = gray_world_illuminant(&Image::<f32>::new(0, 0)?, &AdaptOptions::default())
        .context("estimating scene white");
    let message = format!("{:#}", wrapped.err().context("expected an error")?);
    assert!(message.starts_with("estimating scene white: "), "{message}");
    Ok(())
}
