//! Image statistics and gray-world white balance tests

use anyhow::Result;
use approx::assert_abs_diff_eq;
use chromadapt_core::{
    AdaptOptions, ChannelOrder, Image, adapt_unsigned, gray_world_balance, gray_world_illuminant,
    illuminant, image_mean,
};
use chromadapt_tests::compare_rgb8;
use chromadapt_tests::patterns::{TestPattern, generate_pattern, sizes};

#[test]
fn primaries_and_gray_mean() -> Result<()> {
    let image = Image::from_pixels(
        &[[255u8, 0, 0], [0, 255, 0], [0, 0, 255], [120, 120, 120]],
        4,
        1,
    )?;
    assert_eq!(image_mean(&image)?, [93.75, 93.75, 93.75]);
    Ok(())
}

#[test]
fn constant_image_mean_is_its_color() -> Result<()> {
    for color in [[0u8, 0, 0], [12, 200, 99], [255, 255, 255]] {
        let image = generate_pattern(TestPattern::Solid(color), 37, 23);
        let mean = image_mean(&image)?;
        for c in 0..3 {
            assert_abs_diff_eq!(mean[c], color[c] as f64, epsilon = 1e-9);
        }

        let floats = image.to_floating::<f32>();
        let mean = image_mean(&floats)?;
        for c in 0..3 {
            assert_abs_diff_eq!(mean[c], color[c] as f64 / 255.0, epsilon = 1e-6);
        }
    }
    Ok(())
}

#[test]
fn large_image_mean_matches_sequential_sum() -> Result<()> {
    let image = generate_pattern(TestPattern::Random(99), 1920, 1080);
    let mut sum = [0u64; 3];
    for p in image.pixels() {
        for c in 0..3 {
            sum[c] += p[c] as u64;
        }
    }
    let n = image.pixel_count() as f64;
    let mean = image_mean(&image)?;
    for c in 0..3 {
        assert_abs_diff_eq!(mean[c], sum[c] as f64 / n, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn neutral_scene_estimates_d65() -> Result<()> {
    let (w, h) = sizes::SMALL;
    let image = generate_pattern(TestPattern::GradientH, w, h).to_floating::<f64>();
    let estimate = gray_world_illuminant(&image, &AdaptOptions::default())?;
    let (x, y) = estimate.chromaticity();
    let (x65, y65) = illuminant::D65.chromaticity();
    assert_abs_diff_eq!(x, x65, epsilon = 1e-4);
    assert_abs_diff_eq!(y, y65, epsilon = 1e-4);
    assert_abs_diff_eq!(estimate.to_array()[1], 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn warm_scene_estimate_is_warm() -> Result<()> {
    let (w, h) = sizes::SMALL;
    let image = generate_pattern(TestPattern::WarmCast, w, h).to_floating::<f64>();
    let estimate = gray_world_illuminant(&image, &AdaptOptions::default())?;
    // Lower correlated color temperature means larger x
    assert!(estimate.chromaticity().0 > illuminant::D65.chromaticity().0 + 0.02);
    Ok(())
}

#[test]
fn balance_neutralizes_casts() -> Result<()> {
    let (w, h) = sizes::SMALL;
    let options = AdaptOptions::default();
    let (x65, y65) = illuminant::D65.chromaticity();

    for pattern in [TestPattern::WarmCast, TestPattern::CoolCast] {
        let image = generate_pattern(pattern, w, h);
        let balanced = gray_world_balance(&image, &illuminant::D65, &options)?;
        let estimate = gray_world_illuminant(&balanced.to_floating::<f64>(), &options)?;
        let (x, y) = estimate.chromaticity();
        assert_abs_diff_eq!(x, x65, epsilon = 2e-3);
        assert_abs_diff_eq!(y, y65, epsilon = 2e-3);
    }
    Ok(())
}

#[test]
fn balance_leaves_neutral_scene_alone() -> Result<()> {
    let (w, h) = sizes::SMALL;
    let image = generate_pattern(TestPattern::GradientH, w, h);
    let balanced = gray_world_balance(&image, &illuminant::D65, &AdaptOptions::default())?;
    for (a, b) in image.as_slice().iter().zip(balanced.as_slice()) {
        assert!(a.abs_diff(*b) <= 1, "{a} vs {b}");
    }
    Ok(())
}

#[test]
fn balance_is_channel_order_agnostic() -> Result<()> {
    let (w, h) = sizes::TINY;
    let rgb = generate_pattern(TestPattern::SkinTones, w, h);
    let bgr = chromadapt_core::pixel_map(&rgb, |[r, g, b]| [b, g, r]);
    let out_rgb = gray_world_balance(&rgb, &illuminant::D50, &AdaptOptions::default())?;
    let out_bgr = gray_world_balance(
        &bgr,
        &illuminant::D50,
        &AdaptOptions::default().with_order(ChannelOrder::Bgr),
    )?;
    let out_bgr_as_rgb = chromadapt_core::pixel_map(&out_bgr, |[b, g, r]| [r, g, b]);
    let stats = compare_rgb8(out_rgb.pixels().as_array(), out_bgr_as_rgb.pixels().as_array());
    assert!(stats.is_excellent(), "{stats:?}");
    Ok(())
}

#[test]
fn adapt_unsigned_identity_u16() -> Result<()> {
    let image = generate_pattern(TestPattern::Random(4), 32, 32)
        .to_floating::<f64>()
        .to_unsigned::<u16>();
    let out = adapt_unsigned(&image, &illuminant::A, &illuminant::A, &AdaptOptions::default())?;
    for (a, b) in image.as_slice().iter().zip(out.as_slice()) {
        assert!(a.abs_diff(*b) <= 1, "{a} vs {b}");
    }
    Ok(())
}

#[test]
fn adapt_unsigned_changes_white() -> Result<()> {
    let white = generate_pattern(TestPattern::Solid([255, 255, 255]), 2, 2);
    let out = adapt_unsigned(&white, &illuminant::D65, &illuminant::A, &AdaptOptions::default())?;
    let p = out.pixel(0, 0).unwrap_or_default();
    // Illuminant A white is far outside sRGB in the blue: red clips, blue drops
    assert_eq!(p[0], 255);
    assert!(p[2] < 150, "{p:?}");
    Ok(())
}
