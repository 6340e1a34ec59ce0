//! Test pattern generation
//!
//! Every pattern is an 8-bit RGB [`Image`] of the requested size.

use chromadapt_core::Image;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Horizontal gray gradient, black to white
    GradientH,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// Random pixels with seed
    Random(u64),
    /// Skin tone samples
    SkinTones,
    /// Neutral grays rendered under a warm (tungsten-like) cast
    WarmCast,
    /// Neutral grays rendered under a cool (daylight shade) cast
    CoolCast,
    /// Single flat color
    Solid([u8; 3]),
}

impl TestPattern {
    /// Patterns with a non-zero mean, usable for gray-world estimation
    pub const ALL: [TestPattern; 7] = [
        TestPattern::GradientH,
        TestPattern::ColorCube,
        TestPattern::HueRamp,
        TestPattern::Random(7),
        TestPattern::SkinTones,
        TestPattern::WarmCast,
        TestPattern::CoolCast,
    ];
}

/// Generate a test pattern
pub fn generate_pattern(pattern: TestPattern, width: usize, height: usize) -> Image<u8> {
    let count = width * height;
    let pixels: Vec<[u8; 3]> = match pattern {
        TestPattern::GradientH => (0..count)
            .map(|i| {
                let x = i % width;
                let v = (x * 255 / width.saturating_sub(1).max(1)) as u8;
                [v, v, v]
            })
            .collect(),
        TestPattern::ColorCube => {
            const CORNERS: [[u8; 3]; 8] = [
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ];
            (0..count).map(|i| CORNERS[i % 8]).collect()
        }
        TestPattern::HueRamp => (0..count)
            .map(|i| hsl_to_rgb(i as f32 / count as f32 * 360.0, 1.0, 0.5))
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    [
                        rng.gen_range(0..=255u8),
                        rng.gen_range(0..=255u8),
                        rng.gen_range(0..=255u8),
                    ]
                })
                .collect()
        }
        TestPattern::SkinTones => {
            const TONES: [[u8; 3]; 6] = [
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ];
            (0..count).map(|i| TONES[i % 6]).collect()
        }
        TestPattern::WarmCast => tinted_grays(count, [1.0, 0.82, 0.58]),
        TestPattern::CoolCast => tinted_grays(count, [0.72, 0.86, 1.0]),
        TestPattern::Solid(color) => vec![color; count],
    };

    match Image::from_pixels(&pixels, width, height) {
        Ok(image) => image,
        Err(e) => panic!("pattern {pattern:?} {width}x{height}: {e}"),
    }
}

fn tinted_grays(count: usize, tint: [f32; 3]) -> Vec<[u8; 3]> {
    (0..count)
        .map(|i| {
            let level = 40.0 + 200.0 * (i % 16) as f32 / 15.0;
            [
                (level * tint[0]).round() as u8,
                (level * tint[1]).round() as u8,
                (level * tint[2]).round() as u8,
            ]
        })
        .collect()
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}

/// Standard test sizes
pub mod sizes {
    pub const TINY: (usize, usize) = (8, 8);
    pub const SMALL: (usize, usize) = (64, 64);
    pub const MEDIUM: (usize, usize) = (256, 256);
}
