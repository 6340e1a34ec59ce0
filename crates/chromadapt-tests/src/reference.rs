//! Reference conversions via `palette`
//!
//! palette derives its sRGB matrix from the primaries and carries its own
//! white point tables, so agreement is expected to about 1e-4, not bit
//! for bit. Nothing is clamped.

use chromadapt_core::{ChromAdaptMethod, Illuminant, illuminant};
use palette::chromatic_adaptation::AdaptIntoUnclamped;
use palette::convert::FromColorUnclamped;
use palette::lms::matrix::{Bradford, UnitMatrix, VonKries};
use palette::white_point::{self, WhitePoint};
use palette::xyz::meta::HasXyzMeta;
use palette::{Srgb, Xyz};

/// Encoded sRGB → XYZ (D65)
pub fn srgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let xyz: Xyz<white_point::D65, f64> = Xyz::from_color_unclamped(Srgb::<f64>::new(rgb[0], rgb[1], rgb[2]));
    let (x, y, z) = xyz.into_components();
    [x, y, z]
}

/// XYZ (D65) → encoded sRGB
pub fn xyz_to_srgb(xyz: [f64; 3]) -> [f64; 3] {
    let rgb = Srgb::<f64>::from_color_unclamped(Xyz::<white_point::D65, f64>::new(xyz[0], xyz[1], xyz[2]));
    let (r, g, b) = rgb.into_components();
    [r, g, b]
}

fn adapt_from_d65<Wp>(xyz: [f64; 3], method: ChromAdaptMethod) -> [f64; 3]
where
    Wp: WhitePoint<f64> + HasXyzMeta<XyzMeta = Wp>,
{
    let src = Xyz::<white_point::D65, f64>::new(xyz[0], xyz[1], xyz[2]);
    let dst: Xyz<Wp, f64> = match method {
        ChromAdaptMethod::Bradford => src.adapt_into_unclamped_with::<Bradford>(),
        ChromAdaptMethod::VonKries => src.adapt_into_unclamped_with::<VonKries>(),
        _ => src.adapt_into_unclamped_with::<UnitMatrix>(),
    };
    let (x, y, z) = dst.into_components();
    [x, y, z]
}

/// Presets that palette also defines, by name
pub const SHARED_PRESETS: [&str; 9] = ["D50", "D55", "D65", "D75", "A", "E", "F2", "F7", "F11"];

/// Adapt an XYZ value from D65 to the named preset with palette
///
/// Returns `None` for names palette has no white point for.
pub fn adapt_d65_to(name: &str, xyz: [f64; 3], method: ChromAdaptMethod) -> Option<[f64; 3]> {
    let adapted = match name {
        "D50" => adapt_from_d65::<white_point::D50>(xyz, method),
        "D55" => adapt_from_d65::<white_point::D55>(xyz, method),
        "D65" => adapt_from_d65::<white_point::D65>(xyz, method),
        "D75" => adapt_from_d65::<white_point::D75>(xyz, method),
        "A" => adapt_from_d65::<white_point::A>(xyz, method),
        "E" => adapt_from_d65::<white_point::E>(xyz, method),
        "F2" => adapt_from_d65::<white_point::F2>(xyz, method),
        "F7" => adapt_from_d65::<white_point::F7>(xyz, method),
        "F11" => adapt_from_d65::<white_point::F11>(xyz, method),
        _ => return None,
    };
    Some(adapted)
}

/// palette's XYZ for a named white point
pub fn white_point_xyz(name: &str) -> Option<[f64; 3]> {
    fn get<Wp: WhitePoint<f64>>() -> [f64; 3] {
        let (x, y, z) = Wp::get_xyz().into_components();
        [x, y, z]
    }
    Some(match name {
        "D50" => get::<white_point::D50>(),
        "D55" => get::<white_point::D55>(),
        "D65" => get::<white_point::D65>(),
        "D75" => get::<white_point::D75>(),
        "A" => get::<white_point::A>(),
        "E" => get::<white_point::E>(),
        "F2" => get::<white_point::F2>(),
        "F7" => get::<white_point::F7>(),
        "F11" => get::<white_point::F11>(),
        _ => return None,
    })
}

/// Our preset for a name palette also knows
pub fn our_preset(name: &str) -> Option<Illuminant> {
    illuminant::from_name(name)
}
