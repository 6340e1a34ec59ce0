//! Per-pixel function application
//!
//! The closure sees one `[T; 3]` at a time and may change the sample type.
//! Work is split into fixed-size pixel ranges; the order in which pixels
//! are visited is unspecified.

use crate::image::sample::Sample;
use crate::image::{Image, Pixels, PixelsMut};
use crate::parallel::{self, CHUNK_PIXELS};
use crate::{Error, Result, simd};

fn map_slices<T, U, F>(src: &[[T; 3]], dst: &mut [[U; 3]], f: &F)
where
    T: Sample,
    U: Sample,
    F: Fn([T; 3]) -> [U; 3] + Sync + Send,
{
    parallel::zip_for_each(src, dst, CHUNK_PIXELS, |s, d| {
        simd::map_pixels_batch(s, d, f)
    });
}

/// New image with every pixel replaced by `f(pixel)`
pub fn pixel_map<T, U, F>(image: &Image<T>, f: F) -> Image<U>
where
    T: Sample,
    U: Sample,
    F: Fn([T; 3]) -> [U; 3] + Sync + Send,
{
    let mut out = Image::from_parts(
        vec![U::zeroed(); image.as_slice().len()],
        image.width(),
        image.height(),
    );
    map_slices(
        image.pixels().as_array(),
        out.pixels_mut().into_array_mut(),
        &f,
    );
    out
}

/// Replace every pixel of an owned image with `f(pixel)`
pub fn pixel_map_in_place<T, F>(image: &mut Image<T>, f: F)
where
    T: Sample,
    F: Fn([T; 3]) -> [T; 3] + Sync + Send,
{
    parallel::for_each_mut(image.pixels_mut().into_array_mut(), CHUNK_PIXELS, |chunk| {
        simd::map_pixels_in_place_batch(chunk, &f)
    });
}

/// Write `f(pixel)` for every pixel of `src` into the same position of `dst`
///
/// Fails before writing anything if the views differ in shape.
pub fn map_pixels_into<T, U, F>(src: Pixels<'_, T>, mut dst: PixelsMut<'_, U>, f: F) -> Result<()>
where
    T: Sample,
    U: Sample,
    F: Fn([T; 3]) -> [U; 3] + Sync + Send,
{
    let expected = (src.width(), src.height());
    let actual = (dst.width(), dst.height());
    if expected != actual {
        return Err(Error::ShapeMismatch { expected, actual });
    }
    map_slices(src.as_array(), dst.as_array_mut(), &f);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_map_changes_type() {
        let image = Image::from_vec(vec![10u8, 20, 30, 40, 50, 60], 2, 1).unwrap();
        let out: Image<f64> = pixel_map(&image, |p| [p[0] as f64 / 10.0, 0.0, p[2] as f64]);
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(out.as_slice(), &[1.0, 0.0, 30.0, 4.0, 0.0, 60.0]);
        // source untouched
        assert_eq!(image.as_slice(), &[10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_pixel_map_in_place() {
        let mut image = Image::filled(3, 3, [0.25f32, 0.5, 0.75]).unwrap();
        pixel_map_in_place(&mut image, |[r, g, b]| [b, g, r]);
        assert!(image.pixels().iter().all(|p| *p == [0.75, 0.5, 0.25]));
    }

    #[test]
    fn test_map_large_image_keeps_positions() {
        let width = CHUNK_PIXELS / 4 + 3;
        let height = 9;
        let data: Vec<u32> = (0..(width * height * 3) as u32).collect();
        let image = Image::from_vec(data, width, height).unwrap();
        let out: Image<u32> = pixel_map(&image, |[a, b, c]| [c, b, a]);
        for (i, p) in out.pixels().iter().enumerate() {
            let base = 3 * i as u32;
            assert_eq!(*p, [base + 2, base + 1, base]);
        }
    }

    #[test]
    fn test_map_pixels_into() {
        let src = [[1u16, 2, 3], [4, 5, 6]];
        let mut dst = [[0u8; 3]; 2];
        map_pixels_into(
            Pixels::from_pixels(&src, 2, 1).unwrap(),
            PixelsMut::from_pixels(&mut dst, 2, 1).unwrap(),
            |p| [p[0] as u8, p[1] as u8, p[2] as u8 * 2],
        )
        .unwrap();
        assert_eq!(dst, [[1, 2, 6], [4, 5, 12]]);
    }

    #[test]
    fn test_map_pixels_into_shape_mismatch() {
        let src = [[1u8, 2, 3], [4, 5, 6]];
        let mut dst = [[0u8; 3]; 2];
        let err = map_pixels_into(
            Pixels::from_pixels(&src, 2, 1).unwrap(),
            PixelsMut::from_pixels(&mut dst, 1, 2).unwrap(),
            |p| p,
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                expected: (2, 1),
                actual: (1, 2)
            }
        );
        assert_eq!(dst, [[0u8; 3]; 2]);
    }
}
