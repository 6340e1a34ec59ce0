//! Chromatic Adaptation Transforms
//!
//! A von Kries-style transform maps both white points into a cone-response
//! (LMS) space, scales each cone channel by the ratio of destination to
//! source response, and maps back:
//!
//! ```text
//! T = A⁻¹ · diag(A·Wd / A·Ws) · A
//! ```
//!
//! References:
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use std::sync::LazyLock;

use crate::color::Illuminant;
use crate::math::Matrix3x3;
use crate::{Error, Result};

/// Chromatic adaptation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ChromAdaptMethod {
    /// Bradford adaptation (ICC default, recommended)
    #[default]
    Bradford,
    /// Von Kries adaptation (Hunt-Pointer-Estevez cone space)
    VonKries,
    /// Scaling directly in XYZ
    XyzScaling,
}

impl ChromAdaptMethod {
    /// XYZ → LMS matrix `A`
    pub const fn cone_response(self) -> &'static Matrix3x3 {
        match self {
            ChromAdaptMethod::Bradford => &BRADFORD_XYZ_TO_LMS,
            ChromAdaptMethod::VonKries => &VON_KRIES_XYZ_TO_LMS,
            ChromAdaptMethod::XyzScaling => &IDENTITY,
        }
    }

    /// LMS → XYZ matrix `A⁻¹`, inverted once at full precision
    pub fn inverse_cone_response(self) -> &'static Matrix3x3 {
        match self {
            ChromAdaptMethod::Bradford => &BRADFORD_LMS_TO_XYZ,
            ChromAdaptMethod::VonKries => &VON_KRIES_LMS_TO_XYZ,
            ChromAdaptMethod::XyzScaling => &IDENTITY,
        }
    }
}

// ============================================================================
// Cone response matrices
// ============================================================================

const IDENTITY: Matrix3x3 = Matrix3x3::identity();

/// Bradford matrix: XYZ → LMS
pub const BRADFORD_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.8951000, 0.2664000, -0.1614000],
    [-0.7502000, 1.7135000, 0.0367000],
    [0.0389000, -0.0685000, 1.0296000],
]);

/// Von Kries matrix: XYZ → LMS
pub const VON_KRIES_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.4002400, 0.7076000, -0.0808100],
    [-0.2263000, 1.1653200, 0.0457000],
    [0.0000000, 0.0000000, 0.9182200],
]);

static BRADFORD_LMS_TO_XYZ: LazyLock<Matrix3x3> =
    LazyLock::new(|| invert_cone_response(&BRADFORD_XYZ_TO_LMS));

static VON_KRIES_LMS_TO_XYZ: LazyLock<Matrix3x3> =
    LazyLock::new(|| invert_cone_response(&VON_KRIES_XYZ_TO_LMS));

// Both cone tables are well conditioned (|det| > 0.5); the fallback is unreachable.
fn invert_cone_response(a: &Matrix3x3) -> Matrix3x3 {
    a.inverse().unwrap_or_default()
}

/// Per-cone gains `A·Wd / A·Ws`
///
/// Fails if a source cone response is zero or a gain is not finite.
pub fn cone_gains(
    src_white: &Illuminant,
    dst_white: &Illuminant,
    method: ChromAdaptMethod,
) -> Result<[f64; 3]> {
    let a = method.cone_response();
    let src_lms = a.multiply_vec(src_white.to_array());
    let dst_lms = a.multiply_vec(dst_white.to_array());

    let mut gains = [0.0; 3];
    for channel in 0..3 {
        if src_lms[channel] == 0.0 {
            return Err(Error::DegenerateIlluminant { channel });
        }
        let gain = dst_lms[channel] / src_lms[channel];
        if !gain.is_finite() {
            return Err(Error::DegenerateIlluminant { channel });
        }
        gains[channel] = gain;
    }
    Ok(gains)
}

/// Compute the chromatic adaptation matrix from one white point to another
///
/// The returned matrix M is used as: XYZ_dest = M × XYZ_src
pub fn adaptation_matrix(
    src_white: &Illuminant,
    dst_white: &Illuminant,
    method: ChromAdaptMethod,
) -> Result<Matrix3x3> {
    let [g0, g1, g2] = cone_gains(src_white, dst_white, method)?;
    let scale = Matrix3x3::diagonal(g0, g1, g2);

    // M = A⁻¹ × D × A
    Ok(method
        .inverse_cone_response()
        .multiply(&scale.multiply(method.cone_response())))
}

/// Compute the Bradford adaptation matrix
#[inline]
pub fn bradford_matrix(src_white: &Illuminant, dst_white: &Illuminant) -> Result<Matrix3x3> {
    adaptation_matrix(src_white, dst_white, ChromAdaptMethod::Bradford)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::illuminant::{A, D50, D65};

    const EPSILON: f64 = 1e-6;

    // Published D65 → D50 Bradford matrix
    const D65_TO_D50_BRADFORD: Matrix3x3 = Matrix3x3::new([
        [1.0478112, 0.0228866, -0.0501270],
        [0.0295424, 0.9904844, -0.0170491],
        [-0.0092345, 0.0150436, 0.7521316],
    ]);

    // Published D50 → D65 Bradford matrix
    const D50_TO_D65_BRADFORD: Matrix3x3 = Matrix3x3::new([
        [0.9555766, -0.0230393, 0.0631636],
        [-0.0282895, 1.0099416, 0.0210077],
        [0.0122982, -0.0204830, 1.3299098],
    ]);

    #[test]
    fn test_cone_tables_are_inverses() {
        for method in [
            ChromAdaptMethod::Bradford,
            ChromAdaptMethod::VonKries,
            ChromAdaptMethod::XyzScaling,
        ] {
            let product = method
                .inverse_cone_response()
                .multiply(method.cone_response());
            assert!(product.is_identity(1e-12), "{:?}", method);
        }
    }

    #[test]
    fn test_identity_adaptation() {
        for method in [
            ChromAdaptMethod::Bradford,
            ChromAdaptMethod::VonKries,
            ChromAdaptMethod::XyzScaling,
        ] {
            let matrix = adaptation_matrix(&D65, &D65, method).unwrap();
            assert!(matrix.is_identity(1e-12), "{:?}", method);
        }
    }

    #[test]
    fn test_inverse_matches_published_tables() {
        // Lindbloom's 7-digit LMS → XYZ tables
        let bradford = Matrix3x3::new([
            [0.9869929, -0.1470543, 0.1599627],
            [0.4323053, 0.5183603, 0.0492912],
            [-0.0085287, 0.0400428, 0.9684867],
        ]);
        let von_kries = Matrix3x3::new([
            [1.8599364, -1.1293816, 0.2198974],
            [0.3611914, 0.6388125, -0.0000064],
            [0.0, 0.0, 1.0890636],
        ]);
        assert!(ChromAdaptMethod::Bradford.inverse_cone_response().approx_eq(&bradford, 1e-6));
        assert!(ChromAdaptMethod::VonKries.inverse_cone_response().approx_eq(&von_kries, 1e-6));
    }

    #[test]
    fn test_d65_to_d50() {
        let computed = bradford_matrix(&D65, &D50).unwrap();
        assert!(
            computed.approx_eq(&D65_TO_D50_BRADFORD, 1e-5),
            "D65→D50 matrix mismatch: computed={:?} expected={:?}",
            computed,
            D65_TO_D50_BRADFORD
        );
    }

    #[test]
    fn test_d50_to_d65() {
        let computed = bradford_matrix(&D50, &D65).unwrap();
        assert!(computed.approx_eq(&D50_TO_D65_BRADFORD, 1e-5));
    }

    #[test]
    fn test_adaptation_roundtrip() {
        let m1 = bradford_matrix(&D65, &A).unwrap();
        let m2 = bradford_matrix(&A, &D65).unwrap();
        assert!(m1.multiply(&m2).is_identity(1e-5), "Roundtrip not identity");
    }

    #[test]
    fn test_white_point_maps_to_destination() {
        for method in [
            ChromAdaptMethod::Bradford,
            ChromAdaptMethod::VonKries,
            ChromAdaptMethod::XyzScaling,
        ] {
            let m = adaptation_matrix(&D65, &A, method).unwrap();
            let adapted = m.multiply_vec(D65.to_array());
            let expected = A.to_array();
            for i in 0..3 {
                assert!((adapted[i] - expected[i]).abs() < 1e-5, "{:?}", method);
            }
        }
    }

    #[test]
    fn test_xyz_scaling_is_diagonal() {
        let m = adaptation_matrix(&D65, &D50, ChromAdaptMethod::XyzScaling).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_eq!(m[i][j], 0.0);
                }
            }
        }
        assert!((m[2][2] - D50.to_array()[2] / D65.to_array()[2]).abs() < 1e-12);
    }

    #[test]
    fn test_zero_source_is_degenerate() {
        let black = Illuminant::new(0.0, 0.0, 0.0);
        let err = bradford_matrix(&black, &D65).unwrap_err();
        assert_eq!(err, Error::DegenerateIlluminant { channel: 0 });

        let no_z = Illuminant::new(1.0, 1.0, 0.0);
        let err = adaptation_matrix(&no_z, &D65, ChromAdaptMethod::XyzScaling).unwrap_err();
        assert_eq!(err, Error::DegenerateIlluminant { channel: 2 });
    }

    #[test]
    fn test_zero_destination_is_allowed() {
        // Only the source white divides
        let black = Illuminant::new(0.0, 0.0, 0.0);
        let m = bradford_matrix(&D65, &black).unwrap();
        assert!(m.is_finite());
    }
}
