//! Accuracy measurement
//!
//! Floating results are compared component-wise (absolute and relative
//! error). 8-bit results are compared perceptually with CIEDE2000 through
//! `palette`'s Lab conversion.

use palette::color_difference::Ciede2000;
use palette::white_point::D65;
use palette::{FromColor, Lab, Srgb};

/// Component-wise error statistics between two pixel sequences
#[derive(Debug, Clone)]
pub struct ErrorStats {
    /// Mean absolute error
    pub mean_abs: f64,
    /// Maximum absolute error
    pub max_abs: f64,
    /// Maximum relative error over components with magnitude above `floor`
    pub max_rel: f64,
    /// Number of components compared
    pub count: usize,
}

impl ErrorStats {
    /// True if the largest absolute error is within `abs` or the largest
    /// relative error is within `rel`
    pub fn within(&self, abs: f64, rel: f64) -> bool {
        self.max_abs <= abs || self.max_rel <= rel
    }
}

/// Compare two pixel sequences
///
/// Components whose reference magnitude is below `floor` only contribute to
/// the absolute statistics.
pub fn compare_pixels(reference: &[[f64; 3]], result: &[[f64; 3]], floor: f64) -> ErrorStats {
    assert_eq!(reference.len(), result.len());

    let mut sum = 0.0;
    let mut max_abs = 0.0f64;
    let mut max_rel = 0.0f64;
    for (r, o) in reference.iter().zip(result) {
        for c in 0..3 {
            let err = (r[c] - o[c]).abs();
            sum += err;
            max_abs = max_abs.max(err);
            if r[c].abs() > floor {
                max_rel = max_rel.max(err / r[c].abs());
            }
        }
    }

    let count = reference.len() * 3;
    ErrorStats {
        mean_abs: if count == 0 { 0.0 } else { sum / count as f64 },
        max_abs,
        max_rel,
        count,
    }
}

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// All differences imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// All differences barely perceptible (deltaE < 2.0)
    pub fn is_good(&self) -> bool {
        self.max < 2.0
    }
}

fn srgb8_to_lab(p: [u8; 3]) -> Lab<D65, f64> {
    Lab::<D65, f64>::from_color(Srgb::<u8>::new(p[0], p[1], p[2]).into_format::<f64>())
}

/// CIEDE2000 between two 8-bit sRGB pixels
pub fn delta_e_rgb8(a: [u8; 3], b: [u8; 3]) -> f64 {
    srgb8_to_lab(a).difference(srgb8_to_lab(b))
}

/// Compare two 8-bit sRGB pixel sequences perceptually
pub fn compare_rgb8(reference: &[[u8; 3]], result: &[[u8; 3]]) -> DeltaEStats {
    assert_eq!(reference.len(), result.len());

    let mut delta_es: Vec<f64> = reference
        .iter()
        .zip(result)
        .map(|(a, b)| delta_e_rgb8(*a, *b))
        .collect();
    delta_es.sort_by(|a, b| a.total_cmp(b));

    let count = delta_es.len();
    let mean = if count == 0 {
        0.0
    } else {
        delta_es.iter().sum::<f64>() / count as f64
    };
    let max = delta_es.last().copied().unwrap_or(0.0);
    let p95 = delta_es
        .get((count as f64 * 0.95) as usize)
        .copied()
        .unwrap_or(max);

    DeltaEStats {
        mean,
        max,
        p95,
        count,
    }
}
