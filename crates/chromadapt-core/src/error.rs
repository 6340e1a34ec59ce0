//! Error types for chromadapt

use thiserror::Error;

/// Result type for chromadapt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chromadapt operations
///
/// Every variant is raised before any pixel is written, so a failed call
/// never leaves a partially transformed buffer behind.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Buffer length does not match `width * height * 3`
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// `width * height * 3` does not fit in `usize`
    #[error("Invalid dimensions: {width}x{height} overflows addressable memory")]
    InvalidDimensions { width: usize, height: usize },

    /// Two buffers that must share a shape do not
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Illuminant built from a vector that does not have 3 components
    #[error("Illuminant must have 3 components, got {0}")]
    IlluminantLength(usize),

    /// Illuminant component is NaN or infinite
    #[error("Illuminant component {channel} is not finite: {value}")]
    NonFiniteIlluminant { channel: usize, value: f64 },

    /// Source white maps to a zero cone response, so the adaptation gain is undefined
    #[error("Degenerate source illuminant: channel {channel} has zero response")]
    DegenerateIlluminant { channel: usize },

    /// Statistics requested on an image without pixels
    #[error("Image has no pixels")]
    EmptyImage,
}
