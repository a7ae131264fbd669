use alloc::string::String;
use enough::StopReason;

use crate::pixel::{PixelFormat, PixelLayout};
use crate::rect::Rect;

/// Errors from probing, decoding, and subsampled conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SampleError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("decode failed: {0}")]
    DecodeFailed(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: PixelLayout,
        actual: PixelLayout,
    },

    #[error("bitmap format mismatch: expected {expected:?}, got {actual:?}")]
    FormatMismatch {
        expected: PixelFormat,
        actual: PixelFormat,
    },

    #[error("sample factor must be at least 1")]
    InvalidSampleFactor,

    #[error("crop {crop:?} exceeds source bounds {width}x{height}")]
    CropOutOfBounds {
        crop: Rect,
        width: u32,
        height: u32,
    },

    #[error("destination rect {actual:?} does not match downsampled size {expected:?}")]
    SizeMismatch { expected: Rect, actual: Rect },

    #[error("destination buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("source plane too small: need {needed} bytes, got {actual}")]
    SourceTooSmall { needed: usize, actual: usize },

    #[error("stride {stride} too small for row of {needed} bytes")]
    StrideTooSmall { stride: usize, needed: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("destination allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for SampleError {
    fn from(r: StopReason) -> Self {
        SampleError::Cancelled(r)
    }
}
