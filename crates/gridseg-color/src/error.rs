//! Error types for gridseg-color

use thiserror::Error;

/// Errors that can occur during weighting or colorization
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gridseg_core::Error),

    /// Segmentation error
    #[error("segmentation error: {0}")]
    Segment(#[from] gridseg_segment::SegmentError),

    /// Source grid does not match the segmentation's dimensions
    #[error("dimension mismatch: segmentation is {expected_w}x{expected_h}, grid is {actual_w}x{actual_h}")]
    DimensionMismatch {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
