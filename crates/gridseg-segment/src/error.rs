//! Error types for gridseg-segment

use thiserror::Error;

/// Errors that can occur during segmentation
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gridseg_core::Error),

    /// Non-positive or non-finite scale parameter
    #[error("invalid scale parameter: {0} (must be finite and positive)")]
    InvalidScale(f64),

    /// Edge weighter produced a negative or non-finite weight
    #[error(
        "invalid edge weight {weight} between ({}, {}) and ({}, {})",
        from.0, from.1, to.0, to.1
    )]
    InvalidWeight {
        weight: f64,
        from: (u32, u32),
        to: (u32, u32),
    },

    /// Edge weighter reported a failure
    #[error("weighter failure: {0}")]
    Weighter(String),
}

/// Result type for segmentation operations
pub type SegmentResult<T> = Result<T, SegmentError>;
