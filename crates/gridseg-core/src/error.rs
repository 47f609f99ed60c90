//! Error types for gridseg-core
//!
//! Provides a unified error type for grid construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// gridseg core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Rows of a rectangular grid must all have the same length
    #[error("jagged rows: row {row} has {actual} cells, expected {expected}")]
    JaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Cell coordinate outside the grid
    #[error("cell out of bounds: ({row}, {col}) in {width}x{height} grid")]
    CellOutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    /// Backing storage length does not match the stated dimensions
    #[error("data length mismatch: {len} cells for {width}x{height} grid")]
    DataLengthMismatch { len: usize, width: u32, height: u32 },
}

/// Result type alias for gridseg core operations
pub type Result<T> = std::result::Result<T, Error>;
