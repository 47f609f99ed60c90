//! gridseg-core - Basic data structures for grid segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! the gridseg library:
//!
//! - [`Grid`] - Rectangular 2D container of samples, row-major and
//!   addressable by coordinate or flat index
//! - [`Rgb`] - 8-bit-per-channel color sample
//!
//! # Example
//!
//! ```
//! use gridseg_core::{Grid, Rgb};
//!
//! let grid = Grid::new(640, 480, Rgb::new(0, 0, 0)).unwrap();
//! assert_eq!(grid.width(), 640);
//! assert_eq!(grid.height(), 480);
//! ```

pub mod error;
pub mod grid;
pub mod rgb;

pub use error::{Error, Result};
pub use grid::Grid;
pub use rgb::Rgb;
