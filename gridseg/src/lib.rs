//! Gridseg - Graph-based greedy segmentation of color sample grids
//!
//! Partitions a rectangular grid of color samples into contiguous regions
//! of visually similar color using Felzenszwalb-Huttenlocher style
//! segmentation: a weighted adjacency graph over grid cells is consumed
//! in ascending weight order, greedily merging segments through a
//! union-find forest with per-segment cohesion statistics.
//!
//! # Overview
//!
//! - [`Grid`] / [`Rgb`] - Sample containers and the standard color sample
//! - [`segment::segment`] / [`segment::segment_grid`] - The merge engine
//! - [`segment::Segmentation`] - Per-cell segment identities
//! - [`color`] - RGB edge weighters and segment colorization
//!
//! # Example
//!
//! ```
//! use gridseg::{Grid, Rgb};
//! use gridseg::color::euclidean_rgb;
//! use gridseg::segment::segment_grid;
//!
//! // Two flat color plateaus
//! let grid = Grid::from_rows(vec![
//!     vec![Rgb::new(10, 10, 10), Rgb::new(230, 230, 230)],
//!     vec![Rgb::new(12, 12, 12), Rgb::new(228, 228, 228)],
//! ]).unwrap();
//!
//! let seg = segment_grid(&grid, 100.0, &euclidean_rgb).unwrap();
//! assert_eq!(seg.segment_count(), 2);
//!
//! let colored = gridseg::color::colorize(&seg).unwrap();
//! assert_eq!((colored.width(), colored.height()), (2, 2));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use gridseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use gridseg_color as color;
pub use gridseg_segment as segment;
