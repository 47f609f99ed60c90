//! gridseg-color - Edge weighters and segment colorization
//!
//! The collaborators the segmentation core consumes and feeds:
//!
//! - **Edge weighters** - Dissimilarity functions over [`Rgb`] samples
//!   ([`euclidean_rgb`], [`luminance_diff`])
//! - **Colorization** - Rendering a [`Segmentation`] back to a color
//!   grid with random, seeded, or mean-color palettes
//!
//! # Examples
//!
//! ```
//! use gridseg_core::{Grid, Rgb};
//! use gridseg_segment::segment_grid;
//! use gridseg_color::{colorize, euclidean_rgb};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![Rgb::new(10, 10, 10), Rgb::new(250, 250, 250)],
//!     vec![Rgb::new(10, 10, 10), Rgb::new(250, 250, 250)],
//! ]).unwrap();
//!
//! let seg = segment_grid(&grid, 50.0, &euclidean_rgb).unwrap();
//! let colored = colorize(&seg).unwrap();
//! assert_eq!(colored.width(), 2);
//! ```
//!
//! [`Rgb`]: gridseg_core::Rgb
//! [`Segmentation`]: gridseg_segment::Segmentation

pub mod colorize;
pub mod error;
pub mod weight;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export weighters
pub use weight::{euclidean_rgb, luminance_diff};

// Re-export colorization functions
pub use colorize::{colorize, colorize_with_rng, mean_colors};
