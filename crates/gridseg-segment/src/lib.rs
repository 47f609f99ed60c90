//! gridseg-segment - Graph-based greedy segmentation for gridseg
//!
//! This crate implements Felzenszwalb-Huttenlocher style segmentation of
//! rectangular sample grids:
//!
//! - **Adjacency enumeration** - Weighted 8-way (or 4-way) neighbor graph
//!   over grid cells, each undirected pair enumerated exactly once
//! - **Disjoint-set forest** - Union-find with per-segment size and
//!   internal difference statistics
//! - **Segmentation engine** - Weight-ordered greedy merging with a
//!   size-adaptive threshold controlled by a scale parameter
//! - **Query surface** - Frozen per-cell segment identities for
//!   downstream consumers such as colorizers
//!
//! # Examples
//!
//! ```
//! use gridseg_core::Grid;
//! use gridseg_segment::segment_grid;
//!
//! // Two flat luminance plateaus
//! let grid = Grid::from_rows(vec![
//!     vec![10.0_f64, 10.0, 200.0, 200.0],
//!     vec![10.0, 10.0, 200.0, 200.0],
//! ]).unwrap();
//!
//! let result = segment_grid(&grid, 5.0, &|a: &f64, b: &f64| (a - b).abs()).unwrap();
//! assert_eq!(result.segment_count(), 2);
//! assert_eq!(result.representative_of(0, 0), result.representative_of(1, 1));
//! ```

pub mod edge;
pub mod engine;
pub mod error;
pub mod forest;

// Re-export core types
pub use gridseg_core;

// Re-export error types
pub use error::{SegmentError, SegmentResult};

// Re-export edge types and functions
pub use edge::{ConnectivityType, Edge, EdgeWeighter, build_edges, sort_edges};

// Re-export engine types and functions
pub use engine::{SegmentId, SegmentOptions, Segmentation, segment, segment_grid};

// Re-export the forest for callers driving the merge loop themselves
pub use forest::DisjointSetForest;
