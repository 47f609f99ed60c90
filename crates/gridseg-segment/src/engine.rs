//! Segmentation engine and query surface
//!
//! Implements Felzenszwalb-Huttenlocher style greedy graph segmentation:
//! all adjacency edges are sorted ascending by weight and consumed in
//! order; an edge merges its endpoints' segments when its weight is below
//! both segments' merge thresholds. The threshold `int(c) + k / |c|`
//! gives small segments a generous tolerance while requiring growing
//! segments to show increasingly strong cohesion evidence before
//! absorbing neighbors.
//!
//! The ascending processing order is what makes the per-segment
//! statistics cheap to maintain: when an edge triggers a merge, its
//! weight is an upper bound on every edge already absorbed by either
//! segment, so it simply overwrites the merged segment's internal
//! difference.

use std::collections::HashMap;

use crate::edge::{ConnectivityType, EdgeWeighter, build_edges, sort_edges};
use crate::error::{SegmentError, SegmentResult};
use crate::forest::DisjointSetForest;
use gridseg_core::Grid;

/// Options for graph segmentation
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Scale parameter `k`: larger values bias toward fewer, larger
    /// segments. Must be finite and positive.
    pub scale: f64,
    /// Connectivity used when building the adjacency graph
    pub connectivity: ConnectivityType,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            scale: 100.0,
            connectivity: ConnectivityType::EightWay,
        }
    }
}

impl SegmentOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scale parameter
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the connectivity type
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// Canonical identity of one segment.
///
/// Opaque and stable for the lifetime of the [`Segmentation`] that
/// produced it; identities are not comparable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(usize);

/// The frozen result of a segmentation run.
///
/// Built after the merge loop completes: every parent chain is fully
/// compressed once, so queries are plain array reads and never mutate
/// forest state.
#[derive(Debug, Clone)]
pub struct Segmentation {
    width: u32,
    height: u32,
    /// Canonical root per cell, fully compressed
    labels: Vec<usize>,
    /// Distinct roots in ascending index order
    roots: Vec<usize>,
    /// Cell count per segment, keyed by root
    sizes: HashMap<usize, u32>,
}

impl Segmentation {
    fn freeze(grid_width: u32, grid_height: u32, mut forest: DisjointSetForest) -> Self {
        forest.compress_all();
        let labels: Vec<usize> = (0..forest.len()).map(|node| forest.parent_of(node)).collect();

        let mut sizes = HashMap::new();
        for &root in &labels {
            *sizes.entry(root).or_insert(0u32) += 1;
        }
        let mut roots: Vec<usize> = sizes.keys().copied().collect();
        roots.sort_unstable();

        Self {
            width: grid_width,
            height: grid_height,
            labels,
            roots,
            sizes,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// A segmentation always covers at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of distinct segments.
    pub fn segment_count(&self) -> usize {
        self.roots.len()
    }

    /// Canonical segment identity of the cell at `(row, col)`, or `None`
    /// if the coordinate is outside the grid.
    pub fn representative_of(&self, row: u32, col: u32) -> Option<SegmentId> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let index = (row as usize) * (self.width as usize) + col as usize;
        Some(SegmentId(self.labels[index]))
    }

    /// All distinct segment identities, in a deterministic order.
    pub fn segments(&self) -> Vec<SegmentId> {
        self.roots.iter().copied().map(SegmentId).collect()
    }

    /// Number of cells in a segment, or `None` for an identity that does
    /// not belong to this segmentation.
    pub fn segment_size(&self, id: SegmentId) -> Option<u32> {
        self.sizes.get(&id.0).copied()
    }

    /// Iterate over all cells as `(row, col, segment)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, SegmentId)> + '_ {
        let width = self.width as usize;
        self.labels.iter().enumerate().map(move |(index, &root)| {
            ((index / width) as u32, (index % width) as u32, SegmentId(root))
        })
    }

    /// Render the partition as a grid of compact labels in `0..segment_count()`.
    ///
    /// Labels are assigned in ascending root order, so the result is
    /// deterministic for a given partition.
    pub fn label_grid(&self) -> Grid<u32> {
        let ordinal: HashMap<usize, u32> = self
            .roots
            .iter()
            .enumerate()
            .map(|(ordinal, &root)| (root, ordinal as u32))
            .collect();
        let cells: Vec<u32> = self.labels.iter().map(|root| ordinal[root]).collect();
        Grid::from_vec(self.width, self.height, cells)
            .unwrap_or_else(|_| unreachable!("labels match grid dimensions"))
    }
}

/// Segment a grid of samples.
///
/// Builds the weighted adjacency graph, sorts the edges ascending by
/// weight (ties broken on endpoint indices), and greedily merges segments
/// through a disjoint-set forest. For an edge `(u, v, w)` joining two
/// distinct segments, the merge is accepted iff
///
/// ```text
/// w < min(int(u) + k / |u|, int(v) + k / |v|)
/// ```
///
/// where `int` is a segment's internal difference and `|.|` its size.
///
/// # Errors
///
/// - [`SegmentError::InvalidScale`] for a non-positive or non-finite
///   scale parameter, rejected before any graph construction
/// - [`SegmentError::InvalidWeight`] / [`SegmentError::Weighter`] when
///   the weighter misbehaves; the run produces no partial result
///
/// # Example
///
/// ```
/// use gridseg_core::Grid;
/// use gridseg_segment::{SegmentOptions, segment};
///
/// let grid = Grid::from_rows(vec![vec![10.0_f64, 10.0], vec![200.0, 200.0]]).unwrap();
/// let options = SegmentOptions::new().with_scale(1.0);
/// let result = segment(&grid, &options, &|a: &f64, b: &f64| (a - b).abs()).unwrap();
/// assert_eq!(result.segment_count(), 2);
/// ```
pub fn segment<T, W>(
    grid: &Grid<T>,
    options: &SegmentOptions,
    weighter: &W,
) -> SegmentResult<Segmentation>
where
    W: EdgeWeighter<T>,
{
    let k = options.scale;
    if !k.is_finite() || k <= 0.0 {
        return Err(SegmentError::InvalidScale(k));
    }

    let mut edges = build_edges(grid, options.connectivity, weighter)?;
    sort_edges(&mut edges);

    let mut forest = DisjointSetForest::new(grid.len());
    for edge in &edges {
        let root_u = forest.find(edge.u);
        let root_v = forest.find(edge.v);
        if root_u == root_v {
            continue;
        }
        let threshold = f64::min(
            forest.internal_diff_of(root_u) + k / f64::from(forest.size_of(root_u)),
            forest.internal_diff_of(root_v) + k / f64::from(forest.size_of(root_v)),
        );
        if edge.weight < threshold {
            forest.union(root_u, root_v, edge.weight);
        }
    }

    Ok(Segmentation::freeze(grid.width(), grid.height(), forest))
}

/// Segment a grid with default 8-way connectivity.
///
/// Convenience wrapper over [`segment`] for callers that only need to
/// pick the scale parameter.
pub fn segment_grid<T, W>(grid: &Grid<T>, scale: f64, weighter: &W) -> SegmentResult<Segmentation>
where
    W: EdgeWeighter<T>,
{
    let options = SegmentOptions::new().with_scale(scale);
    segment(grid, &options, weighter)
}
