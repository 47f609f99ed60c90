//! Adjacency enumeration and edge construction
//!
//! Builds the weighted adjacency graph the segmentation engine consumes.
//! For every cell, candidate neighbors are enumerated at the relative
//! offsets (+1,0), (0,+1), (+1,+1), (+1,-1); applied from every cell this
//! covers the full undirected 8-adjacency exactly once per pair, with no
//! duplicates and no missed pairs. Four-way connectivity uses only the
//! first two offsets.

use crate::error::{SegmentError, SegmentResult};
use gridseg_core::Grid;

/// Connectivity used when enumerating neighbor pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (down, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl ConnectivityType {
    /// Relative `(row, col)` offsets enumerated from each cell.
    ///
    /// Each undirected pair is produced by exactly one endpoint; the
    /// mirrored offsets are covered from the other side.
    fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            ConnectivityType::FourWay => &[(1, 0), (0, 1)],
            ConnectivityType::EightWay => &[(1, 0), (0, 1), (1, 1), (1, -1)],
        }
    }
}

/// Computes the dissimilarity weight between two adjacent samples.
///
/// Implementations must be deterministic, symmetric, and non-negative.
/// The engine validates every returned weight and fails hard on negative
/// or non-finite values; weighter errors propagate unchanged and are
/// never retried.
pub trait EdgeWeighter<T> {
    /// Weight of the edge between samples `a` and `b`.
    fn weight(&self, a: &T, b: &T) -> SegmentResult<f64>;
}

/// Any infallible closure over sample pairs is a weighter.
impl<T, F> EdgeWeighter<T> for F
where
    F: Fn(&T, &T) -> f64,
{
    fn weight(&self, a: &T, b: &T) -> SegmentResult<f64> {
        Ok(self(a, b))
    }
}

/// A weighted undirected edge between two grid cells.
///
/// Endpoints are flat cell indices into the grid's row-major storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Flat index of the enumerating cell
    pub u: usize,
    /// Flat index of the neighbor cell
    pub v: usize,
    /// Non-negative dissimilarity weight
    pub weight: f64,
}

/// Enumerate all adjacent cell pairs and compute their weights.
///
/// Every enumerated edge is retained, including edges whose weights
/// compare equal; the result is a plain vector, never a deduplicating
/// container.
///
/// # Errors
///
/// Returns [`SegmentError::InvalidWeight`] if the weighter produces a
/// negative or non-finite weight, or propagates the weighter's own error.
pub fn build_edges<T, W>(
    grid: &Grid<T>,
    connectivity: ConnectivityType,
    weighter: &W,
) -> SegmentResult<Vec<Edge>>
where
    W: EdgeWeighter<T>,
{
    let height = grid.height() as i64;
    let width = grid.width() as i64;
    let offsets = connectivity.offsets();

    let mut edges = Vec::with_capacity(grid.len() * offsets.len());
    for index in 0..grid.len() {
        let (row, col) = grid.coords_of(index);
        for &(dr, dc) in offsets {
            let nrow = row as i64 + dr;
            let ncol = col as i64 + dc;
            if nrow < 0 || nrow >= height || ncol < 0 || ncol >= width {
                continue;
            }
            let neighbor = (nrow as usize) * (width as usize) + ncol as usize;
            let weight = weighter.weight(grid.sample(index), grid.sample(neighbor))?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(SegmentError::InvalidWeight {
                    weight,
                    from: (row, col),
                    to: (nrow as u32, ncol as u32),
                });
            }
            edges.push(Edge {
                u: index,
                v: neighbor,
                weight,
            });
        }
    }
    Ok(edges)
}

/// Sort edges ascending by weight with a deterministic tie-break on
/// endpoint indices, so equal-weight edges keep a fixed total order and
/// none are conflated.
pub fn sort_edges(edges: &mut [Edge]) {
    edges.sort_unstable_by(|a, b| {
        a.weight
            .total_cmp(&b.weight)
            .then_with(|| a.u.cmp(&b.u))
            .then_with(|| a.v.cmp(&b.v))
    });
}
