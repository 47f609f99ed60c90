//! Segmentation engine regression test
//!
//! Exercises the full merge pipeline over small grids with hand-checked
//! expected partitions:
//! 1. A 1x4 row whose middle edge must be rejected by the size-adaptive
//!    threshold (weights 1, 5, 1 with k = 2)
//! 2. Degenerate grids (1x1, uniform, fully heterogeneous)
//! 3. Determinism of repeated runs
//! 4. Monotonically non-increasing segment count while the merge loop
//!    consumes the sorted edge sequence
//!
//! Run with:
//! ```
//! cargo test -p gridseg-segment --test segment_reg
//! ```

use std::collections::HashMap;

use gridseg_core::Grid;
use gridseg_segment::{
    ConnectivityType, DisjointSetForest, SegmentError, SegmentOptions, build_edges, segment,
    segment_grid, sort_edges,
};
use gridseg_test::RegParams;

fn abs_diff(a: &f64, b: &f64) -> f64 {
    (a - b).abs()
}

#[test]
fn segment_row_threshold_rejection() {
    let mut rp = RegParams::new("segment_row");

    // Cells hold their own indices; weights come from a pair table:
    // w(0,1) = 1, w(1,2) = 5, w(2,3) = 1.
    let mut weights = HashMap::new();
    weights.insert((0u32, 1u32), 1.0);
    weights.insert((1, 2), 5.0);
    weights.insert((2, 3), 1.0);
    let table = move |a: &u32, b: &u32| {
        let key = (*a.min(b), *a.max(b));
        weights[&key]
    };

    let grid = Grid::from_vec(4, 1, vec![0u32, 1, 2, 3]).unwrap();
    let result = segment_grid(&grid, 2.0, &table).expect("segmentation failed");

    // After (0,1,1): merge, internal diff 1. After (2,3,1): merge.
    // (1,2,5): threshold min(1 + 2/2, 1 + 2/2) = 2, rejected.
    rp.compare_values(2.0, result.segment_count() as f64, 0.0);

    let left = result.representative_of(0, 0);
    let right = result.representative_of(0, 3);
    rp.compare_bool(true, left == result.representative_of(0, 1));
    rp.compare_bool(true, right == result.representative_of(0, 2));
    rp.compare_bool(false, left == right);

    assert!(rp.cleanup(), "segment row regression test failed");
}

#[test]
fn segment_degenerate_grids() {
    let mut rp = RegParams::new("segment_degenerate");

    // 1x1: zero edges, one trivial segment
    let single = Grid::new(1, 1, 0.0_f64).unwrap();
    let result = segment_grid(&single, 5.0, &abs_diff).unwrap();
    rp.compare_values(1.0, result.segment_count() as f64, 0.0);
    rp.compare_bool(true, result.representative_of(0, 0).is_some());
    rp.compare_bool(true, result.representative_of(0, 1).is_none());

    // Uniform 2x2: all weights zero, one segment for any positive k
    let uniform = Grid::new(2, 2, 42.0_f64).unwrap();
    let result = segment_grid(&uniform, 0.001, &abs_diff).unwrap();
    rp.compare_values(1.0, result.segment_count() as f64, 0.0);

    // Fully heterogeneous 3x3: every weight above every threshold
    let rows: Vec<Vec<f64>> = (0..3)
        .map(|r| (0..3).map(|c| ((r * 3 + c) * 1000) as f64).collect())
        .collect();
    let hetero = Grid::from_rows(rows).unwrap();
    let result = segment_grid(&hetero, 1.0, &abs_diff).unwrap();
    rp.compare_values(9.0, result.segment_count() as f64, 0.0);

    assert!(rp.cleanup(), "segment degenerate regression test failed");
}

#[test]
fn segment_determinism() {
    let mut rp = RegParams::new("segment_determinism");

    let rows: Vec<Vec<f64>> = (0..16)
        .map(|r| (0..16).map(|c| ((r * 7 + c * 13) % 29) as f64).collect())
        .collect();
    let grid = Grid::from_rows(rows).unwrap();

    let first = segment_grid(&grid, 25.0, &abs_diff).unwrap();
    let second = segment_grid(&grid, 25.0, &abs_diff).unwrap();

    rp.compare_values(first.segment_count() as f64, second.segment_count() as f64, 0.0);
    rp.compare_grids(&first.label_grid(), &second.label_grid());

    // Partition sizes must cover the grid exactly
    let total: u32 = first
        .segments()
        .into_iter()
        .map(|id| first.segment_size(id).unwrap_or(0))
        .sum();
    rp.compare_values(grid.len() as f64, total as f64, 0.0);

    assert!(rp.cleanup(), "segment determinism regression test failed");
}

#[test]
fn segment_count_monotone_during_merge() {
    let mut rp = RegParams::new("segment_monotone");

    let rows: Vec<Vec<f64>> = (0..10)
        .map(|r| (0..10).map(|c| ((r * 11 + c * 5) % 17) as f64).collect())
        .collect();
    let grid = Grid::from_rows(rows).unwrap();
    let k = 20.0;

    // Drive the merge loop by hand through the public building blocks,
    // checking the root count after every edge.
    let mut edges = build_edges(&grid, ConnectivityType::EightWay, &abs_diff).unwrap();
    sort_edges(&mut edges);

    // Sorted sequence must be non-decreasing in weight
    let sorted_ok = edges.windows(2).all(|p| p[0].weight <= p[1].weight);
    rp.compare_bool(true, sorted_ok);

    let mut forest = DisjointSetForest::new(grid.len());
    let mut previous = forest.root_count();
    let mut monotone = true;
    for edge in &edges {
        let root_u = forest.find(edge.u);
        let root_v = forest.find(edge.v);
        if root_u != root_v {
            let threshold = f64::min(
                forest.internal_diff_of(root_u) + k / f64::from(forest.size_of(root_u)),
                forest.internal_diff_of(root_v) + k / f64::from(forest.size_of(root_v)),
            );
            if edge.weight < threshold {
                forest.union(root_u, root_v, edge.weight);
            }
        }
        let current = forest.root_count();
        monotone &= current <= previous;
        previous = current;
    }
    rp.compare_bool(true, monotone);

    // The hand-driven loop must agree with the engine
    let result = segment_grid(&grid, k, &abs_diff).unwrap();
    rp.compare_values(forest.root_count() as f64, result.segment_count() as f64, 0.0);

    assert!(rp.cleanup(), "segment monotonicity regression test failed");
}

#[test]
fn segment_rejects_bad_inputs() {
    let mut rp = RegParams::new("segment_errors");

    let grid = Grid::new(3, 3, 0.0_f64).unwrap();

    // Non-positive and non-finite scales fail before any union
    for k in [0.0, -4.0, f64::NAN] {
        let result = segment_grid(&grid, k, &abs_diff);
        rp.compare_bool(true, matches!(result, Err(SegmentError::InvalidScale(_))));
    }

    // A negative weight is a hard weighter failure
    let result = segment(
        &grid,
        &SegmentOptions::default(),
        &|_: &f64, _: &f64| -0.5,
    );
    rp.compare_bool(true, matches!(result, Err(SegmentError::InvalidWeight { .. })));

    assert!(rp.cleanup(), "segment error regression test failed");
}
