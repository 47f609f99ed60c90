//! Segment colorization
//!
//! Maps each segment of a [`Segmentation`] to a display color and renders
//! an output grid of the same dimensions. Two schemes are provided:
//! random per-segment colors (optionally seeded for reproducible output)
//! and mean-color rendering, where each segment is painted with the
//! average of its source samples.

use std::collections::HashMap;

use crate::error::{ColorError, ColorResult};
use gridseg_core::{Grid, Rgb};
use gridseg_segment::{SegmentId, Segmentation};
use rand::{Rng, RngExt};

/// Render a segmentation with a random color per segment.
///
/// Colors are drawn from the thread-local generator, so repeated calls
/// produce different palettes over the same partition. Use
/// [`colorize_with_rng`] for reproducible output.
pub fn colorize(seg: &Segmentation) -> ColorResult<Grid<Rgb>> {
    colorize_with_rng(seg, &mut rand::rng())
}

/// Render a segmentation with a random color per segment, drawing from
/// the supplied generator.
///
/// Segments are assigned colors in their deterministic
/// [`Segmentation::segments`] order, so a seeded generator yields a
/// reproducible rendering.
pub fn colorize_with_rng<R: Rng + ?Sized>(
    seg: &Segmentation,
    rng: &mut R,
) -> ColorResult<Grid<Rgb>> {
    let palette: HashMap<SegmentId, Rgb> = seg
        .segments()
        .into_iter()
        .map(|id| {
            let color = Rgb::new(rng.random(), rng.random(), rng.random());
            (id, color)
        })
        .collect();

    render(seg, |id| palette[&id])
}

/// Render a segmentation with each segment's mean source color.
///
/// # Errors
///
/// Returns [`ColorError::DimensionMismatch`] if `source` does not have
/// the segmentation's dimensions.
pub fn mean_colors(seg: &Segmentation, source: &Grid<Rgb>) -> ColorResult<Grid<Rgb>> {
    if source.width() != seg.width() || source.height() != seg.height() {
        return Err(ColorError::DimensionMismatch {
            expected_w: seg.width(),
            expected_h: seg.height(),
            actual_w: source.width(),
            actual_h: source.height(),
        });
    }

    #[derive(Default)]
    struct Accum {
        r: u64,
        g: u64,
        b: u64,
        count: u64,
    }

    let mut sums: HashMap<SegmentId, Accum> = HashMap::new();
    for (row, col, id) in seg.iter() {
        let sample = source
            .get(row, col)
            .copied()
            .unwrap_or_default();
        let acc = sums.entry(id).or_default();
        acc.r += sample.r as u64;
        acc.g += sample.g as u64;
        acc.b += sample.b as u64;
        acc.count += 1;
    }

    let palette: HashMap<SegmentId, Rgb> = sums
        .into_iter()
        .map(|(id, acc)| {
            let color = Rgb::new(
                (acc.r / acc.count) as u8,
                (acc.g / acc.count) as u8,
                (acc.b / acc.count) as u8,
            );
            (id, color)
        })
        .collect();

    render(seg, |id| palette[&id])
}

/// Paint every cell with the color assigned to its segment.
fn render<F>(seg: &Segmentation, color_of: F) -> ColorResult<Grid<Rgb>>
where
    F: Fn(SegmentId) -> Rgb,
{
    let cells: Vec<Rgb> = seg.iter().map(|(_, _, id)| color_of(id)).collect();
    Ok(Grid::from_vec(seg.width(), seg.height(), cells)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight::euclidean_rgb;
    use gridseg_segment::segment_grid;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn two_plateau_grid() -> Grid<Rgb> {
        let mut rows = Vec::new();
        for _ in 0..3 {
            let mut row = vec![Rgb::new(10, 10, 10); 2];
            row.extend(vec![Rgb::new(240, 240, 240); 2]);
            rows.push(row);
        }
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_colorize_uniform_within_segment() {
        let grid = two_plateau_grid();
        let seg = segment_grid(&grid, 50.0, &euclidean_rgb).unwrap();
        assert_eq!(seg.segment_count(), 2);

        let colored = colorize(&seg).unwrap();
        assert_eq!(colored.width(), 4);
        assert_eq!(colored.height(), 3);

        // All cells of a segment share a color; segments differ only if
        // the random palette happens to collide, which we do not assert.
        for (row, col, id) in seg.iter() {
            let anchor = seg
                .iter()
                .find(|&(_, _, other)| other == id)
                .map(|(r, c, _)| (r, c))
                .unwrap();
            assert_eq!(colored.get(row, col), colored.get(anchor.0, anchor.1));
        }
    }

    #[test]
    fn test_seeded_colorize_reproducible() {
        let grid = two_plateau_grid();
        let seg = segment_grid(&grid, 50.0, &euclidean_rgb).unwrap();

        let first = colorize_with_rng(&seg, &mut StdRng::seed_from_u64(99)).unwrap();
        let second = colorize_with_rng(&seg, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mean_colors_averages_segment() {
        let grid = Grid::from_rows(vec![vec![
            Rgb::new(10, 0, 0),
            Rgb::new(20, 0, 0),
            Rgb::new(200, 0, 0),
            Rgb::new(200, 0, 0),
        ]])
        .unwrap();
        let seg = segment_grid(&grid, 30.0, &euclidean_rgb).unwrap();
        assert_eq!(seg.segment_count(), 2);

        let rendered = mean_colors(&seg, &grid).unwrap();
        assert_eq!(rendered.get(0, 0), Some(&Rgb::new(15, 0, 0)));
        assert_eq!(rendered.get(0, 1), Some(&Rgb::new(15, 0, 0)));
        assert_eq!(rendered.get(0, 2), Some(&Rgb::new(200, 0, 0)));
    }

    #[test]
    fn test_mean_colors_dimension_mismatch() {
        let grid = two_plateau_grid();
        let seg = segment_grid(&grid, 50.0, &euclidean_rgb).unwrap();
        let wrong = Grid::new(2, 2, Rgb::default()).unwrap();
        assert!(matches!(
            mean_colors(&seg, &wrong),
            Err(ColorError::DimensionMismatch { .. })
        ));
    }
}
