//! Edge weighters for RGB samples
//!
//! Dissimilarity functions over [`Rgb`] sample pairs, usable anywhere an
//! [`EdgeWeighter`](gridseg_segment::EdgeWeighter) is expected. Both are
//! symmetric, deterministic, and non-negative, as the segmentation
//! engine requires.

use gridseg_core::Rgb;

/// Euclidean distance in RGB space.
///
/// `sqrt(dr^2 + dg^2 + db^2)`, range `[0, ~441.7]`.
pub fn euclidean_rgb(a: &Rgb, b: &Rgb) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Absolute difference of Rec. 601 luma.
///
/// Collapses color to brightness before comparing, range `[0, 255]`.
/// Useful for grayscale-style segmentation of color data.
pub fn luminance_diff(a: &Rgb, b: &Rgb) -> f64 {
    (a.luma() - b.luma()).abs()
}
