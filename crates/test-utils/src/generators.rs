//! Generators for synthetic elevation data.
//!
//! Each generator produces predictable terrain so tests can assert exact
//! contour behavior: flat plains never produce segments, uniform slopes
//! produce one crossing row per level, and so on.

use elevation_client::{ElevationSample, SampleCoordinate};

/// A flat n x n terrain at a constant elevation, row-major.
pub fn flat_grid(n: usize, value: f64) -> Vec<f64> {
    vec![value; n * n]
}

/// An n x n terrain rising uniformly row by row, row-major.
///
/// Row `i` has elevation `base + i * step_per_row`, constant along each row.
pub fn slope_grid(n: usize, base: f64, step_per_row: f64) -> Vec<f64> {
    let mut values = Vec::with_capacity(n * n);
    for row in 0..n {
        for _col in 0..n {
            values.push(base + row as f64 * step_per_row);
        }
    }
    values
}

/// An n x n flat terrain with a single raised point at the center.
pub fn peak_grid(n: usize, background: f64, peak: f64) -> Vec<f64> {
    let mut values = vec![background; n * n];
    let center = n / 2;
    values[center * n + center] = peak;
    values
}

/// Pair generated grid coordinates with elevation values into provider-style
/// samples. `values` must have one entry per coordinate; `None` mimics a
/// provider null.
pub fn samples_from_values(
    coordinates: &[SampleCoordinate],
    values: &[Option<f64>],
) -> Vec<ElevationSample> {
    assert_eq!(
        coordinates.len(),
        values.len(),
        "one value required per coordinate"
    );
    coordinates
        .iter()
        .zip(values.iter())
        .map(|(c, v)| ElevationSample::new(c.latitude, c.longitude, *v))
        .collect()
}

/// Null out every `k`-th value, simulating provider gaps.
pub fn drop_every(values: &[f64], k: usize) -> Vec<Option<f64>> {
    assert!(k > 0, "k must be positive");
    values
        .iter()
        .enumerate()
        .map(|(i, v)| if i % k == 0 { None } else { Some(*v) })
        .collect()
}
