//! Elevation sampling lattice: coordinate mapping and grid assembly.
//!
//! The sampling footprint is a square of `grid_size_km` per side centered on
//! the query point, discretized into an n x n lattice. Geographic steps use a
//! flat-earth degree approximation (1 degree latitude ~ 111 km, longitude
//! scaled by cos(latitude)), which is adequate at the sub-5 km footprints
//! this pipeline targets.

use serde::Serialize;
use tracing::debug;

use elevation_client::{ElevationSample, SampleCoordinate};

use crate::error::{ContourError, ContourResult};

/// Kilometers per degree of latitude (and of longitude at the equator).
pub const KM_PER_DEGREE: f64 = 111.0;

/// A geographic point in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Geometry of the sampling lattice plus elevation statistics.
///
/// Steps and half sizes are derived once from the footprint and point count
/// and never recomputed mid-pipeline. The elevation statistics describe the
/// *filled* grid and are zero until `with_elevation_stats` is applied after
/// interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridMetadata {
    pub center_lat: f64,
    pub center_lng: f64,
    pub lat_step: f64,
    pub lng_step: f64,
    pub half_size_lat: f64,
    pub half_size_lng: f64,
    pub grid_points: usize,
    pub elevation_min: f64,
    pub elevation_max: f64,
    pub elevation_mean: f64,
}

impl GridMetadata {
    /// Derive lattice geometry from a center point, footprint, and side count.
    pub fn new(
        center_lat: f64,
        center_lng: f64,
        grid_size_km: f64,
        grid_points: usize,
    ) -> ContourResult<Self> {
        if grid_points < 2 {
            return Err(ContourError::InvalidGridSize(grid_points));
        }

        let km_to_deg_lat = 1.0 / KM_PER_DEGREE;
        let km_to_deg_lng = 1.0 / (KM_PER_DEGREE * center_lat.to_radians().cos().abs());

        let half_size_lat = (grid_size_km / 2.0) * km_to_deg_lat;
        let half_size_lng = (grid_size_km / 2.0) * km_to_deg_lng;

        let divisions = (grid_points - 1) as f64;
        let lat_step = (2.0 * half_size_lat) / divisions;
        let lng_step = (2.0 * half_size_lng) / divisions;

        Ok(Self {
            center_lat,
            center_lng,
            lat_step,
            lng_step,
            half_size_lat,
            half_size_lng,
            grid_points,
            elevation_min: 0.0,
            elevation_max: 0.0,
            elevation_mean: 0.0,
        })
    }

    /// Latitude of row 0.
    pub fn origin_lat(&self) -> f64 {
        self.center_lat - self.half_size_lat
    }

    /// Longitude of column 0.
    pub fn origin_lng(&self) -> f64 {
        self.center_lng - self.half_size_lng
    }

    /// Geographic coordinates of lattice node (row, col).
    pub fn point_coords(&self, row: usize, col: usize) -> GeoPoint {
        GeoPoint::new(
            self.origin_lat() + row as f64 * self.lat_step,
            self.origin_lng() + col as f64 * self.lng_step,
        )
    }

    /// Inverse mapping: nearest lattice node for a geographic coordinate.
    ///
    /// Returns `None` when the rounded index falls outside the lattice (the
    /// provider echoed a coordinate outside the grid, typically due to its
    /// own rounding). Such samples are deliberately dropped, not errors.
    pub fn coordinate_to_index(&self, latitude: f64, longitude: f64) -> Option<(usize, usize)> {
        let row = ((latitude - self.origin_lat()) / self.lat_step).round();
        let col = ((longitude - self.origin_lng()) / self.lng_step).round();

        let max = (self.grid_points - 1) as f64;
        if row < 0.0 || row > max || col < 0.0 || col > max {
            return None;
        }

        Some((row as usize, col as usize))
    }

    /// Copy elevation statistics from a filled grid into the metadata.
    pub fn with_elevation_stats(mut self, grid: &FilledGrid) -> Self {
        self.elevation_min = grid.min();
        self.elevation_max = grid.max();
        self.elevation_mean = grid.mean();
        self
    }
}

/// Generate the n x n sample lattice in row-major order (row i, column j).
pub fn generate_grid(meta: &GridMetadata) -> Vec<SampleCoordinate> {
    let n = meta.grid_points;
    let mut coordinates = Vec::with_capacity(n * n);

    for row in 0..n {
        for col in 0..n {
            let point = meta.point_coords(row, col);
            coordinates.push(SampleCoordinate::new(point.latitude, point.longitude));
        }
    }

    coordinates
}

/// A square elevation lattice with possibly-missing cells.
///
/// Missing data is a first-class `None`, never a NaN sentinel, so arithmetic
/// on unfilled cells is impossible by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationGrid {
    size: usize,
    cells: Vec<Option<f64>>,
}

impl ElevationGrid {
    /// Create an empty n x n grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at (row, col), if filled.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(row * self.size + col).copied().flatten()
    }

    /// Write a cell. Duplicate writes keep the last value.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = Some(value);
        }
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate filled cells as (row, col, value).
    pub fn iter_filled(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, c)| {
            c.map(|v| (idx / self.size, idx % self.size, v))
        })
    }
}

/// A fully dense elevation lattice, produced only by interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledGrid {
    size: usize,
    values: Vec<f64>,
}

impl FilledGrid {
    /// Build from row-major values; `values.len()` must equal `size * size`.
    pub fn from_values(size: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), size * size);
        Self { size, values }
    }

    /// An all-zero grid.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    /// Minimum elevation.
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Maximum elevation.
    pub fn max(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Mean elevation.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}

/// Place raw provider samples into the lattice.
///
/// Samples without an elevation are skipped; samples whose coordinates round
/// outside the lattice are dropped. Returns the grid and the number of cells
/// actually written. Fails with `EmptyGridData` when no sample carries an
/// elevation at all.
pub fn assemble(
    samples: &[ElevationSample],
    meta: &GridMetadata,
) -> ContourResult<(ElevationGrid, usize)> {
    if !samples.iter().any(|s| s.elevation.is_some()) {
        return Err(ContourError::EmptyGridData);
    }

    let mut grid = ElevationGrid::new(meta.grid_points);
    let mut dropped = 0usize;

    for sample in samples {
        let Some(elevation) = sample.elevation else {
            continue;
        };

        match meta.coordinate_to_index(sample.latitude, sample.longitude) {
            Some((row, col)) => grid.set(row, col, elevation),
            None => dropped += 1,
        }
    }

    let filled = grid.filled_count();
    debug!(
        filled = filled,
        dropped = dropped,
        total = samples.len(),
        "assembled elevation grid"
    );

    Ok((grid, filled))
}
