//! Core types exchanged with the elevation provider.

use serde::{Deserialize, Serialize};

/// A geographic point for which an elevation sample is requested.
///
/// Computed once by the grid mapper and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl SampleCoordinate {
    /// Create a new sample coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A raw elevation result from the provider.
///
/// `elevation` is `None` when the provider returned null for the point
/// (ocean, void pixels, or coordinates outside dataset coverage).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationSample {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
}

impl ElevationSample {
    /// Create a new elevation sample.
    pub fn new(latitude: f64, longitude: f64, elevation: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }

    /// Whether the provider returned a value for this point.
    pub fn has_elevation(&self) -> bool {
        self.elevation.is_some()
    }
}
