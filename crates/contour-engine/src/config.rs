//! Configuration surface for contour generation.

use serde::{Deserialize, Serialize};

/// Parameters controlling one contour generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContourConfig {
    /// Elevation interval between contour levels, in meters.
    pub contour_interval: f64,

    /// Physical footprint of the sampling grid, in kilometers per side.
    pub grid_size_km: f64,

    /// Number of sample points per grid side (n x n lattice).
    pub grid_points: usize,

    /// Elevation dataset id passed to the provider.
    pub dataset: String,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            contour_interval: 10.0,
            grid_size_km: 2.0,
            grid_points: 12,
            dataset: "srtm30m".to_string(),
        }
    }
}

impl ContourConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("CONTOUR_INTERVAL") {
            if let Ok(interval) = val.parse() {
                config.contour_interval = interval;
            }
        }

        if let Ok(val) = std::env::var("CONTOUR_GRID_SIZE_KM") {
            if let Ok(size) = val.parse() {
                config.grid_size_km = size;
            }
        }

        if let Ok(val) = std::env::var("CONTOUR_GRID_POINTS") {
            if let Ok(points) = val.parse() {
                config.grid_points = points;
            }
        }

        if let Ok(val) = std::env::var("CONTOUR_DATASET") {
            if !val.is_empty() {
                config.dataset = val;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.contour_interval.is_finite() || self.contour_interval <= 0.0 {
            return Err("contour_interval must be > 0".to_string());
        }

        if !self.grid_size_km.is_finite() || self.grid_size_km <= 0.0 {
            return Err("grid_size_km must be > 0".to_string());
        }

        if self.grid_points < 2 {
            return Err("grid_points must be >= 2".to_string());
        }

        if self.dataset.is_empty() {
            return Err("dataset must not be empty".to_string());
        }

        Ok(())
    }

    /// Total number of sample coordinates this configuration requests.
    pub fn total_points(&self) -> usize {
        self.grid_points * self.grid_points
    }
}
