//! Pipeline orchestration.
//!
//! Runs the full contouring sequence for one request: lattice generation,
//! a single batched elevation fetch, grid assembly, gap filling, level
//! planning, per-level tracing, and feature emission. The provider call is
//! the only suspension point; its failure aborts the whole run with no
//! partial output. Each invocation is independent and holds no state
//! between runs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use elevation_client::ElevationSource;

use crate::boundary::{to_boundaries, BoundaryRecord};
use crate::config::ContourConfig;
use crate::error::{ContourError, ContourResult};
use crate::geojson::{emit, summarize, ContourFeature, ContourStatistics};
use crate::grid::{assemble, generate_grid, GridMetadata};
use crate::interpolate::fill;
use crate::levels::plan_levels;
use crate::marching::{trace, ContourSegment};

/// Echo of the request parameters, carried on the output envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestParameters {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub contour_interval: f64,
    pub grid_size_km: f64,
    pub grid_points: usize,
    pub dataset: String,
}

/// Result of one contour generation run.
#[derive(Debug, Clone, Serialize)]
pub struct ContourOutput {
    pub contour_lines: Vec<ContourFeature>,
    pub parameters: RequestParameters,
    pub statistics: ContourStatistics,
    pub boundaries: Vec<BoundaryRecord>,
    pub generated_at: DateTime<Utc>,
}

/// Contour generation service over an injected elevation source.
pub struct ContourGenerator<S> {
    source: S,
}

impl<S: ElevationSource> ContourGenerator<S> {
    /// Create a generator backed by the given elevation source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generate contour lines around a center point.
    ///
    /// Issues exactly one batched request to the elevation source, then
    /// runs the pure pipeline over the returned samples.
    pub async fn generate_contours(
        &self,
        center_lat: f64,
        center_lng: f64,
        config: &ContourConfig,
    ) -> ContourResult<ContourOutput> {
        // Reject bad parameters before touching the network.
        if !config.contour_interval.is_finite() || config.contour_interval <= 0.0 {
            return Err(ContourError::InvalidInterval(config.contour_interval));
        }
        let meta = GridMetadata::new(center_lat, center_lng, config.grid_size_km, config.grid_points)?;

        let coordinates = generate_grid(&meta);
        info!(
            center_lat = center_lat,
            center_lng = center_lng,
            interval = config.contour_interval,
            grid_points = config.grid_points,
            samples = coordinates.len(),
            dataset = %config.dataset,
            "generating contours"
        );

        let samples = self
            .source
            .fetch_elevations(&coordinates, &config.dataset)
            .await?;

        let (raw_grid, filled_count) = assemble(&samples, &meta)?;
        let grid = fill(&raw_grid);
        let meta = meta.with_elevation_stats(&grid);

        debug!(
            filled = filled_count,
            total = coordinates.len(),
            elevation_min = meta.elevation_min,
            elevation_max = meta.elevation_max,
            "elevation grid ready"
        );

        let levels = plan_levels(&meta, config.contour_interval)?;

        let mut segments: Vec<ContourSegment> = Vec::new();
        for level in &levels {
            segments.extend(trace(&grid, &meta, *level));
        }

        let contour_lines = emit(&segments, config.contour_interval);
        let statistics = summarize(&contour_lines, &meta);
        let boundaries = to_boundaries(&contour_lines);

        info!(
            contours = contour_lines.len(),
            levels = levels.len(),
            "contour generation complete"
        );

        Ok(ContourOutput {
            contour_lines,
            parameters: RequestParameters {
                center_latitude: center_lat,
                center_longitude: center_lng,
                contour_interval: config.contour_interval,
                grid_size_km: config.grid_size_km,
                grid_points: config.grid_points,
                dataset: config.dataset.clone(),
            },
            statistics,
            boundaries,
            generated_at: Utc::now(),
        })
    }
}
