//! GeoJSON feature emission and run statistics.
//!
//! Internal grid math works in (latitude, longitude) order; GeoJSON wants
//! `[longitude, latitude]`. `LineGeometry::from_segment` is the single
//! point where that swap happens.

use serde::Serialize;

use crate::classify::{classify, ContourType};
use crate::grid::GridMetadata;
use crate::marching::ContourSegment;
use crate::style::ContourStyle;

/// A GeoJSON LineString geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineGeometry {
    #[serde(rename = "type")]
    pub geometry_type: &'static str,
    /// Coordinate pairs in `[longitude, latitude]` order.
    pub coordinates: Vec<[f64; 2]>,
}

impl LineGeometry {
    /// Build the two-point line for a traced segment.
    pub fn from_segment(segment: &ContourSegment) -> Self {
        Self {
            geometry_type: "LineString",
            coordinates: vec![
                [segment.start.longitude, segment.start.latitude],
                [segment.end.longitude, segment.end.latitude],
            ],
        }
    }
}

/// Properties attached to each contour feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContourProperties {
    pub elevation: f64,
    pub contour_type: ContourType,
    pub feature_id: String,
    pub interval: f64,
    pub style: ContourStyle,
}

/// One emitted contour line feature.
///
/// Each feature is a single two-point segment; segments sharing endpoints
/// are not merged into longer polylines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContourFeature {
    #[serde(rename = "type")]
    pub feature_type: &'static str,
    pub geometry: LineGeometry,
    pub properties: ContourProperties,
}

/// Convert traced segments into GeoJSON features, one per segment.
///
/// Feature ids are sequential in input order, so identical inputs always
/// produce identical output.
pub fn emit(segments: &[ContourSegment], interval: f64) -> Vec<ContourFeature> {
    segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| {
            let contour_type = classify(segment.level, interval);
            ContourFeature {
                feature_type: "Feature",
                geometry: LineGeometry::from_segment(segment),
                properties: ContourProperties {
                    elevation: segment.level,
                    contour_type,
                    feature_id: format!("contour_{idx}"),
                    interval,
                    style: contour_type.style(),
                },
            }
        })
        .collect()
}

/// Elevation range of the filled grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElevationRange {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Summary statistics for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContourStatistics {
    pub total_contours: usize,
    pub elevation_range: ElevationRange,
    /// Distinct traced levels, ascending.
    pub distinct_levels: Vec<f64>,
}

/// Summarize emitted features against the grid's elevation statistics.
pub fn summarize(features: &[ContourFeature], meta: &GridMetadata) -> ContourStatistics {
    let mut levels: Vec<f64> = features.iter().map(|f| f.properties.elevation).collect();
    levels.sort_by(f64::total_cmp);
    levels.dedup();

    ContourStatistics {
        total_contours: features.len(),
        elevation_range: ElevationRange {
            min: meta.elevation_min,
            max: meta.elevation_max,
            mean: meta.elevation_mean,
        },
        distinct_levels: levels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GeoPoint;

    fn segment(level: f64) -> ContourSegment {
        ContourSegment {
            level,
            cell: (0, 0),
            start: GeoPoint::new(-33.9, 18.4),
            end: GeoPoint::new(-33.89, 18.41),
        }
    }

    #[test]
    fn test_emit_swaps_to_lng_lat() {
        let features = emit(&[segment(20.0)], 10.0);
        assert_eq!(features.len(), 1);
        let coords = &features[0].geometry.coordinates;
        assert_eq!(coords[0], [18.4, -33.9]);
        assert_eq!(coords[1], [18.41, -33.89]);
    }

    #[test]
    fn test_emit_properties_and_ids() {
        let features = emit(&[segment(100.0), segment(30.0)], 10.0);
        assert_eq!(features[0].properties.feature_id, "contour_0");
        assert_eq!(features[0].properties.contour_type, ContourType::Index);
        assert_eq!(features[1].properties.feature_id, "contour_1");
        assert_eq!(features[1].properties.contour_type, ContourType::Minor);
        assert_eq!(features[1].properties.interval, 10.0);
    }

    #[test]
    fn test_emit_one_feature_per_segment() {
        // Same level twice: no deduplication.
        let features = emit(&[segment(20.0), segment(20.0)], 10.0);
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_feature_serializes_as_geojson() {
        let features = emit(&[segment(20.0)], 10.0);
        let json = serde_json::to_value(&features[0]).unwrap();
        assert_eq!(json["type"], "Feature");
        assert_eq!(json["geometry"]["type"], "LineString");
        assert_eq!(json["properties"]["contour_type"], "major");
        assert_eq!(json["properties"]["style"]["weight"], 2);
    }

    #[test]
    fn test_summarize_distinct_levels_sorted() {
        let features = emit(&[segment(30.0), segment(10.0), segment(30.0)], 10.0);
        let meta = GridMetadata::new(-33.9, 18.4, 2.0, 2).unwrap();
        let stats = summarize(&features, &meta);
        assert_eq!(stats.total_contours, 3);
        assert_eq!(stats.distinct_levels, vec![10.0, 30.0]);
    }
}
