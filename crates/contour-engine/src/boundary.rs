//! Boundary-record adapter.
//!
//! Downstream components (CAD layer emission, project persistence) consume
//! a shared boundary-record shape regardless of where a boundary came
//! from. This module renders contour features into that shape so generated
//! contours flow through the same path as cadastral or survey boundaries.

use serde::Serialize;

use crate::geojson::{ContourFeature, ContourProperties, LineGeometry};

/// Layer type tag for generated contour boundaries.
pub const GENERATED_CONTOURS_LAYER_TYPE: &str = "Generated Contours";

/// Source tag identifying this engine in boundary records.
pub const CONTOUR_SOURCE_API: &str = "contour-engine";

/// The shared boundary shape consumed by downstream CAD/DB components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryRecord {
    pub layer_name: String,
    pub layer_type: &'static str,
    pub geometry: LineGeometry,
    pub properties: ContourProperties,
    pub source_api: &'static str,
    pub elevation: f64,
    pub contour_data: bool,
}

impl BoundaryRecord {
    /// Render one contour feature as a boundary record.
    pub fn from_feature(feature: &ContourFeature) -> Self {
        let elevation = feature.properties.elevation;
        Self {
            layer_name: format!(
                "Contour {}m ({})",
                elevation,
                feature.properties.contour_type.as_str()
            ),
            layer_type: GENERATED_CONTOURS_LAYER_TYPE,
            geometry: feature.geometry.clone(),
            properties: feature.properties.clone(),
            source_api: CONTOUR_SOURCE_API,
            elevation,
            contour_data: true,
        }
    }
}

/// Render all features into boundary records, preserving order.
pub fn to_boundaries(features: &[ContourFeature]) -> Vec<BoundaryRecord> {
    features.iter().map(BoundaryRecord::from_feature).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::emit;
    use crate::grid::GeoPoint;
    use crate::marching::ContourSegment;

    fn features() -> Vec<ContourFeature> {
        let segment = ContourSegment {
            level: 520.0,
            cell: (0, 0),
            start: GeoPoint::new(-33.9, 18.4),
            end: GeoPoint::new(-33.89, 18.41),
        };
        emit(&[segment], 10.0)
    }

    #[test]
    fn test_boundary_shape() {
        let boundaries = to_boundaries(&features());
        assert_eq!(boundaries.len(), 1);

        let b = &boundaries[0];
        assert_eq!(b.layer_name, "Contour 520m (major)");
        assert_eq!(b.layer_type, "Generated Contours");
        assert_eq!(b.source_api, "contour-engine");
        assert_eq!(b.elevation, 520.0);
        assert!(b.contour_data);
        assert_eq!(b.geometry.coordinates.len(), 2);
    }

    #[test]
    fn test_boundary_serializes() {
        let boundaries = to_boundaries(&features());
        let json = serde_json::to_value(&boundaries[0]).unwrap();
        assert_eq!(json["layer_type"], "Generated Contours");
        assert_eq!(json["properties"]["elevation"], 520.0);
        assert_eq!(json["contour_data"], true);
    }
}
