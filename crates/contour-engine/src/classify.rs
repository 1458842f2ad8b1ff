//! Contour tier classification.
//!
//! Tiers drive map styling: every 10th interval is an index contour,
//! every 5th a major contour, everything else minor. The multiple-of test
//! runs on the level index with an epsilon tolerance; exact floating-point
//! modulo misclassifies levels near representable-number boundaries.

use serde::{Deserialize, Serialize};

/// Styling tier of a contour level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContourType {
    Minor,
    Major,
    Index,
}

impl ContourType {
    /// Tier name as used in feature properties and layer names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Index => "index",
        }
    }
}

impl std::fmt::Display for ContourType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tolerance for the level-index multiple test.
const INDEX_EPSILON: f64 = 1e-6;

/// Whether `elevation` is an integer multiple of `base`, within tolerance.
fn is_multiple_of(elevation: f64, base: f64) -> bool {
    let ratio = elevation / base;
    (ratio - ratio.round()).abs() < INDEX_EPSILON
}

/// Classify an elevation level for a given contour interval.
///
/// Index contours fall on every 10th interval (e.g. every 100 m at a 10 m
/// interval), major contours on every 5th, all others are minor.
pub fn classify(elevation: f64, interval: f64) -> ContourType {
    if is_multiple_of(elevation, interval * 10.0) {
        ContourType::Index
    } else if is_multiple_of(elevation, interval * 5.0) {
        ContourType::Major
    } else {
        ContourType::Minor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_table() {
        assert_eq!(classify(100.0, 10.0), ContourType::Index);
        assert_eq!(classify(50.0, 10.0), ContourType::Major);
        assert_eq!(classify(30.0, 10.0), ContourType::Minor);
    }

    #[test]
    fn test_fractional_interval() {
        // 2.5 m interval: index every 25 m, major every 12.5 m.
        assert_eq!(classify(25.0, 2.5), ContourType::Index);
        assert_eq!(classify(12.5, 2.5), ContourType::Major);
        assert_eq!(classify(7.5, 2.5), ContourType::Minor);
    }

    #[test]
    fn test_tolerance_absorbs_float_noise() {
        // 0.1 is not exactly representable; accumulated multiples drift.
        let noisy = 0.1 * 3.0 * 10.0 + 1e-9;
        assert_eq!(classify(noisy, 0.3), ContourType::Index);
    }

    #[test]
    fn test_negative_levels() {
        assert_eq!(classify(-100.0, 10.0), ContourType::Index);
        assert_eq!(classify(-50.0, 10.0), ContourType::Major);
        assert_eq!(classify(-30.0, 10.0), ContourType::Minor);
    }

    #[test]
    fn test_zero_is_index() {
        assert_eq!(classify(0.0, 10.0), ContourType::Index);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContourType::Major).unwrap(),
            "\"major\""
        );
    }
}
