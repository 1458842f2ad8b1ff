//! Static styling metadata for contour tiers.

use std::collections::HashMap;

use serde::Serialize;

use crate::classify::ContourType;

/// Rendering style for one contour tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContourStyle {
    /// Line weight in pixels.
    pub weight: u32,
    /// Line color as a hex string.
    pub color: &'static str,
    /// Line opacity in [0, 1].
    pub opacity: f64,
    /// Dash pattern, `None` for solid lines.
    pub dash_pattern: Option<&'static str>,
}

impl ContourType {
    /// The style for this tier.
    pub fn style(&self) -> ContourStyle {
        match self {
            Self::Minor => ContourStyle {
                weight: 1,
                color: "#8B4513",
                opacity: 0.6,
                dash_pattern: Some("2,4"),
            },
            Self::Major => ContourStyle {
                weight: 2,
                color: "#654321",
                opacity: 0.8,
                dash_pattern: None,
            },
            Self::Index => ContourStyle {
                weight: 3,
                color: "#5D4037",
                opacity: 1.0,
                dash_pattern: None,
            },
        }
    }
}

/// Styling for all contour tiers, keyed by tier.
pub fn contour_styles() -> HashMap<ContourType, ContourStyle> {
    [ContourType::Minor, ContourType::Major, ContourType::Index]
        .into_iter()
        .map(|t| (t, t.style()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_cover_all_tiers() {
        let styles = contour_styles();
        assert_eq!(styles.len(), 3);
        assert_eq!(styles[&ContourType::Minor].weight, 1);
        assert_eq!(styles[&ContourType::Major].weight, 2);
        assert_eq!(styles[&ContourType::Index].weight, 3);
    }

    #[test]
    fn test_only_minor_is_dashed() {
        assert!(ContourType::Minor.style().dash_pattern.is_some());
        assert!(ContourType::Major.style().dash_pattern.is_none());
        assert!(ContourType::Index.style().dash_pattern.is_none());
    }

    #[test]
    fn test_index_is_fully_opaque() {
        assert_eq!(ContourType::Index.style().opacity, 1.0);
    }
}
