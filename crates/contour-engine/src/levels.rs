//! Contour level planning.

use crate::error::{ContourError, ContourResult};
use crate::grid::GridMetadata;

/// Compute the ascending contour levels for a grid's elevation range.
///
/// Levels are the integer multiples of `interval` inside
/// `[elevation_min, elevation_max]` (range endpoints rounded inward to
/// interval boundaries). A flat grid, or a range narrower than one
/// interval, yields an empty list; that is a valid outcome, not an error.
///
/// Levels are built from integer level indices rather than repeated
/// addition, so each level is an exact multiple of the interval.
pub fn plan_levels(meta: &GridMetadata, interval: f64) -> ContourResult<Vec<f64>> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(ContourError::InvalidInterval(interval));
    }

    let start = (meta.elevation_min / interval).ceil() as i64;
    let end = (meta.elevation_max / interval).floor() as i64;

    if start > end {
        return Ok(Vec::new());
    }

    Ok((start..=end).map(|k| k as f64 * interval).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::FilledGrid;

    fn meta_with_range(min: f64, max: f64) -> GridMetadata {
        let mut meta = GridMetadata::new(-33.9, 18.4, 2.0, 4).unwrap();
        meta.elevation_min = min;
        meta.elevation_max = max;
        meta.elevation_mean = (min + max) / 2.0;
        meta
    }

    #[test]
    fn test_planner_boundary_rounding() {
        // start = ceil(2.3 / 10) * 10 = 10, end = floor(37.9 / 10) * 10 = 30.
        let levels = plan_levels(&meta_with_range(2.3, 37.9), 10.0).unwrap();
        assert_eq!(levels, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_levels_are_interval_multiples_in_range() {
        let meta = meta_with_range(-17.2, 53.4);
        let interval = 2.5;
        let levels = plan_levels(&meta, interval).unwrap();
        assert!(!levels.is_empty());
        for level in &levels {
            let ratio = level / interval;
            assert!((ratio - ratio.round()).abs() < 1e-9);
            assert!(*level >= meta.elevation_min && *level <= meta.elevation_max);
        }
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_exact_boundaries_included() {
        let levels = plan_levels(&meta_with_range(10.0, 30.0), 10.0).unwrap();
        assert_eq!(levels, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_flat_grid_yields_no_levels() {
        let levels = plan_levels(&meta_with_range(5.0, 5.0), 10.0).unwrap();
        assert!(levels.is_empty());
    }

    #[test]
    fn test_range_narrower_than_interval() {
        let levels = plan_levels(&meta_with_range(11.0, 18.0), 10.0).unwrap();
        assert!(levels.is_empty());
    }

    #[test]
    fn test_invalid_interval_rejected() {
        let meta = meta_with_range(0.0, 100.0);
        assert!(matches!(
            plan_levels(&meta, 0.0),
            Err(ContourError::InvalidInterval(_))
        ));
        assert!(matches!(
            plan_levels(&meta, -5.0),
            Err(ContourError::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_negative_elevation_range() {
        let levels = plan_levels(&meta_with_range(-35.0, -5.0), 10.0).unwrap();
        assert_eq!(levels, vec![-30.0, -20.0, -10.0]);
    }

    #[test]
    fn test_stats_flow_from_filled_grid() {
        let grid = FilledGrid::from_values(2, vec![2.3, 15.0, 25.0, 37.9]);
        let meta = GridMetadata::new(-33.9, 18.4, 2.0, 2)
            .unwrap()
            .with_elevation_stats(&grid);
        let levels = plan_levels(&meta, 10.0).unwrap();
        assert_eq!(levels, vec![10.0, 20.0, 30.0]);
    }
}
