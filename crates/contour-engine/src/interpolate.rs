//! Gap filling for partially-populated elevation grids.
//!
//! Provider nulls and dropped samples leave holes in the lattice. Filling
//! walks an ordered fallback chain; the first method whose precondition
//! holds fills the whole grid:
//!
//! 1. `NearestValid` - each hole takes the value of the geometrically
//!    nearest filled cell (Euclidean index distance). Needs at least one
//!    filled cell.
//! 2. `NeighborAverage` - each hole takes the mean of its filled 3x3
//!    neighbors, or the grid-wide mean of known values when it has none.
//!    Also needs at least one filled cell.
//! 3. `Zero` - uniform 0.0, used only for a grid with no data at all.
//!
//! Filling never fails: downstream tracing always sees a dense grid.

use tracing::debug;

use crate::grid::{ElevationGrid, FilledGrid};

/// One gap-filling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMethod {
    /// Copy the nearest filled cell's value into each hole.
    NearestValid,
    /// Average filled 3x3 neighbors, falling back to the global mean.
    NeighborAverage,
    /// Fill uniformly with 0.0.
    Zero,
}

/// The fallback chain, attempted in order.
pub const FILL_CHAIN: [FillMethod; 3] = [
    FillMethod::NearestValid,
    FillMethod::NeighborAverage,
    FillMethod::Zero,
];

impl FillMethod {
    /// Strategy name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NearestValid => "nearest_valid",
            Self::NeighborAverage => "neighbor_average",
            Self::Zero => "zero",
        }
    }

    /// Apply this strategy, or `None` when its precondition does not hold.
    pub fn apply(&self, grid: &ElevationGrid) -> Option<FilledGrid> {
        match self {
            Self::NearestValid => nearest_valid_fill(grid),
            Self::NeighborAverage => neighbor_average_fill(grid),
            Self::Zero => Some(FilledGrid::zeros(grid.size())),
        }
    }
}

/// Fill every hole in the grid. Total: always returns a dense grid.
pub fn fill(grid: &ElevationGrid) -> FilledGrid {
    for method in FILL_CHAIN {
        if let Some(filled) = method.apply(grid) {
            debug!(
                method = method.as_str(),
                holes = grid.size() * grid.size() - grid.filled_count(),
                "filled elevation grid"
            );
            return filled;
        }
    }

    // Zero always applies, so the chain cannot fall through.
    FilledGrid::zeros(grid.size())
}

fn nearest_valid_fill(grid: &ElevationGrid) -> Option<FilledGrid> {
    let known: Vec<(usize, usize, f64)> = grid.iter_filled().collect();
    if known.is_empty() {
        return None;
    }

    let n = grid.size();
    let mut values = Vec::with_capacity(n * n);

    for row in 0..n {
        for col in 0..n {
            let value = match grid.get(row, col) {
                Some(v) => v,
                None => nearest_value(&known, row, col),
            };
            values.push(value);
        }
    }

    Some(FilledGrid::from_values(n, values))
}

/// Value of the known cell closest to (row, col) by squared index distance.
/// Ties resolve to the first cell in row-major scan order.
fn nearest_value(known: &[(usize, usize, f64)], row: usize, col: usize) -> f64 {
    let mut best = known[0].2;
    let mut best_dist = u64::MAX;

    for &(kr, kc, v) in known {
        let dr = kr.abs_diff(row) as u64;
        let dc = kc.abs_diff(col) as u64;
        let dist = dr * dr + dc * dc;
        if dist < best_dist {
            best_dist = dist;
            best = v;
        }
    }

    best
}

fn neighbor_average_fill(grid: &ElevationGrid) -> Option<FilledGrid> {
    if grid.filled_count() == 0 {
        return None;
    }

    let n = grid.size();
    let global_mean = {
        let (sum, count) = grid
            .iter_filled()
            .fold((0.0, 0usize), |(s, c), (_, _, v)| (s + v, c + 1));
        sum / count as f64
    };

    let mut values = Vec::with_capacity(n * n);

    for row in 0..n {
        for col in 0..n {
            let value = match grid.get(row, col) {
                Some(v) => v,
                None => neighbor_mean(grid, row, col).unwrap_or(global_mean),
            };
            values.push(value);
        }
    }

    Some(FilledGrid::from_values(n, values))
}

/// Mean of the filled cells in the 3x3 block around (row, col), if any.
fn neighbor_mean(grid: &ElevationGrid, row: usize, col: usize) -> Option<f64> {
    let n = grid.size() as i64;
    let mut sum = 0.0;
    let mut count = 0usize;

    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            let r = row as i64 + dr;
            let c = col as i64 + dc;
            if r < 0 || r >= n || c < 0 || c >= n {
                continue;
            }
            if let Some(v) = grid.get(r as usize, c as usize) {
                sum += v;
                count += 1;
            }
        }
    }

    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_approx_eq;

    fn grid_from(size: usize, cells: &[Option<f64>]) -> ElevationGrid {
        let mut grid = ElevationGrid::new(size);
        for (idx, cell) in cells.iter().enumerate() {
            if let Some(v) = cell {
                grid.set(idx / size, idx % size, *v);
            }
        }
        grid
    }

    #[test]
    fn test_fill_is_total_for_all_missing() {
        let grid = ElevationGrid::new(4);
        let filled = fill(&grid);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(filled.get(row, col), 0.0);
            }
        }
    }

    #[test]
    fn test_nearest_valid_copies_closest() {
        // One known cell at (0, 0): everything takes its value.
        let grid = grid_from(3, &[
            Some(7.0), None, None,
            None, None, None,
            None, None, None,
        ]);
        let filled = FillMethod::NearestValid.apply(&grid).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(filled.get(row, col), 7.0);
            }
        }
    }

    #[test]
    fn test_nearest_valid_picks_closer_of_two() {
        let grid = grid_from(3, &[
            Some(10.0), None, Some(30.0),
            None, None, None,
            None, None, None,
        ]);
        let filled = FillMethod::NearestValid.apply(&grid).unwrap();
        assert_eq!(filled.get(2, 0), 10.0);
        assert_eq!(filled.get(2, 2), 30.0);
        assert_eq!(filled.get(0, 0), 10.0);
    }

    #[test]
    fn test_nearest_valid_unavailable_when_empty() {
        assert!(FillMethod::NearestValid.apply(&ElevationGrid::new(3)).is_none());
    }

    #[test]
    fn test_neighbor_average_uses_block_mean() {
        let grid = grid_from(3, &[
            Some(10.0), Some(20.0), None,
            None, None, None,
            None, None, Some(90.0),
        ]);
        let filled = FillMethod::NeighborAverage.apply(&grid).unwrap();
        // (0,2) neighbors include only the 20.0 cell.
        assert_eq!(filled.get(0, 2), 20.0);
        // (1,0) sees 10.0 and 20.0.
        assert_approx_eq!(filled.get(1, 0), 15.0, 1e-12);
        // Known cells are untouched.
        assert_eq!(filled.get(2, 2), 90.0);
    }

    #[test]
    fn test_neighbor_average_global_mean_fallback() {
        // (3,3) corner has no filled neighbor in a 4x4 with data only at (0,0).
        let mut grid = ElevationGrid::new(4);
        grid.set(0, 0, 40.0);
        let filled = FillMethod::NeighborAverage.apply(&grid).unwrap();
        assert_eq!(filled.get(3, 3), 40.0);
    }

    #[test]
    fn test_chain_prefers_nearest_valid() {
        let mut grid = ElevationGrid::new(3);
        grid.set(1, 1, 5.0);
        let filled = fill(&grid);
        // NearestValid fills everything from the single known cell.
        assert_eq!(filled.get(0, 0), 5.0);
        assert_eq!(filled.get(2, 2), 5.0);
    }
}
