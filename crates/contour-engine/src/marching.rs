//! Per-cell marching squares tracing.
//!
//! Each 2x2 block of lattice nodes is one cell. For a given level, the four
//! cell edges are scanned in fixed N -> E -> S -> W order; an edge crosses
//! the level when the level lies between its endpoint values (inclusive)
//! and the endpoints differ. A cell yields a segment only when exactly two
//! edges cross; ambiguous saddle cells (four crossings) and degenerate
//! float-boundary cases (one or three) yield nothing.
//!
//! Known limitations, by design:
//! - segments are not stitched into polylines across cells; a consumer
//!   wanting continuous isolines must merge segments sharing endpoints;
//! - saddle cells are skipped rather than disambiguated.
//!
//! Crossing points are linearly interpolated in grid-step space, not along
//! geodesics; fine at the sub-5 km footprints this pipeline targets.

use crate::grid::{FilledGrid, GeoPoint, GridMetadata};

/// One traced line segment: two geographic points, tied to one cell and
/// one elevation level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourSegment {
    /// The elevation level this segment belongs to.
    pub level: f64,
    /// The (row, col) of the cell's NW corner node.
    pub cell: (usize, usize),
    pub start: GeoPoint,
    pub end: GeoPoint,
}

/// Trace all segments of `level` across the grid.
pub fn trace(grid: &FilledGrid, meta: &GridMetadata, level: f64) -> Vec<ContourSegment> {
    let n = grid.size();
    let mut segments = Vec::new();

    if n < 2 {
        return segments;
    }

    for row in 0..n - 1 {
        for col in 0..n - 1 {
            let nw = grid.get(row, col);
            let ne = grid.get(row, col + 1);
            let sw = grid.get(row + 1, col);
            let se = grid.get(row + 1, col + 1);

            // No crossing is possible when the level is outside the cell's
            // value range.
            let lo = nw.min(ne).min(sw).min(se);
            let hi = nw.max(ne).max(sw).max(se);
            if level < lo || level > hi {
                continue;
            }

            if let Some(segment) = cell_segment(meta, row, col, nw, ne, sw, se, level) {
                segments.push(segment);
            }
        }
    }

    segments
}

/// Compute the segment for one cell, if exactly two edges cross the level.
#[allow(clippy::too_many_arguments)]
fn cell_segment(
    meta: &GridMetadata,
    row: usize,
    col: usize,
    nw: f64,
    ne: f64,
    sw: f64,
    se: f64,
    level: f64,
) -> Option<ContourSegment> {
    let nw_pt = meta.point_coords(row, col);
    let ne_pt = meta.point_coords(row, col + 1);
    let sw_pt = meta.point_coords(row + 1, col);
    let se_pt = meta.point_coords(row + 1, col + 1);

    // Fixed traversal order: N, E, S, W.
    let edges = [
        (nw, ne, nw_pt, ne_pt),
        (ne, se, ne_pt, se_pt),
        (se, sw, se_pt, sw_pt),
        (sw, nw, sw_pt, nw_pt),
    ];

    let mut crossings: Vec<GeoPoint> = Vec::with_capacity(2);
    for (v0, v1, p0, p1) in edges {
        if let Some(point) = edge_crossing(level, v0, v1, p0, p1) {
            crossings.push(point);
        }
    }

    // Exactly two crossings form a segment. Zero means no contour here;
    // four is a saddle cell; one or three only appear at floating-point
    // boundaries. All of those produce no segment.
    if crossings.len() == 2 {
        Some(ContourSegment {
            level,
            cell: (row, col),
            start: crossings[0],
            end: crossings[1],
        })
    } else {
        None
    }
}

/// Where the level crosses the edge from `p0` (value `v0`) to `p1`
/// (value `v1`), if it does.
///
/// Equal endpoint values never cross, even when they equal the level;
/// this both avoids a zero division and keeps flat terrain contour-free.
fn edge_crossing(level: f64, v0: f64, v1: f64, p0: GeoPoint, p1: GeoPoint) -> Option<GeoPoint> {
    if v0 == v1 {
        return None;
    }

    let between = (v0 <= level && level <= v1) || (v1 <= level && level <= v0);
    if !between {
        return None;
    }

    let t = (level - v0) / (v1 - v0);
    Some(GeoPoint::new(
        p0.latitude + t * (p1.latitude - p0.latitude),
        p0.longitude + t * (p1.longitude - p0.longitude),
    ))
}
