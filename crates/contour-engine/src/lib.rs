//! Elevation-grid contouring pipeline.
//!
//! Given a center coordinate and a sampling footprint, this crate builds a
//! square lattice of elevation samples (fetched in one batch from an
//! injected `ElevationSource`), fills missing samples through a fallback
//! chain, extracts isolines at fixed elevation intervals with a per-cell
//! marching-squares tracer, and emits GeoJSON line features plus the
//! boundary-record shape shared with the rest of the system.
//!
//! Known limitations, by design:
//! - each emitted feature is a single two-point segment; segments are not
//!   stitched into continuous polylines across cells;
//! - ambiguous saddle cells are skipped rather than disambiguated;
//! - contours are not clipped against property boundaries.

pub mod boundary;
pub mod classify;
pub mod config;
pub mod error;
pub mod geojson;
pub mod grid;
pub mod interpolate;
pub mod levels;
pub mod marching;
pub mod pipeline;
pub mod style;

pub use boundary::{to_boundaries, BoundaryRecord};
pub use classify::{classify, ContourType};
pub use config::ContourConfig;
pub use error::{ContourError, ContourResult};
pub use geojson::{emit, summarize, ContourFeature, ContourStatistics, LineGeometry};
pub use grid::{assemble, generate_grid, ElevationGrid, FilledGrid, GeoPoint, GridMetadata};
pub use interpolate::{fill, FillMethod};
pub use levels::plan_levels;
pub use marching::{trace, ContourSegment};
pub use pipeline::{ContourGenerator, ContourOutput, RequestParameters};
pub use style::{contour_styles, ContourStyle};
