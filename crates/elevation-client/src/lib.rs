//! Batched point-elevation client for the Open Topo Data API.
//!
//! This crate is the elevation collaborator for the contour pipeline:
//! - `ElevationSource` - the async seam the pipeline depends on
//! - `OpenTopoDataClient` - the HTTP implementation with provider-side
//!   rate limiting (1 request/second, 1000 requests/day, 100 locations
//!   per batched call)
//! - the SRTM/ASTER dataset catalog

pub mod client;
pub mod datasets;
pub mod error;
pub mod rate_limit;
pub mod source;
pub mod types;

pub use client::{ClientConfig, OpenTopoDataClient};
pub use datasets::{dataset_catalog, is_known_dataset, DatasetInfo};
pub use error::{ElevationError, ElevationResult};
pub use rate_limit::{RateLimitStatus, RateLimiter};
pub use source::ElevationSource;
pub use types::{ElevationSample, SampleCoordinate};
