//! The async seam between the contour pipeline and its elevation provider.

use async_trait::async_trait;

use crate::error::ElevationResult;
use crate::types::{ElevationSample, SampleCoordinate};

/// A batched point-elevation provider.
///
/// The contour pipeline issues exactly one `fetch_elevations` call per
/// invocation and treats any failure as fatal for that invocation. Rate
/// limiting, caching, and retry policy (if any) belong to implementations
/// of this trait, not to the pipeline.
#[async_trait]
pub trait ElevationSource: Send + Sync {
    /// Fetch elevations for a batch of coordinates from the named dataset.
    ///
    /// Returns one sample per requested coordinate, in request order, with
    /// `elevation: None` for points the provider has no value for.
    async fn fetch_elevations(
        &self,
        coordinates: &[SampleCoordinate],
        dataset: &str,
    ) -> ElevationResult<Vec<ElevationSample>>;
}
