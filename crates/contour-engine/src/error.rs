//! Error types for contour generation.

use elevation_client::ElevationError;
use thiserror::Error;

/// Errors that can occur while generating contours.
#[derive(Error, Debug)]
pub enum ContourError {
    /// The contour interval is zero or negative.
    #[error("invalid contour interval: {0} (must be > 0)")]
    InvalidInterval(f64),

    /// Fewer than two grid points per side were requested.
    #[error("invalid grid size: {0} points per side (must be >= 2)")]
    InvalidGridSize(usize),

    /// The elevation provider call failed (network, timeout, rate limit).
    #[error("elevation fetch failed: {0}")]
    ProviderFetchFailed(String),

    /// The provider returned no usable elevation samples.
    #[error("no usable elevation samples returned")]
    EmptyGridData,
}

impl From<ElevationError> for ContourError {
    fn from(err: ElevationError) -> Self {
        Self::ProviderFetchFailed(err.to_string())
    }
}

/// Result type for contour operations.
pub type ContourResult<T> = std::result::Result<T, ContourError>;
