//! Error types for the elevation client.

use thiserror::Error;

/// Errors that can occur when querying the elevation provider.
#[derive(Error, Debug)]
pub enum ElevationError {
    /// A provider-side rate limit would be exceeded.
    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    /// More coordinates were requested than the provider accepts per call.
    #[error("too many coordinates: {requested} requested, maximum {max} per request")]
    TooManyLocations { requested: usize, max: usize },

    /// The dataset id is not in the provider's catalog.
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),

    /// HTTP transport failure (network, timeout, non-2xx status).
    #[error("elevation request failed: {0}")]
    Http(String),

    /// The provider returned a body we could not interpret.
    #[error("invalid elevation response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ElevationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<serde_json::Error> for ElevationError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

/// Result type for elevation client operations.
pub type ElevationResult<T> = std::result::Result<T, ElevationError>;
