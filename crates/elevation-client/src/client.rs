//! HTTP client for the Open Topo Data point-elevation API.
//!
//! Issues batched GET requests of the form
//! `/v1/{dataset}?locations=lat,lng|lat,lng&interpolation=bilinear` and
//! maps the JSON response into `ElevationSample`s. One call carries at most
//! 100 coordinates; the limiter paces calls to the provider's published
//! rates. The client performs no retries and no caching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::datasets::is_known_dataset;
use crate::error::{ElevationError, ElevationResult};
use crate::rate_limit::{RateLimitStatus, RateLimiter};
use crate::source::ElevationSource;
use crate::types::{ElevationSample, SampleCoordinate};

/// Maximum coordinates the provider accepts in one request.
pub const MAX_LOCATIONS_PER_REQUEST: usize = 100;

/// Configuration for the Open Topo Data client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// HTTP request timeout.
    pub request_timeout: Duration,
    /// Interpolation method the provider applies within its raster
    /// ("bilinear", "nearest", or "cubic").
    pub interpolation: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.opentopodata.org/v1".to_string(),
            request_timeout: Duration::from_secs(30),
            interpolation: "bilinear".to_string(),
        }
    }
}

/// Wire format of a provider response.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    results: Vec<ApiResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResult {
    elevation: Option<f64>,
    location: ApiLocation,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    lat: f64,
    lng: f64,
}

/// Batched elevation client for Open Topo Data.
pub struct OpenTopoDataClient {
    client: Client,
    config: ClientConfig,
    limiter: RateLimiter,
}

impl OpenTopoDataClient {
    /// Create a client with the given configuration.
    pub fn new(config: ClientConfig) -> ElevationResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ElevationError::Http(e.to_string()))?;

        Ok(Self {
            client,
            config,
            limiter: RateLimiter::open_topo_data(),
        })
    }

    /// Create a client with default configuration.
    pub fn with_defaults() -> ElevationResult<Self> {
        Self::new(ClientConfig::default())
    }

    /// Current rate limit usage.
    pub fn rate_limit_status(&self) -> RateLimitStatus {
        self.limiter.status()
    }

    /// Query elevations for a batch of coordinates.
    pub async fn query_points(
        &self,
        coordinates: &[SampleCoordinate],
        dataset: &str,
    ) -> ElevationResult<Vec<ElevationSample>> {
        if coordinates.len() > MAX_LOCATIONS_PER_REQUEST {
            return Err(ElevationError::TooManyLocations {
                requested: coordinates.len(),
                max: MAX_LOCATIONS_PER_REQUEST,
            });
        }

        if !is_known_dataset(dataset) {
            return Err(ElevationError::UnknownDataset(dataset.to_string()));
        }

        self.limiter.check()?;
        self.limiter.pace().await;

        let locations = format_locations(coordinates);
        let url = format!("{}/{}", self.config.base_url, dataset);

        debug!(
            dataset = dataset,
            points = coordinates.len(),
            "querying elevation batch"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("locations", locations.as_str()),
                ("interpolation", self.config.interpolation.as_str()),
            ])
            .send()
            .await?;

        self.limiter.record();

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ElevationError::Http(format!(
                "provider returned {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let body: ApiResponse = response.json().await?;
        let samples = parse_response(body)?;

        info!(
            dataset = dataset,
            requested = coordinates.len(),
            returned = samples.len(),
            "elevation batch complete"
        );

        Ok(samples)
    }
}

#[async_trait]
impl ElevationSource for OpenTopoDataClient {
    async fn fetch_elevations(
        &self,
        coordinates: &[SampleCoordinate],
        dataset: &str,
    ) -> ElevationResult<Vec<ElevationSample>> {
        self.query_points(coordinates, dataset).await
    }
}

/// Format coordinates as the provider's `lat,lng|lat,lng` locations string.
fn format_locations(coordinates: &[SampleCoordinate]) -> String {
    coordinates
        .iter()
        .map(|c| format!("{},{}", c.latitude, c.longitude))
        .collect::<Vec<_>>()
        .join("|")
}

/// Convert a parsed provider response into elevation samples.
fn parse_response(body: ApiResponse) -> ElevationResult<Vec<ElevationSample>> {
    if let Some(error) = body.error {
        return Err(ElevationError::InvalidResponse(error));
    }

    Ok(body
        .results
        .into_iter()
        .map(|r| ElevationSample::new(r.location.lat, r.location.lng, r.elevation))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_locations() {
        let coords = vec![
            SampleCoordinate::new(-33.9, 18.4),
            SampleCoordinate::new(-33.95, 18.45),
        ];
        assert_eq!(format_locations(&coords), "-33.9,18.4|-33.95,18.45");
    }

    #[test]
    fn test_parse_response_with_nulls() {
        let json = r#"{
            "results": [
                {"elevation": 515.0, "location": {"lat": -33.9, "lng": 18.4}},
                {"elevation": null, "location": {"lat": -33.95, "lng": 18.45}}
            ],
            "status": "OK"
        }"#;
        let body: ApiResponse = serde_json::from_str(json).unwrap();
        let samples = parse_response(body).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].elevation, Some(515.0));
        assert_eq!(samples[1].elevation, None);
        assert_eq!(samples[1].latitude, -33.95);
    }

    #[test]
    fn test_parse_response_provider_error() {
        let json = r#"{"error": "Invalid locations", "status": "INVALID_REQUEST"}"#;
        let body: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            parse_response(body),
            Err(ElevationError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_too_many_locations_rejected() {
        let client = OpenTopoDataClient::with_defaults().unwrap();
        let coords = vec![SampleCoordinate::new(0.0, 0.0); MAX_LOCATIONS_PER_REQUEST + 1];
        let err = tokio_test::block_on(client.query_points(&coords, "srtm30m")).unwrap_err();
        assert!(matches!(
            err,
            ElevationError::TooManyLocations { requested: 101, max: 100 }
        ));
    }

    #[test]
    fn test_unknown_dataset_rejected() {
        let client = OpenTopoDataClient::with_defaults().unwrap();
        let coords = vec![SampleCoordinate::new(0.0, 0.0)];
        let err = tokio_test::block_on(client.query_points(&coords, "marsdem")).unwrap_err();
        assert!(matches!(err, ElevationError::UnknownDataset(_)));
    }
}
