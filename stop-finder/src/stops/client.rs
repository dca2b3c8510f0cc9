//! Nearest-stop lookup against the MBTA v3 API.

use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::{ConfigError, MBTA_API_KEY_VAR, MBTA_BASE_URL_VAR};
use crate::domain::{Coordinates, StopInfo, WheelchairBoarding};
use crate::error::LookupError;
use crate::fetch::{FetchJson, parse_base_url};

use super::types::StopsResponse;

/// Default base URL for the stops API.
const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Configuration for the stop locator.
#[derive(Debug, Clone)]
pub struct StopsConfig {
    /// API key sent as the `api_key` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
}

impl StopsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Finds the stop nearest to a pair of coordinates.
#[derive(Debug, Clone)]
pub struct StopLocator<F> {
    fetcher: F,
    base_url: Url,
    api_key: String,
}

impl<F: FetchJson> StopLocator<F> {
    /// Create a stop locator, validating the configuration up front.
    pub fn new(config: StopsConfig, fetcher: F) -> Result<Self, ConfigError> {
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::Missing(MBTA_API_KEY_VAR));
        }

        let base_url = parse_base_url(&config.base_url).map_err(|message| ConfigError::Invalid {
            var: MBTA_BASE_URL_VAR,
            message,
        })?;

        Ok(Self {
            fetcher,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Look up the nearest stop.
    ///
    /// Results come back sorted by distance, so the first one is the
    /// nearest. Ties are not broken any further.
    #[instrument(skip(self, coords), fields(coords = %coords))]
    pub async fn nearest_stop(&self, coords: Coordinates) -> Result<StopInfo, LookupError> {
        let url = self.request_url(coords);
        let body = self.fetcher.fetch_json(&url).await?;
        let stop = first_stop(coords, body)?;

        debug!(station = %stop.station_name, accessible = stop.wheelchair_accessible, "found nearest stop");
        Ok(stop)
    }

    pub(crate) fn request_url(&self, coords: Coordinates) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs that cannot take path segments are rejected in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("stops");
        }
        url.query_pairs_mut()
            .append_pair("filter[latitude]", &coords.latitude().to_string())
            .append_pair("filter[longitude]", &coords.longitude().to_string())
            .append_pair("sort", "distance")
            .append_pair("api_key", &self.api_key);
        url
    }
}

/// Pull the first stop's name and accessibility out of a stops response.
fn first_stop(coords: Coordinates, body: Value) -> Result<StopInfo, LookupError> {
    let not_found = |reason| LookupError::NoStopFound { coords, reason };

    let response: StopsResponse =
        serde_json::from_value(body).map_err(LookupError::unexpected_shape)?;

    let attributes = response
        .data
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| not_found("no stops returned"))?
        .ok_or_else(|| not_found("first stop is null"))?
        .attributes
        .ok_or_else(|| not_found("first stop has no attributes"))?;

    let boarding = WheelchairBoarding::from_code(attributes.boarding_code());

    match attributes.name {
        Some(name) if !name.trim().is_empty() => Ok(StopInfo::new(name, boarding)),
        _ => Err(not_found("first stop has no name")),
    }
}
