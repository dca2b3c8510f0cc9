//! Place-name geocoding against the Mapbox Places API.

use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::{ConfigError, MAPBOX_BASE_URL_VAR, MAPBOX_TOKEN_VAR};
use crate::domain::{Coordinates, PlaceQuery};
use crate::error::LookupError;
use crate::fetch::{FetchJson, parse_base_url};

use super::types::PlacesResponse;

/// Default base URL for the geocoding API.
const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Path segments of the places endpoint, below the base URL.
const PLACES_PATH: [&str; 3] = ["geocoding", "v5", "mapbox.places"];

/// Result type filter: points of interest only.
const DEFAULT_TYPES: &str = "poi";

/// Configuration for the geocoder.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Access token sent as the `access_token` query parameter
    pub access_token: String,
    /// Base URL for the API
    pub base_url: String,
    /// Value of the `types` filter
    pub types: String,
}

impl GeocoderConfig {
    /// Create a new config with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            types: DEFAULT_TYPES.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Resolves place names to coordinates.
#[derive(Debug, Clone)]
pub struct Geocoder<F> {
    fetcher: F,
    base_url: Url,
    access_token: String,
    types: String,
}

impl<F: FetchJson> Geocoder<F> {
    /// Create a geocoder, validating the configuration up front.
    pub fn new(config: GeocoderConfig, fetcher: F) -> Result<Self, ConfigError> {
        if config.access_token.trim().is_empty() {
            return Err(ConfigError::Missing(MAPBOX_TOKEN_VAR));
        }

        let base_url = parse_base_url(&config.base_url).map_err(|message| ConfigError::Invalid {
            var: MAPBOX_BASE_URL_VAR,
            message,
        })?;

        Ok(Self {
            fetcher,
            base_url,
            access_token: config.access_token,
            types: config.types,
        })
    }

    /// Geocode a free-text place name.
    ///
    /// Empty input is rejected before any request is made.
    pub async fn geocode(&self, place_name: &str) -> Result<Coordinates, LookupError> {
        let place = PlaceQuery::parse(place_name)?;
        self.geocode_place(&place).await
    }

    /// Geocode an already-validated place.
    ///
    /// The service may return several features; the first one is taken as
    /// the answer and the rest are ignored.
    #[instrument(skip(self, place), fields(place = %place))]
    pub async fn geocode_place(&self, place: &PlaceQuery) -> Result<Coordinates, LookupError> {
        let url = self.request_url(place);
        let body = self.fetcher.fetch_json(&url).await?;
        let coords = first_match(place, body)?;

        debug!(%coords, "geocoded place");
        Ok(coords)
    }

    /// Build the request URL. The place name becomes one path segment, so
    /// characters like `/` and `?` are percent-encoded.
    pub(crate) fn request_url(&self, place: &PlaceQuery) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs that cannot take path segments are rejected in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(PLACES_PATH)
                .push(&format!("{}.json", place.as_str()));
        }
        url.query_pairs_mut()
            .append_pair("access_token", &self.access_token)
            .append_pair("types", &self.types);
        url
    }
}

/// Pull the first feature's position out of a places response.
fn first_match(place: &PlaceQuery, body: Value) -> Result<Coordinates, LookupError> {
    let no_match = |reason| LookupError::NoMatch {
        place: place.as_str().to_string(),
        reason,
    };

    let response: PlacesResponse =
        serde_json::from_value(body).map_err(LookupError::unexpected_shape)?;

    let feature = response
        .features
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| no_match("no features returned"))?
        .ok_or_else(|| no_match("first feature is null"))?;

    let position = feature
        .geometry
        .and_then(|g| g.coordinates)
        .ok_or_else(|| no_match("first feature has no coordinates"))?;

    match position.as_slice() {
        [Some(lon), Some(lat), ..] => Coordinates::from_lon_lat(*lon, *lat)
            .map_err(|_| no_match("first feature has non-finite coordinates")),
        [_, _, ..] => Err(no_match("first feature has null coordinates")),
        _ => Err(no_match("first feature has fewer than two coordinates")),
    }
}
