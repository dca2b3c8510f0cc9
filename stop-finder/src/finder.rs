//! Place name to nearest stop, end to end.
//!
//! Geocodes the place, then looks up the stop nearest to the result.
//! The two requests run strictly in sequence and the first failure is
//! returned as-is.

use tracing::{info, instrument};

use crate::config::{ConfigError, FinderConfig};
use crate::domain::{PlaceQuery, StopInfo};
use crate::error::LookupError;
use crate::fetch::{FetchJson, JsonFetcher};
use crate::geocode::{Geocoder, GeocoderConfig};
use crate::stops::{StopLocator, StopsConfig};

/// The two-stage lookup pipeline.
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent lookups.
#[derive(Debug, Clone)]
pub struct StopFinder<F> {
    geocoder: Geocoder<F>,
    stops: StopLocator<F>,
}

impl<F: FetchJson + Clone> StopFinder<F> {
    /// Build both resolvers over a shared fetcher.
    ///
    /// Fails if either credential is missing, before anything touches the
    /// network.
    pub fn new(
        geocoder: GeocoderConfig,
        stops: StopsConfig,
        fetcher: F,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            geocoder: Geocoder::new(geocoder, fetcher.clone())?,
            stops: StopLocator::new(stops, fetcher)?,
        })
    }

    /// Find the stop nearest to a free-text place name.
    #[instrument(skip(self))]
    pub async fn find_stop_near(&self, place_name: &str) -> Result<StopInfo, LookupError> {
        let place = PlaceQuery::parse(place_name)?;
        let coords = self.geocoder.geocode_place(&place).await?;
        let stop = self.stops.nearest_stop(coords).await?;

        info!(%coords, station = %stop.station_name, accessible = stop.wheelchair_accessible, "resolved nearest stop");
        Ok(stop)
    }

    pub fn geocoder(&self) -> &Geocoder<F> {
        &self.geocoder
    }
}

impl StopFinder<JsonFetcher> {
    /// Build a finder that talks to the real services.
    pub fn from_config(config: &FinderConfig) -> Result<Self, ConfigError> {
        let fetcher =
            JsonFetcher::new(&config.fetcher).map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Self::new(config.geocoder.clone(), config.stops.clone(), fetcher)
    }
}
